//! CLI commands for senda

pub mod dispatch;
pub mod edges;
pub mod explore;
pub mod helpers;
pub mod nodes;
pub mod path;
pub mod scene;

//! Core library for senda
//!
//! Owns the graph model and everything that operates on it: dataset
//! parsing, circular layout, breadth-first and depth-first path search,
//! the interactive traversal controller, and scene composition for the
//! output layers. The CLI crate stays a thin shell over this one.

pub mod config;
pub mod controller;
pub mod dataset;
pub mod error;
pub mod format;
pub mod graph;
pub mod layout;
pub mod logging;
pub mod records;
pub mod scene;

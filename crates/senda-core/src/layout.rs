//! Circular vertex layout
//!
//! The first vertex sits at the origin; the rest are spaced evenly on a
//! ring around it. Positions are origin-centered — a renderer applies
//! its own screen transform.

use serde::{Deserialize, Serialize};
use std::f32::consts::TAU;

/// A 2D position
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    pub fn new(x: f32, y: f32) -> Self {
        Vec2 { x, y }
    }
}

/// Positions for `count` vertices: index 0 at the origin, indices
/// 1..count spaced evenly on a ring of the given radius.
pub fn ring_layout(count: usize, radius: f32) -> Vec<Vec2> {
    let mut positions = Vec::with_capacity(count);
    if count == 0 {
        return positions;
    }

    positions.push(Vec2::ZERO);
    let spokes = (count - 1) as f32;
    for i in 1..count {
        let theta = TAU * i as f32 / spokes;
        positions.push(Vec2::new(radius * theta.sin(), -radius * theta.cos()));
    }

    positions
}

//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }
}

/// Raw bytes for uploading to a vertex buffer
pub fn as_bytes(vertices: &[Vertex]) -> &[u8] {
    bytemuck::cast_slice(vertices)
}

/// Colors for game elements
pub mod colors {
    pub const BACKGROUND: [f32; 4] = [0.07, 0.08, 0.10, 1.0];
    pub const SAFE_ZONE: [f32; 4] = [0.13, 0.16, 0.20, 1.0];
    pub const LANE_EVEN: [f32; 4] = [0.10, 0.11, 0.13, 1.0];
    pub const LANE_ODD: [f32; 4] = [0.12, 0.13, 0.15, 1.0];
    pub const LANE_DIVIDER: [f32; 4] = [0.22, 0.23, 0.26, 1.0];
    pub const FINISH: [f32; 4] = [1.0, 0.82, 0.35, 1.0];
    pub const FINISH_SHADOW: [f32; 4] = [0.04, 0.04, 0.05, 1.0];
    pub const PLAYER: [f32; 4] = [0.47, 0.86, 1.0, 1.0];
    pub const OUTLINE: [f32; 4] = [0.04, 0.04, 0.05, 1.0];
    pub const HITBOX: [f32; 4] = [1.0, 0.2, 0.2, 0.8];
    /// Fallback car colours, indexed by obstacle variant
    pub const CARS: [[f32; 4]; 4] = [
        [1.0, 0.36, 0.36, 1.0],
        [1.0, 0.65, 0.27, 1.0],
        [1.0, 0.47, 0.82, 1.0],
        [0.47, 1.0, 0.63, 1.0],
    ];
}

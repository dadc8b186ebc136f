//! Scrolling road fill behind the lanes (visual only, never affects gameplay)

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RoadBackground {
    /// Pixels per second; zero keeps the road still
    pub scroll_speed: f32,
    /// Horizontal texture offset in [0, wrap)
    offset: f32,
    /// Width after which the tiled texture repeats
    wrap: f32,
}

impl RoadBackground {
    pub fn new(scroll_speed: f32, wrap: f32) -> Self {
        Self {
            scroll_speed,
            offset: 0.0,
            wrap,
        }
    }

    pub fn reset(&mut self) {
        self.offset = 0.0;
    }

    pub fn offset(&self) -> f32 {
        self.offset
    }

    pub fn update(&mut self, dt: f32) {
        if self.wrap > 0.0 {
            self.offset = (self.offset + self.scroll_speed * dt).rem_euclid(self.wrap);
        }
    }
}

//! Crossy Dash - a lane-crossing arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (lanes, obstacles, player, level state)
//! - `renderer`: Draw-list generation for whatever backend presents the game
//! - `settings`: Presentation preferences
//! - `error`: Errors for the few fallible edges (config and settings files)

pub mod error;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use error::{Error, Result};
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Frame step used by the headless driver (one `update` per 60 Hz frame)
    pub const FRAME_DT: f32 = 1.0 / 60.0;

    /// Playfield dimensions
    pub const SCREEN_WIDTH: f32 = 900.0;
    pub const SCREEN_HEIGHT: f32 = 700.0;

    /// Player defaults
    pub const PLAYER_RADIUS: f32 = 18.0;
    /// Sprite footprint padding around the radius circle
    pub const PLAYER_SPRITE_PAD: f32 = 10.0;
    /// Hitbox shrink, as a fraction of the sprite footprint
    pub const PLAYER_SHRINK_X: f32 = 0.28;
    pub const PLAYER_SHRINK_Y: f32 = 0.32;
    /// Smallest hitbox side, whatever the footprint
    pub const PLAYER_MIN_HITBOX: f32 = 8.0;
    /// Seconds between accepted hops
    pub const HOP_COOLDOWN: f32 = 0.09;

    /// Obstacle hitbox padding (total per axis): max(min, fraction * size)
    pub const OBSTACLE_PAD_X: f32 = 0.16;
    pub const OBSTACLE_PAD_Y: f32 = 0.20;
    pub const OBSTACLE_MIN_PAD_X: f32 = 6.0;
    pub const OBSTACLE_MIN_PAD_Y: f32 = 4.0;

    /// Distance beyond the screen edge where new obstacles enter
    pub const SPAWN_MARGIN: f32 = 20.0;
    /// At most this many obstacles are placed when a lane is reset
    pub const MAX_SEEDED_OBSTACLES: usize = 3;
    /// Largest per-tick correction applied by the lane spacing pass
    pub const MAX_SPACING_NUDGE: f32 = 8.0;

    /// Number of cosmetic obstacle variants (car sprites / colours)
    pub const OBSTACLE_VARIANTS: u8 = 4;
}

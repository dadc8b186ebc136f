//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure and deterministic:
//! - Caller-supplied `dt` only, no wall clock
//! - Seeded RNG only (one stream per lane)
//! - Fixed update order within a tick
//! - No rendering, asset or platform dependencies

pub mod autopilot;
pub mod background;
pub mod collision;
pub mod levels;
pub mod obstacle;
pub mod player;
pub mod rect;
pub mod state;
pub mod tick;

pub use autopilot::Autopilot;
pub use background::RoadBackground;
pub use collision::{Hit, first_hit, obstacle_hitbox};
pub use levels::{LaneConfig, LevelConfig, StarTimes, default_levels, make_level};
pub use obstacle::{Lane, Obstacle};
pub use player::{MoveDir, Player};
pub use rect::Rect;
pub use state::{Level, LevelPhase};
pub use tick::{TickInput, tick};

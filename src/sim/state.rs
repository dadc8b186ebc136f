//! Level state: layout, lifecycle and read-only views for presentation
//!
//! Layout from the bottom of the playfield:
//! - bottom safe zone (one lane tall, the player starts here)
//! - `lane_count` road lanes
//! - the finish line, then the top safe zone
//!
//! A level is constructed idle; `start` puts it into play and may be called
//! again at any time to restart.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::background::RoadBackground;
use super::collision::Hit;
use super::levels::LevelConfig;
use super::obstacle::Lane;
use super::player::Player;
use super::rect::Rect;
use crate::consts::{SCREEN_HEIGHT, SCREEN_WIDTH};

/// Lifecycle of a level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LevelPhase {
    /// Constructed, not started
    Idle,
    /// Simulating
    Running,
    /// Player reached the finish line
    Won,
    /// Player was hit
    Lost,
}

/// One playable level: the player, its lanes and the run's timers and flags
#[derive(Debug, Clone)]
pub struct Level {
    pub config: LevelConfig,
    /// Seed every lane's traffic is derived from
    pub seed: u64,
    /// Whole playfield
    pub playfield: Rect,
    pub player: Player,
    pub background: RoadBackground,
    /// Bottom to top
    pub(crate) lanes: Vec<Lane>,
    pub(crate) elapsed: f32,
    pub(crate) phase: LevelPhase,
    /// Fixed when the win fires
    pub(crate) stars: u8,
    /// Obstacle that ended the run, if any
    pub(crate) hit: Option<Hit>,
}

/// Per-lane seed, decorrelated across lane indices
fn lane_seed(seed: u64, lane: usize) -> u64 {
    seed ^ (lane as u64 + 1).wrapping_mul(2654435761)
}

impl Level {
    /// Build a level on the default playfield
    pub fn new(config: LevelConfig, seed: u64) -> Self {
        Self::with_playfield(config, seed, SCREEN_WIDTH, SCREEN_HEIGHT)
    }

    pub fn with_playfield(config: LevelConfig, seed: u64, width: f32, height: f32) -> Self {
        let playfield = Rect::new(0.0, 0.0, width, height);
        let lane_height = config.lane_height;
        let safe_zone = lane_height;

        let start = Vec2::new(width / 2.0, height - safe_zone / 2.0);
        let player = Player::new(start, config.player_step, playfield);

        let lanes = config
            .lanes
            .iter()
            .enumerate()
            .map(|(i, lane_cfg)| {
                let bottom = height - safe_zone - i as f32 * lane_height;
                let band = Rect::new(0.0, bottom - lane_height, width, lane_height);
                Lane::new(band, lane_cfg, lane_seed(seed, i))
            })
            .collect();

        let background = RoadBackground::new(config.road_scroll_speed, width);

        Self {
            config,
            seed,
            playfield,
            player,
            background,
            lanes,
            elapsed: 0.0,
            phase: LevelPhase::Idle,
            stars: 0,
            hit: None,
        }
    }

    /// Reset every timer and flag, respawn the player and reseed traffic
    pub fn start(&mut self) {
        self.elapsed = 0.0;
        self.phase = LevelPhase::Running;
        self.stars = 0;
        self.hit = None;
        self.player.reset();
        self.background.reset();
        for lane in &mut self.lanes {
            lane.reset();
        }
        log::info!(
            "{} started: {} lanes, seed {}",
            self.config.name,
            self.lanes.len(),
            self.seed
        );
    }

    pub fn phase(&self) -> LevelPhase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase == LevelPhase::Running
    }

    pub fn is_won(&self) -> bool {
        self.phase == LevelPhase::Won
    }

    pub fn is_lost(&self) -> bool {
        self.phase == LevelPhase::Lost
    }

    /// Seconds simulated since `start`
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Stars for a won run; 0 otherwise
    pub fn stars_earned(&self) -> u8 {
        if self.is_won() { self.stars } else { 0 }
    }

    /// The obstacle that ended a lost run
    pub fn hit(&self) -> Option<Hit> {
        self.hit
    }

    /// Lanes bottom to top
    pub fn lanes(&self) -> &[Lane] {
        &self.lanes
    }

    /// Height of each safe zone
    pub fn safe_zone_height(&self) -> f32 {
        self.config.lane_height
    }

    /// Y of the finish line: the top edge of the topmost lane
    pub fn finish_line_y(&self) -> f32 {
        self.playfield.bottom()
            - self.safe_zone_height()
            - self.lanes.len() as f32 * self.config.lane_height
    }

    /// (top, bottom) safe zones
    pub fn safe_zones(&self) -> (Rect, Rect) {
        let h = self.safe_zone_height();
        let w = self.playfield.w;
        let top = Rect::new(0.0, self.playfield.top(), w, h);
        let bottom = Rect::new(0.0, self.playfield.bottom() - h, w, h);
        (top, bottom)
    }

    #[cfg(test)]
    pub(crate) fn lanes_mut(&mut self) -> &mut [Lane] {
        &mut self.lanes
    }
}

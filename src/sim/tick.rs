//! Per-frame level update
//!
//! Order within a tick is fixed: timer, player, background, lanes (bottom to
//! top), collision, finish line. Collision therefore always sees the
//! post-movement positions of both the player and the traffic.

use super::collision::first_hit;
use super::player::MoveDir;
use super::state::{Level, LevelPhase};

/// Input for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Directional presses (key-down edges) seen this frame, in order
    pub moves: Vec<MoveDir>,
    /// Restart the level before simulating (accepted in any phase)
    pub restart: bool,
}

impl TickInput {
    pub fn hop(dir: MoveDir) -> Self {
        Self {
            moves: vec![dir],
            ..Default::default()
        }
    }
}

impl Level {
    /// Advance the level by `dt` seconds. A no-op unless running.
    pub fn update(&mut self, dt: f32, presses: &[MoveDir]) {
        if self.phase != LevelPhase::Running {
            return;
        }

        self.elapsed += dt;

        self.player.update(dt, presses);

        self.background.update(dt);

        let width = self.playfield.w;
        for lane in &mut self.lanes {
            lane.update(dt, width);
        }

        let player_rect = self.player.collision_rect();
        if let Some(hit) = first_hit(&player_rect, &self.lanes) {
            self.hit = Some(hit);
            self.phase = LevelPhase::Lost;
            log::info!(
                "{} lost after {:.2}s (lane {}, obstacle {})",
                self.config.name,
                self.elapsed,
                hit.lane,
                hit.obstacle
            );
            return;
        }

        if self.player.pos.y <= self.finish_line_y() {
            self.stars = self.config.star_times.grade(self.elapsed);
            self.phase = LevelPhase::Won;
            log::info!(
                "{} cleared in {:.2}s: {} stars",
                self.config.name,
                self.elapsed,
                self.stars
            );
        }
    }
}

/// Advance one frame, honouring a restart request first
pub fn tick(level: &mut Level, input: &TickInput, dt: f32) {
    if input.restart {
        level.start();
    }
    level.update(dt, &input.moves);
}

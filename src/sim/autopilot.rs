//! Greedy autopilot for demos and soak runs
//!
//! Each frame it hops toward the finish when the landing spot stays clear for
//! a short lookahead, sidesteps or backs off when its current spot is about
//! to be run over, and otherwise waits. It only reads the level.

use glam::Vec2;

use super::collision::obstacle_hitbox;
use super::player::MoveDir;
use super::state::Level;
use crate::consts::FRAME_DT;

/// Default seconds of traffic the bot looks ahead
pub const LOOKAHEAD: f32 = 0.3;

#[derive(Debug, Clone)]
pub struct Autopilot {
    pub lookahead: f32,
}

impl Default for Autopilot {
    fn default() -> Self {
        Self {
            lookahead: LOOKAHEAD,
        }
    }
}

impl Autopilot {
    /// Choose this frame's press, if any
    pub fn decide(&self, level: &Level) -> Option<MoveDir> {
        if !level.is_running() || !level.player.can_hop_after(FRAME_DT) {
            return None;
        }

        let here = level.player.pos;
        let up = level.player.hop_target(MoveDir::Up);
        if up != here && self.is_clear(level, up) {
            return Some(MoveDir::Up);
        }
        if self.is_clear(level, here) {
            return None;
        }

        // Staying put is about to be fatal: take any clear neighbour
        [MoveDir::Left, MoveDir::Right, MoveDir::Down]
            .into_iter()
            .find(|&dir| {
                let target = level.player.hop_target(dir);
                target != here && self.is_clear(level, target)
            })
    }

    /// True if a player centered at `pos` would not be hit during the lookahead
    pub fn is_clear(&self, level: &Level, pos: Vec2) -> bool {
        let player = level.player.collision_rect_at(pos);
        let samples = (self.lookahead / FRAME_DT).ceil().max(1.0) as usize;

        level.lanes().iter().all(|lane| {
            lane.obstacles().iter().all(|obstacle| {
                (0..=samples).all(|i| {
                    let t = i as f32 * FRAME_DT;
                    let mut rect = obstacle.rect;
                    rect.translate_x(obstacle.velocity() * t);
                    !obstacle_hitbox(&rect).intersects(&player)
                })
            })
        })
    }
}

//! The player: a discrete, cooldown-gated hopper
//!
//! Position is the logical center. The collision rect is derived from it on
//! demand and is always smaller than the sprite footprint drawn around it.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::consts::{
    HOP_COOLDOWN, PLAYER_MIN_HITBOX, PLAYER_RADIUS, PLAYER_SHRINK_X, PLAYER_SHRINK_Y,
    PLAYER_SPRITE_PAD,
};

/// A directional press (key-down edge) from the input source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveDir {
    Up,
    Down,
    Left,
    Right,
}

impl MoveDir {
    /// Unit offset in screen space (y grows downward)
    pub fn offset(self) -> Vec2 {
        match self {
            MoveDir::Up => Vec2::new(0.0, -1.0),
            MoveDir::Down => Vec2::new(0.0, 1.0),
            MoveDir::Left => Vec2::new(-1.0, 0.0),
            MoveDir::Right => Vec2::new(1.0, 0.0),
        }
    }

    /// Parse one character of a move script: `u`/`w`/`^` up, `d`/`s`/`v` down,
    /// `l`/`a`/`<` left, `r`/`>` right (case-insensitive)
    pub fn from_key(key: char) -> Option<Self> {
        match key.to_ascii_lowercase() {
            'u' | 'w' | '^' => Some(MoveDir::Up),
            'd' | 's' | 'v' => Some(MoveDir::Down),
            'l' | 'a' | '<' => Some(MoveDir::Left),
            'r' | '>' => Some(MoveDir::Right),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Spawn position, restored by `reset`
    pub start: Vec2,
    /// Logical center
    pub pos: Vec2,
    /// Pixels per hop
    pub step: f32,
    /// Fallback circle radius; also the clamping margin
    pub radius: f32,
    /// Playfield the center is clamped into
    pub bounds: Rect,
    /// Seconds until the next hop is accepted
    cooldown: f32,
}

impl Player {
    pub fn new(start: Vec2, step: f32, bounds: Rect) -> Self {
        Self {
            start,
            pos: start,
            step,
            radius: PLAYER_RADIUS,
            bounds,
            cooldown: 0.0,
        }
    }

    pub fn reset(&mut self) {
        self.pos = self.start;
        self.cooldown = 0.0;
    }

    pub fn cooldown(&self) -> f32 {
        self.cooldown
    }

    /// True if a hop would be accepted this tick (after `dt` elapses)
    pub fn can_hop_after(&self, dt: f32) -> bool {
        self.cooldown - dt <= 0.0
    }

    /// Nominal sprite footprint centered on the position
    pub fn footprint(&self) -> Rect {
        let side = self.radius * 2.0 + PLAYER_SPRITE_PAD;
        Rect::from_center(self.pos, side, side)
    }

    /// Collision rect: the footprint shrunk per axis, never below the minimum side
    pub fn collision_rect(&self) -> Rect {
        self.collision_rect_at(self.pos)
    }

    /// Collision rect the player would have if centered at `pos`
    pub fn collision_rect_at(&self, pos: Vec2) -> Rect {
        let side = self.radius * 2.0 + PLAYER_SPRITE_PAD;
        let w = (side - side * PLAYER_SHRINK_X).max(PLAYER_MIN_HITBOX);
        let h = (side - side * PLAYER_SHRINK_Y).max(PLAYER_MIN_HITBOX);
        Rect::from_center(pos, w, h)
    }

    /// Where a hop in `dir` would land, after clamping
    pub fn hop_target(&self, dir: MoveDir) -> Vec2 {
        self.bounds
            .clamp_point(self.pos + dir.offset() * self.step, self.radius)
    }

    /// Tick the cooldown and apply at most one hop from this tick's presses.
    ///
    /// Returns true if the player moved.
    pub fn update(&mut self, dt: f32, presses: &[MoveDir]) -> bool {
        self.cooldown = (self.cooldown - dt).max(0.0);

        let mut hopped = false;
        for &dir in presses {
            if self.cooldown > 0.0 {
                break;
            }
            self.pos += dir.offset() * self.step;
            self.cooldown = HOP_COOLDOWN;
            hopped = true;
        }

        self.pos = self.bounds.clamp_point(self.pos, self.radius);
        hopped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player() -> Player {
        Player::new(
            Vec2::new(450.0, 665.0),
            70.0,
            Rect::new(0.0, 0.0, 900.0, 700.0),
        )
    }

    #[test]
    fn test_hop_moves_exactly_one_step() {
        let mut p = player();
        assert!(p.update(0.016, &[MoveDir::Up]));
        assert_eq!(p.pos, Vec2::new(450.0, 595.0));
        assert!(p.update(0.2, &[MoveDir::Left]));
        assert_eq!(p.pos, Vec2::new(380.0, 595.0));
    }

    #[test]
    fn test_cooldown_gates_hops() {
        let mut p = player();
        // Two presses in one tick: only the first counts
        p.update(0.016, &[MoveDir::Up, MoveDir::Up]);
        assert_eq!(p.pos.y, 595.0);
        // Too soon for another hop
        assert!(!p.update(0.05, &[MoveDir::Up]));
        assert_eq!(p.pos.y, 595.0);
        // Cooldown elapsed
        assert!(p.update(0.05, &[MoveDir::Up]));
        assert_eq!(p.pos.y, 525.0);
    }

    #[test]
    fn test_no_press_no_move() {
        let mut p = player();
        for _ in 0..100 {
            assert!(!p.update(0.016, &[]));
        }
        assert_eq!(p.pos, p.start);
    }

    #[test]
    fn test_clamped_to_bounds() {
        let mut p = player();
        p.update(0.2, &[MoveDir::Down]);
        assert_eq!(p.pos.y, 700.0 - PLAYER_RADIUS);
        for _ in 0..20 {
            p.update(0.2, &[MoveDir::Left]);
        }
        assert_eq!(p.pos.x, PLAYER_RADIUS);
        assert!(p.bounds.clamp_point(p.pos, p.radius) == p.pos);
    }

    #[test]
    fn test_reset_restores_start() {
        let mut p = player();
        p.update(0.016, &[MoveDir::Up]);
        p.reset();
        assert_eq!(p.pos, p.start);
        assert_eq!(p.cooldown(), 0.0);
    }

    #[test]
    fn test_collision_rect_smaller_than_footprint() {
        let p = player();
        let hitbox = p.collision_rect();
        let footprint = p.footprint();
        assert!(hitbox.w < footprint.w);
        assert!(hitbox.h < footprint.h);
        assert_eq!(hitbox.center(), p.pos);
        assert!(footprint.contains_rect(&hitbox));
    }

    #[test]
    fn test_from_key() {
        assert_eq!(MoveDir::from_key('W'), Some(MoveDir::Up));
        assert_eq!(MoveDir::from_key('r'), Some(MoveDir::Right));
        assert_eq!(MoveDir::from_key('.'), None);
    }
}

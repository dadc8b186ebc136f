//! Hitbox derivation and player-vs-traffic collision
//!
//! Both sides of every test are shrunken views of the visual rectangles, so
//! pixels that merely look close never count as a hit. Obstacles shrink less
//! than the player does, which biases near misses in the player's favour.

use super::obstacle::{Lane, Obstacle};
use super::rect::Rect;
use crate::consts::{OBSTACLE_MIN_PAD_X, OBSTACLE_MIN_PAD_Y, OBSTACLE_PAD_X, OBSTACLE_PAD_Y};

/// A hit between the player and one obstacle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    /// Index of the lane (bottom to top)
    pub lane: usize,
    /// Index of the obstacle within the lane (front-most first)
    pub obstacle: usize,
}

/// Shrink an obstacle's visual rect to the car body used for collision
pub fn obstacle_hitbox(rect: &Rect) -> Rect {
    let pad_x = (rect.w * OBSTACLE_PAD_X).max(OBSTACLE_MIN_PAD_X);
    let pad_y = (rect.h * OBSTACLE_PAD_Y).max(OBSTACLE_MIN_PAD_Y);
    rect.inflate(-pad_x, -pad_y)
}

impl Obstacle {
    pub fn hitbox(&self) -> Rect {
        obstacle_hitbox(&self.rect)
    }
}

/// First obstacle (lane order, then travel order) whose hitbox overlaps `player`
pub fn first_hit(player: &Rect, lanes: &[Lane]) -> Option<Hit> {
    lanes.iter().enumerate().find_map(|(lane_idx, lane)| {
        // Lanes are horizontal bands; skip ones the player cannot reach
        let reach = lane.band.inflate(0.0, lane.obstacle_size().1);
        if !reach.intersects(player) {
            return None;
        }
        lane.obstacles()
            .iter()
            .position(|o| o.hitbox().intersects(player))
            .map(|obstacle| Hit {
                lane: lane_idx,
                obstacle,
            })
    })
}

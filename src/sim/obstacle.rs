//! Obstacles and the lanes that spawn, space and cull them
//!
//! A lane keeps its obstacles in travel order: index 0 is the front-most
//! obstacle (furthest along the direction of travel) and new spawns are
//! appended at the back, so the last obstacle is always the one nearest the
//! spawn edge.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::levels::LaneConfig;
use super::rect::Rect;
use crate::consts::{MAX_SEEDED_OBSTACLES, MAX_SPACING_NUDGE, OBSTACLE_VARIANTS, SPAWN_MARGIN};

/// A moving rectangle travelling horizontally at constant speed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub rect: Rect,
    /// Pixels per second, never negative
    speed: f32,
    /// +1 moves right, -1 moves left; fixed for the obstacle's lifetime
    direction: i8,
    /// Cosmetic variant (sprite or colour index)
    pub variant: u8,
}

impl Obstacle {
    pub fn new(rect: Rect, speed: f32, direction: i8, variant: u8) -> Self {
        Self {
            rect,
            speed: speed.max(0.0),
            direction: if direction >= 0 { 1 } else { -1 },
            variant,
        }
    }

    pub fn direction(&self) -> i8 {
        self.direction
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    /// Signed horizontal velocity (pixels per second)
    pub fn velocity(&self) -> f32 {
        self.direction as f32 * self.speed
    }

    /// Move along the direction of travel. No bounds checks; the lane culls.
    pub fn advance(&mut self, dt: f32) {
        self.rect.translate_x(self.velocity() * dt);
    }

    /// True once the obstacle has left the screen on its exit side with a
    /// further full width of clearance, so it is certainly invisible
    pub fn is_offscreen(&self, screen_width: f32) -> bool {
        if self.direction > 0 {
            self.rect.left() >= screen_width + self.rect.w
        } else {
            self.rect.right() <= -self.rect.w
        }
    }
}

/// A horizontal band hosting one stream of same-direction obstacles
#[derive(Debug, Clone)]
pub struct Lane {
    /// Full-width band this lane occupies
    pub band: Rect,
    direction: i8,
    speed: f32,
    spawn_interval: f32,
    min_gap: f32,
    obstacle_width: f32,
    obstacle_height: f32,
    obstacles: Vec<Obstacle>,
    spawn_timer: f32,
    seed: u64,
    rng: Pcg32,
}

impl Lane {
    pub fn new(band: Rect, config: &LaneConfig, seed: u64) -> Self {
        Self {
            band,
            direction: if config.direction >= 0 { 1 } else { -1 },
            speed: config.speed.max(0.0),
            spawn_interval: config.spawn_interval,
            min_gap: config.min_gap,
            obstacle_width: config.obstacle_width,
            obstacle_height: config.obstacle_height,
            obstacles: Vec::new(),
            spawn_timer: 0.0,
            seed,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    pub fn direction(&self) -> i8 {
        self.direction
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn min_gap(&self) -> f32 {
        self.min_gap
    }

    pub fn spawn_interval(&self) -> f32 {
        self.spawn_interval
    }

    pub fn obstacle_size(&self) -> (f32, f32) {
        (self.obstacle_width, self.obstacle_height)
    }

    /// Obstacles in travel order (front-most first)
    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    /// Top edge for obstacles, vertically centered in the band
    fn obstacle_top(&self) -> f32 {
        self.band.center().y - self.obstacle_height / 2.0
    }

    /// Left edge of a fresh spawn with no traffic in the way
    fn spawn_x(&self, screen_width: f32) -> f32 {
        if self.direction > 0 {
            -self.obstacle_width - SPAWN_MARGIN
        } else {
            screen_width + SPAWN_MARGIN
        }
    }

    fn make_obstacle(&mut self, x: f32) -> Obstacle {
        let rect = Rect::new(x, self.obstacle_top(), self.obstacle_width, self.obstacle_height);
        let variant = self.rng.random_range(0..OBSTACLE_VARIANTS);
        Obstacle::new(rect, self.speed, self.direction, variant)
    }

    /// Clear all traffic and seed 1-3 non-overlapping obstacles on screen.
    ///
    /// The RNG is re-derived from the lane seed, so repeated resets are identical.
    pub fn reset(&mut self) {
        self.obstacles.clear();
        self.spawn_timer = 0.0;
        self.rng = Pcg32::seed_from_u64(self.seed);

        let visible = self.band.w;
        let pitch = self.obstacle_width + self.min_gap;
        let fit = ((visible + self.min_gap) / pitch).floor().max(1.0) as usize;
        let count = fit.min(MAX_SEEDED_OBSTACLES);

        // Leftover room once `count` obstacles sit at exactly min_gap spacing.
        // Sorted offsets into that slack keep every pair at least min_gap apart.
        let slack = (visible - count as f32 * pitch + self.min_gap).max(0.0);
        let mut offsets: Vec<f32> = (0..count)
            .map(|_| self.rng.random_range(0.0..=slack))
            .collect();
        offsets.sort_by(f32::total_cmp);

        let mut xs: Vec<f32> = offsets
            .iter()
            .enumerate()
            .map(|(i, off)| self.band.left() + off + i as f32 * pitch)
            .collect();
        // Front-most first: rightmost when moving right
        if self.direction > 0 {
            xs.reverse();
        }
        for x in xs {
            let obstacle = self.make_obstacle(x);
            self.obstacles.push(obstacle);
        }
    }

    /// True if a new obstacle entering at the spawn edge would keep min_gap
    /// to the obstacle nearest that edge
    pub fn can_spawn(&self, screen_width: f32) -> bool {
        let Some(nearest) = self.obstacles.last() else {
            return true;
        };
        let clearance = self.min_gap + self.obstacle_width;
        if self.direction > 0 {
            nearest.rect.left() - self.spawn_x(screen_width) >= clearance
        } else {
            self.spawn_x(screen_width) + self.obstacle_width - nearest.rect.right() >= clearance
        }
    }

    /// Spawn at the off-screen entry edge if there is room.
    ///
    /// Returns whether an obstacle was added.
    pub fn spawn(&mut self, screen_width: f32) -> bool {
        if !self.can_spawn(screen_width) {
            return false;
        }
        let base = self.spawn_x(screen_width);
        let x = match self.obstacles.last() {
            Some(nearest) if self.direction > 0 => {
                base.min(nearest.rect.left() - self.min_gap - self.obstacle_width)
            }
            Some(nearest) => base.max(nearest.rect.right() + self.min_gap),
            None => base,
        };
        let obstacle = self.make_obstacle(x);
        self.obstacles.push(obstacle);
        true
    }

    /// Seconds accumulated toward the next spawn attempt
    pub fn spawn_timer(&self) -> f32 {
        self.spawn_timer
    }

    /// Advance traffic one tick: move, restore spacing, cull, then spawn
    pub fn update(&mut self, dt: f32, screen_width: f32) {
        self.step_traffic(dt, screen_width);

        self.spawn_timer += dt;
        if self.spawn_timer >= self.spawn_interval {
            self.spawn_timer = 0.0;
            if !self.spawn(screen_width) {
                log::debug!("lane spawn skipped: entry edge blocked");
            }
        }
    }

    /// Move every obstacle, restore spacing and drop what has left the screen
    pub fn step_traffic(&mut self, dt: f32, screen_width: f32) {
        for obstacle in &mut self.obstacles {
            obstacle.advance(dt);
        }
        self.restore_spacing();
        self.obstacles.retain(|o| !o.is_offscreen(screen_width));
    }

    /// Push any obstacle that has crept inside min_gap of the one ahead back
    /// toward its place. Each nudge is capped at MAX_SPACING_NUDGE per tick.
    fn restore_spacing(&mut self) {
        let gap = self.min_gap;
        for i in 1..self.obstacles.len() {
            let (ahead, behind) = self.obstacles.split_at_mut(i);
            let front = &ahead[i - 1].rect;
            let back = &mut behind[0].rect;

            let deficit = if self.direction > 0 {
                back.right() - (front.left() - gap)
            } else {
                (front.right() + gap) - back.left()
            };
            if deficit <= 0.0 {
                continue;
            }
            let nudge = deficit.min(MAX_SPACING_NUDGE);
            if nudge < deficit {
                log::debug!("spacing deficit {:.2}px exceeds nudge cap, correcting over several ticks", deficit);
            }
            back.translate_x(-(self.direction as f32) * nudge);
        }
    }

    /// Gap between each consecutive pair, in travel order
    pub fn gaps(&self) -> Vec<f32> {
        self.obstacles
            .windows(2)
            .map(|pair| {
                if self.direction > 0 {
                    pair[0].rect.left() - pair[1].rect.right()
                } else {
                    pair[1].rect.left() - pair[0].rect.right()
                }
            })
            .collect()
    }

    #[cfg(test)]
    pub(crate) fn obstacles_mut(&mut self) -> &mut Vec<Obstacle> {
        &mut self.obstacles
    }
}

//! Level difficulty generation
//!
//! Difficulty rises with the level number through:
//! - more lanes, each a little shorter
//! - faster traffic (and faster again in higher lanes)
//! - denser spawns
//! - slightly smaller gaps, never below a safety floor
//! - tighter 3-star / 2-star time thresholds

use serde::{Deserialize, Serialize};

use crate::consts::SCREEN_HEIGHT;
use crate::error::{Error, Result};

/// Highest level the generator produces; larger inputs are clamped
pub const MAX_LEVEL: u32 = 10;
/// Number of levels in the default table
pub const DEFAULT_LEVEL_COUNT: u32 = 5;
/// Smallest gap between consecutive obstacles at any difficulty
pub const MIN_GAP_FLOOR: f32 = 95.0;
/// Fastest spawn interval at any difficulty (seconds)
pub const MIN_SPAWN_INTERVAL: f32 = 0.55;

/// Traffic parameters for a single lane
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaneConfig {
    /// +1 moves right, -1 moves left
    pub direction: i8,
    /// Pixels per second
    pub speed: f32,
    /// Seconds between spawn attempts
    pub spawn_interval: f32,
    /// Minimum spacing between consecutive obstacles (pixels)
    pub min_gap: f32,
    pub obstacle_width: f32,
    pub obstacle_height: f32,
}

/// Elapsed-time cutoffs for star awards (seconds, ascending)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StarTimes {
    /// At or under this time: 3 stars
    pub three: f32,
    /// At or under this time: 2 stars, otherwise 1
    pub two: f32,
}

impl StarTimes {
    /// Stars for a completed run
    pub fn grade(&self, elapsed: f32) -> u8 {
        if elapsed <= self.three {
            3
        } else if elapsed <= self.two {
            2
        } else {
            1
        }
    }
}

/// Immutable difficulty description of one level
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelConfig {
    pub name: String,
    pub lane_count: u32,
    pub lane_height: f32,
    /// Pixels per hop; matches the lane height so one hop crosses one lane
    pub player_step: f32,
    pub star_times: StarTimes,
    /// Lane-fill scroll speed; visual only
    #[serde(default)]
    pub road_scroll_speed: f32,
    /// Bottom (index 0) to top
    pub lanes: Vec<LaneConfig>,
}

/// Generate the config for level `n` (clamped to 1..=MAX_LEVEL)
pub fn make_level(n: u32) -> LevelConfig {
    let n = n.clamp(1, MAX_LEVEL);
    let k = (n - 1) as f32;

    let lane_count = 5 + n;
    // Keep bottom safe zone + lanes + top safe zone on screen so the finish line is reachable
    let fit_height = (SCREEN_HEIGHT / (lane_count + 2) as f32).floor();
    let lane_height = (70.0 - k).min(fit_height);

    let three = (13.0 - k * 0.4).max(8.0);
    let two = (20.0 - k * 0.45).max(12.0);

    // Top-view car proportions: a bit taller than the lane, ~1.5x as long
    let obstacle_height = (lane_height * 1.15).floor().max(26.0);
    let obstacle_width = (obstacle_height * 1.49).floor().max(90.0);

    let lanes = (0..lane_count)
        .map(|idx| {
            let i = idx as f32;
            LaneConfig {
                direction: if idx % 2 == 0 { 1 } else { -1 },
                speed: 170.0 + k * 28.0 + i * 6.0,
                spawn_interval: (1.25 - k * 0.06 - i * 0.01).max(MIN_SPAWN_INTERVAL),
                min_gap: (165.0 - k * 6.0 - i).max(MIN_GAP_FLOOR),
                obstacle_width,
                obstacle_height,
            }
        })
        .collect();

    LevelConfig {
        name: format!("Level {}", n),
        lane_count,
        lane_height,
        player_step: lane_height,
        star_times: StarTimes { three, two },
        road_scroll_speed: 0.0,
        lanes,
    }
}

/// The shipped level table (levels 1..=5)
pub fn default_levels() -> Vec<LevelConfig> {
    (1..=DEFAULT_LEVEL_COUNT).map(make_level).collect()
}

impl LevelConfig {
    /// Parse a custom level from JSON and check it
    pub fn from_json(json: &str) -> Result<Self> {
        let config: LevelConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the invariants the generator guarantees.
    ///
    /// The simulation assumes these hold and does not re-check them per tick.
    pub fn validate(&self) -> Result<()> {
        let invalid = |reason: String| Err(Error::InvalidConfig(reason));

        if self.lane_count == 0 {
            return invalid("lane_count must be positive".into());
        }
        if self.lanes.len() != self.lane_count as usize {
            return invalid(format!(
                "lane_count is {} but {} lanes are listed",
                self.lane_count,
                self.lanes.len()
            ));
        }
        if self.lane_height <= 0.0 || self.player_step <= 0.0 {
            return invalid("lane_height and player_step must be positive".into());
        }
        let used = (self.lane_count + 2) as f32 * self.lane_height;
        if used > SCREEN_HEIGHT {
            return invalid(format!(
                "{} lanes of height {} do not fit on a {} px playfield",
                self.lane_count, self.lane_height, SCREEN_HEIGHT
            ));
        }
        if !(self.star_times.three > 0.0 && self.star_times.three <= self.star_times.two) {
            return invalid("star_times must be positive and ascending".into());
        }
        for (i, lane) in self.lanes.iter().enumerate() {
            if lane.direction != 1 && lane.direction != -1 {
                return invalid(format!("lane {}: direction must be +1 or -1", i));
            }
            if lane.speed < 0.0 {
                return invalid(format!("lane {}: negative speed", i));
            }
            if lane.spawn_interval <= 0.0 {
                return invalid(format!("lane {}: spawn_interval must be positive", i));
            }
            if lane.obstacle_width <= 0.0 || lane.obstacle_height <= 0.0 {
                return invalid(format!("lane {}: obstacle size must be positive", i));
            }
            if lane.min_gap < MIN_GAP_FLOOR {
                return invalid(format!(
                    "lane {}: min_gap {} below floor {}",
                    i, lane.min_gap, MIN_GAP_FLOOR
                ));
            }
        }
        Ok(())
    }

    /// Base speed of the slowest lane
    pub fn base_speed(&self) -> f32 {
        self.lanes.iter().map(|l| l.speed).fold(f32::INFINITY, f32::min)
    }

    /// Longest spawn interval across lanes
    pub fn max_spawn_interval(&self) -> f32 {
        self.lanes.iter().map(|l| l.spawn_interval).fold(0.0, f32::max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_level_one_values() {
        let cfg = make_level(1);
        assert_eq!(cfg.name, "Level 1");
        assert_eq!(cfg.lane_count, 6);
        assert_eq!(cfg.lanes.len(), 6);
        assert_eq!(cfg.lane_height, 70.0);
        assert_eq!(cfg.player_step, cfg.lane_height);
        assert_eq!(cfg.lanes[0].direction, 1);
        assert_eq!(cfg.lanes[1].direction, -1);
        assert_eq!(cfg.lanes[0].speed, 170.0);
        assert_eq!(cfg.lanes[2].speed, 182.0);
        assert_eq!(cfg.lanes[0].min_gap, 165.0);
        assert_eq!(cfg.lanes[0].obstacle_height, 80.0);
        assert_eq!(cfg.lanes[0].obstacle_width, 119.0);
        assert_eq!(cfg.star_times, StarTimes { three: 13.0, two: 20.0 });
    }

    #[test]
    fn test_default_table() {
        let levels = default_levels();
        assert_eq!(levels.len(), 5);
        for (i, cfg) in levels.iter().enumerate() {
            assert_eq!(cfg, &make_level(i as u32 + 1));
            assert!(cfg.validate().is_ok(), "{} invalid", cfg.name);
        }
    }

    #[test]
    fn test_out_of_range_is_clamped() {
        assert_eq!(make_level(0), make_level(1));
        assert_eq!(make_level(42), make_level(MAX_LEVEL));
    }

    #[test]
    fn test_every_level_fits_playfield() {
        for n in 1..=MAX_LEVEL {
            let cfg = make_level(n);
            assert!((cfg.lane_count + 2) as f32 * cfg.lane_height <= SCREEN_HEIGHT);
            assert!(cfg.validate().is_ok());
        }
    }

    #[test]
    fn test_higher_lanes_are_faster() {
        let cfg = make_level(3);
        for pair in cfg.lanes.windows(2) {
            assert!(pair[1].speed > pair[0].speed);
        }
    }

    #[test]
    fn test_grade() {
        let stars = StarTimes { three: 10.0, two: 15.0 };
        assert_eq!(stars.grade(10.0), 3);
        assert_eq!(stars.grade(10.5), 2);
        assert_eq!(stars.grade(15.0), 2);
        assert_eq!(stars.grade(16.0), 1);
    }

    #[test]
    fn test_from_json_round_trip_and_reject() {
        let cfg = make_level(2);
        let json = serde_json::to_string(&cfg).unwrap();
        assert_eq!(LevelConfig::from_json(&json).unwrap(), cfg);

        let mut broken = cfg.clone();
        broken.lanes[1].speed = -5.0;
        let json = serde_json::to_string(&broken).unwrap();
        assert!(matches!(
            LevelConfig::from_json(&json),
            Err(Error::InvalidConfig(_))
        ));

        assert!(matches!(LevelConfig::from_json("{"), Err(Error::Json(_))));
    }

    #[test]
    fn test_validate_rejects_tight_gap_and_bad_stars() {
        let mut cfg = make_level(1);
        cfg.lanes[0].min_gap = 10.0;
        assert!(cfg.validate().is_err());

        let mut cfg = make_level(1);
        cfg.star_times = StarTimes { three: 20.0, two: 10.0 };
        assert!(cfg.validate().is_err());

        let mut cfg = make_level(1);
        cfg.lane_count = 0;
        cfg.lanes.clear();
        assert!(cfg.validate().is_err());
    }

    proptest! {
        #[test]
        fn prop_difficulty_is_monotonic(n in 1u32..MAX_LEVEL) {
            let easy = make_level(n);
            let hard = make_level(n + 1);
            prop_assert!(hard.lane_count >= easy.lane_count);
            prop_assert!(hard.lane_height <= easy.lane_height);
            prop_assert!(hard.base_speed() >= easy.base_speed());
            prop_assert!(hard.max_spawn_interval() <= easy.max_spawn_interval());
            prop_assert!(hard.star_times.three <= easy.star_times.three);
            prop_assert!(hard.star_times.two <= easy.star_times.two);
            for (lane_hard, lane_easy) in hard.lanes.iter().zip(&easy.lanes) {
                prop_assert!(lane_hard.speed >= lane_easy.speed);
                prop_assert!(lane_hard.spawn_interval <= lane_easy.spawn_interval);
            }
        }

        #[test]
        fn prop_gap_floor_and_step(n in 1u32..=20) {
            let cfg = make_level(n);
            prop_assert_eq!(cfg.player_step, cfg.lane_height);
            prop_assert!(cfg.star_times.three <= cfg.star_times.two);
            for lane in &cfg.lanes {
                prop_assert!(lane.min_gap >= MIN_GAP_FLOOR);
                prop_assert!(lane.spawn_interval >= MIN_SPAWN_INTERVAL);
            }
            prop_assert_eq!(make_level(n), cfg);
        }
    }
}

//! Crossy Dash headless runner
//!
//! Plays one level at a fixed frame rate, driven either by a key script or by
//! the autopilot, and prints how the run ended.
//!
//! Usage:
//!   crossy-dash --level 2 --autopilot
//!   crossy-dash --seed 7 --script "uuu..ll.uu" --json

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use serde::Serialize;

use crossy_dash::Settings;
use crossy_dash::consts::FRAME_DT;
use crossy_dash::renderer::{AssetManifest, SceneBuilder, tessellate};
use crossy_dash::sim::{
    Autopilot, Level, LevelConfig, LevelPhase, MoveDir, TickInput, make_level, tick,
};

#[derive(Parser)]
#[command(name = "crossy-dash")]
#[command(about = "Run a Crossy Dash level without a window")]
struct Args {
    /// Level number (clamped to the generated range)
    #[arg(long, default_value_t = 1)]
    level: u32,

    /// Load the level from a JSON file instead of generating it
    #[arg(long, conflicts_with = "level")]
    level_file: Option<PathBuf>,

    /// Traffic seed; overrides the settings file. Without either, generated
    /// levels derive it from the level number and level files from their name
    #[arg(long)]
    seed: Option<u64>,

    /// Frames to simulate before giving up
    #[arg(long, default_value_t = 3600)]
    frames: u32,

    /// One character per frame: u/w/^ d/s/v l/a/< r/>, anything else waits
    #[arg(long, conflicts_with = "autopilot")]
    script: Option<String>,

    /// Let the autopilot play
    #[arg(long)]
    autopilot: bool,

    /// Settings file
    #[arg(long, default_value = "crossy_dash_settings.json")]
    settings: PathBuf,

    /// Print the summary as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Serialize)]
struct RunSummary {
    level: String,
    seed: u64,
    frames: u32,
    elapsed: f32,
    phase: LevelPhase,
    stars: u8,
    /// Obstacle that ended the run as (lane, index)
    hit: Option<(usize, usize)>,
    /// Road scroll offset in the final frame
    road_offset: f32,
    /// Primitive vertices in the final frame
    vertices: usize,
}

fn load_config(args: &Args) -> Result<LevelConfig> {
    match &args.level_file {
        Some(path) => {
            let json = fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            let config = LevelConfig::from_json(&json)
                .with_context(|| format!("invalid level in {}", path.display()))?;
            Ok(config)
        }
        None => Ok(make_level(args.level)),
    }
}

fn run(args: &Args) -> Result<RunSummary> {
    if args.frames == 0 {
        return Err(anyhow!("frames must be > 0"));
    }

    let settings = Settings::load_from(&args.settings);
    let config = load_config(args)?;
    let seed = args.seed.unwrap_or_else(|| match args.level_file {
        Some(_) => settings.seed_for_name(&config.name),
        None => settings.seed_for(args.level),
    });

    let mut level = Level::new(config, seed);
    if settings.reduced_motion {
        level.background.scroll_speed = 0.0;
    }

    let script: Vec<char> = args.script.as_deref().unwrap_or_default().chars().collect();
    let bot = args.autopilot.then(Autopilot::default);

    let mut frames = 0;
    let mut input = TickInput {
        restart: true,
        ..Default::default()
    };
    while frames < args.frames {
        input.moves.clear();
        let press = match &bot {
            Some(bot) => bot.decide(&level),
            None => script.get(frames as usize).copied().and_then(MoveDir::from_key),
        };
        input.moves.extend(press);

        tick(&mut level, &input, FRAME_DT);
        input.restart = false;
        frames += 1;

        if !level.is_running() {
            break;
        }
    }

    let scene = SceneBuilder::new(&AssetManifest::default(), &settings);
    let vertices = tessellate(&scene.build(&level)).len();

    Ok(RunSummary {
        level: level.config.name.clone(),
        seed,
        frames,
        elapsed: level.elapsed(),
        phase: level.phase(),
        stars: level.stars_earned(),
        hit: level.hit().map(|h| (h.lane, h.obstacle)),
        road_offset: level.background.offset(),
        vertices,
    })
}

fn main() -> Result<()> {
    #[cfg(not(target_arch = "wasm32"))]
    env_logger::init();

    let args = Args::parse();
    let summary = run(&args)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    println!("=== {} ===", summary.level);
    println!("  Seed:     {}", summary.seed);
    println!("  Frames:   {}", summary.frames);
    println!("  Elapsed:  {:.2}s", summary.elapsed);
    println!("  Result:   {:?}", summary.phase);
    if let Some((lane, obstacle)) = summary.hit {
        println!("  Hit by:   lane {lane}, obstacle {obstacle}");
    }
    println!("  Stars:    {}", summary.stars);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("crossy_dash_{}_{}.json", name, std::process::id()))
    }

    fn args() -> Args {
        Args {
            level: 1,
            level_file: None,
            seed: Some(5),
            frames: 3600,
            script: None,
            autopilot: false,
            settings: PathBuf::from("/definitely/not/here/settings.json"),
            json: false,
        }
    }

    /// Level 1 whose seeded traffic leaves the screen on the first tick and
    /// never respawns, with a scrolling road
    fn write_quiet_level(name: &str) -> PathBuf {
        let mut config = make_level(1);
        config.name = "Quiet Road".into();
        config.road_scroll_speed = 120.0;
        for lane in &mut config.lanes {
            lane.speed = 1.0e5;
            lane.spawn_interval = 1.0e6;
        }
        let path = temp_path(name);
        fs::write(&path, serde_json::to_string(&config).unwrap()).unwrap();
        path
    }

    #[test]
    fn test_script_crosses_quiet_level() {
        let level_file = write_quiet_level("quiet_win");
        let summary = run(&Args {
            level_file: Some(level_file.clone()),
            seed: None,
            script: Some("u".repeat(200)),
            ..args()
        })
        .unwrap();
        let _ = fs::remove_file(&level_file);

        assert_eq!(summary.phase, LevelPhase::Won);
        assert!(summary.stars >= 1);
        assert!(summary.frames < 200);
        assert_eq!(summary.hit, None);
        assert!(summary.road_offset > 0.0);
        assert!(summary.vertices > 0);
        assert_eq!(summary.level, "Quiet Road");
        assert_eq!(summary.seed, Settings::default().seed_for_name("Quiet Road"));
    }

    #[test]
    fn test_reduced_motion_freezes_road() {
        let level_file = write_quiet_level("quiet_still");
        let settings_file = temp_path("still_settings");
        let settings = Settings {
            reduced_motion: true,
            ..Default::default()
        };
        settings.save_to(&settings_file).unwrap();

        let summary = run(&Args {
            level_file: Some(level_file.clone()),
            settings: settings_file.clone(),
            script: Some("u".repeat(200)),
            ..args()
        })
        .unwrap();
        let _ = fs::remove_file(&level_file);
        let _ = fs::remove_file(&settings_file);

        assert_eq!(summary.phase, LevelPhase::Won);
        assert_eq!(summary.road_offset, 0.0);
    }

    #[test]
    fn test_stops_at_frame_limit() {
        // Standing in the bottom safe zone never ends the level
        let summary = run(&Args {
            frames: 10,
            ..args()
        })
        .unwrap();
        assert_eq!(summary.frames, 10);
        assert_eq!(summary.phase, LevelPhase::Running);
        assert_eq!(summary.stars, 0);
        assert_eq!(summary.seed, 5);
    }

    #[test]
    fn test_zero_frames_rejected() {
        assert!(run(&Args { frames: 0, ..args() }).is_err());
    }

    #[test]
    fn test_missing_level_file_is_an_error() {
        let result = run(&Args {
            level_file: Some(PathBuf::from("/definitely/not/here/level.json")),
            ..args()
        });
        assert!(result.is_err());
    }
}

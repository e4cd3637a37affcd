//! mousepath command-line entry point.
//!
//! Moves the mouse cursor along a generated shape, to a point, or jitters it
//! in place.
//!
//! # Usage
//!
//! ```text
//! mousepath [OPTIONS] <COMMAND>
//!
//! Commands:
//!   center           Move to the screen center
//!   goto             Move to absolute coordinates
//!   relative         Move by an offset from the current position
//!   position         Print the current cursor position
//!   circle | square | triangle | star | spiral | wave | heart | figure-eight
//!                    Trace a shape centered on the screen
//!   random-walk      Wander from the current position
//!   random-position  Jump to a random point away from the edges
//!   shake            Jitter around the current position
//!   stop             Park the cursor in the top-left corner
//!   init-config      Write a default config file
//!
//! Options:
//!   --config <PATH>  Config file [default: platform config dir]
//!   --delay <SECS>   Countdown before moving [default: from config]
//!   --no-failsafe    Do not abort when the pointer reaches a screen corner
//!   --dry-run        Drive an in-memory 1920x1080 cursor instead of the real one
//! ```
//!
//! # Stopping a runaway motion
//!
//! Shove the mouse into any screen corner: with the failsafe on, the next
//! interpolation step aborts the motion.  Ctrl+C also works; it issues an
//! emergency stop (cursor to the top-left corner) and exits.
//!
//! # Environment variable overrides
//!
//! | Variable           | Description                    |
//! |--------------------|--------------------------------|
//! | `MOUSEPATH_CONFIG` | Config file path               |
//! | `MOUSEPATH_DELAY`  | Countdown in seconds           |
//! | `RUST_LOG`         | `tracing` filter, e.g. `debug` |

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use mousepath::application::drive_cursor::{PlatformCursor, TweeningDriver};
use mousepath::application::execute_motion::{MotionExecutor, MotionRequest};
use mousepath::application::motion_worker::{MotionStatus, MotionWorker};
use mousepath::infrastructure::cursor::{mock::MockCursor, open_native};
use mousepath::infrastructure::storage::config::{
    config_file_path, load_config, load_config_from, save_config, AppConfig, ConfigError,
    MotionSettings,
};
use mousepath_core::{normalize_duration, Offset, Pattern, Point, ScreenBounds};

/// Exit status after Ctrl+C, as shells report SIGINT.
const INTERRUPTED_EXIT_CODE: i32 = 130;

// ── CLI argument definitions ──────────────────────────────────────────────────

/// Drive the mouse cursor along generated paths.
#[derive(Debug, Parser)]
#[command(name = "mousepath", about = "Drive the mouse cursor along generated paths", version)]
struct Cli {
    /// Config file to use instead of the platform default.
    #[arg(long, global = true, env = "MOUSEPATH_CONFIG")]
    config: Option<PathBuf>,

    /// Seconds to wait before moving, so you can let go of the mouse.
    #[arg(long, global = true, env = "MOUSEPATH_DELAY")]
    delay: Option<u64>,

    /// Disable the screen-corner failsafe.
    #[arg(long, global = true)]
    no_failsafe: bool,

    /// Drive an in-memory cursor instead of the real pointer.
    #[arg(long, global = true)]
    dry_run: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone, PartialEq, Subcommand)]
enum Command {
    /// Move the cursor to the center of the screen.
    Center {
        #[arg(long)]
        duration_ms: Option<u64>,
    },
    /// Move the cursor to absolute screen coordinates.
    Goto {
        x: i32,
        y: i32,
        #[arg(long)]
        duration_ms: Option<u64>,
    },
    /// Move the cursor by an offset from where it is now.
    Relative {
        #[arg(allow_negative_numbers = true)]
        dx: i32,
        #[arg(allow_negative_numbers = true)]
        dy: i32,
        #[arg(long)]
        duration_ms: Option<u64>,
    },
    /// Print the current cursor position and screen size.
    Position,
    /// Trace a circle around the screen center.
    Circle {
        #[arg(long, default_value_t = 100)]
        radius: i32,
        #[arg(long, default_value_t = 100)]
        steps: u32,
        #[arg(long)]
        counterclockwise: bool,
        #[arg(long, default_value_t = 20)]
        step_ms: u64,
    },
    /// Trace a square whose top-left corner is the screen center.
    Square {
        #[arg(long, default_value_t = 200)]
        size: i32,
        #[arg(long, default_value_t = 500)]
        step_ms: u64,
    },
    /// Trace an equilateral triangle around the screen center.
    Triangle {
        #[arg(long, default_value_t = 200)]
        size: i32,
        #[arg(long, default_value_t = 500)]
        step_ms: u64,
    },
    /// Trace a star around the screen center.
    Star {
        #[arg(long, default_value_t = 150)]
        outer_radius: i32,
        #[arg(long, default_value_t = 75)]
        inner_radius: i32,
        #[arg(long, default_value_t = 5)]
        points: u32,
        #[arg(long, default_value_t = 300)]
        step_ms: u64,
    },
    /// Spiral outwards from the screen center.
    Spiral {
        #[arg(long, default_value_t = 200)]
        max_radius: i32,
        #[arg(long, default_value_t = 3)]
        turns: u32,
        #[arg(long, default_value_t = 50)]
        steps_per_turn: u32,
        #[arg(long, default_value_t = 50)]
        step_ms: u64,
    },
    /// Follow a horizontal sine wave centered on the screen.
    Wave {
        #[arg(long, default_value_t = 400)]
        length: i32,
        #[arg(long, default_value_t = 100)]
        amplitude: i32,
        #[arg(long, default_value_t = 2.0)]
        frequency: f64,
        #[arg(long, default_value_t = 100)]
        steps: u32,
        #[arg(long, default_value_t = 50)]
        step_ms: u64,
    },
    /// Trace a heart around the screen center.
    Heart {
        #[arg(long, default_value_t = 5)]
        size: i32,
        #[arg(long, default_value_t = 100)]
        steps: u32,
        #[arg(long, default_value_t = 50)]
        step_ms: u64,
    },
    /// Trace a figure eight around the screen center.
    FigureEight {
        #[arg(long, default_value_t = 200)]
        width: i32,
        #[arg(long, default_value_t = 100)]
        height: i32,
        #[arg(long, default_value_t = 100)]
        steps: u32,
        #[arg(long, default_value_t = 50)]
        step_ms: u64,
    },
    /// Wander randomly from the current position.
    RandomWalk {
        #[arg(long, default_value_t = 20)]
        steps: u32,
        #[arg(long, default_value_t = 50)]
        max_step: i32,
        #[arg(long, default_value_t = 300)]
        step_ms: u64,
    },
    /// Move to a random point at least `margin` pixels from every edge.
    RandomPosition {
        #[arg(long)]
        margin: Option<u32>,
        #[arg(long)]
        duration_ms: Option<u64>,
    },
    /// Jitter the cursor around its current position.
    Shake {
        #[arg(long)]
        duration_ms: Option<u64>,
        #[arg(long)]
        intensity: Option<i32>,
    },
    /// Park the cursor in the top-left corner immediately.
    Stop,
    /// Write a config file with every default spelled out.
    InitConfig {
        /// Overwrite an existing file.
        #[arg(long)]
        force: bool,
    },
}

impl Command {
    /// Translates a motion command into an executor request.
    ///
    /// Returns `None` for commands that are not motions (`position`, `stop`,
    /// `init-config`).  `current` is only used by the commands that start
    /// from the cursor (`random-walk`).
    fn to_request(&self, motion: &MotionSettings, bounds: ScreenBounds, current: Point) -> Option<MotionRequest> {
        let center = bounds.center();
        let single_move = |duration_ms: Option<u64>| duration_ms.map_or_else(|| motion.move_duration(), ms);
        let pattern = |pattern: Pattern, step_ms: u64| MotionRequest::FollowPattern {
            pattern,
            duration_per_point: ms(step_ms),
        };

        let request = match *self {
            Command::Center { duration_ms } => MotionRequest::MoveToCenter {
                duration: single_move(duration_ms),
            },
            Command::Goto { x, y, duration_ms } => MotionRequest::MoveTo {
                target: Point::new(x, y),
                duration: single_move(duration_ms),
            },
            Command::Relative { dx, dy, duration_ms } => MotionRequest::MoveRelative {
                offset: Offset::new(dx, dy),
                duration: single_move(duration_ms),
            },
            Command::Circle { radius, steps, counterclockwise, step_ms } => pattern(
                Pattern::Circle { center, radius, steps, clockwise: !counterclockwise },
                step_ms,
            ),
            Command::Square { size, step_ms } => pattern(Pattern::Square { origin: center, size }, step_ms),
            Command::Triangle { size, step_ms } => pattern(Pattern::Triangle { center, size }, step_ms),
            Command::Star { outer_radius, inner_radius, points, step_ms } => pattern(
                Pattern::Star { center, outer_radius, inner_radius, points },
                step_ms,
            ),
            Command::Spiral { max_radius, turns, steps_per_turn, step_ms } => pattern(
                Pattern::Spiral { center, max_radius, turns, steps_per_turn },
                step_ms,
            ),
            Command::Wave { length, amplitude, frequency, steps, step_ms } => pattern(
                Pattern::SineWave {
                    origin: Point::new(center.x.saturating_sub(length / 2), center.y),
                    length,
                    amplitude,
                    frequency,
                    steps,
                },
                step_ms,
            ),
            Command::Heart { size, steps, step_ms } => pattern(Pattern::Heart { center, size, steps }, step_ms),
            Command::FigureEight { width, height, steps, step_ms } => pattern(
                Pattern::FigureEight { center, width, height, steps },
                step_ms,
            ),
            Command::RandomWalk { steps, max_step, step_ms } => pattern(
                Pattern::RandomWalk { origin: current, steps, max_step_size: max_step },
                step_ms,
            ),
            Command::RandomPosition { margin, duration_ms } => MotionRequest::MoveToRandom {
                margin: margin.unwrap_or(motion.random_margin),
                duration: single_move(duration_ms),
            },
            Command::Shake { duration_ms, intensity } => MotionRequest::Shake {
                duration: duration_ms.map_or_else(|| motion.shake_duration(), ms),
                intensity: intensity.unwrap_or(motion.shake_intensity),
            },
            Command::Position | Command::Stop | Command::InitConfig { .. } => return None,
        };
        Some(request)
    }
}

/// Longest single motion or per-point delay accepted from the command line.
const MAX_DURATION: Duration = Duration::from_secs(60 * 60);

fn ms(millis: u64) -> Duration {
    normalize_duration(Duration::from_millis(millis), Duration::ZERO, MAX_DURATION)
}

/// Loads the config named on the command line, or the platform default.
///
/// A missing file, or a platform without a config directory, yields defaults.
fn resolve_config(explicit: Option<&PathBuf>) -> anyhow::Result<AppConfig> {
    match explicit {
        Some(path) => load_config_from(path)
            .with_context(|| format!("failed to load config from {}", path.display())),
        None => match load_config() {
            Err(ConfigError::NoPlatformConfigDir) => Ok(AppConfig::default()),
            other => other.context("failed to load config"),
        },
    }
}

async fn countdown(secs: u64) {
    for remaining in (1..=secs).rev() {
        info!("starting in {remaining}...");
        tokio::time::sleep(Duration::from_secs(1)).await;
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = resolve_config(cli.config.as_ref())?;

    // `RUST_LOG` wins over the configured level.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.general.log_level)),
        )
        .init();

    if let Command::InitConfig { force } = cli.command {
        let path = match cli.config {
            Some(path) => path,
            None => config_file_path().context("no config path given and no platform default")?,
        };
        if path.exists() && !force {
            bail!("{} already exists; pass --force to overwrite", path.display());
        }
        save_config(&AppConfig::default(), &path)
            .with_context(|| format!("failed to write {}", path.display()))?;
        println!("wrote {}", path.display());
        return Ok(());
    }

    // ── Cursor stack ──────────────────────────────────────────────────────────
    let dry_run_cursor = cli.dry_run.then(|| Arc::new(MockCursor::single_1080p()));
    let cursor: Arc<dyn PlatformCursor> = match &dry_run_cursor {
        Some(mock) => Arc::clone(mock) as Arc<dyn PlatformCursor>,
        None => open_native().context("failed to open the native cursor")?,
    };

    let mut driver_config = config.driver.to_driver_config();
    if cli.no_failsafe {
        warn!("failsafe disabled: screen corners will not stop motions");
        driver_config.failsafe = false;
    }
    let driver = TweeningDriver::new(cursor, driver_config).context("failed to query the screen size")?;
    let executor = Arc::new(MotionExecutor::new(Arc::new(driver))?);

    let current = executor.position().context("failed to read the cursor position")?;
    let bounds = executor.bounds();

    match cli.command {
        Command::Position => {
            println!("cursor at {current} on a {bounds} screen");
            return Ok(());
        }
        Command::Stop => {
            executor.emergency_stop();
            return Ok(());
        }
        _ => {}
    }

    let Some(request) = cli.command.to_request(&config.motion, bounds, current) else {
        return Ok(());
    };

    // ── Countdown ─────────────────────────────────────────────────────────────
    let delay = cli
        .delay
        .unwrap_or(if cli.dry_run { 0 } else { config.general.start_delay_secs });
    tokio::select! {
        () = countdown(delay) => {}
        _ = tokio::signal::ctrl_c() => {
            info!("cancelled before the motion started");
            return Ok(());
        }
    }

    // ── Run the motion ────────────────────────────────────────────────────────
    let (worker, mut status_rx) = MotionWorker::new(Arc::clone(&executor));
    worker.submit(request)?;

    loop {
        tokio::select! {
            status = status_rx.recv() => match status {
                Some(MotionStatus::Started { job }) => info!(%job, "motion started"),
                Some(MotionStatus::Finished { job, outcome }) => {
                    info!(%job, "motion finished");
                    println!("{outcome}");
                    break;
                }
                Some(MotionStatus::Failed { job, error }) => {
                    bail!("motion {job} failed: {error}");
                }
                None => bail!("motion worker stopped without reporting a result"),
            },
            _ = tokio::signal::ctrl_c() => {
                warn!("interrupted; issuing emergency stop");
                let executor = Arc::clone(worker.executor());
                tokio::task::spawn_blocking(move || executor.emergency_stop()).await?;
                eprintln!("interrupted");
                std::process::exit(INTERRUPTED_EXIT_CODE);
            }
        }
    }

    if let Some(mock) = dry_run_cursor {
        println!("dry run: {} pointer updates recorded", mock.warp_count());
    }
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────

//! MotionExecutor: walks the cursor through points, paths and shakes.
//!
//! This use case sits at the application layer and delegates every physical
//! move to a [`CursorDriver`] trait object.  The executor owns the screen
//! bound policy:
//!
//! - a single target outside the screen is rejected with
//!   [`MotionError::OutOfBounds`] and the driver is never called;
//! - inside a path, out-of-bounds points are skipped and recorded in the
//!   [`PathReport`], and the rest of the path still runs;
//! - any driver failure aborts the current operation immediately.  There are
//!   no retries: each move command is delivered at most once.
//!
//! Every operation blocks the calling thread for its nominal duration.
//! Callers that need to stay responsive run the executor on a background
//! worker (see [`crate::application::motion_worker`]).

use std::fmt;
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use mousepath_core::{Offset, Path, Pattern, Point, ScreenBounds};
use rand::Rng;
use serde::Serialize;
use thiserror::Error;
use tracing::{error, info, warn};

use crate::application::drive_cursor::{CursorDriver, DriverError};

/// Duration of each jitter move during a shake.
const SHAKE_STEP_DURATION: Duration = Duration::from_millis(50);
/// Idle time between two jitter moves.
const SHAKE_SETTLE: Duration = Duration::from_millis(50);
/// Duration of the final move back to where the shake started.
const SHAKE_RETURN_DURATION: Duration = Duration::from_millis(300);
/// Duration of the emergency move to the safe corner.
const EMERGENCY_STOP_DURATION: Duration = Duration::from_millis(100);
/// Where the emergency stop parks the cursor.
const SAFE_CORNER: Point = Point::ORIGIN;

/// Error type for motion operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MotionError {
    #[error("target {point} is outside the screen bounds {bounds}")]
    OutOfBounds { point: Point, bounds: ScreenBounds },
    #[error("cursor driver failure: {0}")]
    Driver(#[from] DriverError),
}

/// What happened while following a path.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PathReport {
    /// Number of points the cursor was actually moved to.
    pub visited: usize,
    /// Points that were outside the screen, in path order.
    pub skipped: Vec<Point>,
}

impl PathReport {
    /// Total number of points in the input path.
    pub fn total(&self) -> usize {
        self.visited + self.skipped.len()
    }
}

/// One unit of work for the executor.
#[derive(Debug, Clone, PartialEq)]
pub enum MotionRequest {
    MoveTo { target: Point, duration: Duration },
    MoveRelative { offset: Offset, duration: Duration },
    MoveToCenter { duration: Duration },
    /// Move to a random on-screen point keeping `margin` pixels from the edges.
    MoveToRandom { margin: u32, duration: Duration },
    FollowPath { path: Path, duration_per_point: Duration },
    /// Generate `pattern` and follow it.
    FollowPattern { pattern: Pattern, duration_per_point: Duration },
    Shake { duration: Duration, intensity: i32 },
    EmergencyStop,
}

/// Successful result of [`MotionExecutor::run`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum MotionOutcome {
    /// The cursor arrived at the given point.
    Moved(Point),
    /// A path was followed.
    Path(PathReport),
    /// A shake completed with this many jitter moves.
    Shaken { moves: usize },
    /// The emergency stop was issued.
    Stopped,
}

impl fmt::Display for MotionOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MotionOutcome::Moved(p) => write!(f, "cursor moved to {p}"),
            MotionOutcome::Path(report) if report.skipped.is_empty() => {
                write!(f, "path completed: {} points", report.visited)
            }
            MotionOutcome::Path(report) => write!(
                f,
                "path completed: {} of {} points, {} skipped outside the screen",
                report.visited,
                report.total(),
                report.skipped.len()
            ),
            MotionOutcome::Shaken { moves } => write!(f, "shake completed: {moves} moves"),
            MotionOutcome::Stopped => write!(f, "emergency stop issued"),
        }
    }
}

/// The motion executor.
///
/// Holds the cursor driver and the screen bounds read from it at construction.
pub struct MotionExecutor {
    driver: Arc<dyn CursorDriver>,
    bounds: ScreenBounds,
}

impl MotionExecutor {
    /// Creates an executor, querying the screen bounds from `driver` once.
    ///
    /// # Errors
    ///
    /// Returns [`MotionError::Driver`] if the screen size cannot be read.
    pub fn new(driver: Arc<dyn CursorDriver>) -> Result<Self, MotionError> {
        let bounds = driver.screen_size()?;
        info!(%bounds, "motion executor initialized");
        Ok(Self { driver, bounds })
    }

    /// Creates an executor with explicitly supplied bounds.
    pub fn with_bounds(driver: Arc<dyn CursorDriver>, bounds: ScreenBounds) -> Self {
        Self { driver, bounds }
    }

    pub fn bounds(&self) -> ScreenBounds {
        self.bounds
    }

    /// Returns the current cursor position.
    ///
    /// # Errors
    ///
    /// Returns [`MotionError::Driver`] if the driver cannot read the pointer.
    pub fn position(&self) -> Result<Point, MotionError> {
        Ok(self.driver.position()?)
    }

    /// Moves the cursor to `target` over `duration`.
    ///
    /// # Errors
    ///
    /// Returns [`MotionError::OutOfBounds`] without touching the cursor if
    /// `target` is off screen, or [`MotionError::Driver`] if the move fails.
    pub fn move_to(&self, target: Point, duration: Duration) -> Result<(), MotionError> {
        if !self.bounds.contains(target) {
            error!(%target, bounds = %self.bounds, "invalid coordinates");
            return Err(MotionError::OutOfBounds {
                point: target,
                bounds: self.bounds,
            });
        }

        info!(%target, ?duration, "moving to position");
        self.driver.move_to(target, duration)?;
        Ok(())
    }

    /// Moves the cursor by `offset` from wherever it is now.
    ///
    /// Returns the target that was reached.
    ///
    /// # Errors
    ///
    /// Same as [`MotionExecutor::move_to`], plus a driver error if the current
    /// position cannot be read.
    pub fn move_relative(&self, offset: Offset, duration: Duration) -> Result<Point, MotionError> {
        let current = self.driver.position()?;
        let target = current + offset;
        self.move_to(target, duration)?;
        Ok(target)
    }

    /// Moves the cursor to the center of the screen.
    ///
    /// # Errors
    ///
    /// Returns [`MotionError::Driver`] if the move fails.
    pub fn move_to_center(&self, duration: Duration) -> Result<Point, MotionError> {
        let center = self.bounds.center();
        self.move_to(center, duration)?;
        Ok(center)
    }

    /// Visits every point of `path` in order.
    ///
    /// Out-of-bounds points are skipped and listed in the returned report; an
    /// empty path is a successful no-op.
    ///
    /// # Errors
    ///
    /// Returns [`MotionError::Driver`] on the first driver failure; points
    /// after it are not visited.
    pub fn move_path(&self, path: &[Point], duration_per_point: Duration) -> Result<PathReport, MotionError> {
        info!(points = path.len(), ?duration_per_point, "moving along path");

        let mut report = PathReport::default();
        for &point in path {
            if !self.bounds.contains(point) {
                warn!(%point, bounds = %self.bounds, "skipping point outside screen bounds");
                report.skipped.push(point);
                continue;
            }
            self.driver.move_to(point, duration_per_point)?;
            report.visited += 1;
        }

        if !report.skipped.is_empty() {
            warn!(
                skipped = report.skipped.len(),
                visited = report.visited,
                "path finished with skipped points"
            );
        }
        Ok(report)
    }

    /// Jitters the cursor around its current position for `duration` of wall
    /// clock time, then returns it to where it started.
    ///
    /// Each jitter draws an offset from `[-intensity, intensity]` on both axes;
    /// offsets that would leave the screen are skipped.  The loop ends on
    /// elapsed time, so the number of moves depends on how fast the driver is.
    /// Returns the number of jitter moves performed.
    ///
    /// # Errors
    ///
    /// Returns [`MotionError::Driver`] if any move fails.  The cursor is left
    /// wherever the last successful move put it.
    pub fn shake<R: Rng + ?Sized>(
        &self,
        duration: Duration,
        intensity: i32,
        rng: &mut R,
    ) -> Result<usize, MotionError> {
        info!(?duration, intensity, "shaking cursor");

        let origin = self.driver.position()?;
        let spread = intensity.saturating_abs();
        let started = Instant::now();
        let mut moves = 0;

        while started.elapsed() < duration {
            let offset = Offset::new(
                rng.random_range(-spread..=spread),
                rng.random_range(-spread..=spread),
            );
            let target = origin + offset;
            if self.bounds.contains(target) {
                self.driver.move_to(target, SHAKE_STEP_DURATION)?;
                moves += 1;
            }
            thread::sleep(SHAKE_SETTLE);
        }

        self.move_to(origin, SHAKE_RETURN_DURATION)?;
        Ok(moves)
    }

    /// Parks the cursor in the top-left corner.
    ///
    /// Best effort: a failure is logged and swallowed, never returned.
    pub fn emergency_stop(&self) {
        match self.driver.move_to(SAFE_CORNER, EMERGENCY_STOP_DURATION) {
            Ok(()) => info!("emergency stop executed"),
            Err(e) => warn!("emergency stop failed: {e}"),
        }
    }

    /// Executes one [`MotionRequest`].
    ///
    /// `rng` feeds the stochastic requests (random walk patterns, random
    /// positions, shakes).
    ///
    /// # Errors
    ///
    /// Propagates the error of the underlying operation.
    pub fn run<R: Rng + ?Sized>(&self, request: MotionRequest, rng: &mut R) -> Result<MotionOutcome, MotionError> {
        match request {
            MotionRequest::MoveTo { target, duration } => {
                self.move_to(target, duration)?;
                Ok(MotionOutcome::Moved(target))
            }
            MotionRequest::MoveRelative { offset, duration } => {
                self.move_relative(offset, duration).map(MotionOutcome::Moved)
            }
            MotionRequest::MoveToCenter { duration } => {
                self.move_to_center(duration).map(MotionOutcome::Moved)
            }
            MotionRequest::MoveToRandom { margin, duration } => {
                let target = self.bounds.random_point(margin, rng);
                self.move_to(target, duration)?;
                Ok(MotionOutcome::Moved(target))
            }
            MotionRequest::FollowPath { path, duration_per_point } => {
                self.move_path(&path, duration_per_point).map(MotionOutcome::Path)
            }
            MotionRequest::FollowPattern { pattern, duration_per_point } => {
                info!(pattern = pattern.name(), "generating pattern");
                let path = pattern.points(rng);
                self.move_path(&path, duration_per_point).map(MotionOutcome::Path)
            }
            MotionRequest::Shake { duration, intensity } => {
                let moves = self.shake(duration, intensity, rng)?;
                Ok(MotionOutcome::Shaken { moves })
            }
            MotionRequest::EmergencyStop => {
                self.emergency_stop();
                Ok(MotionOutcome::Stopped)
            }
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

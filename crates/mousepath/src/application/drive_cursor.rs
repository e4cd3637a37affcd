//! Cursor driver: timed, failsafe-guarded cursor movement.
//!
//! Two traits meet here:
//!
//! - [`PlatformCursor`] is the thin OS seam.  It can only read the pointer,
//!   teleport it, and report the screen size.  Each supported OS provides an
//!   implementation in the infrastructure layer.
//! - [`CursorDriver`] is what the executor consumes: "move to this point over
//!   this much time".
//!
//! [`TweeningDriver`] turns the first into the second by interpolating the
//! pointer in small wall-clock steps, checking the failsafe corners before
//! every step and pausing after every command.
//!
//! # Configuration
//!
//! Failsafe and pause are per-driver settings passed to
//! [`TweeningDriver::new`] in a [`DriverConfig`].  Nothing reads them from
//! process-wide state.

use std::sync::Arc;
use std::thread;
use std::time::Duration;

use mousepath_core::{Point, ScreenBounds};
use thiserror::Error;
use tracing::debug;

/// Error type for cursor driver operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DriverError {
    #[error("platform error: {0}")]
    Platform(String),
    /// The pointer was found in a reserved screen corner while failsafe mode
    /// was enabled; the in-flight move was abandoned.
    #[error("failsafe triggered: cursor reached reserved corner {0}")]
    FailSafeTriggered(Point),
}

/// Instant pointer primitives provided by the operating system.
#[cfg_attr(test, mockall::automock)]
pub trait PlatformCursor: Send + Sync {
    /// Returns the current pointer position in screen pixels.
    fn position(&self) -> Result<Point, DriverError>;

    /// Teleports the pointer to `point` with no animation.
    fn warp_to(&self, point: Point) -> Result<(), DriverError>;

    /// Returns the size of the primary screen.
    fn screen_size(&self) -> Result<ScreenBounds, DriverError>;
}

/// The cursor collaborator used by the motion executor.
///
/// `move_to` blocks for roughly `duration`; the duration is advisory and the
/// implementation decides how to honor it.
#[cfg_attr(test, mockall::automock)]
pub trait CursorDriver: Send + Sync {
    fn position(&self) -> Result<Point, DriverError>;

    fn move_to(&self, target: Point, duration: Duration) -> Result<(), DriverError>;

    fn screen_size(&self) -> Result<ScreenBounds, DriverError>;
}

/// Behaviour switches for [`TweeningDriver`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DriverConfig {
    /// Abort moves when the pointer sits in any of the four screen corners.
    pub failsafe: bool,
    /// Sleep after every completed `move_to`.
    pub pause: Duration,
    /// Target wall-clock time between two interpolation steps.
    pub tween_interval: Duration,
    /// Moves shorter than this are performed as a single warp.
    pub min_tween_duration: Duration,
}

impl Default for DriverConfig {
    /// | Field              | Default |
    /// |--------------------|---------|
    /// | failsafe           | `true`  |
    /// | pause              | 100 ms  |
    /// | tween_interval     | 10 ms   |
    /// | min_tween_duration | 50 ms   |
    fn default() -> Self {
        Self {
            failsafe: true,
            pause: Duration::from_millis(100),
            tween_interval: Duration::from_millis(10),
            min_tween_duration: Duration::from_millis(50),
        }
    }
}

/// A [`CursorDriver`] that animates a [`PlatformCursor`] with linear tweening.
pub struct TweeningDriver {
    cursor: Arc<dyn PlatformCursor>,
    config: DriverConfig,
    bounds: ScreenBounds,
}

impl TweeningDriver {
    /// Wraps `cursor`, querying the screen size once.
    ///
    /// # Errors
    ///
    /// Returns the platform error if the screen size cannot be read.
    pub fn new(cursor: Arc<dyn PlatformCursor>, config: DriverConfig) -> Result<Self, DriverError> {
        let bounds = cursor.screen_size()?;
        debug!(%bounds, ?config, "tweening driver ready");
        Ok(Self {
            cursor,
            config,
            bounds,
        })
    }

    fn failsafe_corners(&self) -> [Point; 4] {
        let right = i32::try_from(self.bounds.width().saturating_sub(1)).unwrap_or(i32::MAX);
        let bottom = i32::try_from(self.bounds.height().saturating_sub(1)).unwrap_or(i32::MAX);
        [
            Point::new(0, 0),
            Point::new(right, 0),
            Point::new(0, bottom),
            Point::new(right, bottom),
        ]
    }

    fn check_failsafe(&self) -> Result<(), DriverError> {
        if !self.config.failsafe {
            return Ok(());
        }
        let current = self.cursor.position()?;
        if self.failsafe_corners().contains(&current) {
            return Err(DriverError::FailSafeTriggered(current));
        }
        Ok(())
    }

    fn tween(&self, target: Point, duration: Duration) -> Result<(), DriverError> {
        let start = self.cursor.position()?;
        let steps = duration
            .as_nanos()
            .div_ceil(self.config.tween_interval.as_nanos())
            .max(1);
        let steps = u32::try_from(steps).unwrap_or(u32::MAX);
        let step_sleep = duration / steps;

        debug!(%start, %target, steps, "tweening cursor");
        for i in 1..=steps {
            thread::sleep(step_sleep);
            self.check_failsafe()?;
            let point = if i == steps {
                target
            } else {
                lerp(start, target, f64::from(i) / f64::from(steps))
            };
            self.cursor.warp_to(point)?;
        }
        Ok(())
    }
}

impl CursorDriver for TweeningDriver {
    fn position(&self) -> Result<Point, DriverError> {
        self.cursor.position()
    }

    fn move_to(&self, target: Point, duration: Duration) -> Result<(), DriverError> {
        self.check_failsafe()?;

        if duration < self.config.min_tween_duration || self.config.tween_interval.is_zero() {
            self.cursor.warp_to(target)?;
        } else {
            self.tween(target, duration)?;
        }

        if !self.config.pause.is_zero() {
            thread::sleep(self.config.pause);
        }
        Ok(())
    }

    fn screen_size(&self) -> Result<ScreenBounds, DriverError> {
        Ok(self.bounds)
    }
}

fn lerp(start: Point, end: Point, t: f64) -> Point {
    let x = f64::from(start.x) + (f64::from(end.x) - f64::from(start.x)) * t;
    let y = f64::from(start.y) + (f64::from(end.y) - f64::from(start.y)) * t;
    Point::new(x as i32, y as i32)
}

// ── Tests ─────────────────────────────────────────────────────────────────────

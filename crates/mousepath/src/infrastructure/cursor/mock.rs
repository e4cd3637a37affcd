//! In-memory platform cursor for tests and dry runs.
//!
//! The `MockCursor` replaces all OS calls with simple in-memory bookkeeping.
//! Every warp is pushed into a `Mutex<Vec<Point>>` so that test assertions can
//! inspect exactly where the pointer went and in what order.
//!
//! # Usage in tests
//!
//! ```ignore
//! let cursor = Arc::new(MockCursor::single_1080p());
//! let driver = TweeningDriver::new(cursor.clone(), DriverConfig::default())?;
//!
//! driver.move_to(Point::new(100, 100), Duration::ZERO)?;
//!
//! assert_eq!(cursor.warps.lock().unwrap().last(), Some(&Point::new(100, 100)));
//! ```
//!
//! # Simulating the user
//!
//! `grab_after = Some((n, corner))` teleports the pointer to `corner` right
//! after the `n`-th warp, the way a person slamming the mouse into a screen
//! corner would.  Use it to exercise the failsafe end to end.
//!
//! # `should_fail` flag
//!
//! Set `should_fail = true` to make every call return a
//! `DriverError::Platform`.

use std::sync::{Mutex, MutexGuard, PoisonError};

use mousepath_core::{Point, ScreenBounds};

use crate::application::drive_cursor::{DriverError, PlatformCursor};

/// A platform cursor that records warps without touching the OS.
pub struct MockCursor {
    /// Where the pointer currently is.
    pub position: Mutex<Point>,
    /// Every point passed to `warp_to`, in call order.
    pub warps: Mutex<Vec<Point>>,
    /// Reported by `screen_size`.
    pub bounds: ScreenBounds,
    /// After this many warps, the pointer jumps to the given point.
    pub grab_after: Option<(usize, Point)>,
    /// When `true`, every method returns `DriverError::Platform`.
    pub should_fail: bool,
}

impl MockCursor {
    /// Creates a cursor on a screen of `bounds`, starting at its center.
    pub fn new(bounds: ScreenBounds) -> Self {
        Self {
            position: Mutex::new(bounds.center()),
            warps: Mutex::new(Vec::new()),
            bounds,
            grab_after: None,
            should_fail: false,
        }
    }

    /// A single 1920×1080 screen with the pointer in the middle.
    pub fn single_1080p() -> Self {
        Self::new(ScreenBounds::new(1920, 1080))
    }

    /// Moves the starting position.
    pub fn starting_at(self, start: Point) -> Self {
        Self {
            position: Mutex::new(start),
            ..self
        }
    }

    /// Number of warps recorded so far.
    pub fn warp_count(&self) -> usize {
        self.warps.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    fn check(&self) -> Result<(), DriverError> {
        if self.should_fail {
            return Err(DriverError::Platform("mock failure".into()));
        }
        Ok(())
    }

    fn lock<'a, T>(mutex: &'a Mutex<T>, what: &str) -> Result<MutexGuard<'a, T>, DriverError> {
        mutex
            .lock()
            .map_err(|_| DriverError::Platform(format!("mock {what} lock poisoned")))
    }
}

impl PlatformCursor for MockCursor {
    fn position(&self) -> Result<Point, DriverError> {
        self.check()?;
        Ok(*Self::lock(&self.position, "position")?)
    }

    fn warp_to(&self, point: Point) -> Result<(), DriverError> {
        self.check()?;
        let mut warps = Self::lock(&self.warps, "warps")?;
        warps.push(point);

        let mut position = Self::lock(&self.position, "position")?;
        *position = match self.grab_after {
            Some((n, grabbed)) if warps.len() == n => grabbed,
            _ => point,
        };
        Ok(())
    }

    fn screen_size(&self) -> Result<ScreenBounds, DriverError> {
        self.check()?;
        Ok(self.bounds)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

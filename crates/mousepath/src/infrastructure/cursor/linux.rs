//! Linux X11 cursor via Xlib and the XTest extension.
//!
//! # What is XTest? (for beginners)
//!
//! XTest is an X11 protocol extension that lets a process synthesize mouse
//! and keyboard events as if the user had physically moved the hardware.
//! Only three calls matter here:
//!
//! - `XQueryPointer(display, root, ...)` reads the pointer position relative
//!   to the root window.
//! - `XTestFakeMotionEvent(display, screen, x, y, delay)` moves the pointer to
//!   absolute pixel coordinates on `screen`.
//! - `XFlush(display)` pushes the request to the server immediately instead
//!   of waiting for the output buffer to fill.
//!
//! # Thread safety
//!
//! Xlib connections are not thread safe.  The display pointer is kept behind a
//! `Mutex` so each request (query, motion, flush) is issued by one thread at a
//! time.
//!
//! # Permissions
//!
//! The process needs access to the X display named by `DISPLAY`.  If it is
//! unset or the server refuses the connection, [`XTestCursor::open`] fails
//! with a `Platform` error.

use std::os::raw::{c_int, c_uint};
use std::ptr;
use std::sync::{Mutex, MutexGuard, PoisonError};

use mousepath_core::{Point, ScreenBounds};
use tracing::debug;
use x11::{xlib, xtest};

use crate::application::drive_cursor::{DriverError, PlatformCursor};

/// Passing `CurrentTime` (0) as the delay means "deliver now".
const CURRENT_TIME: std::os::raw::c_ulong = 0;

/// Owned Xlib connection.
struct Display(*mut xlib::Display);

// SAFETY: the pointer is only dereferenced by Xlib while the owning mutex is
// held, so it is never used from two threads at once.
unsafe impl Send for Display {}

/// Linux X11/XTest cursor.
pub struct XTestCursor {
    display: Mutex<Display>,
    screen: c_int,
    root: xlib::Window,
}

impl XTestCursor {
    /// Connects to the X display named by `DISPLAY`.
    ///
    /// # Errors
    ///
    /// Returns [`DriverError::Platform`] if `XOpenDisplay` fails.
    pub fn open() -> Result<Self, DriverError> {
        // SAFETY: a null display name selects the `DISPLAY` environment
        // variable; the returned pointer is freed in `Drop`.
        let display = unsafe { xlib::XOpenDisplay(ptr::null()) };
        if display.is_null() {
            let name = std::env::var("DISPLAY").unwrap_or_else(|_| "<unset>".to_string());
            return Err(DriverError::Platform(format!(
                "XOpenDisplay failed; DISPLAY={name}"
            )));
        }

        // SAFETY: `display` is a valid non-null connection.
        let (screen, root) = unsafe {
            let screen = xlib::XDefaultScreen(display);
            (screen, xlib::XRootWindow(display, screen))
        };
        debug!(screen, "connected to X display");

        Ok(Self {
            display: Mutex::new(Display(display)),
            screen,
            root,
        })
    }

    fn lock(&self) -> Result<MutexGuard<'_, Display>, DriverError> {
        self.display
            .lock()
            .map_err(|_| DriverError::Platform("X display lock poisoned".to_string()))
    }
}

impl PlatformCursor for XTestCursor {
    fn position(&self) -> Result<Point, DriverError> {
        let display = self.lock()?;
        let mut root_return: xlib::Window = 0;
        let mut child_return: xlib::Window = 0;
        let (mut root_x, mut root_y, mut win_x, mut win_y): (c_int, c_int, c_int, c_int) =
            (0, 0, 0, 0);
        let mut mask: c_uint = 0;

        // SAFETY: the display is open and every out-pointer refers to a live
        // local variable.
        let same_screen = unsafe {
            xlib::XQueryPointer(
                display.0,
                self.root,
                &mut root_return,
                &mut child_return,
                &mut root_x,
                &mut root_y,
                &mut win_x,
                &mut win_y,
                &mut mask,
            )
        };
        if same_screen == xlib::False {
            return Err(DriverError::Platform(
                "pointer is not on the default X screen".to_string(),
            ));
        }
        Ok(Point::new(root_x, root_y))
    }

    fn warp_to(&self, point: Point) -> Result<(), DriverError> {
        let display = self.lock()?;
        // SAFETY: the display is open; coordinates are plain integers.
        let sent = unsafe {
            let sent = xtest::XTestFakeMotionEvent(display.0, self.screen, point.x, point.y, CURRENT_TIME);
            xlib::XFlush(display.0);
            sent
        };
        if sent == 0 {
            return Err(DriverError::Platform(format!(
                "XTestFakeMotionEvent rejected {point}"
            )));
        }
        Ok(())
    }

    fn screen_size(&self) -> Result<ScreenBounds, DriverError> {
        let display = self.lock()?;
        // SAFETY: the display is open and `self.screen` came from it.
        let (width, height) = unsafe {
            (
                xlib::XDisplayWidth(display.0, self.screen),
                xlib::XDisplayHeight(display.0, self.screen),
            )
        };
        let width = u32::try_from(width)
            .map_err(|_| DriverError::Platform(format!("invalid screen width {width}")))?;
        let height = u32::try_from(height)
            .map_err(|_| DriverError::Platform(format!("invalid screen height {height}")))?;
        Ok(ScreenBounds::new(width, height))
    }
}

impl Drop for XTestCursor {
    fn drop(&mut self) {
        // A poisoned lock still owns a live connection.
        let display = self.display.get_mut().unwrap_or_else(PoisonError::into_inner);
        // SAFETY: the connection was opened in `open` and is closed once.
        unsafe {
            xlib::XCloseDisplay(display.0);
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

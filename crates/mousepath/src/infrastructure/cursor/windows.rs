//! Windows cursor via the Win32 pointer API.
//!
//! `SetCursorPos` moves the pointer in physical screen coordinates of the
//! primary monitor; `GetSystemMetrics(SM_CXSCREEN / SM_CYSCREEN)` reports the
//! size of that monitor.

#![cfg(target_os = "windows")]

use mousepath_core::{Point, ScreenBounds};
use windows::Win32::Foundation::POINT;
use windows::Win32::UI::WindowsAndMessaging::{
    GetCursorPos, GetSystemMetrics, SetCursorPos, SM_CXSCREEN, SM_CYSCREEN,
};

use crate::application::drive_cursor::{DriverError, PlatformCursor};

/// Windows implementation of [`PlatformCursor`].
pub struct WindowsCursor;

impl WindowsCursor {
    /// The Win32 pointer API needs no connection; this never fails.
    pub fn open() -> Result<Self, DriverError> {
        Ok(Self)
    }
}

impl PlatformCursor for WindowsCursor {
    fn position(&self) -> Result<Point, DriverError> {
        let mut point = POINT::default();
        // SAFETY: `point` is a valid out-pointer for the duration of the call.
        unsafe { GetCursorPos(&mut point) }
            .map_err(|e| DriverError::Platform(format!("GetCursorPos failed: {e}")))?;
        Ok(Point::new(point.x, point.y))
    }

    fn warp_to(&self, point: Point) -> Result<(), DriverError> {
        // SAFETY: SetCursorPos takes plain integers.
        unsafe { SetCursorPos(point.x, point.y) }
            .map_err(|e| DriverError::Platform(format!("SetCursorPos{point} failed: {e}")))
    }

    fn screen_size(&self) -> Result<ScreenBounds, DriverError> {
        // SAFETY: GetSystemMetrics has no preconditions.
        let (width, height) = unsafe { (GetSystemMetrics(SM_CXSCREEN), GetSystemMetrics(SM_CYSCREEN)) };
        match (u32::try_from(width), u32::try_from(height)) {
            (Ok(w), Ok(h)) if w > 0 && h > 0 => Ok(ScreenBounds::new(w, h)),
            _ => Err(DriverError::Platform(format!(
                "GetSystemMetrics returned {width}x{height}"
            ))),
        }
    }
}

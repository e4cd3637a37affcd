//! Platform-specific cursor implementations.
//!
//! Each platform implements [`PlatformCursor`]; the correct one is selected
//! at compile time via `#[cfg(target_os = ...)]` and re-exported as
//! `NativeCursor`:
//!
//! | Module    | OS      | API used                                         |
//! |-----------|---------|--------------------------------------------------|
//! | `windows` | Windows | `GetCursorPos` / `SetCursorPos` / `GetSystemMetrics` |
//! | `linux`   | Linux   | `XQueryPointer` + `XTestFakeMotionEvent` (Xlib)  |
//! | `macos`   | macOS   | `CGEvent` mouse-moved events + `CGDisplay`       |
//!
//! The Linux adapter is only compiled with the `xtest` cargo feature, because
//! the `x11` crate needs the X11 development libraries at build time.
//!
//! [`mock::MockCursor`] is always compiled (not guarded by `#[cfg]`) so tests
//! on any platform can use it without a physical display.

use std::sync::Arc;

use crate::application::drive_cursor::{DriverError, PlatformCursor};

pub mod mock;

// ── Windows implementation ────────────────────────────────────────────────────

#[cfg(target_os = "windows")]
pub mod windows;

#[cfg(target_os = "windows")]
pub use windows::WindowsCursor as NativeCursor;

// ── Linux implementation ──────────────────────────────────────────────────────

#[cfg(all(target_os = "linux", feature = "xtest"))]
pub mod linux;

#[cfg(all(target_os = "linux", feature = "xtest"))]
pub use linux::XTestCursor as NativeCursor;

// ── macOS implementation ──────────────────────────────────────────────────────

#[cfg(target_os = "macos")]
pub mod macos;

#[cfg(target_os = "macos")]
pub use macos::MacosCursor as NativeCursor;

// ── Constructor ───────────────────────────────────────────────────────────────

/// Opens the cursor adapter for the build target.
///
/// # Errors
///
/// Returns [`DriverError::Platform`] if the OS connection cannot be
/// established (for example `DISPLAY` is unset on Linux).
#[cfg(any(
    target_os = "windows",
    target_os = "macos",
    all(target_os = "linux", feature = "xtest")
))]
pub fn open_native() -> Result<Arc<dyn PlatformCursor>, DriverError> {
    Ok(Arc::new(NativeCursor::open()?))
}

/// Fallback for builds without a native adapter.
///
/// # Errors
///
/// Always returns [`DriverError::Platform`].
#[cfg(not(any(
    target_os = "windows",
    target_os = "macos",
    all(target_os = "linux", feature = "xtest")
)))]
pub fn open_native() -> Result<Arc<dyn PlatformCursor>, DriverError> {
    let hint = if cfg!(target_os = "linux") {
        "; rebuild with `--features xtest`"
    } else {
        ""
    };
    Err(DriverError::Platform(format!(
        "no native cursor driver in this build{hint}"
    )))
}

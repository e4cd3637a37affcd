//! macOS cursor via Core Graphics events.
//!
//! The current pointer location is read from an empty `CGEvent`, and moves are
//! posted as `kCGEventMouseMoved` events at the HID tap, so applications see
//! them exactly like physical mouse motion.
//!
//! # Coordinates
//!
//! Quartz global display coordinates have their origin at the top-left of the
//! main display, with Y growing downwards, in points (not pixels).  Screen
//! bounds are therefore taken from `CGDisplay::bounds()` rather than
//! `pixels_wide()`, so that Retina displays report the same unit the events
//! use.
//!
//! # Permissions
//!
//! Posting events requires the Accessibility permission (System Settings →
//! Privacy & Security → Accessibility).  Without it the events are silently
//! dropped by the window server.

#![cfg(target_os = "macos")]

use core_graphics::display::CGDisplay;
use core_graphics::event::{CGEvent, CGEventTapLocation, CGEventType, CGMouseButton};
use core_graphics::event_source::{CGEventSource, CGEventSourceStateID};
use core_graphics::geometry::CGPoint;
use mousepath_core::{Point, ScreenBounds};

use crate::application::drive_cursor::{DriverError, PlatformCursor};

/// macOS implementation of [`PlatformCursor`].
///
/// Core Foundation objects are not `Send`, so an event source is created per
/// call instead of being stored.
pub struct MacosCursor;

impl MacosCursor {
    /// Verifies that an event source can be created.
    ///
    /// # Errors
    ///
    /// Returns [`DriverError::Platform`] if Core Graphics refuses.
    pub fn open() -> Result<Self, DriverError> {
        source()?;
        Ok(Self)
    }
}

fn source() -> Result<CGEventSource, DriverError> {
    CGEventSource::new(CGEventSourceStateID::HIDSystemState)
        .map_err(|()| DriverError::Platform("CGEventSourceCreate failed".to_string()))
}

impl PlatformCursor for MacosCursor {
    fn position(&self) -> Result<Point, DriverError> {
        let event = CGEvent::new(source()?)
            .map_err(|()| DriverError::Platform("CGEventCreate failed".to_string()))?;
        let location = event.location();
        Ok(Point::new(location.x as i32, location.y as i32))
    }

    fn warp_to(&self, point: Point) -> Result<(), DriverError> {
        let event = CGEvent::new_mouse_event(
            source()?,
            CGEventType::MouseMoved,
            CGPoint::new(f64::from(point.x), f64::from(point.y)),
            CGMouseButton::Left,
        )
        .map_err(|()| DriverError::Platform("CGEventCreateMouseEvent failed".to_string()))?;
        event.post(CGEventTapLocation::HID);
        Ok(())
    }

    fn screen_size(&self) -> Result<ScreenBounds, DriverError> {
        let bounds = CGDisplay::main().bounds();
        let (width, height) = (bounds.size.width as u32, bounds.size.height as u32);
        if width == 0 || height == 0 {
            return Err(DriverError::Platform(
                "main display reports zero size".to_string(),
            ));
        }
        Ok(ScreenBounds::new(width, height))
    }
}

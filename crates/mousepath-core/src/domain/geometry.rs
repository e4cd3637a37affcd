//! Screen-space geometry value types.
//!
//! All coordinates are integer pixels in the primary screen's coordinate
//! system: the origin (0, 0) is the top-left corner, X grows to the right and
//! Y grows downward.  The valid region of a screen is the half-open rectangle
//! `[0, width) × [0, height)`.

use std::fmt;
use std::ops::Add;
use std::time::Duration;

use rand::Rng;
use serde::{Deserialize, Serialize};

/// An ordered sequence of points; order defines traversal order.
///
/// A path may be empty and may contain duplicate or adjacent-identical points.
pub type Path = Vec<Point>;

/// A pixel coordinate on the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal position in pixels (may be negative for off-screen points).
    pub x: i32,
    /// Vertical position in pixels (may be negative for off-screen points).
    pub y: i32,
}

impl Point {
    /// The top-left corner of the screen.
    pub const ORIGIN: Point = Point { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other` in pixels.
    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = f64::from(other.x) - f64::from(self.x);
        let dy = f64::from(other.y) - f64::from(self.y);
        (dx * dx + dy * dy).sqrt()
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A signed displacement between two points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Offset {
    pub dx: i32,
    pub dy: i32,
}

impl Offset {
    pub const fn new(dx: i32, dy: i32) -> Self {
        Self { dx, dy }
    }
}

impl Add<Offset> for Point {
    type Output = Point;

    /// Saturates at the `i32` range instead of overflowing; a saturated point
    /// is always far outside any real screen and fails the bound check.
    fn add(self, offset: Offset) -> Point {
        Point {
            x: self.x.saturating_add(offset.dx),
            y: self.y.saturating_add(offset.dy),
        }
    }
}

/// The rectangular region the cursor is allowed to visit.
///
/// Queried once from the cursor driver when the executor is built and assumed
/// stable for the lifetime of the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScreenBounds {
    width: u32,
    height: u32,
}

impl ScreenBounds {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns `true` if `point` lies inside `[0, width) × [0, height)`.
    pub fn contains(&self, point: Point) -> bool {
        point.x >= 0
            && point.y >= 0
            && i64::from(point.x) < i64::from(self.width)
            && i64::from(point.y) < i64::from(self.height)
    }

    /// Pulls `point` onto the nearest on-screen pixel.
    ///
    /// This is a separate, explicitly invoked utility.  The executor never
    /// clamps on its own: it skips out-of-bounds points instead.
    pub fn clamp(&self, point: Point) -> Point {
        Point {
            x: clamp_axis(point.x, self.width),
            y: clamp_axis(point.y, self.height),
        }
    }

    /// The screen center, rounded down.
    pub fn center(&self) -> Point {
        Point {
            x: to_i32(self.width / 2),
            y: to_i32(self.height / 2),
        }
    }

    /// Picks a uniformly random on-screen point that keeps at least `margin`
    /// pixels away from every edge.
    ///
    /// When the margin leaves no room on an axis, that axis collapses to the
    /// screen center.
    pub fn random_point<R: Rng + ?Sized>(&self, margin: u32, rng: &mut R) -> Point {
        Point {
            x: random_axis(self.width, margin, rng),
            y: random_axis(self.height, margin, rng),
        }
    }
}

impl fmt::Display for ScreenBounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Clamps `duration` into `[min, max]`.
///
/// # Panics
///
/// Panics if `min > max`.
pub fn normalize_duration(duration: Duration, min: Duration, max: Duration) -> Duration {
    duration.clamp(min, max)
}

fn to_i32(value: u32) -> i32 {
    i32::try_from(value).unwrap_or(i32::MAX)
}

fn clamp_axis(value: i32, extent: u32) -> i32 {
    let max = to_i32(extent.saturating_sub(1));
    value.clamp(0, max)
}

fn random_axis<R: Rng + ?Sized>(extent: u32, margin: u32, rng: &mut R) -> i32 {
    let low = margin;
    let high = extent.saturating_sub(1).saturating_sub(margin);
    if extent == 0 || low > high {
        return to_i32(extent / 2);
    }
    to_i32(rng.random_range(low..=high))
}

// ── Tests ─────────────────────────────────────────────────────────────────────

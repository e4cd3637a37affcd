//! Cursor path generators.
//!
//! Every generator is a pure function from shape parameters to a [`Path`].
//! Generation never fails: zero step counts produce a minimal path, and
//! negative sizes or radii simply produce a mirrored or degenerate figure.
//! Validating parameters is the caller's job.
//!
//! # Integer conversion
//!
//! Shapes are computed in `f64` and converted back to pixels by truncating
//! toward zero (`as i32`), not by rounding.  This is why the closed
//! trigonometric shapes are only closed "within ±1 px": `sin(2π)` is a tiny
//! negative number, which truncates one pixel below `sin(0)`.
//!
//! # Sub-modules
//!
//! - **`shapes`** – closed figures (circle, square, triangle, star,
//!   figure-eight, heart).
//! - **`curves`** – open curves (spiral, sine wave, random walk, line).

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::domain::geometry::{Path, Point};

pub mod curves;
pub mod shapes;

pub use curves::{line, random_walk, sine_wave, spiral};
pub use shapes::{circle, figure_eight, heart, square, star, triangle};

/// Returns `i / steps`, defined as 0 when there are no steps.
fn fraction(i: u32, steps: u32) -> f64 {
    if steps == 0 {
        0.0
    } else {
        f64::from(i) / f64::from(steps)
    }
}

/// Offsets `center` by a floating-point displacement and truncates the sum.
fn sample(center: Point, dx: f64, dy: f64) -> Point {
    Point::new(
        (f64::from(center.x) + dx) as i32,
        (f64::from(center.y) + dy) as i32,
    )
}

/// A shape together with all of its parameters.
///
/// Front ends build one of these from user input and call
/// [`Pattern::points`]; they never have to know which generator function
/// backs which shape.
///
/// # Example
///
/// ```rust
/// use mousepath_core::{Pattern, Point};
///
/// let pattern = Pattern::Square { origin: Point::new(50, 50), size: 100 };
/// let path = pattern.points(&mut rand::rng());
/// assert_eq!(path.len(), 5);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "snake_case")]
pub enum Pattern {
    Circle {
        center: Point,
        radius: i32,
        steps: u32,
        clockwise: bool,
    },
    Square {
        origin: Point,
        size: i32,
    },
    Triangle {
        center: Point,
        size: i32,
    },
    Star {
        center: Point,
        outer_radius: i32,
        inner_radius: i32,
        points: u32,
    },
    Spiral {
        center: Point,
        max_radius: i32,
        turns: u32,
        steps_per_turn: u32,
    },
    SineWave {
        origin: Point,
        length: i32,
        amplitude: i32,
        frequency: f64,
        steps: u32,
    },
    RandomWalk {
        origin: Point,
        steps: u32,
        max_step_size: i32,
    },
    FigureEight {
        center: Point,
        width: i32,
        height: i32,
        steps: u32,
    },
    Heart {
        center: Point,
        size: i32,
        steps: u32,
    },
    Line {
        start: Point,
        end: Point,
        steps: u32,
    },
}

impl Pattern {
    /// Generates the path for this pattern.
    ///
    /// `rng` is only consulted by [`Pattern::RandomWalk`]; every other
    /// variant is deterministic.
    pub fn points<R: Rng + ?Sized>(&self, rng: &mut R) -> Path {
        match *self {
            Pattern::Circle { center, radius, steps, clockwise } => {
                circle(center, radius, steps, clockwise)
            }
            Pattern::Square { origin, size } => square(origin, size),
            Pattern::Triangle { center, size } => triangle(center, size),
            Pattern::Star { center, outer_radius, inner_radius, points } => {
                star(center, outer_radius, inner_radius, points)
            }
            Pattern::Spiral { center, max_radius, turns, steps_per_turn } => {
                spiral(center, max_radius, turns, steps_per_turn)
            }
            Pattern::SineWave { origin, length, amplitude, frequency, steps } => {
                sine_wave(origin, length, amplitude, frequency, steps)
            }
            Pattern::RandomWalk { origin, steps, max_step_size } => {
                random_walk(origin, steps, max_step_size, rng)
            }
            Pattern::FigureEight { center, width, height, steps } => {
                figure_eight(center, width, height, steps)
            }
            Pattern::Heart { center, size, steps } => heart(center, size, steps),
            Pattern::Line { start, end, steps } => line(start, end, steps),
        }
    }

    /// Short human-readable name, used in log lines.
    pub fn name(&self) -> &'static str {
        match self {
            Pattern::Circle { .. } => "circle",
            Pattern::Square { .. } => "square",
            Pattern::Triangle { .. } => "triangle",
            Pattern::Star { .. } => "star",
            Pattern::Spiral { .. } => "spiral",
            Pattern::SineWave { .. } => "sine wave",
            Pattern::RandomWalk { .. } => "random walk",
            Pattern::FigureEight { .. } => "figure eight",
            Pattern::Heart { .. } => "heart",
            Pattern::Line { .. } => "line",
        }
    }

    /// Returns `true` for shapes whose path ends where it started.
    pub fn is_closed(&self) -> bool {
        matches!(
            self,
            Pattern::Circle { .. }
                | Pattern::Square { .. }
                | Pattern::Triangle { .. }
                | Pattern::Star { .. }
                | Pattern::FigureEight { .. }
                | Pattern::Heart { .. }
        )
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

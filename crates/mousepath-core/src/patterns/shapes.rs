//! Closed figures: the cursor ends where it started.
//!
//! Every generator here returns a path whose first and last points coincide
//! (exactly for the polygonal shapes, within ±1 px of rounding for the
//! trigonometric ones).

use std::f64::consts::{PI, TAU};

use crate::domain::geometry::{Path, Point};

use super::{fraction, sample};

/// Samples a circle of `radius` around `center` at `steps + 1` evenly spaced
/// angles covering one full turn.
///
/// `clockwise` refers to screen space (Y grows downward), so a positive angle
/// sweep appears clockwise to the user.
pub fn circle(center: Point, radius: i32, steps: u32, clockwise: bool) -> Path {
    let direction = if clockwise { 1.0 } else { -1.0 };
    let r = f64::from(radius);

    (0..=steps)
        .map(|i| {
            let angle = direction * TAU * fraction(i, steps);
            sample(center, r * angle.cos(), r * angle.sin())
        })
        .collect()
}

/// The four corners of an axis-aligned square, traversed clockwise from
/// `origin` and back.
pub fn square(origin: Point, size: i32) -> Path {
    let Point { x, y } = origin;
    vec![
        Point::new(x, y),
        Point::new(x.saturating_add(size), y),
        Point::new(x.saturating_add(size), y.saturating_add(size)),
        Point::new(x, y.saturating_add(size)),
        Point::new(x, y),
    ]
}

/// An equilateral triangle with the apex above `center` and the base below.
///
/// Returns four points: apex, bottom-left, bottom-right, apex.
pub fn triangle(center: Point, size: i32) -> Path {
    let height = (f64::from(size) * 3f64.sqrt() / 2.0) as i32;
    let half_height = height.div_euclid(2);
    let half_size = size.div_euclid(2);

    let base_y = center.y.saturating_add(half_height);
    let apex = Point::new(center.x, center.y.saturating_sub(half_height));
    vec![
        apex,
        Point::new(center.x.saturating_sub(half_size), base_y),
        Point::new(center.x.saturating_add(half_size), base_y),
        apex,
    ]
}

/// A star with `points` tips.
///
/// Vertices alternate between `outer_radius` (tips, even indices) and
/// `inner_radius` (notches, odd indices), spaced `π / points` apart and
/// starting straight up.  The first vertex is repeated at the end to close
/// the outline, giving `2 * points + 1` points.  A star with no tips
/// degenerates to its center.
pub fn star(center: Point, outer_radius: i32, inner_radius: i32, points: u32) -> Path {
    if points == 0 {
        return vec![center];
    }

    let angle_step = PI / f64::from(points);
    let mut path: Path = (0..points.saturating_mul(2))
        .map(|i| {
            let angle = f64::from(i) * angle_step - PI / 2.0;
            let radius = if i % 2 == 0 { outer_radius } else { inner_radius };
            let r = f64::from(radius);
            sample(center, r * angle.cos(), r * angle.sin())
        })
        .collect();

    path.push(path[0]);
    path
}

/// A Lissajous figure-eight `width` wide and `height` tall.
///
/// `x = cx + (width/2)·sin t`, `y = cy + (height/4)·sin 2t` for `t` over one
/// period.  The curve crosses itself at `center`.
pub fn figure_eight(center: Point, width: i32, height: i32, steps: u32) -> Path {
    let w = f64::from(width);
    let h = f64::from(height);

    (0..=steps)
        .map(|i| {
            let t = TAU * fraction(i, steps);
            sample(center, w * t.sin() / 2.0, h * (2.0 * t).sin() / 4.0)
        })
        .collect()
}

/// The classic parametric heart, scaled by `size`.
///
/// The curve starts and ends at the notch between the two lobes.
pub fn heart(center: Point, size: i32, steps: u32) -> Path {
    let s = f64::from(size);

    (0..=steps)
        .map(|i| {
            let t = TAU * fraction(i, steps);
            let dx = s * 16.0 * t.sin().powi(3);
            let dy = -s
                * (13.0 * t.cos()
                    - 5.0 * (2.0 * t).cos()
                    - 2.0 * (3.0 * t).cos()
                    - (4.0 * t).cos());
            sample(center, dx, dy)
        })
        .collect()
}

// ── Tests ─────────────────────────────────────────────────────────────────────

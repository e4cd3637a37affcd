//! Open curves: spiral, sine wave, random walk and straight line.

use std::f64::consts::TAU;

use rand::Rng;

use crate::domain::geometry::{Path, Point};

use super::{fraction, sample};

/// An Archimedean spiral growing outward from `center`.
///
/// Over `turns * steps_per_turn` steps the angle advances one full turn every
/// `steps_per_turn` steps while the radius grows linearly from 0 to
/// `max_radius`.  Returns `turns * steps_per_turn + 1` points; the first point
/// is always `center`.
pub fn spiral(center: Point, max_radius: i32, turns: u32, steps_per_turn: u32) -> Path {
    let total_steps = turns.saturating_mul(steps_per_turn);
    if total_steps == 0 {
        return vec![center];
    }

    let max_r = f64::from(max_radius);
    (0..=total_steps)
        .map(|i| {
            let angle = TAU * fraction(i, steps_per_turn);
            let radius = max_r * fraction(i, total_steps);
            sample(center, radius * angle.cos(), radius * angle.sin())
        })
        .collect()
}

/// A horizontal sine wave starting at `origin`.
///
/// X advances linearly over `length` pixels while Y oscillates with the given
/// `amplitude`, completing `frequency` periods across the whole length.
/// Returns `steps + 1` points.
pub fn sine_wave(origin: Point, length: i32, amplitude: i32, frequency: f64, steps: u32) -> Path {
    let len = f64::from(length);
    let amp = f64::from(amplitude);

    (0..=steps)
        .map(|i| {
            let t = fraction(i, steps);
            let dx = (len * t) as i32;
            let dy = (amp * (TAU * frequency * t).sin()) as i32;
            Point::new(origin.x.saturating_add(dx), origin.y.saturating_add(dy))
        })
        .collect()
}

/// A random walk of `steps` independent jumps starting at `origin`.
///
/// Each jump draws its X and Y displacement uniformly from
/// `[-max_step_size, max_step_size]`.  The random source is supplied by the
/// caller so tests can pass a seeded generator.  Returns `steps + 1` points.
pub fn random_walk<R: Rng + ?Sized>(
    origin: Point,
    steps: u32,
    max_step_size: i32,
    rng: &mut R,
) -> Path {
    let max_step = max_step_size.saturating_abs();
    let mut current = origin;
    let mut path = Vec::with_capacity(steps as usize + 1);
    path.push(current);

    for _ in 0..steps {
        let dx = rng.random_range(-max_step..=max_step);
        let dy = rng.random_range(-max_step..=max_step);
        current = Point::new(current.x.saturating_add(dx), current.y.saturating_add(dy));
        path.push(current);
    }

    path
}

/// A straight line from `start` to `end` with `steps` evenly spaced
/// intermediate points.
///
/// Returns `steps + 2` points.  Both endpoints are exact; intermediate points
/// are truncated toward zero.
pub fn line(start: Point, end: Point, steps: u32) -> Path {
    if steps == 0 {
        return vec![start, end];
    }

    let segments = f64::from(steps) + 1.0;
    let dx = (f64::from(end.x) - f64::from(start.x)) / segments;
    let dy = (f64::from(end.y) - f64::from(start.y)) / segments;

    let mut path: Path = (0..=steps)
        .map(|i| sample(start, dx * f64::from(i), dy * f64::from(i)))
        .collect();
    path.push(end);
    path
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    // ── spiral ────────────────────────────────────────────────────────────────

    #[test]
    fn test_spiral_point_count_is_turns_times_steps_plus_one() {
        let path = spiral(Point::new(100, 100), 50, 2, 10);
        assert_eq!(path.len(), 21);
    }

    #[test]
    fn test_spiral_starts_at_center_and_ends_at_max_radius() {
        // Arrange
        let center = Point::new(500, 400);

        // Act
        let path = spiral(center, 120, 3, 50);

        // Assert
        assert_eq!(path[0], center);
        let last = *path.last().unwrap();
        assert!((center.distance_to(&last) - 120.0).abs() <= 1.5, "ended at {last}");
    }

    #[test]
    fn test_spiral_radius_never_shrinks() {
        let center = Point::new(0, 0);
        let path = spiral(center, 200, 4, 25);
        let radii: Vec<f64> = path.iter().map(|p| center.distance_to(p)).collect();
        for pair in radii.windows(2) {
            // Truncation can wobble a sample by up to √2 px.
            assert!(pair[1] + 1.5 >= pair[0]);
        }
    }

    #[test]
    fn test_spiral_with_zero_turns_is_center_only() {
        assert_eq!(spiral(Point::new(3, 4), 100, 0, 50), vec![Point::new(3, 4)]);
    }

    // ── sine_wave ─────────────────────────────────────────────────────────────

    #[test]
    fn test_sine_wave_spans_length_and_returns_to_baseline() {
        // Act
        let path = sine_wave(Point::new(100, 300), 400, 50, 1.0, 100);

        // Assert
        assert_eq!(path.len(), 101);
        assert_eq!(path[0], Point::new(100, 300));
        assert_eq!(path[100].x, 500);
        assert!((path[100].y - 300).abs() <= 1);
    }

    #[test]
    fn test_sine_wave_peaks_at_amplitude() {
        // A quarter of the way through one period the wave is at its crest.
        let path = sine_wave(Point::new(0, 300), 400, 50, 1.0, 4);
        assert_eq!(path[1], Point::new(100, 350));
        assert_eq!(path[3], Point::new(300, 250));
    }

    #[test]
    fn test_sine_wave_x_is_monotonic() {
        let path = sine_wave(Point::new(0, 0), 1000, 80, 3.0, 77);
        assert!(path.windows(2).all(|w| w[1].x >= w[0].x));
    }

    // ── random_walk ───────────────────────────────────────────────────────────

    #[test]
    fn test_random_walk_has_steps_plus_one_points_from_origin() {
        let mut rng = StdRng::seed_from_u64(42);
        let path = random_walk(Point::new(960, 540), 20, 50, &mut rng);
        assert_eq!(path.len(), 21);
        assert_eq!(path[0], Point::new(960, 540));
    }

    #[test]
    fn test_random_walk_steps_are_bounded() {
        let mut rng = StdRng::seed_from_u64(9);
        let path = random_walk(Point::new(0, 0), 500, 30, &mut rng);
        for w in path.windows(2) {
            assert!((w[1].x - w[0].x).abs() <= 30);
            assert!((w[1].y - w[0].y).abs() <= 30);
        }
    }

    #[test]
    fn test_random_walk_is_reproducible_with_same_seed() {
        let a = random_walk(Point::new(10, 10), 50, 25, &mut StdRng::seed_from_u64(1234));
        let b = random_walk(Point::new(10, 10), 50, 25, &mut StdRng::seed_from_u64(1234));
        assert_eq!(a, b);
    }

    #[test]
    fn test_random_walk_with_zero_step_size_stays_put() {
        let mut rng = StdRng::seed_from_u64(5);
        let path = random_walk(Point::new(10, 10), 5, 0, &mut rng);
        assert!(path.iter().all(|p| *p == Point::new(10, 10)));
    }

    #[test]
    fn test_random_walk_accepts_negative_step_size() {
        let mut rng = StdRng::seed_from_u64(5);
        let path = random_walk(Point::new(10, 10), 10, -5, &mut rng);
        assert_eq!(path.len(), 11);
    }

    // ── line ──────────────────────────────────────────────────────────────────

    #[test]
    fn test_line_without_steps_is_just_endpoints() {
        let path = line(Point::new(0, 0), Point::new(10, 10), 0);
        assert_eq!(path, vec![Point::new(0, 0), Point::new(10, 10)]);
    }

    #[test]
    fn test_line_interpolates_evenly() {
        let path = line(Point::new(0, 0), Point::new(30, -30), 2);
        assert_eq!(
            path,
            vec![
                Point::new(0, 0),
                Point::new(10, -10),
                Point::new(20, -20),
                Point::new(30, -30),
            ]
        );
    }
}

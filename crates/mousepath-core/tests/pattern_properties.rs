//! Property sweeps over the path generators.
//!
//! These exercise the public API of `mousepath-core` the way the executor and
//! the CLI consume it: build a [`Pattern`], generate its points, and check the
//! shape-level invariants (point counts, closure, anchor points).

use mousepath_core::patterns::{circle, spiral, square, star, triangle};
use mousepath_core::{Pattern, Point, ScreenBounds};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn within_one_px(a: Point, b: Point) -> bool {
    (a.x - b.x).abs() <= 1 && (a.y - b.y).abs() <= 1
}

#[test]
fn test_circle_count_and_closure_over_parameter_grid() {
    for radius in [0, 1, 17, 100, 480] {
        for steps in [1u32, 2, 10, 99, 360] {
            for clockwise in [true, false] {
                let path = circle(Point::new(960, 540), radius, steps, clockwise);
                assert_eq!(path.len(), steps as usize + 1);
                assert!(
                    within_one_px(path[0], path[steps as usize]),
                    "circle r={radius} steps={steps} not closed: {:?} vs {:?}",
                    path[0],
                    path[steps as usize]
                );
            }
        }
    }
}

#[test]
fn test_square_matches_corner_list_for_any_origin() {
    for (ox, oy, size) in [(0, 0, 1), (50, 50, 100), (-20, 300, 7), (10, 10, -10)] {
        let o = Point::new(ox, oy);
        assert_eq!(
            square(o, size),
            vec![
                o,
                Point::new(ox + size, oy),
                Point::new(ox + size, oy + size),
                Point::new(ox, oy + size),
                o,
            ]
        );
    }
}

#[test]
fn test_star_count_and_closure_over_tip_counts() {
    for tips in 1..=12u32 {
        let path = star(Point::new(300, 300), 120, 45, tips);
        assert_eq!(path.len(), 2 * tips as usize + 1);
        assert_eq!(path.first(), path.last());
    }
}

#[test]
fn test_spiral_count_start_and_end_radius() {
    let center = Point::new(960, 540);
    for (turns, spt) in [(1u32, 8u32), (2, 10), (3, 50), (5, 36)] {
        let path = spiral(center, 200, turns, spt);
        assert_eq!(path.len(), (turns * spt) as usize + 1);
        assert_eq!(path[0], center);
        let end = *path.last().unwrap();
        assert!((center.distance_to(&end) - 200.0).abs() <= 1.5);
    }
}

#[test]
fn test_every_closed_pattern_ends_where_it_starts() {
    let c = Point::new(960, 540);
    let patterns = [
        Pattern::Circle { center: c, radius: 150, steps: 100, clockwise: true },
        Pattern::Square { origin: c, size: 200 },
        Pattern::Triangle { center: c, size: 200 },
        Pattern::Star { center: c, outer_radius: 150, inner_radius: 75, points: 5 },
        Pattern::FigureEight { center: c, width: 300, height: 200, steps: 100 },
        Pattern::Heart { center: c, size: 10, steps: 100 },
    ];
    let mut rng = StdRng::seed_from_u64(0);

    for pattern in patterns {
        assert!(pattern.is_closed());
        let path = pattern.points(&mut rng);
        let first = path[0];
        let last = *path.last().unwrap();
        assert!(within_one_px(first, last), "{} not closed", pattern.name());
    }
}

#[test]
fn test_default_menu_shapes_fit_on_a_1080p_screen() {
    // The sizes the CLI uses by default must keep every point on screen when
    // centered on a 1920×1080 display.
    let bounds = ScreenBounds::new(1920, 1080);
    let c = bounds.center();
    let patterns = [
        Pattern::Circle { center: c, radius: 100, steps: 100, clockwise: true },
        Pattern::Star { center: c, outer_radius: 150, inner_radius: 75, points: 5 },
        Pattern::Spiral { center: c, max_radius: 200, turns: 3, steps_per_turn: 50 },
        Pattern::Heart { center: c, size: 10, steps: 100 },
        Pattern::FigureEight { center: c, width: 300, height: 200, steps: 100 },
    ];

    for pattern in patterns {
        let path = pattern.points(&mut rand::rng());
        assert!(
            path.iter().all(|p| bounds.contains(*p)),
            "{} leaves the screen",
            pattern.name()
        );
    }
}

#[test]
fn test_zero_step_generators_return_minimal_paths() {
    let c = Point::new(100, 100);
    let mut rng = StdRng::seed_from_u64(3);
    let patterns = [
        Pattern::Circle { center: c, radius: 10, steps: 0, clockwise: true },
        Pattern::SineWave { origin: c, length: 10, amplitude: 10, frequency: 1.0, steps: 0 },
        Pattern::RandomWalk { origin: c, steps: 0, max_step_size: 10 },
        Pattern::FigureEight { center: c, width: 10, height: 10, steps: 0 },
        Pattern::Heart { center: c, size: 1, steps: 0 },
        Pattern::Spiral { center: c, max_radius: 10, turns: 0, steps_per_turn: 0 },
    ];

    for pattern in patterns {
        let path = pattern.points(&mut rng);
        assert_eq!(path.len(), 1, "{} must produce exactly one point", pattern.name());
    }
}

#[test]
fn test_shapes_saturate_at_the_edge_of_the_coordinate_range() {
    // Arrange
    let near_max = Point::new(i32::MAX - 5, i32::MAX - 5);
    let near_min = Point::new(i32::MIN + 5, i32::MIN + 5);

    // Act
    let square_path = square(near_max, 100);
    let triangle_up = triangle(Point::new(0, i32::MIN + 5), 100);
    let triangle_down = triangle(near_max, 100);

    // Assert
    assert_eq!(square_path[2], Point::new(i32::MAX, i32::MAX));
    assert_eq!(square(near_min, -100)[2], Point::new(i32::MIN, i32::MIN));
    assert_eq!(triangle_up[0], Point::new(0, i32::MIN));
    assert_eq!(triangle_up[0], triangle_up[3]);
    assert_eq!(triangle_down[2], Point::new(i32::MAX, i32::MAX));
    assert_eq!(triangle(near_min, 100)[1].x, i32::MIN);
}

#[test]
fn test_every_pattern_is_total_at_extreme_origins() {
    let mut rng = StdRng::seed_from_u64(11);
    for origin in [Point::new(i32::MAX, i32::MAX), Point::new(i32::MIN, i32::MIN)] {
        for size in [i32::MAX, i32::MIN, 0] {
            let patterns = [
                Pattern::Circle { center: origin, radius: size, steps: 8, clockwise: true },
                Pattern::Square { origin, size },
                Pattern::Triangle { center: origin, size },
                Pattern::Star { center: origin, outer_radius: size, inner_radius: size, points: 5 },
                Pattern::Spiral { center: origin, max_radius: size, turns: 2, steps_per_turn: 4 },
                Pattern::SineWave { origin, length: size, amplitude: size, frequency: 2.0, steps: 8 },
                Pattern::RandomWalk { origin, steps: 8, max_step_size: size },
                Pattern::FigureEight { center: origin, width: size, height: size, steps: 8 },
                Pattern::Heart { center: origin, size, steps: 8 },
                Pattern::Line { start: origin, end: Point::new(0, 0), steps: 8 },
            ];
            for pattern in patterns {
                assert!(!pattern.points(&mut rng).is_empty(), "{pattern:?} produced no points");
            }
        }
    }
}

use super::*;
use proptest::prelude::*;
use rand::{rngs::StdRng, Rng, SeedableRng};

fn params(width: f32, height: f32, dx: f32, dy: f32, deg: f64) -> GridParams {
    GridParams::new(width, height, dx, dy, 0.0, 0.0, Angle::from_degrees(deg))
}

fn collect(p: GridParams) -> Vec<GridCoord> {
    p.positions().expect("valid params").collect()
}

fn assert_close(got: GridCoord, want: (f32, f32)) {
    let want = GridCoord::new(want.0, want.1);
    assert!(got.approx_eq(&want, 1e-3), "got {got}, want {want}");
}

#[test]
fn long_strip_at_45_degrees() {
    let coords = collect(params(10240.0, 128.0, 7.0, 7.0, 45.0));
    assert_eq!(coords.len(), 25863);
    assert_close(coords[0], (1.961, 4.603));
    assert_close(coords[1024], (373.192, 98.648));
    assert_close(coords[25862], (10238.039, 123.397));
}

#[test]
fn unrotated_lattice_is_centered() {
    let coords = collect(params(10.0, 7.0, 2.0, 3.0, 0.0));
    let expected: Vec<GridCoord> = [0.5f32, 3.5, 6.5]
        .iter()
        .flat_map(|&y| [1.0f32, 3.0, 5.0, 7.0, 9.0].map(|x| GridCoord::new(x, y)))
        .collect();
    assert_eq!(coords.len(), 15);
    let rounded: Vec<GridCoord> = coords.iter().map(|c| c.round(4)).collect();
    assert_eq!(rounded, expected);
}

#[test]
fn small_rectangle_at_45_degrees() {
    let coords = collect(params(10.0, 7.0, 2.0, 2.0, 45.0));
    let expected = [
        // First row
        (0.7573595, 2.0857863),
        (2.171573, 0.6715729),
        // Second row
        (0.7573595, 4.9142137),
        (2.171573, 3.5),
        (3.5857863, 2.0857863),
        (5.0, 0.6715729),
        // Third row
        (2.171573, 6.3284273),
        (3.5857863, 4.9142137),
        (5.0, 3.5),
        (6.4142137, 2.0857863),
        (7.8284273, 0.6715729),
        // Fourth row
        (5.0, 6.3284273),
        (6.4142137, 4.9142137),
        (7.8284273, 3.5),
        (9.2426405, 2.0857863),
        // Fifth row
        (7.8284273, 6.3284273),
        (9.2426405, 4.9142137),
    ];
    assert_eq!(coords.len(), expected.len());
    for (got, want) in coords.iter().zip(expected) {
        assert_close(*got, want);
    }
}

#[test]
fn phase_offset_shifts_lattice() {
    let p = params(10.0, 7.0, 2.0, 3.0, 0.0).with_offset(0.5, -1.0);
    let coords = collect(p);
    assert_eq!(coords.len(), 10);
    assert_close(coords[0], (1.5, 2.5));
    assert_close(coords[9], (9.5, 5.5));
}

#[test]
fn quarter_turns_are_equivalent() {
    let base = collect(params(10.0, 7.0, 2.0, 2.0, 45.0));
    let turned = collect(params(10.0, 7.0, 2.0, 2.0, 135.0));
    assert_eq!(base.len(), turned.len());
    for (a, b) in base.iter().zip(&turned) {
        assert!(a.approx_eq(b, 1e-3));
    }
}

#[test]
fn rejects_non_positive_steps() {
    let err = params(10.0, 7.0, 0.0, 2.0, 30.0).positions().unwrap_err();
    assert_eq!(
        err,
        GridError::NonPositiveStep {
            param: "dx",
            value: 0.0
        }
    );
    let err = params(10.0, 7.0, 2.0, -1.0, 30.0).positions().unwrap_err();
    assert!(matches!(err, GridError::NonPositiveStep { param: "dy", .. }));
    let err = params(10.0, 7.0, f32::NAN, 1.0, 30.0).positions().unwrap_err();
    assert!(matches!(err, GridError::NonPositiveStep { param: "dx", .. }));
}

#[test]
fn rejects_negative_normalized_angle() {
    for deg in [-10.0, -80.0, -100.0] {
        let err = params(10.0, 7.0, 2.0, 2.0, deg).positions().unwrap_err();
        assert!(matches!(err, GridError::AngleOutOfRange { .. }), "{deg}");
    }
    // Whole quarter turns land on zero.
    assert!(params(10.0, 7.0, 2.0, 2.0, -90.0).positions().is_ok());
    assert!(params(10.0, 7.0, 2.0, 2.0, 370.0).positions().is_ok());
    let inf = GridParams::new(
        10.0,
        7.0,
        2.0,
        2.0,
        0.0,
        0.0,
        Angle::from_radians(f64::INFINITY),
    );
    assert!(matches!(
        inf.positions().unwrap_err(),
        GridError::AngleOutOfRange { .. }
    ));
}

#[test]
fn angle_is_checked_before_steps() {
    let err = params(10.0, 7.0, -1.0, -1.0, -10.0).positions().unwrap_err();
    assert!(matches!(err, GridError::AngleOutOfRange { .. }));
    assert!(err.to_string().ends_with("must normalize into 0..=90°"));
}

#[test]
fn rejects_degenerate_extent_and_unresolvable_steps() {
    let err = params(0.0, 7.0, 1.0, 1.0, 10.0).positions().unwrap_err();
    assert!(matches!(err, GridError::InvalidExtent { param: "width", .. }));
    let err = params(10.0, f32::INFINITY, 1.0, 1.0, 10.0).positions().unwrap_err();
    assert!(matches!(err, GridError::InvalidExtent { param: "height", .. }));
    let err = params(1.0e7, 1.0e7, 1.0e-3, 1.0, 10.0).positions().unwrap_err();
    assert!(matches!(err, GridError::StepTooSmall { param: "dx", .. }));
}

#[test]
fn rejects_non_finite_offsets() {
    for (x0, y0, name) in [
        (0.0, f32::NAN, "y0"),
        (0.0, f32::INFINITY, "y0"),
        (f32::NEG_INFINITY, 0.0, "x0"),
        (f32::NAN, f32::NAN, "x0"),
    ] {
        let err = params(10.0, 7.0, 2.0, 2.0, 30.0)
            .with_offset(x0, y0)
            .positions()
            .unwrap_err();
        assert!(
            matches!(err, GridError::NonFiniteOffset { param, .. } if param == name),
            "{err}"
        );
    }
    // Large but finite offsets only shift the phase.
    let n = params(10.0, 7.0, 2.0, 2.0, 30.0)
        .with_offset(1e30, -1e30)
        .positions()
        .unwrap()
        .take(1_000)
        .count();
    assert!(n < 1_000);
}

#[test]
fn huge_finite_angle_builds_a_finite_grid() {
    let p = GridParams::new(10.0, 7.0, 1.0, 1.0, 0.0, 0.0, Angle::from_radians(1e20));
    let alpha = p.validate().unwrap();
    assert!(alpha >= Angle::ZERO && alpha < Angle::QUARTER_TURN);
    let n = p.positions().unwrap().take(10_000).count();
    assert!(n > 0 && n < 10_000);
}

#[test]
fn row_scan_is_reachable_on_an_owned_grid() {
    let grid = params(10.0, 7.0, 2.0, 3.0, 0.0).positions().unwrap();
    assert_eq!(grid.row_scan().first_row(), 0.5);
    assert_eq!(grid.row_scan().clone().count(), 15);
    assert_eq!(grid.count(), 15);
}

#[test]
fn reset_replays_the_same_sequence() {
    let mut grid = params(10240.0, 128.0, 7.0, 7.0, 45.0).positions().unwrap();
    let first: Vec<GridCoord> = grid.by_ref().collect();
    assert_eq!(grid.next(), None);
    grid.reset();
    let second: Vec<GridCoord> = grid.collect();
    assert_eq!(first, second);
}

#[test]
fn seeded_random_grids_stay_inside() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..50 {
        let p = GridParams::new(
            rng.gen_range(1.0..300.0),
            rng.gen_range(1.0..300.0),
            rng.gen_range(0.5..20.0),
            rng.gen_range(0.5..20.0),
            rng.gen_range(-10.0..10.0),
            rng.gen_range(-10.0..10.0),
            Angle::from_degrees(rng.gen_range(0.0..90.0)),
        );
        for c in collect(p) {
            assert!(inside(&p, c, 1e-3), "{c} outside {p:?}");
        }
    }
}

fn inside(p: &GridParams, c: GridCoord, tol: f32) -> bool {
    c.x >= -tol && c.x <= p.width + tol && c.y >= -tol && c.y <= p.height + tol
}

/// Lattice points (same anchoring rule, evaluated in f64) whose unrotated
/// position lies strictly inside the rectangle shrunk by `margin`, and inside
/// the rectangle grown by `margin`.
fn brute_force_counts(p: &GridParams, margin: f64) -> (usize, usize) {
    let (s, c) = p.angle.normalized().sin_cos();
    let (w, h) = (f64::from(p.width), f64::from(p.height));
    let (dx, dy) = (f64::from(p.dx), f64::from(p.dy));
    let (cx, cy) = (w / 2.0, h / 2.0);
    let (ex, ey) = (w * c + h * s, w * s + h * c);
    let ax = cx - (ex / dx * 0.5).floor() * dx + f64::from(p.x0);
    let ay = cy - (ey / dy * 0.5).floor() * dy + f64::from(p.y0);
    let index_range = |lo: f64, hi: f64, anchor: f64, step: f64| {
        ((lo - anchor) / step).floor() as i64 - 1..=((hi - anchor) / step).ceil() as i64 + 1
    };
    let i_range = index_range(cx - ex / 2.0, cx + ex / 2.0, ax, dx);
    let j_range = index_range(cy - ey / 2.0, cy + ey / 2.0, ay, dy);
    let (mut inner, mut outer) = (0, 0);
    for j in j_range {
        for i in i_range.clone() {
            let (x, y) = (ax + i as f64 * dx - cx, ay + j as f64 * dy - cy);
            let ux = x * c + y * s + cx;
            let uy = -x * s + y * c + cy;
            if ux > margin && ux < w - margin && uy > margin && uy < h - margin {
                inner += 1;
            }
            if ux >= -margin && ux <= w + margin && uy >= -margin && uy <= h + margin {
                outer += 1;
            }
        }
    }
    (inner, outer)
}

fn arb_params() -> impl Strategy<Value = GridParams> {
    (
        1.0f32..120.0,
        1.0f32..120.0,
        0.5f32..12.0,
        0.5f32..12.0,
        -10.0f32..10.0,
        -10.0f32..10.0,
        0.0f64..90.0,
    )
        .prop_map(|(w, h, dx, dy, x0, y0, deg)| {
            GridParams::new(w, h, dx, dy, x0, y0, Angle::from_degrees(deg))
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn points_lie_inside_rectangle(p in arb_params()) {
        let grid = p.positions().unwrap();
        let frame = grid.row_scan().frame().clone();
        let bx = frame.wrapping_box();
        for c in grid {
            prop_assert!(inside(&p, c, 1e-3), "{} outside", c);
            let r = frame.to_rotated(c.to_vec2());
            prop_assert!(r.x >= bx.min.x - 1e-3 && r.x <= bx.max().x + 1e-3);
            prop_assert!(r.y >= bx.min.y - 1e-3 && r.y <= bx.max().y + 1e-3);
        }
    }

    #[test]
    fn matches_brute_force_lattice_filter(p in arb_params()) {
        let n = p.positions().unwrap().count();
        let (inner, outer) = brute_force_counts(&p, 1e-3);
        prop_assert!(inner <= n && n <= outer, "inner {} <= {} <= outer {}", inner, n, outer);
    }

    #[test]
    fn output_is_row_major_in_rotated_space(p in arb_params()) {
        let grid = p.positions().unwrap();
        let rotated: Vec<Vec2> = grid.row_scan().clone().collect();
        for w in rotated.windows(2) {
            prop_assert!(w[0].y < w[1].y || (w[0].y == w[1].y && w[0].x < w[1].x));
        }
        let frame = grid.row_scan().frame().clone();
        for (c, r) in grid.zip(rotated) {
            prop_assert_eq!(c, GridCoord::from(frame.to_original(r)));
        }
    }

    #[test]
    fn reset_after_partial_run_is_idempotent(p in arb_params(), k in 0usize..50) {
        let mut grid = p.positions().unwrap();
        let fresh: Vec<GridCoord> = grid.clone().collect();
        let _ = grid.by_ref().take(k).count();
        grid.reset();
        let replay: Vec<GridCoord> = grid.collect();
        prop_assert_eq!(fresh, replay);
    }
}

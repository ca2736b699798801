use flo_ascii_curves::*;

fn close_to(a: Vector2, b: Vector2, tolerance: f64) -> bool {
    a.distance_to(b) <= tolerance
}

#[test]
pub fn quadratic_end_points_are_exact() {
    let curve = QuadraticBezier::new((1.25, 3.5), (17.3, -4.1), (99.9, 12.7));

    assert!(curve.point_at(0.0) == Vector2(1.25, 3.5), "Start point was {:?}", curve.point_at(0.0));
    assert!(curve.point_at(1.0) == Vector2(99.9, 12.7), "End point was {:?}", curve.point_at(1.0));
}

#[test]
pub fn cubic_end_points_are_exact() {
    let curve = CubicBezier::new((0.1, 0.2), (33.3, 101.7), (66.6, 99.9), (100.3, 0.7));

    assert!(curve.point_at(0.0) == Vector2(0.1, 0.2), "Start point was {:?}", curve.point_at(0.0));
    assert!(curve.point_at(1.0) == Vector2(100.3, 0.7), "End point was {:?}", curve.point_at(1.0));
}

#[test]
pub fn quadratic_midpoint() {
    let curve = QuadraticBezier::new((0.0, 0.0), (50.0, 100.0), (100.0, 0.0));

    assert!(curve.point_at(0.5) == Vector2(50.0, 50.0), "Midpoint was {:?}", curve.point_at(0.5));
}

#[test]
pub fn cubic_length_is_plausible() {
    let curve   = CubicBezier::new((0.0, 0.0), (33.0, 100.0), (66.0, 100.0), (100.0, 0.0));
    let length  = curve.length(DEFAULT_LENGTH_TOLERANCE);

    assert!(length > 100.0 && length < 300.0, "Length was {}", length);
}

#[test]
pub fn straight_cubic_length_matches_distance() {
    let curve   = CubicBezier::from_line(Vector2(0.0, 0.0), Vector2(30.0, 40.0));
    let length  = curve.length(0.001);

    assert!((length - 50.0).abs() < 0.01, "Length was {}", length);
}

#[test]
pub fn symmetric_s_curve_is_not_measured_as_a_line() {
    // The midpoint of this curve lies exactly on the chord between its end points
    let curve   = CubicBezier::new((0.0, 0.0), (100.0, 100.0), (0.0, -100.0), (100.0, 0.0));
    let length  = curve.length(0.01);

    assert!(length > 120.0, "Length was {}", length);
}

#[test]
pub fn zero_length_curve_has_zero_length() {
    let curve   = CubicBezier::new((5.0, 5.0), (5.0, 5.0), (5.0, 5.0), (5.0, 5.0));
    let length  = curve.length(0.01);

    assert!(length == 0.0, "Length was {}", length);
}

#[test]
pub fn split_curves_meet_at_the_split_point() {
    let curve = CubicBezier::new((10.0, 20.0), (-30.0, 80.0), (120.0, 90.0), (60.0, 5.0));

    for idx in 1..20 {
        let t               = (idx as f64) / 20.0;
        let (left, right)   = curve.split(t);
        let expected        = curve.point_at(t);

        assert!(close_to(left.point_at(1.0), expected, 1e-9), "Left half ends at {:?}, expected {:?}", left.point_at(1.0), expected);
        assert!(close_to(right.point_at(0.0), expected, 1e-9), "Right half starts at {:?}, expected {:?}", right.point_at(0.0), expected);
    }
}

#[test]
pub fn split_curves_follow_the_original() {
    let curve           = QuadraticBezier::new((0.0, 0.0), (40.0, 90.0), (100.0, 10.0));
    let (left, right)   = curve.split(0.25);

    for idx in 0..=10 {
        let t = (idx as f64) / 10.0;

        assert!(close_to(left.point_at(t), curve.point_at(t * 0.25), 1e-9));
        assert!(close_to(right.point_at(t), curve.point_at(0.25 + t * 0.75), 1e-9));
    }
}

#[test]
pub fn cubic_bounding_box_is_tight() {
    let curve   = CubicBezier::new((0.0, 0.0), (33.0, 100.0), (66.0, 100.0), (100.0, 0.0));
    let bounds  = curve.bounding_box();

    // Maximum y is 75 (at t=0.5), well short of the control points
    assert!((bounds.max.y() - 75.0).abs() < 1e-9, "Bounds were {:?}", bounds);
    assert!(bounds.min == Vector2(0.0, 0.0), "Bounds were {:?}", bounds);
    assert!(bounds.max.x() == 100.0, "Bounds were {:?}", bounds);

    for idx in 0..=100 {
        let point = curve.point_at((idx as f64) / 100.0);
        assert!(bounds.expand(1e-9).contains(point), "{:?} is outside {:?}", point, bounds);
    }
}

#[test]
pub fn quadratic_bounding_box_is_tight() {
    let curve   = QuadraticBezier::new((0.0, 0.0), (50.0, 100.0), (100.0, 0.0));
    let bounds  = curve.bounding_box();

    assert!((bounds.max.y() - 50.0).abs() < 1e-9, "Bounds were {:?}", bounds);
}

#[test]
pub fn straight_curve_has_no_curvature() {
    let curve = CubicBezier::from_line(Vector2(0.0, 0.0), Vector2(100.0, 50.0));

    assert!(curve.curvature_at(0.3).abs() < 1e-12, "Curvature was {}", curve.curvature_at(0.3));
}

#[test]
pub fn curvature_of_circle_arc() {
    let arc         = arc_to_cubics(Vector2(0.0, 0.0), 10.0, 10.0, 0.0, std::f64::consts::FRAC_PI_2);
    let curvature   = arc[0].curvature_at(0.5);

    assert!((curvature - 0.1).abs() < 0.002, "Curvature was {}", curvature);
}

#[test]
pub fn degenerate_curve_defaults() {
    let curve = CubicBezier::new((3.0, 4.0), (3.0, 4.0), (3.0, 4.0), (3.0, 4.0));

    assert!(curve.curvature_at(0.5) == 0.0);
    assert!(curve.tangent_at(0.5) == Vector2(1.0, 0.0), "Tangent was {:?}", curve.tangent_at(0.5));
    assert!(curve.normal_at(0.5) == Vector2(0.0, 1.0), "Normal was {:?}", curve.normal_at(0.5));
}

#[test]
pub fn tangent_at_stationary_end_uses_chord() {
    let curve   = CubicBezier::new((0.0, 0.0), (0.0, 0.0), (10.0, 0.0), (10.0, 0.0));
    let tangent = curve.tangent_at(0.0);

    assert!(close_to(tangent, Vector2(1.0, 0.0), 1e-9), "Tangent was {:?}", tangent);
}

#[test]
pub fn normal_is_rotated_tangent() {
    let curve   = QuadraticBezier::new((0.0, 0.0), (50.0, 0.0), (100.0, 0.0));
    let normal  = curve.normal_at(0.5);

    assert!(close_to(normal, Vector2(0.0, 1.0), 1e-9), "Normal was {:?}", normal);
}

#[test]
pub fn nearest_point_on_cubic() {
    let curve   = CubicBezier::new((0.0, 0.0), (33.0, 100.0), (66.0, 100.0), (100.0, 0.0));
    let target  = curve.point_at(0.37) + curve.normal_at(0.37) * 5.0;
    let nearest = curve.nearest_point(target, DEFAULT_NEAREST_POINT_SAMPLES);

    assert!((nearest.t - 0.37).abs() < 1e-4, "Nearest t was {}", nearest.t);
    assert!((nearest.distance - 5.0).abs() < 1e-4, "Distance was {}", nearest.distance);
}

#[test]
pub fn nearest_point_clamps_to_end() {
    let curve   = QuadraticBezier::new((0.0, 0.0), (50.0, 50.0), (100.0, 0.0));
    let nearest = curve.nearest_point(Vector2(150.0, -20.0), DEFAULT_NEAREST_POINT_SAMPLES);

    assert!(nearest.t == 1.0, "Nearest t was {}", nearest.t);
    assert!(nearest.point == Vector2(100.0, 0.0));
}

#[test]
pub fn quadratic_to_cubic_is_the_same_curve() {
    let quad    = QuadraticBezier::new((0.0, 0.0), (50.0, 100.0), (100.0, 0.0));
    let cubic   = quad.to_cubic();

    for idx in 0..=20 {
        let t = (idx as f64) / 20.0;
        assert!(close_to(quad.point_at(t), cubic.point_at(t), 1e-9));
    }
}

#[test]
pub fn curve_enum_dispatches_to_degree() {
    let quad    = Curve::from(QuadraticBezier::new((0.0, 0.0), (50.0, 100.0), (100.0, 0.0)));
    let cubic   = Curve::from(CubicBezier::new((0.0, 0.0), (33.0, 100.0), (66.0, 100.0), (100.0, 0.0)));

    assert!(quad.point_at(0.5) == Vector2(50.0, 50.0));
    assert!(quad.nearest_point_iterations() == 5);
    assert!(cubic.nearest_point_iterations() == 10);
    assert!(quad.control_points().len() == 3);
    assert!(cubic.control_points().len() == 4);

    let (left, right) = cubic.split(0.5);
    assert!(close_to(left.end_point(), right.start_point(), 1e-12));
    assert!(cubic.reverse().start_point() == Vector2(100.0, 0.0));
}

#[test]
pub fn extrapolates_outside_unit_range() {
    let curve = QuadraticBezier::new((0.0, 0.0), (1.0, 0.0), (2.0, 0.0));

    assert!(close_to(curve.point_at(2.0), Vector2(4.0, 0.0), 1e-12), "Point was {:?}", curve.point_at(2.0));
}

#[test]
pub fn quarter_arc_stays_near_the_circle() {
    let arc = arc_to_cubics(Vector2(10.0, 10.0), 20.0, 20.0, 0.0, std::f64::consts::PI * 2.0);

    assert!(arc.len() == 4, "Expected 4 curves, found {}", arc.len());

    for curve in arc.iter() {
        for idx in 0..=10 {
            let point   = curve.point_at((idx as f64) / 10.0);
            let radius  = point.distance_to(Vector2(10.0, 10.0));

            assert!((radius - 20.0).abs() < 0.01, "Radius was {}", radius);
        }
    }
}

#[test]
pub fn huge_sweep_is_a_full_circle() {
    let center  = Vector2(10.0, 10.0);
    let arc     = arc_to_cubics(center, 20.0, 20.0, 0.0, 1e20);

    assert!(arc.len() == 4, "Expected 4 curves, found {}", arc.len());
    assert!(arc[0].p0.is_near(Vector2(30.0, 10.0), 1e-9));
    assert!(arc[3].p3.is_near(Vector2(30.0, 10.0), 1e-9));

    let backwards = arc_to_cubics(center, 20.0, 20.0, 0.0, -1e20);
    assert!(backwards.len() == 4, "Expected 4 curves, found {}", backwards.len());
    assert!(backwards[0].p3.is_near(Vector2(10.0, -10.0), 1e-9), "First curve ended at {:?}", backwards[0].p3);
}

use flo_ascii_curves::*;

fn distance_to_curves(point: Vector2, curves: &[CubicBezier]) -> f64 {
    curves.iter()
        .map(|curve| curve.nearest_point(point, 100).distance)
        .fold(f64::MAX, f64::min)
}

fn sine_wave(num_points: usize) -> Vec<Vector2> {
    (0..num_points)
        .map(|idx| {
            let x = (idx as f64) * 2.0;
            Vector2(x, (x / 10.0).sin() * 20.0)
        })
        .collect()
}

#[test]
pub fn fitted_curves_pass_near_every_point() {
    let points = sine_wave(50);
    let curves = fit_curve(&points, 0.5);

    assert!(!curves.is_empty());

    for point in points.iter() {
        let distance = distance_to_curves(*point, &curves);
        assert!(distance <= 0.5, "{:?} is {} from the fitted curves", point, distance);
    }
}

#[test]
pub fn fitted_curves_are_continuous() {
    let points = sine_wave(80);
    let curves = fit_curve(&points, 0.25);

    assert!(curves[0].p0 == points[0]);
    assert!(curves[curves.len()-1].p3 == points[points.len()-1]);

    for idx in 1..curves.len() {
        assert!(curves[idx-1].p3 == curves[idx].p0, "Curve {} does not join the next one", idx-1);
    }
}

#[test]
pub fn smooth_points_need_few_curves() {
    let points = (0..=20).map(|idx| Vector2((idx as f64) * 5.0, 0.0)).collect::<Vec<_>>();
    let curves = fit_curve(&points, 0.5);

    assert!(curves.len() == 1, "Generated {} curves", curves.len());
}

#[test]
pub fn fit_two_points() {
    let curves = fit_curve(&[Vector2(0.0, 0.0), Vector2(30.0, 0.0)], 0.5);

    assert!(curves.len() == 1);
    assert!(curves[0].p1 == Vector2(10.0, 0.0), "Control point 1 was {:?}", curves[0].p1);
    assert!(curves[0].p2 == Vector2(20.0, 0.0), "Control point 2 was {:?}", curves[0].p2);
}

#[test]
pub fn fit_no_points() {
    assert!(fit_curve(&[], 0.5).is_empty());
}

#[test]
pub fn fit_ignores_repeated_points() {
    let points = vec![Vector2(0.0, 0.0), Vector2(0.0, 0.0), Vector2(10.0, 10.0), Vector2(10.0, 10.0), Vector2(20.0, 0.0), Vector2(20.0, 0.0)];
    let curves = fit_curve(&points, 0.5);

    for curve in curves.iter() {
        for point in curve.control_points() {
            assert!(point.is_finite(), "Curve {:?} has a non-finite control point", curve);
        }
    }

    for point in points.iter() {
        assert!(distance_to_curves(*point, &curves) <= 0.5);
    }
}

#[test]
pub fn fit_sharp_corner() {
    let mut points = (0..=10).map(|idx| Vector2((idx as f64) * 5.0, 0.0)).collect::<Vec<_>>();
    points.extend((1..=10).map(|idx| Vector2(50.0, (idx as f64) * 5.0)));

    let curves = fit_curve(&points, 0.5);

    for point in points.iter() {
        let distance = distance_to_curves(*point, &curves);
        assert!(distance <= 0.5, "{:?} is {} from the fitted curves", point, distance);
    }
}

#[test]
pub fn fit_path_marks_smooth_joins() {
    let points  = sine_wave(100);
    let path    = fit_path(&points, 0.5, false);

    assert!(!path.is_closed());
    assert!(path.start_point() == Some(points[0]));
    assert!(path.current_point() == Some(points[points.len()-1]));

    // A sine wave with three periods needs several curves to fit it
    assert!(path.num_anchors() >= 3, "Fitted with {} anchors", path.num_anchors());
    assert!(path.anchors()[1..path.num_anchors()-1].iter().all(|anchor| anchor.anchor_type() == AnchorType::Smooth));
}

#[test]
pub fn fit_closed_path() {
    let points = (0..=40)
        .map(|idx| {
            let angle = (idx as f64) / 40.0 * std::f64::consts::PI * 2.0;
            Vector2(angle.cos() * 30.0, angle.sin() * 30.0)
        })
        .collect::<Vec<_>>();

    let path = fit_path(&points, 0.5, true);

    assert!(path.is_closed());
    assert!(path.anchors()[0].position().is_near(Vector2(30.0, 0.0), 1e-9));
    assert!(!path.anchors()[path.num_anchors()-1].position().is_near(Vector2(30.0, 0.0), 1e-6), "Closing anchor was not merged");
}

#[test]
pub fn offset_curve_is_parallel() {
    let curve   = CubicBezier::new((0.0, 0.0), (30.0, 60.0), (70.0, 60.0), (100.0, 0.0));
    let offset  = curve.offset(5.0, DEFAULT_OFFSET_SEGMENTS, 0.1);

    assert!(!offset.is_empty());

    for idx in 0..=20 {
        let t       = (idx as f64) / 20.0;
        let point   = curve.point_at(t) + curve.normal_at(t) * 5.0;
        let distance = distance_to_curves(point, &offset);

        assert!(distance < 0.5, "Offset point {:?} is {} from the offset curve", point, distance);
    }
}

#[test]
pub fn fit_path_uses_fit_error_from_options() {
    let points  = sine_wave(100);
    let options = GeometryOptions::default().with_fit_error(2.0);

    assert!(fit_path_with_options(&points, false, &options) == fit_path(&points, 2.0, false));
    assert!(fit_path_with_options(&points, false, &GeometryOptions::default()) == fit_path(&points, DEFAULT_FIT_ERROR, false));
}

#[test]
pub fn offset_curve_uses_options() {
    let curve   = CubicBezier::new((0.0, 0.0), (30.0, 60.0), (70.0, 60.0), (100.0, 0.0));
    let options = GeometryOptions::default().with_offset_segments(40).with_fit_error(0.1);

    assert!(options.offset_segments == 40);
    assert!(curve.offset_with_options(5.0, &options) == curve.offset(5.0, 40, 0.1));
    assert!(curve.offset_with_options(5.0, &GeometryOptions::default()) == curve.offset(5.0, DEFAULT_OFFSET_SEGMENTS, DEFAULT_FIT_ERROR));
}

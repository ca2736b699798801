use flo_ascii_curves::*;

fn sample_path() -> Path {
    let mut path = Path::new();

    path.move_to((0.0, 0.0));
    path.line_to((10.0, 0.0));
    path.bezier_curve_to((14.0, 0.0), (20.0, 6.0), (20.0, 10.0));
    path.push_anchor(AnchorPoint::new((10.0, 20.0), AnchorType::Symmetric, None, Some(Vector2(6.0, 20.0))));
    path.close_path();

    path.with_fill_rule(FillRule::EvenOdd)
}

#[test]
pub fn json_round_trip() {
    let path        = sample_path();
    let json        = serde_json::to_string(&path.to_data()).unwrap();
    let data        = serde_json::from_str::<PathData>(&json).unwrap();
    let restored    = Path::from_data(&data).unwrap();

    assert!(restored == path, "Restored {:?}, expected {:?}", restored, path);
}

#[test]
pub fn json_uses_lowercase_anchor_kinds() {
    let json = serde_json::to_value(&sample_path().to_data()).unwrap();

    assert!(json["anchors"][0]["kind"] == "corner");
    assert!(json["anchors"][3]["kind"] == "symmetric");
    assert!(json["anchors"][3]["handle_in"] == serde_json::json!([14.0, 20.0]));
    assert!(json["closed"] == true);
}

#[test]
pub fn segments_are_optional() {
    let json = r#"{
        "anchors": [
            { "kind": "corner", "x": 0.0, "y": 0.0 },
            { "kind": "corner", "x": 10.0, "y": 0.0 },
            { "kind": "smooth", "x": 10.0, "y": 10.0, "handle_in": [10.0, 5.0], "handle_out": [10.0, 12.0] }
        ],
        "closed": false
    }"#;

    let data = serde_json::from_str::<PathData>(json).unwrap();
    let path = Path::from_data(&data).unwrap();

    assert!(path.segment_count() == 2);
    assert!(path.fill_rule() == FillRule::NonZero);
    assert!(path.anchors()[2].anchor_type() == AnchorType::Smooth);
    assert!(path.anchors()[2].handle_out() == Some(Vector2(10.0, 12.0)));
}

#[test]
pub fn missing_anchor_is_an_error() {
    let mut data = Path::rectangle(0.0, 0.0, 10.0, 10.0).to_data();
    data.segments.as_mut().unwrap()[3] = SegmentData { start: 3, end: 7 };

    assert!(Path::from_data(&data) == Err(PathError::MissingAnchor { segment: 3, anchor: 7, anchor_count: 4 }));
}

#[test]
pub fn disconnected_segment_is_an_error() {
    let mut data = Path::rectangle(0.0, 0.0, 10.0, 10.0).to_data();
    data.segments.as_mut().unwrap()[1] = SegmentData { start: 1, end: 3 };

    assert!(Path::from_data(&data) == Err(PathError::DisconnectedSegment { segment: 1, start: 1, end: 3 }));
}

#[test]
pub fn wrong_segment_count_is_an_error() {
    let mut data = Path::rectangle(0.0, 0.0, 10.0, 10.0).to_data();
    data.closed = false;

    assert!(Path::from_data(&data) == Err(PathError::SegmentCount { expected: 3, found: 4 }));
}

#[test]
pub fn non_finite_coordinate_is_an_error() {
    let mut data = Path::rectangle(0.0, 0.0, 10.0, 10.0).to_data();
    data.anchors[2].handle_out = Some((f64::NAN, 0.0));

    assert!(Path::from_data(&data) == Err(PathError::NonFiniteCoordinate { anchor: 2 }));
}

#[test]
pub fn errors_describe_the_problem() {
    let error = PathError::MissingAnchor { segment: 1, anchor: 9, anchor_count: 4 };

    assert!(error.to_string() == "segment 1 refers to anchor 9, but the path only has 4 anchors", "Message was {}", error);
}

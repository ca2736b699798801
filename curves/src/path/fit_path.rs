use super::path::*;
use super::anchor::*;
use crate::geo::*;
use crate::bezier::*;
use crate::options::*;

/// Handles that are this close to pointing in opposite directions produce a smooth anchor
const SMOOTH_JOIN_TOLERANCE: f64 = 1e-6;

///
/// Fits a path of cubic curves through a list of points (for smoothing freehand strokes)
///
/// Anchors where two fitted curves meet with a continuous tangent are marked as smooth. If `closed` is set
/// the path is closed, merging the last anchor into the first if the points end where they started.
///
pub fn fit_path(points: &[Vector2], max_error: f64, closed: bool) -> Path {
    let curves  = fit_curve(points, max_error);
    let mut path = Path::new();

    let first = match curves.first() {
        Some(first) => first,
        None        => return path,
    };

    path.move_to(first.p0);

    for curve in curves.iter() {
        path.bezier_curve_to(curve.p1, curve.p2, curve.p3);
    }

    // Joins between curves are smooth if their handles line up
    let num_anchors = path.num_anchors();
    for idx in 1..(num_anchors - 1) {
        if let Some(anchor) = path.anchor_mut(idx) {
            if let (Some(handle_in), Some(handle_out)) = (anchor.handle_in(), anchor.handle_out()) {
                let dir_in  = (handle_in - anchor.position()).normalize();
                let dir_out = (handle_out - anchor.position()).normalize();

                if dir_in != Vector2::ZERO && (dir_in + dir_out).length() < SMOOTH_JOIN_TOLERANCE {
                    anchor.set_anchor_type(AnchorType::Smooth);
                }
            }
        }
    }

    if closed {
        path.close_path();
    }

    path
}

///
/// Fits a path of cubic curves through a list of points, using the fit error from a set of options
///
#[inline]
pub fn fit_path_with_options(points: &[Vector2], closed: bool, options: &GeometryOptions) -> Path {
    fit_path(points, options.fit_error, closed)
}

use super::cubic::*;
use crate::geo::*;

use std::f64::consts::{FRAC_PI_2, PI};

///
/// Approximates an elliptical arc with cubic bezier curves
///
/// The arc runs from `start_angle` for `sweep` radians (positive sweeps move from the x axis towards the y
/// axis). Each curve covers at most a quarter turn, which keeps the radial error below 0.03% of the radius.
/// Sweeps of more than a full turn are limited to a full turn.
///
pub fn arc_to_cubics(center: Vector2, radius_x: f64, radius_y: f64, start_angle: f64, sweep: f64) -> Vec<CubicBezier> {
    if sweep == 0.0 || !sweep.is_finite() {
        return vec![];
    }

    let sweep       = sweep.max(-2.0 * PI).min(2.0 * PI);
    let num_curves  = (sweep.abs() / FRAC_PI_2).ceil().max(1.0) as usize;
    let step        = sweep / (num_curves as f64);
    let handle      = 4.0/3.0 * (step / 4.0).tan();

    let point_at    = |angle: f64| center + Vector2(radius_x * angle.cos(), radius_y * angle.sin());
    let tangent_at  = |angle: f64| Vector2(-radius_x * angle.sin(), radius_y * angle.cos());

    (0..num_curves)
        .map(|idx| {
            let angle1  = start_angle + step * (idx as f64);
            let angle2  = angle1 + step;

            let start   = point_at(angle1);
            let end     = point_at(angle2);

            CubicBezier::new(start, start + tangent_at(angle1) * handle, end - tangent_at(angle2) * handle, end)
        })
        .collect()
}

//! 2D circular-arc math used by curve segments.
//!
//! Arcs are described by `center`, `radius`, the polar `start_angle` of the
//! first point measured at the center, and a signed `sweep`:
//! - `sweep > 0`: counter-clockwise (left turn)
//! - `sweep < 0`: clockwise (right turn)
use super::bearing::{direction, left_normal};
use super::Point2;

/// Center of the circle tangent to a ray leaving `pc` at `entry_bearing`.
///
/// The center sits on the left of the ray for a positive `delta`, on the right otherwise.
#[must_use]
pub fn arc_center(pc: &Point2, entry_bearing: f64, radius: f64, delta: f64) -> Point2 {
    let side = if delta >= 0.0 { 1.0 } else { -1.0 };
    pc + left_normal(entry_bearing) * (side * radius)
}

/// Evaluates a point on an arc at parameter `t` in `[0, 1]`.
#[must_use]
pub fn arc_point_at(center: &Point2, radius: f64, start_angle: f64, sweep: f64, t: f64) -> Point2 {
    let angle = start_angle + sweep * t;
    center + direction(angle) * radius
}

/// Number of chords needed so that no chord's sagitta exceeds `tolerance`.
#[must_use]
pub fn arc_subdivision_count(radius: f64, abs_sweep: f64, tolerance: f64) -> u32 {
    if radius < 1e-12 || abs_sweep < 1e-12 || tolerance <= 0.0 {
        return 1;
    }
    // sagitta = r * (1 - cos(θ/2))
    let max_angle = if tolerance >= radius {
        std::f64::consts::PI
    } else {
        2.0 * (1.0 - tolerance / radius).acos()
    };
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let n = (abs_sweep / max_angle).ceil() as u32;
    n.max(1)
}

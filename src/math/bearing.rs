//! Plan-view bearing math.
//!
//! Bearings are measured from the +X axis, counter-clockwise positive,
//! and normalized to `[0, 2π)`. Signed turn angles live in `(-π, π]`;
//! positive is a left (counter-clockwise) turn.
use std::f64::consts::{PI, TAU};

use super::{Point2, Vector2, TOLERANCE};

/// Normalizes an angle into `[0, 2π)`.
#[must_use]
pub fn normalize_angle(angle: f64) -> f64 {
    let a = angle.rem_euclid(TAU);
    // rem_euclid can round up to exactly TAU for tiny negative inputs.
    if a >= TAU {
        0.0
    } else {
        a
    }
}

/// Normalizes an angle into `(-π, π]`.
#[must_use]
pub fn normalize_signed(angle: f64) -> f64 {
    let a = normalize_angle(angle);
    if a > PI {
        a - TAU
    } else {
        a
    }
}

/// Returns the bearing of the ray `from → to`, or `None` when the points coincide.
#[must_use]
pub fn bearing(from: &Point2, to: &Point2) -> Option<f64> {
    let d = to - from;
    if d.norm() < TOLERANCE {
        return None;
    }
    Some(normalize_angle(d.y.atan2(d.x)))
}

/// Unit direction vector for a bearing.
#[must_use]
pub fn direction(bearing: f64) -> Vector2 {
    Vector2::new(bearing.cos(), bearing.sin())
}

/// Unit normal pointing to the left of a bearing.
#[must_use]
pub fn left_normal(bearing: f64) -> Vector2 {
    Vector2::new(-bearing.sin(), bearing.cos())
}

/// Signed turn from `b_in` to `b_out`, in `(-π, π]`.
#[must_use]
pub fn turn_angle(b_in: f64, b_out: f64) -> f64 {
    normalize_signed(b_out - b_in)
}

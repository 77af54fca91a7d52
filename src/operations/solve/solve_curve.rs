use std::f64::consts::PI;

use crate::config::AlignmentConfig;
use crate::error::{GeometryError, Result};
use crate::math::arc_2d::arc_center;
use crate::math::bearing::{bearing, direction, turn_angle};
use crate::math::Point2;

/// Resolved geometry of a circular arc fitted at a control point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveSolution {
    pub radius: f64,
    /// Signed turn angle in `(-π, π)`; positive turns left.
    pub delta_angle: f64,
    pub tangent_length: f64,
    pub arc_length: f64,
    pub pc_point: Point2,
    pub pt_point: Point2,
    pub center: Point2,
    pub entry_bearing: f64,
    pub exit_bearing: f64,
}

/// Outcome of solving one interior control point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum VertexSolution {
    /// Requested radius is zero: the tangents meet at the control point.
    Kink,
    /// The turn is below the collinear tolerance: no curve is needed.
    Collinear,
    /// A circular arc tangent to both adjacent spans.
    Curve(CurveSolution),
}

/// Fits a circular arc of a requested radius at `pi`, tangent to the rays
/// `prev → pi` and `pi → next`.
///
/// The result is mathematically exact for the inputs; whether the arc fits
/// inside the adjacent spans is left to [`Validate`](crate::operations::query::Validate).
pub struct SolveCurve {
    prev: Point2,
    pi: Point2,
    next: Point2,
    radius: f64,
    config: AlignmentConfig,
}

impl SolveCurve {
    /// Creates a new `SolveCurve` operation with default tolerances.
    #[must_use]
    pub fn new(prev: Point2, pi: Point2, next: Point2, radius: f64) -> Self {
        Self {
            prev,
            pi,
            next,
            radius,
            config: AlignmentConfig::default(),
        }
    }

    /// Overrides the solve tolerances.
    #[must_use]
    pub fn with_config(mut self, config: AlignmentConfig) -> Self {
        self.config = config;
        self
    }

    /// Executes the solve.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::InvalidRadius`] for a negative or non-finite
    /// radius, and [`GeometryError::DegenerateCurve`] when a neighbour
    /// coincides with `pi` or the turn is too close to a full reversal for a
    /// bounded tangent length.
    pub fn execute(&self) -> Result<VertexSolution> {
        let r = self.radius;
        if !r.is_finite() || r < 0.0 {
            return Err(GeometryError::InvalidRadius(r).into());
        }
        if r <= 0.0 {
            return Ok(VertexSolution::Kink);
        }

        let (Some(b_in), Some(b_out)) = (bearing(&self.prev, &self.pi), bearing(&self.pi, &self.next))
        else {
            return Err(GeometryError::DegenerateCurve(
                "adjacent control points coincide".into(),
            )
            .into());
        };

        let delta = turn_angle(b_in, b_out);
        let abs_delta = delta.abs();
        if abs_delta < self.config.collinear_tolerance {
            return Ok(VertexSolution::Collinear);
        }
        if PI - abs_delta < self.config.reversal_tolerance {
            return Err(GeometryError::DegenerateCurve(format!(
                "turn of {abs_delta} rad is a near-reversal"
            ))
            .into());
        }

        let tangent_length = r * (abs_delta / 2.0).tan();
        let pc_point = self.pi - direction(b_in) * tangent_length;
        let pt_point = self.pi + direction(b_out) * tangent_length;

        Ok(VertexSolution::Curve(CurveSolution {
            radius: r,
            delta_angle: delta,
            tangent_length,
            arc_length: r * abs_delta,
            pc_point,
            pt_point,
            center: arc_center(&pc_point, b_in, r, delta),
            entry_bearing: b_in,
            exit_bearing: b_out,
        }))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::AlignmentError;
    use approx::assert_relative_eq;
    use std::f64::consts::FRAC_PI_2;

    fn solve(prev: (f64, f64), pi: (f64, f64), next: (f64, f64), r: f64) -> Result<VertexSolution> {
        SolveCurve::new(
            Point2::new(prev.0, prev.1),
            Point2::new(pi.0, pi.1),
            Point2::new(next.0, next.1),
            r,
        )
        .execute()
    }

    fn curve(s: VertexSolution) -> CurveSolution {
        match s {
            VertexSolution::Curve(c) => c,
            other => panic!("expected curve, got {other:?}"),
        }
    }

    #[test]
    fn right_angle_left_turn() {
        let c = curve(solve((0.0, 0.0), (100.0, 0.0), (100.0, 100.0), 30.0).unwrap());
        assert_relative_eq!(c.delta_angle, FRAC_PI_2, epsilon = 1e-12);
        assert_relative_eq!(c.tangent_length, 30.0, epsilon = 1e-9);
        assert_relative_eq!(c.arc_length, 30.0 * FRAC_PI_2, epsilon = 1e-9);
        assert_relative_eq!(c.pc_point.x, 70.0, epsilon = 1e-9);
        assert_relative_eq!(c.pc_point.y, 0.0, epsilon = 1e-9);
        assert_relative_eq!(c.pt_point.x, 100.0, epsilon = 1e-9);
        assert_relative_eq!(c.pt_point.y, 30.0, epsilon = 1e-9);
        assert_relative_eq!(c.center.x, 70.0, epsilon = 1e-9);
        assert_relative_eq!(c.center.y, 30.0, epsilon = 1e-9);
    }

    #[test]
    fn right_turn_has_negative_delta() {
        let c = curve(solve((0.0, 0.0), (100.0, 0.0), (100.0, -100.0), 30.0).unwrap());
        assert!(c.delta_angle < 0.0);
        assert_relative_eq!(c.tangent_length, 30.0, epsilon = 1e-9);
        assert!(c.center.y < 0.0);
    }

    #[test]
    fn center_is_radius_away_from_pc_and_pt() {
        let c = curve(solve((0.0, 0.0), (50.0, 10.0), (80.0, 60.0), 40.0).unwrap());
        assert_relative_eq!((c.pc_point - c.center).norm(), 40.0, epsilon = 1e-9);
        assert_relative_eq!((c.pt_point - c.center).norm(), 40.0, epsilon = 1e-9);
    }

    #[test]
    fn zero_radius_is_a_kink() {
        let s = solve((0.0, 0.0), (100.0, 0.0), (100.0, 100.0), 0.0).unwrap();
        assert_eq!(s, VertexSolution::Kink);
    }

    #[test]
    fn collinear_points_need_no_curve() {
        let s = solve((0.0, 0.0), (50.0, 0.0), (120.0, 0.0), 500.0).unwrap();
        assert_eq!(s, VertexSolution::Collinear);
    }

    #[test]
    fn negative_radius_is_rejected() {
        let err = solve((0.0, 0.0), (100.0, 0.0), (100.0, 100.0), -1.0).unwrap_err();
        assert!(matches!(
            err,
            AlignmentError::Geometry(GeometryError::InvalidRadius(_))
        ));
    }

    #[test]
    fn reversal_is_degenerate() {
        let err = solve((0.0, 0.0), (100.0, 0.0), (0.0, 0.0), 30.0).unwrap_err();
        assert!(matches!(
            err,
            AlignmentError::Geometry(GeometryError::DegenerateCurve(_))
        ));
    }

    #[test]
    fn coincident_neighbour_is_degenerate() {
        let err = solve((100.0, 0.0), (100.0, 0.0), (100.0, 100.0), 30.0).unwrap_err();
        assert!(matches!(
            err,
            AlignmentError::Geometry(GeometryError::DegenerateCurve(_))
        ));
    }

    #[test]
    fn solve_is_deterministic() {
        let a = solve((0.0, 0.0), (37.0, 11.0), (90.0, -20.0), 25.0).unwrap();
        let b = solve((0.0, 0.0), (37.0, 11.0), (90.0, -20.0), 25.0).unwrap();
        assert_eq!(a, b);
    }
}

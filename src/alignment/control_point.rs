use crate::math::{plan, Point2, Point3};

/// A user-placed vertex (PI) of the design polyline.
///
/// The control point's index is its position in the owning
/// [`Alignment`](super::Alignment); it is not stored here.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlPoint {
    /// Position; `z` is carried but ignored by the plan geometry.
    pub position: Point3,
    /// Requested curve radius. `0` means a hard vertex with no curve.
    pub requested_radius: f64,
    /// Opaque design metadata, passed through unchanged.
    pub design_speed: f64,
}

impl ControlPoint {
    /// Creates a control point with the given radius and no design speed.
    #[must_use]
    pub fn new(position: Point3, requested_radius: f64) -> Self {
        Self {
            position,
            requested_radius,
            design_speed: 0.0,
        }
    }

    /// Creates a control point in the XY plane.
    #[must_use]
    pub fn at(x: f64, y: f64, requested_radius: f64) -> Self {
        Self::new(Point3::new(x, y, 0.0), requested_radius)
    }

    /// Sets the design speed metadata.
    #[must_use]
    pub fn with_design_speed(mut self, design_speed: f64) -> Self {
        self.design_speed = design_speed;
        self
    }

    /// Plan (XY) position.
    #[must_use]
    pub fn plan_position(&self) -> Point2 {
        plan(&self.position)
    }
}

pub mod arc_2d;
pub mod bearing;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 3D point type. Control points carry elevation in `z`.
pub type Point3 = nalgebra::Point3<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Projects a 3D control-point position onto the plan (XY) plane.
#[must_use]
pub fn plan(p: &Point3) -> Point2 {
    Point2::new(p.x, p.y)
}

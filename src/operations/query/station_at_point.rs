use crate::alignment::{Alignment, CurveSegment, Segment, TangentSegment};
use crate::error::{QueryError, Result};
use crate::math::bearing::{direction, normalize_signed};
use crate::math::{Point2, Vector2, TOLERANCE};

/// Projection of a plan point onto the centerline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StationOffset {
    pub station: f64,
    /// Perpendicular distance from the centerline; positive left of travel.
    pub offset: f64,
    /// Closest point on the centerline.
    pub foot: Point2,
    pub segment: usize,
}

/// Finds the station and offset of the centerline point closest to a plan point.
pub struct StationAtPoint {
    point: Point2,
}

impl StationAtPoint {
    /// Creates a new `StationAtPoint` query.
    #[must_use]
    pub fn new(point: Point2) -> Self {
        Self { point }
    }

    /// Executes the query.
    ///
    /// # Errors
    ///
    /// Returns an error if the alignment has no segments.
    pub fn execute(&self, alignment: &Alignment) -> Result<StationOffset> {
        let mut best: Option<(f64, StationOffset)> = None;
        for (index, seg) in alignment.segments().iter().enumerate() {
            let (foot, along, bearing) = match seg {
                Segment::Tangent(t) => closest_on_tangent(t, &self.point),
                Segment::Curve(c) => closest_on_curve(c, &self.point),
            };
            let rel = self.point - foot;
            let distance = rel.norm();
            if best.as_ref().is_some_and(|(d, _)| *d <= distance) {
                continue;
            }
            let side = cross(&direction(bearing), &rel);
            let offset = if side < 0.0 { -distance } else { distance };
            best = Some((
                distance,
                StationOffset {
                    station: seg.start_station() + along,
                    offset,
                    foot,
                    segment: index,
                },
            ));
        }
        best.map(|(_, s)| s)
            .ok_or_else(|| QueryError::EmptyAlignment.into())
    }
}

fn cross(a: &Vector2, b: &Vector2) -> f64 {
    a.x * b.y - a.y * b.x
}

/// Returns `(foot, distance along segment, bearing at foot)`.
fn closest_on_tangent(t: &TangentSegment, p: &Point2) -> (Point2, f64, f64) {
    if t.length() < TOLERANCE {
        return (*t.start_point(), 0.0, t.bearing());
    }
    let d = direction(t.bearing());
    let along = (p - t.start_point()).dot(&d).clamp(0.0, t.length());
    let foot = if along >= t.length() {
        *t.end_point()
    } else {
        t.start_point() + d * along
    };
    (foot, along, t.bearing())
}

fn closest_on_curve(c: &CurveSegment, p: &Point2) -> (Point2, f64, f64) {
    let center = c.center();
    let start = c.pc_point() - center;
    let radial = p - center;
    if radial.norm() >= TOLERANCE {
        let swept = normalize_signed(radial.y.atan2(radial.x) - start.y.atan2(start.x));
        let t = swept / c.delta_angle();
        if (0.0..=1.0).contains(&t) {
            let foot = center + radial.normalize() * c.radius();
            let bearing = c.entry_bearing() + c.delta_angle() * t;
            return (foot, c.arc_length() * t, bearing);
        }
    }
    let to_pc = (p - c.pc_point()).norm();
    let to_pt = (p - c.pt_point()).norm();
    if to_pc <= to_pt {
        (*c.pc_point(), 0.0, c.entry_bearing())
    } else {
        (*c.pt_point(), c.arc_length(), c.exit_bearing())
    }
}

use crate::math::arc_2d::arc_point_at;
use crate::math::bearing::{bearing, direction, normalize_angle};
use crate::math::Point2;
use crate::operations::solve::CurveSolution;

/// What a tangent endpoint is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Anchor {
    /// The raw control point at this index.
    ControlPoint(usize),
    /// The PC (start) of the curve owned by the control point at this index.
    CurveStart(usize),
    /// The PT (end) of the curve owned by the control point at this index.
    CurveEnd(usize),
}

impl Anchor {
    /// Index of the control point this anchor belongs to.
    #[must_use]
    pub fn control_point(&self) -> usize {
        match *self {
            Self::ControlPoint(i) | Self::CurveStart(i) | Self::CurveEnd(i) => i,
        }
    }
}

/// Direction a curve turns in plan view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Turn {
    Left,
    Right,
}

/// A straight run between two anchors.
#[derive(Debug, Clone, PartialEq)]
pub struct TangentSegment {
    span: usize,
    start_point: Point2,
    end_point: Point2,
    start_anchor: Anchor,
    end_anchor: Anchor,
    bearing: f64,
    length: f64,
    start_station: f64,
    end_station: f64,
}

impl TangentSegment {
    /// Builds a tangent from its resolved endpoints.
    ///
    /// Bearing and length come from the endpoints. A zero-length tangent
    /// (two curves meeting exactly) keeps `span_bearing`, the direction of the
    /// control-point span it lies on.
    pub(crate) fn new(
        span: usize,
        start_point: Point2,
        end_point: Point2,
        start_anchor: Anchor,
        end_anchor: Anchor,
        span_bearing: f64,
    ) -> Self {
        let length = (end_point - start_point).norm();
        let bearing = bearing(&start_point, &end_point).unwrap_or(span_bearing);
        Self {
            span,
            start_point,
            end_point,
            start_anchor,
            end_anchor,
            bearing,
            length,
            start_station: 0.0,
            end_station: 0.0,
        }
    }

    /// Index of the control point that starts this tangent's span.
    #[must_use]
    pub fn span(&self) -> usize {
        self.span
    }

    #[must_use]
    pub fn start_point(&self) -> &Point2 {
        &self.start_point
    }

    #[must_use]
    pub fn end_point(&self) -> &Point2 {
        &self.end_point
    }

    #[must_use]
    pub fn start_anchor(&self) -> Anchor {
        self.start_anchor
    }

    #[must_use]
    pub fn end_anchor(&self) -> Anchor {
        self.end_anchor
    }

    /// Bearing in `[0, 2π)`.
    #[must_use]
    pub fn bearing(&self) -> f64 {
        self.bearing
    }

    #[must_use]
    pub fn length(&self) -> f64 {
        self.length
    }

    #[must_use]
    pub fn start_station(&self) -> f64 {
        self.start_station
    }

    #[must_use]
    pub fn end_station(&self) -> f64 {
        self.end_station
    }

    fn point_at(&self, offset: f64) -> Point2 {
        if offset >= self.length {
            return self.end_point;
        }
        self.start_point + direction(self.bearing) * offset
    }
}

/// A circular arc inserted at an interior control point.
#[derive(Debug, Clone, PartialEq)]
pub struct CurveSegment {
    control_point: usize,
    radius: f64,
    delta_angle: f64,
    arc_length: f64,
    tangent_length: f64,
    pc_point: Point2,
    pt_point: Point2,
    center: Point2,
    entry_bearing: f64,
    exit_bearing: f64,
    start_station: f64,
    end_station: f64,
}

impl CurveSegment {
    pub(crate) fn from_solution(control_point: usize, solution: &CurveSolution) -> Self {
        Self {
            control_point,
            radius: solution.radius,
            delta_angle: solution.delta_angle,
            arc_length: solution.arc_length,
            tangent_length: solution.tangent_length,
            pc_point: solution.pc_point,
            pt_point: solution.pt_point,
            center: solution.center,
            entry_bearing: solution.entry_bearing,
            exit_bearing: solution.exit_bearing,
            start_station: 0.0,
            end_station: 0.0,
        }
    }

    /// Index of the owning control point.
    #[must_use]
    pub fn control_point(&self) -> usize {
        self.control_point
    }

    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Signed turn angle; positive turns left.
    #[must_use]
    pub fn delta_angle(&self) -> f64 {
        self.delta_angle
    }

    #[must_use]
    pub fn arc_length(&self) -> f64 {
        self.arc_length
    }

    #[must_use]
    pub fn tangent_length(&self) -> f64 {
        self.tangent_length
    }

    /// Point of curvature (start of arc).
    #[must_use]
    pub fn pc_point(&self) -> &Point2 {
        &self.pc_point
    }

    /// Point of tangency (end of arc).
    #[must_use]
    pub fn pt_point(&self) -> &Point2 {
        &self.pt_point
    }

    #[must_use]
    pub fn center(&self) -> &Point2 {
        &self.center
    }

    #[must_use]
    pub fn entry_bearing(&self) -> f64 {
        self.entry_bearing
    }

    #[must_use]
    pub fn exit_bearing(&self) -> f64 {
        self.exit_bearing
    }

    #[must_use]
    pub fn turn(&self) -> Turn {
        if self.delta_angle >= 0.0 {
            Turn::Left
        } else {
            Turn::Right
        }
    }

    #[must_use]
    pub fn start_station(&self) -> f64 {
        self.start_station
    }

    #[must_use]
    pub fn end_station(&self) -> f64 {
        self.end_station
    }

    fn point_at(&self, offset: f64) -> (Point2, f64) {
        if offset >= self.arc_length {
            return (self.pt_point, self.exit_bearing);
        }
        if offset <= 0.0 {
            return (self.pc_point, self.entry_bearing);
        }
        let t = offset / self.arc_length;
        let start = self.pc_point - self.center;
        let start_angle = start.y.atan2(start.x);
        let point = arc_point_at(&self.center, self.radius, start_angle, self.delta_angle, t);
        (point, normalize_angle(self.entry_bearing + self.delta_angle * t))
    }
}

/// One element of the alignment chain.
#[derive(Debug, Clone, PartialEq)]
pub enum Segment {
    Tangent(TangentSegment),
    Curve(CurveSegment),
}

impl Segment {
    /// Length along the centerline: tangent length or arc length.
    #[must_use]
    pub fn length(&self) -> f64 {
        match self {
            Self::Tangent(t) => t.length,
            Self::Curve(c) => c.arc_length,
        }
    }

    #[must_use]
    pub fn start_point(&self) -> &Point2 {
        match self {
            Self::Tangent(t) => &t.start_point,
            Self::Curve(c) => &c.pc_point,
        }
    }

    #[must_use]
    pub fn end_point(&self) -> &Point2 {
        match self {
            Self::Tangent(t) => &t.end_point,
            Self::Curve(c) => &c.pt_point,
        }
    }

    #[must_use]
    pub fn start_bearing(&self) -> f64 {
        match self {
            Self::Tangent(t) => t.bearing,
            Self::Curve(c) => c.entry_bearing,
        }
    }

    #[must_use]
    pub fn end_bearing(&self) -> f64 {
        match self {
            Self::Tangent(t) => t.bearing,
            Self::Curve(c) => c.exit_bearing,
        }
    }

    #[must_use]
    pub fn start_station(&self) -> f64 {
        match self {
            Self::Tangent(t) => t.start_station,
            Self::Curve(c) => c.start_station,
        }
    }

    #[must_use]
    pub fn end_station(&self) -> f64 {
        match self {
            Self::Tangent(t) => t.end_station,
            Self::Curve(c) => c.end_station,
        }
    }

    #[must_use]
    pub fn as_tangent(&self) -> Option<&TangentSegment> {
        match self {
            Self::Tangent(t) => Some(t),
            Self::Curve(_) => None,
        }
    }

    #[must_use]
    pub fn as_curve(&self) -> Option<&CurveSegment> {
        match self {
            Self::Curve(c) => Some(c),
            Self::Tangent(_) => None,
        }
    }

    #[must_use]
    pub fn is_curve(&self) -> bool {
        matches!(self, Self::Curve(_))
    }

    /// Point and bearing at `offset` metres from the segment start, clamped to the segment.
    #[must_use]
    pub fn point_at(&self, offset: f64) -> (Point2, f64) {
        let offset = offset.max(0.0);
        match self {
            Self::Tangent(t) => (t.point_at(offset), t.bearing),
            Self::Curve(c) => c.point_at(offset),
        }
    }

    pub(crate) fn set_stations(&mut self, start: f64, end: f64) {
        let (s, e) = match self {
            Self::Tangent(t) => (&mut t.start_station, &mut t.end_station),
            Self::Curve(c) => (&mut c.start_station, &mut c.end_station),
        };
        *s = start;
        *e = end;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn tangent_derives_bearing_and_length() {
        let t = TangentSegment::new(
            0,
            Point2::new(0.0, 0.0),
            Point2::new(3.0, 4.0),
            Anchor::ControlPoint(0),
            Anchor::ControlPoint(1),
            0.0,
        );
        assert!((t.length() - 5.0).abs() < 1e-12);
        assert!((t.bearing() - 4.0_f64.atan2(3.0)).abs() < 1e-12);
    }

    #[test]
    fn zero_length_tangent_keeps_span_bearing() {
        let p = Point2::new(10.0, 10.0);
        let t = TangentSegment::new(
            1,
            p,
            p,
            Anchor::CurveEnd(1),
            Anchor::CurveStart(2),
            FRAC_PI_2,
        );
        assert!(t.length().abs() < 1e-12);
        assert!((t.bearing() - FRAC_PI_2).abs() < 1e-12);
    }

    #[test]
    fn tangent_point_at_walks_along_bearing() {
        let seg = Segment::Tangent(TangentSegment::new(
            0,
            Point2::new(0.0, 0.0),
            Point2::new(0.0, 10.0),
            Anchor::ControlPoint(0),
            Anchor::ControlPoint(1),
            0.0,
        ));
        let (p, b) = seg.point_at(4.0);
        assert!(p.x.abs() < 1e-12 && (p.y - 4.0).abs() < 1e-12);
        assert!((b - FRAC_PI_2).abs() < 1e-12);
        let (end, _) = seg.point_at(25.0);
        assert_eq!(end, Point2::new(0.0, 10.0));
    }

    #[test]
    fn anchor_reports_owner() {
        assert_eq!(Anchor::CurveStart(4).control_point(), 4);
        assert_eq!(Anchor::ControlPoint(0).control_point(), 0);
    }
}

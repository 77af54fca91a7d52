use tracing::{debug, warn};

use crate::alignment::{Anchor, ControlPoint, CurveSegment, Segment, TangentSegment};
use crate::config::AlignmentConfig;
use crate::error::{AlignmentError, GeometryError, Result};
use crate::math::bearing::bearing;
use crate::math::Point2;
use crate::operations::solve::{CurveSolution, SolveCurve, VertexSolution};

/// Cached solve outcome for one control point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SolvedVertex {
    /// First or last control point; never carries a curve.
    Terminal,
    /// Zero requested radius.
    Kink,
    /// Straight through within tolerance.
    Collinear,
    Curve(CurveSolution),
    /// Near-reversal or coincident neighbour; built as a kink.
    Degenerate,
}

impl SolvedVertex {
    /// The curve solution, if a curve was fitted here.
    #[must_use]
    pub fn curve(&self) -> Option<&CurveSolution> {
        match self {
            Self::Curve(c) => Some(c),
            _ => None,
        }
    }
}

/// Output of [`BuildSegments`]: per-vertex solves and the unstationed chain.
#[derive(Debug, Clone, Default)]
pub struct SegmentChain {
    pub vertices: Vec<SolvedVertex>,
    pub segments: Vec<Segment>,
}

/// Builds the full tangent/curve chain for a control-point sequence.
pub struct BuildSegments<'a> {
    points: &'a [ControlPoint],
    config: AlignmentConfig,
}

impl<'a> BuildSegments<'a> {
    /// Creates a new `BuildSegments` operation with default tolerances.
    #[must_use]
    pub fn new(points: &'a [ControlPoint]) -> Self {
        Self {
            points,
            config: AlignmentConfig::default(),
        }
    }

    /// Overrides the solve tolerances.
    #[must_use]
    pub fn with_config(mut self, config: AlignmentConfig) -> Self {
        self.config = config;
        self
    }

    /// Executes the build.
    ///
    /// Fewer than two control points produce an empty chain. A degenerate
    /// vertex is built as a kink and recorded as [`SolvedVertex::Degenerate`].
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::InvalidRadius`] if any control point has a
    /// negative or non-finite radius; nothing is solved in that case.
    pub fn execute(&self) -> Result<SegmentChain> {
        check_radii(self.points)?;

        let n = self.points.len();
        if n < 2 {
            return Ok(SegmentChain {
                vertices: vec![SolvedVertex::Terminal; n],
                segments: Vec::new(),
            });
        }

        let vertices = (0..n)
            .map(|i| solve_vertex(self.points, i, &self.config))
            .collect::<Result<Vec<_>>>()?;
        let segments = emit_spans(self.points, &vertices, 0, n - 2);

        debug!(
            control_points = n,
            segments = segments.len(),
            "built alignment chain"
        );
        Ok(SegmentChain { vertices, segments })
    }
}

/// Rejects negative or non-finite radii before any geometry is touched.
fn check_radii(points: &[ControlPoint]) -> Result<()> {
    for p in points {
        check_radius(p.requested_radius)?;
    }
    Ok(())
}

pub(crate) fn check_radius(radius: f64) -> Result<()> {
    if !radius.is_finite() || radius < 0.0 {
        return Err(GeometryError::InvalidRadius(radius).into());
    }
    Ok(())
}

/// Solves the control point at `index`, turning a degenerate curve into a kink.
pub(crate) fn solve_vertex(
    points: &[ControlPoint],
    index: usize,
    config: &AlignmentConfig,
) -> Result<SolvedVertex> {
    if index == 0 || index + 1 >= points.len() {
        return Ok(SolvedVertex::Terminal);
    }
    let solve = SolveCurve::new(
        points[index - 1].plan_position(),
        points[index].plan_position(),
        points[index + 1].plan_position(),
        points[index].requested_radius,
    )
    .with_config(*config);

    match solve.execute() {
        Ok(VertexSolution::Kink) => Ok(SolvedVertex::Kink),
        Ok(VertexSolution::Collinear) => Ok(SolvedVertex::Collinear),
        Ok(VertexSolution::Curve(c)) => Ok(SolvedVertex::Curve(c)),
        Err(AlignmentError::Geometry(GeometryError::DegenerateCurve(reason))) => {
            warn!(index, %reason, "degenerate vertex, building without a curve");
            Ok(SolvedVertex::Degenerate)
        }
        Err(e) => Err(e),
    }
}

/// Emits tangent spans `first..=last` and the curves at the vertices between them.
///
/// The run starts and ends with a tangent. Curves at `first` and `last + 1`
/// are outside the run but still supply the PT/PC the edge tangents attach to.
pub(crate) fn emit_spans(
    points: &[ControlPoint],
    vertices: &[SolvedVertex],
    first: usize,
    last: usize,
) -> Vec<Segment> {
    let mut out = Vec::with_capacity(2 * (last - first) + 1);
    for span in first..=last {
        if span > first {
            if let Some(c) = vertices[span].curve() {
                out.push(Segment::Curve(CurveSegment::from_solution(span, c)));
            }
        }
        out.push(Segment::Tangent(tangent_for_span(points, vertices, span)));
    }
    out
}

fn tangent_for_span(points: &[ControlPoint], vertices: &[SolvedVertex], span: usize) -> TangentSegment {
    let a = points[span].plan_position();
    let b = points[span + 1].plan_position();

    let (start, start_anchor): (Point2, Anchor) = match vertices[span].curve() {
        Some(c) => (c.pt_point, Anchor::CurveEnd(span)),
        None => (a, Anchor::ControlPoint(span)),
    };
    let (end, end_anchor): (Point2, Anchor) = match vertices[span + 1].curve() {
        Some(c) => (c.pc_point, Anchor::CurveStart(span + 1)),
        None => (b, Anchor::ControlPoint(span + 1)),
    };

    TangentSegment::new(
        span,
        start,
        end,
        start_anchor,
        end_anchor,
        bearing(&a, &b).unwrap_or(0.0),
    )
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn pts(coords: &[(f64, f64, f64)]) -> Vec<ControlPoint> {
        coords
            .iter()
            .map(|&(x, y, r)| ControlPoint::at(x, y, r))
            .collect()
    }

    #[test]
    fn single_curve_chain() {
        let points = pts(&[(0.0, 0.0, 0.0), (100.0, 0.0, 30.0), (100.0, 100.0, 0.0)]);
        let chain = BuildSegments::new(&points).execute().unwrap();
        assert_eq!(chain.segments.len(), 3);
        assert!(!chain.segments[0].is_curve());
        assert!(chain.segments[1].is_curve());
        assert!(!chain.segments[2].is_curve());
        assert_relative_eq!(chain.segments[0].length(), 70.0, epsilon = 1e-9);
        assert_relative_eq!(chain.segments[2].length(), 70.0, epsilon = 1e-9);

        let entry = chain.segments[0].as_tangent().unwrap();
        assert_eq!(entry.start_anchor(), Anchor::ControlPoint(0));
        assert_eq!(entry.end_anchor(), Anchor::CurveStart(1));
        assert_eq!(chain.segments[1].as_curve().unwrap().control_point(), 1);
    }

    #[test]
    fn endpoints_never_carry_curves() {
        let points = pts(&[(0.0, 0.0, 50.0), (100.0, 0.0, 30.0), (100.0, 100.0, 50.0)]);
        let chain = BuildSegments::new(&points).execute().unwrap();
        assert_eq!(chain.vertices[0], SolvedVertex::Terminal);
        assert_eq!(chain.vertices[2], SolvedVertex::Terminal);
        assert_eq!(chain.segments.iter().filter(|s| s.is_curve()).count(), 1);
    }

    #[test]
    fn zero_radius_joins_tangents_at_the_vertex() {
        let points = pts(&[(0.0, 0.0, 0.0), (100.0, 0.0, 0.0), (100.0, 100.0, 0.0)]);
        let chain = BuildSegments::new(&points).execute().unwrap();
        assert_eq!(chain.segments.len(), 2);
        assert_eq!(chain.vertices[1], SolvedVertex::Kink);
        assert_eq!(chain.segments[0].end_point(), chain.segments[1].start_point());
        assert_eq!(*chain.segments[0].end_point(), Point2::new(100.0, 0.0));
    }

    #[test]
    fn chain_is_exactly_continuous() {
        let points = pts(&[
            (0.0, 0.0, 0.0),
            (120.0, 15.0, 40.0),
            (180.0, 110.0, 25.0),
            (260.0, 90.0, 0.0),
            (330.0, 160.0, 60.0),
            (400.0, 150.0, 0.0),
        ]);
        let chain = BuildSegments::new(&points).execute().unwrap();
        for pair in chain.segments.windows(2) {
            assert_eq!(pair[0].end_point(), pair[1].start_point());
        }
    }

    #[test]
    fn curve_count_is_bounded_by_interior_points() {
        let points = pts(&[
            (0.0, 0.0, 0.0),
            (100.0, 0.0, 20.0),
            (150.0, 80.0, 0.0),
            (250.0, 90.0, 20.0),
            (300.0, 0.0, 0.0),
        ]);
        let chain = BuildSegments::new(&points).execute().unwrap();
        let curves = chain.segments.iter().filter(|s| s.is_curve()).count();
        assert_eq!(curves, 2);
        assert!(curves <= points.len() - 2);
    }

    #[test]
    fn degenerate_vertex_falls_back_to_kink() {
        let points = pts(&[
            (0.0, 0.0, 0.0),
            (100.0, 0.0, 30.0),
            (0.0, 0.0, 30.0),
            (0.0, 100.0, 0.0),
        ]);
        let chain = BuildSegments::new(&points).execute().unwrap();
        assert_eq!(chain.vertices[1], SolvedVertex::Degenerate);
        // The rest of the alignment still gets its curve.
        assert!(chain.vertices[2].curve().is_some());
        assert_eq!(chain.segments.iter().filter(|s| s.is_curve()).count(), 1);
    }

    #[test]
    fn fewer_than_two_points_is_empty() {
        let chain = BuildSegments::new(&pts(&[(5.0, 5.0, 0.0)])).execute().unwrap();
        assert!(chain.segments.is_empty());
        let chain = BuildSegments::new(&[]).execute().unwrap();
        assert!(chain.segments.is_empty());
    }

    #[test]
    fn negative_radius_aborts_the_build() {
        let points = pts(&[(0.0, 0.0, 0.0), (100.0, 0.0, -5.0), (100.0, 100.0, 0.0)]);
        assert!(BuildSegments::new(&points).execute().is_err());
    }
}

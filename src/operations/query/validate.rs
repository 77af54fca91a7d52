use tracing::warn;

use crate::alignment::{ControlPoint, Diagnostic};
use crate::config::AlignmentConfig;
use crate::operations::creation::SolvedVertex;

/// Checks a solved alignment for overlapping curves and degenerate vertices.
///
/// Validation never touches geometry; it only reports.
pub struct Validate<'a> {
    points: &'a [ControlPoint],
    vertices: &'a [SolvedVertex],
    config: AlignmentConfig,
}

impl<'a> Validate<'a> {
    /// Creates a new `Validate` query over control points and their solves.
    #[must_use]
    pub fn new(points: &'a [ControlPoint], vertices: &'a [SolvedVertex]) -> Self {
        Self {
            points,
            vertices,
            config: AlignmentConfig::default(),
        }
    }

    /// Overrides the overlap tolerance.
    #[must_use]
    pub fn with_config(mut self, config: AlignmentConfig) -> Self {
        self.config = config;
        self
    }

    /// Executes validation, returning diagnostics ordered by control-point index.
    #[must_use]
    pub fn execute(&self) -> Vec<Diagnostic> {
        let mut out = Vec::new();
        let n = self.points.len().min(self.vertices.len());
        for index in 1..n.saturating_sub(1) {
            match &self.vertices[index] {
                SolvedVertex::Degenerate => {
                    out.push(Diagnostic::DegenerateVertex { index });
                }
                SolvedVertex::Curve(c) => {
                    let back = self.available_length(index, index - 1);
                    let ahead = self.available_length(index, index + 1);
                    let slack = self.config.length_tolerance;
                    if c.tangent_length > back + slack || c.tangent_length > ahead + slack {
                        warn!(
                            index,
                            tangent_length = c.tangent_length,
                            back,
                            ahead,
                            "curve overlaps adjacent span"
                        );
                        out.push(Diagnostic::CurveOverlap { index });
                    }
                }
                _ => {}
            }
        }
        out
    }

    /// Room along the span from control point `index` to the anchor on the
    /// `neighbour` side: the neighbour itself, or its own curve's PC/PT.
    ///
    /// Negative when the neighbour's curve already runs past `index`.
    fn available_length(&self, index: usize, neighbour: usize) -> f64 {
        let span = (self.points[neighbour].plan_position() - self.points[index].plan_position()).norm();
        let taken = self.vertices[neighbour]
            .curve()
            .map_or(0.0, |c| c.tangent_length);
        span - taken
    }
}

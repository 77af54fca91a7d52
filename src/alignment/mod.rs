mod control_point;
mod diagnostic;
mod segment;

pub use control_point::ControlPoint;
pub use diagnostic::Diagnostic;
pub use segment::{Anchor, CurveSegment, Segment, TangentSegment, Turn};

use tracing::debug;

use crate::config::AlignmentConfig;
use crate::error::{ModelError, Result};
use crate::math::Point3;
use crate::operations::creation::{check_radius, AssignStations, BuildSegments, SolvedVertex};
use crate::operations::query::Validate;
use crate::operations::update::IncrementalRecompute;

/// A horizontal alignment: control points in, stationed segment chain out.
///
/// Control points are the authoritative design input. Segments, per-vertex
/// solves, diagnostics and `total_length` are derived and only change through
/// a recompute. Neighbour relations are positional (index ± 1); segments refer
/// back to control points by index.
#[derive(Debug, Clone, Default)]
pub struct Alignment {
    pub(crate) points: Vec<ControlPoint>,
    pub(crate) vertices: Vec<SolvedVertex>,
    pub(crate) segments: Vec<Segment>,
    pub(crate) diagnostics: Vec<Diagnostic>,
    pub(crate) total_length: f64,
    pub(crate) dirty: bool,
    pub(crate) config: AlignmentConfig,
}

impl Alignment {
    /// Creates an alignment and builds its full chain.
    ///
    /// Fewer than two control points give an empty chain, not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if any control point has a negative radius.
    pub fn new(points: Vec<ControlPoint>) -> Result<Self> {
        Self::with_config(points, AlignmentConfig::default())
    }

    /// Creates an alignment with explicit tolerances.
    ///
    /// # Errors
    ///
    /// Returns an error if any control point has a negative radius.
    pub fn with_config(points: Vec<ControlPoint>, config: AlignmentConfig) -> Result<Self> {
        let mut alignment = Self {
            points,
            config,
            ..Self::default()
        };
        alignment.rebuild()?;
        Ok(alignment)
    }

    #[must_use]
    pub fn control_points(&self) -> &[ControlPoint] {
        &self.points
    }

    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Per-control-point solve results from the last recompute.
    #[must_use]
    pub fn vertices(&self) -> &[SolvedVertex] {
        &self.vertices
    }

    /// Curve segments in chain order.
    pub fn curves(&self) -> impl Iterator<Item = &CurveSegment> {
        self.segments.iter().filter_map(Segment::as_curve)
    }

    #[must_use]
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// End station of the last segment.
    #[must_use]
    pub fn total_length(&self) -> f64 {
        self.total_length
    }

    /// Whether control points changed since the last recompute.
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    #[must_use]
    pub fn config(&self) -> &AlignmentConfig {
        &self.config
    }

    /// Mutable access to a control point for hosts that edit first and
    /// recompute later. Marks the alignment dirty.
    ///
    /// # Errors
    ///
    /// Returns an error if `index` is out of range.
    pub fn control_point_mut(&mut self, index: usize) -> Result<&mut ControlPoint> {
        self.check_index(index)?;
        self.dirty = true;
        Ok(&mut self.points[index])
    }

    /// Moves a control point and recomputes only the affected neighbourhood.
    ///
    /// # Errors
    ///
    /// Returns an error if `index` is out of range. The alignment is left
    /// unchanged on error.
    pub fn move_point(&mut self, index: usize, new_position: Point3) -> Result<&[Diagnostic]> {
        self.check_index(index)?;
        let old = self.points[index].position;
        self.points[index].position = new_position;
        self.dirty = true;
        if let Err(e) = IncrementalRecompute::on_move(index).execute(self) {
            self.points[index].position = old;
            return Err(e);
        }
        Ok(&self.diagnostics)
    }

    /// Changes the requested radius of a control point and re-fits its curve.
    ///
    /// # Errors
    ///
    /// Returns an error if `index` is out of range or `radius` is negative.
    pub fn set_radius(&mut self, index: usize, radius: f64) -> Result<&[Diagnostic]> {
        self.check_index(index)?;
        check_radius(radius)?;
        self.points[index].requested_radius = radius;
        self.dirty = true;
        IncrementalRecompute::on_radius_change(index).execute(self)?;
        Ok(&self.diagnostics)
    }

    /// Inserts a control point before `at_index` (or appends when
    /// `at_index == len`) and rebuilds the whole chain.
    ///
    /// # Errors
    ///
    /// Returns an error if `at_index > len` or the point's radius is negative.
    pub fn insert_point(&mut self, at_index: usize, point: ControlPoint) -> Result<&[Diagnostic]> {
        if at_index > self.points.len() {
            return Err(ModelError::IndexOutOfRange {
                index: at_index,
                len: self.points.len(),
            }
            .into());
        }
        check_radius(point.requested_radius)?;
        self.points.insert(at_index, point);
        self.dirty = true;
        if let Err(e) = self.rebuild() {
            self.points.remove(at_index);
            return Err(e);
        }
        Ok(&self.diagnostics)
    }

    /// Removes a control point, re-indexes the rest and rebuilds the chain.
    ///
    /// # Errors
    ///
    /// Returns an error if `index` is out of range.
    pub fn remove_point(&mut self, index: usize) -> Result<&[Diagnostic]> {
        self.check_index(index)?;
        let removed = self.points.remove(index);
        self.dirty = true;
        if let Err(e) = self.rebuild() {
            self.points.insert(index, removed);
            return Err(e);
        }
        Ok(&self.diagnostics)
    }

    /// Recomputes after the host moved control point `index` in place.
    ///
    /// # Errors
    ///
    /// Returns an error if `index` is out of range or a radius in the
    /// affected neighbourhood is negative.
    pub fn recompute_on_move(&mut self, index: usize) -> Result<&[Diagnostic]> {
        self.check_index(index)?;
        IncrementalRecompute::on_move(index).execute(self)?;
        Ok(&self.diagnostics)
    }

    /// Rebuilds the whole chain from the control points.
    ///
    /// # Errors
    ///
    /// Returns an error if any control point has a negative radius; the
    /// derived geometry is left as it was.
    pub fn rebuild(&mut self) -> Result<&[Diagnostic]> {
        let chain = BuildSegments::new(&self.points)
            .with_config(self.config)
            .execute()?;
        self.vertices = chain.vertices;
        self.segments = chain.segments;
        self.total_length = AssignStations::new().execute(&mut self.segments);
        self.finish_recompute();
        debug!(total_length = self.total_length, "full rebuild");
        Ok(&self.diagnostics)
    }

    /// Re-validates and clears the dirty flag after segments changed.
    pub(crate) fn finish_recompute(&mut self) {
        self.diagnostics = Validate::new(&self.points, &self.vertices)
            .with_config(self.config)
            .execute();
        self.dirty = false;
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index >= self.points.len() {
            return Err(ModelError::IndexOutOfRange {
                index,
                len: self.points.len(),
            }
            .into());
        }
        Ok(())
    }
}

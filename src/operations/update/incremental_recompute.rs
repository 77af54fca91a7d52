use tracing::debug;

use crate::alignment::{Alignment, Segment};
use crate::error::{ModelError, Result};
use crate::operations::creation::{emit_spans, solve_vertex, AssignStations};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Edit {
    Move,
    Radius,
}

/// Re-derives the part of an alignment touched by a single control-point edit.
///
/// A curve at `j` depends on control points `j-1..=j+1`, so moving point `k`
/// re-solves vertices `k-1..=k+1` and rebuilds tangent spans `k-2..=k+1`.
/// A radius change at `k` only re-solves `k` and rebuilds spans `k-1..=k`.
/// The rebuilt window is spliced in place; stations are re-stamped from the
/// window to the end of the chain.
pub struct IncrementalRecompute {
    index: usize,
    edit: Edit,
}

impl IncrementalRecompute {
    /// Recompute after control point `index` moved.
    #[must_use]
    pub fn on_move(index: usize) -> Self {
        Self {
            index,
            edit: Edit::Move,
        }
    }

    /// Recompute after the requested radius at `index` changed.
    #[must_use]
    pub fn on_radius_change(index: usize) -> Self {
        Self {
            index,
            edit: Edit::Radius,
        }
    }

    /// Executes the recompute against `alignment`.
    ///
    /// Falls back to a full rebuild when the alignment has no chain to patch.
    ///
    /// # Errors
    ///
    /// Returns an error if the index is out of range or an affected control
    /// point has a negative radius. Derived geometry is unchanged on error.
    pub fn execute(&self, alignment: &mut Alignment) -> Result<()> {
        let k = self.index;
        let n = alignment.points.len();
        if k >= n {
            return Err(ModelError::IndexOutOfRange { index: k, len: n }.into());
        }
        if n < 2 || alignment.vertices.len() != n || alignment.segments.is_empty() {
            alignment.rebuild()?;
            return Ok(());
        }

        let last_span = n - 2;
        let (vertex_lo, vertex_hi, span_lo, span_hi) = match self.edit {
            Edit::Move => (
                k.saturating_sub(1),
                k + 1,
                k.saturating_sub(2),
                (k + 1).min(last_span),
            ),
            Edit::Radius => (k, k, k.saturating_sub(1), k.min(last_span)),
        };

        // Solve into a scratch copy so an error leaves the alignment intact.
        let mut vertices = alignment.vertices.clone();
        for j in vertex_lo.max(1)..=vertex_hi.min(n - 2) {
            vertices[j] = solve_vertex(&alignment.points, j, &alignment.config)?;
        }

        let (Some(start), Some(end)) = (
            span_position(&alignment.segments, span_lo),
            span_position(&alignment.segments, span_hi),
        ) else {
            debug!(index = k, "segment window not found, rebuilding");
            alignment.rebuild()?;
            return Ok(());
        };

        let window = emit_spans(&alignment.points, &vertices, span_lo, span_hi);
        let replaced = window.len();
        alignment.vertices = vertices;
        let _removed: Vec<Segment> = alignment.segments.splice(start..=end, window).collect();

        let offset = if start == 0 {
            0.0
        } else {
            alignment.segments[start - 1].end_station()
        };
        alignment.total_length =
            AssignStations::with_start_station(offset).execute(&mut alignment.segments[start..]);
        alignment.finish_recompute();

        debug!(
            index = k,
            spans = ?(span_lo..=span_hi),
            first_segment = start,
            replaced,
            total_length = alignment.total_length,
            "incremental recompute"
        );
        Ok(())
    }
}

/// Chain position of the tangent covering `span`.
fn span_position(segments: &[Segment], span: usize) -> Option<usize> {
    segments
        .iter()
        .position(|s| s.as_tangent().is_some_and(|t| t.span() == span))
}

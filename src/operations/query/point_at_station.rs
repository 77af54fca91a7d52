use crate::alignment::Alignment;
use crate::error::{QueryError, Result};
use crate::math::Point2;

/// A location on the centerline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StationPoint {
    pub station: f64,
    pub point: Point2,
    /// Direction of travel at `point`, in `[0, 2π)`.
    pub bearing: f64,
    /// Chain index of the segment containing the station.
    pub segment: usize,
}

/// Evaluates the centerline position and bearing at a station.
pub struct PointAtStation {
    station: f64,
}

impl PointAtStation {
    /// Creates a new `PointAtStation` query.
    #[must_use]
    pub fn new(station: f64) -> Self {
        Self { station }
    }

    /// Executes the query.
    ///
    /// A station that lands exactly on a segment boundary resolves to the
    /// earlier segment.
    ///
    /// # Errors
    ///
    /// Returns an error if the alignment has no segments or the station lies
    /// outside `[0, total_length]` by more than the length tolerance.
    pub fn execute(&self, alignment: &Alignment) -> Result<StationPoint> {
        let segments = alignment.segments();
        if segments.is_empty() {
            return Err(QueryError::EmptyAlignment.into());
        }
        let total = alignment.total_length();
        let tol = alignment.config().length_tolerance;
        if self.station.is_nan() || self.station < -tol || self.station > total + tol {
            return Err(QueryError::StationOutOfRange {
                station: self.station,
                total_length: total,
            }
            .into());
        }

        let station = self.station.clamp(0.0, total);
        let index = segments
            .partition_point(|s| s.end_station() < station)
            .min(segments.len() - 1);
        let seg = &segments[index];
        let (point, bearing) = seg.point_at(station - seg.start_station());
        Ok(StationPoint {
            station,
            point,
            bearing,
            segment: index,
        })
    }
}

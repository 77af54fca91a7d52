use crate::alignment::Segment;

/// Stamps cumulative stations onto a run of segments.
///
/// The run can be a whole chain or a suffix of one; in the latter case the
/// caller passes the end station of the segment preceding the run.
pub struct AssignStations {
    start_station: f64,
}

impl AssignStations {
    /// Creates a new `AssignStations` operation starting at station 0.
    #[must_use]
    pub fn new() -> Self {
        Self { start_station: 0.0 }
    }

    /// Starts stationing at `start_station` instead of 0.
    #[must_use]
    pub fn with_start_station(start_station: f64) -> Self {
        Self { start_station }
    }

    /// Executes the pass and returns the end station of the last segment
    /// (or the start station for an empty run).
    pub fn execute(&self, segments: &mut [Segment]) -> f64 {
        let mut running = self.start_station;
        for seg in segments.iter_mut() {
            let end = running + seg.length();
            seg.set_stations(running, end);
            running = end;
        }
        running
    }
}

impl Default for AssignStations {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::alignment::ControlPoint;
    use crate::operations::creation::BuildSegments;

    fn chain() -> Vec<Segment> {
        let pts = vec![
            ControlPoint::at(0.0, 0.0, 0.0),
            ControlPoint::at(100.0, 0.0, 30.0),
            ControlPoint::at(100.0, 100.0, 0.0),
        ];
        BuildSegments::new(&pts).execute().unwrap().segments
    }

    #[test]
    fn stations_are_cumulative() {
        let mut segs = chain();
        let total = AssignStations::new().execute(&mut segs);
        assert!(segs[0].start_station().abs() < 1e-12);
        for pair in segs.windows(2) {
            assert!((pair[0].end_station() - pair[1].start_station()).abs() < 1e-12);
        }
        assert!((total - segs[2].end_station()).abs() < 1e-12);
    }

    #[test]
    fn offset_shifts_every_station() {
        let mut a = chain();
        let mut b = chain();
        let ta = AssignStations::new().execute(&mut a);
        let tb = AssignStations::with_start_station(1000.0).execute(&mut b);
        assert!((tb - ta - 1000.0).abs() < 1e-9);
        assert!((b[1].start_station() - a[1].start_station() - 1000.0).abs() < 1e-9);
    }

    #[test]
    fn empty_run_returns_start() {
        let total = AssignStations::with_start_station(12.5).execute(&mut []);
        assert!((total - 12.5).abs() < f64::EPSILON);
    }
}

use crate::alignment::{Alignment, Segment};
use crate::error::Result;
use crate::math::arc_2d::arc_subdivision_count;

use super::{Polyline, SamplingParams, StationSample};

/// Samples an alignment into a stationed polyline for display.
///
/// Tangents contribute their end points. Curves are split into equal arcs no
/// longer than `interval`, no fewer than `min_curve_points` samples, and fine
/// enough to stay within `max_deviation` of the true arc.
pub struct SampleAlignment {
    params: SamplingParams,
}

impl SampleAlignment {
    /// Creates a new `SampleAlignment` operation.
    #[must_use]
    pub fn new(params: SamplingParams) -> Self {
        Self { params }
    }

    /// Executes the sampling.
    ///
    /// # Errors
    ///
    /// Returns an error if the sampling parameters are invalid.
    pub fn execute(&self, alignment: &Alignment) -> Result<Polyline> {
        self.params.validate()?;
        let mut samples = Vec::new();

        for (i, seg) in alignment.segments().iter().enumerate() {
            if i == 0 {
                samples.push(sample(seg, 0.0));
            }
            if let Segment::Curve(c) = seg {
                let chords = self.curve_chords(c.radius(), c.delta_angle().abs(), c.arc_length());
                for j in 1..chords {
                    let offset = c.arc_length() * f64::from(j) / f64::from(chords);
                    samples.push(sample(seg, offset));
                }
            }
            samples.push(sample(seg, seg.length()));
        }

        Ok(Polyline { samples })
    }

    fn curve_chords(&self, radius: f64, abs_sweep: f64, arc_length: f64) -> u32 {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let by_interval = (arc_length / self.params.interval).ceil() as u32;
        let by_deviation = arc_subdivision_count(radius, abs_sweep, self.params.max_deviation);
        by_interval
            .max(by_deviation)
            .max(self.params.min_curve_points - 1)
    }
}

fn sample(seg: &Segment, offset: f64) -> StationSample {
    let (point, bearing) = seg.point_at(offset);
    StationSample {
        station: seg.start_station() + offset.min(seg.length()),
        point,
        bearing,
    }
}

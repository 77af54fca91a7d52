mod sample_alignment;

pub use sample_alignment::SampleAlignment;

use crate::error::{Result, SamplingError};
use crate::math::Point2;

/// Parameters controlling how densely an alignment is sampled for display.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SamplingParams {
    /// Target distance between samples along curves, in metres.
    pub interval: f64,
    /// Minimum number of samples per curve, end points included.
    pub min_curve_points: u32,
    /// Maximum chord-to-arc deviation allowed between curve samples.
    pub max_deviation: f64,
}

impl SamplingParams {
    /// Checks that the parameters can produce a finite sample set.
    ///
    /// # Errors
    ///
    /// Returns an error if `interval` or `max_deviation` is not positive or
    /// `min_curve_points < 2`.
    pub fn validate(&self) -> Result<()> {
        if self.interval.is_nan() || self.interval <= 0.0 {
            return Err(SamplingError::InvalidParameters(
                "sampling interval must be positive".to_owned(),
            )
            .into());
        }
        if self.max_deviation.is_nan() || self.max_deviation <= 0.0 {
            return Err(SamplingError::InvalidParameters(
                "maximum deviation must be positive".to_owned(),
            )
            .into());
        }
        if self.min_curve_points < 2 {
            return Err(SamplingError::InvalidParameters(
                "a curve needs at least two samples".to_owned(),
            )
            .into());
        }
        Ok(())
    }
}

impl Default for SamplingParams {
    fn default() -> Self {
        Self {
            interval: 5.0,
            min_curve_points: 10,
            max_deviation: 0.01,
        }
    }
}

/// A stationed point on the centerline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StationSample {
    pub station: f64,
    pub point: Point2,
    pub bearing: f64,
}

/// An ordered, stationed polyline approximation of an alignment.
#[derive(Debug, Clone, Default)]
pub struct Polyline {
    pub samples: Vec<StationSample>,
}

impl Polyline {
    /// Plan points only, in order.
    #[must_use]
    pub fn points(&self) -> Vec<Point2> {
        self.samples.iter().map(|s| s.point).collect()
    }
}

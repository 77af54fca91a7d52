/// Numeric tolerances used when solving and validating an alignment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AlignmentConfig {
    /// Turn angles (radians) below this are treated as a straight run: no curve.
    pub collinear_tolerance: f64,
    /// Turn angles within this distance of π are near-reversals and cannot carry a curve.
    pub reversal_tolerance: f64,
    /// Slack (metres) allowed before a tangent length counts as overlapping its span.
    pub length_tolerance: f64,
}

impl Default for AlignmentConfig {
    fn default() -> Self {
        Self {
            collinear_tolerance: 1e-3,
            reversal_tolerance: 1e-6,
            length_tolerance: 1e-9,
        }
    }
}

use std::fmt;

/// Advisory finding about an otherwise fully built alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Diagnostic {
    /// The curve at this control point reaches past a neighbouring anchor.
    CurveOverlap { index: usize },
    /// The turn at this control point is too close to a reversal; it was built as a kink.
    DegenerateVertex { index: usize },
}

impl Diagnostic {
    /// Control point the diagnostic refers to.
    #[must_use]
    pub fn index(&self) -> usize {
        match *self {
            Self::CurveOverlap { index } | Self::DegenerateVertex { index } => index,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CurveOverlap { index } => {
                write!(f, "curve at control point {index} overlaps an adjacent span")
            }
            Self::DegenerateVertex { index } => {
                write!(f, "control point {index} turns back on itself; built without a curve")
            }
        }
    }
}

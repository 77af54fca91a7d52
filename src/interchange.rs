//! Flat segment records handed to persistence and export collaborators.
//!
//! Units are metres and radians. Bearings follow the crate convention
//! (from +X, counter-clockwise). Arc radii are signed: positive for a left
//! (counter-clockwise) turn, negative for a right turn.
use serde::{Deserialize, Serialize};

use crate::alignment::{Alignment, Segment};
use crate::error::{InterchangeError, Result};

/// One horizontal segment in interchange form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InterchangeRecord {
    Line {
        start_point: [f64; 2],
        start_bearing: f64,
        length: f64,
    },
    CircularArc {
        start_point: [f64; 2],
        start_bearing: f64,
        radius: f64,
        arc_length: f64,
    },
}

impl From<&Segment> for InterchangeRecord {
    fn from(seg: &Segment) -> Self {
        let start = seg.start_point();
        let start_point = [start.x, start.y];
        match seg {
            Segment::Tangent(t) => Self::Line {
                start_point,
                start_bearing: t.bearing(),
                length: t.length(),
            },
            Segment::Curve(c) => Self::CircularArc {
                start_point,
                start_bearing: c.entry_bearing(),
                radius: c.radius().copysign(c.delta_angle()),
                arc_length: c.arc_length(),
            },
        }
    }
}

/// Converts an alignment's chain into interchange records, in chain order.
#[must_use]
pub fn to_records(alignment: &Alignment) -> Vec<InterchangeRecord> {
    alignment.segments().iter().map(InterchangeRecord::from).collect()
}

/// Serializes an alignment's chain as a JSON array of interchange records.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn to_json(alignment: &Alignment) -> Result<String> {
    serde_json::to_string_pretty(&to_records(alignment))
        .map_err(|e| InterchangeError::Serialization(e).into())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::alignment::ControlPoint;
    use std::f64::consts::FRAC_PI_2;

    fn alignment(turn_y: f64) -> Alignment {
        Alignment::new(vec![
            ControlPoint::at(0.0, 0.0, 0.0),
            ControlPoint::at(100.0, 0.0, 30.0),
            ControlPoint::at(100.0, turn_y, 0.0),
        ])
        .unwrap()
    }

    #[test]
    fn records_follow_the_chain() {
        let records = to_records(&alignment(100.0));
        assert_eq!(records.len(), 3);
        match &records[0] {
            InterchangeRecord::Line {
                start_point,
                start_bearing,
                length,
            } => {
                assert_eq!(*start_point, [0.0, 0.0]);
                assert!(start_bearing.abs() < 1e-12);
                assert!((length - 70.0).abs() < 1e-9);
            }
            other => panic!("expected line, got {other:?}"),
        }
        match &records[1] {
            InterchangeRecord::CircularArc {
                radius, arc_length, ..
            } => {
                assert!((radius - 30.0).abs() < 1e-12);
                assert!((arc_length - 30.0 * FRAC_PI_2).abs() < 1e-9);
            }
            other => panic!("expected arc, got {other:?}"),
        }
    }

    #[test]
    fn right_turn_has_negative_radius() {
        let records = to_records(&alignment(-100.0));
        let InterchangeRecord::CircularArc { radius, .. } = records[1] else {
            panic!("expected arc");
        };
        assert!((radius + 30.0).abs() < 1e-12);
    }

    #[test]
    fn json_uses_type_tags() {
        let json = to_json(&alignment(100.0)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let items = value.as_array().unwrap();
        assert_eq!(items[0]["type"], "LINE");
        assert_eq!(items[1]["type"], "CIRCULAR_ARC");
        assert!(items[1].get("radius").is_some());

        let back: Vec<InterchangeRecord> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, to_records(&alignment(100.0)));
    }
}

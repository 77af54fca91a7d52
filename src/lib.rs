//! Horizontal alignment geometry: control points (PIs) in, a stationed chain
//! of tangents and circular curves out, with incremental recompute on edits.
pub mod alignment;
pub mod config;
pub mod error;
pub mod interchange;
pub mod math;
pub mod operations;
pub mod tessellation;

pub use alignment::{Alignment, ControlPoint, Diagnostic, Segment};
pub use config::AlignmentConfig;
pub use error::{AlignmentError, Result};

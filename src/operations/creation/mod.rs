mod assign_stations;
mod build_segments;

pub use assign_stations::AssignStations;
pub use build_segments::{BuildSegments, SegmentChain, SolvedVertex};

pub(crate) use build_segments::{check_radius, emit_spans, solve_vertex};

mod incremental_recompute;

pub use incremental_recompute::IncrementalRecompute;

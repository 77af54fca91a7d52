pub mod creation;
pub mod query;
pub mod solve;
pub mod update;

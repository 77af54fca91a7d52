mod point_at_station;
mod station_at_point;
mod validate;

pub use point_at_station::{PointAtStation, StationPoint};
pub use station_at_point::{StationAtPoint, StationOffset};
pub use validate::Validate;

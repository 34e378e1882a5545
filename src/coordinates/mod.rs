pub mod solar_position;

pub use solar_position::{solar_position, SolarPosition};

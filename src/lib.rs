//! Reference atmosphere models for Earth and Mars and a solar position
//! calculator. Every evaluator is a pure function over immutable tables.

pub mod config;
pub mod constants;
pub mod coordinates;
pub mod errors;
pub mod models;
pub mod numerics;
pub mod physics;

pub use coordinates::{solar_position, SolarPosition};
pub use errors::AtmosphereError;
pub use models::{AtmosphereModel, AtmosphericState, MarsState, TraceGas};
pub use physics::{evaluate_earth, evaluate_mars};

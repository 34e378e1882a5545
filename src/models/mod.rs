pub mod atmosphere;
pub mod state;

pub use atmosphere::{AtmosphereModel, ProfileRecord};
pub use state::{AtmosphericState, MarsState, TraceGas};

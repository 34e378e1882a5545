use crate::errors::AtmosphereError;

pub trait AtmosphereModel {
    type State;

    /// Unit of the altitude argument, used for output headers.
    const ALTITUDE_UNIT: &'static str;

    fn evaluate(&self, altitude: f64) -> Result<Self::State, AtmosphereError>;
}

/// A state that can be written as one row of a tabular profile.
pub trait ProfileRecord {
    fn header() -> &'static [&'static str];
    fn values(&self) -> Vec<f64>;
}

pub mod earth;
pub mod mars;
pub mod profile;
pub mod transport;

pub use earth::{evaluate_earth, CeilingPolicy, EarthAtmosphere, Layer, LayerLookup};
pub use mars::{evaluate_mars, MarsAtmosphere, MarsProfile};

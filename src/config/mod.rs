pub mod earth_layers;
pub mod mars_profile;

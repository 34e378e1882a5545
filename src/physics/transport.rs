//! Gas relations shared by the atmosphere models.

use crate::constants::*;

/// Ideal gas law, ρ = P / (R·T).
pub fn ideal_gas_density(pressure: f64, specific_gas_constant: f64, temperature: f64) -> f64 {
    pressure / (specific_gas_constant * temperature)
}

/// Density of a gas of molar mass `molar_mass` at the ambient P and T,
/// using the ambient mixture's gas constant.
pub fn partial_density(
    pressure: f64,
    molar_mass: f64,
    specific_gas_constant: f64,
    temperature: f64,
) -> f64 {
    pressure * molar_mass / (specific_gas_constant * temperature)
}

pub fn speed_of_sound(gamma: f64, specific_gas_constant: f64, temperature: f64) -> f64 {
    (gamma * specific_gas_constant * temperature).sqrt()
}

/// Sutherland's formula for air, μ = b·T^1.5 / (S + T).
pub fn sutherland_viscosity(temperature: f64) -> f64 {
    SUTHERLAND_B * temperature.powf(1.5) / (SUTHERLAND_S + temperature)
}

/// Reference-ratio form of Sutherland's law for CO2,
/// μ = μ0·(T0 + C)/(T + C)·(T/T0)^1.5.
pub fn co2_viscosity(temperature: f64) -> f64 {
    MU0_CO2 * (T_MU0_CO2 + C_CO2) / (temperature + C_CO2)
        * (temperature / T_MU0_CO2).powf(1.5)
}

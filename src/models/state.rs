use super::atmosphere::ProfileRecord;
use crate::constants::{M_HELIUM, M_HYDROGEN};
use serde::Serialize;

/// Physical state of Earth's atmosphere at one geopotential altitude.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AtmosphericState {
    pub temperature_k: f64,
    pub pressure_pa: f64,
    pub density_kg_m3: f64,
    pub dynamic_viscosity_pa_s: f64,
    pub kinematic_viscosity_m2_s: f64,
    pub speed_of_sound_m_s: f64,
}

impl AtmosphericState {
    pub fn is_physical(&self) -> bool {
        self.values()
            .iter()
            .all(|v| v.is_finite() && *v > 0.0)
    }
}

impl ProfileRecord for AtmosphericState {
    fn header() -> &'static [&'static str] {
        &[
            "Temperature (K)",
            "Pressure (Pa)",
            "Density (kg/m^3)",
            "Dynamic Viscosity (Pa s)",
            "Kinematic Viscosity (m^2/s)",
            "Speed of Sound (m/s)",
        ]
    }

    fn values(&self) -> Vec<f64> {
        vec![
            self.temperature_k,
            self.pressure_pa,
            self.density_kg_m3,
            self.dynamic_viscosity_pa_s,
            self.kinematic_viscosity_m2_s,
            self.speed_of_sound_m_s,
        ]
    }
}

/// Trace species carried by the Mars model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraceGas {
    Helium,
    Hydrogen,
}

impl TraceGas {
    /// Molar mass in kg/mol.
    pub fn molar_mass(self) -> f64 {
        match self {
            TraceGas::Helium => M_HELIUM,
            TraceGas::Hydrogen => M_HYDROGEN,
        }
    }
}

impl std::fmt::Display for TraceGas {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            TraceGas::Helium => write!(f, "He"),
            TraceGas::Hydrogen => write!(f, "H2"),
        }
    }
}

/// State of the Mars reference atmosphere at one altitude.
///
/// Temperature, pressure and ambient density come from independent table
/// lookups and are not forced to satisfy the ideal gas law.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MarsState {
    pub pressure_pa: f64,
    pub temperature_k: f64,
    pub dynamic_viscosity_pa_s: f64,
    pub kinematic_viscosity_m2_s: f64,
    pub speed_of_sound_m_s: f64,
    pub density_kg_m3: f64,
    pub density_he_kg_m3: f64,
    pub density_h2_kg_m3: f64,
}

impl MarsState {
    pub fn trace_density(&self, gas: TraceGas) -> f64 {
        match gas {
            TraceGas::Helium => self.density_he_kg_m3,
            TraceGas::Hydrogen => self.density_h2_kg_m3,
        }
    }
}

impl ProfileRecord for MarsState {
    fn header() -> &'static [&'static str] {
        &[
            "Pressure (Pa)",
            "Temperature (K)",
            "Dynamic Viscosity (Pa s)",
            "Kinematic Viscosity (m^2/s)",
            "Speed of Sound (m/s)",
            "Density (kg/m^3)",
            "He Density (kg/m^3)",
            "H2 Density (kg/m^3)",
        ]
    }

    fn values(&self) -> Vec<f64> {
        vec![
            self.pressure_pa,
            self.temperature_k,
            self.dynamic_viscosity_pa_s,
            self.kinematic_viscosity_m2_s,
            self.speed_of_sound_m_s,
            self.density_kg_m3,
            self.density_he_kg_m3,
            self.density_h2_kg_m3,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_matches_values() {
        let state = MarsState {
            pressure_pa: 1.0,
            temperature_k: 2.0,
            dynamic_viscosity_pa_s: 3.0,
            kinematic_viscosity_m2_s: 4.0,
            speed_of_sound_m_s: 5.0,
            density_kg_m3: 6.0,
            density_he_kg_m3: 7.0,
            density_h2_kg_m3: 8.0,
        };
        assert_eq!(MarsState::header().len(), state.values().len());
        assert_eq!(state.trace_density(TraceGas::Hydrogen), 8.0);
    }

    #[test]
    fn test_negative_pressure_is_not_physical() {
        let state = AtmosphericState {
            temperature_k: 200.0,
            pressure_pa: -1.0,
            density_kg_m3: 0.1,
            dynamic_viscosity_pa_s: 1e-5,
            kinematic_viscosity_m2_s: 1e-4,
            speed_of_sound_m_s: 300.0,
        };
        assert!(!state.is_physical());
        assert_eq!(AtmosphericState::header().len(), state.values().len());
    }
}

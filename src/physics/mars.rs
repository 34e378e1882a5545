use super::transport::{co2_viscosity, partial_density, speed_of_sound};
use crate::config::mars_profile::*;
use crate::constants::{GAMMA_CO2, R_CO2};
use crate::errors::AtmosphereError;
use crate::models::{AtmosphereModel, MarsState, TraceGas};
use crate::numerics::interpolation::Breakpoints;
use csv::ReaderBuilder;
use lazy_static::lazy_static;
use serde::Deserialize;
use std::io;
use tracing::debug;

lazy_static! {
    static ref REFERENCE_ATMOSPHERE: MarsAtmosphere = MarsAtmosphere::reference();
}

/// One row of a profile CSV.
#[derive(Debug, Deserialize)]
struct ProfileRow {
    altitude_km: f64,
    temperature_k: f64,
    pressure_pa: f64,
    density_kg_m3: f64,
}

/// Tabulated temperature, pressure and density sharing one altitude axis.
#[derive(Debug, Clone, PartialEq)]
pub struct MarsProfile {
    altitude_km: Breakpoints,
    temperature_k: Vec<f64>,
    pressure_pa: Vec<f64>,
    density_kg_m3: Vec<f64>,
}

impl MarsProfile {
    pub fn new(
        altitude_km: Vec<f64>,
        temperature_k: Vec<f64>,
        pressure_pa: Vec<f64>,
        density_kg_m3: Vec<f64>,
    ) -> Result<Self, AtmosphereError> {
        let n = altitude_km.len();
        for (name, len) in [
            ("temperature", temperature_k.len()),
            ("pressure", pressure_pa.len()),
            ("density", density_kg_m3.len()),
        ] {
            if len != n {
                return Err(AtmosphereError::InvalidTable {
                    context: "mars profile",
                    detail: format!("{} column has {} rows, altitude has {}", name, len, n),
                });
            }
        }

        Ok(Self {
            altitude_km: Breakpoints::new(altitude_km)?,
            temperature_k,
            pressure_pa,
            density_kg_m3,
        })
    }

    /// Built-in reference profile.
    pub fn reference() -> Self {
        Self {
            altitude_km: reference_breakpoints(),
            temperature_k: MARS_TEMPERATURE_K.to_vec(),
            pressure_pa: MARS_PRESSURE_PA.to_vec(),
            density_kg_m3: MARS_DENSITY_KG_M3.to_vec(),
        }
    }

    /// Reads a profile with header `altitude_km,temperature_k,pressure_pa,density_kg_m3`.
    pub fn from_csv_reader<R: io::Read>(reader: R) -> Result<Self, AtmosphereError> {
        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut altitude = Vec::new();
        let mut temperature = Vec::new();
        let mut pressure = Vec::new();
        let mut density = Vec::new();

        for result in rdr.deserialize() {
            let row: ProfileRow = result?;
            altitude.push(row.altitude_km);
            temperature.push(row.temperature_k);
            pressure.push(row.pressure_pa);
            density.push(row.density_kg_m3);
        }

        debug!(rows = altitude.len(), "loaded mars profile");
        Self::new(altitude, temperature, pressure, density)
    }

    /// Altitude range covered by samples (km); outside it values are extrapolated.
    pub fn domain_km(&self) -> (f64, f64) {
        self.altitude_km.domain()
    }

    /// Tabulated altitudes (km), at least two and strictly increasing.
    pub fn altitudes_km(&self) -> &[f64] {
        self.altitude_km.as_slice()
    }

    /// Temperature (K), pressure (Pa) and density (kg/m³) at `altitude_km`,
    /// each from its own piecewise-linear column.
    pub fn sample(&self, altitude_km: f64) -> (f64, f64, f64) {
        if !self.altitude_km.contains(altitude_km) {
            debug!(altitude_km, "extrapolating mars profile");
        }
        let location = self.altitude_km.locate(altitude_km);

        (
            self.altitude_km.evaluate(location, &self.temperature_k),
            self.altitude_km.evaluate(location, &self.pressure_pa),
            self.altitude_km.evaluate(location, &self.density_kg_m3),
        )
    }
}

impl Default for MarsProfile {
    fn default() -> Self {
        Self::reference()
    }
}

// The const columns are sorted and finite, so validation cannot fail.
fn reference_breakpoints() -> Breakpoints {
    match Breakpoints::new(MARS_ALTITUDE_KM.to_vec()) {
        Ok(breakpoints) => breakpoints,
        Err(e) => unreachable!("reference mars altitudes are invalid: {}", e),
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct MarsAtmosphere {
    profile: MarsProfile,
}

impl MarsAtmosphere {
    pub fn new(profile: MarsProfile) -> Self {
        Self { profile }
    }

    pub fn reference() -> Self {
        Self::new(MarsProfile::reference())
    }

    pub fn profile(&self) -> &MarsProfile {
        &self.profile
    }

    pub fn state_at(&self, altitude_km: f64) -> MarsState {
        let (temperature, pressure, density) = self.profile.sample(altitude_km);
        let dynamic_viscosity = co2_viscosity(temperature);
        let trace = |gas: TraceGas| partial_density(pressure, gas.molar_mass(), R_CO2, temperature);

        MarsState {
            pressure_pa: pressure,
            temperature_k: temperature,
            dynamic_viscosity_pa_s: dynamic_viscosity,
            kinematic_viscosity_m2_s: dynamic_viscosity / density,
            speed_of_sound_m_s: speed_of_sound(GAMMA_CO2, R_CO2, temperature),
            density_kg_m3: density,
            density_he_kg_m3: trace(TraceGas::Helium),
            density_h2_kg_m3: trace(TraceGas::Hydrogen),
        }
    }
}

impl AtmosphereModel for MarsAtmosphere {
    type State = MarsState;

    const ALTITUDE_UNIT: &'static str = "km";

    fn evaluate(&self, altitude: f64) -> Result<MarsState, AtmosphereError> {
        Ok(self.state_at(altitude))
    }
}

/// Evaluates the reference Mars atmosphere at an altitude in kilometers.
pub fn evaluate_mars(altitude_km: f64) -> MarsState {
    REFERENCE_ATMOSPHERE.state_at(altitude_km)
}

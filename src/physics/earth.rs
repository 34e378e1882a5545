use super::transport::{ideal_gas_density, speed_of_sound, sutherland_viscosity};
use crate::config::earth_layers::{LayerSpec, ISA_LAYERS};
use crate::constants::*;
use crate::errors::AtmosphereError;
use crate::models::{AtmosphereModel, AtmosphericState};
use lazy_static::lazy_static;
use tracing::debug;

lazy_static! {
    static ref STANDARD_ATMOSPHERE: EarthAtmosphere = EarthAtmosphere::standard();
}

/// One layer of the stack with its base state resolved.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layer {
    pub index: usize,
    pub name: &'static str,
    pub lower_bound_m: f64,
    pub upper_bound_m: f64,
    pub lapse_rate_k_per_m: f64,
    pub base_temperature_k: f64,
    pub base_pressure_pa: f64,
    base_temperature_ratio: f64, // T_base / T0
    base_pressure_ratio: f64,    // P_base / P0
}

impl Layer {
    pub fn is_isothermal(&self) -> bool {
        self.lapse_rate_k_per_m == 0.0
    }

    /// Temperature and pressure ratios (T/T0, P/P0) at `altitude_m`,
    /// evaluated with this layer's formula regardless of its bounds.
    pub fn ratios_at(&self, altitude_m: f64) -> (f64, f64) {
        let dh = altitude_m - self.lower_bound_m;

        if self.is_isothermal() {
            let pressure_ratio = self.base_pressure_ratio
                * (-dh * G0 / (R_AIR * self.base_temperature_k)).exp();
            (self.base_temperature_ratio, pressure_ratio)
        } else {
            let temperature_ratio =
                self.base_temperature_ratio + dh * self.lapse_rate_k_per_m / T0_SEA_LEVEL;
            let exponent = G0 / (-self.lapse_rate_k_per_m * R_AIR);
            let pressure_ratio = self.base_pressure_ratio
                * (temperature_ratio / self.base_temperature_ratio).powf(exponent);
            (temperature_ratio, pressure_ratio)
        }
    }

    /// Absolute temperature (K) and pressure (Pa) at `altitude_m`.
    pub fn temperature_pressure_at(&self, altitude_m: f64) -> (f64, f64) {
        let (temperature_ratio, pressure_ratio) = self.ratios_at(altitude_m);
        (
            temperature_ratio * T0_SEA_LEVEL,
            pressure_ratio * P0_SEA_LEVEL,
        )
    }

    // The first layer has no lower check so it also covers negative altitudes.
    fn contains(&self, altitude_m: f64) -> bool {
        let above_lower = self.index == 0 || altitude_m > self.lower_bound_m;
        above_lower && altitude_m <= self.upper_bound_m
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LayerLookup<'a> {
    Found(&'a Layer),
    OutOfRange,
}

/// What to do with altitudes above the top of the layer stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CeilingPolicy {
    #[default]
    Fail,
    ExtrapolateTopLayer,
}

/// Piecewise layered atmosphere evaluated on geopotential altitude.
#[derive(Debug, Clone, PartialEq)]
pub struct EarthAtmosphere {
    layers: Vec<Layer>,
    ceiling_policy: CeilingPolicy,
}

impl EarthAtmosphere {
    /// The seven-layer ISA up to 84852 m, failing above it.
    pub fn standard() -> Self {
        Self {
            layers: stack_layers(&ISA_LAYERS),
            ceiling_policy: CeilingPolicy::default(),
        }
    }

    /// Builds a custom stack. The first layer's base state is the sea-level
    /// reference; every other base state is taken from the layer below.
    pub fn from_specs(
        specs: &[LayerSpec],
        ceiling_policy: CeilingPolicy,
    ) -> Result<Self, AtmosphereError> {
        validate_specs(specs)?;
        Ok(Self {
            layers: stack_layers(specs),
            ceiling_policy,
        })
    }

    pub fn with_ceiling_policy(mut self, ceiling_policy: CeilingPolicy) -> Self {
        self.ceiling_policy = ceiling_policy;
        self
    }

    pub fn ceiling_policy(&self) -> CeilingPolicy {
        self.ceiling_policy
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    /// Upper bound of the top layer (m).
    pub fn ceiling_m(&self) -> f64 {
        self.top_layer().upper_bound_m
    }

    fn top_layer(&self) -> &Layer {
        &self.layers[self.layers.len() - 1]
    }

    pub fn lookup(&self, altitude_m: f64) -> LayerLookup<'_> {
        match self.layers.iter().find(|layer| layer.contains(altitude_m)) {
            Some(layer) => {
                debug!(altitude_m, layer = layer.name, "selected atmosphere layer");
                LayerLookup::Found(layer)
            }
            None => LayerLookup::OutOfRange,
        }
    }

    /// Full state at `altitude_m`.
    ///
    /// NaN and `-inf` are rejected as `NonFiniteAltitude`. `+inf` lies above
    /// every layer, so it is `OutOfRange` under [`CeilingPolicy::Fail`] and
    /// `NonFiniteAltitude` when extrapolating.
    pub fn state_at(&self, altitude_m: f64) -> Result<AtmosphericState, AtmosphereError> {
        if altitude_m.is_nan() || altitude_m == f64::NEG_INFINITY {
            return Err(AtmosphereError::NonFiniteAltitude(altitude_m));
        }

        let layer = match self.lookup(altitude_m) {
            LayerLookup::Found(layer) => layer,
            LayerLookup::OutOfRange => match self.ceiling_policy {
                CeilingPolicy::Fail => {
                    return Err(AtmosphereError::OutOfRange {
                        altitude_m,
                        ceiling_m: self.ceiling_m(),
                    })
                }
                CeilingPolicy::ExtrapolateTopLayer if altitude_m.is_finite() => {
                    let top = self.top_layer();
                    debug!(
                        altitude_m,
                        ceiling_m = top.upper_bound_m,
                        "extrapolating {} above the model ceiling",
                        top.name
                    );
                    top
                }
                CeilingPolicy::ExtrapolateTopLayer => {
                    return Err(AtmosphereError::NonFiniteAltitude(altitude_m))
                }
            },
        };

        let (temperature, pressure) = layer.temperature_pressure_at(altitude_m);
        Ok(derive_state(temperature, pressure))
    }
}

impl Default for EarthAtmosphere {
    fn default() -> Self {
        Self::standard()
    }
}

impl AtmosphereModel for EarthAtmosphere {
    type State = AtmosphericState;

    const ALTITUDE_UNIT: &'static str = "m";

    fn evaluate(&self, altitude: f64) -> Result<AtmosphericState, AtmosphereError> {
        self.state_at(altitude)
    }
}

/// Evaluates the standard atmosphere at a geopotential altitude in meters.
pub fn evaluate_earth(altitude_m: f64) -> Result<AtmosphericState, AtmosphereError> {
    STANDARD_ATMOSPHERE.state_at(altitude_m)
}

fn derive_state(temperature: f64, pressure: f64) -> AtmosphericState {
    let density = ideal_gas_density(pressure, R_AIR, temperature);
    let dynamic_viscosity = sutherland_viscosity(temperature);

    AtmosphericState {
        temperature_k: temperature,
        pressure_pa: pressure,
        density_kg_m3: density,
        dynamic_viscosity_pa_s: dynamic_viscosity,
        kinematic_viscosity_m2_s: dynamic_viscosity / density,
        speed_of_sound_m_s: speed_of_sound(GAMMA_AIR, R_AIR, temperature),
    }
}

fn stack_layers(specs: &[LayerSpec]) -> Vec<Layer> {
    let mut layers = Vec::with_capacity(specs.len());
    let (mut temperature_ratio, mut pressure_ratio) = (1.0, 1.0);

    for (index, spec) in specs.iter().enumerate() {
        let layer = Layer {
            index,
            name: spec.name,
            lower_bound_m: spec.lower_bound_m,
            upper_bound_m: spec.upper_bound_m,
            lapse_rate_k_per_m: spec.lapse_rate_k_per_m,
            base_temperature_k: temperature_ratio * T0_SEA_LEVEL,
            base_pressure_pa: pressure_ratio * P0_SEA_LEVEL,
            base_temperature_ratio: temperature_ratio,
            base_pressure_ratio: pressure_ratio,
        };
        (temperature_ratio, pressure_ratio) = layer.ratios_at(spec.upper_bound_m);
        layers.push(layer);
    }

    layers
}

fn validate_specs(specs: &[LayerSpec]) -> Result<(), AtmosphereError> {
    let invalid = |detail: String| AtmosphereError::InvalidTable {
        context: "layer stack",
        detail,
    };

    if specs.is_empty() {
        return Err(invalid("no layers".to_string()));
    }

    for spec in specs {
        let finite = [
            spec.lower_bound_m,
            spec.upper_bound_m,
            spec.lapse_rate_k_per_m,
        ]
        .iter()
        .all(|v| v.is_finite());
        if !finite {
            return Err(invalid(format!("{} has non-finite parameters", spec.name)));
        }
        if spec.upper_bound_m <= spec.lower_bound_m {
            return Err(invalid(format!(
                "{} has upper bound {} not above lower bound {}",
                spec.name, spec.upper_bound_m, spec.lower_bound_m
            )));
        }
    }

    if let Some(pair) = specs
        .windows(2)
        .find(|pair| pair[0].upper_bound_m != pair[1].lower_bound_m)
    {
        return Err(invalid(format!(
            "gap between {} (top {} m) and {} (bottom {} m)",
            pair[0].name, pair[0].upper_bound_m, pair[1].name, pair[1].lower_bound_m
        )));
    }

    Ok(())
}

// Earth reference atmosphere
pub const G0: f64 = 9.80665; // Standard gravity (m/s²)
pub const R_UNIVERSAL_EARTH: f64 = 8.31432; // Universal gas constant, ISA value (J/(mol·K))
pub const M_AIR: f64 = 0.0289644; // Molar mass of dry air (kg/mol)
pub const R_AIR: f64 = R_UNIVERSAL_EARTH / M_AIR; // Specific gas constant of air ≈ 287.053 (J/(kg·K))
pub const T0_SEA_LEVEL: f64 = 288.15; // Sea-level temperature (K)
pub const P0_SEA_LEVEL: f64 = 101_325.0; // Sea-level pressure (Pa)
pub const GAMMA_AIR: f64 = 1.4; // Ratio of specific heats for air

// Sutherland's law for air
pub const SUTHERLAND_B: f64 = 1.458e-6; // kg/(m·s·K^0.5)
pub const SUTHERLAND_S: f64 = 110.4; // K

// Mars reference atmosphere
pub const R_UNIVERSAL_MARS: f64 = 8.3143; // Universal gas constant used by the Mars model (J/(mol·K))
pub const M_CO2: f64 = 0.04401; // Molar mass of CO2 (kg/mol)
pub const R_CO2: f64 = R_UNIVERSAL_MARS / M_CO2; // ≈ 188.918 (J/(kg·K))
pub const GAMMA_CO2: f64 = 1.2941; // Ratio of specific heats for the CO2 mixture
pub const M_HELIUM: f64 = 0.0040026022; // kg/mol
pub const M_HYDROGEN: f64 = 0.002015894; // kg/mol

// Reference-ratio viscosity law for CO2
pub const MU0_CO2: f64 = 14.8e-6; // Pa·s at T_MU0_CO2
pub const T_MU0_CO2: f64 = 293.15; // K
pub const C_CO2: f64 = 240.0; // K

// Solar geometry
pub const DEGREES_PER_HOUR: f64 = 15.0; // Earth rotation seen from the sun
pub const DAYS_PER_YEAR: f64 = 365.0;
pub const EQUINOX_DAY_OFFSET: f64 = 81.0; // Day-of-year offset of the March equinox
pub const AXIAL_TILT_DEG: f64 = 23.45;

/// Static description of one ISA layer. Base temperature and pressure are
/// not stored here; they are chained from the layer below when the stack
/// is built.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayerSpec {
    pub name: &'static str,
    pub lower_bound_m: f64,
    pub upper_bound_m: f64,
    pub lapse_rate_k_per_m: f64, // dT/dh, negative when temperature falls with altitude
}

/// 1976 U.S. Standard / ISA layers up to the mesopause, geopotential altitude.
pub const ISA_LAYERS: [LayerSpec; 7] = [
    LayerSpec {
        name: "troposphere",
        lower_bound_m: 0.0,
        upper_bound_m: 11_000.0,
        lapse_rate_k_per_m: -0.0065,
    },
    LayerSpec {
        name: "tropopause",
        lower_bound_m: 11_000.0,
        upper_bound_m: 20_000.0,
        lapse_rate_k_per_m: 0.0,
    },
    LayerSpec {
        name: "lower stratosphere",
        lower_bound_m: 20_000.0,
        upper_bound_m: 32_000.0,
        lapse_rate_k_per_m: 0.001,
    },
    LayerSpec {
        name: "upper stratosphere",
        lower_bound_m: 32_000.0,
        upper_bound_m: 47_000.0,
        lapse_rate_k_per_m: 0.0028,
    },
    LayerSpec {
        name: "stratopause",
        lower_bound_m: 47_000.0,
        upper_bound_m: 51_000.0,
        lapse_rate_k_per_m: 0.0,
    },
    LayerSpec {
        name: "lower mesosphere",
        lower_bound_m: 51_000.0,
        upper_bound_m: 71_000.0,
        lapse_rate_k_per_m: -0.0028,
    },
    LayerSpec {
        name: "upper mesosphere",
        lower_bound_m: 71_000.0,
        upper_bound_m: 84_852.0,
        lapse_rate_k_per_m: -0.002,
    },
];

/// Published ISA base values (K, Pa) at each layer's lower bound.
pub const ISA_REFERENCE_BASES: [(f64, f64); 7] = [
    (288.15, 101_325.0),
    (216.65, 22_632.06),
    (216.65, 5_474.889),
    (228.65, 868.0187),
    (270.65, 110.9063),
    (270.65, 66.93887),
    (214.65, 3.956420),
];

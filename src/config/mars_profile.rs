// Mars reference profile, 27 samples from 2.172 km to 57.546 km.
// Columns are parallel: index i of each array describes the same altitude.

pub const MARS_ALTITUDE_KM: [f64; 27] = [
    2.172, 4.302, 6.432, 8.561, 10.691, 12.821, 14.951, 17.080, 19.210, 21.340, 23.470, 25.599,
    27.729, 29.859, 31.989, 34.119, 36.248, 38.378, 40.508, 42.638, 44.767, 46.897, 49.027,
    51.157, 53.286, 55.416, 57.546,
];

pub const MARS_TEMPERATURE_K: [f64; 27] = [
    209.39, 206.50, 202.42, 199.71, 196.79, 192.70, 189.06, 186.58, 183.09, 179.24, 176.65,
    173.58, 169.57, 166.39, 163.55, 159.54, 156.72, 153.74, 150.27, 149.65, 148.21, 147.96,
    146.88, 145.62, 145.14, 143.54, 142.96,
];

pub const MARS_PRESSURE_PA: [f64; 27] = [
    475.13, 389.43, 318.11, 258.99, 210.23, 170.00, 136.88, 109.84, 87.82, 69.89, 55.40, 43.75,
    34.38, 26.87, 20.92, 16.19, 12.47, 9.550, 7.275, 5.522, 4.183, 3.164, 2.390, 1.801, 1.355,
    1.018, 0.762,
];

pub const MARS_DENSITY_KG_M3: [f64; 27] = [
    0.011873, 0.0098677, 0.008223, 0.0067857, 0.0055897, 0.0046161, 0.0037884, 0.0030803,
    0.0025097, 0.0020403, 0.0016409, 0.0013188, 0.0010608, 0.00084512, 0.00066914, 0.00053101,
    0.00041621, 0.00032504, 0.00025333, 0.00019306, 0.00014769, 0.00011189, 8.5138e-05,
    6.4721e-05, 4.8863e-05, 3.7098e-05, 2.7908e-05,
];

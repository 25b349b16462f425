pub const GRAVITY: f64 = 9.80665; // m/s^2
pub const AIR_GAS_CONSTANT: f64 = 287.05287; // J/(kg·K)
pub const ISA_SEA_LEVEL_TEMP: f64 = 288.15; // K
pub const ISA_SEA_LEVEL_PRESSURE: f64 = 101325.0; // Pa
pub const ISA_SEA_LEVEL_DENSITY: f64 = 1.225; // kg/m^3
pub const ISA_LAPSE_RATE: f64 = -0.0065; // K/m
pub const ISA_TROPOPAUSE_ALTITUDE: f64 = 11000.0; // m

pub const DEFAULT_SCALE_HEIGHT: f64 = 8500.0; // m

// Gust harmonics relative to the base gust frequency
pub const GUST_HARMONIC_LOW: f64 = 0.73;
pub const GUST_HARMONIC_HIGH: f64 = 1.37;

// Turbulence keeps mostly horizontal
pub const TURBULENCE_VERTICAL_DAMPING: f64 = 0.3;
pub const MIN_TURBULENCE_SPATIAL_SCALE: f64 = 1e-3; // m

pub const MIN_SURFACE_AREA: f64 = 1e-4; // m^2
pub const DEFAULT_MIN_AIRSPEED: f64 = 0.5; // m/s

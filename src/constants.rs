//! Physical and astrodynamic constants.

/// Astronomical unit (km)
pub const AU: f64 = 1.495978707e8;

/// Seconds per solar day
pub const SOLAR_DAY: f64 = 86400.0;

/// Seconds per Julian year
pub const JULIAN_YEAR: f64 = 365.25 * SOLAR_DAY;

/// Two pi
pub const TAU: f64 = std::f64::consts::TAU;

/// Degrees to radians
pub const DEG2RAD: f64 = std::f64::consts::PI / 180.0;

/// Radians to degrees
pub const RAD2DEG: f64 = 180.0 / std::f64::consts::PI;

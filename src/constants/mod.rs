//! Constants module for the simplified orbit model

use std::f64::consts::PI;

use chrono::NaiveDate;

// Astronomical distances
/// Astronomical Unit in kilometers
pub const AU_KM: f64 = 149_597_870.700;

// Time constants
/// Days per Julian year, also the orbital period of a 1 AU orbit in this model
pub const DAYS_PER_YEAR: f64 = 365.25;
/// J2000 epoch calendar date (2000-01-01)
pub const J2000_DATE: NaiveDate = match NaiveDate::from_ymd_opt(2000, 1, 1) {
    Some(date) => date,
    None => panic!("2000-01-01 is a valid calendar date"),
};

// Angles
/// Tau (2*PI) for full circle
pub const TAU: f64 = 2.0 * PI;

// Plotting
/// Number of samples along each orbit path
pub const ORBIT_SAMPLES: usize = 100;
/// Colours assigned to bodies in catalog order
pub const PLOT_PALETTE: [&str; 6] = ["gray", "orange", "blue", "red", "brown", "gold"];

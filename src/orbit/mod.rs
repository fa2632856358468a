//! Simplified circular orbit model
//!
//! Every body moves on a circle of radius equal to its semi-major axis,
//! centred on the Sun, with a period that grows linearly with that radius
//! (`365.25 * a` days). Eccentricity is carried in the catalog but plays no
//! part in the position.
//!
//! # Phase
//!
//! The phase on a given date is
//!
//! ```text
//! phase = (days_since_j2000 mod trunc(period)) / period * 2π
//! ```
//!
//! The modulus uses the period truncated to whole days while the division
//! uses the untruncated period, so a body does not quite complete its circle
//! before the phase wraps. Negative day counts (dates before 2000-01-01) wrap
//! into `[0, trunc(period))`.

use std::fmt;
use std::ops::Range;

use chrono::NaiveDate;
use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

use crate::calendar::days_since_epoch;
use crate::catalog::{BodyCatalogEntry, Catalog};
use crate::constants::{ORBIT_SAMPLES, TAU};
use crate::Result;

/// Heliocentric position in the orbital plane, in AU
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    /// Create a new position
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Position on a circle of the given radius at the given angle
    pub fn on_circle(radius: f64, angle: f64) -> Self {
        Self {
            x: radius * angle.cos(),
            y: radius * angle.sin(),
        }
    }

    /// Distance from the origin
    pub fn radius(&self) -> f64 {
        self.as_vector().norm()
    }

    /// Euclidean distance to another position
    pub fn distance_to(&self, other: &Position) -> f64 {
        (other.as_vector() - self.as_vector()).norm()
    }

    /// View as an nalgebra vector
    pub fn as_vector(&self) -> Vector2<f64> {
        Vector2::new(self.x, self.y)
    }
}

impl From<Vector2<f64>> for Position {
    fn from(v: Vector2<f64>) -> Self {
        Self { x: v.x, y: v.y }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.3}, {:.3}) AU", self.x, self.y)
    }
}

/// Anything that can place a named body on a date
///
/// [`OrbitalModel`] is the built-in provider; a higher-precision ephemeris can
/// stand in for it as long as it reports positions in the same frame and units.
pub trait PositionProvider {
    /// Position of `body` on `date`
    fn position(&self, body: &str, date: NaiveDate) -> Result<Position>;
}

/// Phase angle in radians for a body `days` days after J2000
pub fn phase(entry: &BodyCatalogEntry, days: i64) -> f64 {
    let wrapped = days.rem_euclid(entry.truncated_period_days());
    wrapped as f64 / entry.orbital_period_days() * TAU
}

/// Circular-orbit position model over a borrowed catalog
#[derive(Debug, Clone, Copy)]
pub struct OrbitalModel<'a> {
    catalog: &'a Catalog,
}

impl<'a> OrbitalModel<'a> {
    /// Create a model over a catalog
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    /// The catalog this model reads from
    pub fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    /// Look up a body's catalog entry
    pub fn entry(&self, name: &str) -> Result<&'a BodyCatalogEntry> {
        self.catalog.entry(name)
    }

    /// Orbital period in days
    pub fn orbital_period_days(&self, name: &str) -> Result<f64> {
        Ok(self.entry(name)?.orbital_period_days())
    }

    /// Orbital period truncated to whole days
    pub fn truncated_period_days(&self, name: &str) -> Result<i64> {
        Ok(self.entry(name)?.truncated_period_days())
    }

    /// Position of a body on a date
    pub fn compute_position(&self, name: &str, date: NaiveDate) -> Result<Position> {
        let entry = self.entry(name)?;
        let angle = phase(entry, days_since_epoch(date));
        Ok(Position::on_circle(entry.semi_major_axis_au, angle))
    }

    /// Positions of every catalog body on a date, in catalog order
    pub fn positions(&self, date: NaiveDate) -> Vec<(&'a str, Position)> {
        let days = days_since_epoch(date);
        self.catalog
            .entries()
            .map(|entry| {
                let angle = phase(entry, days);
                (
                    entry.name.as_str(),
                    Position::on_circle(entry.semi_major_axis_au, angle),
                )
            })
            .collect()
    }

    /// Evenly spaced points around a body's full orbit, for plotting
    pub fn plot_samples(&self, name: &str) -> Result<OrbitSamples> {
        Ok(OrbitSamples::new(self.entry(name)?.semi_major_axis_au))
    }
}

impl PositionProvider for OrbitalModel<'_> {
    fn position(&self, body: &str, date: NaiveDate) -> Result<Position> {
        self.compute_position(body, date)
    }
}

/// Lazy sequence of points around a circular orbit
///
/// Angles run from 0 to 2π inclusive, so the first and last points coincide
/// and the path closes.
#[derive(Debug, Clone)]
pub struct OrbitSamples {
    radius: f64,
    steps: Range<usize>,
}

impl OrbitSamples {
    fn new(radius: f64) -> Self {
        Self {
            radius,
            steps: 0..ORBIT_SAMPLES,
        }
    }
}

impl Iterator for OrbitSamples {
    type Item = Position;

    fn next(&mut self) -> Option<Position> {
        let k = self.steps.next()?;
        let angle = TAU * k as f64 / (ORBIT_SAMPLES - 1) as f64;
        Some(Position::on_circle(self.radius, angle))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.steps.size_hint()
    }
}

impl ExactSizeIterator for OrbitSamples {}

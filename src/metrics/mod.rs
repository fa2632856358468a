//! Pairwise distance and confidence metrics
//!
//! The confidence score is a heuristic: pairs of bodies with more eccentric
//! real orbits are further from the circular model, so their distances are
//! trusted less. It is not a statistical confidence interval, and the
//! "R-squared" value is simply its square.

use chrono::NaiveDate;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::orbit::{OrbitalModel, PositionProvider};
use crate::Result;

/// Distance, confidence and R² for one pair of bodies on one date
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistanceMetric {
    pub body_a: String,
    pub body_b: String,
    pub date: NaiveDate,
    pub distance_au: f64,
    pub confidence: f64,
    pub r_squared: f64,
}

/// Confidence from two eccentricities: `1 - (e_a + e_b) / 2`
pub fn confidence_from_eccentricities(e_a: f64, e_b: f64) -> f64 {
    1.0 - (e_a + e_b) / 2.0
}

/// The simplified R² value, `confidence²`
pub fn compute_r_squared(confidence: f64) -> f64 {
    confidence * confidence
}

/// Metrics over a catalog and a position provider
///
/// Eccentricities always come from the catalog; positions come from the
/// provider, which is the catalog's own [`OrbitalModel`] unless another is
/// supplied with [`MetricsEngine::with_provider`].
#[derive(Debug, Clone, Copy)]
pub struct MetricsEngine<'a, P = OrbitalModel<'a>> {
    catalog: &'a Catalog,
    provider: P,
}

impl<'a> MetricsEngine<'a> {
    /// Metrics driven by the simplified orbit model
    pub fn new(catalog: &'a Catalog) -> Self {
        Self {
            catalog,
            provider: OrbitalModel::new(catalog),
        }
    }
}

impl<'a, P: PositionProvider> MetricsEngine<'a, P> {
    /// Metrics with positions from an alternative provider
    pub fn with_provider(catalog: &'a Catalog, provider: P) -> Self {
        Self { catalog, provider }
    }

    /// The position provider in use
    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Euclidean distance in AU between two bodies on a date
    pub fn compute_distance(&self, body_a: &str, body_b: &str, date: NaiveDate) -> Result<f64> {
        let a = self.provider.position(body_a, date)?;
        let b = self.provider.position(body_b, date)?;
        Ok(a.distance_to(&b))
    }

    /// Eccentricity-based confidence for a pair, independent of date
    pub fn compute_confidence(&self, body_a: &str, body_b: &str) -> Result<f64> {
        let e_a = self.catalog.entry(body_a)?.eccentricity;
        let e_b = self.catalog.entry(body_b)?.eccentricity;
        Ok(confidence_from_eccentricities(e_a, e_b))
    }

    /// Full metric record for one pair
    pub fn metric(&self, body_a: &str, body_b: &str, date: NaiveDate) -> Result<DistanceMetric> {
        let distance_au = self.compute_distance(body_a, body_b, date)?;
        let confidence = self.compute_confidence(body_a, body_b)?;
        Ok(DistanceMetric {
            body_a: body_a.to_string(),
            body_b: body_b.to_string(),
            date,
            distance_au,
            confidence,
            r_squared: compute_r_squared(confidence),
        })
    }

    /// Every unordered pair of catalog bodies, in catalog order
    pub fn pairs(&self) -> Vec<(&'a str, &'a str)> {
        let names: Vec<&'a str> = self.catalog.names().collect();
        let mut pairs = Vec::with_capacity(names.len() * names.len().saturating_sub(1) / 2);
        for (i, a) in names.iter().enumerate() {
            for b in &names[i + 1..] {
                pairs.push((*a, *b));
            }
        }
        pairs
    }

    /// Metrics for every pair of catalog bodies on a date
    pub fn pairwise(&self, date: NaiveDate) -> Result<Vec<DistanceMetric>> {
        self.pairs()
            .into_iter()
            .map(|(a, b)| self.metric(a, b, date))
            .collect()
    }
}

impl<'a, P: PositionProvider + Sync> MetricsEngine<'a, P> {
    /// Same as [`MetricsEngine::pairwise`], computing pairs in parallel
    pub fn pairwise_parallel(&self, date: NaiveDate) -> Result<Vec<DistanceMetric>> {
        self.pairs()
            .into_par_iter()
            .map(|(a, b)| self.metric(a, b, date))
            .collect()
    }
}

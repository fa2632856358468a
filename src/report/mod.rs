//! Text and JSON rendering of pairwise metrics

use std::fmt;
use std::io::Write;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::metrics::{DistanceMetric, MetricsEngine};
use crate::orbit::PositionProvider;
use crate::Result;

/// Output format for a [`DistanceReport`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

/// All pairwise metrics for one date
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistanceReport {
    pub date: NaiveDate,
    pub metrics: Vec<DistanceMetric>,
}

impl DistanceReport {
    /// Compute the report for every pair in the engine's catalog
    pub fn compute<P: PositionProvider>(
        engine: &MetricsEngine<'_, P>,
        date: NaiveDate,
    ) -> Result<Self> {
        let metrics = engine.pairwise(date)?;
        log::debug!("Computed {} pairwise metrics for {}", metrics.len(), date);
        Ok(Self { date, metrics })
    }

    /// Wrap metrics that were computed elsewhere
    pub fn from_metrics(date: NaiveDate, metrics: Vec<DistanceMetric>) -> Self {
        Self { date, metrics }
    }

    /// Write the report in the requested format
    pub fn write_to<W: Write>(&self, mut writer: W, format: ReportFormat) -> Result<()> {
        match format {
            ReportFormat::Text => write!(writer, "{}", self)?,
            ReportFormat::Json => {
                serde_json::to_writer_pretty(&mut writer, self)?;
                writeln!(writer)?;
            }
        }
        Ok(())
    }
}

impl fmt::Display for DistanceReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Planetary Distances and Confidence for {}:", self.date)?;
        for m in &self.metrics {
            writeln!(f, "{} to {}:", m.body_a, m.body_b)?;
            writeln!(f, "  Distance: {:.3} AU", m.distance_au)?;
            writeln!(f, "  Confidence: {:.2}", m.confidence)?;
            writeln!(f, "  R-squared: {:.4}", m.r_squared)?;
            writeln!(f)?;
        }
        Ok(())
    }
}

//! Plot scene export
//!
//! Gathers what an orbit plot needs (one dashed circle and one current
//! position marker per body) and writes it out as CSV or JSON for an
//! external plotting tool. Nothing here draws.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::constants::PLOT_PALETTE;
use crate::orbit::{OrbitalModel, Position};
use crate::Result;

/// File format for a [`PlotScene`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlotFormat {
    #[default]
    Csv,
    Json,
}

/// Orbit path and current position of one body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodySeries {
    pub name: String,
    pub color: String,
    pub orbit: Vec<Position>,
    pub position: Position,
}

/// Everything needed to draw the orbits on one date
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlotScene {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub date: NaiveDate,
    pub series: Vec<BodySeries>,
}

impl PlotScene {
    /// Build the scene for every body in the model's catalog
    pub fn build(model: &OrbitalModel<'_>, date: NaiveDate) -> Result<Self> {
        let mut series = Vec::with_capacity(model.catalog().len());
        for (i, (name, position)) in model.positions(date).into_iter().enumerate() {
            series.push(BodySeries {
                name: name.to_string(),
                color: PLOT_PALETTE[i % PLOT_PALETTE.len()].to_string(),
                orbit: model.plot_samples(name)?.collect(),
                position,
            });
        }

        Ok(Self {
            title: format!("Simplified Solar System on {}", date),
            x_label: "Distance (AU)".to_string(),
            y_label: "Distance (AU)".to_string(),
            date,
            series,
        })
    }

    /// Write one row per point: `body,color,kind,x,y`
    pub fn write_csv<W: Write>(&self, mut writer: W) -> Result<()> {
        writeln!(writer, "body,color,kind,x,y")?;
        for s in &self.series {
            for p in &s.orbit {
                writeln!(writer, "{},{},orbit,{},{}", s.name, s.color, p.x, p.y)?;
            }
            writeln!(
                writer,
                "{},{},position,{},{}",
                s.name, s.color, s.position.x, s.position.y
            )?;
        }
        Ok(())
    }

    /// Write the scene as pretty-printed JSON
    pub fn write_json<W: Write>(&self, writer: W) -> Result<()> {
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }

    /// Save the scene to a file
    pub fn save<P: AsRef<Path>>(&self, path: P, format: PlotFormat) -> Result<()> {
        let path = path.as_ref();
        let mut writer = BufWriter::new(File::create(path)?);
        match format {
            PlotFormat::Csv => self.write_csv(&mut writer)?,
            PlotFormat::Json => self.write_json(&mut writer)?,
        }
        writer.flush()?;
        log::info!(
            "Wrote plot data for {} bodies to {}",
            self.series.len(),
            path.display()
        );
        Ok(())
    }
}

//! Simplesol: approximate planetary positions on circular orbits
//!
//! This crate places the major planets on circles around the Sun for any
//! calendar date, and derives pairwise distances together with a simple
//! eccentricity-based confidence score. It is deliberately a low-accuracy
//! model: no Kepler equation, no inclination, and an orbital period that grows
//! linearly with the semi-major axis.
//!
//! ```rust
//! use simplesol::{calendar, Catalog, MetricsEngine, OrbitalModel};
//!
//! let catalog = Catalog::solar_system().unwrap();
//! let model = OrbitalModel::new(&catalog);
//! let epoch = calendar::parse_date("2000-01-01").unwrap();
//!
//! let earth = model.compute_position("Earth", epoch).unwrap();
//! assert_eq!((earth.x, earth.y), (1.0, 0.0));
//!
//! let metrics = MetricsEngine::new(&catalog);
//! let d = metrics.compute_distance("Earth", "Mars", epoch).unwrap();
//! assert!((d - 0.524).abs() < 1e-12);
//! ```

use thiserror::Error;

pub mod calendar;
pub mod catalog;
pub mod constants;
pub mod metrics;
pub mod orbit;
pub mod plot;
pub mod report;

// Re-export commonly used types
pub use catalog::{BodyCatalogEntry, Catalog};
pub use metrics::{DistanceMetric, MetricsEngine};
pub use orbit::{OrbitalModel, Position, PositionProvider};

/// Main error type for the simplesol library
#[derive(Debug, Error)]
pub enum SolError {
    #[error("Unknown body: {0}")]
    UnknownBody(String),

    #[error("Invalid date: {0:?} (expected YYYY-MM-DD)")]
    InvalidDate(String),

    #[error("Invalid catalog: {0}")]
    CatalogValidation(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for simplesol operations
pub type Result<T> = std::result::Result<T, SolError>;

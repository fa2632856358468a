//! Body catalog module
//!
//! A [`Catalog`] is the fixed, read-only table of mean orbital parameters the
//! orbit model works from. It is built once, validated up front, and only
//! borrowed afterwards.

use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants::DAYS_PER_YEAR;
use crate::{Result, SolError};

/// Mean orbital parameters of one body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodyCatalogEntry {
    /// Body name, used as the lookup key
    pub name: String,
    /// Semi-major axis in AU, the radius of the model's circular orbit
    pub semi_major_axis_au: f64,
    /// Orbital eccentricity; only feeds the confidence heuristic
    pub eccentricity: f64,
}

impl BodyCatalogEntry {
    /// Create a new catalog entry
    pub fn new(name: &str, semi_major_axis_au: f64, eccentricity: f64) -> Self {
        Self {
            name: name.to_string(),
            semi_major_axis_au,
            eccentricity,
        }
    }

    /// Orbital period in days under the linear period approximation
    pub fn orbital_period_days(&self) -> f64 {
        DAYS_PER_YEAR * self.semi_major_axis_au
    }

    /// Orbital period truncated to whole days, the modulus of the phase calculation
    pub fn truncated_period_days(&self) -> i64 {
        self.orbital_period_days() as i64
    }

    fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(SolError::CatalogValidation(
                "body name must not be empty".to_string(),
            ));
        }
        if !self.semi_major_axis_au.is_finite() || self.semi_major_axis_au <= 0.0 {
            return Err(SolError::CatalogValidation(format!(
                "{}: semi-major axis must be positive, got {}",
                self.name, self.semi_major_axis_au
            )));
        }
        if self.truncated_period_days() < 1 {
            return Err(SolError::CatalogValidation(format!(
                "{}: semi-major axis {} AU gives an orbital period under one day",
                self.name, self.semi_major_axis_au
            )));
        }
        if !(0.0..1.0).contains(&self.eccentricity) {
            return Err(SolError::CatalogValidation(format!(
                "{}: eccentricity must be in [0, 1), got {}",
                self.name, self.eccentricity
            )));
        }
        Ok(())
    }
}

/// Fixed table of bodies keyed by name, preserving insertion order
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: Vec<BodyCatalogEntry>,
    index: HashMap<String, usize>,
}

impl Catalog {
    /// Build a catalog, rejecting invalid or duplicate entries
    pub fn from_entries(entries: Vec<BodyCatalogEntry>) -> Result<Self> {
        let mut index = HashMap::with_capacity(entries.len());
        for (i, entry) in entries.iter().enumerate() {
            entry.validate()?;
            if index.insert(entry.name.clone(), i).is_some() {
                return Err(SolError::CatalogValidation(format!(
                    "duplicate body name: {}",
                    entry.name
                )));
            }
        }
        Ok(Self { entries, index })
    }

    /// The six-planet table of the simplified model
    pub fn solar_system() -> Result<Self> {
        let entries = [
            ("Mercury", 0.387, 0.206),
            ("Venus", 0.723, 0.007),
            ("Earth", 1.000, 0.017),
            ("Mars", 1.524, 0.093),
            ("Jupiter", 5.203, 0.048),
            ("Saturn", 9.537, 0.054),
        ]
        .iter()
        .map(|&(name, a, e)| BodyCatalogEntry::new(name, a, e))
        .collect();
        Self::from_entries(entries)
    }

    /// Load a catalog from a JSON array of entries
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let reader = BufReader::new(File::open(path)?);
        let entries: Vec<BodyCatalogEntry> = serde_json::from_reader(reader)?;
        let catalog = Self::from_entries(entries)?;
        log::info!(
            "Loaded {} bodies from catalog {}",
            catalog.len(),
            path.display()
        );
        Ok(catalog)
    }

    /// Look up a body by exact name
    pub fn entry(&self, name: &str) -> Result<&BodyCatalogEntry> {
        self.index
            .get(name)
            .map(|&i| &self.entries[i])
            .ok_or_else(|| SolError::UnknownBody(name.to_string()))
    }

    /// Check if a body is in the catalog
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// All entries in catalog order
    pub fn entries(&self) -> impl Iterator<Item = &BodyCatalogEntry> {
        self.entries.iter()
    }

    /// Body names in catalog order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.name.as_str())
    }

    /// Restrict the catalog to the named bodies, keeping catalog order
    pub fn subset<S: AsRef<str>>(&self, names: &[S]) -> Result<Self> {
        for name in names {
            self.entry(name.as_ref())?;
        }
        let entries = self
            .entries
            .iter()
            .filter(|entry| names.iter().any(|n| n.as_ref() == entry.name))
            .cloned()
            .collect();
        Self::from_entries(entries)
    }

    /// Number of bodies in the catalog
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the catalog is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::io::Write;

    #[test]
    fn test_solar_system_table() {
        let catalog = Catalog::solar_system().unwrap();
        assert_eq!(catalog.len(), 6);
        assert_eq!(
            catalog.names().collect::<Vec<_>>(),
            vec!["Mercury", "Venus", "Earth", "Mars", "Jupiter", "Saturn"]
        );

        let mars = catalog.entry("Mars").unwrap();
        assert_eq!(mars.semi_major_axis_au, 1.524);
        assert_eq!(mars.eccentricity, 0.093);
    }

    #[test]
    fn test_unknown_body() {
        let catalog = Catalog::solar_system().unwrap();
        match catalog.entry("Pluto") {
            Err(SolError::UnknownBody(name)) => assert_eq!(name, "Pluto"),
            other => panic!("expected UnknownBody, got {:?}", other),
        }
        // Lookup is case-sensitive
        assert!(catalog.entry("earth").is_err());
        assert!(!catalog.contains("earth"));
    }

    #[test]
    fn test_periods() {
        let catalog = Catalog::solar_system().unwrap();
        let mercury = catalog.entry("Mercury").unwrap();
        assert_relative_eq!(mercury.orbital_period_days(), 141.35175, epsilon = 1e-9);
        assert_eq!(mercury.truncated_period_days(), 141);

        let earth = catalog.entry("Earth").unwrap();
        assert_eq!(earth.truncated_period_days(), 365);

        let saturn = catalog.entry("Saturn").unwrap();
        assert_eq!(saturn.truncated_period_days(), 3483);
    }

    #[test]
    fn test_validation_rejects_bad_entries() {
        let bad = [
            BodyCatalogEntry::new("", 1.0, 0.0),
            BodyCatalogEntry::new("Zero", 0.0, 0.0),
            BodyCatalogEntry::new("Negative", -1.0, 0.1),
            BodyCatalogEntry::new("NaN", f64::NAN, 0.1),
            BodyCatalogEntry::new("Tiny", 0.001, 0.1),
            BodyCatalogEntry::new("Hyperbolic", 1.0, 1.0),
            BodyCatalogEntry::new("Negative e", 1.0, -0.1),
        ];
        for entry in bad {
            let name = entry.name.clone();
            assert!(
                matches!(
                    Catalog::from_entries(vec![entry]),
                    Err(SolError::CatalogValidation(_))
                ),
                "entry {:?} should be rejected",
                name
            );
        }
    }

    #[test]
    fn test_validation_rejects_duplicates() {
        let result = Catalog::from_entries(vec![
            BodyCatalogEntry::new("Earth", 1.0, 0.017),
            BodyCatalogEntry::new("Earth", 1.1, 0.017),
        ]);
        assert!(matches!(result, Err(SolError::CatalogValidation(_))));
    }

    #[test]
    fn test_subset_keeps_catalog_order() {
        let catalog = Catalog::solar_system().unwrap();
        let subset = catalog.subset(&["Saturn", "Earth"]).unwrap();
        assert_eq!(subset.names().collect::<Vec<_>>(), vec!["Earth", "Saturn"]);

        assert!(matches!(
            catalog.subset(&["Earth", "Pluto"]),
            Err(SolError::UnknownBody(_))
        ));
    }

    #[test]
    fn test_from_json_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[
                {{"name": "Earth", "semi_major_axis_au": 1.0, "eccentricity": 0.017}},
                {{"name": "Uranus", "semi_major_axis_au": 19.191, "eccentricity": 0.047}}
            ]"#
        )
        .unwrap();

        let catalog = Catalog::from_json_file(file.path()).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.entry("Uranus").unwrap().semi_major_axis_au, 19.191);
    }

    #[test]
    fn test_from_json_file_validates() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"name": "Bad", "semi_major_axis_au": -2.0, "eccentricity": 0.1}}]"#
        )
        .unwrap();
        assert!(matches!(
            Catalog::from_json_file(file.path()),
            Err(SolError::CatalogValidation(_))
        ));

        let mut garbage = tempfile::NamedTempFile::new().unwrap();
        write!(garbage, "not json").unwrap();
        assert!(matches!(
            Catalog::from_json_file(garbage.path()),
            Err(SolError::Json(_))
        ));
    }
}

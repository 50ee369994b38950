//! Ordered body table with lookup and validation.

use std::path::Path;

use crate::body::BodyRecord;
use crate::error::CatalogError;

/// The default body table, embedded at compile time.
const EMBEDDED_CATALOG: &str = include_str!("bodies.ron");

/// A fixed, ordered collection of [`BodyRecord`]s.
///
/// Order is meaningful: the renderer and selection list present bodies in
/// catalog order (sun first, then planets outward).
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    bodies: Vec<BodyRecord>,
}

impl Catalog {
    /// Load the embedded default catalog (sun plus eight planets).
    pub fn load_embedded() -> Result<Self, CatalogError> {
        Self::from_ron(EMBEDDED_CATALOG)
    }

    /// Load a catalog from a RON file on disk.
    pub fn load_from(path: &Path) -> Result<Self, CatalogError> {
        let contents = std::fs::read_to_string(path).map_err(CatalogError::Read)?;
        let catalog = Self::from_ron(&contents)?;
        log::info!("Loaded catalog from {}", path.display());
        Ok(catalog)
    }

    /// Parse and validate a catalog from RON text.
    pub fn from_ron(contents: &str) -> Result<Self, CatalogError> {
        let bodies: Vec<BodyRecord> = ron::from_str(contents).map_err(CatalogError::Parse)?;
        let catalog = Self { bodies };
        catalog.validate()?;
        Ok(catalog)
    }

    /// Look up a body by its lowercase id.
    pub fn get(&self, id: &str) -> Option<&BodyRecord> {
        self.bodies.iter().find(|b| b.id == id)
    }

    /// All records in catalog order.
    pub fn bodies(&self) -> &[BodyRecord] {
        &self.bodies
    }

    /// Iterator over the ids in catalog order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.bodies.iter().map(|b| b.id.as_str())
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    /// Whether the catalog holds no records.
    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    fn validate(&self) -> Result<(), CatalogError> {
        if self.bodies.is_empty() {
            return Err(CatalogError::Invalid("catalog is empty".to_string()));
        }

        let mut suns = 0usize;
        for (i, body) in self.bodies.iter().enumerate() {
            if body.id.is_empty() || body.id.chars().any(|c| c.is_ascii_uppercase()) {
                return Err(CatalogError::Invalid(format!(
                    "body #{i} has a non-lowercase or empty id {:?}",
                    body.id
                )));
            }
            if self.bodies[..i].iter().any(|b| b.id == body.id) {
                return Err(CatalogError::Invalid(format!(
                    "duplicate body id {:?}",
                    body.id
                )));
            }
            if body.display_size <= 0.0 {
                return Err(CatalogError::Invalid(format!(
                    "body {:?} has non-positive display size {}",
                    body.id, body.display_size
                )));
            }
            if body.orbital_radius < 0.0 {
                return Err(CatalogError::Invalid(format!(
                    "body {:?} has negative orbital radius {}",
                    body.id, body.orbital_radius
                )));
            }
            if body.is_sun() {
                suns += 1;
                if body.orbital_speed != 0.0 {
                    return Err(CatalogError::Invalid(format!(
                        "sun {:?} must not have an orbital speed",
                        body.id
                    )));
                }
            }
        }

        if suns != 1 {
            return Err(CatalogError::Invalid(format!(
                "expected exactly one central body with radius 0, found {suns}"
            )));
        }

        Ok(())
    }
}

//! Immutable per-body record.

use serde::{Deserialize, Serialize};

/// One entry in the celestial body table.
///
/// Orbital rates are authored in radians per 1/60 s frame at speed
/// multiplier 1.0; the simulation rescales them by the actual frame delta.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BodyRecord {
    /// Stable lowercase identifier, unique within the catalog.
    pub id: String,
    /// Human-readable display name.
    pub name: String,
    /// Distance from the origin in scene units. Exactly 0 for the sun.
    pub orbital_radius: f64,
    /// Rendered sphere radius in scene units. Also sizes the camera
    /// fly-to distance and the picking hit volume.
    pub display_size: f64,
    /// Base orbital angular rate. 0 for the sun.
    pub orbital_speed: f64,
    /// Base self-rotation rate.
    pub spin_speed: f64,
    /// Descriptive paragraph shown verbatim by the info panel.
    pub description: String,
    /// Distance-from-sun text, shown verbatim.
    pub distance_from_sun: String,
    /// Diameter text, shown verbatim.
    pub diameter: String,
    /// Day-length text, shown verbatim.
    pub day_length: String,
    /// Year-length text, shown verbatim.
    pub year_length: String,
}

impl BodyRecord {
    /// Whether this record is the central star (the only body that does
    /// not orbit).
    pub fn is_sun(&self) -> bool {
        self.orbital_radius == 0.0
    }
}

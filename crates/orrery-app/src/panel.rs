//! Info panel seam: the display collaborator fed on each successful focus.

use orrery_catalog::BodyRecord;
use tracing::info;

/// Receives the selected body's descriptive fields, verbatim. A GUI host
/// renders them; the shipped implementation logs them.
pub trait InfoPanel {
    /// Present one body.
    fn show(&mut self, body: &BodyRecord);
}

/// Logs the panel fields through `tracing`.
#[derive(Debug, Default)]
pub struct TracePanel;

impl InfoPanel for TracePanel {
    fn show(&mut self, body: &BodyRecord) {
        info!("{}", body.name);
        info!("{}", body.description);
        info!("Distance from Sun: {}", body.distance_from_sun);
        info!("Diameter: {}", body.diameter);
        info!("Day Length: {}", body.day_length);
        info!("Year Length: {}", body.year_length);
    }
}

//! Static celestial body catalog.
//!
//! A fixed, ordered table of body records (orbital parameters plus the
//! descriptive text shown by the info panel), loaded once at startup from
//! RON and read-only afterwards. The default table ships embedded in the
//! binary; a file on disk can override it.

mod body;
mod catalog;
mod error;

pub use body::BodyRecord;
pub use catalog::Catalog;
pub use error::CatalogError;

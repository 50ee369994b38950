//! Catalog error types.

/// Errors that can occur when loading or validating the body catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// Failed to read the catalog file from disk.
    #[error("failed to read catalog: {0}")]
    Read(#[source] std::io::Error),

    /// Failed to parse RON content.
    #[error("failed to parse catalog: {0}")]
    Parse(#[source] ron::error::SpannedError),

    /// The parsed table violates a structural invariant.
    #[error("invalid catalog: {0}")]
    Invalid(String),
}

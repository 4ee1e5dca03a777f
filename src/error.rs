// Error types for the download page controller

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PageError {
    /// The document could not be fetched, was not a 200 response, or did not parse.
    #[error("Catalog '{name}' is unavailable")]
    CatalogUnavailable { name: String },

    /// The page has no element with this id. Callers skip the version.
    #[error("Page element '{id}' not found")]
    MissingElement { id: String },

    #[error("No display label for version '{version}'")]
    UnknownVersionLabel { version: String },

    #[error("Configuration error: {0}")]
    Config(String),
}

//! Crate-wide error types

use thiserror::Error;
use serde_json::Error as SerdeJsonError;
use std::io::Error as IoError;

#[derive(Error, Debug)]
pub enum OsmKeysError {
    // Catalog errors
    #[error("Catalog load failed: {0}")]
    CatalogLoadError(String),
    #[error("Catalog parse failed: {0}")]
    CatalogParseError(String),
    #[error("Catalog entry invalid: {0}")]
    CatalogEntryError(String),

    // Resolver errors
    #[error("Resolver not initialized")]
    ResolverNotInitialized,

    // Serialization errors
    #[error("JSON parse failed: {0}")]
    JsonError(#[from] SerdeJsonError),

    // Base errors
    #[error("IO operation failed: {0}")]
    IoError(#[from] IoError),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

// Crate-wide Result type
pub type KeysResult<T> = Result<T, OsmKeysError>;

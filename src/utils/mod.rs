//! Utility module: shared helpers
pub mod url_check;

// Export core interfaces
pub use self::url_check::looks_like_reference_url;

//! Catalog module: category table loading and data model
pub mod model;
pub mod loader;

// Export core interfaces
pub use self::model::{Catalog, CategoryEntry, Resolution};
pub use self::loader::CatalogLoader;

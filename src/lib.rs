//! osmkeys - conventional OSM tag keys for real-world object categories

// Export crate-wide error types
pub use self::error::{OsmKeysError, KeysResult};

// Export configuration module
pub use self::config::{GlobalConfig, ConfigManager, CustomConfigBuilder};

// Export catalog core interfaces
pub use self::catalog::{Catalog, CategoryEntry, Resolution, CatalogLoader};

// Export resolver core interfaces
pub use self::resolver::{
    KeyResolver,
    init_osm_keys,
    init_osm_keys_with_config,
    resolve_osm_keys,
    osm_category_names,
};

// Declare all submodules
pub mod config;
pub mod error;
pub mod catalog;
pub mod resolver;
pub mod utils;

//! Catalog load manager
//! Builds the category table from the embedded asset or an external JSON file

use std::collections::HashMap;
use std::fs;
use tracing::{debug, warn};

use super::model::{Catalog, CategoryEntry};
use crate::config::GlobalConfig;
use crate::error::{KeysResult, OsmKeysError};
use crate::utils::url_check;

/// Default catalog shipped with the crate. Raw shape: category name mapped to
/// a flat list of keys whose last element is the reference URL.
const EMBEDDED_CATALOG: &str = include_str!("../../data/osm_object_keys.json");

/// Catalog load manager
pub struct CatalogLoader;

impl CatalogLoader {
    /// Load the catalog (external file if configured, embedded asset otherwise)
    pub fn load(config: &GlobalConfig) -> KeysResult<Catalog> {
        match &config.catalog_path {
            Some(path) => {
                debug!("loading external catalog from {}", path.display());
                let raw = fs::read_to_string(path).map_err(|e| {
                    OsmKeysError::CatalogLoadError(format!(
                        "could not read catalog file {}: {}",
                        path.display(),
                        e
                    ))
                })?;
                Self::parse(&raw)
            }
            None => {
                debug!("loading embedded catalog");
                Self::parse(EMBEDDED_CATALOG)
            }
        }
    }

    /// Parse a raw JSON table and split the trailing reference URL off each
    /// key list
    pub fn parse(raw: &str) -> KeysResult<Catalog> {
        let table: HashMap<String, Vec<String>> = serde_json::from_str(raw)
            .map_err(|e| OsmKeysError::CatalogParseError(format!("invalid catalog JSON: {e}")))?;

        let mut categories = HashMap::with_capacity(table.len());
        for (name, mut list) in table {
            let Some(reference_url) = list.pop() else {
                return Err(OsmKeysError::CatalogEntryError(format!(
                    "category \"{name}\" has an empty key list"
                )));
            };
            if list.is_empty() {
                return Err(OsmKeysError::CatalogEntryError(format!(
                    "category \"{name}\" lists a reference URL but no keys"
                )));
            }
            // Upstream data contains one scheme-less wiki URL, so an odd
            // shape is only worth a warning.
            if !url_check::looks_like_reference_url(&reference_url) {
                warn!("category \"{name}\" has an odd-looking reference URL: {reference_url}");
            }
            categories.insert(
                name,
                CategoryEntry {
                    keys: list,
                    reference_url,
                },
            );
        }

        debug!("catalog loaded, {} categories", categories.len());
        Ok(Catalog { categories })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigManager;

    #[test]
    fn test_embedded_catalog_loads() {
        let catalog = CatalogLoader::load(&ConfigManager::get_default()).unwrap();
        assert_eq!(catalog.len(), 63);

        let forest = catalog.get("Forest").unwrap();
        assert_eq!(
            forest.keys,
            vec!["name", "name:en", "natural", "leaf_type", "leaf_cycle", "crop"]
        );
        assert_eq!(
            forest.reference_url,
            "http://wiki.openstreetmap.org/wiki/Tag:landuse%3Dforest"
        );
    }

    #[test]
    fn test_embedded_catalog_invariants() {
        // Every entry keeps at least one key after the URL split
        let catalog = CatalogLoader::load(&ConfigManager::get_default()).unwrap();
        for (name, entry) in &catalog.categories {
            assert!(!entry.keys.is_empty(), "category {name} has no keys");
            assert!(
                entry.reference_url.contains("wiki.openstreetmap.org"),
                "category {name} has an unexpected reference URL"
            );
        }
    }

    #[test]
    fn test_parse_rejects_invalid_json() {
        let result = CatalogLoader::parse("{not json");
        assert!(matches!(result, Err(OsmKeysError::CatalogParseError(_))));
    }

    #[test]
    fn test_parse_rejects_empty_entry() {
        let result = CatalogLoader::parse(r#"{"Ghost town": []}"#);
        assert!(matches!(result, Err(OsmKeysError::CatalogEntryError(_))));
    }

    #[test]
    fn test_parse_rejects_url_only_entry() {
        // A single element would leave a URL with no keys
        let result = CatalogLoader::parse(r#"{"Ghost town": ["http://example.org"]}"#);
        assert!(matches!(result, Err(OsmKeysError::CatalogEntryError(_))));
    }

    #[test]
    fn test_external_catalog_override() {
        let path = std::env::temp_dir().join("osmkeys_test_catalog_override.json");
        fs::write(
            &path,
            r#"{"Lighthouse": ["name", "man_made", "http://wiki.openstreetmap.org/wiki/Tag:man_made%3Dlighthouse"]}"#,
        )
        .unwrap();

        let config = ConfigManager::custom().catalog_path(path.clone()).build();
        let catalog = CatalogLoader::load(&config).unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(catalog.len(), 1);
        let entry = catalog.get("Lighthouse").unwrap();
        assert_eq!(entry.keys, vec!["name", "man_made"]);
    }

    #[test]
    fn test_missing_external_catalog_is_an_error() {
        let config = ConfigManager::custom()
            .catalog_path(std::env::temp_dir().join("osmkeys_does_not_exist.json"))
            .build();
        assert!(matches!(
            CatalogLoader::load(&config),
            Err(OsmKeysError::CatalogLoadError(_))
        ));
    }
}

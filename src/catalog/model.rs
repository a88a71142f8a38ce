//! Catalog data model
//! Pure data holders, no business logic, serializable for external catalogs

use std::collections::HashMap;
use std::fmt;
use serde::{Deserialize, Serialize};

/// Tag keys conventionally used for one object category, plus the OSM wiki
/// page documenting the category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryEntry {
    /// Keys in declared order. Upstream lists a few keys twice; duplicates
    /// are kept here and collapsed during resolution.
    pub keys: Vec<String>,
    pub reference_url: String,
}

/// The full category table, keyed by exact, case-sensitive category name.
/// Built once at startup and never mutated afterwards.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    pub categories: HashMap<String, CategoryEntry>,
}

impl Catalog {
    /// Look up a category by exact name
    pub fn get(&self, name: &str) -> Option<&CategoryEntry> {
        self.categories.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.categories.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// All category names, sorted. This is what dropdown-style callers list
    /// and what strict callers pre-validate their input against.
    pub fn category_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.categories.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

/// Outcome of a category-name resolution
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Resolution {
    /// Deduplicated, lexicographically sorted union of keys across all
    /// matched categories
    pub keys: Vec<String>,
    /// One wiki page per matched category, in request order, duplicates
    /// preserved. Absent when `valid` is false.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_urls: Option<Vec<String>>,
    pub valid: bool,
    pub message: String,
}

impl Resolution {
    /// No category names supplied at all
    pub(crate) fn empty_query() -> Self {
        Self {
            keys: Vec::new(),
            reference_urls: None,
            valid: false,
            message: "Supply one or more OSM object names to resolve.".to_string(),
        }
    }

    /// None of the supplied names exist in the catalog
    pub(crate) fn no_match() -> Self {
        Self {
            keys: Vec::new(),
            reference_urls: None,
            valid: false,
            message: "Supplied OSM object names do not exist in the catalog.\n\
                      Try assembling the key list manually by looking at:\n\n\
                      http://taginfo.openstreetmap.org/keys"
                .to_string(),
        }
    }

    /// Successful resolution, message echoes the requested names
    pub(crate) fn resolved(keys: Vec<String>, reference_urls: Vec<String>, names: &[&str]) -> Self {
        Self {
            keys,
            reference_urls: Some(reference_urls),
            valid: true,
            message: format!("OSM keys successfully resolved for: {}", names.join(", ")),
        }
    }
}

// ======== Display for Resolution (used for CLI output) ========
impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.valid {
            return write!(f, "{}", self.message);
        }
        write!(f, "{}", self.keys.join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_catalog() -> Catalog {
        let mut categories = HashMap::new();
        categories.insert(
            "Garden".to_string(),
            CategoryEntry {
                keys: vec!["name".to_string(), "leisure".to_string()],
                reference_url: "http://wiki.openstreetmap.org/wiki/Tag:leisure%3Dgarden".to_string(),
            },
        );
        categories.insert(
            "Park".to_string(),
            CategoryEntry {
                keys: vec!["name".to_string(), "boundary".to_string()],
                reference_url: "http://wiki.openstreetmap.org/wiki/Tag:leisure%3Dpark".to_string(),
            },
        );
        Catalog { categories }
    }

    #[test]
    fn test_catalog_lookup_is_case_sensitive() {
        let catalog = sample_catalog();
        assert!(catalog.contains("Garden"));
        assert!(!catalog.contains("garden"));
        assert!(catalog.get("GARDEN").is_none());
    }

    #[test]
    fn test_category_names_are_sorted() {
        let catalog = sample_catalog();
        assert_eq!(catalog.category_names(), vec!["Garden", "Park"]);
    }

    #[test]
    fn test_resolution_display() {
        let resolution = Resolution::resolved(
            vec!["leisure".to_string(), "name".to_string()],
            vec!["http://example.org".to_string()],
            &["Garden"],
        );
        assert_eq!(resolution.to_string(), "leisure\nname");

        let empty = Resolution::empty_query();
        assert_eq!(empty.to_string(), empty.message);
    }

    #[test]
    fn test_resolution_json_omits_absent_urls() {
        // Failed resolutions serialize without a reference_urls field
        let json = serde_json::to_string(&Resolution::no_match()).unwrap();
        assert!(!json.contains("reference_urls"));

        let ok = Resolution::resolved(vec!["name".to_string()], vec![], &[]);
        let json = serde_json::to_string(&ok).unwrap();
        assert!(json.contains("reference_urls"));
    }
}

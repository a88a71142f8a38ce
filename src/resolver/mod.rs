//! Resolver module: category-name resolution core logic
pub mod global;
pub mod resolver;

// Export core interfaces
pub use self::global::{init_osm_keys, init_osm_keys_with_config};
pub use self::resolver::{KeyResolver, resolve_osm_keys, osm_category_names};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_global_resolver_roundtrip() {
        // Repeated initialization is a no-op
        init_osm_keys().unwrap();
        init_osm_keys().unwrap();

        let resolution = resolve_osm_keys(&["Forest"]).unwrap();
        assert!(resolution.valid);

        let names = osm_category_names().unwrap();
        assert_eq!(names.len(), 63);
        assert!(names.contains(&"Forest".to_string()));
    }
}

//! Resolver core: merges the tag keys of the requested categories
use std::sync::Arc;

use tracing::debug;

use crate::catalog::{Catalog, CatalogLoader};
use crate::catalog::model::Resolution;
use crate::config::GlobalConfig;
use crate::error::KeysResult;

/// Category-name resolver
#[derive(Debug, Clone)]
pub struct KeyResolver {
    catalog: Arc<Catalog>,
    config: GlobalConfig,
}

impl KeyResolver {
    /// Create a resolver (loads the catalog per configuration)
    pub fn new(config: GlobalConfig) -> KeysResult<Self> {
        let catalog = CatalogLoader::load(&config)?;

        Ok(Self {
            catalog: Arc::new(catalog),
            config,
        })
    }

    /// Create a resolver over an already-built catalog
    pub fn with_catalog(catalog: Catalog, config: GlobalConfig) -> Self {
        Self {
            catalog: Arc::new(catalog),
            config,
        }
    }

    /// The catalog this resolver reads from
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Core resolution interface.
    ///
    /// Looks every requested name up by exact match, merges the keys of all
    /// matched categories into a deduplicated, sorted list, and collects one
    /// reference URL per match in request order. Unknown names inside a
    /// non-empty batch are skipped without a report; both failure kinds
    /// (empty query, nothing matched) are returned in-band, never as `Err`.
    pub fn resolve<S: AsRef<str>>(&self, names: &[S]) -> Resolution {
        // 1. Empty query: nothing to look up
        if names.is_empty() {
            return Resolution::empty_query();
        }

        // 2. Accumulate keys and reference URLs over matched categories,
        //    in request order
        let mut merged_keys: Vec<&str> = Vec::new();
        let mut reference_urls: Vec<String> = Vec::new();
        for name in names {
            if let Some(entry) = self.catalog.get(name.as_ref()) {
                merged_keys.extend(entry.keys.iter().map(String::as_str));
                reference_urls.push(entry.reference_url.clone());
            }
        }

        // 3. Deduplicate and sort lexicographically
        merged_keys.sort_unstable();
        merged_keys.dedup();

        // 4. No supplied name matched any category
        if merged_keys.is_empty() {
            return Resolution::no_match();
        }

        let keys: Vec<String> = merged_keys.into_iter().map(str::to_owned).collect();
        let requested: Vec<&str> = names.iter().map(AsRef::as_ref).collect();
        if self.config.verbose {
            debug!("resolved {} keys for: {}", keys.len(), requested.join(", "));
        }

        Resolution::resolved(keys, reference_urls, &requested)
    }

    /// Names absent from the catalog. `resolve` skips them silently, so
    /// callers that must not swallow typos check this first.
    pub fn unknown_names<S: AsRef<str>>(&self, names: &[S]) -> Vec<String> {
        names
            .iter()
            .map(AsRef::as_ref)
            .filter(|name| !self.catalog.contains(name))
            .map(str::to_owned)
            .collect()
    }
}

// Simplified interfaces over the global resolver

pub fn resolve_osm_keys<S: AsRef<str>>(names: &[S]) -> KeysResult<Resolution> {
    let resolver = super::global::global_resolver()?;
    Ok(resolver.resolve(names))
}

pub fn osm_category_names() -> KeysResult<Vec<String>> {
    let resolver = super::global::global_resolver()?;
    Ok(resolver
        .catalog()
        .category_names()
        .into_iter()
        .map(str::to_owned)
        .collect())
}

//! Global resolver singleton management
use once_cell::sync::OnceCell;

use super::resolver::KeyResolver;
use crate::error::{KeysResult, OsmKeysError};
use crate::config::{ConfigManager, GlobalConfig};

/// Global resolver instance
static GLOBAL_RESOLVER: OnceCell<KeyResolver> = OnceCell::new();

/// Initialize the global resolver (default configuration)
pub fn init_osm_keys() -> KeysResult<()> {
    init_osm_keys_with_config(ConfigManager::get_default())
}

/// Initialize the global resolver with a custom configuration
pub fn init_osm_keys_with_config(config: GlobalConfig) -> KeysResult<()> {
    if GLOBAL_RESOLVER.get().is_some() {
        return Ok(());
    }

    let resolver = KeyResolver::new(config)?;
    // A racing initializer may have won; its instance is kept
    let _ = GLOBAL_RESOLVER.set(resolver);

    Ok(())
}

/// Get the global resolver
pub(crate) fn global_resolver() -> KeysResult<&'static KeyResolver> {
    GLOBAL_RESOLVER
        .get()
        .ok_or(OsmKeysError::ResolverNotInitialized)
}

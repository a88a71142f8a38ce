//! Global configuration, holds all configurable items

use std::path::PathBuf;

/// Global configuration
#[derive(Debug, Clone)]
pub struct GlobalConfig {
    // External catalog file overriding the embedded table
    pub catalog_path: Option<PathBuf>,
    // Verbose resolution logging
    pub verbose: bool,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            catalog_path: None,
            verbose: false,
        }
    }
}

/// Configuration manager (singleton access)
pub struct ConfigManager;

impl ConfigManager {
    /// Get the default configuration
    pub fn get_default() -> GlobalConfig {
        GlobalConfig::default()
    }

    /// Custom configuration
    pub fn custom() -> CustomConfigBuilder {
        CustomConfigBuilder::new()
    }
}

/// Configuration builder (for custom setups)
#[derive(Debug, Clone)]
pub struct CustomConfigBuilder {
    config: GlobalConfig,
}

impl CustomConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: GlobalConfig::default(),
        }
    }

    pub fn catalog_path(mut self, path: PathBuf) -> Self {
        self.config.catalog_path = Some(path);
        self
    }

    pub fn verbose(mut self, verbose: bool) -> Self {
        self.config.verbose = verbose;
        self
    }

    pub fn build(self) -> GlobalConfig {
        self.config
    }
}

impl Default for CustomConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

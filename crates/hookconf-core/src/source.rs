//! Loading a configuration file through the environment provider

use crate::{ConfigurationMapping, EnvironmentProvider, Error, NormalizedPath, Result};
use std::sync::Arc;

/// Loads one configuration file as a sectioned mapping.
#[derive(Debug, Clone)]
pub struct ConfigurationSource {
    env: Arc<dyn EnvironmentProvider>,
}

impl ConfigurationSource {
    pub fn new(env: Arc<dyn EnvironmentProvider>) -> Self {
        Self { env }
    }

    /// Load the file at `path` for configuration `name`.
    ///
    /// # Errors
    ///
    /// [`Error::FileNotFound`] when the provider reports no file at `path`,
    /// otherwise whatever the provider's parser returns.
    pub fn load(&self, path: &NormalizedPath, name: &str) -> Result<ConfigurationMapping> {
        let native = path.to_native();
        if !self.env.file_exists(&native) {
            return Err(Error::FileNotFound {
                name: name.to_string(),
                path: native,
            });
        }

        // Environment tiers are not resolved; one flat file per name
        self.env.parse_config_file(&native, true)
    }
}

//! Registry construction from CLI options

use std::path::{Path, PathBuf};
use std::sync::Arc;

use hookconf_core::{ConfigurationRegistry, EnvironmentProvider, SystemEnvironment};

use crate::error::{CliError, Result};

/// Directory name used under the platform configuration directory.
pub const APP_DIR: &str = "hookconf";

/// Pick the configuration root: the explicit one, or `<config dir>/hookconf`.
pub fn resolve_root(explicit: Option<&Path>) -> Result<PathBuf> {
    let root = match explicit {
        Some(path) => path.to_path_buf(),
        None => dirs::config_dir()
            .map(|dir| dir.join(APP_DIR))
            .ok_or_else(|| CliError::user("No --root given and no platform config directory found"))?,
    };

    // Canonical roots keep cache keys stable; a missing root is reported on load
    Ok(dunce::canonicalize(&root).unwrap_or(root))
}

/// Registry configured at `root`, talking to the real environment.
pub fn registry(root: &Path) -> Result<Arc<ConfigurationRegistry>> {
    registry_with(root, Arc::new(SystemEnvironment::new()))
}

pub fn registry_with(root: &Path, env: Arc<dyn EnvironmentProvider>) -> Result<Arc<ConfigurationRegistry>> {
    let registry = ConfigurationRegistry::new(env);
    registry.configure(root)?;
    tracing::debug!(root = %root.display(), "Using configuration root");
    Ok(Arc::new(registry))
}

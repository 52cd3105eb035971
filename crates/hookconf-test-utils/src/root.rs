//! [`ConfigRoot`]: a temporary configuration root directory.

use hookconf_core::{ConfigurationRegistry, SystemEnvironment};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tempfile::TempDir;

/// A temporary directory holding `<name>.conf` files.
///
/// # Example
///
/// ```rust
/// use hookconf_test_utils::ConfigRoot;
///
/// let root = ConfigRoot::new();
/// root.write("deploy", "[deploy]\nhosts = a, b\n");
/// root.assert_conf_exists("deploy");
/// ```
pub struct ConfigRoot {
    temp_dir: TempDir,
}

impl Default for ConfigRoot {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigRoot {
    /// Create an empty temporary root.
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
        }
    }

    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Path of `<root>/<name>.conf`, whether or not it exists.
    pub fn conf_path(&self, name: &str) -> PathBuf {
        self.path().join(format!("{name}.conf"))
    }

    /// Write `<root>/<name>.conf` with `content`.
    ///
    /// # Panics
    /// Panics if the file cannot be written.
    pub fn write(&self, name: &str, content: &str) -> PathBuf {
        let path = self.conf_path(name);
        fs::write(&path, content)
            .unwrap_or_else(|e| panic!("ConfigRoot::write: failed to write {}: {e}", path.display()));
        path
    }

    /// Registry configured at this root, reading through [`SystemEnvironment`].
    pub fn registry(&self) -> Arc<ConfigurationRegistry> {
        Arc::new(ConfigurationRegistry::with_root(
            Arc::new(SystemEnvironment::new()),
            self.path(),
        ))
    }

    /// # Panics
    /// Panics if `<root>/<name>.conf` does not exist.
    pub fn assert_conf_exists(&self, name: &str) {
        let path = self.conf_path(name);
        assert!(path.exists(), "Expected config file to exist: {}", path.display());
    }
}

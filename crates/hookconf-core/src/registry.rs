//! Process-level configuration root and cache.
//!
//! A [`ConfigurationRegistry`] is built once at startup and shared through an
//! `Arc` with every [`Configuration`](crate::Configuration). It owns:
//!
//! - the root directory, which can be set exactly once
//! - one parsed mapping per resolved file path, loaded lazily and never
//!   evicted
//! - the effective user name, looked up at most once
//!
//! Cached mappings are handed out as [`SharedMapping`] so that a secret
//! written through one view is visible to every other view on the same file.

use crate::{
    ConfigurationMapping, ConfigurationSource, EnvironmentProvider, Error, NormalizedPath, Result,
};
use parking_lot::{Mutex, MutexGuard, RwLock};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// A cached mapping shared by every view on the same file path.
pub type SharedMapping = Arc<RwLock<ConfigurationMapping>>;

#[derive(Debug)]
pub struct ConfigurationRegistry {
    env: Arc<dyn EnvironmentProvider>,
    source: ConfigurationSource,
    root: RwLock<Option<NormalizedPath>>,
    cache: Mutex<HashMap<NormalizedPath, SharedMapping>>,
    username: Mutex<Option<String>>,
    secret_prompt: Mutex<()>,
}

impl ConfigurationRegistry {
    /// Create an unconfigured registry using `env` for all outside access.
    pub fn new(env: Arc<dyn EnvironmentProvider>) -> Self {
        Self {
            source: ConfigurationSource::new(Arc::clone(&env)),
            env,
            root: RwLock::new(None),
            cache: Mutex::new(HashMap::new()),
            username: Mutex::new(None),
            secret_prompt: Mutex::new(()),
        }
    }

    /// Create a registry already pointed at `root`.
    pub fn with_root(env: Arc<dyn EnvironmentProvider>, root: impl Into<NormalizedPath>) -> Self {
        Self {
            root: RwLock::new(Some(root.into())),
            ..Self::new(env)
        }
    }

    /// Set the root directory for all configuration files.
    ///
    /// # Errors
    ///
    /// [`Error::AlreadyConfigured`] if a root is already set. Reconfiguring
    /// mid-process is refused rather than silently redirecting later loads.
    pub fn configure(&self, path: impl Into<NormalizedPath>) -> Result<()> {
        let mut root = self.root.write();
        if let Some(current) = root.as_ref() {
            warn!(current = %current, "Refusing to reconfigure configuration root");
            return Err(Error::AlreadyConfigured {
                current: current.to_string(),
            });
        }

        let path = path.into();
        debug!(root = %path, "Configuration root set");
        *root = Some(path);
        Ok(())
    }

    pub fn root(&self) -> Option<NormalizedPath> {
        self.root.read().clone()
    }

    pub fn is_configured(&self) -> bool {
        self.root.read().is_some()
    }

    /// Path of the file backing configuration `name`: `<root>/<name>.conf`.
    pub fn resolve(&self, name: &str) -> Result<NormalizedPath> {
        self.root
            .read()
            .as_ref()
            .map(|root| root.config_file(name))
            .ok_or(Error::NotConfigured)
    }

    /// Return the mapping for configuration `name`, loading it on first use.
    ///
    /// # Errors
    ///
    /// [`Error::NotConfigured`] without a root, [`Error::FileNotFound`] when
    /// the file is missing, or any parse failure from the provider. Failed
    /// loads are not cached.
    pub fn resolve_and_load(&self, name: &str) -> Result<SharedMapping> {
        let path = self.resolve(name)?;

        let mut cache = self.cache.lock();
        if let Some(mapping) = cache.get(&path) {
            debug!(name, path = %path, "Configuration cache hit");
            return Ok(Arc::clone(mapping));
        }

        let mapping = self.source.load(&path, name)?;
        info!(name, path = %path, sections = mapping.section_names().count(), "Loaded configuration");

        let shared = Arc::new(RwLock::new(mapping));
        cache.insert(path, Arc::clone(&shared));
        Ok(shared)
    }

    /// Paths currently held in the cache, sorted.
    pub fn cached_paths(&self) -> Vec<NormalizedPath> {
        let mut paths: Vec<_> = self.cache.lock().keys().cloned().collect();
        paths.sort();
        paths
    }

    /// Name of the effective user, looked up once per registry.
    pub fn effective_username(&self) -> Result<String> {
        let mut cached = self.username.lock();
        if let Some(name) = cached.as_ref() {
            return Ok(name.clone());
        }

        let name = self.env.effective_username()?;
        debug!(user = %name, "Resolved effective user");
        *cached = Some(name.clone());
        Ok(name)
    }

    /// Prompt for a secret through the environment provider.
    pub fn prompt_for_secret(&self, prompt: &str) -> Result<String> {
        self.env.prompt_for_secret(prompt)
    }

    /// Exclusive guard held from the cache check through the write-back of
    /// a secret, so one prompt answers every concurrent caller.
    pub(crate) fn lock_secret_prompt(&self) -> MutexGuard<'_, ()> {
        self.secret_prompt.lock()
    }

    /// Forget the root, every cached mapping and the cached user name.
    ///
    /// Views created before the reset keep their own handle on the old
    /// mapping.
    pub fn reset(&self) {
        *self.root.write() = None;
        self.cache.lock().clear();
        *self.username.lock() = None;
        debug!("Configuration registry reset");
    }
}

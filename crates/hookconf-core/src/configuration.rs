//! Typed views over cached configuration files.
//!
//! Every configuration domain is a type implementing [`ConfigDomain`]. Loading
//! a [`Configuration<D>`] derives the file name from the domain's identity
//! (see [`naming`](crate::naming)), pulls the mapping from the registry cache
//! and exposes typed getters over it.
//!
//! ```rust,no_run
//! use hookconf_core::{ConfigDomain, Configuration, ConfigurationRegistry, SystemEnvironment};
//! use std::sync::Arc;
//!
//! struct DeployConfig;
//!
//! impl ConfigDomain for DeployConfig {
//!     fn readme() -> &'static str {
//!         "[deploy]\nhosts = \"a.example, b.example\""
//!     }
//! }
//!
//! let registry = Arc::new(ConfigurationRegistry::new(Arc::new(SystemEnvironment::new())));
//! registry.configure("/etc/hooks").unwrap();
//!
//! // Reads /etc/hooks/deploy.conf
//! let deploy = Configuration::<DeployConfig>::load(&registry).unwrap();
//! let hosts = deploy.get_array("deploy", "hosts", None, true).unwrap();
//! ```

use crate::coercion::{self, Numeric};
use crate::registry::SharedMapping;
use crate::{
    ConfigurationMapping, ConfigurationRegistry, Error, NormalizedPath, Optional, Result, naming,
};
use std::fmt;
use std::marker::PhantomData;
use std::ops::Deref;
use std::sync::Arc;
use tracing::debug;

/// A category of settings backed by one `<name>.conf` file.
pub trait ConfigDomain {
    /// Identity string the configuration name is derived from.
    ///
    /// Defaults to the fully qualified type name, so `GitHookSystemConfig`
    /// reads `githooksystem.conf`.
    fn identity() -> &'static str {
        std::any::type_name::<Self>()
    }

    /// Sample of how the domain's file is expected to look.
    fn readme() -> &'static str;
}

/// Untyped view over one cached configuration file.
///
/// Holds a handle on the registry's shared mapping rather than a copy, so
/// secrets cached through any view are visible to all of them.
#[derive(Clone)]
pub struct ConfigurationView {
    name: String,
    path: NormalizedPath,
    mapping: SharedMapping,
    registry: Arc<ConfigurationRegistry>,
}

impl ConfigurationView {
    /// Open configuration `name` through the registry cache.
    pub fn open(registry: &Arc<ConfigurationRegistry>, name: &str) -> Result<Self> {
        let path = registry.resolve(name)?;
        let mapping = registry.resolve_and_load(name)?;
        Ok(Self {
            name: name.to_string(),
            path,
            mapping,
            registry: Arc::clone(registry),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn path(&self) -> &NormalizedPath {
        &self.path
    }

    /// Copy of the current mapping, including cached secrets.
    pub fn snapshot(&self) -> ConfigurationMapping {
        self.mapping.read().clone()
    }

    /// Look up `section.key`.
    ///
    /// A stored value is returned verbatim. When it is missing:
    ///
    /// | `default` | `required` | result |
    /// |-----------|------------|--------|
    /// | `Some(d)` | any        | `Present(d)` |
    /// | `None`    | `false`    | `Absent` |
    /// | `None`    | `true`     | [`Error::MissingValue`] |
    pub fn get_value(
        &self,
        section: &str,
        key: &str,
        default: Option<&str>,
        required: bool,
    ) -> Result<Optional<String>> {
        match self.lookup(section, key) {
            Some(value) => Ok(Optional::of(value)),
            None => fallback(section, key, default.map(str::to_string), required),
        }
    }

    /// Shorthand for a required value without a default.
    pub fn require(&self, section: &str, key: &str) -> Result<String> {
        self.lookup(section, key).ok_or_else(|| missing(section, key))
    }

    /// Numeric lookup: all-digit values become integers, other
    /// numeric-shaped values floats.
    ///
    /// # Errors
    ///
    /// [`Error::TypeConversion`] when a stored value is not numeric, plus the
    /// missing-value rules of [`get_value`](Self::get_value).
    pub fn get_numeric(
        &self,
        section: &str,
        key: &str,
        default: Option<Numeric>,
        required: bool,
    ) -> Result<Optional<Numeric>> {
        match self.lookup(section, key) {
            Some(raw) => coercion::to_numeric(&raw)
                .map(Optional::of)
                .ok_or_else(|| Error::TypeConversion {
                    section: section.to_string(),
                    key: key.to_string(),
                    value: raw,
                }),
            None => fallback(section, key, default, required),
        }
    }

    /// Comma-separated list; see [`coercion::to_array`] for the split rule.
    pub fn get_array(
        &self,
        section: &str,
        key: &str,
        default: Option<Vec<String>>,
        required: bool,
    ) -> Result<Optional<Vec<String>>> {
        match self.lookup(section, key) {
            Some(raw) => Ok(Optional::of(coercion::to_array(&raw))),
            None => fallback(section, key, default, required),
        }
    }

    /// `true` only when the stored value is `"true"` or `"1"`.
    ///
    /// A missing, non-required value without a default reads as `false`.
    pub fn get_bool(
        &self,
        section: &str,
        key: &str,
        default: Option<bool>,
        required: bool,
    ) -> Result<bool> {
        match self.lookup(section, key) {
            Some(raw) => Ok(coercion::to_bool(&raw)),
            None => Ok(fallback(section, key, default, required)?.get_or_else(false)),
        }
    }

    pub fn current_username(&self) -> Result<String> {
        self.registry.effective_username()
    }

    /// Return the secret stored under `section.key`, prompting for it once.
    ///
    /// The answer is written into the shared in-memory mapping only; it is
    /// never persisted. An empty cached value counts as not yet prompted.
    pub fn get_secret(&self, section: &str, key: &str, prompt: &str) -> Result<String> {
        if let Some(cached) = self.cached_secret(section, key) {
            return Ok(cached);
        }

        let _prompting = self.registry.lock_secret_prompt();
        // Another caller may have answered while we waited
        if let Some(cached) = self.cached_secret(section, key) {
            return Ok(cached);
        }

        debug!(name = %self.name, section, key, "Prompting for secret");
        let secret = self.registry.prompt_for_secret(prompt)?;
        self.mapping.write().set(section, key, secret.clone());
        Ok(secret)
    }

    fn cached_secret(&self, section: &str, key: &str) -> Option<String> {
        self.lookup(section, key).filter(|value| !value.is_empty())
    }

    fn lookup(&self, section: &str, key: &str) -> Option<String> {
        self.mapping.read().get(section, key).map(str::to_string)
    }
}

impl fmt::Debug for ConfigurationView {
    // Mapping contents are left out; they may hold secrets
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConfigurationView")
            .field("name", &self.name)
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}

/// Typed view for configuration domain `D`.
pub struct Configuration<D: ConfigDomain> {
    view: ConfigurationView,
    _domain: PhantomData<fn() -> D>,
}

impl<D: ConfigDomain> Configuration<D> {
    /// Load the file for `D`, sharing the registry's cached mapping.
    ///
    /// # Errors
    ///
    /// [`Error::NotConfigured`] before [`ConfigurationRegistry::configure`],
    /// [`Error::FileNotFound`] when `<root>/<name>.conf` does not exist.
    pub fn load(registry: &Arc<ConfigurationRegistry>) -> Result<Self> {
        let name = Self::config_name();
        let view = ConfigurationView::open(registry, &name)?;
        Ok(Self {
            view,
            _domain: PhantomData,
        })
    }

    /// Name derived from `D`'s identity.
    pub fn config_name() -> String {
        naming::config_name(D::identity())
    }

    pub fn readme() -> &'static str {
        D::readme()
    }
}

impl<D: ConfigDomain> Deref for Configuration<D> {
    type Target = ConfigurationView;

    fn deref(&self) -> &ConfigurationView {
        &self.view
    }
}

impl<D: ConfigDomain> Clone for Configuration<D> {
    fn clone(&self) -> Self {
        Self {
            view: self.view.clone(),
            _domain: PhantomData,
        }
    }
}

impl<D: ConfigDomain> fmt::Debug for Configuration<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Configuration")
            .field("domain", &D::identity())
            .field("view", &self.view)
            .finish()
    }
}

fn fallback<T>(section: &str, key: &str, default: Option<T>, required: bool) -> Result<Optional<T>> {
    match default {
        Some(value) => Ok(Optional::of(value)),
        None if required => Err(missing(section, key)),
        None => Ok(Optional::absent()),
    }
}

fn missing(section: &str, key: &str) -> Error {
    Error::MissingValue {
        section: section.to_string(),
        key: key.to_string(),
    }
}

//! Typed, cached configuration resolution for git-hook tooling.
//!
//! Configuration lives in one INI file per domain under a single root
//! directory. A [`ConfigurationRegistry`] holds that root (settable once) and
//! caches every parsed file; [`Configuration<D>`] gives a typed view over the
//! file for domain `D`, and [`Optional`] expresses values that may be absent.

pub mod coercion;
pub mod configuration;
pub mod domains;
pub mod environment;
pub mod error;
pub mod ini;
pub mod mapping;
pub mod naming;
pub mod optional;
pub mod path;
pub mod registry;
pub mod source;

pub use coercion::Numeric;
pub use configuration::{ConfigDomain, Configuration, ConfigurationView};
pub use environment::{EnvironmentProvider, SystemEnvironment};
pub use error::{Error, Result};
pub use mapping::ConfigurationMapping;
pub use optional::{Nullable, Optional};
pub use path::NormalizedPath;
pub use registry::{ConfigurationRegistry, SharedMapping};
pub use source::ConfigurationSource;

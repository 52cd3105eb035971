//! Shared test utilities for the hookconf workspace.
//!
//! Dev-dependency only, never published.
//!
//! # Modules
//!
//! - [`env`] — [`FakeEnvironment`], an in-memory [`EnvironmentProvider`]
//!   that counts the calls made against it
//! - [`root`] — [`ConfigRoot`], a temporary configuration root on disk
//!
//! [`EnvironmentProvider`]: hookconf_core::EnvironmentProvider

pub mod env;
pub mod root;

pub use env::{FakeEnvironment, registry_with_root};
pub use root::ConfigRoot;

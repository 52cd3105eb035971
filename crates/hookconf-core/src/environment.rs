//! Environment capability injected into the registry.
//!
//! Everything the configuration layer needs from the outside world goes
//! through [`EnvironmentProvider`]: file existence, parsing, the effective
//! user name, and interactive secret input. Tests substitute an in-memory
//! implementation.

use crate::{ConfigurationMapping, Error, Result, ini};
use std::fmt::Debug;
use std::fs;
use std::path::Path;

/// Narrow interface to the host environment.
pub trait EnvironmentProvider: Debug + Send + Sync {
    /// Whether a configuration file exists at `path`.
    fn file_exists(&self, path: &Path) -> bool;

    /// Parse the configuration file at `path`.
    fn parse_config_file(&self, path: &Path, with_sections: bool) -> Result<ConfigurationMapping>;

    /// Name of the user the process runs as.
    fn effective_username(&self) -> Result<String>;

    /// Read a secret from the user without echoing it.
    fn prompt_for_secret(&self, prompt: &str) -> Result<String>;
}

/// Provider backed by the real filesystem, OS user database and terminal.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemEnvironment;

impl SystemEnvironment {
    pub fn new() -> Self {
        Self
    }
}

impl EnvironmentProvider for SystemEnvironment {
    fn file_exists(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn parse_config_file(&self, path: &Path, with_sections: bool) -> Result<ConfigurationMapping> {
        let content = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        ini::parse(&content, path, with_sections)
    }

    #[cfg(unix)]
    fn effective_username(&self) -> Result<String> {
        use nix::unistd::{User, geteuid};

        let uid = geteuid();
        match User::from_uid(uid) {
            Ok(Some(user)) => Ok(user.name),
            Ok(None) => Err(Error::environment(format!("no user entry for uid {uid}"))),
            Err(e) => Err(Error::environment(format!("user lookup failed: {e}"))),
        }
    }

    #[cfg(not(unix))]
    fn effective_username(&self) -> Result<String> {
        std::env::var("USERNAME")
            .map_err(|_| Error::environment("USERNAME is not set"))
    }

    fn prompt_for_secret(&self, prompt: &str) -> Result<String> {
        dialoguer::Password::new()
            .with_prompt(prompt)
            .allow_empty_password(true)
            .interact()
            .map_err(|e| Error::environment(format!("secret prompt failed: {e}")))
    }
}

//! Settings consumed by the server-side git hooks

use crate::{ConfigDomain, Configuration, ConfigurationRegistry, Optional, Result};
use std::sync::Arc;

/// Git-hook system settings, read from `githooksystem.conf`.
#[derive(Debug, Clone)]
pub struct GitHookSystemConfig {
    config: Configuration<Self>,
}

impl ConfigDomain for GitHookSystemConfig {
    fn readme() -> &'static str {
        r#"
[freeze]
; Repositories refusing pushes; "all" freezes every repository
repo_names = "example.git, other.git"
; Users allowed to push through a freeze
super_users = "alice, bob"

[git]
; Environment variable holding the pushing user's name
env_var_push_user = GITOSIS_USER
"#
    }
}

impl GitHookSystemConfig {
    pub fn load(registry: &Arc<ConfigurationRegistry>) -> Result<Self> {
        Ok(Self {
            config: Configuration::load(registry)?,
        })
    }

    /// Repositories currently frozen; empty when none are.
    pub fn frozen_repo_names(&self) -> Result<Vec<String>> {
        Ok(self
            .config
            .get_array("freeze", "repo_names", Some(Vec::new()), false)?
            .get_or_else(Vec::new()))
    }

    pub fn super_user_names(&self) -> Result<Vec<String>> {
        Ok(self
            .config
            .get_array("freeze", "super_users", Some(Vec::new()), false)?
            .get_or_else(Vec::new()))
    }

    /// Name of the variable carrying the pushing user, if configured.
    pub fn env_var_name_for_push_user(&self) -> Result<Optional<String>> {
        Ok(self
            .config
            .get_value("git", "env_var_push_user", None, false)?
            .map_nullable(|name| Some(name).filter(|n| !n.is_empty())))
    }
}

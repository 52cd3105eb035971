//! Type identity to configuration name derivation.
//!
//! A domain's identity string IS its configuration file name. Given an
//! identity such as `hooks::GitHookSystemConfig` the name is derived by:
//!
//! 1. dropping everything up to the last namespace separator (`::` or `\`)
//! 2. dropping exactly the trailing `Config` suffix, when present
//! 3. dropping trailing underscores (`Jenkins_Config` → `Jenkins`)
//! 4. lowercasing what remains
//!
//! `GitHookSystemConfig` therefore loads `githooksystem.conf`. The suffix is
//! six characters; stripping one more or one fewer is the classic mistake.

/// Conventional suffix removed from domain identities.
pub const CONFIG_SUFFIX: &str = "Config";

/// Derive the configuration name for a domain identity.
pub fn config_name(identity: &str) -> String {
    let base = strip_namespace(identity);
    let base = base.strip_suffix(CONFIG_SUFFIX).unwrap_or(base);
    base.trim_end_matches('_').to_lowercase()
}

fn strip_namespace(identity: &str) -> &str {
    // Generic parameters would otherwise contribute their own `::` segments
    let identity = identity.split('<').next().unwrap_or(identity);

    let after_rust = identity.rsplit("::").next().unwrap_or(identity);
    after_rust.rsplit('\\').next().unwrap_or(after_rust)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_generic_arguments_before_namespace() {
        assert_eq!(config_name("app::CacheConfig<app::Inner>"), "cache");
    }
}

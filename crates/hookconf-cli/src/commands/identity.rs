//! Whoami and secret command implementations

use std::sync::Arc;

use hookconf_core::{ConfigurationRegistry, ConfigurationView};

use crate::error::Result;

/// Name of the effective user.
pub fn run_whoami(registry: &ConfigurationRegistry) -> Result<String> {
    Ok(registry.effective_username()?)
}

/// The secret cached under `section.key`, prompting when it is not known.
pub fn run_secret(
    registry: &Arc<ConfigurationRegistry>,
    name: &str,
    section: &str,
    key: &str,
    prompt: Option<&str>,
) -> Result<String> {
    let view = ConfigurationView::open(registry, name)?;
    let prompt = prompt.map_or_else(|| format!("{section}.{key}"), str::to_string);
    Ok(view.get_secret(section, key, &prompt)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use hookconf_test_utils::FakeEnvironment;
    use hookconf_test_utils::env::registry_with_root;

    #[test]
    fn test_whoami() {
        let env = Arc::new(FakeEnvironment::new().with_username("braynard"));
        let registry = registry_with_root(&env, "/conf");
        assert_eq!(run_whoami(&registry).unwrap(), "braynard");
    }

    #[test]
    fn test_secret_uses_default_prompt() {
        let env = Arc::new(
            FakeEnvironment::new()
                .with_file("/conf/jenkins.conf", "[jenkins]\nhost = ci\n")
                .with_secret("pw"),
        );
        let registry = registry_with_root(&env, "/conf");

        assert_eq!(run_secret(&registry, "jenkins", "jenkins", "password", None).unwrap(), "pw");
        assert_eq!(run_secret(&registry, "jenkins", "jenkins", "password", None).unwrap(), "pw");
        assert_eq!(env.prompts(), vec!["jenkins.password".to_string()]);
    }
}

use hookconf_core::domains::{self, GitHookSystemConfig};
use hookconf_core::{ConfigDomain, Configuration, Optional};
use hookconf_test_utils::FakeEnvironment;
use pretty_assertions::assert_eq;

fn load(content: &str) -> GitHookSystemConfig {
    let registry = FakeEnvironment::new()
        .with_file("/hooks/githooksystem.conf", content)
        .registry("/hooks");
    GitHookSystemConfig::load(&registry).unwrap()
}

#[test]
fn test_file_name_is_derived_from_type() {
    assert_eq!(Configuration::<GitHookSystemConfig>::config_name(), "githooksystem");
}

#[test]
fn test_readme_is_valid_configuration() {
    let config = load(GitHookSystemConfig::readme());

    assert_eq!(config.frozen_repo_names().unwrap(), vec!["example.git", "other.git"]);
    assert_eq!(config.super_user_names().unwrap(), vec!["alice", "bob"]);
    assert_eq!(
        config.env_var_name_for_push_user().unwrap(),
        Optional::of("GITOSIS_USER".to_string())
    );
}

#[test]
fn test_defaults_when_sections_missing() {
    let config = load("");

    assert!(config.frozen_repo_names().unwrap().is_empty());
    assert!(config.super_user_names().unwrap().is_empty());
    assert!(config.env_var_name_for_push_user().unwrap().is_absent());
}

#[test]
fn test_empty_push_user_variable_is_absent() {
    let config = load("[git]\nenv_var_push_user =\n");
    assert!(config.env_var_name_for_push_user().unwrap().is_absent());
}

#[test]
fn test_freeze_all() {
    let config = load("[freeze]\nrepo_names = all\n");
    assert_eq!(config.frozen_repo_names().unwrap(), vec!["all"]);
}

#[test]
fn test_bundled_domains_are_listed() {
    let bundled = domains::bundled();
    assert_eq!(bundled.len(), 1);
    assert_eq!(bundled[0].0, "githooksystem");
    assert!(bundled[0].1.contains("[freeze]"));
}

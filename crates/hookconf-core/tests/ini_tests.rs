use hookconf_core::ini::{UNNAMED_SECTION, parse};
use hookconf_core::{Error, EnvironmentProvider, SystemEnvironment};
use hookconf_test_utils::ConfigRoot;
use pretty_assertions::assert_eq;
use rstest::rstest;
use std::path::Path;

fn parse_sections(content: &str) -> hookconf_core::ConfigurationMapping {
    parse(content, Path::new("test.conf"), true).unwrap()
}

#[test]
fn test_sections_and_keys() {
    let mapping = parse_sections(
        "; leading comment\n\
         [freeze]\n\
         repo_names = example.git, other.git\n\
         \n\
         # hash comment\n\
         [git]\n\
         env_var_push_user = GITOSIS_USER\n",
    );

    assert_eq!(mapping.get("freeze", "repo_names"), Some("example.git, other.git"));
    assert_eq!(mapping.get("git", "env_var_push_user"), Some("GITOSIS_USER"));
    assert_eq!(mapping.section_names().collect::<Vec<_>>(), vec!["freeze", "git"]);
}

#[rstest]
#[case("flag = true", "1")]
#[case("flag = On", "1")]
#[case("flag = yes", "1")]
#[case("flag = false", "")]
#[case("flag = off", "")]
#[case("flag = none", "")]
#[case("flag = null", "")]
#[case("flag = \"true\"", "true")]
#[case("flag = 'false'", "false")]
#[case("flag = \"  padded  \"", "  padded  ")]
#[case("flag = 1", "1")]
#[case("flag =", "")]
fn test_value_literals(#[case] line: &str, #[case] expected: &str) {
    let mapping = parse_sections(&format!("[s]\n{line}\n"));
    assert_eq!(mapping.get("s", "flag"), Some(expected));
}

#[test]
fn test_keys_before_first_section_use_unnamed_section() {
    let mapping = parse_sections("top = 1\n[s]\nk = v\n");
    assert_eq!(mapping.get(UNNAMED_SECTION, "top"), Some("1"));
    assert_eq!(mapping.get("s", "k"), Some("v"));
}

#[test]
fn test_without_sections_flattens_keys() {
    let mapping = parse("[a]\nk = 1\n[b]\nk = 2\nother = x\n", Path::new("f.conf"), false).unwrap();

    assert_eq!(mapping.get(UNNAMED_SECTION, "k"), Some("2"));
    assert_eq!(mapping.get(UNNAMED_SECTION, "other"), Some("x"));
    assert!(!mapping.has_section("a"));
}

#[test]
fn test_empty_section_is_kept() {
    let mapping = parse_sections("[empty]\n");
    assert!(mapping.has_section("empty"));
    assert_eq!(mapping.get("empty", "anything"), None);
}

#[rstest]
#[case("[s]\njust words\n", 2)]
#[case("[unterminated\n", 1)]
#[case("[]\n", 1)]
#[case("[s]\n= value\n", 2)]
#[case("[s]\nk = \"open\n", 2)]
fn test_malformed_lines_fail_with_line_number(#[case] content: &str, #[case] expected_line: usize) {
    let err = parse(content, Path::new("bad.conf"), true).unwrap_err();
    match err {
        Error::Parse { line, path, .. } => {
            assert_eq!(line, expected_line);
            assert_eq!(path, Path::new("bad.conf"));
        }
        other => panic!("expected parse error, got {other:?}"),
    }
}

#[test]
fn test_system_environment_reads_from_disk() {
    let root = ConfigRoot::new();
    let path = root.write("deploy", "[deploy]\nhosts = a, b\n");
    let env = SystemEnvironment::new();

    assert!(env.file_exists(&path));
    let mapping = env.parse_config_file(&path, true).unwrap();
    assert_eq!(mapping.get("deploy", "hosts"), Some("a, b"));
}

#[test]
fn test_system_environment_missing_file() {
    let root = ConfigRoot::new();
    let env = SystemEnvironment::new();
    let missing = root.conf_path("missing");

    assert!(!env.file_exists(&missing));
    assert!(matches!(
        env.parse_config_file(&missing, true),
        Err(Error::Io { .. })
    ));
}

#[test]
fn test_directory_is_not_a_config_file() {
    let root = ConfigRoot::new();
    let env = SystemEnvironment::new();
    assert!(!env.file_exists(root.path()));
}

use std::fs;
use std::path::Path;

use tempfile::TempDir;

use crate::config::JiraConfig;
use crate::error::JiraError;

const FULL_CONFIG: &str = "\
[jira]
JIRA_URL = https://jira.example.com
USERNAME = alice
PASSWORD = p%ss{word}
DEFAULT_ASSIGNEE = alice
TEST_PROJECT = QA
DEFAULT_COMPONENTS = Backend, , API
WATCHERS =
MAX_RESULT_COUNT = 25
";

fn parse(text: &str) -> Result<JiraConfig, JiraError> {
    JiraConfig::parse(text, Path::new("/home/alice/jira.config"))
}

#[test]
fn test_load_missing_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("jira.config");

    match JiraConfig::load(&path) {
        Err(JiraError::ConfigNotFound(missing)) => assert_eq!(missing, path),
        other => panic!("Expected ConfigNotFound, got {:?}", other),
    }
}

#[test]
fn test_load_from_disk() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("jira.config");
    fs::write(&path, FULL_CONFIG).unwrap();

    let config = JiraConfig::load(&path).unwrap();
    assert_eq!(config.path(), path.as_path());
    assert_eq!(config.url().unwrap(), "https://jira.example.com");
}

#[test]
fn test_missing_section() {
    match parse("[other]\nJIRA_URL = x\n") {
        Err(JiraError::MissingSection { section, .. }) => assert_eq!(section, "jira"),
        other => panic!("Expected MissingSection, got {:?}", other),
    }
}

#[test]
fn test_missing_keys_are_listed_in_order() {
    match parse("[jira]\nJIRA_URL = x\nUSERNAME = y\n") {
        Err(JiraError::MissingKeys { keys, .. }) => {
            assert_eq!(keys, vec!["PASSWORD", "DEFAULT_ASSIGNEE", "TEST_PROJECT"]);
        }
        other => panic!("Expected MissingKeys, got {:?}", other),
    }
}

#[test]
fn test_keys_are_case_insensitive() {
    let config = parse(
        "[jira]\njira_url = https://j\nusername = a\npassword = b\n\
         default_assignee =\ntest_project = QA\n",
    )
    .unwrap();

    assert_eq!(config.get("JIRA_URL"), Some("https://j"));
    assert_eq!(config.get("Test_Project"), Some("QA"));
    assert!(!config.assign_by_default());
}

#[test]
fn test_values_are_raw() {
    let config = parse(FULL_CONFIG).unwrap();
    assert_eq!(config.password().unwrap(), "p%ss{word}");
}

#[test]
fn test_lists_drop_blanks() {
    let config = parse(FULL_CONFIG).unwrap();
    assert_eq!(config.list("DEFAULT_COMPONENTS"), vec!["Backend", "API"]);
    assert!(config.list("WATCHERS").is_empty());
    assert!(config.list("DEFAULT_LABELS").is_empty());
}

#[test]
fn test_defaults_for_optional_keys() {
    let config = parse(FULL_CONFIG).unwrap();
    assert!(config.assign_by_default());
    assert_eq!(config.default_issue_type(), "Story");
    assert_eq!(config.default_summary(), "Test {dev_jira_id}: {dev_jira_summary}");
    assert_eq!(config.default_description(), "");
}

#[test]
fn test_max_results() {
    let with = |value: &str| {
        let base = FULL_CONFIG.replace("MAX_RESULT_COUNT = 25\n", "");
        parse(&format!("{}MAX_RESULT_COUNT = {}\n", base, value))
            .unwrap()
            .max_results()
    };

    assert_eq!(parse(FULL_CONFIG).unwrap().max_results(), Some(25));
    assert_eq!(with("0"), Some(10));
    assert_eq!(with("-1"), None);
    assert_eq!(with("lots"), Some(10));
    assert_eq!(with("-5"), Some(10));
}

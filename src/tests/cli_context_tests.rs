use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use crate::cli_context::{CliContext, CliContextBuilder};
use crate::config::JiraConfig;
use crate::error::JiraError;

const CONFIG: &str = "\
[jira]
JIRA_URL = https://jira.example.com/
USERNAME = alice
PASSWORD = secret
DEFAULT_ASSIGNEE = alice
TEST_PROJECT = QA
";

#[test]
fn test_cli_context_explicit_path() {
    let context = CliContext::load(Some(Path::new("/tmp/custom.config"))).unwrap();
    assert_eq!(context.config_path(), Path::new("/tmp/custom.config"));
}

#[test]
fn test_cli_context_missing_config() {
    let dir = TempDir::new().unwrap();
    let mut context = CliContext::new(dir.path().join("jira.config"));

    assert!(matches!(context.config(), Err(JiraError::ConfigNotFound(_))));
    assert!(matches!(context.client(), Err(JiraError::ConfigNotFound(_))));
}

#[test]
fn test_cli_context_loads_config_once() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("jira.config");
    fs::write(&path, CONFIG).unwrap();

    let mut context = CliContext::new(path.clone());
    assert_eq!(context.config().unwrap().username().unwrap(), "alice");

    // Later edits are not picked up by the same context
    fs::remove_file(&path).unwrap();
    assert_eq!(context.config().unwrap().username().unwrap(), "alice");
}

#[test]
fn test_cli_context_builder_with_config() {
    let config = JiraConfig::parse(CONFIG, Path::new("/home/alice/jira.config")).unwrap();
    let mut context = CliContextBuilder::new().with_config(config).build().unwrap();

    assert_eq!(context.config_path(), PathBuf::from("/home/alice/jira.config"));

    let client = context.client().unwrap();
    assert_eq!(client.base_url(), "https://jira.example.com");

    // Getting the client again returns the same instance
    let again = context.client().unwrap();
    assert!(std::sync::Arc::ptr_eq(&client, &again));
}

#[test]
fn test_cli_context_builder_with_config_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("other.config");
    fs::write(&path, CONFIG.replace("alice", "bob")).unwrap();

    let mut context = CliContextBuilder::new().with_config_path(path.clone()).build().unwrap();

    assert_eq!(context.config_path(), path.as_path());
    assert_eq!(context.config().unwrap().default_assignee(), "bob");
}

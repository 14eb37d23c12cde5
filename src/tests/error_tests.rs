use std::path::PathBuf;

use crate::error::{ErrorContext, JiraError};
use crate::jira_error;

#[test]
fn test_error_context_on_result() {
    let result: Result<i32, std::io::Error> = Err(std::io::Error::new(
        std::io::ErrorKind::NotFound,
        "file not found",
    ));

    let jira_result = result.context("Failed to read config file");

    match jira_result {
        Err(JiraError::Unknown(msg)) => {
            assert!(msg.contains("Failed to read config file"));
            assert!(msg.contains("file not found"));
        }
        _ => panic!("Expected JiraError::Unknown"),
    }
}

#[test]
fn test_error_context_on_option() {
    let option: Option<String> = None;

    match option.context("Issue key missing") {
        Err(JiraError::Unknown(msg)) => assert_eq!(msg, "Issue key missing"),
        _ => panic!("Expected JiraError::Unknown"),
    }
}

#[test]
fn test_error_context_with_closure() {
    let result: Result<i32, std::io::Error> = Err(std::io::Error::new(
        std::io::ErrorKind::PermissionDenied,
        "access denied",
    ));

    match result.with_context(|| format!("Failed to write {}", "/home/me/jira.config")) {
        Err(JiraError::Unknown(msg)) => {
            assert!(msg.contains("Failed to write /home/me/jira.config"));
            assert!(msg.contains("access denied"));
        }
        _ => panic!("Expected JiraError::Unknown"),
    }
}

#[test]
fn test_jira_error_macro() {
    match jira_error!(CommandFailed, "boom") {
        JiraError::CommandFailed(msg) => assert_eq!(msg, "boom"),
        _ => panic!("Expected JiraError::CommandFailed"),
    }

    match jira_error!(InvalidInput, "Unknown option: {}", "--bogus") {
        JiraError::InvalidInput(msg) => assert_eq!(msg, "Unknown option: --bogus"),
        _ => panic!("Expected JiraError::InvalidInput"),
    }
}

#[test]
fn test_config_error_messages() {
    let path = PathBuf::from("/home/me/jira.config");

    assert_eq!(
        JiraError::ConfigNotFound(path.clone()).to_string(),
        "Config file \"/home/me/jira.config\" not found"
    );
    assert_eq!(
        JiraError::MissingSection {
            path: path.clone(),
            section: "jira".to_string(),
        }
        .to_string(),
        "Config file \"/home/me/jira.config\" missing \"jira\" section"
    );
    assert_eq!(
        JiraError::MissingKeys {
            path,
            section: "jira".to_string(),
            keys: vec!["PASSWORD".to_string(), "TEST_PROJECT".to_string()],
        }
        .to_string(),
        "Config file \"/home/me/jira.config\" section \"jira\" missing keys: \
         ['PASSWORD', 'TEST_PROJECT']"
    );
}

#[test]
fn test_command_messages() {
    assert_eq!(
        JiraError::IssueNotFound("PROJ-1".to_string()).to_string(),
        "JIRA PROJ-1 was not found!"
    );
    assert_eq!(
        JiraError::UserNotFound {
            user: "bob".to_string(),
            message: "The user named 'bob' does not exist".to_string(),
        }
        .to_string(),
        "There was a problem finding user bob. Error message: The user named 'bob' does not exist."
    );
}

#[test]
fn test_api_text() {
    let api = JiraError::Api {
        status: 404,
        text: "Issue does not exist".to_string(),
    };
    assert_eq!(api.api_text(), "Issue does not exist");
    assert_eq!(
        JiraError::CommandFailed("nope".to_string()).api_text(),
        "nope"
    );
}

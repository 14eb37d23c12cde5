//! Posting automated error reports onto issues.
//!
//! Test harnesses keep a list of known failures, each tied to the issue that
//! tracks it. When a run produces errors, [`update_issues_for_errors`] comments
//! on every issue whose failure text shows up in one of the errors.

use std::fmt::Display;

use crate::client::JiraClient;
use crate::error::JiraResult;
use crate::formatting::{format_as_code_block, format_as_jira_table, format_autoupdate_message};
use crate::logging::log_info;

/// A known failure and the issue tracking it.
pub trait ErrorWatch {
    fn issue_key(&self) -> &str;
    /// Substring identifying the failure; empty matches nothing.
    fn error_message(&self) -> &str;
}

/// Plain [`ErrorWatch`] implementation.
#[derive(Debug, Clone)]
pub struct KnownError {
    pub issue_key: String,
    pub error_message: String,
}

impl KnownError {
    pub fn new(issue_key: &str, error_message: &str) -> Self {
        Self {
            issue_key: issue_key.to_string(),
            error_message: error_message.to_string(),
        }
    }
}

impl ErrorWatch for KnownError {
    fn issue_key(&self) -> &str {
        &self.issue_key
    }

    fn error_message(&self) -> &str {
        &self.error_message
    }
}

/// Comment on `issue_key` with the error wrapped in a code block.
pub async fn add_error_comment(
    client: &JiraClient,
    issue_key: &str,
    error: &str,
    header: Option<&str>,
) -> JiraResult<String> {
    let body = format_autoupdate_message(&format_as_code_block(error), header);
    client.add_comment(issue_key, &body).await?;
    log_info(&format!("Added error comment to {}", issue_key));
    Ok(issue_key.to_string())
}

/// Comment on `issue_key` with a table, optionally preceded by `prefix`.
pub async fn add_comment_with_table<H, C>(
    client: &JiraClient,
    issue_key: &str,
    headers: &[H],
    rows: &[Vec<C>],
    prefix: &str,
    header: Option<&str>,
) -> JiraResult<String>
where
    H: AsRef<str>,
    C: Display,
{
    let message = format!("{}{}", prefix, format_as_jira_table(headers, rows));
    client
        .add_comment(issue_key, &format_autoupdate_message(&message, header))
        .await?;
    log_info(&format!("Added table comment to {}", issue_key));
    Ok(issue_key.to_string())
}

/// Every (watch, error) pair where the watch's message occurs in the error.
pub fn matching_errors<'a, W: ErrorWatch>(
    watches: &'a [W],
    errors: &'a [&'a str],
) -> Vec<(&'a W, &'a str)> {
    watches
        .iter()
        .flat_map(|watch| errors.iter().map(move |error| (watch, *error)))
        .filter(|(watch, error)| {
            let needle = watch.error_message();
            !needle.is_empty() && error.contains(needle)
        })
        .collect()
}

/// Comment on each watched issue whose failure appears in `errors`.
///
/// Returns the keys commented on, once per matching error.
pub async fn update_issues_for_errors<W: ErrorWatch>(
    client: &JiraClient,
    watches: &[W],
    errors: &[&str],
    header: Option<&str>,
) -> JiraResult<Vec<String>> {
    let mut commented = Vec::new();

    for (watch, error) in matching_errors(watches, errors) {
        commented.push(add_error_comment(client, watch.issue_key(), error, header).await?);
    }

    Ok(commented)
}

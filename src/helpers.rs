//! Shared steps used by more than one command.

use regex::{Captures, Regex};

use crate::client::JiraClient;
use crate::constants::DEFAULT_LINK_TYPE;
use crate::error::{JiraError, JiraResult};
use crate::logging::log_error;
use crate::models::{Component, Issue, User};

lazy_static::lazy_static! {
    static ref PLACEHOLDER: Regex = Regex::new(r"\{\{|\}\}|\{([^{}]*)\}").unwrap();
}

/// Fetch an issue, reporting any failure as "not found".
pub async fn find_issue(client: &JiraClient, key: &str) -> JiraResult<Issue> {
    client.get_issue(key).await.map_err(|e| {
        log_error(&format!("Looking up {} failed: {}", key, e));
        JiraError::IssueNotFound(key.to_string())
    })
}

/// Make sure a user exists before handing their name to JIRA.
pub async fn check_valid_user(client: &JiraClient, user: &str) -> JiraResult<User> {
    client
        .get_user(user)
        .await
        .map_err(|e| JiraError::UserNotFound {
            user: user.to_string(),
            message: e.api_text(),
        })
}

/// Id of the single component called `name`.
pub fn component_id_from_name(components: &[Component], name: &str) -> JiraResult<String> {
    let matches: Vec<&Component> = components.iter().filter(|c| c.name == name).collect();

    match matches.as_slice() {
        [component] => Ok(component.id.clone()),
        [] => Err(JiraError::InvalidInput(format!(
            "No component in project with name: {}",
            name
        ))),
        _ => Err(JiraError::InvalidInput(format!(
            "More than one component in project with name: {}",
            name
        ))),
    }
}

pub async fn link_issues(
    client: &JiraClient,
    from: &str,
    to: &str,
    link_type: Option<&str>,
) -> JiraResult<()> {
    client
        .create_issue_link(link_type.unwrap_or(DEFAULT_LINK_TYPE), from, to)
        .await
}

/// Flatten repeated and comma-separated values, dropping blanks.
pub fn list_from_values<S: AsRef<str>>(values: &[S]) -> Vec<String> {
    values
        .iter()
        .flat_map(|value| value.as_ref().split(','))
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

/// Fill a summary template such as `"Test {dev_jira_id}: {dev_jira_summary}"`.
///
/// `{{` and `}}` produce literal braces; any other placeholder is an error.
pub fn fill_summary_template(
    template: &str,
    issue_key: &str,
    issue_summary: &str,
) -> JiraResult<String> {
    let mut unknown: Option<String> = None;

    let filled = PLACEHOLDER.replace_all(template, |caps: &Captures| match &caps[0] {
        "{{" => "{".to_string(),
        "}}" => "}".to_string(),
        _ => match &caps[1] {
            "dev_jira_id" => issue_key.to_string(),
            "dev_jira_summary" => issue_summary.to_string(),
            other => {
                unknown.get_or_insert_with(|| other.to_string());
                caps[0].to_string()
            }
        },
    });

    match unknown {
        Some(name) => Err(JiraError::InvalidInput(format!(
            "Unknown placeholder {{{}}} in summary template \"{}\"",
            name, template
        ))),
        None => Ok(filled.into_owned()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn component(id: &str, name: &str) -> Component {
        Component {
            id: id.to_string(),
            name: name.to_string(),
            description: None,
        }
    }

    #[test]
    fn component_lookup_needs_exactly_one_match() {
        let components = vec![
            component("1", "Backend"),
            component("2", "Frontend"),
            component("3", "Frontend"),
        ];

        assert_eq!(component_id_from_name(&components, "Backend").unwrap(), "1");

        match component_id_from_name(&components, "Frontend") {
            Err(JiraError::InvalidInput(msg)) => assert!(msg.contains("More than one component")),
            other => panic!("Expected InvalidInput, got {:?}", other),
        }

        match component_id_from_name(&components, "Docs") {
            Err(JiraError::InvalidInput(msg)) => assert!(msg.contains("No component")),
            other => panic!("Expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn list_from_values_splits_commas() {
        let values = vec!["a, b".to_string(), "".to_string(), "c,,".to_string()];
        assert_eq!(list_from_values(&values), vec!["a", "b", "c"]);
    }

    #[test]
    fn template_substitutes_known_placeholders() {
        let summary =
            fill_summary_template("Test {dev_jira_id}: {dev_jira_summary}", "DEV-9", "Add login")
                .unwrap();
        assert_eq!(summary, "Test DEV-9: Add login");
    }

    #[test]
    fn template_keeps_escaped_braces() {
        let summary = fill_summary_template("{{QA}} {dev_jira_id}", "DEV-9", "").unwrap();
        assert_eq!(summary, "{QA} DEV-9");
    }

    #[test]
    fn template_does_not_expand_inside_values() {
        let summary =
            fill_summary_template("{dev_jira_summary}", "DEV-9", "{dev_jira_id}").unwrap();
        assert_eq!(summary, "{dev_jira_id}");
    }

    #[test]
    fn template_rejects_unknown_placeholder() {
        match fill_summary_template("Test {ticket}", "DEV-9", "x") {
            Err(JiraError::InvalidInput(msg)) => assert!(msg.contains("{ticket}")),
            other => panic!("Expected InvalidInput, got {:?}", other),
        }
    }
}

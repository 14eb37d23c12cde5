use colored::*;

use crate::client::JiraClient;
use crate::models::{CreatedIssue, Issue};

/// `<permalink>: <summary>`
pub fn format_search_line(permalink: &str, issue: &Issue) -> String {
    format!("{}: {}", permalink, issue.fields.summary)
}

pub fn format_search_header(query: &str, count: usize) -> String {
    format!("Search for \"{}\" returned {} results", query, count)
}

pub fn print_search_results(client: &JiraClient, query: &str, issues: &[Issue]) {
    println!("{}", format_search_header(query, issues.len()));

    for issue in issues {
        let permalink = client.permalink(&issue.key).bright_blue().to_string();
        println!("{}", format_search_line(&permalink, issue));
    }
}

pub fn print_created_issue(client: &JiraClient, issue: &CreatedIssue) {
    println!(
        "{} {}",
        "Test JIRA Created:".green().bold(),
        client.permalink(&issue.key).bright_blue()
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::IssueFields;

    #[test]
    fn search_line_is_permalink_and_summary() {
        let issue = Issue {
            id: "1".to_string(),
            key: "PROJ-1".to_string(),
            self_url: None,
            fields: IssueFields {
                summary: "Fix the thing".to_string(),
                ..Default::default()
            },
        };
        assert_eq!(
            format_search_line("https://jira/browse/PROJ-1", &issue),
            "https://jira/browse/PROJ-1: Fix the thing"
        );
    }

    #[test]
    fn search_header_counts_results() {
        assert_eq!(
            format_search_header("project = PROJ", 3),
            "Search for \"project = PROJ\" returned 3 results"
        );
    }
}

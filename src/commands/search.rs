use clap::ArgMatches;

use crate::cli_context::CliContext;
use crate::client::JiraClient;
use crate::config::JiraConfig;
use crate::error::JiraResult;
use crate::formatting::{format_search_header, print_search_results};
use crate::logging::log_info;
use crate::models::Issue;

use super::required_arg;

pub async fn handle_search(context: &mut CliContext, matches: &ArgMatches) -> JiraResult<()> {
    let query = required_arg(matches, "query")?;
    let max_results = max_results_from_args(matches, context.config()?);
    let client = context.client()?;

    if matches.get_flag("count-only") {
        let total = client.count_issues(query).await?;
        println!("{}", format_search_header(query, total as usize));
        return Ok(());
    }

    let issues = run_search(&client, query, max_results).await?;
    print_search_results(&client, query, &issues);

    Ok(())
}

/// `--no-max-count` and `--max-results 0` both lift the cap; without either
/// flag the config decides.
pub fn max_results_from_args(matches: &ArgMatches, config: &JiraConfig) -> Option<u32> {
    if matches.get_flag("no-max-count") {
        return None;
    }

    match matches.get_one::<u32>("max-results") {
        Some(0) => None,
        Some(max) => Some(*max),
        None => config.max_results(),
    }
}

pub async fn run_search(
    client: &JiraClient,
    query: &str,
    max_results: Option<u32>,
) -> JiraResult<Vec<Issue>> {
    let issues = client.search_issues(query, max_results).await?;
    log_info(&format!("Search for \"{}\" returned {} issues", query, issues.len()));
    Ok(issues)
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;
    use crate::cli::build_cli;

    fn config(max_result_count: Option<&str>) -> JiraConfig {
        let mut text = String::from(
            "[jira]\n\
             JIRA_URL = https://jira.example.com\n\
             USERNAME = alice\n\
             PASSWORD = secret\n\
             DEFAULT_ASSIGNEE = alice\n\
             TEST_PROJECT = QA\n",
        );
        if let Some(count) = max_result_count {
            text.push_str(&format!("MAX_RESULT_COUNT = {}\n", count));
        }
        JiraConfig::parse(&text, Path::new("/home/alice/jira.config")).unwrap()
    }

    fn cap_for(args: &[&str], config: &JiraConfig) -> Option<u32> {
        let argv = ["jira", "search", "project = QA"].iter().chain(args).copied();
        let matches = build_cli().try_get_matches_from(argv).unwrap();
        let (_, sub) = matches.subcommand().unwrap();
        max_results_from_args(sub, config)
    }

    #[test]
    fn explicit_max_results_wins_over_config() {
        assert_eq!(cap_for(&["-m", "25"], &config(Some("5"))), Some(25));
    }

    #[test]
    fn zero_max_results_means_unlimited() {
        assert_eq!(cap_for(&["-m", "0"], &config(Some("5"))), None);
    }

    #[test]
    fn no_max_count_means_unlimited() {
        assert_eq!(cap_for(&["-n"], &config(Some("5"))), None);
    }

    #[test]
    fn config_decides_without_flags() {
        assert_eq!(cap_for(&[], &config(Some("5"))), Some(5));
        assert_eq!(cap_for(&[], &config(Some("-1"))), None);
        assert_eq!(cap_for(&[], &config(None)), Some(10));
    }
}

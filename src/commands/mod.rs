pub mod assign;
pub mod comment;
pub mod example_config;
pub mod link;
pub mod make_linked;
pub mod search;

use clap::ArgMatches;

use crate::error::{JiraError, JiraResult};
use crate::jira_error;

/// Turn a JIRA API failure into the command's own error line; other errors
/// pass through unchanged.
pub(crate) fn command_failure<F>(error: JiraError, describe: F) -> JiraError
where
    F: FnOnce(&str) -> String,
{
    match error {
        JiraError::Api { text, .. } => JiraError::CommandFailed(describe(&text)),
        other => other,
    }
}

pub(crate) fn required_arg<'a>(matches: &'a ArgMatches, name: &str) -> JiraResult<&'a String> {
    matches
        .get_one::<String>(name)
        .ok_or_else(|| jira_error!(InvalidInput, "{} is required", name))
}

/// All values of a repeatable option, or `None` if it was not given.
pub(crate) fn many_args(matches: &ArgMatches, name: &str) -> Option<Vec<String>> {
    matches
        .get_many::<String>(name)
        .map(|values| values.cloned().collect())
}

use clap::ArgMatches;
use colored::*;

use crate::cli_context::CliContext;
use crate::client::JiraClient;
use crate::error::JiraResult;
use crate::helpers::{check_valid_user, find_issue};
use crate::logging::log_info;

use super::{command_failure, required_arg};

pub async fn handle_assign(context: &mut CliContext, matches: &ArgMatches) -> JiraResult<()> {
    let issue = required_arg(matches, "issue")?;
    let user = required_arg(matches, "user")?;
    let client = context.client()?;

    reassign(&client, issue, user).await?;
    println!("{} \"{}\" to \"{}\"", "Assigned".green(), issue, user);

    Ok(())
}

/// Assign `issue` to `user` after checking that both exist.
pub async fn reassign(client: &JiraClient, issue: &str, user: &str) -> JiraResult<()> {
    find_issue(client, issue).await?;
    check_valid_user(client, user).await?;

    client.assign_issue(issue, user).await.map_err(|e| {
        command_failure(e, |text| {
            format!("ERROR: \"{}\" trying to assign a new user to the JIRA.", text)
        })
    })?;

    log_info(&format!("Assigned {} to {}", issue, user));
    Ok(())
}

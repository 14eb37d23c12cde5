use clap::ArgMatches;

use crate::cli_context::CliContext;
use crate::client::JiraClient;
use crate::constants::DEFAULT_LINK_TYPE;
use crate::error::JiraResult;
use crate::helpers::link_issues;

use super::{command_failure, required_arg};

pub async fn handle_link(context: &mut CliContext, matches: &ArgMatches) -> JiraResult<()> {
    let from = required_arg(matches, "from")?;
    let to = required_arg(matches, "to")?;
    let link_type = matches
        .get_one::<String>("link-type")
        .map(|s| s.as_str())
        .unwrap_or(DEFAULT_LINK_TYPE);

    println!(
        "Creating a \"{}\" link from \"{}\" to \"{}\"",
        link_type, from, to
    );

    let client = context.client()?;
    create_link(&client, link_type, from, to).await
}

pub async fn create_link(
    client: &JiraClient,
    link_type: &str,
    from: &str,
    to: &str,
) -> JiraResult<()> {
    link_issues(client, from, to, Some(link_type))
        .await
        .map_err(|e| {
            command_failure(e, |text| format!("ERROR: \"{}\" trying to make the link.", text))
        })
}

use std::io::{self, Read};

use clap::ArgMatches;

use crate::cli_context::CliContext;
use crate::client::JiraClient;
use crate::error::{ErrorContext, JiraResult};
use crate::logging::log_info;
use crate::models::Comment;

use super::{command_failure, required_arg};

pub async fn handle_comment(context: &mut CliContext, matches: &ArgMatches) -> JiraResult<()> {
    let issue = required_arg(matches, "issue")?;
    let message = required_arg(matches, "message")?;
    let client = context.client()?;

    let from_stdin = message == "-";
    let message = comment_text(message, io::stdin())?;
    if from_stdin {
        println!();
    }

    println!("Adding comment \"{}\" to \"{}\"", message, issue);
    post_comment(&client, issue, &message).await?;

    Ok(())
}

/// The comment body: `message` itself, or everything `reader` yields when
/// `message` is `-`, without trailing newlines.
pub fn comment_text<R: Read>(message: &str, mut reader: R) -> JiraResult<String> {
    if message != "-" {
        return Ok(message.to_string());
    }

    let mut buffer = String::new();
    reader
        .read_to_string(&mut buffer)
        .context("Failed to read comment from stdin")?;
    Ok(buffer.trim_end_matches(['\r', '\n']).to_string())
}

pub async fn post_comment(client: &JiraClient, issue: &str, message: &str) -> JiraResult<Comment> {
    let comment = client
        .add_comment(issue, message)
        .await
        .map_err(|e| command_failure(e, |text| format!("ERROR: \"{}\" for \"{}\"!", text, issue)))?;
    log_info(&format!("Added comment {} to {}", comment.id, issue));
    Ok(comment)
}

use std::path::PathBuf;
use std::process;

use clap::ArgMatches;
use colored::*;

use jira_tools::cli::build_cli;
use jira_tools::cli_context::CliContext;
use jira_tools::commands::{
    assign::handle_assign, comment::handle_comment, example_config::handle_example_config,
    link::handle_link, make_linked::handle_make_linked, search::handle_search,
};
use jira_tools::error::{JiraError, JiraResult};
use jira_tools::logging::{
    get_log_file_path, init_logging, log_debug, log_error, log_info, log_panic_info, set_verbose,
};

async fn run(matches: &ArgMatches) -> JiraResult<()> {
    let config_path = matches.get_one::<PathBuf>("config").map(|p| p.as_path());
    let mut context = CliContext::load(config_path)?;

    match matches.subcommand() {
        Some(("comment", sub_matches)) => handle_comment(&mut context, sub_matches).await,
        Some(("link", sub_matches)) => handle_link(&mut context, sub_matches).await,
        Some(("make-linked", sub_matches)) => handle_make_linked(&mut context, sub_matches).await,
        Some(("search", sub_matches)) => handle_search(&mut context, sub_matches).await,
        Some(("assign", sub_matches)) => handle_assign(&mut context, sub_matches).await,
        Some(("example-config", sub_matches)) => {
            handle_example_config(&mut context, sub_matches).await
        }
        _ => Err(JiraError::InvalidInput(
            "Unknown command. Use 'jira --help' for available commands.".to_string(),
        )),
    }
}

#[tokio::main]
async fn main() {
    let matches = build_cli().get_matches();

    set_verbose(matches.get_flag("verbose"));
    // A missing log directory should never stop a command
    if let Err(e) = init_logging() {
        if matches.get_flag("verbose") {
            eprintln!("Logging disabled: {}", e);
        }
    }

    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        log_panic_info(info);
        default_hook(info);
    }));

    if let Some((name, _)) = matches.subcommand() {
        log_info(&format!("Running '{}'", name));
    }
    if let Some(log_file) = get_log_file_path() {
        log_debug(&format!("Logging to {}", log_file.display()));
    }

    if let Err(e) = run(&matches).await {
        log_error(&e.to_string());
        eprintln!("{}", e.to_string().red());
        process::exit(1);
    }
}

use std::path::PathBuf;

use clap::{Arg, ArgAction, Command};

use crate::constants::{CONFIG_ENV_VAR, DEFAULT_LINK_TYPE};

/// The `jira` command line: global options plus one subcommand per tool.
pub fn build_cli() -> Command {
    Command::new("jira")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Simple helpers to interface to JIRA from the command line")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Config file to use instead of ~/jira.config")
                .env(CONFIG_ENV_VAR)
                .value_parser(clap::value_parser!(PathBuf))
                .global(true),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Echo log messages to stderr")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(comment_command())
        .subcommand(link_command())
        .subcommand(make_linked_command())
        .subcommand(search_command())
        .subcommand(assign_command())
        .subcommand(example_config_command())
}

fn comment_command() -> Command {
    Command::new("comment")
        .about("Add a short comment to an issue")
        .long_about(
            "Add a short comment to an issue.\n\nIf MESSAGE is '-' then stdin will be read.",
        )
        .arg(
            Arg::new("issue")
                .value_name("ISSUE")
                .help("Issue to comment on (e.g., PROJ-123)")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("message")
                .value_name("MESSAGE")
                .help("Comment to add to the given issue")
                .required(true)
                .allow_hyphen_values(true)
                .index(2),
        )
}

fn link_command() -> Command {
    Command::new("link")
        .about("Link two issues")
        .arg(
            Arg::new("from")
                .value_name("FROM")
                .help("The issue from which to create the link")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("to")
                .value_name("TO")
                .help("The issue to which to create the link")
                .required(true)
                .index(2),
        )
        .arg(
            Arg::new("link-type")
                .long("link-type")
                .short('t')
                .value_name("TYPE")
                .help("The type of link to create")
                .default_value(DEFAULT_LINK_TYPE),
        )
}

fn make_linked_command() -> Command {
    Command::new("make-linked")
        .about("Create a new issue linked to an existing one")
        .arg(
            Arg::new("issue")
                .value_name("ISSUE")
                .help("Issue the new one is created from")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("assign")
                .long("assign")
                .help("Assign the new issue to --user, or the current user if none is set")
                .action(ArgAction::SetTrue)
                .conflicts_with("no-assign"),
        )
        .arg(
            Arg::new("no-assign")
                .long("no-assign")
                .help("Leave the new issue unassigned")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("project")
                .long("project")
                .short('p')
                .value_name("PROJECT")
                .help("Project in which to create the issue [default: TEST_PROJECT]"),
        )
        .arg(
            Arg::new("user")
                .long("user")
                .short('u')
                .value_name("USER")
                .help("User who will receive the assignment [default: DEFAULT_ASSIGNEE]"),
        )
        .arg(
            Arg::new("components")
                .long("components")
                .short('c')
                .value_name("COMPONENT")
                .help("Component to apply to the new issue [default: DEFAULT_COMPONENTS]")
                .action(ArgAction::Append),
        )
        .arg(
            Arg::new("description")
                .long("description")
                .short('d')
                .value_name("DESCRIPTION")
                .help("Description of the new issue [default: DEFAULT_DESCRIPTION]"),
        )
        .arg(
            Arg::new("labels")
                .long("labels")
                .short('l')
                .value_name("LABELS")
                .help("Comma-separated labels for the new issue [default: DEFAULT_LABELS]")
                .action(ArgAction::Append),
        )
        .arg(
            Arg::new("summary")
                .long("summary")
                .short('s')
                .value_name("SUMMARY")
                .help(
                    "Summary template; {dev_jira_id} and {dev_jira_summary} are filled in \
                     from ISSUE [default: DEFAULT_SUMMARY]",
                ),
        )
        .arg(
            Arg::new("issue-type")
                .long("issue-type")
                .short('t')
                .value_name("TYPE")
                .help(
                    "Issue type, must be valid in the target project \
                     [default: DEFAULT_ISSUE_TYPE]",
                ),
        )
        .arg(
            Arg::new("watchers")
                .long("watchers")
                .short('w')
                .value_name("USER")
                .help("Watcher to add to the new issue [default: WATCHERS]")
                .action(ArgAction::Append),
        )
}

fn search_command() -> Command {
    Command::new("search")
        .about("Search using JQL and list matches")
        .arg(
            Arg::new("query")
                .value_name("QUERY")
                .help("JQL query")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("max-results")
                .long("max-results")
                .short('m')
                .value_name("N")
                .help("Max results returned [default: MAX_RESULT_COUNT or 10]")
                .value_parser(clap::value_parser!(u32))
                .conflicts_with("no-max-count"),
        )
        .arg(
            Arg::new("no-max-count")
                .long("no-max-count")
                .short('n')
                .help("Return every match")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("count-only")
                .long("count-only")
                .short('c')
                .help("Only print the number of matches")
                .action(ArgAction::SetTrue),
        )
}

fn assign_command() -> Command {
    Command::new("assign")
        .about("Change the assignee of an issue")
        .arg(
            Arg::new("issue")
                .value_name("ISSUE")
                .help("Issue to reassign")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("user")
                .value_name("USER")
                .help("New assignee for the issue")
                .required(true)
                .index(2),
        )
}

fn example_config_command() -> Command {
    Command::new("example-config")
        .about("Install an example jira.config unless one is already in place")
        .long_about(
            "Install an example jira.config in your home directory unless you have one already. \
             Without any switches, do a dry run and print the example config to stdout.",
        )
        .arg(
            Arg::new("install")
                .long("install")
                .help("Install the example config file unless you have one already")
                .action(ArgAction::SetTrue),
        )
}

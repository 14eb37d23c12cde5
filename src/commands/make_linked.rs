use clap::ArgMatches;
use serde_json::{json, Value};

use crate::cli_context::CliContext;
use crate::client::JiraClient;
use crate::config::JiraConfig;
use crate::error::JiraResult;
use crate::formatting::print_created_issue;
use crate::helpers::{
    component_id_from_name, fill_summary_template, find_issue, link_issues, list_from_values,
};
use crate::logging::log_info;
use crate::models::{CreatedIssue, Issue};

use super::{many_args, required_arg};

/// Everything needed to open a new issue linked back to an existing one.
#[derive(Debug, Clone, PartialEq)]
pub struct LinkedIssueOptions {
    pub source_key: String,
    pub project: String,
    /// Receives `{dev_jira_id}` and `{dev_jira_summary}`.
    pub summary_template: String,
    pub description: String,
    pub issue_type: String,
    pub assign: bool,
    /// Assignee; empty means the authenticated user.
    pub user: String,
    pub labels: Vec<String>,
    pub components: Vec<String>,
    pub watchers: Vec<String>,
}

impl LinkedIssueOptions {
    /// Options taken entirely from the config file's defaults.
    pub fn from_config(config: &JiraConfig, source_key: &str) -> Self {
        Self {
            source_key: source_key.to_string(),
            project: config.test_project().to_string(),
            summary_template: config.default_summary().to_string(),
            description: config.default_description().to_string(),
            issue_type: config.default_issue_type().to_string(),
            assign: config.assign_by_default(),
            user: config.default_assignee().to_string(),
            labels: config.list("DEFAULT_LABELS"),
            components: config.list("DEFAULT_COMPONENTS"),
            watchers: config.list("WATCHERS"),
        }
    }

    /// Config defaults overridden by whatever was given on the command line.
    pub fn from_args(config: &JiraConfig, matches: &ArgMatches) -> JiraResult<Self> {
        let mut options = Self::from_config(config, required_arg(matches, "issue")?);

        if matches.get_flag("assign") {
            options.assign = true;
        } else if matches.get_flag("no-assign") {
            options.assign = false;
        }
        if let Some(project) = matches.get_one::<String>("project") {
            options.project = project.clone();
        }
        if let Some(user) = matches.get_one::<String>("user") {
            options.user = user.clone();
        }
        if let Some(description) = matches.get_one::<String>("description") {
            options.description = description.clone();
        }
        if let Some(summary) = matches.get_one::<String>("summary") {
            options.summary_template = summary.clone();
        }
        if let Some(issue_type) = matches.get_one::<String>("issue-type") {
            options.issue_type = issue_type.clone();
        }
        if let Some(labels) = many_args(matches, "labels") {
            options.labels = list_from_values(&labels);
        }
        if let Some(components) = many_args(matches, "components") {
            options.components = list_from_values(&components);
        }
        if let Some(watchers) = many_args(matches, "watchers") {
            options.watchers = list_from_values(&watchers);
        }

        Ok(options)
    }
}

pub async fn handle_make_linked(context: &mut CliContext, matches: &ArgMatches) -> JiraResult<()> {
    let options = LinkedIssueOptions::from_args(context.config()?, matches)?;
    let client = context.client()?;

    let created = create_linked_issue(&client, &options).await?;
    print_created_issue(&client, &created);

    Ok(())
}

/// The `fields` payload for the new issue.
pub fn build_issue_fields(
    options: &LinkedIssueOptions,
    source: &Issue,
    assignee: Option<&str>,
    component_ids: &[String],
) -> JiraResult<Value> {
    let summary =
        fill_summary_template(&options.summary_template, &source.key, &source.fields.summary)?;

    let mut fields = json!({
        "project": { "key": options.project },
        "summary": summary,
        "description": options.description,
        "issuetype": { "name": options.issue_type },
    });

    if let Some(assignee) = assignee {
        fields["assignee"] = json!({ "name": assignee });
    }
    if !options.labels.is_empty() {
        fields["labels"] = json!(options.labels);
    }
    if !component_ids.is_empty() {
        fields["components"] =
            Value::Array(component_ids.iter().map(|id| json!({ "id": id })).collect());
    }

    Ok(fields)
}

/// Create the new issue, link it to the source issue, and add watchers.
pub async fn create_linked_issue(
    client: &JiraClient,
    options: &LinkedIssueOptions,
) -> JiraResult<CreatedIssue> {
    let source = find_issue(client, &options.source_key).await?;

    let assignee = if !options.assign {
        None
    } else if options.user.is_empty() {
        Some(client.current_user().await?)
    } else {
        Some(options.user.clone())
    };

    let component_ids = if options.components.is_empty() {
        Vec::new()
    } else {
        let project_components = client.project_components(&options.project).await?;
        options
            .components
            .iter()
            .map(|name| component_id_from_name(&project_components, name))
            .collect::<JiraResult<Vec<String>>>()?
    };

    let fields = build_issue_fields(options, &source, assignee.as_deref(), &component_ids)?;
    let created = client.create_issue(fields).await?;
    log_info(&format!("Created {} from {}", created.key, source.key));

    link_issues(client, &created.key, &source.key, None).await?;

    for watcher in &options.watchers {
        client.add_watcher(&created.key, watcher).await?;
    }

    Ok(created)
}

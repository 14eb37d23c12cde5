pub mod jira_client;
pub mod links;

pub use jira_client::JiraClient;
pub use links::{resolve_link, ResolvedLink};

// Module declarations
pub mod cli;
pub mod cli_context;
pub mod client;
pub mod commands;
pub mod config;
pub mod constants;
pub mod error;
pub mod error_comments;
pub mod formatting;
pub mod helpers;
pub mod logging;
pub mod models;

#[cfg(test)]
mod tests;

// Re-export commonly used items
pub use client::JiraClient;
pub use config::{default_config_path, JiraConfig};
pub use error::{JiraError, JiraResult};
pub use models::*;

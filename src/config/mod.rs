pub mod config;

pub use config::{default_config_path, resolve_config_path, JiraConfig};

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::client::JiraClient;
use crate::config::{resolve_config_path, JiraConfig};
use crate::error::JiraResult;

/// Central context for CLI operations, managing configuration and client instances
pub struct CliContext {
    config_path: PathBuf,
    config: Option<JiraConfig>,
    client: Option<Arc<JiraClient>>,
}

impl CliContext {
    /// Create a context for the config file at `config_path`, loaded lazily.
    pub fn new(config_path: PathBuf) -> Self {
        Self {
            config_path,
            config: None,
            client: None,
        }
    }

    /// Resolve the config location (explicit path or `~/jira.config`).
    pub fn load(explicit: Option<&Path>) -> JiraResult<Self> {
        Ok(Self::new(resolve_config_path(explicit)?))
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// The validated config, read on first use.
    pub fn config(&mut self) -> JiraResult<&JiraConfig> {
        let config = match self.config.take() {
            Some(config) => config,
            None => JiraConfig::load(&self.config_path)?,
        };
        Ok(&*self.config.insert(config))
    }

    /// Get or create a client configured from the config file.
    pub fn client(&mut self) -> JiraResult<Arc<JiraClient>> {
        if let Some(client) = &self.client {
            return Ok(client.clone());
        }

        let client = Arc::new(JiraClient::from_config(self.config()?)?);
        self.client = Some(client.clone());
        Ok(client)
    }
}

/// Builder for contexts with an in-memory config, mostly for tests
pub struct CliContextBuilder {
    config_path: Option<PathBuf>,
    config: Option<JiraConfig>,
}

impl CliContextBuilder {
    pub fn new() -> Self {
        Self {
            config_path: None,
            config: None,
        }
    }

    pub fn with_config_path(mut self, path: PathBuf) -> Self {
        self.config_path = Some(path);
        self
    }

    pub fn with_config(mut self, config: JiraConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn build(self) -> JiraResult<CliContext> {
        let config_path = match (self.config_path, &self.config) {
            (Some(path), _) => path,
            (None, Some(config)) => config.path().to_path_buf(),
            (None, None) => resolve_config_path(None)?,
        };

        Ok(CliContext {
            config_path,
            config: self.config,
            client: None,
        })
    }
}

impl Default for CliContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}

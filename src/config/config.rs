use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use ini::{Ini, ParseOption};

use crate::constants::{
    CONFIG_FILE, CONFIG_SECTION, DEFAULT_ISSUE_TYPE, DEFAULT_MAX_RESULTS, DEFAULT_SUMMARY,
    REQUIRED_KEYS,
};
use crate::error::{JiraError, JiraResult};

/// The validated `[jira]` section of the user's config file.
///
/// Keys are stored upper-cased so lookups are case-insensitive, the same way
/// INI readers conventionally treat option names.
#[derive(Debug, Clone)]
pub struct JiraConfig {
    path: PathBuf,
    values: HashMap<String, String>,
}

impl JiraConfig {
    /// Read and validate the config file at `path`.
    pub fn load(path: &Path) -> JiraResult<Self> {
        if !path.exists() {
            return Err(JiraError::ConfigNotFound(path.to_path_buf()));
        }
        let text = fs::read_to_string(path)?;
        Self::parse(&text, path)
    }

    /// Validate config text as if it had been read from `path`.
    pub fn parse(text: &str, path: &Path) -> JiraResult<Self> {
        // Raw values: no quote stripping or backslash escapes
        let options = ParseOption {
            enabled_quote: false,
            enabled_escape: false,
            ..ParseOption::default()
        };
        let ini = Ini::load_from_str_opt(text, options)?;

        let section = ini
            .section(Some(CONFIG_SECTION))
            .ok_or_else(|| JiraError::MissingSection {
                path: path.to_path_buf(),
                section: CONFIG_SECTION.to_string(),
            })?;

        let values: HashMap<String, String> = section
            .iter()
            .map(|(key, value)| (key.trim().to_uppercase(), value.trim().to_string()))
            .collect();

        let missing: Vec<String> = REQUIRED_KEYS
            .iter()
            .filter(|key| !values.contains_key(**key))
            .map(|key| key.to_string())
            .collect();

        if !missing.is_empty() {
            return Err(JiraError::MissingKeys {
                path: path.to_path_buf(),
                section: CONFIG_SECTION.to_string(),
                keys: missing,
            });
        }

        Ok(Self {
            path: path.to_path_buf(),
            values,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(&key.to_uppercase()).map(|s| s.as_str())
    }

    pub fn require(&self, key: &str) -> JiraResult<&str> {
        self.get(key).ok_or_else(|| {
            JiraError::ConfigError(format!(
                "Config file \"{}\" has no value for {}",
                self.path.display(),
                key
            ))
        })
    }

    /// A comma-separated entry as a list, with blank items dropped.
    pub fn list(&self, key: &str) -> Vec<String> {
        self.get(key)
            .map(|value| {
                value
                    .split(',')
                    .map(str::trim)
                    .filter(|item| !item.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn url(&self) -> JiraResult<&str> {
        self.require("JIRA_URL")
    }

    pub fn username(&self) -> JiraResult<&str> {
        self.require("USERNAME")
    }

    pub fn password(&self) -> JiraResult<&str> {
        self.require("PASSWORD")
    }

    pub fn default_assignee(&self) -> &str {
        self.get("DEFAULT_ASSIGNEE").unwrap_or_default()
    }

    pub fn test_project(&self) -> &str {
        self.get("TEST_PROJECT").unwrap_or_default()
    }

    /// New linked issues are assigned unless no default assignee is configured.
    pub fn assign_by_default(&self) -> bool {
        !self.default_assignee().is_empty()
    }

    pub fn default_summary(&self) -> &str {
        self.get("DEFAULT_SUMMARY").unwrap_or(DEFAULT_SUMMARY)
    }

    pub fn default_description(&self) -> &str {
        self.get("DEFAULT_DESCRIPTION").unwrap_or_default()
    }

    pub fn default_issue_type(&self) -> &str {
        match self.get("DEFAULT_ISSUE_TYPE") {
            Some(issue_type) if !issue_type.is_empty() => issue_type,
            _ => DEFAULT_ISSUE_TYPE,
        }
    }

    /// Search result cap: `None` means unlimited (`MAX_RESULT_COUNT = -1`),
    /// a missing, zero, or unreadable value falls back to the default.
    pub fn max_results(&self) -> Option<u32> {
        let configured = self
            .get("MAX_RESULT_COUNT")
            .and_then(|value| value.parse::<i64>().ok())
            .unwrap_or(0);

        match configured {
            -1 => None,
            n if n > 0 => Some(u32::try_from(n).unwrap_or(u32::MAX)),
            _ => Some(DEFAULT_MAX_RESULTS),
        }
    }
}

/// `~/jira.config`
pub fn default_config_path() -> JiraResult<PathBuf> {
    let home_dir = dirs::home_dir()
        .ok_or_else(|| JiraError::ConfigError("Could not find home directory".to_string()))?;
    Ok(home_dir.join(CONFIG_FILE))
}

pub fn resolve_config_path(explicit: Option<&Path>) -> JiraResult<PathBuf> {
    match explicit {
        Some(path) => Ok(path.to_path_buf()),
        None => default_config_path(),
    }
}

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum JiraError {
    #[error("Config file \"{}\" not found", .0.display())]
    ConfigNotFound(PathBuf),

    #[error("Config file \"{}\" missing \"{section}\" section", .path.display())]
    MissingSection { path: PathBuf, section: String },

    #[error(
        "Config file \"{}\" section \"{section}\" missing keys: [{}]",
        .path.display(),
        quoted_list(.keys)
    )]
    MissingKeys {
        path: PathBuf,
        section: String,
        keys: Vec<String>,
    },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Failed to parse config file: {0}")]
    IniParse(#[from] ini::ParseError),

    #[error("{text}")]
    Api { status: u16, text: String },

    #[error("JIRA {0} was not found!")]
    IssueNotFound(String),

    #[error("There was a problem finding user {user}. Error message: {message}.")]
    UserNotFound { user: String, message: String },

    #[error("{0}")]
    CommandFailed(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Request error: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

/// `['A', 'B']` style listing, the way config key errors have always read.
fn quoted_list(items: &[String]) -> String {
    items
        .iter()
        .map(|item| format!("'{}'", item))
        .collect::<Vec<_>>()
        .join(", ")
}

impl JiraError {
    /// The text JIRA sent back for a failed request, or the error's own message.
    pub fn api_text(&self) -> String {
        match self {
            JiraError::Api { text, .. } => text.clone(),
            other => other.to_string(),
        }
    }
}

pub type JiraResult<T> = Result<T, JiraError>;

pub trait ErrorContext<T> {
    fn context(self, msg: &str) -> JiraResult<T>;
    fn with_context<F>(self, f: F) -> JiraResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::error::Error + 'static,
{
    fn context(self, msg: &str) -> JiraResult<T> {
        self.map_err(|e| JiraError::Unknown(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> JiraResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| JiraError::Unknown(format!("{}: {}", f(), e)))
    }
}

impl<T> ErrorContext<T> for Option<T> {
    fn context(self, msg: &str) -> JiraResult<T> {
        self.ok_or_else(|| JiraError::Unknown(msg.to_string()))
    }

    fn with_context<F>(self, f: F) -> JiraResult<T>
    where
        F: FnOnce() -> String,
    {
        self.ok_or_else(|| JiraError::Unknown(f()))
    }
}

#[macro_export]
macro_rules! jira_error {
    ($error_type:ident, $msg:expr) => {
        $crate::error::JiraError::$error_type($msg.to_string())
    };
    ($error_type:ident, $fmt:expr, $($arg:tt)*) => {
        $crate::error::JiraError::$error_type(format!($fmt, $($arg)*))
    };
}

use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub name: Option<String>,
    pub key: Option<String>,
    pub account_id: Option<String>,
    pub display_name: Option<String>,
    pub email_address: Option<String>,
    #[serde(default)]
    pub active: bool,
}

impl User {
    /// The identifier JIRA expects back in `{"name": ...}` payloads.
    pub fn username(&self) -> Option<&str> {
        self.name
            .as_deref()
            .or(self.key.as_deref())
            .or(self.account_id.as_deref())
    }
}

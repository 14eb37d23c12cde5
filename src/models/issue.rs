use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Issue {
    pub id: String,
    pub key: String,
    #[serde(rename = "self")]
    pub self_url: Option<String>,
    pub fields: IssueFields,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct IssueFields {
    #[serde(default)]
    pub summary: String,
    pub description: Option<String>,
    pub status: Option<Status>,
    pub assignee: Option<super::User>,
    #[serde(rename = "issuetype")]
    pub issue_type: Option<IssueType>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Status {
    pub name: String,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct IssueType {
    pub name: String,
}

/// Response body of a successful issue create.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct CreatedIssue {
    pub id: String,
    pub key: String,
    #[serde(rename = "self")]
    pub self_url: Option<String>,
}

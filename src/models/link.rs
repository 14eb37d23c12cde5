use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct IssueLinkType {
    pub id: Option<String>,
    pub name: String,
    pub inward: String,
    pub outward: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueLinkTypes {
    pub issue_link_types: Vec<IssueLinkType>,
}

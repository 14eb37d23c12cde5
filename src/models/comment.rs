use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize)]
pub struct Comment {
    pub id: String,
    pub body: String,
    pub created: Option<String>,
    pub updated: Option<String>,
    pub author: Option<super::User>,
}

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::{json, Value};

use crate::config::JiraConfig;
use crate::constants::{REST_API_PATH, SEARCH_FIELDS, SEARCH_PAGE_SIZE};
use crate::error::{JiraError, JiraResult};
use crate::logging::{log_debug, log_error};
use crate::models::link::IssueLinkTypes;
use crate::models::*;

use super::links::resolve_link;

/// Thin client over the JIRA REST API (v2) using HTTP basic auth.
pub struct JiraClient {
    client: reqwest::Client,
    base_url: String,
    username: String,
    password: String,
}

impl JiraClient {
    pub fn new(base_url: &str, username: &str, password: &str) -> JiraResult<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            username: username.to_string(),
            password: password.to_string(),
        })
    }

    pub fn from_config(config: &JiraConfig) -> JiraResult<Self> {
        Self::new(config.url()?, config.username()?, config.password()?)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Browser URL of an issue.
    pub fn permalink(&self, key: &str) -> String {
        format!("{}/browse/{}", self.base_url, key)
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}/{}/{}", self.base_url, REST_API_PATH, path.trim_start_matches('/'))
    }

    async fn execute(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, &str)],
        body: Option<&Value>,
    ) -> JiraResult<reqwest::Response> {
        log_debug(&format!("{} {}", method, path));

        let mut request = self
            .client
            .request(method.clone(), self.api_url(path))
            .basic_auth(&self.username, Some(&self.password));

        if !query.is_empty() {
            request = request.query(query);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let text = error_text(status, &body);
            log_error(&format!("{} {} failed with {}: {}", method, path, status, text));
            return Err(JiraError::Api {
                status: status.as_u16(),
                text,
            });
        }

        Ok(response)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> JiraResult<T> {
        let response = self.execute(Method::GET, path, query, None).await?;
        Ok(response.json::<T>().await?)
    }

    async fn post_json<T: DeserializeOwned>(&self, path: &str, body: &Value) -> JiraResult<T> {
        let response = self.execute(Method::POST, path, &[], Some(body)).await?;
        Ok(response.json::<T>().await?)
    }

    pub async fn get_issue(&self, key: &str) -> JiraResult<Issue> {
        self.get_json(&format!("issue/{}", key), &[]).await
    }

    pub async fn get_user(&self, username: &str) -> JiraResult<User> {
        self.get_json("user", &[("username", username)]).await
    }

    /// Name of the authenticated user.
    pub async fn current_user(&self) -> JiraResult<String> {
        let user: User = self.get_json("myself", &[]).await?;
        user.username()
            .map(str::to_string)
            .ok_or_else(|| JiraError::Unknown("Current user has no name".to_string()))
    }

    async fn search_page(
        &self,
        jql: &str,
        start_at: u32,
        max_results: u32,
    ) -> JiraResult<SearchResults> {
        let body = json!({
            "jql": jql,
            "startAt": start_at,
            "maxResults": max_results,
            "fields": SEARCH_FIELDS,
        });
        self.post_json("search", &body).await
    }

    /// Run a JQL search. `None` fetches every match, page by page.
    pub async fn search_issues(
        &self,
        jql: &str,
        max_results: Option<u32>,
    ) -> JiraResult<Vec<Issue>> {
        let mut issues = Vec::new();
        let mut start_at = 0;

        loop {
            let remaining = max_results.map(|max| max.saturating_sub(issues.len() as u32));
            if remaining == Some(0) {
                break;
            }
            let page_size = remaining.map_or(SEARCH_PAGE_SIZE, |r| r.min(SEARCH_PAGE_SIZE));

            let page = self.search_page(jql, start_at, page_size).await?;
            let fetched = page.issues.len() as u32;
            issues.extend(page.issues);
            start_at += fetched;

            if fetched == 0 || start_at >= page.total {
                break;
            }
        }

        Ok(issues)
    }

    /// Number of issues matching a JQL query, without fetching them.
    pub async fn count_issues(&self, jql: &str) -> JiraResult<u32> {
        let page = self.search_page(jql, 0, 0).await?;
        Ok(page.total)
    }

    pub async fn add_comment(&self, key: &str, body: &str) -> JiraResult<Comment> {
        self.post_json(&format!("issue/{}/comment", key), &json!({ "body": body }))
            .await
    }

    pub async fn issue_link_types(&self) -> JiraResult<Vec<IssueLinkType>> {
        let data: IssueLinkTypes = self.get_json("issueLinkType", &[]).await?;
        Ok(data.issue_link_types)
    }

    /// Link two issues. `link_type` may be a link type name or one of its
    /// inward/outward descriptions, e.g. "relates to".
    pub async fn create_issue_link(&self, link_type: &str, from: &str, to: &str) -> JiraResult<()> {
        let types = self.issue_link_types().await?;
        let link = resolve_link(&types, link_type, from, to);

        let body = json!({
            "type": { "name": link.type_name },
            "inwardIssue": { "key": link.inward },
            "outwardIssue": { "key": link.outward },
        });
        self.execute(Method::POST, "issueLink", &[], Some(&body)).await?;
        Ok(())
    }

    /// Create an issue from a `fields` object.
    pub async fn create_issue(&self, fields: Value) -> JiraResult<CreatedIssue> {
        self.post_json("issue", &json!({ "fields": fields })).await
    }

    pub async fn project_components(&self, project: &str) -> JiraResult<Vec<Component>> {
        self.get_json(&format!("project/{}/components", project), &[])
            .await
    }

    pub async fn add_watcher(&self, key: &str, username: &str) -> JiraResult<()> {
        self.execute(
            Method::POST,
            &format!("issue/{}/watchers", key),
            &[],
            Some(&json!(username)),
        )
        .await?;
        Ok(())
    }

    pub async fn assign_issue(&self, key: &str, username: &str) -> JiraResult<()> {
        self.execute(
            Method::PUT,
            &format!("issue/{}/assignee", key),
            &[],
            Some(&json!({ "name": username })),
        )
        .await?;
        Ok(())
    }
}

/// Human-readable text for a failed response: JIRA's own messages when the
/// body carries them, else the raw body, else the status line.
pub fn error_text(status: StatusCode, body: &str) -> String {
    if let Some(text) = serde_json::from_str::<ErrorResponse>(body)
        .ok()
        .and_then(|response| response.text())
    {
        return text;
    }

    let trimmed = body.trim();
    if !trimmed.is_empty() {
        return trimmed.to_string();
    }

    status.to_string()
}

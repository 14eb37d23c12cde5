pub const CONFIG_FILE: &str = "jira.config";
pub const CONFIG_SECTION: &str = "jira";
pub const CONFIG_ENV_VAR: &str = "JIRA_CONFIG";

pub const SAMPLE_CONFIG_NAME: &str = "jira.config.example";
pub const SAMPLE_CONFIG: &str = include_str!("../jira.config.example");

pub const REQUIRED_KEYS: [&str; 5] = [
    "JIRA_URL",
    "USERNAME",
    "PASSWORD",
    "DEFAULT_ASSIGNEE",
    "TEST_PROJECT",
];

pub const DEFAULT_LINK_TYPE: &str = "relates to";
pub const DEFAULT_MAX_RESULTS: u32 = 10;
pub const SEARCH_PAGE_SIZE: u32 = 50;

pub const DEFAULT_SUMMARY: &str = "Test {dev_jira_id}: {dev_jira_summary}";
pub const DEFAULT_ISSUE_TYPE: &str = "Story";

pub const REST_API_PATH: &str = "rest/api/2";

// Fields requested for issues returned by search
pub const SEARCH_FIELDS: [&str; 4] = ["summary", "status", "assignee", "issuetype"];

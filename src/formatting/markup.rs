//! Builders for JIRA wiki markup used in automated comments.

use std::env;
use std::fmt::Display;

/// Wrap text in a JIRA code block.
pub fn format_as_code_block(text: &str) -> String {
    format!("{{code:java}}{}{{code}}", text)
}

/// Where an automated update came from: the CI build URL when `BUILD_URL`
/// is set, otherwise the login name of whoever ran it.
pub fn build_source() -> String {
    match env::var("BUILD_URL") {
        Ok(url) => url,
        Err(_) => format!("Manual run by {}", login_name()),
    }
}

fn login_name() -> String {
    ["LOGNAME", "USER", "LNAME", "USERNAME"]
        .iter()
        .find_map(|var| env::var(var).ok().filter(|name| !name.is_empty()))
        .unwrap_or_else(|| "unknown".to_string())
}

/// Prefix a message with an "Automated JIRA Update" banner and its source,
/// plus an optional `h2.` header.
pub fn format_autoupdate_message(body: &str, header: Option<&str>) -> String {
    format_autoupdate_message_from(&build_source(), body, header)
}

pub fn format_autoupdate_message_from(source: &str, body: &str, header: Option<&str>) -> String {
    let mut message = match header {
        Some(header) if !header.is_empty() => format!("h2. {}", header),
        _ => String::new(),
    };
    message.push_str(&format!("\n\nAutomated JIRA Update:\n\n{}\n\n{}", source, body));
    message
}

/// Build a JIRA table: a `||`-delimited header row followed by one
/// `|`-delimited line per data row.
pub fn format_as_jira_table<H, C>(headers: &[H], rows: &[Vec<C>]) -> String
where
    H: AsRef<str>,
    C: Display,
{
    let header_cells: Vec<&str> = headers.iter().map(|h| h.as_ref()).collect();
    let mut lines = vec![format!("||{}||", header_cells.join("||"))];

    for row in rows {
        let cells: Vec<String> = row.iter().map(|cell| cell.to_string()).collect();
        lines.push(format!("|{}|", cells.join("|")));
    }

    lines.join("\n")
}

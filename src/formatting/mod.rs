pub mod issues;
pub mod markup;

pub use issues::{
    format_search_header, format_search_line, print_created_issue, print_search_results,
};
pub use markup::{
    build_source, format_as_code_block, format_as_jira_table, format_autoupdate_message,
    format_autoupdate_message_from,
};

pub mod comment;
pub mod component;
pub mod issue;
pub mod link;
pub mod rest;
pub mod user;

// Re-export commonly used types
pub use comment::Comment;
pub use component::Component;
pub use issue::{CreatedIssue, Issue, IssueFields, IssueType, Status};
pub use link::IssueLinkType;
pub use rest::{ErrorResponse, SearchResults};
pub use user::User;

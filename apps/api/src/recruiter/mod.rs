// Recruiter-facing screen: filter and browse candidates, manage job
// descriptions, view bookmarks.

pub mod dashboard;
pub mod filter;
pub mod handlers;
pub mod jobs;
pub mod models;

// Candidate-facing screen: upload a resume, paste a job description, run the
// simulated analysis, browse resume history.

pub mod analysis;
pub mod handlers;
pub mod models;
pub mod upload;
pub mod workflow;

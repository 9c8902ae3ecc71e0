use std::sync::Arc;

use crate::candidate::analysis::{MockAnalyzer, ResumeAnalyzer};
use crate::candidate::upload::UploadPolicy;
use crate::candidate::workflow::CandidateScreen;
use crate::config::Config;
use crate::recruiter::dashboard::RecruiterScreen;
use crate::session::SessionStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub upload_policy: Arc<UploadPolicy>,
    /// Pluggable analyzer. Default: MockAnalyzer.
    pub analyzer: Arc<dyn ResumeAnalyzer>,
    pub candidate_sessions: Arc<SessionStore<CandidateScreen>>,
    pub recruiter_sessions: Arc<SessionStore<RecruiterScreen>>,
}

impl AppState {
    pub fn new(config: Config, analyzer: Arc<dyn ResumeAnalyzer>) -> Self {
        Self {
            upload_policy: Arc::new(UploadPolicy::new(config.max_upload_bytes)),
            analyzer,
            candidate_sessions: Arc::new(SessionStore::new("candidate")),
            recruiter_sessions: Arc::new(SessionStore::new("recruiter")),
            config,
        }
    }

    pub fn with_mock_analyzer(config: Config) -> Self {
        Self::new(config, Arc::new(MockAnalyzer))
    }
}

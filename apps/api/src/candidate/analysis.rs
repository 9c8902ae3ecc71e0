//! Resume analysis: a pluggable, trait-based analyzer.
//!
//! Default: `MockAnalyzer`, which ignores its inputs and returns the fixed
//! fixture. `AppState` holds an `Arc<dyn ResumeAnalyzer>`.

use async_trait::async_trait;

use crate::candidate::models::{analysis_fixture, AnalysisResult};
use crate::candidate::upload::FileRef;
use crate::errors::AppError;

#[async_trait]
pub trait ResumeAnalyzer: Send + Sync {
    async fn analyze(
        &self,
        file: &FileRef,
        job_description: &str,
    ) -> Result<AnalysisResult, AppError>;
}

/// Deterministic stand-in. Scoring is intentionally not implemented.
pub struct MockAnalyzer;

#[async_trait]
impl ResumeAnalyzer for MockAnalyzer {
    async fn analyze(
        &self,
        _file: &FileRef,
        _job_description: &str,
    ) -> Result<AnalysisResult, AppError> {
        Ok(analysis_fixture())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::candidate::upload::PDF_MIME;

    #[tokio::test]
    async fn test_mock_ignores_inputs() {
        let a = FileRef {
            filename: "a.pdf".into(),
            content_type: PDF_MIME.into(),
            size: 1,
        };
        let b = FileRef {
            filename: "b.pdf".into(),
            content_type: PDF_MIME.into(),
            size: 9000,
        };
        let first = MockAnalyzer.analyze(&a, "Rust engineer").await.unwrap();
        let second = MockAnalyzer.analyze(&b, "Chef").await.unwrap();
        assert_eq!(first, second);
        assert_eq!(first, analysis_fixture());
    }
}

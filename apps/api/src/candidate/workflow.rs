//! The candidate analysis screen: file + job description in, mock analysis out.

use std::sync::{Arc, Weak};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;
use tokio::task::AbortHandle;
use tracing::{debug, info, warn};

use crate::candidate::analysis::ResumeAnalyzer;
use crate::candidate::models::{seed_resume_versions, AnalysisResult, ResumeVersion};
use crate::candidate::upload::{FileRef, UploadPolicy, UploadSource};
use crate::errors::AppError;
use crate::notify::{Inbox, Notification};
use crate::screen::{BadgeTier, Theme};

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CandidateTab {
    #[default]
    Analyzer,
    History,
}

/// Inputs captured when a run starts. The result is only applied if the
/// screen is still on the same run when the timer fires.
#[derive(Debug, Clone)]
pub struct AnalysisTicket {
    pub run_id: u64,
    pub file: FileRef,
    pub job_description: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateSnapshot {
    pub current_file: Option<FileRef>,
    pub job_description: String,
    pub is_analyzing: bool,
    pub can_analyze: bool,
    pub analysis_result: Option<AnalysisResult>,
    pub result_badge: Option<BadgeTier>,
    pub show_ai_overview: bool,
    pub is_drag_active: bool,
    pub tab: CandidateTab,
    pub theme: Theme,
}

#[derive(Debug, Default)]
pub struct CandidateScreen {
    current_file: Option<FileRef>,
    job_description: String,
    busy: bool,
    run_id: u64,
    result: Option<AnalysisResult>,
    show_overview: bool,
    drag_active: bool,
    tab: CandidateTab,
    theme: Theme,
    history: Vec<ResumeVersion>,
    inbox: Inbox,
    pending: Option<AbortHandle>,
}

impl CandidateScreen {
    pub fn new() -> Self {
        let mut screen = Self::default();
        screen.history = seed_resume_versions();
        screen
    }

    // ── file intake ─────────────────────────────────────────────────────────

    /// Runs the acceptance check. On rejection the current file is untouched.
    pub fn accept_file(
        &mut self,
        policy: &UploadPolicy,
        source: UploadSource,
        file: FileRef,
    ) -> Result<Notification, AppError> {
        if let Err(e) = policy.check(&file) {
            warn!(?source, filename = %file.filename, "Upload rejected: {e}");
            self.inbox.push(e.notification());
            return Err(e);
        }

        info!(?source, filename = %file.filename, size = file.size, "Upload accepted");
        let notification = Notification::info(
            "File uploaded successfully",
            format!("{} is ready for analysis", file.filename),
        );
        self.current_file = Some(file);
        self.inbox.push(notification.clone());
        Ok(notification)
    }

    pub fn set_drag_active(&mut self, active: bool) {
        self.drag_active = active;
    }

    /// A drop always ends the drag. An empty drop changes nothing else.
    pub fn drop_file(
        &mut self,
        policy: &UploadPolicy,
        file: Option<FileRef>,
    ) -> Result<Option<Notification>, AppError> {
        self.drag_active = false;
        match file {
            Some(file) => self.accept_file(policy, UploadSource::Drop, file).map(Some),
            None => Ok(None),
        }
    }

    /// Queues the toast for an upload that failed before it reached the
    /// acceptance check, and hands the error back to the caller.
    pub fn reject_upload(&mut self, source: UploadSource, e: AppError) -> AppError {
        warn!(?source, "Upload rejected: {e}");
        if source == UploadSource::Drop {
            self.drag_active = false;
        }
        self.inbox.push(e.notification());
        e
    }

    pub fn set_job_description(&mut self, text: String) {
        self.job_description = text;
    }

    // ── analysis ────────────────────────────────────────────────────────────

    fn has_inputs(&self) -> bool {
        self.current_file.is_some() && !self.job_description.trim().is_empty()
    }

    /// Whether the analyze trigger is enabled.
    pub fn can_analyze(&self) -> bool {
        self.has_inputs() && !self.busy
    }

    #[cfg(test)]
    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn begin_analysis(&mut self) -> Result<(AnalysisTicket, Notification), AppError> {
        if self.busy {
            return Err(AppError::AnalysisInProgress);
        }
        let file = match (&self.current_file, self.has_inputs()) {
            (Some(file), true) => file.clone(),
            _ => {
                let e = AppError::MissingFields(
                    "Please upload a resume and enter a job description".to_string(),
                );
                self.inbox.push(e.notification());
                return Err(e);
            }
        };

        self.busy = true;
        self.run_id += 1;
        self.show_overview = false;
        info!(run_id = self.run_id, filename = %file.filename, "Analysis started");

        let notification = Notification::info(
            "Analyzing resume",
            format!("Matching {} against the job description", file.filename),
        );
        self.inbox.push(notification.clone());
        Ok((
            AnalysisTicket {
                run_id: self.run_id,
                file,
                job_description: self.job_description.clone(),
            },
            notification,
        ))
    }

    fn set_pending(&mut self, handle: AbortHandle) {
        self.pending = Some(handle);
    }

    /// Applies a finished run. Returns false if the run is stale.
    pub fn complete_analysis(
        &mut self,
        run_id: u64,
        outcome: Result<AnalysisResult, AppError>,
    ) -> bool {
        if !self.busy || run_id != self.run_id {
            debug!(run_id, current = self.run_id, "Ignoring stale analysis result");
            return false;
        }
        self.busy = false;
        self.pending = None;

        match outcome {
            Ok(result) => {
                info!(run_id, score = result.overall_score, "Analysis complete");
                self.result = Some(result);
                self.inbox.push(Notification::info(
                    "Analysis complete!",
                    "Your resume has been analyzed against the job description",
                ));
            }
            Err(e) => {
                warn!(run_id, "Analysis failed: {e}");
                self.inbox.push(e.notification());
            }
        }
        true
    }

    /// Reveals the suggestion panel for the current result. Recomputes nothing.
    pub fn reveal_overview(&mut self) -> Result<Notification, AppError> {
        if self.result.is_none() {
            return Err(AppError::NoAnalysisResult);
        }
        self.show_overview = true;
        let notification =
            Notification::info("AI Overview generated", "Detailed suggestions are now available");
        self.inbox.push(notification.clone());
        Ok(notification)
    }

    // ── chrome ──────────────────────────────────────────────────────────────

    pub fn set_tab(&mut self, tab: CandidateTab) {
        self.tab = tab;
    }

    pub fn toggle_theme(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        self.theme
    }

    pub fn history(&self) -> &[ResumeVersion] {
        &self.history
    }

    pub fn drain_notifications(&mut self) -> Vec<Notification> {
        self.inbox.drain()
    }

    pub fn snapshot(&self) -> CandidateSnapshot {
        CandidateSnapshot {
            current_file: self.current_file.clone(),
            job_description: self.job_description.clone(),
            is_analyzing: self.busy,
            can_analyze: self.can_analyze(),
            analysis_result: self.result.clone(),
            result_badge: self.result.as_ref().map(AnalysisResult::badge),
            show_ai_overview: self.show_overview,
            is_drag_active: self.drag_active,
            tab: self.tab,
            theme: self.theme,
        }
    }
}

impl Drop for CandidateScreen {
    fn drop(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}

/// Schedules the delayed completion for `ticket`.
///
/// The task holds only a weak reference; if the screen has been disposed by
/// the time the delay elapses the result is discarded. Must be called with the
/// screen already locked by the caller, who passes the guard in.
pub fn spawn_analysis(
    screen: &Arc<Mutex<CandidateScreen>>,
    locked: &mut CandidateScreen,
    ticket: AnalysisTicket,
    analyzer: Arc<dyn ResumeAnalyzer>,
    delay: Duration,
) {
    let weak: Weak<Mutex<CandidateScreen>> = Arc::downgrade(screen);
    let task = tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        let outcome = analyzer
            .analyze(&ticket.file, &ticket.job_description)
            .await;
        match weak.upgrade() {
            Some(screen) => {
                screen.lock().await.complete_analysis(ticket.run_id, outcome);
            }
            None => debug!(run_id = ticket.run_id, "Screen disposed; dropping analysis result"),
        }
    });
    locked.set_pending(task.abort_handle());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::candidate::analysis::MockAnalyzer;
    use crate::candidate::models::analysis_fixture;
    use crate::candidate::upload::{DOCX_MIME, PDF_MIME};
    use crate::notify::Variant;

    const TEN_MIB: u64 = 10 * 1024 * 1024;

    fn policy() -> UploadPolicy {
        UploadPolicy::new(TEN_MIB)
    }

    fn pdf(name: &str, size: u64) -> FileRef {
        FileRef {
            filename: name.into(),
            content_type: PDF_MIME.into(),
            size,
        }
    }

    fn ready_screen() -> CandidateScreen {
        let mut s = CandidateScreen::new();
        s.accept_file(&policy(), UploadSource::Browse, pdf("cv.pdf", 100))
            .unwrap();
        s.set_job_description("Senior Rust engineer".into());
        s
    }

    #[test]
    fn test_rejected_type_stores_nothing() {
        let mut s = CandidateScreen::new();
        let bad = FileRef {
            filename: "notes.txt".into(),
            content_type: "text/plain".into(),
            size: 10,
        };
        assert!(s.accept_file(&policy(), UploadSource::Browse, bad).is_err());
        assert!(s.snapshot().current_file.is_none());
        let toasts = s.drain_notifications();
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts[0].title, "Invalid file type");
        assert_eq!(toasts[0].variant, Variant::Destructive);
    }

    #[test]
    fn test_rejection_keeps_previous_file() {
        let mut s = ready_screen();
        let err = s
            .accept_file(&policy(), UploadSource::Browse, pdf("huge.pdf", TEN_MIB + 1))
            .unwrap_err();
        assert!(matches!(err, AppError::FileTooLarge { .. }));
        assert_eq!(s.snapshot().current_file.unwrap().filename, "cv.pdf");
    }

    #[test]
    fn test_accepted_file_replaces_current() {
        let mut s = ready_screen();
        let docx = FileRef {
            filename: "cv2.docx".into(),
            content_type: DOCX_MIME.into(),
            size: TEN_MIB,
        };
        let n = s.accept_file(&policy(), UploadSource::Browse, docx).unwrap();
        assert!(n.description.contains("cv2.docx"));
        assert_eq!(s.snapshot().current_file.unwrap().filename, "cv2.docx");
    }

    #[test]
    fn test_drop_and_browse_behave_identically() {
        let inputs = vec![
            pdf("ok.pdf", 5),
            pdf("big.pdf", TEN_MIB + 1),
            FileRef {
                filename: "x.png".into(),
                content_type: "image/png".into(),
                size: 5,
            },
        ];
        for file in inputs {
            let mut browse = CandidateScreen::new();
            let mut dropped = CandidateScreen::new();
            dropped.set_drag_active(true);

            let a = browse.accept_file(&policy(), UploadSource::Browse, file.clone());
            let b = dropped.drop_file(&policy(), Some(file));

            assert_eq!(a.is_ok(), b.is_ok());
            assert_eq!(
                browse.snapshot().current_file,
                dropped.snapshot().current_file
            );
            assert!(!dropped.snapshot().is_drag_active);
        }
    }

    #[test]
    fn test_empty_drop_only_clears_drag() {
        let mut s = CandidateScreen::new();
        s.set_drag_active(true);
        assert!(s.drop_file(&policy(), None).unwrap().is_none());
        assert!(!s.snapshot().is_drag_active);
        assert_eq!(s.drain_notifications().len(), 0);
    }

    #[test]
    fn test_unreadable_drop_queues_toast_and_ends_drag() {
        let mut s = ready_screen();
        s.drain_notifications();
        s.set_drag_active(true);
        let e = s.reject_upload(
            UploadSource::Drop,
            AppError::FileTooLarge {
                size: TEN_MIB + 1,
                limit: TEN_MIB,
            },
        );
        assert!(matches!(e, AppError::FileTooLarge { .. }));
        assert!(!s.snapshot().is_drag_active);
        assert_eq!(s.snapshot().current_file.unwrap().filename, "cv.pdf");
        let toasts = s.drain_notifications();
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts[0].title, "File too large");
    }

    #[test]
    fn test_trigger_gating() {
        let mut s = CandidateScreen::new();
        assert!(!s.can_analyze());

        s.set_job_description("Backend role".into());
        assert!(!s.can_analyze(), "no file yet");

        let mut s = CandidateScreen::new();
        s.accept_file(&policy(), UploadSource::Browse, pdf("cv.pdf", 1))
            .unwrap();
        assert!(!s.can_analyze(), "no job description yet");
        s.set_job_description("   ".into());
        assert!(!s.can_analyze(), "whitespace is not a job description");

        s.set_job_description("Backend role".into());
        assert!(s.can_analyze());
    }

    #[test]
    fn test_begin_without_inputs_is_rejected() {
        let mut s = CandidateScreen::new();
        let err = s.begin_analysis().unwrap_err();
        assert!(matches!(err, AppError::MissingFields(_)));
        assert!(!s.is_busy());
        assert_eq!(s.drain_notifications()[0].title, "Missing information");
    }

    #[test]
    fn test_second_submission_while_busy_is_rejected() {
        let mut s = ready_screen();
        s.begin_analysis().unwrap();
        assert!(!s.can_analyze());
        assert!(matches!(
            s.begin_analysis(),
            Err(AppError::AnalysisInProgress)
        ));
    }

    #[test]
    fn test_stale_completion_is_ignored() {
        let mut s = ready_screen();
        let (ticket, _) = s.begin_analysis().unwrap();
        assert!(!s.complete_analysis(ticket.run_id + 1, Ok(analysis_fixture())));
        assert!(s.is_busy());
        assert!(s.complete_analysis(ticket.run_id, Ok(analysis_fixture())));
        assert!(!s.complete_analysis(ticket.run_id, Ok(analysis_fixture())));
    }

    #[test]
    fn test_overview_requires_result() {
        let mut s = ready_screen();
        assert!(matches!(
            s.reveal_overview(),
            Err(AppError::NoAnalysisResult)
        ));
        let (ticket, _) = s.begin_analysis().unwrap();
        s.complete_analysis(ticket.run_id, Ok(analysis_fixture()));
        s.reveal_overview().unwrap();
        assert!(s.snapshot().show_ai_overview);

        // a new run hides the panel again until requested
        s.begin_analysis().unwrap();
        assert!(!s.snapshot().show_ai_overview);
    }

    #[tokio::test(start_paused = true)]
    async fn test_analysis_completes_after_delay() {
        let screen = Arc::new(Mutex::new(ready_screen()));
        {
            let mut guard = screen.lock().await;
            let (ticket, _) = guard.begin_analysis().unwrap();
            spawn_analysis(
                &screen,
                &mut guard,
                ticket,
                Arc::new(MockAnalyzer),
                Duration::from_secs(3),
            );
        }

        tokio::time::sleep(Duration::from_millis(2900)).await;
        assert!(screen.lock().await.is_busy());

        tokio::time::sleep(Duration::from_millis(200)).await;
        let mut guard = screen.lock().await;
        let snap = guard.snapshot();
        assert!(!snap.is_analyzing);
        assert_eq!(snap.analysis_result, Some(analysis_fixture()));
        assert_eq!(snap.result_badge, Some(BadgeTier::Default));
        let titles: Vec<_> = guard
            .drain_notifications()
            .into_iter()
            .map(|n| n.title)
            .collect();
        assert_eq!(titles.last().map(String::as_str), Some("Analysis complete!"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_disposed_screen_drops_completion() {
        let screen = Arc::new(Mutex::new(ready_screen()));
        let weak = Arc::downgrade(&screen);
        {
            let mut guard = screen.lock().await;
            let (ticket, _) = guard.begin_analysis().unwrap();
            spawn_analysis(
                &screen,
                &mut guard,
                ticket,
                Arc::new(MockAnalyzer),
                Duration::from_secs(3),
            );
        }
        drop(screen);
        assert!(weak.upgrade().is_none());

        // letting the timer elapse must not panic or resurrect anything
        tokio::time::sleep(Duration::from_secs(5)).await;
        assert!(weak.upgrade().is_none());
    }
}

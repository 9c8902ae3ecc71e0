//! The recruiter screen: job descriptions, candidate filters, bookmarks.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::errors::AppError;
use crate::notify::{Inbox, Notification};
use crate::recruiter::filter::{CandidateFilter, FilterPatch};
use crate::recruiter::jobs::{JobBoard, JobDraft};
use crate::recruiter::models::{seed_candidates, seed_jobs, Candidate, JobDescription};
use crate::screen::{recruiter_badge, BadgeTier, Theme};

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RecruiterTab {
    #[default]
    Candidates,
    Jobs,
    Bookmarks,
}

/// A candidate row as the list renders it.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateCard {
    #[serde(flatten)]
    pub candidate: Candidate,
    pub badge: BadgeTier,
}

impl From<&Candidate> for CandidateCard {
    fn from(candidate: &Candidate) -> Self {
        Self {
            candidate: candidate.clone(),
            badge: recruiter_badge(candidate.score),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateView {
    pub filters: CandidateFilter,
    pub total: usize,
    pub candidates: Vec<CandidateCard>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecruiterSnapshot {
    pub tab: RecruiterTab,
    pub theme: Theme,
    pub filters: CandidateFilter,
    pub job_count: usize,
    pub candidate_count: usize,
    pub dialog_open: bool,
    pub draft: JobDraft,
}

/// Per-candidate stub actions. None of them change candidate state.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CandidateAction {
    Bookmark,
    Download,
    Preview,
}

#[derive(Debug)]
pub struct RecruiterScreen {
    board: JobBoard,
    candidates: Vec<Candidate>,
    filter: CandidateFilter,
    tab: RecruiterTab,
    theme: Theme,
    dialog_open: bool,
    draft: JobDraft,
    inbox: Inbox,
}

impl RecruiterScreen {
    pub fn new(default_limit: usize) -> Self {
        Self::with_data(seed_jobs(), seed_candidates(), default_limit)
    }

    pub fn with_data(
        jobs: Vec<JobDescription>,
        candidates: Vec<Candidate>,
        default_limit: usize,
    ) -> Self {
        Self {
            board: JobBoard::new(jobs),
            candidates,
            filter: CandidateFilter::new(default_limit),
            tab: RecruiterTab::default(),
            theme: Theme::default(),
            dialog_open: false,
            draft: JobDraft::default(),
            inbox: Inbox::default(),
        }
    }

    // ── candidates ──────────────────────────────────────────────────────────

    pub fn filter(&self) -> &CandidateFilter {
        &self.filter
    }

    pub fn update_filter(&mut self, patch: FilterPatch) -> &CandidateFilter {
        patch.apply_to(&mut self.filter);
        &self.filter
    }

    /// Derives the list from `filter`. Stored filters are not modified.
    pub fn view(&self, filter: &CandidateFilter) -> CandidateView {
        let candidates: Vec<CandidateCard> = filter
            .apply(&self.candidates)
            .into_iter()
            .map(CandidateCard::from)
            .collect();
        CandidateView {
            filters: filter.clone(),
            total: candidates.len(),
            candidates,
        }
    }

    pub fn bookmarked(&self) -> Vec<CandidateCard> {
        self.candidates
            .iter()
            .filter(|c| c.is_bookmarked)
            .map(CandidateCard::from)
            .collect()
    }

    /// Acknowledges a per-candidate action. Bookmark state is not persisted
    /// here, so the record is left untouched.
    pub fn candidate_action(
        &mut self,
        candidate_id: &str,
        action: CandidateAction,
    ) -> Result<Notification, AppError> {
        let candidate = self
            .candidates
            .iter()
            .find(|c| c.id == candidate_id)
            .ok_or_else(|| AppError::NotFound(format!("Candidate {candidate_id} not found")))?;

        let notification = match action {
            CandidateAction::Bookmark => Notification::info(
                "Bookmark updated",
                "Candidate bookmark status has been updated",
            ),
            CandidateAction::Download => Notification::info(
                "Download started",
                format!("Downloading {}", candidate.resume_filename),
            ),
            CandidateAction::Preview => Notification::info(
                "Opening preview",
                format!("Previewing {}", candidate.resume_filename),
            ),
        };
        info!(candidate = %candidate.id, ?action, "Candidate action acknowledged");
        self.inbox.push(notification.clone());
        Ok(notification)
    }

    // ── job descriptions ────────────────────────────────────────────────────

    pub fn jobs(&self) -> &[JobDescription] {
        self.board.list()
    }

    pub fn set_dialog_open(&mut self, open: bool) {
        self.dialog_open = open;
    }

    pub fn update_draft(&mut self, draft: JobDraft) {
        self.draft = draft;
    }

    /// Creates a job from `draft` if given, otherwise from the dialog draft.
    /// On success the dialog closes and its draft is cleared.
    pub fn add_job(
        &mut self,
        draft: Option<JobDraft>,
    ) -> Result<(JobDescription, Notification), AppError> {
        if let Some(draft) = draft {
            self.draft = draft;
        }
        let job = match self.board.create(&self.draft, Utc::now()) {
            Ok(job) => job.clone(),
            Err(e) => {
                warn!("Job description rejected: {e}");
                self.inbox.push(e.notification());
                return Err(e);
            }
        };

        self.draft = JobDraft::default();
        self.dialog_open = false;
        let notification = Notification::info(
            "Job description added",
            "New job description has been created successfully",
        );
        self.inbox.push(notification.clone());
        Ok((job, notification))
    }

    /// Queues the toast for a job submission that could not be read.
    pub fn reject_job(&mut self, e: AppError) -> AppError {
        warn!("Job description rejected: {e}");
        self.inbox.push(e.notification());
        e
    }

    pub fn delete_job(&mut self, id: &str) -> Result<Notification, AppError> {
        if let Err(e) = self.board.delete(id) {
            self.inbox.push(e.notification());
            return Err(e);
        }
        let notification =
            Notification::info("Job description deleted", "Job description has been removed");
        self.inbox.push(notification.clone());
        Ok(notification)
    }

    // ── chrome ──────────────────────────────────────────────────────────────

    pub fn set_tab(&mut self, tab: RecruiterTab) {
        self.tab = tab;
    }

    pub fn toggle_theme(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        self.theme
    }

    pub fn drain_notifications(&mut self) -> Vec<Notification> {
        self.inbox.drain()
    }

    pub fn snapshot(&self) -> RecruiterSnapshot {
        RecruiterSnapshot {
            tab: self.tab,
            theme: self.theme,
            filters: self.filter.clone(),
            job_count: self.board.list().len(),
            candidate_count: self.candidates.len(),
            dialog_open: self.dialog_open,
            draft: self.draft.clone(),
        }
    }
}

//! Axum route handlers for the recruiter screen.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::notify::Notification;
use crate::recruiter::dashboard::{
    CandidateAction, CandidateCard, CandidateView, RecruiterScreen, RecruiterSnapshot,
    RecruiterTab,
};
use crate::recruiter::filter::{CandidateFilter, FilterPatch};
use crate::recruiter::jobs::JobDraft;
use crate::recruiter::models::JobDescription;
use crate::screen::ThemeResponse;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponse {
    pub session_id: Uuid,
    pub screen: RecruiterSnapshot,
}

#[derive(Debug, Serialize)]
pub struct JobCreatedResponse {
    pub job: JobDescription,
    pub notification: Notification,
}

#[derive(Debug, Serialize)]
pub struct ActionResponse {
    pub notification: Notification,
}

#[derive(Debug, Deserialize)]
pub struct DialogRequest {
    pub open: bool,
}

#[derive(Debug, Deserialize)]
pub struct TabRequest {
    pub tab: RecruiterTab,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/recruiter/sessions
pub async fn handle_open(
    State(state): State<AppState>,
) -> (StatusCode, Json<SessionResponse>) {
    let (session_id, screen) = state
        .recruiter_sessions
        .open(RecruiterScreen::new(state.config.default_result_cap))
        .await;
    let screen = screen.lock().await.snapshot();
    (
        StatusCode::CREATED,
        Json(SessionResponse { session_id, screen }),
    )
}

/// GET /api/v1/recruiter/sessions/:id
pub async fn handle_snapshot(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<RecruiterSnapshot>, AppError> {
    let screen = state.recruiter_sessions.get(id).await?;
    let snapshot = screen.lock().await.snapshot();
    Ok(Json(snapshot))
}

/// DELETE /api/v1/recruiter/sessions/:id
pub async fn handle_dispose(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    state.recruiter_sessions.dispose(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/recruiter/sessions/:id/candidates
///
/// Query parameters override the stored filters for this read only.
pub async fn handle_candidates(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(overrides): Query<FilterPatch>,
) -> Result<Json<CandidateView>, AppError> {
    let screen = state.recruiter_sessions.get(id).await?;
    let screen = screen.lock().await;
    let view = if overrides.is_empty() {
        screen.view(screen.filter())
    } else {
        let mut filter: CandidateFilter = screen.filter().clone();
        overrides.apply_to(&mut filter);
        screen.view(&filter)
    };
    Ok(Json(view))
}

/// PATCH /api/v1/recruiter/sessions/:id/filters
pub async fn handle_filters(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(patch): Json<FilterPatch>,
) -> Result<Json<CandidateView>, AppError> {
    let screen = state.recruiter_sessions.get(id).await?;
    let mut screen = screen.lock().await;
    screen.update_filter(patch);
    Ok(Json(screen.view(screen.filter())))
}

/// GET /api/v1/recruiter/sessions/:id/bookmarks
pub async fn handle_bookmarks(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<CandidateCard>>, AppError> {
    let screen = state.recruiter_sessions.get(id).await?;
    let bookmarked = screen.lock().await.bookmarked();
    Ok(Json(bookmarked))
}

/// POST /api/v1/recruiter/sessions/:id/candidates/:candidate_id/:action
pub async fn handle_candidate_action(
    State(state): State<AppState>,
    Path((id, candidate_id, action)): Path<(Uuid, String, CandidateAction)>,
) -> Result<Json<ActionResponse>, AppError> {
    let screen = state.recruiter_sessions.get(id).await?;
    let notification = screen
        .lock()
        .await
        .candidate_action(&candidate_id, action)?;
    Ok(Json(ActionResponse { notification }))
}

/// GET /api/v1/recruiter/sessions/:id/jobs
pub async fn handle_list_jobs(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<JobDescription>>, AppError> {
    let screen = state.recruiter_sessions.get(id).await?;
    let jobs = screen.lock().await.jobs().to_vec();
    Ok(Json(jobs))
}

/// POST /api/v1/recruiter/sessions/:id/jobs
///
/// With a body, creates from that draft; with an empty body, submits the
/// dialog's current draft. A body that is not a draft is rejected and the
/// dialog draft is left alone.
pub async fn handle_add_job(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    body: Bytes,
) -> Result<(StatusCode, Json<JobCreatedResponse>), AppError> {
    let screen = state.recruiter_sessions.get(id).await?;
    let mut screen = screen.lock().await;
    let draft = parse_draft(&body).map_err(|e| screen.reject_job(e))?;
    let (job, notification) = screen.add_job(draft)?;
    Ok((
        StatusCode::CREATED,
        Json(JobCreatedResponse { job, notification }),
    ))
}

fn parse_draft(body: &[u8]) -> Result<Option<JobDraft>, AppError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(None);
    }
    serde_json::from_slice(body)
        .map(Some)
        .map_err(|e| AppError::Validation(format!("Malformed job description: {e}")))
}

/// DELETE /api/v1/recruiter/sessions/:id/jobs/:job_id
pub async fn handle_delete_job(
    State(state): State<AppState>,
    Path((id, job_id)): Path<(Uuid, String)>,
) -> Result<Json<ActionResponse>, AppError> {
    let screen = state.recruiter_sessions.get(id).await?;
    let notification = screen.lock().await.delete_job(&job_id)?;
    Ok(Json(ActionResponse { notification }))
}

/// PATCH /api/v1/recruiter/sessions/:id/jobs/draft
pub async fn handle_draft(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(draft): Json<JobDraft>,
) -> Result<Json<RecruiterSnapshot>, AppError> {
    let screen = state.recruiter_sessions.get(id).await?;
    let mut screen = screen.lock().await;
    screen.update_draft(draft);
    Ok(Json(screen.snapshot()))
}

/// POST /api/v1/recruiter/sessions/:id/jobs/dialog
pub async fn handle_dialog(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<DialogRequest>,
) -> Result<Json<RecruiterSnapshot>, AppError> {
    let screen = state.recruiter_sessions.get(id).await?;
    let mut screen = screen.lock().await;
    screen.set_dialog_open(req.open);
    Ok(Json(screen.snapshot()))
}

/// PUT /api/v1/recruiter/sessions/:id/tab
pub async fn handle_tab(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<TabRequest>,
) -> Result<Json<RecruiterSnapshot>, AppError> {
    let screen = state.recruiter_sessions.get(id).await?;
    let mut screen = screen.lock().await;
    screen.set_tab(req.tab);
    Ok(Json(screen.snapshot()))
}

/// POST /api/v1/recruiter/sessions/:id/theme
pub async fn handle_theme(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ThemeResponse>, AppError> {
    let screen = state.recruiter_sessions.get(id).await?;
    let theme = screen.lock().await.toggle_theme();
    Ok(Json(ThemeResponse { theme }))
}

/// POST /api/v1/recruiter/sessions/:id/logout
pub async fn handle_logout(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ActionResponse>, AppError> {
    state.recruiter_sessions.dispose(id).await?;
    Ok(Json(ActionResponse {
        notification: Notification::logged_out(),
    }))
}

/// GET /api/v1/recruiter/sessions/:id/notifications
pub async fn handle_notifications(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<Notification>>, AppError> {
    let screen = state.recruiter_sessions.get(id).await?;
    let drained = screen.lock().await.drain_notifications();
    Ok(Json(drained))
}

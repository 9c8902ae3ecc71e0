//! Axum route handlers for the candidate screen.

use axum::{
    extract::{multipart::MultipartError, Multipart, Path, State},
    http::StatusCode,
    Json,
};
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::candidate::models::ResumeVersion;
use crate::candidate::upload::{FileRef, UploadSource};
use crate::candidate::workflow::{spawn_analysis, CandidateScreen, CandidateSnapshot, CandidateTab};
use crate::errors::AppError;
use crate::notify::Notification;
use crate::screen::{candidate_badge, BadgeTier, ThemeResponse};
use crate::state::AppState;

/// Multipart framing allowance on top of the file ceiling.
pub const MULTIPART_OVERHEAD_BYTES: u64 = 1024 * 1024;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponse {
    pub session_id: Uuid,
    pub screen: CandidateSnapshot,
}

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub file: Option<FileRef>,
    pub notification: Option<Notification>,
}

#[derive(Debug, Deserialize)]
pub struct DragRequest {
    pub active: bool,
}

#[derive(Debug, Deserialize)]
pub struct JobDescriptionRequest {
    pub text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeResponse {
    pub run_id: u64,
    pub notification: Notification,
    pub screen: CandidateSnapshot,
}

#[derive(Debug, Serialize)]
pub struct OverviewResponse {
    pub suggestions: Vec<String>,
    pub notification: Notification,
}

#[derive(Debug, Serialize)]
pub struct HistoryEntry {
    #[serde(flatten)]
    pub version: ResumeVersion,
    pub badge: BadgeTier,
}

#[derive(Debug, Deserialize)]
pub struct TabRequest {
    pub tab: CandidateTab,
}

#[derive(Debug, Serialize)]
pub struct LogoutResponse {
    pub notification: Notification,
}

// ────────────────────────────────────────────────────────────────────────────
// Multipart intake
// ────────────────────────────────────────────────────────────────────────────

/// Pulls the `file` part's declared metadata out of the form. The bytes are
/// only counted. Returns `None` when the form carries no `file` part.
async fn read_file_part(
    mut multipart: Multipart,
    body_limit: u64,
    max_upload_bytes: u64,
) -> Result<Option<FileRef>, AppError> {
    let too_large = || AppError::FileTooLarge {
        size: body_limit + 1,
        limit: max_upload_bytes,
    };

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => return Ok(None),
            Err(e) if over_limit(&e) => return Err(too_large()),
            Err(e) => return Err(invalid_form(e)),
        };
        if field.name() != Some("file") {
            continue;
        }
        let filename = field.file_name().unwrap_or("resume").to_string();
        let content_type = field.content_type().unwrap_or_default().to_string();

        let data: Result<Bytes, MultipartError> = field.bytes().await;
        let size = match data {
            Ok(data) => data.len() as u64,
            // Stream cut off at the body limit; the real size is at least that.
            Err(e) if over_limit(&e) => body_limit + 1,
            Err(e) => return Err(invalid_form(e)),
        };
        return Ok(Some(FileRef {
            filename,
            content_type,
            size,
        }));
    }
}

fn over_limit(e: &MultipartError) -> bool {
    e.status() == StatusCode::PAYLOAD_TOO_LARGE
}

fn invalid_form(e: MultipartError) -> AppError {
    AppError::Validation(format!("Malformed upload: {}", e.body_text()))
}

fn body_limit(state: &AppState) -> u64 {
    state.config.max_upload_bytes + MULTIPART_OVERHEAD_BYTES
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/candidate/sessions
pub async fn handle_open(
    State(state): State<AppState>,
) -> (StatusCode, Json<SessionResponse>) {
    let (session_id, screen) = state
        .candidate_sessions
        .open(CandidateScreen::new())
        .await;
    let screen = screen.lock().await.snapshot();
    (
        StatusCode::CREATED,
        Json(SessionResponse { session_id, screen }),
    )
}

/// GET /api/v1/candidate/sessions/:id
pub async fn handle_snapshot(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<CandidateSnapshot>, AppError> {
    let screen = state.candidate_sessions.get(id).await?;
    let snapshot = screen.lock().await.snapshot();
    Ok(Json(snapshot))
}

/// DELETE /api/v1/candidate/sessions/:id
pub async fn handle_dispose(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    state.candidate_sessions.dispose(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/candidate/sessions/:id/upload
///
/// Click-to-browse entry point.
pub async fn handle_upload(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    multipart: Multipart,
) -> Result<Json<UploadResponse>, AppError> {
    let screen = state.candidate_sessions.get(id).await?;
    let file = read_file_part(multipart, body_limit(&state), state.config.max_upload_bytes)
        .await
        .and_then(|file| {
            file.ok_or_else(|| AppError::Validation("Form has no 'file' part".to_string()))
        });

    let mut screen = screen.lock().await;
    let file = file.map_err(|e| screen.reject_upload(UploadSource::Browse, e))?;
    let notification = screen.accept_file(&state.upload_policy, UploadSource::Browse, file)?;
    Ok(Json(UploadResponse {
        file: screen.snapshot().current_file,
        notification: Some(notification),
    }))
}

/// POST /api/v1/candidate/sessions/:id/drop
///
/// Drag-and-drop entry point. An empty drop only ends the drag.
pub async fn handle_drop(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    multipart: Multipart,
) -> Result<Json<UploadResponse>, AppError> {
    let screen = state.candidate_sessions.get(id).await?;
    let file = read_file_part(multipart, body_limit(&state), state.config.max_upload_bytes).await;

    let mut screen = screen.lock().await;
    let file = file.map_err(|e| screen.reject_upload(UploadSource::Drop, e))?;
    let notification = screen.drop_file(&state.upload_policy, file)?;
    Ok(Json(UploadResponse {
        file: screen.snapshot().current_file,
        notification,
    }))
}

/// POST /api/v1/candidate/sessions/:id/drag
pub async fn handle_drag(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<DragRequest>,
) -> Result<Json<CandidateSnapshot>, AppError> {
    let screen = state.candidate_sessions.get(id).await?;
    let mut screen = screen.lock().await;
    screen.set_drag_active(req.active);
    Ok(Json(screen.snapshot()))
}

/// PUT /api/v1/candidate/sessions/:id/job-description
pub async fn handle_job_description(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<JobDescriptionRequest>,
) -> Result<Json<CandidateSnapshot>, AppError> {
    let screen = state.candidate_sessions.get(id).await?;
    let mut screen = screen.lock().await;
    screen.set_job_description(req.text);
    Ok(Json(screen.snapshot()))
}

/// POST /api/v1/candidate/sessions/:id/analyze
///
/// Starts the simulated analysis and returns immediately. The result lands in
/// the screen after the configured delay.
pub async fn handle_analyze(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<(StatusCode, Json<AnalyzeResponse>), AppError> {
    let session = state.candidate_sessions.get(id).await?;
    let mut screen = session.lock().await;
    let (ticket, notification) = screen.begin_analysis()?;
    let run_id = ticket.run_id;
    spawn_analysis(
        &session,
        &mut screen,
        ticket,
        state.analyzer.clone(),
        state.config.analysis_delay,
    );
    Ok((
        StatusCode::ACCEPTED,
        Json(AnalyzeResponse {
            run_id,
            notification,
            screen: screen.snapshot(),
        }),
    ))
}

/// POST /api/v1/candidate/sessions/:id/overview
pub async fn handle_overview(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<OverviewResponse>, AppError> {
    let screen = state.candidate_sessions.get(id).await?;
    let mut screen = screen.lock().await;
    let notification = screen.reveal_overview()?;
    let suggestions = screen
        .snapshot()
        .analysis_result
        .map(|r| r.suggestions)
        .unwrap_or_default();
    Ok(Json(OverviewResponse {
        suggestions,
        notification,
    }))
}

/// GET /api/v1/candidate/sessions/:id/history
pub async fn handle_history(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<HistoryEntry>>, AppError> {
    let screen = state.candidate_sessions.get(id).await?;
    let screen = screen.lock().await;
    let entries = screen
        .history()
        .iter()
        .map(|v| HistoryEntry {
            version: v.clone(),
            badge: candidate_badge(v.score),
        })
        .collect();
    Ok(Json(entries))
}

/// PUT /api/v1/candidate/sessions/:id/tab
pub async fn handle_tab(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<TabRequest>,
) -> Result<Json<CandidateSnapshot>, AppError> {
    let screen = state.candidate_sessions.get(id).await?;
    let mut screen = screen.lock().await;
    screen.set_tab(req.tab);
    Ok(Json(screen.snapshot()))
}

/// POST /api/v1/candidate/sessions/:id/theme
pub async fn handle_theme(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ThemeResponse>, AppError> {
    let screen = state.candidate_sessions.get(id).await?;
    let theme = screen.lock().await.toggle_theme();
    Ok(Json(ThemeResponse { theme }))
}

/// POST /api/v1/candidate/sessions/:id/logout
pub async fn handle_logout(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<LogoutResponse>, AppError> {
    state.candidate_sessions.dispose(id).await?;
    Ok(Json(LogoutResponse {
        notification: Notification::logged_out(),
    }))
}

/// GET /api/v1/candidate/sessions/:id/notifications
pub async fn handle_notifications(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<Notification>>, AppError> {
    let screen = state.candidate_sessions.get(id).await?;
    let drained = screen.lock().await.drain_notifications();
    Ok(Json(drained))
}

pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{delete, get, patch, post, put},
    Router,
};

use crate::candidate::handlers::{self as candidate, MULTIPART_OVERHEAD_BYTES};
use crate::recruiter::handlers as recruiter;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let upload_limit = usize::try_from(state.config.max_upload_bytes + MULTIPART_OVERHEAD_BYTES)
        .unwrap_or(usize::MAX);

    let candidate_routes = Router::new()
        .route("/sessions", post(candidate::handle_open))
        .route(
            "/sessions/:id",
            get(candidate::handle_snapshot).delete(candidate::handle_dispose),
        )
        .route(
            "/sessions/:id/upload",
            post(candidate::handle_upload).layer(DefaultBodyLimit::max(upload_limit)),
        )
        .route(
            "/sessions/:id/drop",
            post(candidate::handle_drop).layer(DefaultBodyLimit::max(upload_limit)),
        )
        .route("/sessions/:id/drag", post(candidate::handle_drag))
        .route(
            "/sessions/:id/job-description",
            put(candidate::handle_job_description),
        )
        .route("/sessions/:id/analyze", post(candidate::handle_analyze))
        .route("/sessions/:id/overview", post(candidate::handle_overview))
        .route("/sessions/:id/history", get(candidate::handle_history))
        .route("/sessions/:id/tab", put(candidate::handle_tab))
        .route("/sessions/:id/theme", post(candidate::handle_theme))
        .route("/sessions/:id/logout", post(candidate::handle_logout))
        .route(
            "/sessions/:id/notifications",
            get(candidate::handle_notifications),
        );

    let recruiter_routes = Router::new()
        .route("/sessions", post(recruiter::handle_open))
        .route(
            "/sessions/:id",
            get(recruiter::handle_snapshot).delete(recruiter::handle_dispose),
        )
        .route("/sessions/:id/candidates", get(recruiter::handle_candidates))
        .route("/sessions/:id/filters", patch(recruiter::handle_filters))
        .route("/sessions/:id/bookmarks", get(recruiter::handle_bookmarks))
        .route(
            "/sessions/:id/candidates/:candidate_id/:action",
            post(recruiter::handle_candidate_action),
        )
        .route(
            "/sessions/:id/jobs",
            get(recruiter::handle_list_jobs).post(recruiter::handle_add_job),
        )
        .route("/sessions/:id/jobs/draft", patch(recruiter::handle_draft))
        .route("/sessions/:id/jobs/dialog", post(recruiter::handle_dialog))
        .route(
            "/sessions/:id/jobs/:job_id",
            delete(recruiter::handle_delete_job),
        )
        .route("/sessions/:id/tab", put(recruiter::handle_tab))
        .route("/sessions/:id/theme", post(recruiter::handle_theme))
        .route("/sessions/:id/logout", post(recruiter::handle_logout))
        .route(
            "/sessions/:id/notifications",
            get(recruiter::handle_notifications),
        );

    Router::new()
        .route("/health", get(health::health_handler))
        .nest("/api/v1/candidate", candidate_routes)
        .nest("/api/v1/recruiter", recruiter_routes)
        .with_state(state)
}

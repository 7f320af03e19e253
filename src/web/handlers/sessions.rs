//! # Session Management Handlers
//!
//! HTTP handlers for starting sessions, submitting decisions, fetching
//! session state, and resetting a traversal. These are the four engine
//! operations consumed by the presentation layer.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::engine::DecisionSubmission;
use crate::models::{DecisionRecord, DecisionSession, FinalRecommendations};
use crate::web::errors::{ApiError, ApiResult};
use crate::web::state::AppState;

/// Request to start a new session
#[derive(Debug, Deserialize)]
pub struct CreateSessionRequest {
    pub case_id: String,
    pub playbook_id: String,
}

/// Request to submit one decision against the current node
#[derive(Debug, Deserialize)]
pub struct SubmitDecisionRequest {
    pub selected_option: String,
    pub rationale: String,
    pub confidence: f64,
    /// Session version the client observed; stale values are rejected
    pub expected_version: i64,
}

/// Full session representation returned by every session endpoint.
///
/// Always the complete session, never a diff, so clients can re-render
/// from one response alone.
#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub session_id: Uuid,
    pub case_id: String,
    pub playbook_id: String,
    pub current_node_id: Option<String>,
    pub status: String,
    pub history: Vec<DecisionRecord>,
    pub final_recommendations: Option<FinalRecommendations>,
    pub version: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<DecisionSession> for SessionResponse {
    fn from(session: DecisionSession) -> Self {
        Self {
            session_id: session.session_id,
            case_id: session.case_id,
            playbook_id: session.playbook_id,
            current_node_id: session.current_node_id,
            status: session.status.to_string(),
            history: session.history,
            final_recommendations: session.final_recommendations,
            version: session.version,
            created_at: session.created_at,
            updated_at: session.updated_at,
        }
    }
}

/// Start a session: POST /v1/sessions
pub async fn create_session(
    State(state): State<AppState>,
    Json(request): Json<CreateSessionRequest>,
) -> ApiResult<(StatusCode, Json<SessionResponse>)> {
    if request.case_id.trim().is_empty() {
        return Err(ApiError::bad_request("case_id cannot be empty"));
    }
    if request.playbook_id.trim().is_empty() {
        return Err(ApiError::bad_request("playbook_id cannot be empty"));
    }

    info!(
        case_id = %request.case_id,
        playbook_id = %request.playbook_id,
        "Starting decision session via web API"
    );

    let session = state
        .engine
        .start_session(&request.case_id, &request.playbook_id)
        .await?;

    Ok((StatusCode::CREATED, Json(session.into())))
}

/// Submit a decision: POST /v1/sessions/{id}/decisions
pub async fn submit_decision(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(request): Json<SubmitDecisionRequest>,
) -> ApiResult<Json<SessionResponse>> {
    let submission = DecisionSubmission {
        selected_option: request.selected_option,
        rationale: request.rationale,
        confidence: request.confidence,
        expected_version: request.expected_version,
    };

    let session = state.engine.submit_decision(session_id, submission).await?;

    info!(
        session_id = %session.session_id,
        status = %session.status,
        history_length = session.history.len(),
        "Decision submitted via web API"
    );

    Ok(Json(session.into()))
}

/// Fetch a session: GET /v1/sessions/{id}
pub async fn get_session(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> ApiResult<Json<SessionResponse>> {
    let session = state.engine.get_session(session_id).await?;
    Ok(Json(session.into()))
}

/// Reset a session to the graph root: POST /v1/sessions/{id}/reset
pub async fn reset_session(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> ApiResult<Json<SessionResponse>> {
    let session = state.engine.reset_session(session_id).await?;

    info!(session_id = %session.session_id, "Session reset via web API");

    Ok(Json(session.into()))
}

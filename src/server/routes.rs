//! API routes and handlers.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::Uri,
    routing::get,
};
use tower_http::services::{ServeDir, ServeFile};

use crate::aggregate::{
    EventSummary, FUserEntry, FlipData, HistoryEntry, JudgeHistoryEntry, JudgeStat,
    ParticipantStat, TeamEntry, UserEntry,
};
use crate::service;

use super::error::ApiError;
use super::state::AppState;

/// Build the API router.
///
/// When `static_path` is set, unmatched paths fall back to the dashboard
/// bundle (with `index.html` for SPA routes); otherwise they get a JSON 404.
pub fn router(state: AppState, static_path: Option<&str>) -> Router {
    let app = Router::new()
        .route("/api/flip-data", get(flip_data))
        .route("/api/judges-data", get(judges_data))
        .route("/api/participants-data", get(participants_data))
        .route("/api/teams-data", get(teams_data))
        .route("/api/users-data", get(users_data))
        .route("/api/fusers-data", get(fusers_data))
        .route("/api/events-data", get(events_data))
        .route("/api/participant-history/{name}", get(participant_history))
        .route("/api/judge-history/{name}", get(judge_history))
        .route("/api/health", get(health));

    let app = match static_path {
        Some(path) => app.fallback_service(
            ServeDir::new(path).not_found_service(ServeFile::new(format!("{path}/index.html"))),
        ),
        None => app.fallback(not_found),
    };

    app.with_state(state)
}

/// Health check endpoint.
async fn health(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "OK",
        "uptime_secs": state.uptime_secs(),
    }))
}

/// JSON 404 for unmatched routes.
async fn not_found(uri: Uri) -> ApiError {
    ApiError::route_not_found(uri.path())
}

/// Producer leaderboard with per-event round tables.
async fn flip_data(State(state): State<AppState>) -> Result<Json<FlipData>, ApiError> {
    let formula = state.formula();
    let data = state
        .with_store(move |store| service::flip_data(store, formula))
        .await?;
    Ok(Json(data))
}

/// Judge averages.
async fn judges_data(State(state): State<AppState>) -> Result<Json<Vec<JudgeStat>>, ApiError> {
    let data = state.with_store(service::judges_data).await?;
    Ok(Json(data))
}

/// Participant statistics.
async fn participants_data(
    State(state): State<AppState>,
) -> Result<Json<Vec<ParticipantStat>>, ApiError> {
    let data = state.with_store(service::participants_data).await?;
    Ok(Json(data))
}

/// Teams reference table.
async fn teams_data(State(state): State<AppState>) -> Result<Json<Vec<TeamEntry>>, ApiError> {
    let data = state.with_store(service::teams_data).await?;
    Ok(Json(data))
}

/// Users reference table.
async fn users_data(State(state): State<AppState>) -> Result<Json<Vec<UserEntry>>, ApiError> {
    let data = state.with_store(service::users_data).await?;
    Ok(Json(data))
}

/// FUsers reference table.
async fn fusers_data(State(state): State<AppState>) -> Result<Json<Vec<FUserEntry>>, ApiError> {
    let data = state.with_store(service::fusers_data).await?;
    Ok(Json(data))
}

/// Per-event summaries.
async fn events_data(State(state): State<AppState>) -> Result<Json<Vec<EventSummary>>, ApiError> {
    let data = state.with_store(service::events_data).await?;
    Ok(Json(data))
}

/// One participant's history by display name.
async fn participant_history(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<Vec<HistoryEntry>>, ApiError> {
    let data = state
        .with_store(move |store| service::participant_history(store, &name))
        .await?;
    Ok(Json(data))
}

/// One judge's scoring history by name.
async fn judge_history(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<Vec<JudgeHistoryEntry>>, ApiError> {
    let data = state
        .with_store(move |store| service::judge_history(store, &name))
        .await?;
    Ok(Json(data))
}

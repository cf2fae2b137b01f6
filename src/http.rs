use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use tower_http::trace::TraceLayer;

use crate::{orchestrator::ChatOrchestrator, session::SessionStore, types::Exchange};

static CHAT_HTML: &str = include_str!("chat.html");

#[derive(Clone)]
pub struct AppState {
    pub orchestrator: Arc<ChatOrchestrator>,
    pub sessions: Arc<SessionStore>,
}

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    #[serde(default = "default_session")]
    pub session_id: String,
    pub content: String,
}

fn default_session() -> String {
    "local".to_owned()
}

#[derive(Serialize)]
struct ClearedResponse {
    cleared: u64,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health))
        .route("/chat", post(chat))
        .route(
            "/api/sessions/{session_id}/history",
            get(history).delete(clear_history),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn index() -> Html<&'static str> {
    Html(CHAT_HTML)
}

async fn health() -> &'static str {
    "ok"
}

async fn chat(State(state): State<AppState>, Json(request): Json<ChatRequest>) -> Response {
    match state
        .orchestrator
        .handle_send(&request.session_id, &request.content)
        .await
    {
        Some(reply) => Json(reply).into_response(),
        None => StatusCode::NO_CONTENT.into_response(),
    }
}

async fn history(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Json<Vec<Exchange>> {
    Json(state.sessions.history(&session_id).await)
}

async fn clear_history(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Json<ClearedResponse> {
    let cleared = state.orchestrator.handle_clear(&session_id).await;
    Json(ClearedResponse { cleared })
}

//! Chat session handlers

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use charm_application::ChatExchange;
use charm_core::chat::ChatSession;
use serde::{Deserialize, Serialize};

use crate::api::extract::ApiJson;
use crate::api::state::AppState;
use crate::error::{ApiError, ApiResult};

/// Send message request
#[derive(Debug, Deserialize)]
pub struct SendMessageRequest {
    pub content: String,
}

#[derive(Debug, Serialize)]
pub struct CloseSessionResponse {
    pub id: String,
    pub closed: bool,
}

/// Open a chat session with a character
pub async fn open_session(
    State(state): State<AppState>,
    Path(character_id): Path<String>,
) -> ApiResult<(StatusCode, Json<ChatSession>)> {
    let session = state.chat.open(&character_id).await?;
    Ok((StatusCode::CREATED, Json(session)))
}

pub async fn get_session(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> ApiResult<Json<ChatSession>> {
    Ok(Json(state.chat.get(&session_id).await?))
}

/// Send a message; responds once the simulated reply arrives
pub async fn send_message(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
    ApiJson(request): ApiJson<SendMessageRequest>,
) -> ApiResult<Json<ChatExchange>> {
    Ok(Json(state.chat.send(&session_id, &request.content).await?))
}

pub async fn close_session(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> ApiResult<Json<CloseSessionResponse>> {
    if !state.chat.close(&session_id).await {
        return Err(ApiError::NotFound("Chat session not found".to_string()));
    }
    Ok(Json(CloseSessionResponse {
        id: session_id,
        closed: true,
    }))
}

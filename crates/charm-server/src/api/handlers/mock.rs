//! Mock data handlers

use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};
use charm_core::mock::{MockCharacter, MockQuery};

use super::NO_CACHE;
use crate::api::extract::ApiQuery;
use crate::api::state::AppState;
use crate::error::{ApiError, ApiResult};

/// A freshly generated, shuffled mock list
pub async fn list_mock_characters(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<MockQuery>,
) -> ApiResult<impl IntoResponse> {
    let characters = state.mock.list(&query)?;
    Ok((NO_CACHE, Json(characters)))
}

/// Mock ids are numeric; any other id cannot exist
pub async fn get_mock_character(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<MockCharacter>> {
    let id: u32 = id
        .parse()
        .map_err(|_| ApiError::NotFound("Mock character not found".to_string()))?;
    Ok(Json(state.mock.get(id)?))
}

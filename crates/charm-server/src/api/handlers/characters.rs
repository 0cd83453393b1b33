//! Catalog and character creation handlers

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use charm_core::catalog::CatalogFilter;
use charm_core::category::Category;
use charm_core::character::{Character, CreateCharacterRequest};

use super::NO_CACHE;
use crate::api::extract::{ApiJson, ApiQuery};
use crate::api::state::AppState;
use crate::error::ApiResult;

/// List categories for the filter bar
pub async fn list_categories(State(state): State<AppState>) -> Json<Vec<Category>> {
    Json(state.catalog.categories())
}

/// List characters, optionally filtered by `category` and `q`
pub async fn list_characters(
    State(state): State<AppState>,
    ApiQuery(filter): ApiQuery<CatalogFilter>,
) -> ApiResult<impl IntoResponse> {
    let characters = state.catalog.list(&filter).await?;
    Ok((NO_CACHE, Json(characters)))
}

pub async fn list_featured(State(state): State<AppState>) -> Json<Vec<Character>> {
    Json(state.catalog.featured())
}

pub async fn get_character(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Character>> {
    Ok(Json(state.catalog.get(&id).await?))
}

/// Create a user character
pub async fn create_character(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<CreateCharacterRequest>,
) -> ApiResult<(StatusCode, Json<Character>)> {
    let character = state.characters.create(request).await?;
    Ok((StatusCode::CREATED, Json(character)))
}

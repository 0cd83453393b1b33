//! API Router configuration

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::handlers;
use super::state::AppState;

/// Create the main router. CORS is fully open when `cors` is set.
pub fn create_router(state: AppState, cors: bool) -> Router {
    let api_routes = Router::new()
        .route("/categories", get(handlers::list_categories))
        // Catalog
        .route(
            "/characters",
            get(handlers::list_characters).post(handlers::create_character),
        )
        .route("/characters/featured", get(handlers::list_featured))
        .route("/characters/:id", get(handlers::get_character))
        // Chat
        .route("/chat/:character_id", post(handlers::open_session))
        .route(
            "/chat/sessions/:session_id",
            get(handlers::get_session).delete(handlers::close_session),
        )
        .route(
            "/chat/sessions/:session_id/messages",
            post(handlers::send_message),
        )
        // Mock data
        .route("/mock/characters", get(handlers::list_mock_characters))
        .route("/mock/characters/:id", get(handlers::get_mock_character));

    let router = Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http());

    let router = if cors {
        router.layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
    } else {
        router
    };

    router.with_state(state)
}

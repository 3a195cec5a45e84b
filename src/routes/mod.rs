use axum::{Json, Router, http::{StatusCode, Uri}, routing::get};

use crate::{error::ErrorBody, state::AppState};

pub mod doc;
pub mod favorites;
pub mod health;
pub mod people;
pub mod planets;
pub mod sitemap;
pub mod users;

// Build the API router without binding state; it will be provided at the top level.
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .merge(users::router())
        .merge(planets::router())
        .merge(people::router())
        .nest("/favorite", favorites::router())
}

/// Every public route bound to `state`, without the tracing and limit layers.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(sitemap::sitemap))
        .route("/health", get(health::health_check))
        .merge(create_api_router())
        .merge(doc::scalar_docs())
        .fallback(not_found)
        .with_state(state)
}

async fn not_found(uri: Uri) -> (StatusCode, Json<ErrorBody>) {
    let body = ErrorBody {
        msg: format!("No route for {}", uri.path()),
        error: "not_found".to_string(),
    };
    (StatusCode::NOT_FOUND, Json(body))
}

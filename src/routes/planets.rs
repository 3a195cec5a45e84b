use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::{get, post},
};

use crate::{
    dto::planets::{CreatePlanetRequest, PlanetList, ResidentList},
    error::{AppResult, ErrorBody},
    middleware::{json_body::JsonBody, path_param::PathParam},
    models::Planet,
    response::ApiResponse,
    services::planet_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/planets", get(list_planets))
        .route("/planets/{id}", get(get_planet))
        .route("/planets/{id}/people", get(list_residents))
        .route("/planet", post(create_planet))
}

#[utoipa::path(
    get,
    path = "/planets",
    responses(
        (status = 200, description = "List planets", body = ApiResponse<PlanetList>)
    ),
    tag = "Planets"
)]
pub async fn list_planets(State(state): State<AppState>) -> AppResult<Json<ApiResponse<PlanetList>>> {
    let resp = planet_service::list_planets(&state).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/planets/{id}",
    params(
        ("id" = i32, Path, description = "Planet ID")
    ),
    responses(
        (status = 200, description = "Get planet", body = ApiResponse<Planet>),
        (status = 400, description = "Invalid id", body = ErrorBody),
        (status = 404, description = "Planet not found", body = ErrorBody)
    ),
    tag = "Planets"
)]
pub async fn get_planet(
    PathParam(id): PathParam<i32>,
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<Planet>>> {
    let resp = planet_service::get_planet(&state, id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/planets/{id}/people",
    params(
        ("id" = i32, Path, description = "Planet ID")
    ),
    responses(
        (status = 200, description = "People whose homeworld is this planet", body = ApiResponse<ResidentList>),
        (status = 400, description = "Invalid id", body = ErrorBody),
        (status = 404, description = "Planet not found", body = ErrorBody)
    ),
    tag = "Planets"
)]
pub async fn list_residents(
    PathParam(id): PathParam<i32>,
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<ResidentList>>> {
    let resp = planet_service::list_residents(&state, id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/planet",
    request_body = CreatePlanetRequest,
    responses(
        (status = 201, description = "Create planet", body = ApiResponse<Planet>),
        (status = 400, description = "Missing body, name or url, or duplicate planet", body = ErrorBody)
    ),
    tag = "Planets"
)]
pub async fn create_planet(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<CreatePlanetRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<Planet>>)> {
    let resp = planet_service::create_planet(&state, payload).await?;
    Ok((StatusCode::CREATED, Json(resp)))
}

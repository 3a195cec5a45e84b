use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::post,
};

use crate::{
    dto::favorites::{FavoritePersonPath, FavoritePlanetPath},
    error::{AppResult, ErrorBody},
    middleware::path_param::PathParam,
    models::{FavoritePerson, FavoritePlanet},
    response::{FavoriteCreated, MessageResponse},
    services::favorite_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/planet/{planet_id}/{user_id}",
            post(add_favorite_planet).delete(remove_favorite_planet),
        )
        .route(
            "/people/{people_id}/{user_id}",
            post(add_favorite_person).delete(remove_favorite_person),
        )
}

#[utoipa::path(
    post,
    path = "/favorite/planet/{planet_id}/{user_id}",
    params(FavoritePlanetPath),
    responses(
        (status = 201, description = "Planet added to favorites", body = FavoriteCreated<FavoritePlanet>),
        (status = 400, description = "Favorite already exists", body = ErrorBody),
        (status = 404, description = "User or planet not found", body = ErrorBody),
        (status = 500, description = "Storage failure", body = ErrorBody)
    ),
    tag = "Favorites"
)]
pub async fn add_favorite_planet(
    State(state): State<AppState>,
    PathParam(path): PathParam<FavoritePlanetPath>,
) -> AppResult<(StatusCode, Json<FavoriteCreated<FavoritePlanet>>)> {
    let resp = favorite_service::add_favorite_planet(&state, path.planet_id, path.user_id).await?;
    Ok((StatusCode::CREATED, Json(resp)))
}

#[utoipa::path(
    post,
    path = "/favorite/people/{people_id}/{user_id}",
    params(FavoritePersonPath),
    responses(
        (status = 201, description = "Person added to favorites", body = FavoriteCreated<FavoritePerson>),
        (status = 400, description = "Favorite already exists", body = ErrorBody),
        (status = 404, description = "User or person not found", body = ErrorBody),
        (status = 500, description = "Storage failure", body = ErrorBody)
    ),
    tag = "Favorites"
)]
pub async fn add_favorite_person(
    State(state): State<AppState>,
    PathParam(path): PathParam<FavoritePersonPath>,
) -> AppResult<(StatusCode, Json<FavoriteCreated<FavoritePerson>>)> {
    let resp = favorite_service::add_favorite_person(&state, path.people_id, path.user_id).await?;
    Ok((StatusCode::CREATED, Json(resp)))
}

#[utoipa::path(
    delete,
    path = "/favorite/planet/{planet_id}/{user_id}",
    params(FavoritePlanetPath),
    responses(
        (status = 200, description = "Removed from favorites", body = MessageResponse),
        (status = 404, description = "Favorite not found", body = ErrorBody),
        (status = 500, description = "Storage failure", body = ErrorBody)
    ),
    tag = "Favorites"
)]
pub async fn remove_favorite_planet(
    State(state): State<AppState>,
    PathParam(path): PathParam<FavoritePlanetPath>,
) -> AppResult<Json<MessageResponse>> {
    let resp =
        favorite_service::remove_favorite_planet(&state, path.planet_id, path.user_id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    delete,
    path = "/favorite/people/{people_id}/{user_id}",
    params(FavoritePersonPath),
    responses(
        (status = 200, description = "Removed from favorites", body = MessageResponse),
        (status = 404, description = "Favorite not found", body = ErrorBody),
        (status = 500, description = "Storage failure", body = ErrorBody)
    ),
    tag = "Favorites"
)]
pub async fn remove_favorite_person(
    State(state): State<AppState>,
    PathParam(path): PathParam<FavoritePersonPath>,
) -> AppResult<Json<MessageResponse>> {
    let resp =
        favorite_service::remove_favorite_person(&state, path.people_id, path.user_id).await?;
    Ok(Json(resp))
}

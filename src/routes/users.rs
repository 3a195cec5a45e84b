use axum::{Json, Router, extract::State, routing::get};

use crate::{
    dto::users::UserList,
    error::{AppResult, ErrorBody},
    middleware::path_param::PathParam,
    models::UserFavorites,
    response::ApiResponse,
    services::user_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/users", get(list_users))
        .route("/users/{user_id}/favorites", get(get_user_favorites))
}

#[utoipa::path(
    get,
    path = "/users",
    responses(
        (status = 200, description = "List users", body = ApiResponse<UserList>)
    ),
    tag = "Users"
)]
pub async fn list_users(State(state): State<AppState>) -> AppResult<Json<ApiResponse<UserList>>> {
    let resp = user_service::list_users(&state).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/users/{user_id}/favorites",
    params(
        ("user_id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User with favorite planets and people", body = ApiResponse<UserFavorites>),
        (status = 400, description = "Invalid id", body = ErrorBody),
        (status = 404, description = "User not found", body = ErrorBody)
    ),
    tag = "Users"
)]
pub async fn get_user_favorites(
    State(state): State<AppState>,
    PathParam(user_id): PathParam<i32>,
) -> AppResult<Json<ApiResponse<UserFavorites>>> {
    let resp = user_service::get_user_favorites(&state, user_id).await?;
    Ok(Json(resp))
}

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::get,
};

use crate::{
    dto::people::{CreatePersonRequest, PersonList},
    error::{AppResult, ErrorBody},
    middleware::{json_body::JsonBody, path_param::PathParam},
    models::Person,
    response::ApiResponse,
    services::person_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/people", get(list_people).post(create_person))
        .route("/people/{id}", get(get_person))
}

#[utoipa::path(
    get,
    path = "/people",
    responses(
        (status = 200, description = "List people", body = ApiResponse<PersonList>)
    ),
    tag = "People"
)]
pub async fn list_people(State(state): State<AppState>) -> AppResult<Json<ApiResponse<PersonList>>> {
    let resp = person_service::list_people(&state).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/people/{id}",
    params(
        ("id" = i32, Path, description = "Person ID")
    ),
    responses(
        (status = 200, description = "Get person", body = ApiResponse<Person>),
        (status = 400, description = "Invalid id", body = ErrorBody),
        (status = 404, description = "Person not found", body = ErrorBody)
    ),
    tag = "People"
)]
pub async fn get_person(
    PathParam(id): PathParam<i32>,
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<Person>>> {
    let resp = person_service::get_person(&state, id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/people",
    request_body = CreatePersonRequest,
    responses(
        (status = 201, description = "Create person", body = ApiResponse<Person>),
        (status = 400, description = "Missing body, name, url or homeworld, unknown homeworld, or duplicate person", body = ErrorBody)
    ),
    tag = "People"
)]
pub async fn create_person(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<CreatePersonRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<Person>>)> {
    let resp = person_service::create_person(&state, payload).await?;
    Ok((StatusCode::CREATED, Json(resp)))
}

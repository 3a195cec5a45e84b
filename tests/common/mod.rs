#![allow(dead_code)]

use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode, header},
};
use serde_json::Value;
use starwars_api::{
    db::{create_orm_conn, run_migrations},
    dto::users::NewUser,
    routes::build_router,
    services::user_service,
    state::AppState,
};
use tower::ServiceExt;

/// Fresh in-memory database with the full schema. A single connection keeps
/// every query on the same in-memory file.
pub async fn setup_state() -> anyhow::Result<AppState> {
    let orm = create_orm_conn("sqlite::memory:", 1).await?;
    run_migrations(&orm).await?;
    Ok(AppState { orm })
}

pub async fn setup_app() -> anyhow::Result<(AppState, Router)> {
    let state = setup_state().await?;
    let app = build_router(state.clone());
    Ok((state, app))
}

pub async fn create_user(state: &AppState, email: &str) -> anyhow::Result<i32> {
    let resp = user_service::create_user(
        state,
        NewUser {
            email: email.to_string(),
            password: "correct horse battery staple".to_string(),
            is_active: true,
        },
    )
    .await?;
    Ok(resp.data.expect("user data").id)
}

pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    send_request(app, builder.body(body).expect("request")).await
}

/// Sends a prebuilt request, for cases `send` cannot express (custom headers).
pub async fn send_request(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(request)
        .await
        .expect("router is infallible");
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("json body")
    };
    (status, json)
}

pub fn planet_payload(name: &str) -> Value {
    serde_json::json!({
        "name": name,
        "url": format!("https://swapi.dev/api/planets/{}/", name.to_lowercase()),
        "climate": "arid",
        "population": 200000,
        "terrain": "desert",
        "surface_water": 1,
        "diameter": 10465,
        "rotation_period": 23,
        "orbital_period": 304,
        "gravity": "1 standard",
        "created": "2014-12-09",
        "edited": "2014-12-20"
    })
}

/// Creates a planet over HTTP and returns its id.
pub async fn create_planet(app: &Router, name: &str) -> i32 {
    let (status, body) = send(app, Method::POST, "/planet", Some(planet_payload(name))).await;
    assert_eq!(status, StatusCode::CREATED, "{body}");
    body["data"]["id"].as_i64().expect("planet id") as i32
}

pub async fn create_person(app: &Router, name: &str, homeworld: i32) -> i32 {
    let payload = serde_json::json!({
        "name": name,
        "url": format!("https://swapi.dev/api/people/{}/", name.to_lowercase().replace(' ', "-")),
        "homeworld": homeworld,
        "gender": "n/a",
    });
    let (status, body) = send(app, Method::POST, "/people", Some(payload)).await;
    assert_eq!(status, StatusCode::CREATED, "{body}");
    body["data"]["id"].as_i64().expect("person id") as i32
}

/// True when `key` appears as an object key anywhere in `value`.
pub fn contains_key(value: &Value, key: &str) -> bool {
    match value {
        Value::Object(map) => map.contains_key(key) || map.values().any(|v| contains_key(v, key)),
        Value::Array(items) => items.iter().any(|v| contains_key(v, key)),
        _ => false,
    }
}

use axum::Json;
use serde::Serialize;
use utoipa::{OpenApi, ToSchema, openapi::path::PathItem};

use crate::{response::ApiResponse, routes::doc::ApiDoc};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct RouteEntry {
    pub method: String,
    pub path: String,
}

#[derive(Serialize, ToSchema)]
#[serde(transparent)]
pub struct RouteList {
    #[schema(value_type = Vec<RouteEntry>)]
    pub items: Vec<RouteEntry>,
}

#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Every documented route", body = ApiResponse<RouteList>)
    ),
    tag = "Sitemap"
)]
pub async fn sitemap() -> Json<ApiResponse<RouteList>> {
    Json(ApiResponse::success("ok", RouteList { items: routes() }))
}

/// Routes from the OpenAPI document, sorted by path and then method.
pub fn routes() -> Vec<RouteEntry> {
    let openapi = ApiDoc::openapi();
    let mut items: Vec<RouteEntry> = openapi
        .paths
        .paths
        .iter()
        .flat_map(|(path, item)| {
            methods(item).into_iter().map(move |method| RouteEntry {
                method: method.to_string(),
                path: path.clone(),
            })
        })
        .collect();
    items.sort_by(|a, b| a.path.cmp(&b.path).then_with(|| a.method.cmp(&b.method)));
    items
}

fn methods(item: &PathItem) -> Vec<&'static str> {
    [
        ("GET", item.get.is_some()),
        ("POST", item.post.is_some()),
        ("PUT", item.put.is_some()),
        ("PATCH", item.patch.is_some()),
        ("DELETE", item.delete.is_some()),
    ]
    .into_iter()
    .filter_map(|(method, present)| present.then_some(method))
    .collect()
}

use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct ApiResponse<T> {
    pub msg: String,
    pub data: Option<T>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(msg: impl Into<String>, data: T) -> Self {
        Self {
            msg: msg.into(),
            data: Some(data),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    pub msg: String,
}

impl MessageResponse {
    pub fn new(msg: impl Into<String>) -> Self {
        Self { msg: msg.into() }
    }
}

/// Body returned when a favorite link is created.
#[derive(Debug, Serialize, ToSchema)]
pub struct FavoriteCreated<T> {
    pub success: String,
    pub favorito: T,
}

impl<T: Serialize> FavoriteCreated<T> {
    pub fn new(success: impl Into<String>, favorito: T) -> Self {
        Self {
            success: success.into(),
            favorito,
        }
    }
}

use serde::Serialize;
use utoipa::ToSchema;

use crate::models::User;

#[derive(Debug)]
pub struct NewUser {
    pub email: String,
    pub password: String,
    pub is_active: bool,
}

#[derive(Serialize, ToSchema)]
#[serde(transparent)]
pub struct UserList {
    #[schema(value_type = Vec<User>)]
    pub items: Vec<User>,
}

use argon2::{Argon2, PasswordHasher, password_hash::SaltString};
use password_hash::rand_core::OsRng;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set, TransactionTrait,
};
use sea_orm::ActiveValue::NotSet;

use crate::{
    dto::users::{NewUser, UserList},
    entity::users::{ActiveModel, Column, Entity as Users},
    error::{AppError, AppResult},
    models::{User, UserFavorites},
    response::ApiResponse,
    services::{favorite_service::find_favorites_by_user, rollback},
    state::AppState,
};

pub async fn list_users(state: &AppState) -> AppResult<ApiResponse<UserList>> {
    let items = Users::find()
        .order_by_asc(Column::Id)
        .all(&state.orm)
        .await?
        .iter()
        .map(|user| user.serialize())
        .collect();
    Ok(ApiResponse::success("ok", UserList { items }))
}

/// Creates a user with an argon2-hashed password.
pub async fn create_user(state: &AppState, payload: NewUser) -> AppResult<ApiResponse<User>> {
    let NewUser {
        email,
        password,
        is_active,
    } = payload;

    let exists = Users::find()
        .filter(Column::Email.eq(email.as_str()))
        .one(&state.orm)
        .await?;
    if exists.is_some() {
        return Err(AppError::Conflict("Email is already taken".to_string()));
    }

    let salt = SaltString::generate(&mut OsRng);
    let password_hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| AppError::Internal(anyhow::anyhow!(e.to_string())))?
        .to_string();

    let active = ActiveModel {
        id: NotSet,
        email: Set(email),
        password: Set(password_hash),
        is_active: Set(is_active),
    };

    let txn = state.orm.begin().await?;
    let user = match active.insert(&txn).await {
        Ok(user) => user,
        Err(err) => {
            rollback(txn).await;
            return Err(AppError::from_write(err, "Email is already taken"));
        }
    };
    txn.commit().await?;

    tracing::info!(user_id = user.id, "user created");
    Ok(ApiResponse::success("User created", user.serialize()))
}

pub async fn get_user_favorites(
    state: &AppState,
    user_id: i32,
) -> AppResult<ApiResponse<UserFavorites>> {
    let user = Users::find_by_id(user_id)
        .one(&state.orm)
        .await?
        .ok_or_else(|| AppError::not_found("User"))?;

    let (planets, people) = find_favorites_by_user(&state.orm, user.id).await?;

    let data = UserFavorites {
        user_info: user.serialize(),
        favorites_planets: planets.iter().map(|p| p.basic_serialize()).collect(),
        favorites_peoples: people.iter().map(|p| p.basic_serialize()).collect(),
    };
    Ok(ApiResponse::success("ok", data))
}

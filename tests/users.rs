mod common;

use argon2::Argon2;
use password_hash::{PasswordHash, PasswordVerifier};
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter};
use starwars_api::{
    dto::users::NewUser,
    entity::{Users, users},
    error::AppError,
    services::user_service,
};

use common::setup_state;

const PASSWORD: &str = "may the force be with you";

fn new_user(email: &str) -> NewUser {
    NewUser {
        email: email.to_string(),
        password: PASSWORD.to_string(),
        is_active: true,
    }
}

#[tokio::test]
async fn create_user_stores_an_argon2_hash() -> anyhow::Result<()> {
    let state = setup_state().await?;

    let resp = user_service::create_user(&state, new_user("obiwan@jedi.temple")).await?;
    let user = resp.data.expect("user data");
    assert_eq!(user.email, "obiwan@jedi.temple");
    assert!(user.is_active);

    let row = Users::find()
        .filter(users::Column::Email.eq("obiwan@jedi.temple"))
        .one(&state.orm)
        .await?
        .expect("stored user");
    assert_eq!(row.id, user.id);
    assert_ne!(row.password, PASSWORD);

    let parsed = PasswordHash::new(&row.password).expect("stored password is a PHC hash");
    assert!(parsed.algorithm.as_str().starts_with("argon2"));
    assert!(Argon2::default().verify_password(PASSWORD.as_bytes(), &parsed).is_ok());
    assert!(Argon2::default().verify_password(b"wrong", &parsed).is_err());
    Ok(())
}

#[tokio::test]
async fn duplicate_email_is_a_conflict() -> anyhow::Result<()> {
    let state = setup_state().await?;

    user_service::create_user(&state, new_user("vader@death.star")).await?;
    let err = user_service::create_user(&state, new_user("vader@death.star"))
        .await
        .expect_err("second user with the same email");

    assert!(matches!(err, AppError::Conflict(_)), "{err:?}");
    assert_eq!(err.to_string(), "Email is already taken");
    assert_eq!(Users::find().count(&state.orm).await?, 1);
    Ok(())
}

#[tokio::test]
async fn users_with_the_same_password_get_distinct_salts() -> anyhow::Result<()> {
    let state = setup_state().await?;

    user_service::create_user(&state, new_user("luke@tatooine.farm")).await?;
    user_service::create_user(&state, new_user("leia@alderaan.gov")).await?;

    let rows = Users::find().all(&state.orm).await?;
    assert_eq!(rows.len(), 2);
    assert_ne!(rows[0].password, rows[1].password);
    Ok(())
}

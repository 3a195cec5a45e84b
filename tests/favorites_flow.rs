mod common;

use axum::http::{Method, StatusCode};
use sea_orm::{ConnectionTrait, EntityTrait, PaginatorTrait};
use starwars_api::{
    entity::{FavoritePeople, FavoritePlanets, Planets, Users},
    error::AppError,
    services::favorite_service,
};

use common::{contains_key, create_person, create_planet, create_user, send, setup_app};

#[tokio::test]
async fn adding_the_same_planet_twice_is_rejected() -> anyhow::Result<()> {
    let (state, app) = setup_app().await?;
    let user = create_user(&state, "han@falcon.space").await?;
    let planet = create_planet(&app, "Corellia").await;
    let uri = format!("/favorite/planet/{planet}/{user}");

    let (status, body) = send(&app, Method::POST, &uri, None).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["favorito"]["user_id"], user);
    assert_eq!(body["favorito"]["planet_id"], planet);
    assert!(body["success"].is_string());

    let (status, body) = send(&app, Method::POST, &uri, None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["msg"], "Favorite already exists");

    assert_eq!(FavoritePlanets::find().count(&state.orm).await?, 1);
    Ok(())
}

#[tokio::test]
async fn adding_the_same_person_twice_is_rejected() -> anyhow::Result<()> {
    let (state, app) = setup_app().await?;
    let user = create_user(&state, "chewie@falcon.space").await?;
    let kashyyyk = create_planet(&app, "Kashyyyk").await;
    let person = create_person(&app, "Tarfful", kashyyyk).await;
    let uri = format!("/favorite/people/{person}/{user}");

    let (status, body) = send(&app, Method::POST, &uri, None).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["favorito"]["people_id"], person);

    let (status, _) = send(&app, Method::POST, &uri, None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(FavoritePeople::find().count(&state.orm).await?, 1);
    Ok(())
}

#[tokio::test]
async fn favorites_need_an_existing_user_and_target() -> anyhow::Result<()> {
    let (state, app) = setup_app().await?;
    let user = create_user(&state, "lando@cloud.city").await?;
    let bespin = create_planet(&app, "Bespin").await;

    let (status, body) = send(&app, Method::POST, &format!("/favorite/planet/{bespin}/999"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["msg"], "User not found");

    let (status, body) = send(&app, Method::POST, &format!("/favorite/planet/999/{user}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["msg"], "Planet not found");

    let (status, body) = send(&app, Method::POST, &format!("/favorite/people/999/{user}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["msg"], "Person not found");

    assert_eq!(FavoritePlanets::find().count(&state.orm).await?, 0);
    Ok(())
}

#[tokio::test]
async fn removing_a_missing_link_is_404_and_changes_nothing() -> anyhow::Result<()> {
    let (state, app) = setup_app().await?;
    let user = create_user(&state, "wedge@rogue.squadron").await?;
    let yavin = create_planet(&app, "Yavin IV").await;
    let endor = create_planet(&app, "Endor").await;

    let (status, _) = send(&app, Method::POST, &format!("/favorite/planet/{yavin}/{user}"), None).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = send(&app, Method::DELETE, &format!("/favorite/planet/{endor}/{user}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "not_found");

    let (status, _) = send(&app, Method::DELETE, &format!("/favorite/people/{yavin}/{user}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    assert_eq!(FavoritePlanets::find().count(&state.orm).await?, 1);
    Ok(())
}

#[tokio::test]
async fn removing_links_deletes_only_that_link() -> anyhow::Result<()> {
    let (state, app) = setup_app().await?;
    let user = create_user(&state, "mon@mothma.gov").await?;
    let chandrila = create_planet(&app, "Chandrila").await;
    let person = create_person(&app, "Mon Mothma", chandrila).await;

    send(&app, Method::POST, &format!("/favorite/planet/{chandrila}/{user}"), None).await;
    send(&app, Method::POST, &format!("/favorite/people/{person}/{user}"), None).await;

    let (status, body) = send(&app, Method::DELETE, &format!("/favorite/planet/{chandrila}/{user}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["msg"].is_string());
    assert_eq!(FavoritePlanets::find().count(&state.orm).await?, 0);
    assert_eq!(FavoritePeople::find().count(&state.orm).await?, 1);

    let (status, _) = send(&app, Method::DELETE, &format!("/favorite/people/{person}/{user}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(FavoritePeople::find().count(&state.orm).await?, 0);
    Ok(())
}

#[tokio::test]
async fn user_favorites_list_every_link_without_password() -> anyhow::Result<()> {
    let (state, app) = setup_app().await?;
    let user = create_user(&state, "luke@example.com").await?;
    let other = create_user(&state, "vader@empire.gov").await?;
    let tatooine = create_planet(&app, "Tatooine").await;
    let dagobah = create_planet(&app, "Dagobah").await;
    let yoda = create_person(&app, "Yoda", dagobah).await;

    for uri in [
        format!("/favorite/planet/{tatooine}/{user}"),
        format!("/favorite/planet/{dagobah}/{user}"),
        format!("/favorite/people/{yoda}/{user}"),
        format!("/favorite/planet/{tatooine}/{other}"),
    ] {
        let (status, _) = send(&app, Method::POST, &uri, None).await;
        assert_eq!(status, StatusCode::CREATED, "{uri}");
    }

    let (status, body) = send(&app, Method::GET, &format!("/users/{user}/favorites"), None).await;
    assert_eq!(status, StatusCode::OK);

    let data = &body["data"];
    assert_eq!(data["user_info"]["email"], "luke@example.com");
    let planets = data["favorites_planets"].as_array().expect("planets");
    let people = data["favorites_peoples"].as_array().expect("people");
    assert_eq!(planets.len() + people.len(), 3);
    assert_eq!(planets[0]["name"], "Tatooine");
    assert_eq!(planets[1]["name"], "Dagobah");
    assert_eq!(people[0]["name"], "Yoda");
    assert!(people[0].get("height").is_none());
    assert!(!contains_key(&body, "password"));
    Ok(())
}

#[tokio::test]
async fn concurrent_duplicate_favorites_store_one_link() -> anyhow::Result<()> {
    let (state, app) = setup_app().await?;
    let user = create_user(&state, "rey@jakku.sand").await?;
    let jakku = create_planet(&app, "Jakku").await;

    let (first, second) = tokio::join!(
        favorite_service::add_favorite_planet(&state, jakku, user),
        favorite_service::add_favorite_planet(&state, jakku, user),
    );

    let created = [first.is_ok(), second.is_ok()].into_iter().filter(|ok| *ok).count();
    assert_eq!(created, 1);
    let rejected = first.err().or(second.err()).expect("one request must fail");
    assert!(matches!(rejected, AppError::Conflict(_)), "{rejected:?}");

    assert_eq!(FavoritePlanets::find().count(&state.orm).await?, 1);
    Ok(())
}

#[tokio::test]
async fn storage_failures_hide_the_database_error() -> anyhow::Result<()> {
    let (state, app) = setup_app().await?;
    let user = create_user(&state, "chewie@kashyyyk.forest").await?;
    let kashyyyk = create_planet(&app, "Kashyyyk").await;
    let chewie = create_person(&app, "Chewbacca", kashyyyk).await;

    state
        .orm
        .execute_unprepared(
            "CREATE TRIGGER favorites_planets_read_only BEFORE INSERT ON favorites_planets \
             BEGIN SELECT RAISE(ABORT, 'favorites_planets is read-only'); END;",
        )
        .await?;
    state
        .orm
        .execute_unprepared("ALTER TABLE favorites_peoples RENAME TO favorites_peoples_archived")
        .await?;

    for uri in [
        format!("/favorite/planet/{kashyyyk}/{user}"),
        format!("/favorite/people/{chewie}/{user}"),
    ] {
        let (status, body) = send(&app, Method::POST, &uri, None).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR, "{uri}: {body}");
        assert_eq!(body["error"], "storage_failure");
        assert_eq!(body["msg"], "Storage failure");
        assert!(body.get("details").is_none());
        let text = body.to_string();
        for leaked in ["favorites_", "read-only", "no such table", "SQL"] {
            assert!(!text.contains(leaked), "{uri} leaked {leaked:?}: {text}");
        }
    }

    assert_eq!(FavoritePlanets::find().count(&state.orm).await?, 0);
    Ok(())
}

#[tokio::test]
async fn deleting_a_user_or_planet_cascades_to_its_favorites() -> anyhow::Result<()> {
    let (state, app) = setup_app().await?;
    let lando = create_user(&state, "lando@cloud.city").await?;
    let lobot = create_user(&state, "lobot@cloud.city").await?;
    let bespin = create_planet(&app, "Bespin").await;
    let yavin = create_planet(&app, "Yavin").await;
    let hoth = create_planet(&app, "Hoth").await;
    let wampa = create_person(&app, "Wampa", hoth).await;

    favorite_service::add_favorite_planet(&state, bespin, lando).await?;
    favorite_service::add_favorite_planet(&state, yavin, lando).await?;
    favorite_service::add_favorite_planet(&state, yavin, lobot).await?;
    favorite_service::add_favorite_person(&state, wampa, lando).await?;

    Planets::delete_by_id(yavin).exec(&state.orm).await?;
    let remaining = FavoritePlanets::find().all(&state.orm).await?;
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].planet_id, Some(bespin));

    Users::delete_by_id(lando).exec(&state.orm).await?;
    assert_eq!(FavoritePlanets::find().count(&state.orm).await?, 0);
    assert_eq!(FavoritePeople::find().count(&state.orm).await?, 0);
    Ok(())
}

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder,
    Set, TransactionTrait,
};
use sea_orm::ActiveValue::NotSet;

use crate::{
    entity::{
        favorite_people::{
            ActiveModel as FavoritePersonActive, Column as FavPersonCol, Entity as FavoritePeople,
        },
        favorite_planets::{
            ActiveModel as FavoritePlanetActive, Column as FavPlanetCol, Entity as FavoritePlanets,
        },
        people::{Entity as People, Model as PersonModel},
        planets::{Entity as Planets, Model as PlanetModel},
        users::Entity as Users,
    },
    error::{AppError, AppResult},
    models::{FavoritePerson, FavoritePlanet},
    response::{FavoriteCreated, MessageResponse},
    services::rollback,
    state::AppState,
};

const DUPLICATE_FAVORITE: &str = "Favorite already exists";

pub async fn add_favorite_planet(
    state: &AppState,
    planet_id: i32,
    user_id: i32,
) -> AppResult<FavoriteCreated<FavoritePlanet>> {
    ensure_user(state, user_id).await?;
    if Planets::find_by_id(planet_id).one(&state.orm).await?.is_none() {
        return Err(AppError::not_found("Planet"));
    }

    let existing = FavoritePlanets::find()
        .filter(FavPlanetCol::UserId.eq(user_id))
        .filter(FavPlanetCol::PlanetId.eq(planet_id))
        .one(&state.orm)
        .await?;
    if existing.is_some() {
        return Err(AppError::Conflict(DUPLICATE_FAVORITE.into()));
    }

    let active = FavoritePlanetActive {
        id: NotSet,
        user_id: Set(Some(user_id)),
        planet_id: Set(Some(planet_id)),
    };

    // A concurrent request can slip past the check above; the unique index
    // turns its insert into the same conflict.
    let txn = state.orm.begin().await?;
    let favorite = match active.insert(&txn).await {
        Ok(favorite) => favorite,
        Err(err) => {
            rollback(txn).await;
            return Err(AppError::from_write(err, DUPLICATE_FAVORITE));
        }
    };
    txn.commit().await?;

    tracing::info!(user_id, planet_id, favorite_id = favorite.id, "favorite planet added");
    Ok(FavoriteCreated::new(
        "Planet added to favorites",
        favorite.serialize(),
    ))
}

pub async fn add_favorite_person(
    state: &AppState,
    people_id: i32,
    user_id: i32,
) -> AppResult<FavoriteCreated<FavoritePerson>> {
    ensure_user(state, user_id).await?;
    if People::find_by_id(people_id).one(&state.orm).await?.is_none() {
        return Err(AppError::not_found("Person"));
    }

    let existing = FavoritePeople::find()
        .filter(FavPersonCol::UserId.eq(user_id))
        .filter(FavPersonCol::PeopleId.eq(people_id))
        .one(&state.orm)
        .await?;
    if existing.is_some() {
        return Err(AppError::Conflict(DUPLICATE_FAVORITE.into()));
    }

    let active = FavoritePersonActive {
        id: NotSet,
        user_id: Set(Some(user_id)),
        people_id: Set(Some(people_id)),
    };

    let txn = state.orm.begin().await?;
    let favorite = match active.insert(&txn).await {
        Ok(favorite) => favorite,
        Err(err) => {
            rollback(txn).await;
            return Err(AppError::from_write(err, DUPLICATE_FAVORITE));
        }
    };
    txn.commit().await?;

    tracing::info!(user_id, people_id, favorite_id = favorite.id, "favorite person added");
    Ok(FavoriteCreated::new(
        "Person added to favorites",
        favorite.serialize(),
    ))
}

pub async fn remove_favorite_planet(
    state: &AppState,
    planet_id: i32,
    user_id: i32,
) -> AppResult<MessageResponse> {
    let favorite = FavoritePlanets::find()
        .filter(FavPlanetCol::UserId.eq(user_id))
        .filter(FavPlanetCol::PlanetId.eq(planet_id))
        .one(&state.orm)
        .await?
        .ok_or_else(|| AppError::NotFound("Planet is not in the user's favorites".into()))?;

    let txn = state.orm.begin().await?;
    if let Err(err) = FavoritePlanets::delete_by_id(favorite.id).exec(&txn).await {
        rollback(txn).await;
        return Err(err.into());
    }
    txn.commit().await?;

    tracing::info!(user_id, planet_id, "favorite planet removed");
    Ok(MessageResponse::new("Planet removed from the user's favorites"))
}

pub async fn remove_favorite_person(
    state: &AppState,
    people_id: i32,
    user_id: i32,
) -> AppResult<MessageResponse> {
    let favorite = FavoritePeople::find()
        .filter(FavPersonCol::UserId.eq(user_id))
        .filter(FavPersonCol::PeopleId.eq(people_id))
        .one(&state.orm)
        .await?
        .ok_or_else(|| AppError::NotFound("Person is not in the user's favorites".into()))?;

    let txn = state.orm.begin().await?;
    if let Err(err) = FavoritePeople::delete_by_id(favorite.id).exec(&txn).await {
        rollback(txn).await;
        return Err(err.into());
    }
    txn.commit().await?;

    tracing::info!(user_id, people_id, "favorite person removed");
    Ok(MessageResponse::new("Person removed from the user's favorites"))
}

/// The user's favorite planets and people, in the order they were added.
pub async fn find_favorites_by_user<C>(
    conn: &C,
    user_id: i32,
) -> Result<(Vec<PlanetModel>, Vec<PersonModel>), DbErr>
where
    C: ConnectionTrait,
{
    let planets = FavoritePlanets::find()
        .filter(FavPlanetCol::UserId.eq(user_id))
        .order_by_asc(FavPlanetCol::Id)
        .find_also_related(Planets)
        .all(conn)
        .await?
        .into_iter()
        .filter_map(|(_, planet)| planet)
        .collect();

    let people = FavoritePeople::find()
        .filter(FavPersonCol::UserId.eq(user_id))
        .order_by_asc(FavPersonCol::Id)
        .find_also_related(People)
        .all(conn)
        .await?
        .into_iter()
        .filter_map(|(_, person)| person)
        .collect();

    Ok((planets, people))
}

async fn ensure_user(state: &AppState, user_id: i32) -> AppResult<()> {
    if Users::find_by_id(user_id).one(&state.orm).await?.is_none() {
        return Err(AppError::not_found("User"));
    }
    Ok(())
}

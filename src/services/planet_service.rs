use sea_orm::{ActiveModelTrait, EntityTrait, QueryOrder, TransactionTrait};

use crate::{
    dto::planets::{CreatePlanetRequest, NewPlanet, PlanetList, ResidentList},
    entity::planets::{Column, Entity as Planets},
    error::{AppError, AppResult},
    models::Planet,
    response::ApiResponse,
    services::{person_service::find_people_by_homeworld, rollback},
    state::AppState,
};

pub async fn list_planets(state: &AppState) -> AppResult<ApiResponse<PlanetList>> {
    let items = Planets::find()
        .order_by_asc(Column::Id)
        .all(&state.orm)
        .await?
        .iter()
        .map(|planet| planet.serialize())
        .collect();
    Ok(ApiResponse::success("ok", PlanetList { items }))
}

pub async fn get_planet(state: &AppState, id: i32) -> AppResult<ApiResponse<Planet>> {
    let planet = Planets::find_by_id(id)
        .one(&state.orm)
        .await?
        .ok_or_else(|| AppError::not_found("Planet"))?;
    Ok(ApiResponse::success("ok", planet.serialize()))
}

pub async fn create_planet(
    state: &AppState,
    payload: CreatePlanetRequest,
) -> AppResult<ApiResponse<Planet>> {
    let new_planet = NewPlanet::try_from(payload)?;

    let txn = state.orm.begin().await?;
    let planet = match new_planet.into_active_model().insert(&txn).await {
        Ok(planet) => planet,
        Err(err) => {
            rollback(txn).await;
            return Err(AppError::from_write(
                err,
                "A planet with that name or url already exists",
            ));
        }
    };
    txn.commit().await?;

    tracing::info!(planet_id = planet.id, name = %planet.name, "planet created");
    Ok(ApiResponse::success("Planet created", planet.serialize()))
}

/// People whose homeworld is the given planet.
pub async fn list_residents(state: &AppState, planet_id: i32) -> AppResult<ApiResponse<ResidentList>> {
    if Planets::find_by_id(planet_id).one(&state.orm).await?.is_none() {
        return Err(AppError::not_found("Planet"));
    }

    let items = find_people_by_homeworld(&state.orm, planet_id)
        .await?
        .iter()
        .map(|person| person.basic_serialize())
        .collect();
    Ok(ApiResponse::success("ok", ResidentList { items }))
}

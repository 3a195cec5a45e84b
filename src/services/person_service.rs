use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder,
    TransactionTrait,
};

use crate::{
    dto::people::{CreatePersonRequest, NewPerson, PersonList},
    entity::{
        people::{Column, Entity as People, Model as PersonModel},
        planets::Entity as Planets,
    },
    error::{AppError, AppResult},
    models::Person,
    response::ApiResponse,
    services::rollback,
    state::AppState,
};

pub async fn list_people(state: &AppState) -> AppResult<ApiResponse<PersonList>> {
    let items = People::find()
        .order_by_asc(Column::Id)
        .find_also_related(Planets)
        .all(&state.orm)
        .await?
        .iter()
        .map(|(person, homeworld)| person.serialize(homeworld.as_ref()))
        .collect();
    Ok(ApiResponse::success("ok", PersonList { items }))
}

pub async fn get_person(state: &AppState, id: i32) -> AppResult<ApiResponse<Person>> {
    let (person, homeworld) = People::find_by_id(id)
        .find_also_related(Planets)
        .one(&state.orm)
        .await?
        .ok_or_else(|| AppError::not_found("Person"))?;
    Ok(ApiResponse::success("ok", person.serialize(homeworld.as_ref())))
}

pub async fn create_person(
    state: &AppState,
    payload: CreatePersonRequest,
) -> AppResult<ApiResponse<Person>> {
    let new_person = NewPerson::try_from(payload)?;

    let homeworld = Planets::find_by_id(new_person.homeworld)
        .one(&state.orm)
        .await?
        .ok_or_else(|| AppError::BadRequest("Homeworld planet does not exist".into()))?;

    let txn = state.orm.begin().await?;
    let person = match new_person.into_active_model().insert(&txn).await {
        Ok(person) => person,
        Err(err) => {
            rollback(txn).await;
            return Err(AppError::from_write(
                err,
                "A person with that name or url already exists",
            ));
        }
    };
    txn.commit().await?;

    tracing::info!(person_id = person.id, name = %person.name, "person created");
    Ok(ApiResponse::success(
        "Person created",
        person.serialize(Some(&homeworld)),
    ))
}

pub async fn find_people_by_homeworld<C>(conn: &C, planet_id: i32) -> Result<Vec<PersonModel>, DbErr>
where
    C: ConnectionTrait,
{
    People::find()
        .filter(Column::Homeworld.eq(planet_id))
        .order_by_asc(Column::Id)
        .all(conn)
        .await
}

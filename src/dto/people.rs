use chrono::NaiveDate;
use sea_orm::ActiveValue::{NotSet, Set};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    dto::required,
    entity::people::ActiveModel,
    error::AppError,
    models::Person,
};

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct CreatePersonRequest {
    pub name: Option<String>,
    pub url: Option<String>,
    /// Id of the person's home planet.
    pub homeworld: Option<i32>,
    pub height: Option<i32>,
    pub mass: Option<i32>,
    pub hair_color: Option<String>,
    pub skin_color: Option<String>,
    pub eye_color: Option<String>,
    pub birth_year: Option<String>,
    pub gender: Option<String>,
    pub created: Option<NaiveDate>,
    pub edited: Option<NaiveDate>,
    pub species: Option<String>,
    pub starships: Option<String>,
    pub vehicles: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewPerson {
    pub name: String,
    pub url: String,
    pub homeworld: i32,
    pub height: Option<i32>,
    pub mass: Option<i32>,
    pub hair_color: Option<String>,
    pub skin_color: Option<String>,
    pub eye_color: Option<String>,
    pub birth_year: Option<String>,
    pub gender: Option<String>,
    pub created: Option<NaiveDate>,
    pub edited: Option<NaiveDate>,
    pub species: Option<String>,
    pub starships: Option<String>,
    pub vehicles: Option<String>,
}

impl TryFrom<CreatePersonRequest> for NewPerson {
    type Error = AppError;

    fn try_from(payload: CreatePersonRequest) -> Result<Self, Self::Error> {
        let name = required(payload.name, "Person name is required")?;
        let url = required(payload.url, "Person url is required")?;
        let homeworld = payload
            .homeworld
            .ok_or_else(|| AppError::BadRequest("Person homeworld is required".into()))?;
        Ok(Self {
            name,
            url,
            homeworld,
            height: payload.height,
            mass: payload.mass,
            hair_color: payload.hair_color,
            skin_color: payload.skin_color,
            eye_color: payload.eye_color,
            birth_year: payload.birth_year,
            gender: payload.gender,
            created: payload.created,
            edited: payload.edited,
            species: payload.species,
            starships: payload.starships,
            vehicles: payload.vehicles,
        })
    }
}

impl NewPerson {
    pub fn into_active_model(self) -> ActiveModel {
        ActiveModel {
            id: NotSet,
            name: Set(self.name),
            url: Set(self.url),
            homeworld: Set(Some(self.homeworld)),
            height: Set(self.height),
            mass: Set(self.mass),
            hair_color: Set(self.hair_color),
            skin_color: Set(self.skin_color),
            eye_color: Set(self.eye_color),
            birth_year: Set(self.birth_year),
            gender: Set(self.gender),
            created: Set(self.created),
            edited: Set(self.edited),
            species: Set(self.species),
            starships: Set(self.starships),
            vehicles: Set(self.vehicles),
        }
    }
}

#[derive(Serialize, ToSchema)]
#[serde(transparent)]
pub struct PersonList {
    #[schema(value_type = Vec<Person>)]
    pub items: Vec<Person>,
}

use chrono::NaiveDate;
use sea_orm::ActiveValue::{NotSet, Set};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    dto::required,
    entity::planets::ActiveModel,
    error::AppError,
    models::{Planet, PersonBasic},
};

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct CreatePlanetRequest {
    pub name: Option<String>,
    pub url: Option<String>,
    pub climate: Option<String>,
    pub population: Option<i64>,
    pub terrain: Option<String>,
    pub surface_water: Option<i32>,
    pub diameter: Option<i32>,
    pub rotation_period: Option<i32>,
    pub orbital_period: Option<i32>,
    pub gravity: Option<String>,
    pub created: Option<NaiveDate>,
    pub edited: Option<NaiveDate>,
}

/// A planet that passed validation and can be inserted.
#[derive(Debug, Clone, PartialEq)]
pub struct NewPlanet {
    pub name: String,
    pub url: String,
    pub climate: Option<String>,
    pub population: Option<i64>,
    pub terrain: Option<String>,
    pub surface_water: Option<i32>,
    pub diameter: Option<i32>,
    pub rotation_period: Option<i32>,
    pub orbital_period: Option<i32>,
    pub gravity: Option<String>,
    pub created: Option<NaiveDate>,
    pub edited: Option<NaiveDate>,
}

impl TryFrom<CreatePlanetRequest> for NewPlanet {
    type Error = AppError;

    fn try_from(payload: CreatePlanetRequest) -> Result<Self, Self::Error> {
        let name = required(payload.name, "Planet name is required")?;
        let url = required(payload.url, "Planet url is required")?;
        Ok(Self {
            name,
            url,
            climate: payload.climate,
            population: payload.population,
            terrain: payload.terrain,
            surface_water: payload.surface_water,
            diameter: payload.diameter,
            rotation_period: payload.rotation_period,
            orbital_period: payload.orbital_period,
            gravity: payload.gravity,
            created: payload.created,
            edited: payload.edited,
        })
    }
}

impl NewPlanet {
    pub fn into_active_model(self) -> ActiveModel {
        ActiveModel {
            id: NotSet,
            name: Set(self.name),
            url: Set(Some(self.url)),
            climate: Set(self.climate),
            population: Set(self.population),
            terrain: Set(self.terrain),
            surface_water: Set(self.surface_water),
            diameter: Set(self.diameter),
            rotation_period: Set(self.rotation_period),
            orbital_period: Set(self.orbital_period),
            gravity: Set(self.gravity),
            created: Set(self.created),
            edited: Set(self.edited),
        }
    }
}

#[derive(Serialize, ToSchema)]
#[serde(transparent)]
pub struct PlanetList {
    #[schema(value_type = Vec<Planet>)]
    pub items: Vec<Planet>,
}

#[derive(Serialize, ToSchema)]
#[serde(transparent)]
pub struct ResidentList {
    #[schema(value_type = Vec<PersonBasic>)]
    pub items: Vec<PersonBasic>,
}

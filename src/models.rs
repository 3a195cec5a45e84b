use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::entity::{favorite_people, favorite_planets, people, planets, users};

/// Public view of a user. The stored password never leaves the entity layer.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct User {
    pub id: i32,
    pub email: String,
    pub is_active: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Planet {
    pub id: i32,
    pub name: String,
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

/// Reduced planet projection used when a planet is embedded in another response.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PlanetBasic {
    pub id: i32,
    pub name: String,
    pub url: Option<String>,
    pub climate: Option<String>,
    pub population: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Person {
    pub id: i32,
    pub name: String,
    pub url: String,
    pub homeworld: Option<PlanetBasic>,
    pub height: Option<i32>,
    pub mass: Option<i32>,
    pub hair_color: Option<String>,
    pub skin_color: Option<String>,
    pub eye_color: Option<String>,
    pub birth_year: Option<String>,
    pub gender: Option<String>,
    pub species: Option<String>,
    pub starships: Option<String>,
    pub vehicles: Option<String>,
    pub created: Option<NaiveDate>,
    pub edited: Option<NaiveDate>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PersonBasic {
    pub id: i32,
    pub name: String,
    pub url: String,
    pub gender: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct FavoritePlanet {
    pub id: i32,
    pub user_id: Option<i32>,
    pub planet_id: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct FavoritePerson {
    pub id: i32,
    pub user_id: Option<i32>,
    pub people_id: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserFavorites {
    pub user_info: User,
    pub favorites_planets: Vec<PlanetBasic>,
    pub favorites_peoples: Vec<PersonBasic>,
}

impl users::Model {
    pub fn serialize(&self) -> User {
        User {
            id: self.id,
            email: self.email.clone(),
            is_active: self.is_active,
        }
    }
}

impl planets::Model {
    pub fn serialize(&self) -> Planet {
        Planet {
            id: self.id,
            name: self.name.clone(),
            url: self.url.clone(),
            climate: self.climate.clone(),
            population: self.population,
            terrain: self.terrain.clone(),
            surface_water: self.surface_water,
            diameter: self.diameter,
            rotation_period: self.rotation_period,
            orbital_period: self.orbital_period,
            gravity: self.gravity.clone(),
            created: self.created,
            edited: self.edited,
        }
    }

    pub fn basic_serialize(&self) -> PlanetBasic {
        PlanetBasic {
            id: self.id,
            name: self.name.clone(),
            url: self.url.clone(),
            climate: self.climate.clone(),
            population: self.population,
        }
    }
}

impl people::Model {
    /// `homeworld` is the planet row this person's `homeworld` key points at, if any.
    pub fn serialize(&self, homeworld: Option<&planets::Model>) -> Person {
        Person {
            id: self.id,
            name: self.name.clone(),
            url: self.url.clone(),
            homeworld: homeworld.map(planets::Model::basic_serialize),
            height: self.height,
            mass: self.mass,
            hair_color: self.hair_color.clone(),
            skin_color: self.skin_color.clone(),
            eye_color: self.eye_color.clone(),
            birth_year: self.birth_year.clone(),
            gender: self.gender.clone(),
            species: self.species.clone(),
            starships: self.starships.clone(),
            vehicles: self.vehicles.clone(),
            created: self.created,
            edited: self.edited,
        }
    }

    pub fn basic_serialize(&self) -> PersonBasic {
        PersonBasic {
            id: self.id,
            name: self.name.clone(),
            url: self.url.clone(),
            gender: self.gender.clone(),
        }
    }
}

impl favorite_planets::Model {
    pub fn serialize(&self) -> FavoritePlanet {
        FavoritePlanet {
            id: self.id,
            user_id: self.user_id,
            planet_id: self.planet_id,
        }
    }
}

impl favorite_people::Model {
    pub fn serialize(&self) -> FavoritePerson {
        FavoritePerson {
            id: self.id,
            user_id: self.user_id,
            people_id: self.people_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tatooine() -> planets::Model {
        planets::Model {
            id: 1,
            name: "Tatooine".into(),
            url: Some("https://swapi.dev/api/planets/1/".into()),
            climate: Some("arid".into()),
            population: Some(200_000),
            terrain: Some("desert".into()),
            surface_water: Some(1),
            diameter: Some(10_465),
            rotation_period: Some(23),
            orbital_period: Some(304),
            gravity: Some("1 standard".into()),
            created: NaiveDate::from_ymd_opt(2014, 12, 9),
            edited: None,
        }
    }

    fn luke() -> people::Model {
        people::Model {
            id: 7,
            name: "Luke Skywalker".into(),
            url: "https://swapi.dev/api/people/1/".into(),
            homeworld: Some(1),
            height: Some(172),
            mass: Some(77),
            hair_color: Some("blond".into()),
            skin_color: Some("fair".into()),
            eye_color: Some("blue".into()),
            birth_year: Some("19BBY".into()),
            gender: Some("male".into()),
            created: None,
            edited: None,
            species: None,
            starships: Some("X-wing".into()),
            vehicles: None,
        }
    }

    #[test]
    fn user_projection_never_contains_password() {
        let user = users::Model {
            id: 3,
            email: "leia@rebellion.org".into(),
            password: "hunter2".into(),
            is_active: true,
        };
        let json = serde_json::to_value(user.serialize()).unwrap();
        assert!(json.get("password").is_none());
        assert_eq!(json["email"], "leia@rebellion.org");
    }

    #[test]
    fn planet_basic_projection_keeps_only_summary_fields() {
        let json = serde_json::to_value(tatooine().basic_serialize()).unwrap();
        let keys: Vec<&str> = json.as_object().unwrap().keys().map(String::as_str).collect();
        assert_eq!(keys.len(), 5);
        for key in ["id", "name", "url", "climate", "population"] {
            assert!(keys.contains(&key), "missing {key}");
        }
    }

    #[test]
    fn person_embeds_homeworld_summary() {
        let planet = tatooine();
        let person = luke().serialize(Some(&planet));
        let homeworld = person.homeworld.expect("homeworld");
        assert_eq!(homeworld.id, 1);
        assert_eq!(homeworld.name, "Tatooine");
        assert_eq!(person.gender.as_deref(), Some("male"));
        assert_eq!(person.birth_year.as_deref(), Some("19BBY"));
    }

    #[test]
    fn person_without_known_homeworld_serializes_null() {
        let json = serde_json::to_value(luke().serialize(None)).unwrap();
        assert!(json["homeworld"].is_null());
        assert_eq!(json["id"], 7);
    }
}

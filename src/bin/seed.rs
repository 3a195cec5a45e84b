use chrono::NaiveDate;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter};
use starwars_api::{
    config::AppConfig,
    db::{create_orm_conn, run_migrations},
    dto::{
        people::CreatePersonRequest,
        planets::CreatePlanetRequest,
        users::NewUser,
    },
    entity::{people, planets, users, People, Planets, Users},
    services::{person_service, planet_service, user_service},
    state::AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;

    let orm = create_orm_conn(&config.database_url, 1).await?;
    // Ensure the schema exists.
    run_migrations(&orm).await?;
    let state = AppState { orm };

    ensure_user(&state, "luke@example.com", "luke123").await?;
    ensure_user(&state, "leia@example.com", "leia123").await?;
    seed_planets(&state).await?;
    seed_people(&state).await?;

    println!("Seed completed");
    Ok(())
}

async fn ensure_user(state: &AppState, email: &str, password: &str) -> anyhow::Result<()> {
    let existing = Users::find()
        .filter(users::Column::Email.eq(email))
        .one(&state.orm)
        .await?;
    if existing.is_some() {
        println!("User {email} already present");
        return Ok(());
    }

    user_service::create_user(
        state,
        NewUser {
            email: email.to_string(),
            password: password.to_string(),
            is_active: true,
        },
    )
    .await?;
    println!("Ensured user {email}");
    Ok(())
}

async fn seed_planets(state: &AppState) -> anyhow::Result<()> {
    let planets = vec![
        ("Tatooine", 1, "arid", 200_000_i64, "desert", 1, 10_465, 23, 304, "1 standard"),
        ("Alderaan", 2, "temperate", 2_000_000_000, "grasslands, mountains", 40, 12_500, 24, 364, "1 standard"),
        ("Hoth", 4, "frozen", 0, "tundra, ice caves, mountain ranges", 100, 7_200, 23, 549, "1.1 standard"),
    ];

    for (name, swapi_id, climate, population, terrain, water, diameter, rotation, orbit, gravity) in planets {
        let exists = Planets::find()
            .filter(planets::Column::Name.eq(name))
            .one(&state.orm)
            .await?;
        if exists.is_some() {
            continue;
        }

        let request = CreatePlanetRequest {
            name: Some(name.to_string()),
            url: Some(format!("https://swapi.dev/api/planets/{swapi_id}/")),
            climate: Some(climate.to_string()),
            population: Some(population),
            terrain: Some(terrain.to_string()),
            surface_water: Some(water),
            diameter: Some(diameter),
            rotation_period: Some(rotation),
            orbital_period: Some(orbit),
            gravity: Some(gravity.to_string()),
            created: NaiveDate::from_ymd_opt(2014, 12, 9),
            edited: None,
        };
        planet_service::create_planet(state, request).await?;
    }

    println!("Seeded planets");
    Ok(())
}

async fn seed_people(state: &AppState) -> anyhow::Result<()> {
    let people = vec![
        ("Luke Skywalker", 1, "Tatooine", 172, 77, "blond", "fair", "blue", "19BBY", "male"),
        ("Leia Organa", 5, "Alderaan", 150, 49, "brown", "light", "brown", "19BBY", "female"),
        ("Owen Lars", 6, "Tatooine", 178, 120, "brown, grey", "light", "blue", "52BBY", "male"),
    ];

    for (name, swapi_id, homeworld, height, mass, hair, skin, eyes, birth_year, gender) in people {
        let exists = People::find()
            .filter(people::Column::Name.eq(name))
            .one(&state.orm)
            .await?;
        if exists.is_some() {
            continue;
        }

        let planet = Planets::find()
            .filter(planets::Column::Name.eq(homeworld))
            .one(&state.orm)
            .await?
            .ok_or_else(|| anyhow::anyhow!("homeworld {homeworld} was not seeded"))?;

        let request = CreatePersonRequest {
            name: Some(name.to_string()),
            url: Some(format!("https://swapi.dev/api/people/{swapi_id}/")),
            homeworld: Some(planet.id),
            height: Some(height),
            mass: Some(mass),
            hair_color: Some(hair.to_string()),
            skin_color: Some(skin.to_string()),
            eye_color: Some(eyes.to_string()),
            birth_year: Some(birth_year.to_string()),
            gender: Some(gender.to_string()),
            created: NaiveDate::from_ymd_opt(2014, 12, 9),
            ..Default::default()
        };
        person_service::create_person(state, request).await?;
    }

    println!("Seeded people");
    Ok(())
}

use utoipa::{OpenApi, openapi::OpenApi as OpenApiSpec};
use utoipa_scalar::{Scalar, Servable};

use crate::{
    dto::{
        people::{CreatePersonRequest, PersonList},
        planets::{CreatePlanetRequest, PlanetList, ResidentList},
        users::UserList,
    },
    error::ErrorBody,
    models::{
        FavoritePerson, FavoritePlanet, Person, PersonBasic, Planet, PlanetBasic, User,
        UserFavorites,
    },
    response::{ApiResponse, FavoriteCreated, MessageResponse},
    routes::{favorites, health, people, planets, sitemap, users},
};

#[derive(OpenApi)]
#[openapi(
    paths(
        sitemap::sitemap,
        health::health_check,
        users::list_users,
        users::get_user_favorites,
        planets::list_planets,
        planets::get_planet,
        planets::list_residents,
        planets::create_planet,
        people::list_people,
        people::get_person,
        people::create_person,
        favorites::add_favorite_planet,
        favorites::add_favorite_person,
        favorites::remove_favorite_planet,
        favorites::remove_favorite_person
    ),
    components(
        schemas(
            User,
            Planet,
            PlanetBasic,
            Person,
            PersonBasic,
            FavoritePlanet,
            FavoritePerson,
            UserFavorites,
            CreatePlanetRequest,
            CreatePersonRequest,
            UserList,
            PlanetList,
            PersonList,
            ResidentList,
            ErrorBody,
            MessageResponse,
            sitemap::RouteEntry,
            ApiResponse<Planet>,
            ApiResponse<Person>,
            ApiResponse<UserFavorites>,
            FavoriteCreated<FavoritePlanet>,
            FavoriteCreated<FavoritePerson>
        )
    ),
    tags(
        (name = "Sitemap", description = "Route listing"),
        (name = "Health", description = "Health check endpoint"),
        (name = "Users", description = "User endpoints"),
        (name = "Planets", description = "Planet endpoints"),
        (name = "People", description = "People endpoints"),
        (name = "Favorites", description = "Favorite endpoints"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}

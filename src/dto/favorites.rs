use serde::Deserialize;
use utoipa::IntoParams;

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Path)]
pub struct FavoritePlanetPath {
    pub planet_id: i32,
    pub user_id: i32,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Path)]
pub struct FavoritePersonPath {
    pub people_id: i32,
    pub user_id: i32,
}

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "planet")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
    #[sea_orm(unique)]
    pub url: Option<String>,
    pub climate: Option<String>,
    pub population: Option<i64>,
    pub terrain: Option<String>,
    pub surface_water: Option<i32>,
    pub diameter: Option<i32>,
    pub rotation_period: Option<i32>,
    pub orbital_period: Option<i32>,
    pub gravity: Option<String>,
    pub created: Option<Date>,
    pub edited: Option<Date>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::people::Entity")]
    People,
    #[sea_orm(has_many = "super::favorite_planets::Entity")]
    FavoritePlanets,
}

impl Related<super::people::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::People.def()
    }
}

impl Related<super::favorite_planets::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FavoritePlanets.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

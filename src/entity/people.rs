use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "people")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
    #[sea_orm(unique)]
    pub url: String,
    /// Foreign key to `planet.id`. Required by the API, nullable in storage.
    pub homeworld: Option<i32>,
    pub height: Option<i32>,
    pub mass: Option<i32>,
    pub hair_color: Option<String>,
    pub skin_color: Option<String>,
    pub eye_color: Option<String>,
    pub birth_year: Option<String>,
    pub gender: Option<String>,
    pub created: Option<Date>,
    pub edited: Option<Date>,
    pub species: Option<String>,
    pub starships: Option<String>,
    pub vehicles: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::planets::Entity",
        from = "Column::Homeworld",
        to = "super::planets::Column::Id",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    Homeworld,
    #[sea_orm(has_many = "super::favorite_people::Entity")]
    FavoritePeople,
}

impl Related<super::planets::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Homeworld.def()
    }
}

impl Related<super::favorite_people::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FavoritePeople.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FavoritesPlanets::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(FavoritesPlanets::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(FavoritesPlanets::UserId).integer())
                    .col(ColumnDef::new(FavoritesPlanets::PlanetId).integer())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_favorites_planets_user")
                            .from(FavoritesPlanets::Table, FavoritesPlanets::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_favorites_planets_planet")
                            .from(FavoritesPlanets::Table, FavoritesPlanets::PlanetId)
                            .to(Planet::Table, Planet::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // One link per (user, planet); closes the check-then-insert race.
        manager
            .create_index(
                Index::create()
                    .name("uq_favorites_planets_user_planet")
                    .table(FavoritesPlanets::Table)
                    .col(FavoritesPlanets::UserId)
                    .col(FavoritesPlanets::PlanetId)
                    .unique()
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(FavoritesPeoples::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(FavoritesPeoples::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(FavoritesPeoples::UserId).integer())
                    .col(ColumnDef::new(FavoritesPeoples::PeopleId).integer())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_favorites_peoples_user")
                            .from(FavoritesPeoples::Table, FavoritesPeoples::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_favorites_peoples_people")
                            .from(FavoritesPeoples::Table, FavoritesPeoples::PeopleId)
                            .to(People::Table, People::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("uq_favorites_peoples_user_people")
                    .table(FavoritesPeoples::Table)
                    .col(FavoritesPeoples::UserId)
                    .col(FavoritesPeoples::PeopleId)
                    .unique()
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(FavoritesPeoples::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(FavoritesPlanets::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum FavoritesPlanets {
    Table,
    Id,
    UserId,
    PlanetId,
}

#[derive(DeriveIden)]
enum FavoritesPeoples {
    Table,
    Id,
    UserId,
    PeopleId,
}

#[derive(DeriveIden)]
enum User {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Planet {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum People {
    Table,
    Id,
}

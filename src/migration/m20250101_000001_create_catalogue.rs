use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(User::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(User::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(User::Email).string_len(120).not_null().unique_key())
                    .col(ColumnDef::new(User::Password).string().not_null())
                    .col(ColumnDef::new(User::IsActive).boolean().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Planet::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Planet::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Planet::Name).string_len(50).not_null().unique_key())
                    .col(ColumnDef::new(Planet::Url).string_len(200).unique_key())
                    .col(ColumnDef::new(Planet::Climate).string_len(30))
                    .col(ColumnDef::new(Planet::Population).big_integer())
                    .col(ColumnDef::new(Planet::Terrain).string_len(30))
                    .col(ColumnDef::new(Planet::SurfaceWater).integer())
                    .col(ColumnDef::new(Planet::Diameter).integer())
                    .col(ColumnDef::new(Planet::RotationPeriod).integer())
                    .col(ColumnDef::new(Planet::OrbitalPeriod).integer())
                    .col(ColumnDef::new(Planet::Gravity).string_len(20))
                    .col(ColumnDef::new(Planet::Created).date())
                    .col(ColumnDef::new(Planet::Edited).date())
                    .to_owned(),
            )
            .await?;

        // homeworld stays nullable in storage; the API layer requires it.
        manager
            .create_table(
                Table::create()
                    .table(People::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(People::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(People::Name).string_len(50).not_null().unique_key())
                    .col(ColumnDef::new(People::Url).string_len(200).not_null().unique_key())
                    .col(ColumnDef::new(People::Homeworld).integer())
                    .col(ColumnDef::new(People::Height).integer())
                    .col(ColumnDef::new(People::Mass).integer())
                    .col(ColumnDef::new(People::HairColor).string_len(30))
                    .col(ColumnDef::new(People::SkinColor).string_len(30))
                    .col(ColumnDef::new(People::EyeColor).string_len(30))
                    .col(ColumnDef::new(People::BirthYear).string_len(20))
                    .col(ColumnDef::new(People::Gender).string_len(20))
                    .col(ColumnDef::new(People::Created).date())
                    .col(ColumnDef::new(People::Edited).date())
                    .col(ColumnDef::new(People::Species).string_len(200))
                    .col(ColumnDef::new(People::Starships).string_len(200))
                    .col(ColumnDef::new(People::Vehicles).string_len(200))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_people_homeworld")
                            .from(People::Table, People::Homeworld)
                            .to(Planet::Table, Planet::Id)
                            .on_delete(ForeignKeyAction::NoAction),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_people_homeworld")
                    .table(People::Table)
                    .col(People::Homeworld)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(People::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Planet::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(User::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum User {
    Table,
    Id,
    Email,
    Password,
    IsActive,
}

#[derive(DeriveIden)]
enum Planet {
    Table,
    Id,
    Name,
    Url,
    Climate,
    Population,
    Terrain,
    SurfaceWater,
    Diameter,
    RotationPeriod,
    OrbitalPeriod,
    Gravity,
    Created,
    Edited,
}

#[derive(DeriveIden)]
enum People {
    Table,
    Id,
    Name,
    Url,
    Homeworld,
    Height,
    Mass,
    HairColor,
    SkinColor,
    EyeColor,
    BirthYear,
    Gender,
    Created,
    Edited,
    Species,
    Starships,
    Vehicles,
}

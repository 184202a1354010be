use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Planet::Table)
                    .if_not_exists()
                    .col(pk_auto(Planet::Id))
                    .col(string(Planet::Name))
                    .col(integer_null(Planet::Population))
                    .col(string_null(Planet::Gravity))
                    .col(string_null(Planet::Climate))
                    .col(string_null(Planet::Terrain))
                    .col(string_null(Planet::Created))
                    .col(integer_null(Planet::SurfaceWater))
                    .col(integer_null(Planet::Diameter))
                    .col(integer_null(Planet::OrbitalPeriod))
                    .col(integer_null(Planet::RotationPeriod))
                    .col(string_null(Planet::Pic))
                    .col(string_null(Planet::Url))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Planet::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Planet {
    Table,
    Id,
    Name,
    Population,
    Gravity,
    Climate,
    Terrain,
    Created,
    SurfaceWater,
    Diameter,
    OrbitalPeriod,
    RotationPeriod,
    Pic,
    Url,
}

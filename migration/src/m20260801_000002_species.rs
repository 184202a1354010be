use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260801_000001_planet::Planet;

static IDX_SPECIES_HOMEWORLD_ID: &str = "idx_species_homeworld_id";
static FK_SPECIES_HOMEWORLD_ID: &str = "fk_species_homeworld_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Species::Table)
                    .if_not_exists()
                    .col(pk_auto(Species::Id))
                    .col(string(Species::Name))
                    .col(string_null(Species::Classification))
                    .col(string_null(Species::Designation))
                    .col(integer_null(Species::AverageHeight))
                    .col(string_null(Species::SkinColors))
                    .col(string_null(Species::HairColors))
                    .col(string_null(Species::EyeColors))
                    .col(integer_null(Species::HomeworldId))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_SPECIES_HOMEWORLD_ID)
                    .table(Species::Table)
                    .col(Species::HomeworldId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_SPECIES_HOMEWORLD_ID)
                    .from_tbl(Species::Table)
                    .from_col(Species::HomeworldId)
                    .to_tbl(Planet::Table)
                    .to_col(Planet::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_SPECIES_HOMEWORLD_ID)
                    .table(Species::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_SPECIES_HOMEWORLD_ID)
                    .table(Species::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Species::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Species {
    Table,
    Id,
    Name,
    Classification,
    Designation,
    AverageHeight,
    SkinColors,
    HairColors,
    EyeColors,
    HomeworldId,
}

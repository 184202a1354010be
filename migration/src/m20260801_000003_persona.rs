use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20260801_000001_planet::Planet, m20260801_000002_species::Species};

static IDX_PERSONA_HOMEWORLD_ID: &str = "idx_persona_homeworld_id";
static IDX_PERSONA_SPECIES_ID: &str = "idx_persona_species_id";
static FK_PERSONA_HOMEWORLD_ID: &str = "fk_persona_homeworld_id";
static FK_PERSONA_SPECIES_ID: &str = "fk_persona_species_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Persona::Table)
                    .if_not_exists()
                    .col(pk_auto(Persona::Id))
                    .col(string(Persona::Name))
                    .col(date(Persona::BirthYear))
                    .col(string_null(Persona::Created))
                    .col(integer_null(Persona::HomeworldId))
                    .col(string_null(Persona::EyeColor))
                    .col(string_null(Persona::Gender))
                    .col(string_null(Persona::HairColor))
                    .col(integer_null(Persona::Height))
                    .col(integer_null(Persona::Mass))
                    .col(string_null(Persona::SkinColor))
                    .col(string_null(Persona::Pic))
                    .col(string_null(Persona::Url))
                    .col(integer_null(Persona::SpeciesId))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_PERSONA_HOMEWORLD_ID)
                    .table(Persona::Table)
                    .col(Persona::HomeworldId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_PERSONA_SPECIES_ID)
                    .table(Persona::Table)
                    .col(Persona::SpeciesId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_PERSONA_HOMEWORLD_ID)
                    .from_tbl(Persona::Table)
                    .from_col(Persona::HomeworldId)
                    .to_tbl(Planet::Table)
                    .to_col(Planet::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_PERSONA_SPECIES_ID)
                    .from_tbl(Persona::Table)
                    .from_col(Persona::SpeciesId)
                    .to_tbl(Species::Table)
                    .to_col(Species::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_PERSONA_SPECIES_ID)
                    .table(Persona::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_PERSONA_HOMEWORLD_ID)
                    .table(Persona::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_PERSONA_SPECIES_ID)
                    .table(Persona::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_PERSONA_HOMEWORLD_ID)
                    .table(Persona::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Persona::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Persona {
    Table,
    Id,
    Name,
    BirthYear,
    Created,
    HomeworldId,
    EyeColor,
    Gender,
    HairColor,
    Height,
    Mass,
    SkinColor,
    Pic,
    Url,
    SpeciesId,
}

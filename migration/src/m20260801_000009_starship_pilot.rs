use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20260801_000003_persona::Persona, m20260801_000006_starship::Starship};

static IDX_STARSHIP_PILOT_PERSONA_ID: &str = "idx_starship_pilot_persona_id";
static FK_STARSHIP_PILOT_STARSHIP_ID: &str = "fk_starship_pilot_starship_id";
static FK_STARSHIP_PILOT_PERSONA_ID: &str = "fk_starship_pilot_persona_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(StarshipPilot::Table)
                    .if_not_exists()
                    .col(integer(StarshipPilot::StarshipId))
                    .col(integer(StarshipPilot::PersonaId))
                    .primary_key(
                        Index::create()
                            .col(StarshipPilot::StarshipId)
                            .col(StarshipPilot::PersonaId),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_STARSHIP_PILOT_PERSONA_ID)
                    .table(StarshipPilot::Table)
                    .col(StarshipPilot::PersonaId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_STARSHIP_PILOT_STARSHIP_ID)
                    .from_tbl(StarshipPilot::Table)
                    .from_col(StarshipPilot::StarshipId)
                    .to_tbl(Starship::Table)
                    .to_col(Starship::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_STARSHIP_PILOT_PERSONA_ID)
                    .from_tbl(StarshipPilot::Table)
                    .from_col(StarshipPilot::PersonaId)
                    .to_tbl(Persona::Table)
                    .to_col(Persona::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_STARSHIP_PILOT_PERSONA_ID)
                    .table(StarshipPilot::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_STARSHIP_PILOT_STARSHIP_ID)
                    .table(StarshipPilot::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_STARSHIP_PILOT_PERSONA_ID)
                    .table(StarshipPilot::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(StarshipPilot::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum StarshipPilot {
    Table,
    StarshipId,
    PersonaId,
}

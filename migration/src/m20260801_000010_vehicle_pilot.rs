use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20260801_000003_persona::Persona, m20260801_000007_vehicle::Vehicle};

static IDX_VEHICLE_PILOT_PERSONA_ID: &str = "idx_vehicle_pilot_persona_id";
static FK_VEHICLE_PILOT_VEHICLE_ID: &str = "fk_vehicle_pilot_vehicle_id";
static FK_VEHICLE_PILOT_PERSONA_ID: &str = "fk_vehicle_pilot_persona_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(VehiclePilot::Table)
                    .if_not_exists()
                    .col(integer(VehiclePilot::VehicleId))
                    .col(integer(VehiclePilot::PersonaId))
                    .primary_key(
                        Index::create()
                            .col(VehiclePilot::VehicleId)
                            .col(VehiclePilot::PersonaId),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_VEHICLE_PILOT_PERSONA_ID)
                    .table(VehiclePilot::Table)
                    .col(VehiclePilot::PersonaId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_VEHICLE_PILOT_VEHICLE_ID)
                    .from_tbl(VehiclePilot::Table)
                    .from_col(VehiclePilot::VehicleId)
                    .to_tbl(Vehicle::Table)
                    .to_col(Vehicle::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_VEHICLE_PILOT_PERSONA_ID)
                    .from_tbl(VehiclePilot::Table)
                    .from_col(VehiclePilot::PersonaId)
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
                    .name(FK_VEHICLE_PILOT_PERSONA_ID)
                    .table(VehiclePilot::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_VEHICLE_PILOT_VEHICLE_ID)
                    .table(VehiclePilot::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_VEHICLE_PILOT_PERSONA_ID)
                    .table(VehiclePilot::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(VehiclePilot::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum VehiclePilot {
    Table,
    VehicleId,
    PersonaId,
}

use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20260801_000007_vehicle::Vehicle, m20260801_000008_film::Film};

static IDX_FILM_VEHICLE_VEHICLE_ID: &str = "idx_film_vehicle_vehicle_id";
static FK_FILM_VEHICLE_FILM_ID: &str = "fk_film_vehicle_film_id";
static FK_FILM_VEHICLE_VEHICLE_ID: &str = "fk_film_vehicle_vehicle_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FilmVehicle::Table)
                    .if_not_exists()
                    .col(integer(FilmVehicle::FilmId))
                    .col(integer(FilmVehicle::VehicleId))
                    .primary_key(
                        Index::create()
                            .col(FilmVehicle::FilmId)
                            .col(FilmVehicle::VehicleId),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_FILM_VEHICLE_VEHICLE_ID)
                    .table(FilmVehicle::Table)
                    .col(FilmVehicle::VehicleId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_FILM_VEHICLE_FILM_ID)
                    .from_tbl(FilmVehicle::Table)
                    .from_col(FilmVehicle::FilmId)
                    .to_tbl(Film::Table)
                    .to_col(Film::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_FILM_VEHICLE_VEHICLE_ID)
                    .from_tbl(FilmVehicle::Table)
                    .from_col(FilmVehicle::VehicleId)
                    .to_tbl(Vehicle::Table)
                    .to_col(Vehicle::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_FILM_VEHICLE_VEHICLE_ID)
                    .table(FilmVehicle::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_FILM_VEHICLE_FILM_ID)
                    .table(FilmVehicle::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_FILM_VEHICLE_VEHICLE_ID)
                    .table(FilmVehicle::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(FilmVehicle::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum FilmVehicle {
    Table,
    FilmId,
    VehicleId,
}

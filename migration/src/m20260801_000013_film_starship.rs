use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20260801_000006_starship::Starship, m20260801_000008_film::Film};

static IDX_FILM_STARSHIP_STARSHIP_ID: &str = "idx_film_starship_starship_id";
static FK_FILM_STARSHIP_FILM_ID: &str = "fk_film_starship_film_id";
static FK_FILM_STARSHIP_STARSHIP_ID: &str = "fk_film_starship_starship_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FilmStarship::Table)
                    .if_not_exists()
                    .col(integer(FilmStarship::FilmId))
                    .col(integer(FilmStarship::StarshipId))
                    .primary_key(
                        Index::create()
                            .col(FilmStarship::FilmId)
                            .col(FilmStarship::StarshipId),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_FILM_STARSHIP_STARSHIP_ID)
                    .table(FilmStarship::Table)
                    .col(FilmStarship::StarshipId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_FILM_STARSHIP_FILM_ID)
                    .from_tbl(FilmStarship::Table)
                    .from_col(FilmStarship::FilmId)
                    .to_tbl(Film::Table)
                    .to_col(Film::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_FILM_STARSHIP_STARSHIP_ID)
                    .from_tbl(FilmStarship::Table)
                    .from_col(FilmStarship::StarshipId)
                    .to_tbl(Starship::Table)
                    .to_col(Starship::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_FILM_STARSHIP_STARSHIP_ID)
                    .table(FilmStarship::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_FILM_STARSHIP_FILM_ID)
                    .table(FilmStarship::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_FILM_STARSHIP_STARSHIP_ID)
                    .table(FilmStarship::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(FilmStarship::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum FilmStarship {
    Table,
    FilmId,
    StarshipId,
}

use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20260801_000003_persona::Persona, m20260801_000008_film::Film};

static IDX_FILM_CHARACTER_PERSONA_ID: &str = "idx_film_character_persona_id";
static FK_FILM_CHARACTER_FILM_ID: &str = "fk_film_character_film_id";
static FK_FILM_CHARACTER_PERSONA_ID: &str = "fk_film_character_persona_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FilmCharacter::Table)
                    .if_not_exists()
                    .col(integer(FilmCharacter::FilmId))
                    .col(integer(FilmCharacter::PersonaId))
                    .primary_key(
                        Index::create()
                            .col(FilmCharacter::FilmId)
                            .col(FilmCharacter::PersonaId),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_FILM_CHARACTER_PERSONA_ID)
                    .table(FilmCharacter::Table)
                    .col(FilmCharacter::PersonaId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_FILM_CHARACTER_FILM_ID)
                    .from_tbl(FilmCharacter::Table)
                    .from_col(FilmCharacter::FilmId)
                    .to_tbl(Film::Table)
                    .to_col(Film::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_FILM_CHARACTER_PERSONA_ID)
                    .from_tbl(FilmCharacter::Table)
                    .from_col(FilmCharacter::PersonaId)
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
                    .name(FK_FILM_CHARACTER_PERSONA_ID)
                    .table(FilmCharacter::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_FILM_CHARACTER_FILM_ID)
                    .table(FilmCharacter::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_FILM_CHARACTER_PERSONA_ID)
                    .table(FilmCharacter::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(FilmCharacter::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum FilmCharacter {
    Table,
    FilmId,
    PersonaId,
}

use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, DeleteResult, EntityTrait,
    ModelTrait,
};

use crate::model::catalog::NewFilm;

pub struct FilmRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FilmRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, film: NewFilm) -> Result<entity::film::Model, DbErr> {
        let film = entity::film::ActiveModel {
            title: ActiveValue::Set(film.title),
            episode_id: ActiveValue::Set(film.episode_id),
            director: ActiveValue::Set(film.director),
            producer: ActiveValue::Set(film.producer),
            release_date: ActiveValue::Set(film.release_date),
            ..Default::default()
        };

        film.insert(self.db).await
    }

    pub async fn get_by_id(&self, film_id: i32) -> Result<Option<entity::film::Model>, DbErr> {
        entity::prelude::Film::find_by_id(film_id).one(self.db).await
    }

    pub async fn add_character(&self, film_id: i32, persona_id: i32) -> Result<(), DbErr> {
        let link = entity::film_character::ActiveModel {
            film_id: ActiveValue::Set(film_id),
            persona_id: ActiveValue::Set(persona_id),
        };

        entity::prelude::FilmCharacter::insert(link)
            .exec_without_returning(self.db)
            .await?;

        Ok(())
    }

    pub async fn add_planet(&self, film_id: i32, planet_id: i32) -> Result<(), DbErr> {
        let link = entity::film_planet::ActiveModel {
            film_id: ActiveValue::Set(film_id),
            planet_id: ActiveValue::Set(planet_id),
        };

        entity::prelude::FilmPlanet::insert(link)
            .exec_without_returning(self.db)
            .await?;

        Ok(())
    }

    pub async fn add_starship(&self, film_id: i32, starship_id: i32) -> Result<(), DbErr> {
        let link = entity::film_starship::ActiveModel {
            film_id: ActiveValue::Set(film_id),
            starship_id: ActiveValue::Set(starship_id),
        };

        entity::prelude::FilmStarship::insert(link)
            .exec_without_returning(self.db)
            .await?;

        Ok(())
    }

    pub async fn add_vehicle(&self, film_id: i32, vehicle_id: i32) -> Result<(), DbErr> {
        let link = entity::film_vehicle::ActiveModel {
            film_id: ActiveValue::Set(film_id),
            vehicle_id: ActiveValue::Set(vehicle_id),
        };

        entity::prelude::FilmVehicle::insert(link)
            .exec_without_returning(self.db)
            .await?;

        Ok(())
    }

    pub async fn remove_character(
        &self,
        film_id: i32,
        persona_id: i32,
    ) -> Result<DeleteResult, DbErr> {
        entity::prelude::FilmCharacter::delete_by_id((film_id, persona_id))
            .exec(self.db)
            .await
    }

    pub async fn characters(&self, film_id: i32) -> Result<Vec<entity::persona::Model>, DbErr> {
        let Some(film) = entity::prelude::Film::find_by_id(film_id).one(self.db).await? else {
            return Ok(Vec::new());
        };

        film.find_related(entity::prelude::Persona).all(self.db).await
    }

    pub async fn planets(&self, film_id: i32) -> Result<Vec<entity::planet::Model>, DbErr> {
        let Some(film) = entity::prelude::Film::find_by_id(film_id).one(self.db).await? else {
            return Ok(Vec::new());
        };

        film.find_related(entity::prelude::Planet).all(self.db).await
    }

    pub async fn starships(&self, film_id: i32) -> Result<Vec<entity::starship::Model>, DbErr> {
        let Some(film) = entity::prelude::Film::find_by_id(film_id).one(self.db).await? else {
            return Ok(Vec::new());
        };

        film.find_related(entity::prelude::Starship).all(self.db).await
    }

    pub async fn vehicles(&self, film_id: i32) -> Result<Vec<entity::vehicle::Model>, DbErr> {
        let Some(film) = entity::prelude::Film::find_by_id(film_id).one(self.db).await? else {
            return Ok(Vec::new());
        };

        film.find_related(entity::prelude::Vehicle).all(self.db).await
    }

    pub async fn delete(&self, film_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Film::delete_by_id(film_id).exec(self.db).await
    }
}

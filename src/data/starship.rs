use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, DeleteResult, EntityTrait,
    ModelTrait,
};

use crate::model::catalog::NewStarship;

pub struct StarshipRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StarshipRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, starship: NewStarship) -> Result<entity::starship::Model, DbErr> {
        let starship = entity::starship::ActiveModel {
            name: ActiveValue::Set(starship.name),
            model: ActiveValue::Set(starship.model),
            manufacturer: ActiveValue::Set(starship.manufacturer),
            passengers: ActiveValue::Set(starship.passengers),
            ..Default::default()
        };

        starship.insert(self.db).await
    }

    pub async fn get_by_id(
        &self,
        starship_id: i32,
    ) -> Result<Option<entity::starship::Model>, DbErr> {
        entity::prelude::Starship::find_by_id(starship_id).one(self.db).await
    }

    /// Registers a persona as a pilot of the starship.
    ///
    /// The (starship, persona) pair is the join table's primary key, so
    /// registering the same pilot twice is rejected by the database.
    pub async fn add_pilot(&self, starship_id: i32, persona_id: i32) -> Result<(), DbErr> {
        let link = entity::starship_pilot::ActiveModel {
            starship_id: ActiveValue::Set(starship_id),
            persona_id: ActiveValue::Set(persona_id),
        };

        entity::prelude::StarshipPilot::insert(link)
            .exec_without_returning(self.db)
            .await?;

        Ok(())
    }

    pub async fn remove_pilot(
        &self,
        starship_id: i32,
        persona_id: i32,
    ) -> Result<DeleteResult, DbErr> {
        entity::prelude::StarshipPilot::delete_by_id((starship_id, persona_id))
            .exec(self.db)
            .await
    }

    pub async fn pilots(&self, starship_id: i32) -> Result<Vec<entity::persona::Model>, DbErr> {
        let Some(starship) = entity::prelude::Starship::find_by_id(starship_id)
            .one(self.db)
            .await?
        else {
            return Ok(Vec::new());
        };

        starship.find_related(entity::prelude::Persona).all(self.db).await
    }

    pub async fn delete(&self, starship_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Starship::delete_by_id(starship_id).exec(self.db).await
    }
}

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, DeleteResult,
    EntityTrait, QueryFilter,
};

use crate::model::catalog::NewPlanet;

pub struct PlanetRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PlanetRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, planet: NewPlanet) -> Result<entity::planet::Model, DbErr> {
        let planet = entity::planet::ActiveModel {
            name: ActiveValue::Set(planet.name),
            population: ActiveValue::Set(planet.population),
            gravity: ActiveValue::Set(planet.gravity),
            climate: ActiveValue::Set(planet.climate),
            terrain: ActiveValue::Set(planet.terrain),
            created: ActiveValue::Set(planet.created),
            surface_water: ActiveValue::Set(planet.surface_water),
            diameter: ActiveValue::Set(planet.diameter),
            orbital_period: ActiveValue::Set(planet.orbital_period),
            rotation_period: ActiveValue::Set(planet.rotation_period),
            pic: ActiveValue::Set(planet.pic),
            url: ActiveValue::Set(planet.url),
            ..Default::default()
        };

        planet.insert(self.db).await
    }

    pub async fn get_by_id(&self, planet_id: i32) -> Result<Option<entity::planet::Model>, DbErr> {
        entity::prelude::Planet::find_by_id(planet_id).one(self.db).await
    }

    pub async fn get_by_name(&self, name: &str) -> Result<Option<entity::planet::Model>, DbErr> {
        entity::prelude::Planet::find()
            .filter(entity::planet::Column::Name.eq(name))
            .one(self.db)
            .await
    }

    /// Replaces every non-key column of the row with the given values.
    pub async fn update(
        &self,
        planet_id: i32,
        planet: NewPlanet,
    ) -> Result<entity::planet::Model, DbErr> {
        let planet = entity::planet::ActiveModel {
            id: ActiveValue::Unchanged(planet_id),
            name: ActiveValue::Set(planet.name),
            population: ActiveValue::Set(planet.population),
            gravity: ActiveValue::Set(planet.gravity),
            climate: ActiveValue::Set(planet.climate),
            terrain: ActiveValue::Set(planet.terrain),
            created: ActiveValue::Set(planet.created),
            surface_water: ActiveValue::Set(planet.surface_water),
            diameter: ActiveValue::Set(planet.diameter),
            orbital_period: ActiveValue::Set(planet.orbital_period),
            rotation_period: ActiveValue::Set(planet.rotation_period),
            pic: ActiveValue::Set(planet.pic),
            url: ActiveValue::Set(planet.url),
        };

        planet.update(self.db).await
    }

    /// Deletes a planet
    ///
    /// Returns OK regardless of the planet existing, to confirm the deletion
    /// result check the [`DeleteResult::rows_affected`] field. Deleting a
    /// planet still referenced by a persona, species, or favorite is rejected
    /// by the database.
    pub async fn delete(&self, planet_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Planet::delete_by_id(planet_id).exec(self.db).await
    }
}

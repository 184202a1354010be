use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, DeleteResult, EntityTrait,
    ModelTrait,
};

use crate::model::catalog::NewVehicle;

pub struct VehicleRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> VehicleRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, vehicle: NewVehicle) -> Result<entity::vehicle::Model, DbErr> {
        let vehicle = entity::vehicle::ActiveModel {
            name: ActiveValue::Set(vehicle.name),
            model: ActiveValue::Set(vehicle.model),
            manufacturer: ActiveValue::Set(vehicle.manufacturer),
            passengers: ActiveValue::Set(vehicle.passengers),
            ..Default::default()
        };

        vehicle.insert(self.db).await
    }

    pub async fn get_by_id(
        &self,
        vehicle_id: i32,
    ) -> Result<Option<entity::vehicle::Model>, DbErr> {
        entity::prelude::Vehicle::find_by_id(vehicle_id).one(self.db).await
    }

    pub async fn add_pilot(&self, vehicle_id: i32, persona_id: i32) -> Result<(), DbErr> {
        let link = entity::vehicle_pilot::ActiveModel {
            vehicle_id: ActiveValue::Set(vehicle_id),
            persona_id: ActiveValue::Set(persona_id),
        };

        entity::prelude::VehiclePilot::insert(link)
            .exec_without_returning(self.db)
            .await?;

        Ok(())
    }

    pub async fn remove_pilot(
        &self,
        vehicle_id: i32,
        persona_id: i32,
    ) -> Result<DeleteResult, DbErr> {
        entity::prelude::VehiclePilot::delete_by_id((vehicle_id, persona_id))
            .exec(self.db)
            .await
    }

    pub async fn pilots(&self, vehicle_id: i32) -> Result<Vec<entity::persona::Model>, DbErr> {
        let Some(vehicle) = entity::prelude::Vehicle::find_by_id(vehicle_id)
            .one(self.db)
            .await?
        else {
            return Ok(Vec::new());
        };

        vehicle.find_related(entity::prelude::Persona).all(self.db).await
    }

    pub async fn delete(&self, vehicle_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Vehicle::delete_by_id(vehicle_id).exec(self.db).await
    }
}

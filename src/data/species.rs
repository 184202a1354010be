use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, DeleteResult,
    EntityTrait, QueryFilter,
};

use crate::model::catalog::NewSpecies;

pub struct SpeciesRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SpeciesRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, species: NewSpecies) -> Result<entity::species::Model, DbErr> {
        let species = entity::species::ActiveModel {
            name: ActiveValue::Set(species.name),
            classification: ActiveValue::Set(species.classification),
            designation: ActiveValue::Set(species.designation),
            average_height: ActiveValue::Set(species.average_height),
            skin_colors: ActiveValue::Set(species.skin_colors),
            hair_colors: ActiveValue::Set(species.hair_colors),
            eye_colors: ActiveValue::Set(species.eye_colors),
            homeworld_id: ActiveValue::Set(species.homeworld_id),
            ..Default::default()
        };

        species.insert(self.db).await
    }

    pub async fn get_by_id(&self, species_id: i32) -> Result<Option<entity::species::Model>, DbErr> {
        entity::prelude::Species::find_by_id(species_id).one(self.db).await
    }

    pub async fn get_by_name(&self, name: &str) -> Result<Option<entity::species::Model>, DbErr> {
        entity::prelude::Species::find()
            .filter(entity::species::Column::Name.eq(name))
            .one(self.db)
            .await
    }

    pub async fn delete(&self, species_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Species::delete_by_id(species_id).exec(self.db).await
    }
}

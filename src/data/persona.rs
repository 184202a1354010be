use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, DeleteResult,
    EntityTrait, ModelTrait, QueryFilter,
};

use crate::model::catalog::NewPersona;

pub struct PersonaRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PersonaRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, persona: NewPersona) -> Result<entity::persona::Model, DbErr> {
        let persona = entity::persona::ActiveModel {
            name: ActiveValue::Set(persona.name),
            birth_year: ActiveValue::Set(persona.birth_year),
            created: ActiveValue::Set(persona.created),
            homeworld_id: ActiveValue::Set(persona.homeworld_id),
            eye_color: ActiveValue::Set(persona.eye_color),
            gender: ActiveValue::Set(persona.gender),
            hair_color: ActiveValue::Set(persona.hair_color),
            height: ActiveValue::Set(persona.height),
            mass: ActiveValue::Set(persona.mass),
            skin_color: ActiveValue::Set(persona.skin_color),
            pic: ActiveValue::Set(persona.pic),
            url: ActiveValue::Set(persona.url),
            species_id: ActiveValue::Set(persona.species_id),
            ..Default::default()
        };

        persona.insert(self.db).await
    }

    pub async fn get_by_id(&self, persona_id: i32) -> Result<Option<entity::persona::Model>, DbErr> {
        entity::prelude::Persona::find_by_id(persona_id).one(self.db).await
    }

    pub async fn get_by_name(&self, name: &str) -> Result<Option<entity::persona::Model>, DbErr> {
        entity::prelude::Persona::find()
            .filter(entity::persona::Column::Name.eq(name))
            .one(self.db)
            .await
    }

    /// Clears the homeworld reference, leaving the persona otherwise untouched.
    pub async fn clear_homeworld(&self, persona_id: i32) -> Result<entity::persona::Model, DbErr> {
        let persona = entity::persona::ActiveModel {
            id: ActiveValue::Unchanged(persona_id),
            homeworld_id: ActiveValue::Set(None),
            ..Default::default()
        };

        persona.update(self.db).await
    }

    /// Films the persona appears in, resolved through the film_character join table.
    pub async fn films(&self, persona_id: i32) -> Result<Vec<entity::film::Model>, DbErr> {
        let Some(persona) = entity::prelude::Persona::find_by_id(persona_id).one(self.db).await?
        else {
            return Ok(Vec::new());
        };

        persona.find_related(entity::prelude::Film).all(self.db).await
    }

    pub async fn delete(&self, persona_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Persona::delete_by_id(persona_id).exec(self.db).await
    }
}

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, DeleteResult,
    EntityTrait, QueryFilter,
};

pub struct FavoriteRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FavoriteRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Marks a planet and/or a persona as a favorite of the given user.
    pub async fn create(
        &self,
        user_id: i32,
        planet_id: Option<i32>,
        person_id: Option<i32>,
    ) -> Result<entity::favorites::Model, DbErr> {
        let favorite = entity::favorites::ActiveModel {
            user_id: ActiveValue::Set(Some(user_id)),
            planet_id: ActiveValue::Set(planet_id),
            person_id: ActiveValue::Set(person_id),
            ..Default::default()
        };

        favorite.insert(self.db).await
    }

    pub async fn list_by_user(
        &self,
        user_id: i32,
    ) -> Result<Vec<entity::favorites::Model>, DbErr> {
        entity::prelude::Favorites::find()
            .filter(entity::favorites::Column::UserId.eq(user_id))
            .all(self.db)
            .await
    }

    pub async fn delete(&self, favorite_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Favorites::delete_by_id(favorite_id).exec(self.db).await
    }
}

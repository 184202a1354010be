use serde::{Deserialize, Serialize};

#[derive(Clone, Serialize, Deserialize)]
pub struct UserDto {
    pub id: i32,
    pub username: String,
    pub email: String,
}

impl From<entity::user::Model> for UserDto {
    fn from(user: entity::user::Model) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
        }
    }
}

/// Favorite rows keep their raw foreign-key ids; `planet_id` and `person_id`
/// identify whichever catalog item the row marks.
#[derive(Clone, Serialize, Deserialize)]
pub struct FavoriteDto {
    pub id: i32,
    pub user_id: Option<i32>,
    pub planet_id: Option<i32>,
    pub person_id: Option<i32>,
}

impl From<entity::favorites::Model> for FavoriteDto {
    fn from(favorite: entity::favorites::Model) -> Self {
        Self {
            id: favorite.id,
            user_id: favorite.user_id,
            planet_id: favorite.planet_id,
            person_id: favorite.person_id,
        }
    }
}

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "film")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    pub episode_id: Option<i32>,
    pub director: Option<String>,
    pub producer: Option<String>,
    pub release_date: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl Related<super::persona::Entity> for Entity {
    fn to() -> RelationDef {
        super::film_character::Relation::Persona.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::film_character::Relation::Film.def().rev())
    }
}

impl Related<super::planet::Entity> for Entity {
    fn to() -> RelationDef {
        super::film_planet::Relation::Planet.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::film_planet::Relation::Film.def().rev())
    }
}

impl Related<super::starship::Entity> for Entity {
    fn to() -> RelationDef {
        super::film_starship::Relation::Starship.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::film_starship::Relation::Film.def().rev())
    }
}

impl Related<super::vehicle::Entity> for Entity {
    fn to() -> RelationDef {
        super::film_vehicle::Relation::Vehicle.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::film_vehicle::Relation::Film.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}

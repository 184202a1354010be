use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "starship")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub model: Option<String>,
    pub manufacturer: Option<String>,
    pub passengers: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl Related<super::persona::Entity> for Entity {
    fn to() -> RelationDef {
        super::starship_pilot::Relation::Persona.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::starship_pilot::Relation::Starship.def().rev())
    }
}

impl Related<super::film::Entity> for Entity {
    fn to() -> RelationDef {
        super::film_starship::Relation::Film.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::film_starship::Relation::Starship.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}

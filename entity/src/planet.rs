use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "planet")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub population: Option<i32>,
    pub gravity: Option<String>,
    pub climate: Option<String>,
    pub terrain: Option<String>,
    pub created: Option<String>,
    pub surface_water: Option<i32>,
    pub diameter: Option<i32>,
    pub orbital_period: Option<i32>,
    pub rotation_period: Option<i32>,
    pub pic: Option<String>,
    pub url: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::persona::Entity")]
    Persona,
    #[sea_orm(has_many = "super::species::Entity")]
    Species,
    #[sea_orm(has_many = "super::favorites::Entity")]
    Favorites,
}

impl Related<super::persona::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Persona.def()
    }
}

impl Related<super::species::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Species.def()
    }
}

impl Related<super::favorites::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Favorites.def()
    }
}

impl Related<super::film::Entity> for Entity {
    fn to() -> RelationDef {
        super::film_planet::Relation::Film.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::film_planet::Relation::Planet.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "persona")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub birth_year: Date,
    pub created: Option<String>,
    pub homeworld_id: Option<i32>,
    pub eye_color: Option<String>,
    pub gender: Option<String>,
    pub hair_color: Option<String>,
    pub height: Option<i32>,
    pub mass: Option<i32>,
    pub skin_color: Option<String>,
    pub pic: Option<String>,
    pub url: Option<String>,
    pub species_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::planet::Entity",
        from = "Column::HomeworldId",
        to = "super::planet::Column::Id"
    )]
    Planet,
    #[sea_orm(
        belongs_to = "super::species::Entity",
        from = "Column::SpeciesId",
        to = "super::species::Column::Id"
    )]
    Species,
    #[sea_orm(has_many = "super::favorites::Entity")]
    Favorites,
}

impl Related<super::planet::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Planet.def()
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

impl Related<super::starship::Entity> for Entity {
    fn to() -> RelationDef {
        super::starship_pilot::Relation::Starship.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::starship_pilot::Relation::Persona.def().rev())
    }
}

impl Related<super::vehicle::Entity> for Entity {
    fn to() -> RelationDef {
        super::vehicle_pilot::Relation::Vehicle.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::vehicle_pilot::Relation::Persona.def().rev())
    }
}

impl Related<super::film::Entity> for Entity {
    fn to() -> RelationDef {
        super::film_character::Relation::Film.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::film_character::Relation::Persona.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}

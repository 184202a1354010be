//! Factory functions for generating catalog database rows.
//!
//! `mock_*_model` functions are pure and build in-memory model instances with
//! standard test values, suitable for unit tests without database
//! interaction. `insert_*` functions persist a row and return the stored
//! model, handling foreign-key wiring through their arguments.

use chrono::NaiveDate;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection};

use crate::error::TestError;
use crate::model::{
    FilmModel, PersonaModel, PlanetModel, SpeciesModel, StarshipModel, UserModel, VehicleModel,
};

/// Standard birth year used for persona fixtures.
pub fn test_birth_year() -> NaiveDate {
    NaiveDate::from_ymd_opt(1977, 5, 25).expect("valid date")
}

/// Create a mock planet database model for testing.
pub fn mock_planet_model(planet_id: i32) -> PlanetModel {
    PlanetModel {
        id: planet_id,
        name: "Tatooine".to_string(),
        population: Some(200_000),
        gravity: Some("1 standard".to_string()),
        climate: Some("arid".to_string()),
        terrain: Some("desert".to_string()),
        created: None,
        surface_water: Some(1),
        diameter: Some(10_465),
        orbital_period: Some(304),
        rotation_period: Some(23),
        pic: None,
        url: None,
    }
}

/// Create a mock persona database model for testing.
pub fn mock_persona_model(persona_id: i32, homeworld_id: Option<i32>) -> PersonaModel {
    PersonaModel {
        id: persona_id,
        name: "Luke Skywalker".to_string(),
        birth_year: test_birth_year(),
        created: None,
        homeworld_id,
        eye_color: Some("blue".to_string()),
        gender: Some("male".to_string()),
        hair_color: Some("blond".to_string()),
        height: Some(172),
        mass: Some(77),
        skin_color: Some("fair".to_string()),
        pic: None,
        url: None,
        species_id: None,
    }
}

pub async fn insert_planet(db: &DatabaseConnection) -> Result<PlanetModel, TestError> {
    let planet = entity::planet::ActiveModel {
        name: ActiveValue::Set("Tatooine".to_string()),
        population: ActiveValue::Set(Some(200_000)),
        gravity: ActiveValue::Set(Some("1 standard".to_string())),
        climate: ActiveValue::Set(Some("arid".to_string())),
        terrain: ActiveValue::Set(Some("desert".to_string())),
        surface_water: ActiveValue::Set(Some(1)),
        diameter: ActiveValue::Set(Some(10_465)),
        orbital_period: ActiveValue::Set(Some(304)),
        rotation_period: ActiveValue::Set(Some(23)),
        ..Default::default()
    };

    Ok(planet.insert(db).await?)
}

pub async fn insert_species(
    db: &DatabaseConnection,
    homeworld_id: Option<i32>,
) -> Result<SpeciesModel, TestError> {
    let species = entity::species::ActiveModel {
        name: ActiveValue::Set("Human".to_string()),
        classification: ActiveValue::Set(Some("mammal".to_string())),
        designation: ActiveValue::Set(Some("sentient".to_string())),
        average_height: ActiveValue::Set(Some(180)),
        homeworld_id: ActiveValue::Set(homeworld_id),
        ..Default::default()
    };

    Ok(species.insert(db).await?)
}

pub async fn insert_persona(
    db: &DatabaseConnection,
    name: &str,
    homeworld_id: Option<i32>,
    species_id: Option<i32>,
) -> Result<PersonaModel, TestError> {
    let persona = entity::persona::ActiveModel {
        name: ActiveValue::Set(name.to_string()),
        birth_year: ActiveValue::Set(test_birth_year()),
        homeworld_id: ActiveValue::Set(homeworld_id),
        species_id: ActiveValue::Set(species_id),
        ..Default::default()
    };

    Ok(persona.insert(db).await?)
}

pub async fn insert_user(
    db: &DatabaseConnection,
    username: &str,
    email: &str,
) -> Result<UserModel, TestError> {
    let user = entity::user::ActiveModel {
        username: ActiveValue::Set(username.to_string()),
        email: ActiveValue::Set(email.to_string()),
        ..Default::default()
    };

    Ok(user.insert(db).await?)
}

pub async fn insert_starship(db: &DatabaseConnection, name: &str) -> Result<StarshipModel, TestError> {
    let starship = entity::starship::ActiveModel {
        name: ActiveValue::Set(name.to_string()),
        model: ActiveValue::Set(Some("YT-1300".to_string())),
        manufacturer: ActiveValue::Set(Some("Corellian Engineering".to_string())),
        passengers: ActiveValue::Set(Some(6)),
        ..Default::default()
    };

    Ok(starship.insert(db).await?)
}

pub async fn insert_vehicle(db: &DatabaseConnection, name: &str) -> Result<VehicleModel, TestError> {
    let vehicle = entity::vehicle::ActiveModel {
        name: ActiveValue::Set(name.to_string()),
        model: ActiveValue::Set(Some("T-16".to_string())),
        manufacturer: ActiveValue::Set(Some("Incom Corporation".to_string())),
        passengers: ActiveValue::Set(Some(1)),
        ..Default::default()
    };

    Ok(vehicle.insert(db).await?)
}

pub async fn insert_film(db: &DatabaseConnection, title: &str) -> Result<FilmModel, TestError> {
    let film = entity::film::ActiveModel {
        title: ActiveValue::Set(title.to_string()),
        episode_id: ActiveValue::Set(Some(4)),
        director: ActiveValue::Set(Some("George Lucas".to_string())),
        producer: ActiveValue::Set(Some("Gary Kurtz".to_string())),
        release_date: ActiveValue::Set(Some("1977-05-25".to_string())),
        ..Default::default()
    };

    Ok(film.insert(db).await?)
}

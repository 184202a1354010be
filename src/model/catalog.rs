//! Flat projections of catalog rows for external consumption.
//!
//! Relationships are serialized as raw foreign-key ids (`homeworld`,
//! `species`), never as nested objects; callers needing nested data perform
//! additional lookups.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Clone, Serialize, Deserialize)]
pub struct PlanetDto {
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

impl From<entity::planet::Model> for PlanetDto {
    fn from(planet: entity::planet::Model) -> Self {
        Self {
            id: planet.id,
            name: planet.name,
            population: planet.population,
            gravity: planet.gravity,
            climate: planet.climate,
            terrain: planet.terrain,
            created: planet.created,
            surface_water: planet.surface_water,
            diameter: planet.diameter,
            orbital_period: planet.orbital_period,
            rotation_period: planet.rotation_period,
            pic: planet.pic,
            url: planet.url,
        }
    }
}

#[derive(Clone, Serialize, Deserialize)]
pub struct SpeciesDto {
    pub id: i32,
    pub name: String,
    pub classification: Option<String>,
    pub designation: Option<String>,
    pub average_height: Option<i32>,
    pub skin_colors: Option<String>,
    pub hair_colors: Option<String>,
    pub eye_colors: Option<String>,
    pub homeworld: Option<i32>,
}

impl From<entity::species::Model> for SpeciesDto {
    fn from(species: entity::species::Model) -> Self {
        Self {
            id: species.id,
            name: species.name,
            classification: species.classification,
            designation: species.designation,
            average_height: species.average_height,
            skin_colors: species.skin_colors,
            hair_colors: species.hair_colors,
            eye_colors: species.eye_colors,
            homeworld: species.homeworld_id,
        }
    }
}

#[derive(Clone, Serialize, Deserialize)]
pub struct PersonaDto {
    pub id: i32,
    pub name: String,
    pub birth_year: NaiveDate,
    pub created: Option<String>,
    pub homeworld: Option<i32>,
    pub eye_color: Option<String>,
    pub gender: Option<String>,
    pub hair_color: Option<String>,
    pub height: Option<i32>,
    pub mass: Option<i32>,
    pub skin_color: Option<String>,
    pub pic: Option<String>,
    pub url: Option<String>,
    pub species: Option<i32>,
}

impl From<entity::persona::Model> for PersonaDto {
    fn from(persona: entity::persona::Model) -> Self {
        Self {
            id: persona.id,
            name: persona.name,
            birth_year: persona.birth_year,
            created: persona.created,
            homeworld: persona.homeworld_id,
            eye_color: persona.eye_color,
            gender: persona.gender,
            hair_color: persona.hair_color,
            height: persona.height,
            mass: persona.mass,
            skin_color: persona.skin_color,
            pic: persona.pic,
            url: persona.url,
            species: persona.species_id,
        }
    }
}

#[derive(Clone, Serialize, Deserialize)]
pub struct StarshipDto {
    pub id: i32,
    pub name: String,
    pub model: Option<String>,
    pub manufacturer: Option<String>,
    pub passengers: Option<i32>,
}

impl From<entity::starship::Model> for StarshipDto {
    fn from(starship: entity::starship::Model) -> Self {
        Self {
            id: starship.id,
            name: starship.name,
            model: starship.model,
            manufacturer: starship.manufacturer,
            passengers: starship.passengers,
        }
    }
}

#[derive(Clone, Serialize, Deserialize)]
pub struct VehicleDto {
    pub id: i32,
    pub name: String,
    pub model: Option<String>,
    pub manufacturer: Option<String>,
    pub passengers: Option<i32>,
}

impl From<entity::vehicle::Model> for VehicleDto {
    fn from(vehicle: entity::vehicle::Model) -> Self {
        Self {
            id: vehicle.id,
            name: vehicle.name,
            model: vehicle.model,
            manufacturer: vehicle.manufacturer,
            passengers: vehicle.passengers,
        }
    }
}

#[derive(Clone, Serialize, Deserialize)]
pub struct FilmDto {
    pub id: i32,
    pub title: String,
    pub episode_id: Option<i32>,
    pub director: Option<String>,
    pub producer: Option<String>,
    pub release_date: Option<String>,
}

impl From<entity::film::Model> for FilmDto {
    fn from(film: entity::film::Model) -> Self {
        Self {
            id: film.id,
            title: film.title,
            episode_id: film.episode_id,
            director: film.director,
            producer: film.producer,
            release_date: film.release_date,
        }
    }
}

/// Input shape for creating or updating a planet row.
#[derive(Clone, Default, Serialize, Deserialize)]
pub struct NewPlanet {
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

#[derive(Clone, Default, Serialize, Deserialize)]
pub struct NewSpecies {
    pub name: String,
    pub classification: Option<String>,
    pub designation: Option<String>,
    pub average_height: Option<i32>,
    pub skin_colors: Option<String>,
    pub hair_colors: Option<String>,
    pub eye_colors: Option<String>,
    pub homeworld_id: Option<i32>,
}

#[derive(Clone, Serialize, Deserialize)]
pub struct NewPersona {
    pub name: String,
    pub birth_year: NaiveDate,
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

#[derive(Clone, Default, Serialize, Deserialize)]
pub struct NewStarship {
    pub name: String,
    pub model: Option<String>,
    pub manufacturer: Option<String>,
    pub passengers: Option<i32>,
}

#[derive(Clone, Default, Serialize, Deserialize)]
pub struct NewVehicle {
    pub name: String,
    pub model: Option<String>,
    pub manufacturer: Option<String>,
    pub passengers: Option<i32>,
}

#[derive(Clone, Default, Serialize, Deserialize)]
pub struct NewFilm {
    pub title: String,
    pub episode_id: Option<i32>,
    pub director: Option<String>,
    pub producer: Option<String>,
    pub release_date: Option<String>,
}

#[cfg(test)]
mod tests {
    use holocron_test_utils::fixtures::catalog::factory::{mock_persona_model, mock_planet_model};

    use super::{PersonaDto, PlanetDto};

    /// The planet projection carries every declared column, nothing more
    #[test]
    fn planet_dto_serializes_every_column() {
        let dto = PlanetDto::from(mock_planet_model(1));

        let value = serde_json::to_value(dto).unwrap();
        let mut keys: Vec<&str> = value.as_object().unwrap().keys().map(|k| k.as_str()).collect();
        keys.sort_unstable();

        assert_eq!(
            keys,
            vec![
                "climate",
                "created",
                "diameter",
                "gravity",
                "id",
                "name",
                "orbital_period",
                "pic",
                "population",
                "rotation_period",
                "surface_water",
                "terrain",
                "url"
            ]
        );
        assert_eq!(value["name"], "Tatooine");
        assert_eq!(value["population"], 200_000);
    }

    /// Foreign keys surface under their flattened names with the raw id
    #[test]
    fn persona_dto_flattens_foreign_keys() {
        let dto = PersonaDto::from(mock_persona_model(7, Some(3)));

        let value = serde_json::to_value(dto).unwrap();

        assert_eq!(value["homeworld"], 3);
        assert_eq!(value["species"], serde_json::Value::Null);
        assert!(value.get("homeworld_id").is_none());
        assert!(value.get("species_id").is_none());
    }
}

//! Round-trip tests for the flat row projections: inserting a row and
//! reading it back must reproduce the stored values exactly, with foreign
//! keys flattened to raw ids.

use holocron::data::{
    favorites::FavoriteRepository, film::FilmRepository, persona::PersonaRepository,
    planet::PlanetRepository, species::SpeciesRepository, starship::StarshipRepository,
    user::UserRepository,
};
use holocron::model::catalog::{
    FilmDto, NewFilm, NewPersona, NewPlanet, NewSpecies, NewStarship, PersonaDto, PlanetDto,
    SpeciesDto, StarshipDto,
};
use holocron::model::user::{FavoriteDto, UserDto};
use holocron_test_utils::prelude::*;
use serde_json::json;

#[tokio::test]
async fn planet_projection_round_trip() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;
    let planet_repository = PlanetRepository::new(&test.db);

    let planet = planet_repository
        .create(NewPlanet {
            name: "Tatooine".to_string(),
            population: Some(200_000),
            gravity: Some("1 standard".to_string()),
            climate: Some("arid".to_string()),
            terrain: Some("desert".to_string()),
            surface_water: Some(1),
            diameter: Some(10_465),
            orbital_period: Some(304),
            rotation_period: Some(23),
            ..Default::default()
        })
        .await?;

    let fetched = planet_repository
        .get_by_id(planet.id)
        .await?
        .expect("planet should exist");

    let value = serde_json::to_value(PlanetDto::from(fetched)).unwrap();

    assert_eq!(
        value,
        json!({
            "id": planet.id,
            "name": "Tatooine",
            "population": 200_000,
            "gravity": "1 standard",
            "climate": "arid",
            "terrain": "desert",
            "created": null,
            "surface_water": 1,
            "diameter": 10_465,
            "orbital_period": 304,
            "rotation_period": 23,
            "pic": null,
            "url": null,
        })
    );

    Ok(())
}

/// The homeworld key carries the planet id, not a nested planet object.
#[tokio::test]
async fn species_projection_flattens_homeworld() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;
    let species_repository = SpeciesRepository::new(&test.db);

    let planet = factory::insert_planet(&test.db).await?;

    let species = species_repository
        .create(NewSpecies {
            name: "Human".to_string(),
            classification: Some("mammal".to_string()),
            designation: Some("sentient".to_string()),
            average_height: Some(180),
            homeworld_id: Some(planet.id),
            ..Default::default()
        })
        .await?;

    let species_id = species.id;
    let value = serde_json::to_value(SpeciesDto::from(species)).unwrap();

    assert_eq!(value["homeworld"], json!(planet.id));
    assert_eq!(
        value,
        json!({
            "id": species_id,
            "name": "Human",
            "classification": "mammal",
            "designation": "sentient",
            "average_height": 180,
            "skin_colors": null,
            "hair_colors": null,
            "eye_colors": null,
            "homeworld": planet.id,
        })
    );

    Ok(())
}

#[tokio::test]
async fn persona_projection_flattens_homeworld_and_species() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;
    let persona_repository = PersonaRepository::new(&test.db);

    let planet = factory::insert_planet(&test.db).await?;
    let species = factory::insert_species(&test.db, Some(planet.id)).await?;

    let persona = persona_repository
        .create(NewPersona {
            name: "Luke Skywalker".to_string(),
            birth_year: factory::test_birth_year(),
            created: None,
            homeworld_id: Some(planet.id),
            eye_color: Some("blue".to_string()),
            gender: Some("male".to_string()),
            hair_color: Some("blond".to_string()),
            height: Some(172),
            mass: Some(77),
            skin_color: Some("fair".to_string()),
            pic: None,
            url: None,
            species_id: Some(species.id),
        })
        .await?;

    let fetched = persona_repository
        .get_by_id(persona.id)
        .await?
        .expect("persona should exist");

    let value = serde_json::to_value(PersonaDto::from(fetched)).unwrap();

    assert_eq!(
        value,
        json!({
            "id": persona.id,
            "name": "Luke Skywalker",
            "birth_year": "1977-05-25",
            "created": null,
            "homeworld": planet.id,
            "eye_color": "blue",
            "gender": "male",
            "hair_color": "blond",
            "height": 172,
            "mass": 77,
            "skin_color": "fair",
            "pic": null,
            "url": null,
            "species": species.id,
        })
    );

    Ok(())
}

#[tokio::test]
async fn user_projection_round_trip() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::User)?;
    let user_repository = UserRepository::new(&test.db);

    let user = user_repository.create("luke", "luke@rebellion.org").await?;

    let fetched = user_repository
        .get_by_username("luke")
        .await?
        .expect("user should exist");

    let value = serde_json::to_value(UserDto::from(fetched)).unwrap();

    assert_eq!(
        value,
        json!({
            "id": user.id,
            "username": "luke",
            "email": "luke@rebellion.org",
        })
    );

    Ok(())
}

#[tokio::test]
async fn favorite_projection_keeps_raw_ids() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;
    let favorite_repository = FavoriteRepository::new(&test.db);

    let user = factory::insert_user(&test.db, "leia", "leia@alderaan.gov").await?;
    let planet = factory::insert_planet(&test.db).await?;

    let favorite = favorite_repository
        .create(user.id, Some(planet.id), None)
        .await?;

    let favorite_id = favorite.id;
    let value = serde_json::to_value(FavoriteDto::from(favorite)).unwrap();

    assert_eq!(
        value,
        json!({
            "id": favorite_id,
            "user_id": user.id,
            "planet_id": planet.id,
            "person_id": null,
        })
    );

    Ok(())
}

#[tokio::test]
async fn starship_projection_round_trip() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;
    let starship_repository = StarshipRepository::new(&test.db);

    let starship = starship_repository
        .create(NewStarship {
            name: "Millennium Falcon".to_string(),
            model: Some("YT-1300".to_string()),
            manufacturer: Some("Corellian Engineering".to_string()),
            passengers: Some(6),
        })
        .await?;

    let fetched = starship_repository
        .get_by_id(starship.id)
        .await?
        .expect("starship should exist");

    let value = serde_json::to_value(StarshipDto::from(fetched)).unwrap();

    assert_eq!(
        value,
        json!({
            "id": starship.id,
            "name": "Millennium Falcon",
            "model": "YT-1300",
            "manufacturer": "Corellian Engineering",
            "passengers": 6,
        })
    );

    Ok(())
}

#[tokio::test]
async fn film_projection_round_trip() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;
    let film_repository = FilmRepository::new(&test.db);

    let film = film_repository
        .create(NewFilm {
            title: "A New Hope".to_string(),
            episode_id: Some(4),
            director: Some("George Lucas".to_string()),
            producer: Some("Gary Kurtz".to_string()),
            release_date: Some("1977-05-25".to_string()),
        })
        .await?;

    let fetched = film_repository
        .get_by_id(film.id)
        .await?
        .expect("film should exist");

    let value = serde_json::to_value(FilmDto::from(fetched)).unwrap();

    assert_eq!(
        value,
        json!({
            "id": film.id,
            "title": "A New Hope",
            "episode_id": 4,
            "director": "George Lucas",
            "producer": "Gary Kurtz",
            "release_date": "1977-05-25",
        })
    );

    Ok(())
}

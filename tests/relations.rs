//! Many-to-many traversal and favorites listing, resolved through the join
//! tables.

use holocron::data::{
    favorites::FavoriteRepository, film::FilmRepository, persona::PersonaRepository,
    starship::StarshipRepository, vehicle::VehicleRepository,
};
use holocron_test_utils::prelude::*;

#[tokio::test]
async fn starship_pilots_round_trip() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;
    let starship_repository = StarshipRepository::new(&test.db);

    let starship = factory::insert_starship(&test.db, "Millennium Falcon").await?;
    let han = factory::insert_persona(&test.db, "Han Solo", None, None).await?;
    let chewie = factory::insert_persona(&test.db, "Chewbacca", None, None).await?;

    starship_repository.add_pilot(starship.id, han.id).await?;
    starship_repository.add_pilot(starship.id, chewie.id).await?;

    let pilots = starship_repository.pilots(starship.id).await?;

    assert_eq!(pilots.len(), 2);
    assert!(pilots.iter().any(|p| p.id == han.id));
    assert!(pilots.iter().any(|p| p.id == chewie.id));

    Ok(())
}

#[tokio::test]
async fn starship_remove_pilot() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;
    let starship_repository = StarshipRepository::new(&test.db);

    let starship = factory::insert_starship(&test.db, "Millennium Falcon").await?;
    let han = factory::insert_persona(&test.db, "Han Solo", None, None).await?;

    starship_repository.add_pilot(starship.id, han.id).await?;

    let delete_result = starship_repository.remove_pilot(starship.id, han.id).await?;
    assert_eq!(delete_result.rows_affected, 1);

    let pilots = starship_repository.pilots(starship.id).await?;
    assert!(pilots.is_empty());

    Ok(())
}

/// Listing pilots of an unknown starship returns an empty set rather than an error
#[tokio::test]
async fn starship_pilots_unknown_starship() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;
    let starship_repository = StarshipRepository::new(&test.db);

    let pilots = starship_repository.pilots(42).await?;

    assert!(pilots.is_empty());

    Ok(())
}

#[tokio::test]
async fn vehicle_pilots_round_trip() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;
    let vehicle_repository = VehicleRepository::new(&test.db);

    let vehicle = factory::insert_vehicle(&test.db, "Skyhopper").await?;
    let luke = factory::insert_persona(&test.db, "Luke Skywalker", None, None).await?;

    vehicle_repository.add_pilot(vehicle.id, luke.id).await?;

    let pilots = vehicle_repository.pilots(vehicle.id).await?;

    assert_eq!(pilots.len(), 1);
    assert_eq!(pilots[0].id, luke.id);

    Ok(())
}

#[tokio::test]
async fn film_links_round_trip() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;
    let film_repository = FilmRepository::new(&test.db);

    let film = factory::insert_film(&test.db, "A New Hope").await?;
    let luke = factory::insert_persona(&test.db, "Luke Skywalker", None, None).await?;
    let planet = factory::insert_planet(&test.db).await?;
    let starship = factory::insert_starship(&test.db, "X-wing").await?;
    let vehicle = factory::insert_vehicle(&test.db, "Sandcrawler").await?;

    film_repository.add_character(film.id, luke.id).await?;
    film_repository.add_planet(film.id, planet.id).await?;
    film_repository.add_starship(film.id, starship.id).await?;
    film_repository.add_vehicle(film.id, vehicle.id).await?;

    let characters = film_repository.characters(film.id).await?;
    assert_eq!(characters.len(), 1);
    assert_eq!(characters[0].id, luke.id);

    let planets = film_repository.planets(film.id).await?;
    assert_eq!(planets.len(), 1);
    assert_eq!(planets[0].id, planet.id);

    let starships = film_repository.starships(film.id).await?;
    assert_eq!(starships.len(), 1);
    assert_eq!(starships[0].id, starship.id);

    let vehicles = film_repository.vehicles(film.id).await?;
    assert_eq!(vehicles.len(), 1);
    assert_eq!(vehicles[0].id, vehicle.id);

    Ok(())
}

/// The join table is traversable from the persona side as well
#[tokio::test]
async fn persona_films_round_trip() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;
    let film_repository = FilmRepository::new(&test.db);
    let persona_repository = PersonaRepository::new(&test.db);

    let first = factory::insert_film(&test.db, "A New Hope").await?;
    let second = factory::insert_film(&test.db, "The Empire Strikes Back").await?;
    let luke = factory::insert_persona(&test.db, "Luke Skywalker", None, None).await?;

    film_repository.add_character(first.id, luke.id).await?;
    film_repository.add_character(second.id, luke.id).await?;

    let films = persona_repository.films(luke.id).await?;

    assert_eq!(films.len(), 2);
    assert!(films.iter().any(|f| f.id == first.id));
    assert!(films.iter().any(|f| f.id == second.id));

    Ok(())
}

#[tokio::test]
async fn favorites_listed_per_user() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;
    let favorite_repository = FavoriteRepository::new(&test.db);

    let user = factory::insert_user(&test.db, "leia", "leia@alderaan.gov").await?;
    let other = factory::insert_user(&test.db, "han", "han@falcon.net").await?;
    let planet = factory::insert_planet(&test.db).await?;
    let luke = factory::insert_persona(&test.db, "Luke Skywalker", None, None).await?;

    let favorite_planet = favorite_repository
        .create(user.id, Some(planet.id), None)
        .await?;
    favorite_repository.create(user.id, None, Some(luke.id)).await?;
    favorite_repository.create(other.id, Some(planet.id), None).await?;

    let favorites = favorite_repository.list_by_user(user.id).await?;

    assert_eq!(favorites.len(), 2);
    assert!(favorites
        .iter()
        .any(|f| f.planet_id == Some(planet.id) && f.person_id.is_none()));
    assert!(favorites
        .iter()
        .any(|f| f.person_id == Some(luke.id) && f.planet_id.is_none()));

    let delete_result = favorite_repository.delete(favorite_planet.id).await?;
    assert_eq!(delete_result.rows_affected, 1);

    let favorites = favorite_repository.list_by_user(user.id).await?;
    assert_eq!(favorites.len(), 1);

    Ok(())
}

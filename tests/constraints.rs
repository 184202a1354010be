//! Constraint enforcement tests: required columns, unique columns,
//! composite primary keys, and foreign keys are all enforced by the
//! database, not by application code.

use holocron::data::{
    favorites::FavoriteRepository, film::FilmRepository, persona::PersonaRepository,
    planet::PlanetRepository, starship::StarshipRepository,
};
use holocron_test_utils::prelude::*;
use sea_orm::{ActiveModelTrait, ActiveValue, DbErr, RuntimeErr};

/// Extract the SQLite extended error code from a constraint failure.
///
/// 787 is a foreign key violation, 1299 a NOT NULL violation, 1555 a primary
/// key violation, and 2067 a unique index violation.
fn constraint_code(err: DbErr) -> Option<String> {
    match err {
        DbErr::Query(RuntimeErr::SqlxError(se)) | DbErr::Exec(RuntimeErr::SqlxError(se)) => se
            .as_database_error()
            .and_then(|d| d.code().map(|c| c.to_string())),
        _ => None,
    }
}

/// Should error when inserting a planet without a name
#[tokio::test]
async fn planet_name_required() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;

    let planet = entity::planet::ActiveModel {
        climate: ActiveValue::Set(Some("arid".to_string())),
        ..Default::default()
    };
    let result = planet.insert(&test.db).await;

    assert!(result.is_err(), "Expected error, instead got: {:?}", result);
    assert_eq!(result.err().and_then(constraint_code).as_deref(), Some("1299"));

    Ok(())
}

/// Should error when inserting a persona without a birth year
#[tokio::test]
async fn persona_birth_year_required() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;

    let persona = entity::persona::ActiveModel {
        name: ActiveValue::Set("Luke Skywalker".to_string()),
        ..Default::default()
    };
    let result = persona.insert(&test.db).await;

    assert!(result.is_err(), "Expected error, instead got: {:?}", result);
    assert_eq!(result.err().and_then(constraint_code).as_deref(), Some("1299"));

    Ok(())
}

/// Should error when inserting a film without a title
#[tokio::test]
async fn film_title_required() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;

    let film = entity::film::ActiveModel {
        director: ActiveValue::Set(Some("George Lucas".to_string())),
        ..Default::default()
    };
    let result = film.insert(&test.db).await;

    assert!(result.is_err(), "Expected error, instead got: {:?}", result);
    assert_eq!(result.err().and_then(constraint_code).as_deref(), Some("1299"));

    Ok(())
}

/// Should error when inserting a user without an email
#[tokio::test]
async fn user_email_required() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;

    let user = entity::user::ActiveModel {
        username: ActiveValue::Set("luke".to_string()),
        ..Default::default()
    };
    let result = user.insert(&test.db).await;

    assert!(result.is_err(), "Expected error, instead got: {:?}", result);
    assert_eq!(result.err().and_then(constraint_code).as_deref(), Some("1299"));

    Ok(())
}

/// Should error when two users share a username
#[tokio::test]
async fn user_username_unique() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;

    factory::insert_user(&test.db, "luke", "luke@rebellion.org").await?;
    let result = factory::insert_user(&test.db, "luke", "other@rebellion.org").await;

    let code = result.err().and_then(|e| match e {
        TestError::DbErr(e) => constraint_code(e),
    });
    assert_eq!(code.as_deref(), Some("2067"));

    Ok(())
}

/// Should error when two users share an email
#[tokio::test]
async fn user_email_unique() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;

    factory::insert_user(&test.db, "luke", "luke@rebellion.org").await?;
    let result = factory::insert_user(&test.db, "red5", "luke@rebellion.org").await;

    let code = result.err().and_then(|e| match e {
        TestError::DbErr(e) => constraint_code(e),
    });
    assert_eq!(code.as_deref(), Some("2067"));

    Ok(())
}

/// Should error when linking the same persona to a film twice
#[tokio::test]
async fn film_character_rejects_duplicate_pair() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;
    let film_repository = FilmRepository::new(&test.db);

    let film = factory::insert_film(&test.db, "A New Hope").await?;
    let persona = factory::insert_persona(&test.db, "Luke Skywalker", None, None).await?;

    film_repository.add_character(film.id, persona.id).await?;
    let result = film_repository.add_character(film.id, persona.id).await;

    assert!(result.is_err(), "Expected error, instead got: {:?}", result);

    // SQLite reports a composite primary key conflict as either a primary key
    // or unique index violation depending on how the index was created
    let code = result.err().and_then(constraint_code);
    assert!(
        matches!(code.as_deref(), Some("1555") | Some("2067")),
        "unexpected error code: {:?}",
        code
    );

    Ok(())
}

/// Should error when linking a persona to a film that does not exist
#[tokio::test]
async fn film_character_requires_existing_film() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;
    let film_repository = FilmRepository::new(&test.db);

    let persona = factory::insert_persona(&test.db, "Luke Skywalker", None, None).await?;

    let non_existant_film_id = 1;
    let result = film_repository
        .add_character(non_existant_film_id, persona.id)
        .await;

    assert!(result.is_err(), "Expected error, instead got: {:?}", result);
    assert_eq!(result.err().and_then(constraint_code).as_deref(), Some("787"));

    Ok(())
}

/// Should error when registering a pilot that does not exist
#[tokio::test]
async fn starship_pilot_requires_existing_persona() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;
    let starship_repository = StarshipRepository::new(&test.db);

    let starship = factory::insert_starship(&test.db, "Millennium Falcon").await?;

    let non_existant_persona_id = 1;
    let result = starship_repository
        .add_pilot(starship.id, non_existant_persona_id)
        .await;

    assert!(result.is_err(), "Expected error, instead got: {:?}", result);
    assert_eq!(result.err().and_then(constraint_code).as_deref(), Some("787"));

    Ok(())
}

/// Should error when favoriting on behalf of a user that does not exist
#[tokio::test]
async fn favorite_requires_existing_user() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;
    let favorite_repository = FavoriteRepository::new(&test.db);

    let planet = factory::insert_planet(&test.db).await?;

    let non_existant_user_id = 1;
    let result = favorite_repository
        .create(non_existant_user_id, Some(planet.id), None)
        .await;

    assert!(result.is_err(), "Expected error, instead got: {:?}", result);
    assert_eq!(result.err().and_then(constraint_code).as_deref(), Some("787"));

    Ok(())
}

/// Should reject deleting a planet that a persona still calls home
#[tokio::test]
async fn planet_delete_rejected_while_referenced() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;
    let planet_repository = PlanetRepository::new(&test.db);
    let persona_repository = PersonaRepository::new(&test.db);

    let planet = factory::insert_planet(&test.db).await?;
    let persona =
        factory::insert_persona(&test.db, "Luke Skywalker", Some(planet.id), None).await?;

    let result = planet_repository.delete(planet.id).await;

    assert!(result.is_err(), "Expected error, instead got: {:?}", result);
    assert_eq!(result.err().and_then(constraint_code).as_deref(), Some("787"));

    // Clearing the reference makes the delete possible
    persona_repository.clear_homeworld(persona.id).await?;

    let delete_result = planet_repository.delete(planet.id).await?;
    assert_eq!(delete_result.rows_affected, 1);

    Ok(())
}

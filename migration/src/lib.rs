pub use sea_orm_migration::prelude::*;

mod m20260801_000001_planet;
mod m20260801_000002_species;
mod m20260801_000003_persona;
mod m20260801_000004_user;
mod m20260801_000005_favorites;
mod m20260801_000006_starship;
mod m20260801_000007_vehicle;
mod m20260801_000008_film;
mod m20260801_000009_starship_pilot;
mod m20260801_000010_vehicle_pilot;
mod m20260801_000011_film_character;
mod m20260801_000012_film_planet;
mod m20260801_000013_film_starship;
mod m20260801_000014_film_vehicle;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260801_000001_planet::Migration),
            Box::new(m20260801_000002_species::Migration),
            Box::new(m20260801_000003_persona::Migration),
            Box::new(m20260801_000004_user::Migration),
            Box::new(m20260801_000005_favorites::Migration),
            Box::new(m20260801_000006_starship::Migration),
            Box::new(m20260801_000007_vehicle::Migration),
            Box::new(m20260801_000008_film::Migration),
            Box::new(m20260801_000009_starship_pilot::Migration),
            Box::new(m20260801_000010_vehicle_pilot::Migration),
            Box::new(m20260801_000011_film_character::Migration),
            Box::new(m20260801_000012_film_planet::Migration),
            Box::new(m20260801_000013_film_starship::Migration),
            Box::new(m20260801_000014_film_vehicle::Migration),
        ]
    }
}

pub mod prelude;

pub mod favorites;
pub mod film;
pub mod film_character;
pub mod film_planet;
pub mod film_starship;
pub mod film_vehicle;
pub mod persona;
pub mod planet;
pub mod species;
pub mod starship;
pub mod starship_pilot;
pub mod user;
pub mod vehicle;
pub mod vehicle_pilot;

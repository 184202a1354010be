pub mod favorites;
pub mod film;
pub mod persona;
pub mod planet;
pub mod species;
pub mod starship;
pub mod user;
pub mod vehicle;

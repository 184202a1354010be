pub use super::favorites::Entity as Favorites;
pub use super::film::Entity as Film;
pub use super::film_character::Entity as FilmCharacter;
pub use super::film_planet::Entity as FilmPlanet;
pub use super::film_starship::Entity as FilmStarship;
pub use super::film_vehicle::Entity as FilmVehicle;
pub use super::persona::Entity as Persona;
pub use super::planet::Entity as Planet;
pub use super::species::Entity as Species;
pub use super::starship::Entity as Starship;
pub use super::starship_pilot::Entity as StarshipPilot;
pub use super::user::Entity as User;
pub use super::vehicle::Entity as Vehicle;
pub use super::vehicle_pilot::Entity as VehiclePilot;

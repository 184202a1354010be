//! Database model type aliases for test utilities.

/// Type alias for planet database model.
pub type PlanetModel = entity::planet::Model;

/// Type alias for species database model.
pub type SpeciesModel = entity::species::Model;

/// Type alias for persona database model.
pub type PersonaModel = entity::persona::Model;

/// Type alias for user database model.
pub type UserModel = entity::user::Model;

/// Type alias for favorites database model.
pub type FavoriteModel = entity::favorites::Model;

/// Type alias for starship database model.
pub type StarshipModel = entity::starship::Model;

/// Type alias for vehicle database model.
pub type VehicleModel = entity::vehicle::Model;

/// Type alias for film database model.
pub type FilmModel = entity::film::Model;

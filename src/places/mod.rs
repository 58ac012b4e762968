pub mod error;
pub mod model;
pub mod repo;
pub mod services;

pub use error::RepositoryError;
pub use model::{Image, Location, Place, PlaceDetails, PlaceId, PlaceInfo, Review};
pub use repo::{HttpPlacesRepository, PlacesRepository};

#[cfg(test)]
pub(crate) mod fake;

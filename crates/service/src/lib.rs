//! Service layer for users and their saved locations.
//! - Separates business rules from data access.
//! - Repositories are traits with a SeaORM and an in-memory implementation.
//! - Every failure is a `ServiceError` variant the HTTP layer can map to a status.

pub mod errors;
pub mod domain;
pub mod password;
pub mod repository;
pub mod repo;
pub mod user_service;
pub mod location_service;
#[cfg(test)]
pub mod test_support;

pub use errors::ServiceError;
pub use location_service::LocationService;
pub use user_service::UserService;

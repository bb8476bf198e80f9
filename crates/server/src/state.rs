use std::sync::Arc;

use sea_orm::DatabaseConnection;
use service::password::AuthConfig;
use service::repo::seaorm::SeaOrmRepository;
use service::repository::{mock::MockRepository, LocationRepository, UserRepository};
use service::{LocationService, UserService};

/// Router state: services wired to their repositories at startup.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<UserService>,
    pub locations: Arc<LocationService>,
}

impl AppState {
    pub fn new(
        users: Arc<dyn UserRepository>,
        locations: Arc<dyn LocationRepository>,
        auth: AuthConfig,
    ) -> Self {
        Self {
            users: Arc::new(UserService::new(Arc::clone(&users), auth)),
            locations: Arc::new(LocationService::new(users, locations)),
        }
    }

    pub fn with_database(db: DatabaseConnection, auth: AuthConfig) -> Self {
        let repo = Arc::new(SeaOrmRepository::new(db));
        Self::new(repo.clone(), repo, auth)
    }

    /// Process-local storage, used by tests and demos.
    pub fn in_memory(auth: AuthConfig) -> Self {
        let repo = Arc::new(MockRepository::default());
        Self::new(repo.clone(), repo, auth)
    }
}

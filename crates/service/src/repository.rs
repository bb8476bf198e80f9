use async_trait::async_trait;

use crate::domain::{Credentials, Location, NewLocation, User};
use crate::errors::ServiceError;

/// Persistence for users.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a user; an existing username yields `ServiceError::Conflict`.
    async fn create_user(&self, username: &str, password_hash: String) -> Result<User, ServiceError>;
    async fn find_user(&self, id: i64) -> Result<Option<User>, ServiceError>;
    async fn find_credentials(&self, username: &str) -> Result<Option<Credentials>, ServiceError>;
    async fn list_users(&self) -> Result<Vec<User>, ServiceError>;
    /// Remove a user together with its locations. Returns whether a row existed.
    async fn delete_user(&self, id: i64) -> Result<bool, ServiceError>;
}

/// Persistence for saved locations. Callers resolve the owner first.
#[async_trait]
pub trait LocationRepository: Send + Sync {
    async fn create_location(&self, owner: &User, input: NewLocation) -> Result<Location, ServiceError>;
    /// Locations owned by `owner`, in insertion order.
    async fn list_locations(&self, owner: &User) -> Result<Vec<Location>, ServiceError>;
}

/// Simple in-memory repository for tests and doc examples
pub mod mock {
    use super::*;
    use std::collections::BTreeMap;
    use std::sync::{Mutex, MutexGuard};

    use chrono::Utc;

    #[derive(Default)]
    struct State {
        users: BTreeMap<i64, Credentials>,
        locations: BTreeMap<i64, Location>,
        last_user_id: i64,
        last_location_id: i64,
    }

    /// Implements both repositories over one state so user deletion cascades to locations.
    #[derive(Default)]
    pub struct MockRepository {
        state: Mutex<State>,
    }

    impl MockRepository {
        fn state(&self) -> MutexGuard<'_, State> {
            self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
        }

        pub fn location_count(&self) -> usize {
            self.state().locations.len()
        }
    }

    #[async_trait]
    impl UserRepository for MockRepository {
        async fn create_user(&self, username: &str, password_hash: String) -> Result<User, ServiceError> {
            let mut state = self.state();
            if state.users.values().any(|c| c.user.username == username) {
                return Err(ServiceError::Conflict(format!("username {username} already taken")));
            }
            state.last_user_id += 1;
            let user = User { id: state.last_user_id, username: username.to_string(), created_at: Utc::now() };
            state.users.insert(user.id, Credentials { user: user.clone(), password_hash });
            Ok(user)
        }

        async fn find_user(&self, id: i64) -> Result<Option<User>, ServiceError> {
            Ok(self.state().users.get(&id).map(|c| c.user.clone()))
        }

        async fn find_credentials(&self, username: &str) -> Result<Option<Credentials>, ServiceError> {
            Ok(self.state().users.values().find(|c| c.user.username == username).cloned())
        }

        async fn list_users(&self) -> Result<Vec<User>, ServiceError> {
            Ok(self.state().users.values().map(|c| c.user.clone()).collect())
        }

        async fn delete_user(&self, id: i64) -> Result<bool, ServiceError> {
            let mut state = self.state();
            let existed = state.users.remove(&id).is_some();
            state.locations.retain(|_, l| l.user_id != id);
            Ok(existed)
        }
    }

    #[async_trait]
    impl LocationRepository for MockRepository {
        async fn create_location(&self, owner: &User, input: NewLocation) -> Result<Location, ServiceError> {
            let mut state = self.state();
            if !state.users.contains_key(&owner.id) {
                return Err(ServiceError::InvalidRequest(format!("user {} does not exist", owner.id)));
            }
            state.last_location_id += 1;
            let location = Location {
                id: state.last_location_id,
                name: input.name,
                lat: input.latitude,
                lon: input.longitude,
                user_id: owner.id,
                created_at: Utc::now(),
                user: owner.clone(),
            };
            state.locations.insert(location.id, location.clone());
            Ok(location)
        }

        async fn list_locations(&self, owner: &User) -> Result<Vec<Location>, ServiceError> {
            Ok(self.state().locations.values().filter(|l| l.user_id == owner.id).cloned().collect())
        }
    }
}

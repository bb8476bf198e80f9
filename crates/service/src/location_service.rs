use std::sync::Arc;

use tracing::{info, instrument};

use crate::domain::{Location, NewLocation, SaveLocationInput, User};
use crate::errors::ServiceError;
use crate::repository::{LocationRepository, UserRepository};

/// Saved locations; every location is attached to a resolved, existing user.
pub struct LocationService {
    users: Arc<dyn UserRepository>,
    locations: Arc<dyn LocationRepository>,
}

impl LocationService {
    pub fn new(users: Arc<dyn UserRepository>, locations: Arc<dyn LocationRepository>) -> Self {
        Self { users, locations }
    }

    async fn require_user(&self, id: i64) -> Result<User, ServiceError> {
        self.users
            .find_user(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User"))
    }

    /// Persist a location for the user referenced by `input.user.id`.
    #[instrument(skip(self, input), fields(name = %input.name))]
    pub async fn save(&self, input: SaveLocationInput) -> Result<Location, ServiceError> {
        let user_ref = input
            .user
            .ok_or_else(|| ServiceError::InvalidRequest("User is not valid.".into()))?;
        let user_id = user_ref
            .id
            .ok_or_else(|| ServiceError::InvalidRequest("User ID is null.".into()))?;
        models::location::validate_name(&input.name)?;
        let (Some(latitude), Some(longitude)) = (input.lat, input.lon) else {
            return Err(ServiceError::InvalidRequest("lat and lon are required".into()));
        };

        let owner = self.require_user(user_id).await?;
        let new = NewLocation { name: input.name, latitude, longitude };
        let saved = self.locations.create_location(&owner, new).await?;
        info!(location_id = saved.id, user_id = owner.id, "location_saved");
        Ok(saved)
    }

    pub async fn list_by_user(&self, user_id: i64) -> Result<Vec<Location>, ServiceError> {
        let owner = self.require_user(user_id).await?;
        self.locations.list_locations(&owner).await
    }
}

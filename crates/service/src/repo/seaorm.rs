use sea_orm::DatabaseConnection;

use crate::domain::{Credentials, Location, NewLocation, User};
use crate::errors::ServiceError;
use crate::repository::{LocationRepository, UserRepository};

/// Postgres-backed repositories over the `models` entities.
#[derive(Clone)]
pub struct SeaOrmRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

#[async_trait::async_trait]
impl UserRepository for SeaOrmRepository {
    async fn create_user(&self, username: &str, password_hash: String) -> Result<User, ServiceError> {
        let created = models::user::create(&self.db, username, &password_hash).await?;
        Ok(created.into())
    }

    async fn find_user(&self, id: i64) -> Result<Option<User>, ServiceError> {
        Ok(models::user::find(&self.db, id).await?.map(User::from))
    }

    async fn find_credentials(&self, username: &str) -> Result<Option<Credentials>, ServiceError> {
        Ok(models::user::find_by_username(&self.db, username).await?.map(Credentials::from))
    }

    async fn list_users(&self) -> Result<Vec<User>, ServiceError> {
        let users = models::user::list(&self.db).await?;
        Ok(users.into_iter().map(User::from).collect())
    }

    async fn delete_user(&self, id: i64) -> Result<bool, ServiceError> {
        Ok(models::user::delete(&self.db, id).await?)
    }
}

#[async_trait::async_trait]
impl LocationRepository for SeaOrmRepository {
    async fn create_location(&self, owner: &User, input: NewLocation) -> Result<Location, ServiceError> {
        let created = models::location::create(&self.db, owner.id, &input.name, input.latitude, input.longitude).await?;
        Ok(Location::from_model(created, owner))
    }

    async fn list_locations(&self, owner: &User) -> Result<Vec<Location>, ServiceError> {
        let rows = models::location::list_for_user(&self.db, owner.id).await?;
        Ok(rows.into_iter().map(|m| Location::from_model(m, owner)).collect())
    }
}

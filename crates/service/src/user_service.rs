use std::sync::Arc;

use tracing::{debug, info, instrument};

use crate::domain::{LoginInput, RegisterInput, User};
use crate::errors::ServiceError;
use crate::password::{hash_password, verify_password, AuthConfig};
use crate::repository::UserRepository;

/// Registration, login and user administration, independent of the web framework.
pub struct UserService {
    repo: Arc<dyn UserRepository>,
    cfg: AuthConfig,
}

impl UserService {
    pub fn new(repo: Arc<dyn UserRepository>, cfg: AuthConfig) -> Self { Self { repo, cfg } }

    /// Register a new user with a hashed password.
    ///
    /// # Examples
    /// ```
    /// use service::{password::AuthConfig, repository::mock::MockRepository, user_service::UserService};
    /// use service::domain::RegisterInput;
    /// use std::sync::Arc;
    /// let svc = UserService::new(Arc::new(MockRepository::default()), AuthConfig::fast());
    /// let input = RegisterInput { username: "alice".into(), password: "pw".into() };
    /// let user = tokio_test::block_on(svc.register(input)).unwrap();
    /// assert_eq!(user.username, "alice");
    /// ```
    #[instrument(skip(self, input), fields(username = %input.username))]
    pub async fn register(&self, input: RegisterInput) -> Result<User, ServiceError> {
        models::user::validate_username(&input.username)?;
        if input.password.is_empty() {
            return Err(ServiceError::InvalidRequest("password is required".into()));
        }
        if self.repo.find_credentials(&input.username).await?.is_some() {
            debug!("username already registered");
            return Err(ServiceError::Conflict(format!("username {} already taken", input.username)));
        }

        let hash = hash_password(&self.cfg, &input.password)?;
        let user = self.repo.create_user(&input.username, hash).await?;
        info!(user_id = user.id, username = %user.username, "user_registered");
        Ok(user)
    }

    /// Authenticate a user by username and password.
    ///
    /// # Examples
    /// ```
    /// use service::{password::AuthConfig, repository::mock::MockRepository, user_service::UserService};
    /// use service::domain::{LoginInput, RegisterInput};
    /// use std::sync::Arc;
    /// let svc = UserService::new(Arc::new(MockRepository::default()), AuthConfig::fast());
    /// let _ = tokio_test::block_on(svc.register(RegisterInput { username: "bob".into(), password: "s3cret".into() }));
    /// let user = tokio_test::block_on(svc.login(LoginInput { username: "bob".into(), password: "s3cret".into() })).unwrap();
    /// assert_eq!(user.username, "bob");
    /// ```
    #[instrument(skip(self, input), fields(username = %input.username))]
    pub async fn login(&self, input: LoginInput) -> Result<User, ServiceError> {
        let creds = self.repo
            .find_credentials(&input.username)
            .await?
            .ok_or(ServiceError::Unauthorized)?;

        if !verify_password(&input.password, &creds.password_hash)? {
            debug!("password mismatch");
            return Err(ServiceError::Unauthorized);
        }
        Ok(creds.user)
    }

    pub async fn list(&self) -> Result<Vec<User>, ServiceError> {
        self.repo.list_users().await
    }

    pub async fn get(&self, id: i64) -> Result<Option<User>, ServiceError> {
        self.repo.find_user(id).await
    }

    /// Delete by id. Deleting an unknown id succeeds.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: i64) -> Result<(), ServiceError> {
        let existed = self.repo.delete_user(id).await?;
        info!(user_id = id, existed, "user_deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::mock::MockRepository;

    fn svc() -> UserService {
        UserService::new(Arc::new(MockRepository::default()), AuthConfig::fast())
    }

    fn register_input(username: &str, password: &str) -> RegisterInput {
        RegisterInput { username: username.into(), password: password.into() }
    }

    fn login_input(username: &str, password: &str) -> LoginInput {
        LoginInput { username: username.into(), password: password.into() }
    }

    #[tokio::test]
    async fn register_assigns_id_and_keeps_username() {
        let svc = svc();
        let user = svc.register(register_input("alice", "pw")).await.unwrap();
        assert!(user.id > 0);
        assert_eq!(user.username, "alice");
        assert_eq!(svc.get(user.id).await.unwrap(), Some(user));
    }

    #[tokio::test]
    async fn register_rejects_blank_fields() {
        let svc = svc();
        let err = svc.register(register_input("  ", "pw")).await.unwrap_err();
        assert!(matches!(err, ServiceError::InvalidRequest(_)));
        let err = svc.register(register_input("alice", "")).await.unwrap_err();
        assert!(matches!(err, ServiceError::InvalidRequest(_)));
    }

    #[tokio::test]
    async fn register_rejects_username_wider_than_column() {
        let svc = svc();
        let too_long = "a".repeat(models::user::USERNAME_MAX_LEN + 1);
        let err = svc.register(register_input(&too_long, "pw")).await.unwrap_err();
        assert!(matches!(err, ServiceError::InvalidRequest(_)));

        let widest = "a".repeat(models::user::USERNAME_MAX_LEN);
        assert!(svc.register(register_input(&widest, "pw")).await.is_ok());
    }

    #[tokio::test]
    async fn register_duplicate_username_conflicts() {
        let svc = svc();
        svc.register(register_input("alice", "pw")).await.unwrap();
        let err = svc.register(register_input("alice", "other")).await.unwrap_err();
        assert!(matches!(err, ServiceError::Conflict(_)));
    }

    #[tokio::test]
    async fn login_accepts_correct_password() {
        let svc = svc();
        let registered = svc.register(register_input("alice", "pw")).await.unwrap();
        let user = svc.login(login_input("alice", "pw")).await.unwrap();
        assert_eq!(user, registered);
    }

    #[tokio::test]
    async fn login_rejects_wrong_password_and_unknown_user() {
        let svc = svc();
        svc.register(register_input("alice", "pw")).await.unwrap();
        assert!(matches!(svc.login(login_input("alice", "nope")).await, Err(ServiceError::Unauthorized)));
        assert!(matches!(svc.login(login_input("mallory", "pw")).await, Err(ServiceError::Unauthorized)));
    }

    #[tokio::test]
    async fn list_returns_every_user() {
        let svc = svc();
        assert!(svc.list().await.unwrap().is_empty());
        svc.register(register_input("a", "1")).await.unwrap();
        svc.register(register_input("b", "2")).await.unwrap();
        let names: Vec<_> = svc.list().await.unwrap().into_iter().map(|u| u.username).collect();
        assert_eq!(names, vec!["a", "b"]);
    }

    #[tokio::test]
    async fn delete_is_idempotent() {
        let svc = svc();
        let user = svc.register(register_input("alice", "pw")).await.unwrap();
        svc.delete(user.id).await.unwrap();
        assert_eq!(svc.get(user.id).await.unwrap(), None);
        svc.delete(user.id).await.unwrap();
        svc.delete(9_999).await.unwrap();
    }
}

use models::errors::ModelError;
use thiserror::Error;

/// Failures surfaced by the service layer; the HTTP layer maps each variant to a status.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("{0}")]
    InvalidRequest(String),
    #[error("{0}")]
    NotFound(String),
    #[error("invalid username or password")]
    Unauthorized,
    #[error("{0}")]
    Conflict(String),
    #[error("hashing error: {0}")]
    Hash(String),
    #[error("repository error: {0}")]
    Repository(String),
}

impl ServiceError {
    pub fn not_found(entity: &str) -> Self { Self::NotFound(format!("{} not found", entity)) }

    /// Stable numeric code for external mapping/logging
    pub fn code(&self) -> u16 {
        match self {
            ServiceError::InvalidRequest(_) => 1001,
            ServiceError::Conflict(_) => 1002,
            ServiceError::NotFound(_) => 1003,
            ServiceError::Unauthorized => 1004,
            ServiceError::Hash(_) => 1101,
            ServiceError::Repository(_) => 1200,
        }
    }
}

impl From<ModelError> for ServiceError {
    fn from(e: ModelError) -> Self {
        match e {
            ModelError::Validation(msg) => ServiceError::InvalidRequest(msg),
            ModelError::Conflict(msg) => ServiceError::Conflict(msg),
            ModelError::Db(msg) => ServiceError::Repository(msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn model_errors_keep_their_meaning() {
        let e: ServiceError = ModelError::Validation("name required".into()).into();
        assert!(matches!(e, ServiceError::InvalidRequest(ref m) if m == "name required"));
        let e: ServiceError = ModelError::Conflict("dup".into()).into();
        assert_eq!(e.code(), 1002);
        let e: ServiceError = ModelError::Db("boom".into()).into();
        assert_eq!(e.to_string(), "repository error: boom");
    }

    #[test]
    fn not_found_message() {
        assert_eq!(ServiceError::not_found("User").to_string(), "User not found");
    }
}

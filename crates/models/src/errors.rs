use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("database error: {0}")]
    Db(String),
}

impl From<DbErr> for ModelError {
    fn from(e: DbErr) -> Self {
        match e.sql_err() {
            // client messages never carry driver text
            Some(SqlErr::UniqueConstraintViolation(_)) => ModelError::Conflict("record already exists".into()),
            Some(SqlErr::ForeignKeyConstraintViolation(_)) => ModelError::Validation("referenced record does not exist".into()),
            _ => ModelError::Db(e.to_string()),
        }
    }
}

use chrono::Utc;
use sea_orm::{entity::prelude::*, DatabaseConnection, QueryOrder, Set};

use crate::errors::ModelError;
use crate::location;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub username: String,
    pub password_hash: String,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Locations,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self { Relation::Locations => Entity::has_many(location::Entity).into() }
    }
}

impl Related<location::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Locations.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Width of the `users.username` column, in characters.
pub const USERNAME_MAX_LEN: usize = 64;

pub fn validate_username(username: &str) -> Result<(), ModelError> {
    if username.trim().is_empty() {
        return Err(ModelError::Validation("username required".into()));
    }
    if username.chars().count() > USERNAME_MAX_LEN {
        return Err(ModelError::Validation(format!("username must be at most {USERNAME_MAX_LEN} characters")));
    }
    Ok(())
}

pub async fn create(db: &DatabaseConnection, username: &str, password_hash: &str) -> Result<Model, ModelError> {
    validate_username(username)?;
    if password_hash.trim().is_empty() {
        return Err(ModelError::Validation("password hash required".into()));
    }
    let am = ActiveModel {
        username: Set(username.to_string()),
        password_hash: Set(password_hash.to_string()),
        created_at: Set(Utc::now().into()),
        ..Default::default()
    };
    Ok(am.insert(db).await?)
}

pub async fn find(db: &DatabaseConnection, id: i64) -> Result<Option<Model>, ModelError> {
    Ok(Entity::find_by_id(id).one(db).await?)
}

pub async fn find_by_username(db: &DatabaseConnection, username: &str) -> Result<Option<Model>, ModelError> {
    Ok(Entity::find().filter(Column::Username.eq(username)).one(db).await?)
}

pub async fn list(db: &DatabaseConnection) -> Result<Vec<Model>, ModelError> {
    Ok(Entity::find().order_by_asc(Column::Id).all(db).await?)
}

/// Hard delete; owned locations go with it through the FK cascade.
/// Returns whether a row was removed.
pub async fn delete(db: &DatabaseConnection, id: i64) -> Result<bool, ModelError> {
    let res = Entity::delete_by_id(id).exec(db).await?;
    Ok(res.rows_affected > 0)
}

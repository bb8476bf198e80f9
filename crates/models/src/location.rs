use chrono::Utc;
use sea_orm::{entity::prelude::*, DatabaseConnection, QueryOrder, Set};

use crate::errors::ModelError;
use crate::user;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "locations")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub user_id: i64,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    User,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::User => Entity::belongs_to(user::Entity)
                .from(Column::UserId)
                .to(user::Column::Id)
                .into(),
        }
    }
}

impl Related<user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Width of the `locations.name` column, in characters.
pub const NAME_MAX_LEN: usize = 255;

pub fn validate_name(name: &str) -> Result<(), ModelError> {
    if name.trim().is_empty() {
        return Err(ModelError::Validation("location name required".into()));
    }
    if name.chars().count() > NAME_MAX_LEN {
        return Err(ModelError::Validation(format!("location name must be at most {NAME_MAX_LEN} characters")));
    }
    Ok(())
}

pub async fn create(
    db: &DatabaseConnection,
    user_id: i64,
    name: &str,
    latitude: f64,
    longitude: f64,
) -> Result<Model, ModelError> {
    validate_name(name)?;
    let am = ActiveModel {
        user_id: Set(user_id),
        name: Set(name.to_string()),
        latitude: Set(latitude),
        longitude: Set(longitude),
        created_at: Set(Utc::now().into()),
        ..Default::default()
    };
    Ok(am.insert(db).await?)
}

/// Locations owned by `user_id`, oldest first.
pub async fn list_for_user(db: &DatabaseConnection, user_id: i64) -> Result<Vec<Model>, ModelError> {
    Ok(Entity::find()
        .filter(Column::UserId.eq(user_id))
        .order_by_asc(Column::Id)
        .all(db)
        .await?)
}

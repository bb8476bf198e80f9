use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// User as exposed outside the service layer; carries no credential material.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub username: String,
    pub created_at: DateTime<Utc>,
}

/// Stored credentials for a user (hashed)
#[derive(Clone)]
pub struct Credentials {
    pub user: User,
    pub password_hash: String,
}

/// Registration input
#[derive(Clone, Deserialize)]
pub struct RegisterInput {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

/// Login input
#[derive(Clone, Deserialize)]
pub struct LoginInput {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

impl fmt::Debug for RegisterInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisterInput").field("username", &self.username).field("password", &"***").finish()
    }
}

impl fmt::Debug for LoginInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginInput").field("username", &self.username).field("password", &"***").finish()
    }
}

/// Reference to an owning user embedded in a location payload.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserRef {
    #[serde(default)]
    pub id: Option<i64>,
}

/// Body of `POST /api/locations`. Every field may be absent on the wire so the
/// user reference is checked before anything else.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveLocationInput {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lon: Option<f64>,
    #[serde(default)]
    pub user: Option<UserRef>,
}

/// Validated location data handed to the repository.
#[derive(Debug, Clone, PartialEq)]
pub struct NewLocation {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub id: i64,
    pub name: String,
    pub lat: f64,
    pub lon: f64,
    pub user_id: i64,
    pub created_at: DateTime<Utc>,
    pub user: User,
}

impl From<models::user::Model> for User {
    fn from(m: models::user::Model) -> Self {
        User { id: m.id, username: m.username, created_at: m.created_at.with_timezone(&Utc) }
    }
}

impl From<models::user::Model> for Credentials {
    fn from(m: models::user::Model) -> Self {
        let password_hash = m.password_hash.clone();
        Credentials { user: m.into(), password_hash }
    }
}

impl Location {
    pub fn from_model(m: models::location::Model, owner: &User) -> Self {
        Location {
            id: m.id,
            name: m.name,
            lat: m.latitude,
            lon: m.longitude,
            user_id: m.user_id,
            created_at: m.created_at.with_timezone(&Utc),
            user: owner.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_json_is_camel_case_without_password() {
        let u = User { id: 7, username: "alice".into(), created_at: Utc::now() };
        let v = serde_json::to_value(&u).unwrap();
        assert_eq!(v["id"], 7);
        assert_eq!(v["username"], "alice");
        assert!(v.get("createdAt").is_some());
        assert!(v.get("password").is_none());
        assert!(v.get("passwordHash").is_none());
    }

    #[test]
    fn save_location_payload_accepts_missing_user() {
        let input: SaveLocationInput = serde_json::from_str(r#"{"name":"Paris","lat":48.85,"lon":2.35}"#).unwrap();
        assert!(input.user.is_none());
        let input: SaveLocationInput =
            serde_json::from_str(r#"{"name":"Paris","lat":48.85,"lon":2.35,"user":{}}"#).unwrap();
        assert!(input.user.unwrap().id.is_none());
    }

    #[test]
    fn save_location_payload_tolerates_empty_object() {
        let input: SaveLocationInput = serde_json::from_str("{}").unwrap();
        assert!(input.user.is_none());
        assert!(input.name.is_empty());
        assert!(input.lat.is_none() && input.lon.is_none());
    }

    #[test]
    fn debug_redacts_password() {
        let input = LoginInput { username: "bob".into(), password: "hunter2".into() };
        let printed = format!("{input:?}");
        assert!(printed.contains("bob"));
        assert!(!printed.contains("hunter2"));
    }
}

use axum::Json;
use serde::Serialize;
use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
pub struct HealthResponse { pub status: String }

/// Body of register and login.
#[derive(Serialize, ToSchema)]
pub struct CredentialsRequest { pub username: String, pub password: String }

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserDoc { pub id: i64, pub username: String, pub created_at: String }

#[derive(Serialize, ToSchema)]
pub struct UserRefDoc { pub id: i64 }

#[derive(Serialize, ToSchema)]
pub struct SaveLocationRequest { pub name: String, pub lat: f64, pub lon: f64, pub user: UserRefDoc }

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LocationDoc {
    pub id: i64,
    pub name: String,
    pub lat: f64,
    pub lon: f64,
    pub user_id: i64,
    pub created_at: String,
    pub user: UserDoc,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::users::register,
        crate::routes::users::login,
        crate::routes::users::list_users,
        crate::routes::users::get_user,
        crate::routes::users::delete_user,
        crate::routes::locations::save_location,
        crate::routes::locations::list_user_locations,
    ),
    components(
        schemas(
            HealthResponse,
            CredentialsRequest,
            UserDoc,
            UserRefDoc,
            SaveLocationRequest,
            LocationDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "users", description = "Registration, login and user administration"),
        (name = "locations", description = "Saved locations per user"),
    )
)]
pub struct ApiDoc;

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use service::domain::{LoginInput, RegisterInput, User};
use service::ServiceError;
use tracing::info;

use crate::errors::JsonApiError;
use crate::extract::ApiJson;
use crate::state::AppState;

#[utoipa::path(post, path = "/api/register", tag = "users", request_body = crate::openapi::CredentialsRequest, responses((status = 200, description = "Registered", body = crate::openapi::UserDoc), (status = 400, description = "Bad Request"), (status = 409, description = "Conflict")))]
pub async fn register(State(state): State<AppState>, ApiJson(input): ApiJson<RegisterInput>) -> Result<Json<User>, JsonApiError> {
    let user = state.users.register(input).await?;
    Ok(Json(user))
}

#[utoipa::path(post, path = "/api/login", tag = "users", request_body = crate::openapi::CredentialsRequest, responses((status = 200, description = "Logged In", body = crate::openapi::UserDoc), (status = 401, description = "Unauthorized")))]
pub async fn login(State(state): State<AppState>, ApiJson(input): ApiJson<LoginInput>) -> Result<Json<User>, Response> {
    match state.users.login(input).await {
        Ok(user) => {
            info!(user_id = user.id, "login_succeeded");
            Ok(Json(user))
        }
        Err(ServiceError::Unauthorized) => {
            Err((StatusCode::UNAUTHORIZED, "Invalid username or password").into_response())
        }
        Err(e) => Err(JsonApiError::from(e).into_response()),
    }
}

#[utoipa::path(get, path = "/api/", tag = "users", responses((status = 200, description = "All users", body = [crate::openapi::UserDoc])))]
pub async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<User>>, JsonApiError> {
    Ok(Json(state.users.list().await?))
}

#[utoipa::path(get, path = "/api/{id}", tag = "users", params(("id" = i64, Path, description = "User id")), responses((status = 200, description = "User", body = crate::openapi::UserDoc), (status = 404, description = "Not Found")))]
pub async fn get_user(State(state): State<AppState>, Path(id): Path<i64>) -> Result<Json<User>, JsonApiError> {
    state
        .users
        .get(id)
        .await?
        .map(Json)
        .ok_or_else(|| ServiceError::not_found("User").into())
}

#[utoipa::path(delete, path = "/api/{id}", tag = "users", params(("id" = i64, Path, description = "User id")), responses((status = 200, description = "Confirmation message", body = String)))]
pub async fn delete_user(State(state): State<AppState>, Path(id): Path<i64>) -> Result<Json<String>, JsonApiError> {
    state.users.delete(id).await?;
    Ok(Json(format!("User with ID {} deleted successfully.", id)))
}

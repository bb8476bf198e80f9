use axum::{extract::{Path, State}, Json};
use service::domain::{Location, SaveLocationInput};

use crate::errors::JsonApiError;
use crate::extract::ApiJson;
use crate::state::AppState;

/// Save a location for the user referenced in the body.
#[utoipa::path(post, path = "/api/locations", tag = "locations", request_body = crate::openapi::SaveLocationRequest, responses((status = 200, description = "Saved", body = crate::openapi::LocationDoc), (status = 400, description = "Missing user reference"), (status = 404, description = "User not found")))]
pub async fn save_location(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<SaveLocationInput>,
) -> Result<Json<Location>, JsonApiError> {
    Ok(Json(state.locations.save(input).await?))
}

/// All locations saved by one user.
#[utoipa::path(get, path = "/api/locations/user/{user_id}", tag = "locations", params(("user_id" = i64, Path, description = "Owner id")), responses((status = 200, description = "Saved locations", body = [crate::openapi::LocationDoc]), (status = 404, description = "User not found")))]
pub async fn list_user_locations(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> Result<Json<Vec<Location>>, JsonApiError> {
    Ok(Json(state.locations.list_by_user(user_id).await?))
}

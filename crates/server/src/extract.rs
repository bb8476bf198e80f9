use axum::{
    async_trait,
    extract::{FromRequest, Request},
    Json,
};
use axum::extract::rejection::JsonRejection;
use service::ServiceError;

use crate::errors::JsonApiError;

/// `Json<T>` whose rejections render as a 400 `JsonApiError` instead of axum's
/// plain-text 400/415/422 bodies.
pub struct ApiJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ApiJson<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = JsonApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => Err(ServiceError::InvalidRequest(rejection.body_text()).into()),
        }
    }
}

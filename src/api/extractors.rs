use axum::{
    async_trait,
    extract::{FromRequest, Request},
    Json,
};
use serde_json::Value;

use crate::api::error::ApiError;

/// Custom extractor for ActionRouterInput JSON
pub struct ActionRouterExtractor(pub Value);

#[async_trait]
impl<S> FromRequest<S> for ActionRouterExtractor
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<Value>::from_request(req, state)
            .await
            .map_err(|e| {
                ApiError::bad_request(format!("Failed to parse JSON: {}", e))
            })?;

        // Exactly one top-level enum variant, e.g. { "Accounting": { ... } }
        let variants = match value.as_object() {
            Some(obj) => obj.len(),
            None => {
                return Err(ApiError::bad_request(
                    "Request body must be a JSON object",
                ))
            }
        };
        if variants != 1 {
            return Err(ApiError::bad_request(
                "Request body must contain exactly one top-level enum variant",
            ));
        }

        Ok(ActionRouterExtractor(value))
    }
}

/// JSON body whose parse failures are reported through ApiError
pub struct ApiJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ApiJson<T>
where
    S: Send + Sync,
    T: serde::de::DeserializeOwned + Send,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| ApiError::bad_request(format!("Failed to parse JSON: {}", e)))?;
        Ok(ApiJson(value))
    }
}

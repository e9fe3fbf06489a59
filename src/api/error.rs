use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::accounting::operations::InvalidBudget;
use crate::api::response::ApiResponse;

#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    NotFound(String),
    InternalError(String),
    StorageError(String),
}

impl ApiError {
    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self::BadRequest(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn internal_error(msg: impl Into<String>) -> Self {
        Self::InternalError(msg.into())
    }

    /// Map a processor failure, rejected input stays a 400
    pub fn from_action(context: &str, err: anyhow::Error) -> Self {
        if let Some(invalid) = err.downcast_ref::<InvalidBudget>() {
            return Self::BadRequest(invalid.to_string());
        }
        Self::StorageError(format!("{}: {}", context, err))
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::StorageError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn message(&self) -> String {
        match self {
            ApiError::BadRequest(msg) => msg.clone(),
            ApiError::NotFound(msg) => format!("{} not found", msg),
            ApiError::InternalError(msg) => msg.clone(),
            ApiError::StorageError(msg) => msg.clone(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!("{}", self.message());
        }
        let error_response = ApiResponse::<serde_json::Value>::error(self.message());

        (status, Json(error_response)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(ApiError::bad_request("x").status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::not_found("Budget").status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            ApiError::internal_error("disk").status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_from_action() {
        let invalid = anyhow::Error::new(InvalidBudget::NegativeAmount {
            year_month: "2022-10".parse().unwrap(),
            amount: bigdecimal::BigDecimal::from(-5),
        });
        let err = ApiError::from_action("Action processing failed", invalid);
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.message(), "Budget for 2022-10 cannot be negative: -5");

        let err = ApiError::from_action("Action processing failed", anyhow::anyhow!("disk full"));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.message(), "Action processing failed: disk full");
    }

    #[test]
    fn test_not_found_message() {
        assert_eq!(ApiError::not_found("Budget 2022-10").message(), "Budget 2022-10 not found");
    }
}

//! API error handling
//!
//! Maps use-case failures to the fixed status/body contract. Error bodies
//! are JSON-encoded plain strings (e.g. `"invalid zipcode"`), matching
//! what API consumers have historically been served.

use application::ApplicationError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// API error wrapping a use-case failure
#[derive(Debug, PartialEq, Eq)]
pub struct ApiError(ApplicationError);

impl From<ApplicationError> for ApiError {
    fn from(error: ApplicationError) -> Self {
        Self(error)
    }
}

impl ApiError {
    const fn status_code(&self) -> StatusCode {
        match self.0 {
            ApplicationError::InvalidCep => StatusCode::UNPROCESSABLE_ENTITY,
            ApplicationError::CepNotFound | ApplicationError::WeatherNotFound => {
                StatusCode::NOT_FOUND
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status_code(), Json(self.0.to_string())).into_response()
    }
}

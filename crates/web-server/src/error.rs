use analytics::AnalyticsError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),
    #[error("Analytics error: {0}")]
    Analytics(#[from] AnalyticsError),
    #[error("Not found: {0}")]
    NotFound(String),
}

impl AppError {
    pub fn invalid(field: &str, reason: impl std::fmt::Display) -> Self {
        AppError::Validation(format!("The {field} field {reason}."))
    }
}

/// Converts our custom `AppError` into an HTTP response.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::Validation(message) => (StatusCode::UNPROCESSABLE_ENTITY, message),
            AppError::Analytics(analytics_err) => match analytics_err {
                AnalyticsError::InvalidDateRange { .. } => (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    "The end date must be a date after or equal to the start date.".to_string(),
                ),
            },
            AppError::NotFound(message) => (StatusCode::NOT_FOUND, message),
        };

        let body = Json(json!({ "error": error_message }));
        (status, body).into_response()
    }
}

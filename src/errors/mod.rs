use actix_web::{HttpResponse, ResponseError};
use serde::Serialize;
use std::fmt;
use utoipa::ToSchema;

/// Error response structure returned for all failed requests.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Whether the request was successful (always false for errors)
    #[schema(example = false)]
    pub success: bool,
    /// Error message
    #[schema(example = "Invalid page or size parameter")]
    pub message: String,
}

#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::BadRequest(message) => write!(f, "Bad Request: {}", message),
        }
    }
}

impl ResponseError for ApiError {
    fn error_response(&self) -> HttpResponse {
        match self {
            ApiError::BadRequest(message) => HttpResponse::BadRequest().json(ErrorResponse {
                success: false,
                message: message.clone(),
            }),
        }
    }
}

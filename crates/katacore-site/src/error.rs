//! HTTP error types for the website.
//!
//! Maps domain errors from `katacore-core` into small HTML error pages.

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};

use katacore_core::SessionError;

use crate::html::escape;

/// Application-level error returned from HTTP handlers.
#[derive(Debug)]
pub enum AppError {
    /// Requested resource not found.
    NotFound,
    /// Client sent invalid input.
    BadRequest(String),
    /// Internal server error.
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, heading, message) = match self {
            Self::NotFound => (
                StatusCode::NOT_FOUND,
                "404 - Page Not Found".to_owned(),
                "The page you are looking for does not exist.".to_owned(),
            ),
            Self::BadRequest(msg) => (StatusCode::BAD_REQUEST, "400 - Bad Request".to_owned(), msg),
            Self::Internal(msg) => {
                tracing::error!(error = %msg, "internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "500 - Internal Server Error".to_owned(),
                    "internal server error".to_owned(),
                )
            }
        };

        let body = format!(
            "<!DOCTYPE html>\n<html><head><meta charset=\"utf-8\"/><title>{heading}</title></head><body><div class=\"error-page\"><h1>{heading}</h1><p>{}</p><a href=\"/\">Go back home</a></div></body></html>\n",
            escape(&message),
        );

        (status, Html(body)).into_response()
    }
}

impl From<SessionError> for AppError {
    fn from(err: SessionError) -> Self {
        match err {
            SessionError::MissingIdentity => Self::BadRequest(err.to_string()),
            SessionError::InvalidTtl { .. } => Self::Internal(err.to_string()),
        }
    }
}

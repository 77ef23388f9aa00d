//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into appropriate HTTP responses. The `AppError` enum serves
//! as the top-level error type that wraps domain-specific errors and implements
//! `IntoResponse` for automatic error handling in page handlers.
//!
//! Pages are HTML, so error bodies are short plain-text messages. Nothing returned to
//! the client carries internal detail; the full error is logged server-side instead.

pub mod config;
pub mod template;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::{config::ConfigError, template::TemplateError};

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application and provides
/// automatic conversion to HTTP responses. Startup-only variants (`ConfigErr`,
/// `IoErr`, `TemplateLoadErr`) abort the process before a request is ever served.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Template directory could not be loaded at startup.
    #[error(transparent)]
    TemplateLoadErr(#[from] TemplateError),

    /// Database operation error from SeaORM.
    ///
    /// Results in 500 Internal Server Error with the plain-text body `Database error`.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Template rendering error from Tera.
    ///
    /// Results in 500 Internal Server Error with a generic message.
    #[error(transparent)]
    TemplateErr(#[from] tera::Error),

    /// Listener bind or serve failure.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Invalid request error.
    ///
    /// Results in 400 Bad Request with the provided error message.
    ///
    /// # Fields
    /// - Message describing what was invalid about the request
    #[error("{0}")]
    BadRequest(String),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For `BadRequest`, body is the message itself
/// - 500 Internal Server Error - `Database error` for `DbErr`, `Internal server error`
///   for everything else
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg).into_response(),
            Self::DbErr(err) => {
                tracing::error!("Database error: {}", err);
                (StatusCode::INTERNAL_SERVER_ERROR, "Database error").into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic "Internal server error" message to the
/// client to avoid leaking implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error").into_response()
    }
}

//! Error types for sakila-api

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use crate::types::ErrorBody;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Film not found")]
    FilmNotFound,

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Error::FilmNotFound => (StatusCode::NOT_FOUND, "Film not found"),
            Error::Database(err) => {
                tracing::error!(error = %err, "Database query failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal server error")
            }
        };

        (
            status,
            Json(ErrorBody {
                message: message.to_string(),
            }),
        )
            .into_response()
    }
}

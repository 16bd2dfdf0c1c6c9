use std::fmt;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

#[derive(Debug)]
pub enum AppError {
    NotFound(String),
    BadRequest(String),
    Database(sqlx::Error),
}

impl AppError {
    /// `id` is whatever the client put in the path, parsed or not.
    pub fn project_not_found(id: impl fmt::Display) -> Self {
        AppError::NotFound(format!("Could not find project with id: {id}"))
    }

    fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::NotFound(msg) | AppError::BadRequest(msg) => f.write_str(msg),
            AppError::Database(err) => write!(f, "database error: {err}"),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let message = match &self {
            AppError::Database(err) => {
                tracing::error!(error = %err, "request failed in the database");
                "Internal server error".to_string()
            }
            other => other.to_string(),
        };

        (self.status(), Json(json!({ "error": message }))).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        AppError::Database(err)
    }
}

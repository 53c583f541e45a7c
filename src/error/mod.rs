use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub message: String,
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Missing field - {0}")]
    MissingField(String),

    #[error("Invalid value - {0}")]
    InvalidValue(String),

    #[error("Invalid request body")]
    InvalidBody,

    #[error("Invalid path")]
    InvalidPath,

    #[error("Invalid query string")]
    InvalidQuery,

    #[error("Unauthorized - {0}")]
    Unauthorized(String),

    #[error("Forbidden - {0}")]
    Forbidden(String),

    #[error("Not found - {0}")]
    NotFound(String),

    #[error("Route not found")]
    RouteNotFound,

    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("Invalid config - {0}")]
    InvalidConfig(String),

    #[error("Database error - {0}")]
    DatabaseError(#[from] sea_orm::DbErr),

    #[error("IO error - {0}")]
    IoError(#[from] std::io::Error),

    #[error("TryInitError - {0}")]
    TryInitError(#[from] tracing_subscriber::util::TryInitError),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::MissingField(_)
            | Self::InvalidValue(_)
            | Self::InvalidBody
            | Self::InvalidPath
            | Self::InvalidQuery => StatusCode::BAD_REQUEST,
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::Forbidden(_) => StatusCode::FORBIDDEN,
            Self::NotFound(_) | Self::RouteNotFound => StatusCode::NOT_FOUND,
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn user_safe_format(&self) -> ErrorBody {
        let message = match self {
            Self::MissingField(msg)
            | Self::InvalidValue(msg)
            | Self::Unauthorized(msg)
            | Self::Forbidden(msg)
            | Self::NotFound(msg) => msg.clone(),
            Self::InvalidBody => "Invalid request body".to_string(),
            Self::InvalidPath => "Invalid path".to_string(),
            Self::InvalidQuery => "Invalid query string".to_string(),
            Self::RouteNotFound => "Route not found".to_string(),
            Self::MethodNotAllowed => "Method not allowed".to_string(),
            Self::DatabaseError(error) => {
                tracing::error!(error = %error, "Database error");
                "Internal server error".to_string()
            }
            Self::IoError(error) => {
                tracing::error!(error = %error, "IO error");
                "Internal server error".to_string()
            }
            Self::InvalidConfig(error) => {
                tracing::error!(error = %error, "Invalid config");
                "Internal server error".to_string()
            }
            Self::TryInitError(error) => {
                tracing::error!(error = %error, "TryInitError");
                "Internal server error".to_string()
            }
        };

        ErrorBody { message }
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        (self.status(), Json(self.user_safe_format())).into_response()
    }
}

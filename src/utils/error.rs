use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    /// Falha reportada pela API do Twitter/X (resposta não-2xx)
    TwitterApi {
        message: String,
        detail: Option<String>,
    },
    ConfigError(String),
    JsonError(serde_json::Error),
    HttpError(reqwest::Error),
    ValidationError(String),
    InternalError(String),
}

impl AppError {
    pub fn twitter_api(message: impl Into<String>, detail: Option<String>) -> Self {
        AppError::TwitterApi {
            message: message.into(),
            detail,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::TwitterApi {
                message,
                detail: Some(detail),
            } => write!(f, "{}: {}", message, detail),
            AppError::TwitterApi {
                message,
                detail: None,
            } => write!(f, "{}", message),
            AppError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            AppError::JsonError(err) => write!(f, "JSON error: {}", err),
            AppError::HttpError(err) => write!(f, "HTTP error: {}", err),
            AppError::ValidationError(msg) => write!(f, "Validation error: {}", msg),
            AppError::InternalError(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::JsonError(err)
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::HttpError(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Corpo de erro no contrato {error, detail?}
        let (status, body) = match self {
            AppError::TwitterApi { message, detail } => {
                let mut body = json!({ "error": message });
                if let Some(detail) = detail {
                    body["detail"] = json!(detail);
                }
                (StatusCode::BAD_REQUEST, body)
            }
            AppError::ValidationError(msg) => (StatusCode::BAD_REQUEST, json!({ "error": msg })),
            AppError::JsonError(err) => {
                (StatusCode::BAD_REQUEST, json!({ "error": err.to_string() }))
            }
            AppError::HttpError(err) => (
                StatusCode::BAD_GATEWAY,
                json!({ "error": "Upstream request failed", "detail": err.to_string() }),
            ),
            AppError::ConfigError(msg) | AppError::InternalError(msg) => {
                (StatusCode::INTERNAL_SERVER_ERROR, json!({ "error": msg }))
            }
        };

        (status, axum::Json(body)).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;

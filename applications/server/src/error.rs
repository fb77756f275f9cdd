/// Server error types
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use userbase_core::UserError;

pub type Result<T> = std::result::Result<T, ServerError>;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("User not found: {0}")]
    UserNotFound(String),

    #[error("Request must be JSON")]
    InvalidJson,

    #[error("Missing required fields: name and email")]
    MissingFields,

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Endpoint not found")]
    EndpointNotFound,

    #[error("Internal server error: {0}")]
    Internal(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Store error: {0}")]
    Store(UserError),
}

impl From<UserError> for ServerError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::NotFound(id) => ServerError::UserNotFound(id.to_string()),
            UserError::MissingFields => ServerError::MissingFields,
            UserError::InvalidInput(msg) => ServerError::BadRequest(msg),
            other => ServerError::Store(other),
        }
    }
}

impl ServerError {
    pub fn status(&self) -> StatusCode {
        match self {
            ServerError::UserNotFound(_) | ServerError::EndpointNotFound => StatusCode::NOT_FOUND,
            ServerError::InvalidJson | ServerError::MissingFields | ServerError::BadRequest(_) => {
                StatusCode::BAD_REQUEST
            }
            ServerError::Internal(_) | ServerError::Config(_) | ServerError::Store(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

/// `{success: false, error}` envelope shared by every failure response
pub fn error_envelope(status: StatusCode, message: &str) -> Response {
    let body = Json(json!({
        "success": false,
        "error": message,
    }));

    (status, body).into_response()
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let error_message = match self {
            ServerError::UserNotFound(ref id) => {
                tracing::warn!("User {} not found", id);
                "User not found".to_string()
            }
            ServerError::InvalidJson | ServerError::MissingFields | ServerError::EndpointNotFound => {
                self.to_string()
            }
            ServerError::BadRequest(ref msg) => msg.clone(),
            ServerError::Config(ref msg) => {
                tracing::error!("Config error: {}", msg);
                "Internal server error".to_string()
            }
            ServerError::Store(ref e) => {
                tracing::error!("Store error: {:?}", e);
                "Internal server error".to_string()
            }
            ServerError::Internal(ref msg) => {
                tracing::error!("Internal server error: {}", msg);
                "Internal server error".to_string()
            }
        };

        error_envelope(self.status(), &error_message)
    }
}

use astra::Response;
use thiserror::Error;

/// Errors originating from either the server logic
/// (routing, missing resources, negotiation) or downstream layers (DB, casting).
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Not Found")]
    NotFound,
    #[error("Bad Request: {0}")]
    BadRequest(String),
    #[error("Not Acceptable")]
    NotAcceptable,
    #[error("Payload Too Large")]
    PayloadTooLarge,
    #[error("Cast to {kind} failed for value \"{value}\" at path \"{path}\"")]
    Cast {
        kind: &'static str,
        value: String,
        path: &'static str,
    },
    #[error("Database Error: {0}")]
    DbError(String),
    #[error("Configuration Error: {0}")]
    Config(String),
    #[error("Internal Server Error")]
    InternalError,
}

impl ServerError {
    pub fn status(&self) -> u16 {
        match self {
            ServerError::NotFound => 404,
            ServerError::BadRequest(_) | ServerError::Cast { .. } => 400,
            ServerError::NotAcceptable => 406,
            ServerError::PayloadTooLarge => 413,
            ServerError::DbError(_) | ServerError::Config(_) | ServerError::InternalError => 500,
        }
    }
}

// Type alias commonly used by route handlers.
pub type ResultResp = Result<Response, ServerError>;

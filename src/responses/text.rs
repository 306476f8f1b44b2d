use crate::errors::ServerError;
use crate::responses::ResultResp;
use astra::{Body, ResponseBuilder};

/// Plain text with a 200 status. Used for the storage failure messages of
/// create and update.
pub fn text_response(message: impl Into<String>) -> ResultResp {
    ResponseBuilder::new()
        .status(200)
        .header("Content-Type", "text/plain; charset=utf-8")
        .body(Body::from(message.into()))
        .map_err(|_| ServerError::InternalError)
}

use crate::errors::ServerError;
use crate::responses::ResultResp;
use astra::{Body, ResponseBuilder};

/// 302 to `location`, with the short text body browsers never show.
pub fn redirect(location: &str) -> ResultResp {
    ResponseBuilder::new()
        .status(302)
        .header("Location", location)
        .header("Content-Type", "text/plain; charset=utf-8")
        .body(Body::from(format!("Found. Redirecting to {location}")))
        .map_err(|_| ServerError::InternalError)
}

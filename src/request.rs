use crate::errors::ServerError;
use astra::Request;
use http::header::CONTENT_TYPE;
use http::Method;
use serde_json::{Map, Value};
use std::io::Read;

/// Decoded request body: field name to value.
pub type BodyFields = Map<String, Value>;

/// Form field that lets an HTML form ask for PUT or DELETE.
pub const METHOD_OVERRIDE_FIELD: &str = "_method";

/// Largest body we decode, in bytes. Anything longer is rejected with 413.
pub const BODY_LIMIT: u64 = 100 * 1024;

/// Read and decode the request body according to its `Content-Type`.
///
/// Urlencoded pairs become strings (a repeated key becomes an array), a JSON object
/// is taken as-is. Anything else decodes to an empty map. Bodies over [`BODY_LIMIT`]
/// are [`ServerError::PayloadTooLarge`].
pub fn decode_body(req: &mut Request) -> Result<BodyFields, ServerError> {
    let content_type = req
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<mime::Mime>().ok());

    let Some(content_type) = content_type else {
        return Ok(BodyFields::new());
    };

    let mut raw = Vec::new();
    req.body_mut()
        .reader()
        .take(BODY_LIMIT + 1)
        .read_to_end(&mut raw)
        .map_err(|e| ServerError::BadRequest(format!("failed to read body: {e}")))?;

    if raw.len() as u64 > BODY_LIMIT {
        return Err(ServerError::PayloadTooLarge);
    }

    match content_type.essence_str() {
        "application/x-www-form-urlencoded" => Ok(decode_form(&raw)),
        "application/json" => decode_json(&raw),
        _ => Ok(BodyFields::new()),
    }
}

fn decode_form(raw: &[u8]) -> BodyFields {
    let mut fields = BodyFields::new();

    for (key, value) in url::form_urlencoded::parse(raw) {
        let value = Value::String(value.into_owned());
        match fields.get_mut(&*key) {
            Some(Value::Array(values)) => values.push(value),
            Some(existing) => {
                let first = existing.take();
                *existing = Value::Array(vec![first, value]);
            }
            None => {
                fields.insert(key.into_owned(), value);
            }
        }
    }

    fields
}

fn decode_json(raw: &[u8]) -> Result<BodyFields, ServerError> {
    if raw.iter().all(u8::is_ascii_whitespace) {
        return Ok(BodyFields::new());
    }

    match serde_json::from_slice::<Value>(raw) {
        Ok(Value::Object(fields)) => Ok(fields),
        Ok(_) => Ok(BodyFields::new()),
        Err(e) => Err(ServerError::BadRequest(format!("invalid JSON body: {e}"))),
    }
}

/// Resolve the method a POST form asked for through `_method`.
///
/// Only POST is overridable. The override field is always stripped from a POST body;
/// a value that is not a valid method leaves POST in place.
pub fn resolve_method(method: &Method, body: &mut BodyFields) -> Method {
    if method != Method::POST {
        return method.clone();
    }

    let Some(requested) = body.remove(METHOD_OVERRIDE_FIELD) else {
        return Method::POST;
    };

    requested
        .as_str()
        .and_then(|m| Method::from_bytes(m.trim().to_ascii_uppercase().as_bytes()).ok())
        .unwrap_or(Method::POST)
}

use crate::domain::object_id::ObjectId;
use crate::errors::ServerError;
use serde::Serialize;
use serde_json::{Map, Value};
use std::fmt;

/// Name the listing collection is addressed by.
pub const MODEL_NAME: &str = "Listing";

/// A stored listing document.
///
/// Every field besides `_id` may be absent; absent fields are left out of the
/// JSON representation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Listing {
    #[serde(rename = "_id")]
    pub internal_id: ObjectId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub isactive: Option<bool>,
    #[serde(rename = "__v")]
    pub version: i64,
}

impl fmt::Display for Listing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{ _id: {}, title: {:?}, description: {:?}, isactive: {:?} }}",
            self.internal_id, self.title, self.description, self.isactive
        )
    }
}

/// The writable part of a listing, as sent by POST and PUT.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListingFields {
    pub title: Option<String>,
    pub description: Option<String>,
    pub isactive: Option<bool>,
}

impl ListingFields {
    /// Cast decoded body values into typed fields. Unknown keys are ignored.
    pub fn cast(body: &Map<String, Value>) -> Result<Self, ServerError> {
        Ok(Self {
            title: cast_string("title", body.get("title"))?,
            description: cast_string("description", body.get("description"))?,
            isactive: cast_boolean("isactive", body.get("isactive"))?,
        })
    }
}

fn cast_string(path: &'static str, value: Option<&Value>) -> Result<Option<String>, ServerError> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(Value::Number(n)) => Ok(Some(n.to_string())),
        Some(Value::Bool(b)) => Ok(Some(b.to_string())),
        Some(other) => Err(ServerError::Cast {
            kind: "String",
            value: other.to_string(),
            path,
        }),
    }
}

fn cast_boolean(path: &'static str, value: Option<&Value>) -> Result<Option<bool>, ServerError> {
    let cast_err = |v: &Value| ServerError::Cast {
        kind: "Boolean",
        value: match v {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        },
        path,
    };

    let Some(v) = value else {
        return Ok(None);
    };

    match v {
        Value::Null => Ok(None),
        Value::Bool(b) => Ok(Some(*b)),
        Value::Number(n) => match n.as_f64() {
            Some(x) if x == 1.0 => Ok(Some(true)),
            Some(x) if x == 0.0 => Ok(Some(false)),
            _ => Err(cast_err(v)),
        },
        Value::String(s) => match s.as_str() {
            "" => Ok(None),
            "true" | "1" | "yes" => Ok(Some(true)),
            "false" | "0" | "no" => Ok(Some(false)),
            _ => Err(cast_err(v)),
        },
        _ => Err(cast_err(v)),
    }
}

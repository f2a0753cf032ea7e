//! Structured HTTP request model
//!
//! [`ParsedRequest`] is the in-memory form a request editor binds to: URL with
//! its query split out, ordered search params and headers (duplicates
//! allowed), a method that is never unset, and an optional body. The serde
//! shape uses camelCase field names so the JSON matches what a request form
//! would store.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Request method; everything a request form offers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Method {
    #[default]
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    /// Map a user-typed method token, lower-cased; anything unrecognized
    /// falls back to GET.
    pub fn from_token(token: &str) -> Self {
        match token.to_ascii_lowercase().as_str() {
            "post" => Method::Post,
            "put" => Method::Put,
            "delete" => Method::Delete,
            _ => Method::Get,
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Method::Get => "get",
            Method::Post => "post",
            Method::Put => "put",
            Method::Delete => "delete",
        };
        write!(f, "{}", name)
    }
}

/// An ordered name/value entry, used for both search params and headers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedPair {
    pub name: String,
    pub value: String,
}

impl NamedPair {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        NamedPair {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Request payload: raw text or a parsed JSON value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Body {
    Text(String),
    Json(Value),
}

impl Body {
    /// Wrap a JSON value parsed from user text. A bare JSON string collapses
    /// to [`Body::Text`]; the model does not distinguish the two.
    pub fn from_json(value: Value) -> Self {
        match value {
            Value::String(s) => Body::Text(s),
            other => Body::Json(other),
        }
    }
}

/// The structured form of one curl invocation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedRequest {
    /// Absolute URL with the query string stripped
    pub url: String,
    /// Query parameters, insertion order preserved, duplicates allowed
    #[serde(default)]
    pub search_params: Vec<NamedPair>,
    #[serde(default)]
    pub method: Method,
    /// Header names stay as the user typed them
    #[serde(default)]
    pub headers: Vec<NamedPair>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<Body>,
}

//! Request and response shapes for the HTTP client.
//!
//! Payloads are untyped `serde_json::Value`s: the client passes through
//! whatever the backend contract defines. [`Envelope`] is a typed view of
//! the backend's `{ code, message, data }` wrapper for the few callers
//! that need to read one field.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::time::Duration;

use reqwest::header::HeaderMap;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => Self::GET,
            Method::Post => Self::POST,
            Method::Put => Self::PUT,
            Method::Delete => Self::DELETE,
        }
    }
}

/// One outgoing API call, relative to the client's base path.
#[derive(Clone, Debug)]
pub struct HttpRequest {
    pub method: Method,
    /// Path below the base path, e.g. `/datasources/3`.
    pub path: String,
    pub query: Vec<(String, String)>,
    pub headers: HeaderMap,
    pub body: Option<Value>,
    /// Per-call override; the client fills in its default when `None`.
    pub timeout: Option<Duration>,
}

impl HttpRequest {
    #[must_use]
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            headers: HeaderMap::new(),
            body: None,
            timeout: None,
        }
    }

    #[must_use]
    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::Get, path)
    }

    #[must_use]
    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::Post, path)
    }

    #[must_use]
    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::Put, path)
    }

    #[must_use]
    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::Delete, path)
    }

    /// Attach a JSON body.
    #[must_use]
    pub fn json(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Append query pairs flattened from a JSON object.
    #[must_use]
    pub fn params(mut self, params: Option<&Value>) -> Self {
        if let Some(params) = params {
            self.query.extend(query_pairs(params));
        }
        self
    }

    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Value of header `name` as text, if present and valid UTF-8.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}

/// Flatten a JSON object into query pairs.
///
/// Scalars become `key=value`, `null` is skipped, nested objects become
/// `key[sub]=value`, and arrays become repeated `key[]=value`. A non-object
/// top level yields no pairs.
#[must_use]
pub fn query_pairs(params: &Value) -> Vec<(String, String)> {
    let mut pairs = Vec::new();
    if let Value::Object(map) = params {
        for (key, value) in map {
            push_pairs(key.clone(), value, &mut pairs);
        }
    }
    pairs
}

fn push_pairs(key: String, value: &Value, out: &mut Vec<(String, String)>) {
    match value {
        Value::Null => {}
        Value::String(s) => out.push((key, s.clone())),
        Value::Bool(_) | Value::Number(_) => out.push((key, value.to_string())),
        Value::Array(items) => {
            let key = format!("{key}[]");
            for item in items {
                push_pairs(key.clone(), item, out);
            }
        }
        Value::Object(map) => {
            for (sub, item) in map {
                push_pairs(format!("{key}[{sub}]"), item, out);
            }
        }
    }
}

/// Raw response passed back to callers unmodified.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: Value,
}

impl ApiResponse {
    #[must_use]
    pub fn new(status: u16, body: Value) -> Self {
        Self { status, body }
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// The envelope's `data` member, or `Null` when absent.
    #[must_use]
    pub fn data(&self) -> &Value {
        self.body.get("data").unwrap_or(&Value::Null)
    }

    /// Decode the body as a backend envelope.
    ///
    /// # Errors
    ///
    /// Returns an error if the body does not match `Envelope<T>`.
    pub fn envelope<T: DeserializeOwned>(&self) -> Result<Envelope<T>, serde_json::Error> {
        Envelope::<T>::deserialize(&self.body)
    }
}

/// Parse a response body: empty is `Null`, non-JSON text is kept as a string.
#[must_use]
pub fn parse_body(text: &str) -> Value {
    if text.trim().is_empty() {
        return Value::Null;
    }
    serde_json::from_str(text).unwrap_or_else(|_| Value::String(text.to_owned()))
}

/// Backend response wrapper.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Envelope<T> {
    #[serde(default)]
    pub code: i64,
    #[serde(default)]
    pub message: String,
    pub data: Option<T>,
}

/// `data` of a successful `POST /auth/login`.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct LoginData {
    pub token: String,
}

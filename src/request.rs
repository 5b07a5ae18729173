use reqwest::Method;
use serde::Serialize;

use crate::{FetchError, Result};

/// Describes one logical request: target URL, method, headers, and body.
///
/// A `Request` is immutable once handed to the executor; every retry attempt
/// sends the same descriptor. Header names and values are kept as plain
/// strings here and validated at the transport boundary, so a malformed
/// header surfaces as [`FetchError::Validation`] before any network traffic.
#[derive(Clone, Debug)]
pub struct Request {
    url: String,
    method: Method,
    headers: Vec<(String, String)>,
    body: Option<Vec<u8>>,
}

impl Request {
    /// Creates a request with an explicit method.
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            method,
            headers: Vec::new(),
            body: None,
        }
    }

    /// Creates a GET request.
    pub fn get(url: impl Into<String>) -> Self {
        Self::new(Method::GET, url)
    }

    /// Creates a POST request.
    pub fn post(url: impl Into<String>) -> Self {
        Self::new(Method::POST, url)
    }

    /// Appends a header pair. Repeated names are sent in insertion order.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Sets a raw byte body.
    pub fn body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Sets a JSON body and the matching `Content-Type` header.
    ///
    /// Serialization failure is a [`FetchError::Validation`]: the request
    /// never reaches the transport and is never retried.
    pub fn json<T: Serialize>(self, value: &T) -> Result<Self> {
        let body = serde_json::to_vec(value)
            .map_err(|err| FetchError::Validation(format!("unserializable JSON body: {err}")))?;
        Ok(self
            .header("content-type", "application/json")
            .body(body))
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }

    pub fn body_bytes(&self) -> Option<&[u8]> {
        self.body.as_deref()
    }
}

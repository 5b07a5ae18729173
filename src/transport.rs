use std::future::Future;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};

use crate::{FetchError, Request, Response, Result};

/// The injected capability performing one actual network exchange.
///
/// Implementations classify their own failures into [`FetchError`]; the
/// executor never inspects transport internals, only the error tag. The
/// returned future must be cancel-safe: the executor drops it when the
/// per-attempt deadline fires, and dropping must release any in-flight
/// connection.
pub trait Transport {
    fn send(&self, request: &Request) -> impl Future<Output = Result<Response>> + Send;
}

/// [`Transport`] backed by a shared [`reqwest::Client`].
///
/// Cloning is cheap; the underlying connection pool is shared.
#[derive(Clone, Debug, Default)]
pub struct HttpTransport {
    http: reqwest::Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps an existing client, keeping its pool and TLS configuration.
    pub fn with_client(http: reqwest::Client) -> Self {
        Self { http }
    }
}

impl Transport for HttpTransport {
    async fn send(&self, request: &Request) -> Result<Response> {
        let headers = build_header_map(request.headers())?;

        let mut builder = self
            .http
            .request(request.method().clone(), request.url())
            .headers(headers);
        if let Some(body) = request.body_bytes() {
            builder = builder.body(body.to_vec());
        }

        let response = builder.send().await.map_err(classify_reqwest_error)?;
        let status = response.status().as_u16();
        let response_headers = response
            .headers()
            .iter()
            .map(|(name, value)| {
                (
                    name.as_str().to_owned(),
                    String::from_utf8_lossy(value.as_bytes()).into_owned(),
                )
            })
            .collect();
        let body = response
            .bytes()
            .await
            .map_err(classify_reqwest_error)?
            .to_vec();

        let response = Response::new(status, response_headers, body);
        if !response.is_success() {
            let body = String::from_utf8_lossy(response.body()).into_owned();
            return Err(FetchError::Http { status, body });
        }
        Ok(response)
    }
}

fn build_header_map(pairs: &[(String, String)]) -> Result<HeaderMap> {
    let mut map = HeaderMap::with_capacity(pairs.len());
    for (name, value) in pairs {
        let name = HeaderName::try_from(name.as_str())
            .map_err(|_| FetchError::Validation(format!("invalid header name: {name:?}")))?;
        let value = HeaderValue::try_from(value.as_str())
            .map_err(|_| FetchError::Validation(format!("invalid header value for {name}")))?;
        map.append(name, value);
    }
    Ok(map)
}

/// Splits reqwest failures into the caller-fault and network-fault tags.
///
/// Builder errors (unparsable URL and friends) mean the request can never
/// succeed, so they are `Validation`; everything else that reaches us here
/// is connection-level and retryable.
fn classify_reqwest_error(err: reqwest::Error) -> FetchError {
    if err.is_builder() {
        FetchError::Validation(err.to_string())
    } else {
        FetchError::Transport(err.to_string())
    }
}

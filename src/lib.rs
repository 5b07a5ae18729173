//! `fetch-retry` executes HTTP requests against an unreliable network with
//! a hard per-attempt deadline and bounded exponential backoff retries.
//!
//! The entry point is [`FetchClient::execute`]: one logical request, at most
//! `1 + max_retries` attempts, each bounded by `timeout_ms`. Transient
//! failures (non-success statuses, connection-level errors) retry after an
//! exponentially growing delay; timeouts and caller mistakes are terminal.
//!
//! ```no_run
//! use fetch_retry::{FetchClient, Request};
//!
//! # async fn run() -> fetch_retry::Result<()> {
//! let client = FetchClient::new();
//! let response = client.execute(&Request::get("https://example.com/api/health")).await?;
//! println!("status {}", response.status());
//! # Ok(())
//! # }
//! ```
//!
//! The network side lives behind the [`Transport`] trait, so tests can swap
//! in scripted transports; [`HttpTransport`] is the reqwest-backed default.

mod client;
mod error;
mod policy;
mod request;
mod response;
mod transport;

pub use client::FetchClient;
pub use error::FetchError;
pub use policy::RetryPolicy;
pub use request::Request;
pub use response::Response;
pub use transport::{HttpTransport, Transport};

pub type Result<T> = std::result::Result<T, FetchError>;

/// Error type returned by this crate.
///
/// Failures are classified once, at the transport boundary, into this closed
/// set; the retry loop branches only on [`FetchError::is_retryable`].
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// The per-attempt deadline elapsed before the transport settled.
    ///
    /// Terminal: a timed-out attempt is never retried, regardless of the
    /// remaining retry budget.
    #[error("request timed out after {after_ms} ms")]
    Timeout {
        /// Deadline that was exceeded, in milliseconds.
        after_ms: u64,
    },
    /// The transport completed but the response carried a non-success status.
    ///
    /// Retryable while budget remains.
    #[error("http error {status}: {body}")]
    Http { status: u16, body: String },
    /// Connection-level failure before a response was obtained
    /// (DNS, connect, TLS, broken body stream).
    ///
    /// Retryable while budget remains.
    #[error("transport error: {0}")]
    Transport(String),
    /// The request itself is malformed (bad URL, invalid header name or
    /// value, unserializable body). Never retried.
    #[error("invalid request: {0}")]
    Validation(String),
    /// Response body decoding error (non-UTF-8 text, malformed JSON).
    /// Never retried.
    #[error("decode error: {0}")]
    Decode(String),
}

impl FetchError {
    /// Whether this failure may consume retry budget.
    ///
    /// Only [`Http`](FetchError::Http) and
    /// [`Transport`](FetchError::Transport) qualify. Timeouts never retry:
    /// a deadline miss already cost the full per-attempt budget, so it
    /// propagates immediately instead of compounding.
    pub fn is_retryable(&self) -> bool {
        matches!(self, FetchError::Http { .. } | FetchError::Transport(_))
    }
}

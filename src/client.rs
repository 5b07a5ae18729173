use std::time::Duration;

use tokio::time::{sleep, timeout};

use crate::{FetchError, HttpTransport, Request, Response, Result, RetryPolicy, Transport};

/// Executes requests against a [`Transport`] with a hard per-attempt
/// deadline and bounded exponential backoff retries.
///
/// A single [`execute`](FetchClient::execute) call runs its attempts
/// strictly sequentially: one transport call, then (on a retryable failure
/// with budget left) one backoff sleep, then the next attempt. The client
/// holds no per-call state, so it can be shared freely between concurrent
/// callers; overlapping `execute` calls never interfere with each other's
/// retry budgets.
///
/// Dropping the `execute` future cancels the whole sequence, including any
/// in-flight transport call.
#[derive(Clone, Debug)]
pub struct FetchClient<T = HttpTransport> {
    transport: T,
    policy: RetryPolicy,
}

impl FetchClient<HttpTransport> {
    /// Creates a client over a fresh HTTP transport with the default policy
    /// (3 retries, 1 s initial backoff, 10 s deadline).
    pub fn new() -> Self {
        Self::with_transport(HttpTransport::new())
    }
}

impl Default for FetchClient<HttpTransport> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Transport> FetchClient<T> {
    /// Creates a client over a custom transport.
    pub fn with_transport(transport: T) -> Self {
        Self {
            transport,
            policy: RetryPolicy::default(),
        }
    }

    /// Replaces the retry policy.
    pub fn with_policy(mut self, policy: RetryPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn policy(&self) -> &RetryPolicy {
        &self.policy
    }

    /// Executes the request, retrying transient failures.
    ///
    /// Makes at most `1 + max_retries` transport calls. Each attempt is
    /// bounded by `timeout_ms`; a deadline miss cancels the in-flight call
    /// and surfaces [`FetchError::Timeout`] without consuming retry budget —
    /// timeouts are terminal. [`FetchError::Http`] and
    /// [`FetchError::Transport`] retry after an exponentially growing sleep
    /// (`initial_backoff_ms`, then doubled per retry); any other failure
    /// propagates immediately. When the budget runs out, the last failure is
    /// returned unchanged.
    pub async fn execute(&self, request: &Request) -> Result<Response> {
        let deadline = Duration::from_millis(self.policy.timeout_ms);
        let mut remaining = self.policy.max_retries;
        // A zero seed would retry without any delay; floor it at 1 ms.
        let mut backoff_ms = self.policy.initial_backoff_ms.max(1);

        loop {
            let settled = match timeout(deadline, self.transport.send(request)).await {
                Ok(settled) => settled,
                // Elapsed drops the send future, aborting the transport call.
                Err(_) => {
                    return Err(FetchError::Timeout {
                        after_ms: self.policy.timeout_ms,
                    })
                }
            };

            let err = match settled {
                Ok(response) => return Ok(response),
                Err(err) => err,
            };
            if remaining == 0 || !err.is_retryable() {
                return Err(err);
            }

            self.wait_before_retry(backoff_ms).await;
            remaining -= 1;
            backoff_ms = backoff_ms.saturating_mul(2);
        }
    }

    /// Passive delay between attempts; not counted against any deadline.
    async fn wait_before_retry(&self, delay_ms: u64) {
        #[cfg(feature = "tracing")]
        tracing::debug!("retrying request after {} ms", delay_ms);

        sleep(Duration::from_millis(delay_ms)).await;
    }
}

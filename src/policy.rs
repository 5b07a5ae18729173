use serde::{Deserialize, Serialize};

/// Configures per-attempt timeout and retry behavior.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RetryPolicy {
    /// Maximum number of retries after the initial attempt.
    pub max_retries: u32,
    /// Delay before the first retry, in milliseconds; doubles on each
    /// subsequent retry. A value of zero is coerced to one millisecond so
    /// retries never spin hot.
    pub initial_backoff_ms: u64,
    /// Per-attempt deadline in milliseconds. Identical on every attempt,
    /// including retries.
    pub timeout_ms: u64,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 3,
            initial_backoff_ms: 1_000,
            timeout_ms: 10_000,
        }
    }
}

impl RetryPolicy {
    /// A policy that fails fast: no retries, default deadline.
    pub fn no_retry() -> Self {
        Self {
            max_retries: 0,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::RetryPolicy;

    #[test]
    fn default_policy() {
        let policy = RetryPolicy::default();
        assert_eq!(policy.max_retries, 3);
        assert_eq!(policy.initial_backoff_ms, 1_000);
        assert_eq!(policy.timeout_ms, 10_000);
    }

    #[test]
    fn no_retry_keeps_deadline() {
        let policy = RetryPolicy::no_retry();
        assert_eq!(policy.max_retries, 0);
        assert_eq!(policy.timeout_ms, 10_000);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let policy: RetryPolicy =
            serde_json::from_str(r#"{"max_retries": 5}"#).expect("partial policy must parse");
        assert_eq!(policy.max_retries, 5);
        assert_eq!(policy.initial_backoff_ms, 1_000);
        assert_eq!(policy.timeout_ms, 10_000);
    }
}

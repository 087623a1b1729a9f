//! Retrying transfer unit
//!
//! Wraps one endpoint call with bounded retry and a fixed delay
//! between attempts. Failure never escapes as an error; the unit
//! always reports its outcome as a boolean.

use std::time::Duration;

use tokio::time::sleep;

use crate::transfer::adapters::AssetEndpoint;
use crate::transfer::types::CallResult;

/// Quantity sent with every transfer call; assets move one unit at a time.
pub const TRANSFER_QUANTITY: &str = "1";

/// Retry budget for one asset
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    /// Total attempts, including the first
    pub max_attempts: u32,
    /// Delay between attempts; never applied after the last attempt
    pub retry_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 5,
            retry_delay: Duration::from_secs(1),
        }
    }
}

/// Run one asset's transfer with bounded retry.
///
/// Returns `true` on the first successful call. On failure, waits
/// `retry_delay` and tries again until `max_attempts` calls have been
/// made, then logs the final error and returns `false`.
pub async fn transfer_with_retry(
    endpoint: &dyn AssetEndpoint,
    asset_id: &str,
    recipient: &str,
    policy: &RetryPolicy,
) -> bool {
    for attempt in 0..policy.max_attempts {
        match endpoint.transfer(asset_id, recipient, TRANSFER_QUANTITY).await {
            CallResult::Success => return true,
            CallResult::Failed(e) => {
                if attempt + 1 == policy.max_attempts {
                    log::error!(
                        "Failed to transfer asset {} after {} attempts: {}",
                        asset_id,
                        policy.max_attempts,
                        e
                    );
                    return false;
                }

                log::warn!(
                    "Transfer of asset {} failed on attempt {}: {} (retrying)",
                    asset_id,
                    attempt + 1,
                    e
                );
                sleep(policy.retry_delay).await;
            }
        }
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transfer::adapters::{MockEndpoint, Plan};

    fn fast_policy(max_attempts: u32) -> RetryPolicy {
        RetryPolicy {
            max_attempts,
            retry_delay: Duration::from_millis(1),
        }
    }

    #[tokio::test]
    async fn test_success_on_first_attempt_calls_once() {
        let mock = MockEndpoint::new("test");

        let ok = transfer_with_retry(&mock, "a", "R", &fast_policy(5)).await;

        assert!(ok);
        assert_eq!(mock.calls_for("a"), 1);
    }

    #[tokio::test]
    async fn test_success_after_two_failures_calls_three_times() {
        let mock = MockEndpoint::new("test");
        mock.set_plan("a", Plan::FailTimes(2));

        let ok = transfer_with_retry(&mock, "a", "R", &fast_policy(5)).await;

        assert!(ok);
        assert_eq!(mock.calls_for("a"), 3);
    }

    #[tokio::test]
    async fn test_exhausted_attempts_reports_false() {
        let mock = MockEndpoint::new("test");
        mock.set_plan("a", Plan::AlwaysFail);

        let ok = transfer_with_retry(&mock, "a", "R", &fast_policy(3)).await;

        assert!(!ok);
        assert_eq!(mock.calls_for("a"), 3);
    }

    #[tokio::test]
    async fn test_failure_on_last_allowed_attempt() {
        // Fails exactly max_attempts times, so the success scripted
        // after them is never reached.
        let mock = MockEndpoint::new("test");
        mock.set_plan("a", Plan::FailTimes(4));

        let ok = transfer_with_retry(&mock, "a", "R", &fast_policy(4)).await;

        assert!(!ok);
        assert_eq!(mock.calls_for("a"), 4);
    }

    #[test]
    fn test_default_policy_values() {
        let policy = RetryPolicy::default();

        assert_eq!(policy.max_attempts, 5);
        assert_eq!(policy.retry_delay, Duration::from_secs(1));
    }
}

//! Core types for the bulk transfer engine.

use serde::{Deserialize, Serialize};

/// Result of one endpoint transfer call
///
/// - Success: the remote call definitely completed
/// - Failed: the call failed as far as the caller can tell; the remote
///   side may still have applied it (the call is not proven idempotent)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallResult {
    Success,
    Failed(String),
}

impl CallResult {
    pub fn is_success(&self) -> bool {
        matches!(self, CallResult::Success)
    }
}

/// Final outcome for one requested asset
///
/// Produced exactly once per asset, regardless of how many attempts
/// its unit consumed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferOutcome {
    pub asset_id: String,
    pub success: bool,
}

/// Summary of one bulk invocation
///
/// Invariants: `success_count + fail_count` equals the number of
/// requested asset ids, and `failed_assets.len() == fail_count`.
/// `failed_assets` is ordered by unit completion, not by input order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulkTransferResult {
    pub success_count: usize,
    pub fail_count: usize,
    pub failed_assets: Vec<String>,
}

impl BulkTransferResult {
    pub fn total(&self) -> usize {
        self.success_count + self.fail_count
    }

    /// Partial batch failure is a normal return value, not an error;
    /// callers inspect the result to detect it.
    pub fn is_partial_failure(&self) -> bool {
        self.fail_count > 0 && self.success_count > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_call_result_is_success() {
        assert!(CallResult::Success.is_success());
        assert!(!CallResult::Failed("timeout".to_string()).is_success());
    }

    #[test]
    fn test_result_json() {
        let result = BulkTransferResult {
            success_count: 2,
            fail_count: 1,
            failed_assets: vec!["z".to_string()],
        };

        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("\"success_count\":2"));
        assert!(json.contains("\"failed_assets\":[\"z\"]"));

        let parsed: BulkTransferResult = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, result);
    }

    #[test]
    fn test_partial_failure() {
        let all_ok = BulkTransferResult {
            success_count: 3,
            fail_count: 0,
            failed_assets: vec![],
        };
        assert!(!all_ok.is_partial_failure());
        assert_eq!(all_ok.total(), 3);

        let partial = BulkTransferResult {
            success_count: 1,
            fail_count: 2,
            failed_assets: vec!["a".to_string(), "b".to_string()],
        };
        assert!(partial.is_partial_failure());
        assert_eq!(partial.total(), 3);
    }
}

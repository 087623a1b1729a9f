//! Result aggregation
//!
//! Pure reduction of per-asset outcomes into the batch summary.

use crate::transfer::types::{BulkTransferResult, TransferOutcome};

/// Reduce completion-ordered outcomes into a `BulkTransferResult`.
///
/// Failed asset ids keep the order of the input slice, so feeding the
/// outcomes in the order units completed preserves completion order in
/// the summary. No side effects; calling twice over the same outcomes
/// yields an identical result.
pub fn summarize(outcomes: &[TransferOutcome]) -> BulkTransferResult {
    let mut success_count = 0;
    let mut fail_count = 0;
    let mut failed_assets = Vec::new();

    for outcome in outcomes {
        if outcome.success {
            success_count += 1;
        } else {
            fail_count += 1;
            failed_assets.push(outcome.asset_id.clone());
        }
    }

    BulkTransferResult {
        success_count,
        fail_count,
        failed_assets,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome(asset_id: &str, success: bool) -> TransferOutcome {
        TransferOutcome {
            asset_id: asset_id.to_string(),
            success,
        }
    }

    #[test]
    fn test_empty() {
        let result = summarize(&[]);
        assert_eq!(result.success_count, 0);
        assert_eq!(result.fail_count, 0);
        assert!(result.failed_assets.is_empty());
    }

    #[test]
    fn test_partition_and_counts() {
        let outcomes = vec![
            outcome("a", true),
            outcome("b", false),
            outcome("c", true),
            outcome("d", false),
        ];

        let result = summarize(&outcomes);
        assert_eq!(result.success_count, 2);
        assert_eq!(result.fail_count, 2);
        assert_eq!(result.failed_assets, vec!["b", "d"]);
        assert_eq!(result.total(), outcomes.len());
    }

    #[test]
    fn test_failed_order_follows_input_order() {
        // Completion order "z" before "b" must survive into the summary.
        let outcomes = vec![outcome("z", false), outcome("a", true), outcome("b", false)];

        let result = summarize(&outcomes);
        assert_eq!(result.failed_assets, vec!["z", "b"]);
    }

    #[test]
    fn test_idempotent() {
        let outcomes = vec![outcome("a", true), outcome("b", false)];

        let first = summarize(&outcomes);
        let second = summarize(&outcomes);
        assert_eq!(first, second);
    }

    #[test]
    fn test_duplicate_asset_ids_counted_independently() {
        let outcomes = vec![outcome("a", true), outcome("a", false)];

        let result = summarize(&outcomes);
        assert_eq!(result.success_count, 1);
        assert_eq!(result.fail_count, 1);
        assert_eq!(result.failed_assets, vec!["a"]);
    }
}

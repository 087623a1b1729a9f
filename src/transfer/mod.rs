//! Bulk asset transfer engine.
//!
//! Fans out one retrying transfer unit per asset id, bounded by a
//! configurable in-flight limit, and aggregates the outcomes into a
//! single batch result. Individual failures are absorbed into the
//! result; they never abort sibling transfers.

pub mod adapters;
pub mod aggregate;
pub mod dispatch;
pub mod engine;
pub mod retry;
pub mod types;

// Re-export commonly used types
pub use adapters::{AssetEndpoint, LedgerEndpoint, MockEndpoint};
pub use dispatch::DispatchStrategy;
pub use engine::{bulk_transfer, bulk_transfer_pooled, BulkTransferEngine, EngineConfig, ProgressFn};
pub use retry::RetryPolicy;
pub use types::{BulkTransferResult, CallResult, TransferOutcome};

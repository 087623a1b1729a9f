//! Asset endpoint trait
//!
//! Defines the interface the engine needs from the transport layer.

use async_trait::async_trait;

use crate::transfer::types::CallResult;

/// One remote transfer capability, bound to an asset process or to a
/// caller's account/profile.
///
/// `transfer` MUST be safe to call repeatedly: the engine retries
/// failed calls, and a call the caller saw fail may still have been
/// applied remotely. The remote side is not guaranteed idempotent, so
/// retries accept the risk of duplicate application.
#[async_trait]
pub trait AssetEndpoint: Send + Sync {
    /// Move `quantity` units of `asset_id` to `recipient`.
    ///
    /// Returns:
    /// - Success: the remote call completed
    /// - Failed: transport or remote error (candidate for retry)
    async fn transfer(&self, asset_id: &str, recipient: &str, quantity: &str) -> CallResult;

    /// Endpoint name for logging
    fn name(&self) -> &str;
}

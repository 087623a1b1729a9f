//! Dispatch strategy
//!
//! Decides which endpoint handle serves which asset: either every
//! asset shares one handle, or assets are bound round-robin across a
//! fixed pool of handles.

use std::sync::Arc;

use anyhow::Result;

use crate::transfer::adapters::AssetEndpoint;

/// How assets are bound to endpoint handles
#[derive(Clone)]
pub enum DispatchStrategy {
    /// One handle serves the whole asset list
    Shared(Arc<dyn AssetEndpoint>),
    /// Asset at input index `i` is bound to `pool[i % N]`
    Pooled(Vec<Arc<dyn AssetEndpoint>>),
}

impl DispatchStrategy {
    /// Fail fast on an unusable configuration, before any unit spawns.
    pub fn validate(&self) -> Result<()> {
        if let DispatchStrategy::Pooled(pool) = self {
            if pool.is_empty() {
                return Err(anyhow::anyhow!("Endpoint pool must not be empty"));
            }
        }
        Ok(())
    }

    /// Endpoint handle for the asset at `index`.
    ///
    /// `validate` must have passed for a pooled strategy.
    pub fn endpoint_for(&self, index: usize) -> Arc<dyn AssetEndpoint> {
        match self {
            DispatchStrategy::Shared(handle) => handle.clone(),
            DispatchStrategy::Pooled(pool) => pool[index % pool.len()].clone(),
        }
    }

    pub fn handle_count(&self) -> usize {
        match self {
            DispatchStrategy::Shared(_) => 1,
            DispatchStrategy::Pooled(pool) => pool.len(),
        }
    }
}

//! Bulk transfer orchestrator
//!
//! Validates the request, fans one retrying unit out per asset id,
//! joins all units, and reduces their outcomes into the batch summary.

use std::sync::{Arc, Mutex};
use std::time::Instant;

use anyhow::Result;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use uuid::Uuid;

use crate::transfer::adapters::AssetEndpoint;
use crate::transfer::aggregate::summarize;
use crate::transfer::dispatch::DispatchStrategy;
use crate::transfer::retry::{transfer_with_retry, RetryPolicy};
use crate::transfer::types::{BulkTransferResult, TransferOutcome};

/// Progress observer, called with the running success count after each
/// success. Called inside the completing unit's critical section, on
/// whatever task completed; it must not block.
pub type ProgressFn = Arc<dyn Fn(usize) + Send + Sync>;

/// Engine tuning knobs
#[derive(Debug, Clone)]
pub struct EngineConfig {
    pub retry: RetryPolicy,
    /// Maximum endpoint calls in flight at once
    pub max_in_flight: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            retry: RetryPolicy::default(),
            max_in_flight: 64,
        }
    }
}

/// Shared progress state; the mutex is the only critical section and
/// is never held across an await.
struct Progress {
    success_count: usize,
    on_progress: Option<ProgressFn>,
}

impl Progress {
    fn record_success(&mut self) {
        self.success_count += 1;
        if let Some(on_progress) = &self.on_progress {
            on_progress(self.success_count);
        }
    }
}

pub struct BulkTransferEngine {
    config: EngineConfig,
}

impl BulkTransferEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Transfer every asset to `recipient`, one retrying unit per id.
    ///
    /// Fails fast on an empty asset list, a blank recipient, a blank
    /// asset id, or an empty endpoint pool; no endpoint is called in
    /// those cases. Otherwise the call returns only after every unit
    /// has completed. One failing asset never aborts the others; the
    /// summary accounts for every requested id.
    pub async fn run(
        &self,
        dispatch: DispatchStrategy,
        asset_ids: &[String],
        recipient: &str,
        on_progress: Option<ProgressFn>,
    ) -> Result<BulkTransferResult> {
        let recipient = recipient.trim();
        if recipient.is_empty() {
            return Err(anyhow::anyhow!("Recipient must not be empty"));
        }
        if asset_ids.is_empty() {
            return Err(anyhow::anyhow!("Asset list must not be empty"));
        }
        let asset_ids: Vec<String> = asset_ids.iter().map(|id| id.trim().to_string()).collect();
        if let Some(position) = asset_ids.iter().position(|id| id.is_empty()) {
            return Err(anyhow::anyhow!("Asset id at index {} is blank", position));
        }
        dispatch.validate()?;

        let batch_id = Uuid::new_v4();
        let started = Instant::now();
        log::info!(
            "Bulk transfer {}: {} asset(s) -> {} via {} handle(s), max {} in flight",
            batch_id,
            asset_ids.len(),
            recipient,
            dispatch.handle_count(),
            self.config.max_in_flight
        );

        let semaphore = Arc::new(Semaphore::new(self.config.max_in_flight));
        let progress = Arc::new(Mutex::new(Progress {
            success_count: 0,
            on_progress,
        }));
        let recipient: Arc<str> = Arc::from(recipient);

        let mut units = JoinSet::new();
        for (index, asset_id) in asset_ids.iter().enumerate() {
            let endpoint: Arc<dyn AssetEndpoint> = dispatch.endpoint_for(index);
            let semaphore = semaphore.clone();
            let progress = progress.clone();
            let policy = self.config.retry.clone();
            let recipient = recipient.clone();
            let asset_id = asset_id.clone();

            units.spawn(async move {
                // The permit gates the endpoint work, not the spawn; all
                // units exist up front and take turns at the limit.
                let _permit = semaphore
                    .acquire_owned()
                    .await
                    .expect("transfer semaphore is never closed");

                let success =
                    transfer_with_retry(endpoint.as_ref(), &asset_id, &recipient, &policy).await;
                if success {
                    progress.lock().unwrap().record_success();
                }

                TransferOutcome { asset_id, success }
            });
        }

        // Join barrier: outcomes arrive in completion order, which is
        // the order the summary's failed list must preserve.
        let mut outcomes = Vec::with_capacity(asset_ids.len());
        while let Some(joined) = units.join_next().await {
            match joined {
                Ok(outcome) => outcomes.push(outcome),
                Err(e) => return Err(anyhow::anyhow!("Transfer unit panicked: {}", e)),
            }
        }

        let result = summarize(&outcomes);
        log::info!(
            "Bulk transfer {} done in {:?}: {} succeeded, {} failed",
            batch_id,
            started.elapsed(),
            result.success_count,
            result.fail_count
        );

        Ok(result)
    }
}

/// Transfer every asset through one shared endpoint handle.
pub async fn bulk_transfer(
    endpoint: Arc<dyn AssetEndpoint>,
    asset_ids: &[String],
    recipient: &str,
    on_progress: Option<ProgressFn>,
) -> Result<BulkTransferResult> {
    BulkTransferEngine::new(EngineConfig::default())
        .run(
            DispatchStrategy::Shared(endpoint),
            asset_ids,
            recipient,
            on_progress,
        )
        .await
}

/// Transfer assets round-robin across a pool of endpoint handles.
pub async fn bulk_transfer_pooled(
    endpoints: Vec<Arc<dyn AssetEndpoint>>,
    asset_ids: &[String],
    recipient: &str,
    on_progress: Option<ProgressFn>,
) -> Result<BulkTransferResult> {
    BulkTransferEngine::new(EngineConfig::default())
        .run(
            DispatchStrategy::Pooled(endpoints),
            asset_ids,
            recipient,
            on_progress,
        )
        .await
}

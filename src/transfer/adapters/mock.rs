//! Mock endpoint for testing
//!
//! Allows scripting a behavior plan per asset id and counting calls.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use super::traits::AssetEndpoint;
use crate::transfer::types::CallResult;

/// Behavior plan for one asset id
#[derive(Debug, Clone)]
pub enum Plan {
    /// Succeed on every call
    AlwaysSucceed,
    /// Fail on every call
    AlwaysFail,
    /// Fail the first `n` calls, then succeed
    FailTimes(u32),
}

/// Mock endpoint for testing
pub struct MockEndpoint {
    name: String,
    /// Map of asset_id -> scripted plan
    plans: Mutex<HashMap<String, Plan>>,
    /// Plan used when no specific plan is set
    default_plan: Mutex<Plan>,
    /// Calls observed so far, per asset_id
    calls: Mutex<HashMap<String, u32>>,
}

impl MockEndpoint {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            plans: Mutex::new(HashMap::new()),
            default_plan: Mutex::new(Plan::AlwaysSucceed),
            calls: Mutex::new(HashMap::new()),
        }
    }

    /// Script the plan for a specific asset id
    pub fn set_plan(&self, asset_id: &str, plan: Plan) {
        self.plans
            .lock()
            .unwrap()
            .insert(asset_id.to_string(), plan);
    }

    /// Script the plan used for assets without a specific plan
    pub fn set_default_plan(&self, plan: Plan) {
        *self.default_plan.lock().unwrap() = plan;
    }

    /// Number of transfer calls observed for one asset id
    pub fn calls_for(&self, asset_id: &str) -> u32 {
        self.calls
            .lock()
            .unwrap()
            .get(asset_id)
            .copied()
            .unwrap_or(0)
    }

    /// Total transfer calls observed across all assets
    pub fn total_calls(&self) -> u32 {
        self.calls.lock().unwrap().values().sum()
    }

    fn get_plan(&self, asset_id: &str) -> Plan {
        self.plans
            .lock()
            .unwrap()
            .get(asset_id)
            .cloned()
            .unwrap_or_else(|| self.default_plan.lock().unwrap().clone())
    }
}

#[async_trait]
impl AssetEndpoint for MockEndpoint {
    async fn transfer(&self, asset_id: &str, recipient: &str, quantity: &str) -> CallResult {
        log::debug!(
            "[{}] transfer({}, recipient={}, quantity={})",
            self.name,
            asset_id,
            recipient,
            quantity
        );

        // Attempt number is the call count before this call.
        let attempt = {
            let mut calls = self.calls.lock().unwrap();
            let counter = calls.entry(asset_id.to_string()).or_insert(0);
            let attempt = *counter;
            *counter += 1;
            attempt
        };

        match self.get_plan(asset_id) {
            Plan::AlwaysSucceed => CallResult::Success,
            Plan::AlwaysFail => {
                CallResult::Failed(format!("simulated failure for {}", asset_id))
            }
            Plan::FailTimes(n) if attempt < n => {
                CallResult::Failed(format!("simulated failure for {}", asset_id))
            }
            Plan::FailTimes(_) => CallResult::Success,
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_default_success() {
        let mock = MockEndpoint::new("test");

        let result = mock.transfer("asset-1", "recipient", "1").await;
        assert!(result.is_success());
        assert_eq!(mock.calls_for("asset-1"), 1);
    }

    #[tokio::test]
    async fn test_mock_always_fail() {
        let mock = MockEndpoint::new("test");
        mock.set_plan("asset-1", Plan::AlwaysFail);

        let result = mock.transfer("asset-1", "recipient", "1").await;
        assert!(matches!(result, CallResult::Failed(_)));

        // Other assets keep the default plan
        let result = mock.transfer("asset-2", "recipient", "1").await;
        assert!(result.is_success());
    }

    #[tokio::test]
    async fn test_mock_fail_times_then_succeed() {
        let mock = MockEndpoint::new("test");
        mock.set_plan("asset-1", Plan::FailTimes(2));

        assert!(!mock.transfer("asset-1", "r", "1").await.is_success());
        assert!(!mock.transfer("asset-1", "r", "1").await.is_success());
        assert!(mock.transfer("asset-1", "r", "1").await.is_success());
        assert_eq!(mock.calls_for("asset-1"), 3);
    }

    #[tokio::test]
    async fn test_mock_default_plan_override() {
        let mock = MockEndpoint::new("test");
        mock.set_default_plan(Plan::AlwaysFail);

        let result = mock.transfer("anything", "r", "1").await;
        assert!(matches!(result, CallResult::Failed(_)));
        assert_eq!(mock.total_calls(), 1);
    }
}

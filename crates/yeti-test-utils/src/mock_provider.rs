// SPDX-FileCopyrightText: 2026 YETI AI Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Scripted model provider for deterministic testing.
//!
//! `MockProvider` implements `ModelProvider` with per-category behavior:
//! answer with fixed text, fail with a given error kind, or never return
//! (to exercise timeouts). Every request is recorded.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::debug;

use yeti_core::{
    ModelCategory, ModelProvider, ProviderErrorKind, ProviderRequest, ProviderResponse, YetiError,
};

/// What the mock does when asked for a category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockBehavior {
    /// Return this text.
    Respond(String),
    /// Fail with this error kind.
    Fail(ProviderErrorKind),
    /// Never complete.
    Hang,
}

/// A provider whose answers are scripted per model category.
///
/// Categories without a script answer with `"mock response from <tag>"`.
pub struct MockProvider {
    behaviors: Arc<Mutex<HashMap<ModelCategory, MockBehavior>>>,
    requests: Arc<Mutex<Vec<ProviderRequest>>>,
}

impl MockProvider {
    /// Create a mock that answers every category.
    pub fn new() -> Self {
        Self {
            behaviors: Arc::new(Mutex::new(HashMap::new())),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Create a mock pre-loaded with behaviors.
    pub fn with_behaviors(behaviors: impl IntoIterator<Item = (ModelCategory, MockBehavior)>) -> Self {
        Self {
            behaviors: Arc::new(Mutex::new(behaviors.into_iter().collect())),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Script a category.
    pub async fn set_behavior(&self, category: ModelCategory, behavior: MockBehavior) {
        self.behaviors.lock().await.insert(category, behavior);
    }

    /// Requests received so far, in order.
    pub async fn requests(&self) -> Vec<ProviderRequest> {
        self.requests.lock().await.clone()
    }

    /// Categories requested so far, in order.
    pub async fn requested_categories(&self) -> Vec<ModelCategory> {
        self.requests
            .lock()
            .await
            .iter()
            .map(|r| r.category)
            .collect()
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ModelProvider for MockProvider {
    fn name(&self) -> &str {
        "mock-provider"
    }

    async fn complete(&self, request: ProviderRequest) -> Result<ProviderResponse, YetiError> {
        self.requests.lock().await.push(request.clone());
        let behavior = self.behaviors.lock().await.get(&request.category).cloned();
        debug!(category = %request.category, ?behavior, "mock provider call");

        match behavior {
            None => Ok(ProviderResponse {
                model: request.model,
                content: format!("mock response from {}", request.category),
            }),
            Some(MockBehavior::Respond(text)) => Ok(ProviderResponse {
                model: request.model,
                content: text,
            }),
            Some(MockBehavior::Fail(kind)) => Err(YetiError::provider(
                kind,
                format!("scripted failure for {}", request.category),
            )),
            Some(MockBehavior::Hang) => {
                std::future::pending::<()>().await;
                Err(YetiError::Internal("unreachable".to_string()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn req(category: ModelCategory) -> ProviderRequest {
        ProviderRequest {
            category,
            model: "test-model".to_string(),
            prompt: "hi".to_string(),
        }
    }

    #[tokio::test]
    async fn unscripted_categories_answer() {
        let provider = MockProvider::new();
        let resp = provider.complete(req(ModelCategory::Concept)).await.unwrap();
        assert_eq!(resp.content, "mock response from lcm");
        assert_eq!(resp.model, "test-model");
    }

    #[tokio::test]
    async fn scripted_failure_carries_kind() {
        let provider = MockProvider::with_behaviors([(
            ModelCategory::VisionLanguage,
            MockBehavior::Fail(ProviderErrorKind::WarmingUp),
        )]);
        let err = provider
            .complete(req(ModelCategory::VisionLanguage))
            .await
            .unwrap_err();
        assert_eq!(err.provider_kind(), ProviderErrorKind::WarmingUp);
    }

    #[tokio::test]
    async fn set_behavior_after_construction() {
        let provider = MockProvider::new();
        provider
            .set_behavior(
                ModelCategory::Action,
                MockBehavior::Respond("done".to_string()),
            )
            .await;
        let resp = provider.complete(req(ModelCategory::Action)).await.unwrap();
        assert_eq!(resp.content, "done");
    }

    #[tokio::test]
    async fn requests_are_recorded_in_order() {
        let provider = MockProvider::new();
        provider.complete(req(ModelCategory::Action)).await.unwrap();
        provider.complete(req(ModelCategory::Concept)).await.unwrap();
        assert_eq!(
            provider.requested_categories().await,
            vec![ModelCategory::Action, ModelCategory::Concept]
        );
        assert_eq!(provider.requests().await[0].prompt, "hi");
    }
}

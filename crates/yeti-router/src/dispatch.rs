// SPDX-FileCopyrightText: 2026 YETI AI Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Fallback-walking dispatch of a [`RoutingDecision`] to a provider.
//!
//! Tries the selected category, then each fallback, once each. Every
//! attempt is bounded by a timeout. When all candidates fail the caller
//! gets a synthetic explanation built from the last failure.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, warn};
use yeti_config::model::DispatchConfig;
use yeti_core::{
    ModelCategory, ModelProvider, ProviderErrorKind, ProviderRequest, ProviderResponse, YetiError,
};

use crate::knowledge::KnowledgeBase;
use crate::selector::RoutingDecision;

/// One provider call made while dispatching.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attempt {
    pub category: ModelCategory,
    pub model: String,
    /// `None` on success.
    pub failure: Option<ProviderErrorKind>,
}

/// How a dispatch ended.
#[derive(Debug, Clone, PartialEq)]
pub enum DispatchOutcome {
    /// A category answered.
    Answered {
        category: ModelCategory,
        response: ProviderResponse,
        attempts: Vec<Attempt>,
    },
    /// Every candidate failed; `message` is safe to show the end user.
    Exhausted {
        message: String,
        attempts: Vec<Attempt>,
    },
}

impl DispatchOutcome {
    /// Text to show the user: the model's answer or the explanation.
    pub fn text(&self) -> &str {
        match self {
            DispatchOutcome::Answered { response, .. } => &response.content,
            DispatchOutcome::Exhausted { message, .. } => message,
        }
    }

    /// Calls made, in order.
    pub fn attempts(&self) -> &[Attempt] {
        match self {
            DispatchOutcome::Answered { attempts, .. } | DispatchOutcome::Exhausted { attempts, .. } => {
                attempts
            }
        }
    }
}

/// Sends prompts to a provider following a routing decision.
pub struct Dispatcher {
    provider: Arc<dyn ModelProvider>,
    knowledge: Arc<KnowledgeBase>,
    timeout: Duration,
    min_confidence: f32,
}

impl Dispatcher {
    /// Create a dispatcher over a provider and the capability tables.
    pub fn new(
        provider: Arc<dyn ModelProvider>,
        knowledge: Arc<KnowledgeBase>,
        config: &DispatchConfig,
    ) -> Self {
        Self {
            provider,
            knowledge,
            timeout: Duration::from_secs(config.timeout_secs),
            min_confidence: config.min_confidence,
        }
    }

    /// Categories to try, in order.
    ///
    /// A primary below `min_confidence` is skipped when a fallback exists.
    pub fn plan(&self, decision: &RoutingDecision) -> Vec<ModelCategory> {
        let skip_primary =
            decision.confidence < self.min_confidence && !decision.fallbacks.is_empty();
        if skip_primary {
            debug!(
                selected = %decision.selected,
                confidence = decision.confidence,
                min_confidence = self.min_confidence,
                "primary below confidence threshold, starting with fallback"
            );
            decision.fallbacks.clone()
        } else {
            decision.candidates().collect()
        }
    }

    /// Dispatch `prompt` following `decision`.
    pub async fn dispatch(&self, decision: &RoutingDecision, prompt: &str) -> DispatchOutcome {
        let mut attempts = Vec::new();
        let mut last_failure = None;

        for category in self.plan(decision) {
            let Some(model) = self.knowledge.preferred_model(category) else {
                warn!(category = %category, "no provider model configured, skipping");
                continue;
            };

            let request = ProviderRequest {
                category,
                model: model.to_string(),
                prompt: prompt.to_string(),
            };

            match self.call(request).await {
                Ok(response) => {
                    attempts.push(Attempt {
                        category,
                        model: model.to_string(),
                        failure: None,
                    });
                    return DispatchOutcome::Answered {
                        category,
                        response,
                        attempts,
                    };
                }
                Err(e) => {
                    let kind = e.provider_kind();
                    warn!(
                        provider = self.provider.name(),
                        category = %category,
                        model,
                        error = %e,
                        "provider call failed, trying next category"
                    );
                    attempts.push(Attempt {
                        category,
                        model: model.to_string(),
                        failure: Some(kind),
                    });
                    last_failure = Some(kind);
                }
            }
        }

        DispatchOutcome::Exhausted {
            message: exhausted_message(last_failure),
            attempts,
        }
    }

    async fn call(&self, request: ProviderRequest) -> Result<ProviderResponse, YetiError> {
        match tokio::time::timeout(self.timeout, self.provider.complete(request)).await {
            Ok(result) => result,
            Err(_) => Err(YetiError::Timeout {
                duration: self.timeout,
            }),
        }
    }
}

/// Synthetic end-user message when no category could answer.
pub fn exhausted_message(last_failure: Option<ProviderErrorKind>) -> String {
    match last_failure {
        Some(kind) => format!(
            "Sorry, I couldn't get an answer from any model: {}. Please try again in a moment.",
            kind.explanation()
        ),
        None => "Sorry, no model is configured to answer this request.".to_string(),
    }
}

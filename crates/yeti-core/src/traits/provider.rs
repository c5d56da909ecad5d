// SPDX-FileCopyrightText: 2026 YETI AI Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Provider trait for hosted model integrations (LLM, VLM, SAM, etc.).

use async_trait::async_trait;

use crate::error::YetiError;
use crate::types::{ProviderRequest, ProviderResponse};

/// Adapter for a hosted inference provider.
///
/// One provider may serve several model categories. The dispatcher hands it
/// a request naming both the category and the concrete model identifier it
/// picked from the capability table; the provider owns the wire protocol,
/// authentication, and its own error mapping into [`YetiError::Provider`].
#[async_trait]
pub trait ModelProvider: Send + Sync + 'static {
    /// Returns the human-readable name of this provider.
    fn name(&self) -> &str;

    /// Sends a single completion request and returns the full response.
    async fn complete(&self, request: ProviderRequest) -> Result<ProviderResponse, YetiError>;
}

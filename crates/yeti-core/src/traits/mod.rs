// SPDX-FileCopyrightText: 2026 YETI AI Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Trait seams between the router and the outside world.
//!
//! Provider integrations implement [`ModelProvider`] using `#[async_trait]`
//! so they can be held as trait objects by the dispatcher.

pub mod provider;

pub use provider::ModelProvider;

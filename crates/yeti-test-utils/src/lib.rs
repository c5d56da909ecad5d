// SPDX-FileCopyrightText: 2026 YETI AI Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test utilities for YETI integration tests.
//!
//! - [`MockProvider`] - scripted model provider for dispatcher tests, no network

pub mod mock_provider;

pub use mock_provider::{MockBehavior, MockProvider};

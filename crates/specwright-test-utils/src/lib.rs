// SPDX-FileCopyrightText: 2026 Specwright Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mock adapters for deterministic Specwright tests.
//!
//! `MockProvider` implements `ProviderAdapter` with pre-configured replies
//! and records every prompt it receives, enabling fast, CI-runnable tests
//! without external API calls.

pub mod mock_provider;

pub use mock_provider::MockProvider;

// SPDX-FileCopyrightText: 2026 Specwright Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the Specwright conversion service.
//!
//! This crate provides the foundational trait definitions, error types, and
//! common types used throughout the Specwright workspace. Provider and
//! storage adapters implement traits defined here.

pub mod error;
pub mod traits;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::SpecwrightError;
pub use types::{
    AdapterType, ConversionMode, ConversionOutcome, ConversionRequest, HealthStatus,
    HistoryRecord, ImageAttachment, PageObjectFile, PromptRequest, ProviderReply, TemplateKind,
};

// Re-export adapter traits at crate root.
pub use traits::{PluginAdapter, ProviderAdapter, StorageAdapter};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn specwright_error_has_all_variants() {
        let _config = SpecwrightError::Config("test".into());
        let _storage = SpecwrightError::Storage {
            source: Box::new(std::io::Error::other("test")),
        };
        let _provider = SpecwrightError::Provider {
            message: "test".into(),
            source: None,
        };
        let _malformed = SpecwrightError::MalformedResponse {
            backend: "gemini".into(),
            detail: "no candidates".into(),
        };
        let _channel = SpecwrightError::Channel {
            message: "test".into(),
            source: None,
        };
        let _internal = SpecwrightError::Internal("test".into());
    }

    #[test]
    fn adapter_type_round_trips() {
        use std::str::FromStr;

        for variant in [AdapterType::Provider, AdapterType::Storage, AdapterType::Channel] {
            let s = variant.to_string();
            let parsed = AdapterType::from_str(&s).expect("should parse back");
            assert_eq!(variant, parsed);
        }
    }

    #[test]
    fn health_status_variants() {
        let healthy = HealthStatus::Healthy;
        let degraded = HealthStatus::Degraded("slow".into());
        let unhealthy = HealthStatus::Unhealthy("down".into());

        assert_eq!(healthy, HealthStatus::Healthy);
        assert_ne!(degraded, healthy);
        assert_ne!(unhealthy, healthy);
    }

    #[test]
    fn all_trait_modules_are_exported() {
        // If any trait module is missing or has a compile error, this
        // test won't compile.
        fn _assert_plugin_adapter<T: PluginAdapter>() {}
        fn _assert_provider_adapter<T: ProviderAdapter>() {}
        fn _assert_storage_adapter<T: StorageAdapter>() {}
    }
}

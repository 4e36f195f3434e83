// SPDX-FileCopyrightText: 2026 Specwright Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Bearer-token identity resolution for the gateway.
//!
//! Conversion is fail-open: an unresolved identity still converts, it just
//! skips history. History routes are fail-closed: no identity means 401
//! with no body.

use std::collections::HashMap;

use axum::http::HeaderMap;

/// Static token-to-user mapping for the gateway.
///
/// Mirrors `AuthConfig` from `specwright-config` to avoid a dependency on
/// the config crate from the gateway crate.
#[derive(Clone, Default)]
pub struct AuthTokens {
    tokens: HashMap<String, String>,
}

impl AuthTokens {
    /// Builds the mapping from `(token, user_id)` pairs.
    pub fn from_entries(entries: impl IntoIterator<Item = (String, String)>) -> Self {
        Self {
            tokens: entries.into_iter().collect(),
        }
    }

    /// Resolves the request's bearer token to a user identity, if any.
    pub fn resolve_user(&self, headers: &HeaderMap) -> Option<String> {
        let token = headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.strip_prefix("Bearer "))?;
        self.tokens.get(token).cloned()
    }
}

impl std::fmt::Debug for AuthTokens {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthTokens")
            .field("tokens", &format!("[{} redacted]", self.tokens.len()))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn tokens() -> AuthTokens {
        AuthTokens::from_entries([("tok-alice".to_string(), "alice".to_string())])
    }

    fn headers_with_auth(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert("authorization", HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn known_token_resolves_to_user() {
        let user = tokens().resolve_user(&headers_with_auth("Bearer tok-alice"));
        assert_eq!(user.as_deref(), Some("alice"));
    }

    #[test]
    fn unknown_token_resolves_to_none() {
        assert!(tokens().resolve_user(&headers_with_auth("Bearer nope")).is_none());
    }

    #[test]
    fn missing_header_resolves_to_none() {
        assert!(tokens().resolve_user(&HeaderMap::new()).is_none());
    }

    #[test]
    fn non_bearer_scheme_resolves_to_none() {
        assert!(tokens().resolve_user(&headers_with_auth("Basic tok-alice")).is_none());
    }

    #[test]
    fn debug_output_redacts_tokens() {
        let debug = format!("{:?}", tokens());
        assert!(!debug.contains("tok-alice"));
        assert!(debug.contains("redacted"));
    }
}

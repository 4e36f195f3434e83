// SPDX-FileCopyrightText: 2026 Specwright Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP gateway exposing the Specwright conversion API.
//!
//! Routes:
//! - `POST /api/convert` -- run one conversion (identity optional)
//! - `GET /api/history` -- the caller's records, newest first (401 without identity)
//! - `DELETE /api/history?id=<id>` -- one owned record, or all of them (401 without identity)
//! - `POST /api/archive` -- split generated text and download it as a zip
//! - `GET /health` -- unauthenticated liveness
//!
//! The gateway resolves bearer tokens to user identities via a static
//! token table; the surrounding session framework is an external
//! collaborator and out of scope here.

pub mod auth;
pub mod handlers;
pub mod server;

pub use auth::AuthTokens;
pub use server::{GatewayState, HealthState, ServerConfig, build_router, start_server};

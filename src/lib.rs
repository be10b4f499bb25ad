// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Casting Agency - Permission-Gated Movie & Actor API
//!
//! Movies and actors can be listed by anyone; every mutation requires a
//! bearer token issued by the configured identity provider that carries the
//! route's permission (e.g. `post:movies`).
//!
//! ## Modules
//!
//! - `api` - HTTP API handlers (Axum)
//! - `auth` - Bearer token verification and permission checks
//! - `config` - Environment configuration
//! - `store` - In-memory record storage

pub mod api;
pub mod auth;
pub mod config;
pub mod error;
pub mod models;
pub mod state;
pub mod store;

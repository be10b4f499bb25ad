// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Authorization Module
//!
//! Bearer-token authorization against an OpenID Connect identity provider.
//!
//! ## Auth Flow
//!
//! 1. Client obtains an access token from the identity provider
//! 2. Client sends `Authorization: Bearer <token>`
//! 3. Server:
//!    - Extracts the token from the header ([`header`])
//!    - Fetches the provider's JWKS ([`jwks`])
//!    - Verifies the RS256 signature, `aud`, `iss` and `exp` ([`verifier`])
//!    - Checks the route's capability against the `permissions` claim
//!      ([`permissions`])
//!
//! [`AuthorizationGuard`] runs these in order and stops at the first failure.
//! Handlers use it through the [`Authorized`] extractor.
//!
//! ## Security
//!
//! - Only asymmetric RSA algorithms are accepted
//! - The key is selected strictly by `kid`; no other key is tried
//! - No clock skew tolerance unless configured
//! - JWKS caching is off unless a TTL is configured

pub mod claims;
pub mod error;
pub mod extractor;
pub mod guard;
pub mod header;
pub mod jwks;
pub mod permissions;
pub mod verifier;

pub use claims::{Audience, VerifiedClaims};
pub use error::AuthError;
pub use extractor::Authorized;
pub use guard::AuthorizationGuard;
pub use jwks::JwksClient;
pub use permissions::Permission;
pub use verifier::TokenVerifier;

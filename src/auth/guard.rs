// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! The authorization guard: header → key set → verification → permission.

use std::future::Future;

use super::header::bearer_token;
use super::jwks::JwksClient;
use super::permissions::check_permission;
use super::{AuthError, TokenVerifier, VerifiedClaims};
use crate::config::AuthSettings;

/// Composes token extraction, key lookup, verification and the permission
/// check into one call.
///
/// Every stage returns a `Result`; the first failure is returned as-is and
/// nothing after it runs.
///
/// # Example
///
/// ```rust,ignore
/// let created = guard
///     .protect(headers_value, "post:movies", |claims| async move {
///         create_movie(claims.subject(), request).await
///     })
///     .await?;
/// ```
#[derive(Clone)]
pub struct AuthorizationGuard {
    jwks: JwksClient,
    verifier: TokenVerifier,
}

impl AuthorizationGuard {
    pub fn new(jwks: JwksClient, verifier: TokenVerifier) -> Self {
        Self { jwks, verifier }
    }

    /// Build the guard from startup configuration.
    pub fn from_settings(settings: &AuthSettings) -> Result<Self, reqwest::Error> {
        let jwks = JwksClient::new(settings.jwks_url.clone(), settings.jwks_timeout)?
            .with_cache_ttl(settings.jwks_cache_ttl);
        let verifier = TokenVerifier::new(&settings.audience, settings.issuer())
            .with_algorithms(settings.algorithms.clone())
            .with_leeway(settings.leeway);
        Ok(Self::new(jwks, verifier))
    }

    pub fn jwks(&self) -> &JwksClient {
        &self.jwks
    }

    pub fn verifier(&self) -> &TokenVerifier {
        &self.verifier
    }

    /// Authorize a request carrying `authorization` for `required`.
    ///
    /// `authorization` is the raw `Authorization` header value.
    pub async fn authorize(
        &self,
        authorization: Option<&str>,
        required: &str,
    ) -> Result<VerifiedClaims, AuthError> {
        self.run_checks(authorization, required)
            .await
            .inspect(|claims| {
                tracing::debug!(
                    subject = claims.subject().unwrap_or("-"),
                    permission = required,
                    "request authorized"
                );
            })
            .inspect_err(|e| {
                tracing::debug!(
                    code = e.code(),
                    status = e.status_code().as_u16(),
                    permission = required,
                    reason = %e,
                    "request rejected"
                );
            })
    }

    /// Run `operation` with the verified claims, but only if authorization
    /// succeeds. On failure `operation` is never invoked.
    pub async fn protect<F, Fut, T>(
        &self,
        authorization: Option<&str>,
        required: &str,
        operation: F,
    ) -> Result<T, AuthError>
    where
        F: FnOnce(VerifiedClaims) -> Fut,
        Fut: Future<Output = T>,
    {
        let claims = self.authorize(authorization, required).await?;
        Ok(operation(claims).await)
    }

    async fn run_checks(
        &self,
        authorization: Option<&str>,
        required: &str,
    ) -> Result<VerifiedClaims, AuthError> {
        let token = bearer_token(authorization)?;
        let kid = TokenVerifier::key_id(token)?;
        let keys = self.jwks.key_set_for(&kid).await?;
        let claims = self.verifier.verify(token, &keys)?;
        check_permission(required, &claims)?;
        Ok(claims)
    }
}

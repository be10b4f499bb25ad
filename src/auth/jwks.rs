// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! JWKS (JSON Web Key Set) fetching with an optional cache.
//!
//! ## Behavior
//!
//! - Without a cache TTL every lookup performs a live GET of the key set
//! - With a TTL, a lookup is served from cache only when the cached set is
//!   fresh *and* contains the requested `kid`; anything else falls back to a
//!   live fetch before failing
//! - The cached set is replaced as a whole; the HTTP call never holds the lock
//! - The GET is bounded by the client timeout; timeouts count as fetch failures

use std::sync::Arc;
use std::time::{Duration, Instant};

use jsonwebtoken::jwk::JwkSet;
use tokio::sync::RwLock;
use url::Url;

use super::error::AuthError;

/// Default timeout for the key set GET.
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// JWKS cache entry.
struct CacheEntry {
    jwks: Arc<JwkSet>,
    fetched_at: Instant,
}

/// Client for the identity provider's published signing keys.
#[derive(Clone)]
pub struct JwksClient {
    /// JWKS URL (`https://<domain>/.well-known/jwks.json`)
    jwks_url: Url,
    /// Cache TTL; `None` disables caching
    cache_ttl: Option<Duration>,
    /// Cached JWKS
    cache: Arc<RwLock<Option<CacheEntry>>>,
    /// HTTP client
    client: reqwest::Client,
}

impl JwksClient {
    /// Create a client that fetches on every lookup.
    pub fn new(jwks_url: Url, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            jwks_url,
            cache_ttl: None,
            cache: Arc::new(RwLock::new(None)),
            client,
        })
    }

    /// Enable the key set cache. A zero TTL leaves caching disabled.
    pub fn with_cache_ttl(mut self, ttl: Duration) -> Self {
        self.cache_ttl = (!ttl.is_zero()).then_some(ttl);
        self
    }

    pub fn jwks_url(&self) -> &Url {
        &self.jwks_url
    }

    pub fn cache_ttl(&self) -> Option<Duration> {
        self.cache_ttl
    }

    /// Get a key set that contains `kid`, from cache when possible.
    ///
    /// The returned set is not guaranteed to contain `kid`: on a cache miss
    /// it is whatever the provider currently publishes.
    pub async fn key_set_for(&self, kid: &str) -> Result<Arc<JwkSet>, AuthError> {
        if let Some(ttl) = self.cache_ttl {
            let cache = self.cache.read().await;
            if let Some(entry) = &*cache {
                if entry.fetched_at.elapsed() < ttl && entry.jwks.find(kid).is_some() {
                    tracing::trace!(kid, "JWKS cache hit");
                    return Ok(Arc::clone(&entry.jwks));
                }
            }
        }

        self.fetch().await
    }

    /// Fetch the key set from the endpoint, refreshing the cache if enabled.
    pub async fn fetch(&self) -> Result<Arc<JwkSet>, AuthError> {
        let jwks = Arc::new(self.fetch_jwks().await.inspect_err(|e| {
            if let AuthError::KeySetUnavailable { reason } = e {
                tracing::warn!(url = %self.jwks_url, reason = %reason, "JWKS fetch failed");
            }
        })?);
        tracing::debug!(url = %self.jwks_url, keys = jwks.keys.len(), "fetched JWKS");

        if self.cache_ttl.is_some() {
            let mut cache = self.cache.write().await;
            *cache = Some(CacheEntry {
                jwks: Arc::clone(&jwks),
                fetched_at: Instant::now(),
            });
        }

        Ok(jwks)
    }

    /// Check if a fresh key set is currently cached.
    pub async fn is_cached(&self) -> bool {
        let Some(ttl) = self.cache_ttl else {
            return false;
        };
        let cache = self.cache.read().await;
        cache
            .as_ref()
            .is_some_and(|entry| entry.fetched_at.elapsed() < ttl)
    }

    async fn fetch_jwks(&self) -> Result<JwkSet, AuthError> {
        let unavailable = |reason: String| AuthError::KeySetUnavailable { reason };

        let response = self
            .client
            .get(self.jwks_url.clone())
            .send()
            .await
            .map_err(|e| unavailable(e.to_string()))?;

        if !response.status().is_success() {
            return Err(unavailable(format!(
                "HTTP {} from JWKS endpoint",
                response.status()
            )));
        }

        response
            .json::<JwkSet>()
            .await
            .map_err(|e| unavailable(e.to_string()))
    }
}

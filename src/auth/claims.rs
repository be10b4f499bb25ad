// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Verified token claims.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// `aud` may be a single string or an array of strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Audience {
    One(String),
    Many(Vec<String>),
}

impl Audience {
    pub fn contains(&self, audience: &str) -> bool {
        match self {
            Audience::One(aud) => aud == audience,
            Audience::Many(auds) => auds.iter().any(|aud| aud == audience),
        }
    }
}

/// Wire shape of a token payload, only ever decoded by the verifier after the
/// signature and standard claims have been checked.
#[derive(Debug, Deserialize)]
pub(crate) struct RawClaims {
    iss: String,
    aud: Audience,
    exp: i64,
    #[serde(default)]
    sub: Option<String>,
    #[serde(default)]
    permissions: Option<Vec<String>>,
    #[serde(flatten)]
    extra: Map<String, Value>,
}

/// Claims of a token whose signature, issuer, audience and expiry have all
/// been validated.
///
/// There is no public constructor: the only way to obtain a value is through
/// [`TokenVerifier::verify`](super::TokenVerifier::verify).
#[derive(Debug, Clone, Serialize)]
pub struct VerifiedClaims {
    #[serde(rename = "iss")]
    issuer: String,
    #[serde(rename = "aud")]
    audience: Audience,
    #[serde(rename = "exp")]
    expires_at: i64,
    #[serde(rename = "sub", skip_serializing_if = "Option::is_none")]
    subject: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    permissions: Option<Vec<String>>,
    #[serde(flatten)]
    extra: Map<String, Value>,
}

impl VerifiedClaims {
    pub(crate) fn from_raw(raw: RawClaims) -> Self {
        Self {
            issuer: raw.iss,
            audience: raw.aud,
            expires_at: raw.exp,
            subject: raw.sub,
            permissions: raw.permissions,
            extra: raw.extra,
        }
    }

    pub fn issuer(&self) -> &str {
        &self.issuer
    }

    pub fn audience(&self) -> &Audience {
        &self.audience
    }

    /// Expiry as a Unix timestamp.
    pub fn expires_at(&self) -> i64 {
        self.expires_at
    }

    /// The caller's identity (`sub`), if the issuer set one.
    pub fn subject(&self) -> Option<&str> {
        self.subject.as_deref()
    }

    /// The `permissions` claim exactly as issued, or `None` when absent.
    pub fn permissions(&self) -> Option<&[String]> {
        self.permissions.as_deref()
    }

    /// Any other claim by name.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.extra.get(name)
    }
}

#[cfg(test)]
pub(crate) fn claims_from_json(value: Value) -> VerifiedClaims {
    VerifiedClaims::from_raw(serde_json::from_value(value).expect("valid raw claims"))
}

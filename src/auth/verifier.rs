// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Signature and standard-claim verification for bearer tokens.
//!
//! Verification is a single attempt: the key is chosen by the token's `kid`
//! and nothing else is tried if that key does not verify the signature.

use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::jwk::{AlgorithmParameters, Jwk, JwkSet};
use jsonwebtoken::{decode, decode_header, Algorithm, DecodingKey, Validation};

use super::claims::{RawClaims, VerifiedClaims};
use super::AuthError;

/// Claims a token must carry for validation to even be attempted.
const REQUIRED_CLAIMS: [&str; 3] = ["exp", "aud", "iss"];

/// Verifies tokens issued by one identity provider for one API audience.
#[derive(Debug, Clone)]
pub struct TokenVerifier {
    /// Expected `aud`
    audience: String,
    /// Expected `iss` (`https://<domain>/`)
    issuer: String,
    /// Accepted signing algorithms
    algorithms: Vec<Algorithm>,
    /// Clock skew tolerance in seconds
    leeway: u64,
}

impl TokenVerifier {
    /// Create a verifier accepting RS256 with no clock skew tolerance.
    pub fn new(audience: impl Into<String>, issuer: impl Into<String>) -> Self {
        Self {
            audience: audience.into(),
            issuer: issuer.into(),
            algorithms: vec![Algorithm::RS256],
            leeway: 0,
        }
    }

    /// Replace the accepted algorithm list. An empty list is ignored.
    pub fn with_algorithms(mut self, algorithms: Vec<Algorithm>) -> Self {
        if !algorithms.is_empty() {
            self.algorithms = algorithms;
        }
        self
    }

    pub fn with_leeway(mut self, leeway: u64) -> Self {
        self.leeway = leeway;
        self
    }

    pub fn audience(&self) -> &str {
        &self.audience
    }

    pub fn issuer(&self) -> &str {
        &self.issuer
    }

    /// Read the `kid` from the token's unverified header.
    pub fn key_id(token: &str) -> Result<String, AuthError> {
        decode_header(token)
            .map_err(|_| AuthError::MalformedToken)?
            .kid
            .ok_or(AuthError::MalformedToken)
    }

    /// Verify `token` against the matching key in `keys`.
    ///
    /// # Errors
    /// - `MalformedToken` when the header is unreadable or has no `kid`
    /// - `NoMatchingKey` when no key in the set carries that `kid`
    /// - `TokenExpired` when the signature is valid but `exp` has passed
    /// - `InvalidClaims` on audience/issuer mismatch or a missing standard claim
    /// - `UnparsableToken` for everything else (bad signature, disallowed
    ///   algorithm, non-RSA key, corrupt payload)
    pub fn verify(&self, token: &str, keys: &JwkSet) -> Result<VerifiedClaims, AuthError> {
        let kid = Self::key_id(token)?;
        let jwk = keys.find(&kid).ok_or(AuthError::NoMatchingKey)?;
        let decoding_key = rsa_decoding_key(jwk)?;

        let token_data = decode::<RawClaims>(token, &decoding_key, &self.validation())
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => AuthError::TokenExpired,
                ErrorKind::InvalidAudience
                | ErrorKind::InvalidIssuer
                | ErrorKind::ImmatureSignature
                | ErrorKind::MissingRequiredClaim(_) => AuthError::InvalidClaims,
                _ => AuthError::UnparsableToken,
            })?;

        Ok(VerifiedClaims::from_raw(token_data.claims))
    }

    fn validation(&self) -> Validation {
        let mut validation = Validation::new(Algorithm::RS256);
        validation.algorithms = self.algorithms.clone();
        validation.set_audience(&[&self.audience]);
        validation.set_issuer(&[&self.issuer]);
        validation.set_required_spec_claims(&REQUIRED_CLAIMS);
        validation.leeway = self.leeway;
        validation
    }
}

/// Build an RSA decoding key from a JWK's modulus and exponent.
fn rsa_decoding_key(jwk: &Jwk) -> Result<DecodingKey, AuthError> {
    match &jwk.algorithm {
        AlgorithmParameters::RSA(rsa) => {
            DecodingKey::from_rsa_components(&rsa.n, &rsa.e).map_err(|_| AuthError::UnparsableToken)
        }
        _ => Err(AuthError::UnparsableToken),
    }
}

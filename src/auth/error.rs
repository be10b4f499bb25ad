// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Authorization errors.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::error::ErrorBody;

/// Authorization failure produced by any stage of the guard.
///
/// The `Display` text is the human-readable description that ends up in the
/// `message` field of the JSON body. Each variant also maps to a stable
/// machine-readable code and an HTTP status.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// No `Authorization` header (or an empty one)
    #[error("Authorization header not found")]
    MissingHeader,
    /// Header is present but holds nothing but whitespace, or is not valid UTF-8
    #[error("Malformed token header")]
    MalformedHeader,
    /// Scheme is something other than `Bearer`
    #[error("Authorization header must start with Bearer")]
    NotBearer,
    /// `Bearer` with no token after it
    #[error("Token not found in authorization header")]
    MissingToken,
    /// More than one credential after the scheme
    #[error("Authorization header must be a single Bearer token")]
    NotSingleToken,
    /// Token header cannot be read or carries no `kid`
    #[error("Authorization malformed")]
    MalformedToken,
    /// Key set does not contain the token's `kid`
    #[error("Unable to find the appropriate key")]
    NoMatchingKey,
    /// Key set could not be fetched or parsed
    #[error("Unable to find the appropriate key")]
    KeySetUnavailable { reason: String },
    /// Bad signature, disallowed algorithm, corrupt payload
    #[error("Unable to parse authentication token")]
    UnparsableToken,
    /// Signature checks out but `exp` has passed
    #[error("Token expired")]
    TokenExpired,
    /// Audience or issuer mismatch
    #[error("Incorrect claims. Please check the audience and issuer")]
    InvalidClaims,
    /// Verified token has no `permissions` claim
    #[error("Permissions missing from token")]
    PermissionsMissing,
    /// Required permission is not granted
    #[error("Permission not found")]
    PermissionDenied,
}

impl AuthError {
    /// Machine-readable error code.
    pub fn code(&self) -> &'static str {
        match self {
            AuthError::MissingHeader
            | AuthError::MalformedHeader
            | AuthError::NotBearer
            | AuthError::MissingToken
            | AuthError::NotSingleToken
            | AuthError::PermissionsMissing => "invalid_claim",
            AuthError::MalformedToken
            | AuthError::NoMatchingKey
            | AuthError::KeySetUnavailable { .. }
            | AuthError::UnparsableToken => "invalid_header",
            AuthError::TokenExpired => "token_expired",
            AuthError::InvalidClaims => "invalid_claims",
            AuthError::PermissionDenied => "unauthorized",
        }
    }

    /// Human-readable description.
    pub fn description(&self) -> String {
        self.to_string()
    }

    /// HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AuthError::MissingHeader
            | AuthError::MalformedHeader
            | AuthError::NotBearer
            | AuthError::MissingToken
            | AuthError::NotSingleToken
            | AuthError::MalformedToken
            | AuthError::TokenExpired
            | AuthError::InvalidClaims => StatusCode::UNAUTHORIZED,
            AuthError::NoMatchingKey
            | AuthError::KeySetUnavailable { .. }
            | AuthError::UnparsableToken
            | AuthError::PermissionsMissing => StatusCode::BAD_REQUEST,
            AuthError::PermissionDenied => StatusCode::FORBIDDEN,
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(ErrorBody::new(status, self.description()).with_code(self.code()));
        (status, body).into_response()
    }
}

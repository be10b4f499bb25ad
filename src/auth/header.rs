// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Bearer token extraction from the `Authorization` header.

use axum::http::{header::AUTHORIZATION, HeaderMap};

use super::AuthError;

/// Read the raw `Authorization` header value, if any.
///
/// A value that is not valid UTF-8 is reported as a malformed header rather
/// than as a missing one.
pub fn authorization_header(headers: &HeaderMap) -> Result<Option<&str>, AuthError> {
    headers
        .get(AUTHORIZATION)
        .map(|value| value.to_str().map_err(|_| AuthError::MalformedHeader))
        .transpose()
}

/// Pull the bearer token out of an `Authorization` header value.
///
/// The header is split on whitespace and must be exactly `Bearer <token>`,
/// with the scheme matched case-insensitively. The token is returned as-is.
pub fn bearer_token(header: Option<&str>) -> Result<&str, AuthError> {
    let header = match header {
        Some(value) if !value.is_empty() => value,
        _ => return Err(AuthError::MissingHeader),
    };

    let parts: Vec<&str> = header.split_whitespace().collect();
    let Some(scheme) = parts.first() else {
        return Err(AuthError::MalformedHeader);
    };

    if !scheme.eq_ignore_ascii_case("bearer") {
        return Err(AuthError::NotBearer);
    }

    match parts.as_slice() {
        [_] => Err(AuthError::MissingToken),
        [_, token] => Ok(*token),
        _ => Err(AuthError::NotSingleToken),
    }
}

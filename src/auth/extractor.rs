// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Axum extractor for permission-gated handlers.
//!
//! Put `Authorized<P>` before any body extractor so the request is rejected
//! before the body is read:
//!
//! ```rust,ignore
//! async fn create_movie(
//!     Authorized(claims, _): Authorized<PostMovies>,
//!     State(state): State<AppState>,
//!     Json(request): Json<CreateMovieRequest>,
//! ) -> Result<Json<MovieResponse>, ApiError> {
//!     // claims are verified and carry `post:movies`
//! }
//! ```

use std::marker::PhantomData;

use axum::{extract::FromRequestParts, http::request::Parts};

use super::header::authorization_header;
use super::permissions::Permission;
use super::{AuthError, VerifiedClaims};
use crate::state::AppState;

/// Verified claims of a caller holding permission `P`.
pub struct Authorized<P: Permission>(pub VerifiedClaims, pub PhantomData<P>);

impl<P: Permission> Authorized<P> {
    pub fn claims(&self) -> &VerifiedClaims {
        &self.0
    }
}

impl<P: Permission> FromRequestParts<AppState> for Authorized<P> {
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let header = authorization_header(&parts.headers)?;
        let claims = state.guard.authorize(header, P::NAME).await?;
        Ok(Authorized(claims, PhantomData))
    }
}

// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Permission (capability string) checks.
//!
//! ## Permissions
//!
//! | Marker | Capability |
//! |--------|------------|
//! | [`PostMovies`] | `post:movies` |
//! | [`PatchMovies`] | `patch:movies` |
//! | [`DeleteMovies`] | `delete:movies` |
//! | [`PostActors`] | `post:actors` |
//! | [`PatchActors`] | `patch:actors` |
//! | [`DeleteActors`] | `delete:actors` |

use super::{AuthError, VerifiedClaims};

/// A capability a route requires, named at the type level so it can
/// parameterise the [`Authorized`](super::Authorized) extractor.
pub trait Permission: Send + Sync + 'static {
    /// The capability string expected in the `permissions` claim.
    const NAME: &'static str;
}

macro_rules! permissions {
    ($($ty:ident => $name:literal),* $(,)?) => {
        $(
            #[doc = concat!("`", $name, "`")]
            #[derive(Debug, Clone, Copy)]
            pub struct $ty;

            impl Permission for $ty {
                const NAME: &'static str = $name;
            }
        )*
    };
}

permissions! {
    PostMovies => "post:movies",
    PatchMovies => "patch:movies",
    DeleteMovies => "delete:movies",
    PostActors => "post:actors",
    PatchActors => "patch:actors",
    DeleteActors => "delete:actors",
}

/// Check that `claims` grant `required`.
///
/// An empty `required` string means no permission is needed and always passes.
pub fn check_permission(required: &str, claims: &VerifiedClaims) -> Result<(), AuthError> {
    if required.is_empty() {
        return Ok(());
    }

    let granted = claims.permissions().ok_or(AuthError::PermissionsMissing)?;
    if granted.iter().any(|p| p == required) {
        Ok(())
    } else {
        Err(AuthError::PermissionDenied)
    }
}

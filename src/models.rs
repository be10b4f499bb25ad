// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # API Data Models
//!
//! Request and response data structures used by the REST API. All types
//! derive `ToSchema` for the OpenAPI document.
//!
//! ## Model Categories
//!
//! - **Movies**: titled releases, titles are unique
//! - **Actors**: performers with optional age and gender
//!
//! Request fields are all optional so that a missing field surfaces as our
//! own `400 Bad Request` instead of a deserialization rejection.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Maximum length of an actor's gender field.
pub const MAX_GENDER_LEN: usize = 6;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Movie {
    pub id: u64,
    pub title: String,
    pub release_date: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Actor {
    pub id: u64,
    pub name: String,
    pub age: Option<u32>,
    pub gender: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct MovieRequest {
    pub title: Option<String>,
    pub release_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct ActorRequest {
    pub name: Option<String>,
    pub age: Option<u32>,
    pub gender: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct MoviesResponse {
    pub success: bool,
    pub movies: Vec<Movie>,
}

/// Single-movie response; the key stays `movies` for client compatibility.
#[derive(Debug, Serialize, ToSchema)]
pub struct MovieResponse {
    pub success: bool,
    pub movies: Movie,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ActorsResponse {
    pub success: bool,
    pub actors: Vec<Actor>,
}

/// Single-actor response; the key stays `actors` for client compatibility.
#[derive(Debug, Serialize, ToSchema)]
pub struct ActorResponse {
    pub success: bool,
    pub actors: Actor,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct DeleteResponse {
    pub success: bool,
    pub delete: u64,
}

impl DeleteResponse {
    pub fn new(id: u64) -> Self {
        Self {
            success: true,
            delete: id,
        }
    }
}

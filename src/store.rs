// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! In-memory record store for movies and actors.
//!
//! Identifiers are assigned sequentially per record type, starting at 1, and
//! are never reused after a delete.

use std::collections::BTreeMap;

use crate::error::ApiError;
use crate::models::{Actor, ActorRequest, Movie, MovieRequest, MAX_GENDER_LEN};

#[derive(Default)]
pub struct InMemoryStore {
    movies: BTreeMap<u64, Movie>,
    actors: BTreeMap<u64, Actor>,
    last_movie_id: u64,
    last_actor_id: u64,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn list_movies(&self) -> Vec<Movie> {
        self.movies.values().cloned().collect()
    }

    pub fn create_movie(&mut self, request: MovieRequest) -> Result<Movie, ApiError> {
        let (Some(title), Some(release_date)) = (non_blank(request.title), request.release_date)
        else {
            return Err(ApiError::bad_request());
        };
        self.ensure_unique_title(&title, None)?;

        self.last_movie_id += 1;
        let movie = Movie {
            id: self.last_movie_id,
            title,
            release_date,
        };
        self.movies.insert(movie.id, movie.clone());
        Ok(movie)
    }

    /// Apply the fields present in `request` to an existing movie.
    pub fn update_movie(&mut self, id: u64, request: MovieRequest) -> Result<Movie, ApiError> {
        if !self.movies.contains_key(&id) {
            return Err(ApiError::not_found());
        }

        let title = match request.title {
            Some(title) => Some(non_blank(Some(title)).ok_or_else(ApiError::unprocessable)?),
            None => None,
        };
        if let Some(title) = &title {
            self.ensure_unique_title(title, Some(id))?;
        }

        let movie = self.movies.get_mut(&id).ok_or_else(ApiError::not_found)?;
        if let Some(title) = title {
            movie.title = title;
        }
        if let Some(release_date) = request.release_date {
            movie.release_date = release_date;
        }
        Ok(movie.clone())
    }

    pub fn delete_movie(&mut self, id: u64) -> Result<(), ApiError> {
        if self.movies.remove(&id).is_some() {
            Ok(())
        } else {
            Err(ApiError::not_found())
        }
    }

    pub fn list_actors(&self) -> Vec<Actor> {
        self.actors.values().cloned().collect()
    }

    pub fn create_actor(&mut self, request: ActorRequest) -> Result<Actor, ApiError> {
        let Some(name) = non_blank(request.name) else {
            return Err(ApiError::bad_request());
        };
        validate_gender(request.gender.as_deref())?;

        self.last_actor_id += 1;
        let actor = Actor {
            id: self.last_actor_id,
            name,
            age: request.age,
            gender: request.gender,
        };
        self.actors.insert(actor.id, actor.clone());
        Ok(actor)
    }

    /// Apply the fields present in `request` to an existing actor.
    pub fn update_actor(&mut self, id: u64, request: ActorRequest) -> Result<Actor, ApiError> {
        let Some(actor) = self.actors.get_mut(&id) else {
            return Err(ApiError::not_found());
        };
        validate_gender(request.gender.as_deref())?;

        if let Some(name) = request.name {
            actor.name = non_blank(Some(name)).ok_or_else(ApiError::unprocessable)?;
        }
        if request.age.is_some() {
            actor.age = request.age;
        }
        if request.gender.is_some() {
            actor.gender = request.gender;
        }
        Ok(actor.clone())
    }

    pub fn delete_actor(&mut self, id: u64) -> Result<(), ApiError> {
        if self.actors.remove(&id).is_some() {
            Ok(())
        } else {
            Err(ApiError::not_found())
        }
    }

    fn ensure_unique_title(&self, title: &str, except: Option<u64>) -> Result<(), ApiError> {
        let taken = self
            .movies
            .values()
            .any(|movie| movie.title == title && Some(movie.id) != except);
        if taken {
            Err(ApiError::unprocessable())
        } else {
            Ok(())
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn validate_gender(gender: Option<&str>) -> Result<(), ApiError> {
    match gender {
        Some(gender) if gender.chars().count() > MAX_GENDER_LEN => Err(ApiError::unprocessable()),
        _ => Ok(()),
    }
}

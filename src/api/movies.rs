// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Movie endpoints.

use axum::{
    extract::{rejection::JsonRejection, rejection::PathRejection, Path, State},
    Json,
};

use crate::{
    auth::{
        permissions::{DeleteMovies, PatchMovies, PostMovies},
        Authorized,
    },
    error::ApiError,
    models::{DeleteResponse, MovieRequest, MovieResponse, MoviesResponse},
    state::AppState,
};

/// List all movies. Public.
#[utoipa::path(
    get,
    path = "/movies",
    tag = "Movies",
    responses(
        (status = 200, body = MoviesResponse),
        (status = 404, description = "No movies stored")
    )
)]
pub async fn list_movies(State(state): State<AppState>) -> Result<Json<MoviesResponse>, ApiError> {
    let movies = state.store.read().await.list_movies();
    if movies.is_empty() {
        return Err(ApiError::not_found());
    }
    Ok(Json(MoviesResponse {
        success: true,
        movies,
    }))
}

#[utoipa::path(
    post,
    path = "/movies",
    request_body = MovieRequest,
    tag = "Movies",
    security(("bearer" = ["post:movies"])),
    responses(
        (status = 200, body = MovieResponse),
        (status = 400, description = "Missing title or release date"),
        (status = 401, description = "Missing or invalid token"),
        (status = 403, description = "Token lacks post:movies"),
        (status = 422, description = "Title already exists")
    )
)]
pub async fn create_movie(
    Authorized(claims, _): Authorized<PostMovies>,
    State(state): State<AppState>,
    payload: Result<Json<MovieRequest>, JsonRejection>,
) -> Result<Json<MovieResponse>, ApiError> {
    let Json(request) = payload.map_err(|_| ApiError::bad_request())?;
    let movie = state.store.write().await.create_movie(request)?;
    tracing::info!(movie_id = movie.id, subject = claims.subject(), "movie created");
    Ok(Json(MovieResponse {
        success: true,
        movies: movie,
    }))
}

#[utoipa::path(
    patch,
    path = "/movies/{id}",
    params(("id" = u64, Path, description = "Identifier of the movie to update")),
    request_body = MovieRequest,
    tag = "Movies",
    security(("bearer" = ["patch:movies"])),
    responses(
        (status = 200, body = MovieResponse),
        (status = 401, description = "Missing or invalid token"),
        (status = 403, description = "Token lacks patch:movies"),
        (status = 404, description = "Movie not found"),
        (status = 422, description = "Title already exists")
    )
)]
pub async fn update_movie(
    Authorized(claims, _): Authorized<PatchMovies>,
    State(state): State<AppState>,
    id: Result<Path<u64>, PathRejection>,
    payload: Result<Json<MovieRequest>, JsonRejection>,
) -> Result<Json<MovieResponse>, ApiError> {
    let Path(id) = id.map_err(|_| ApiError::not_found())?;
    let Json(request) = payload.map_err(|_| ApiError::bad_request())?;
    let movie = state.store.write().await.update_movie(id, request)?;
    tracing::info!(movie_id = id, subject = claims.subject(), "movie updated");
    Ok(Json(MovieResponse {
        success: true,
        movies: movie,
    }))
}

#[utoipa::path(
    delete,
    path = "/movies/{id}",
    params(("id" = u64, Path, description = "Identifier of the movie to delete")),
    tag = "Movies",
    security(("bearer" = ["delete:movies"])),
    responses(
        (status = 200, body = DeleteResponse),
        (status = 401, description = "Missing or invalid token"),
        (status = 403, description = "Token lacks delete:movies"),
        (status = 404, description = "Movie not found")
    )
)]
pub async fn delete_movie(
    Authorized(claims, _): Authorized<DeleteMovies>,
    State(state): State<AppState>,
    id: Result<Path<u64>, PathRejection>,
) -> Result<Json<DeleteResponse>, ApiError> {
    let Path(id) = id.map_err(|_| ApiError::not_found())?;
    state.store.write().await.delete_movie(id)?;
    tracing::info!(movie_id = id, subject = claims.subject(), "movie deleted");
    Ok(Json(DeleteResponse::new(id)))
}

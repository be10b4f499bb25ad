// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Actor endpoints.

use axum::{
    extract::{rejection::JsonRejection, rejection::PathRejection, Path, State},
    Json,
};

use crate::{
    auth::{
        permissions::{DeleteActors, PatchActors, PostActors},
        Authorized,
    },
    error::ApiError,
    models::{ActorRequest, ActorResponse, ActorsResponse, DeleteResponse},
    state::AppState,
};

/// List all actors. Public.
#[utoipa::path(
    get,
    path = "/actors",
    tag = "Actors",
    responses(
        (status = 200, body = ActorsResponse),
        (status = 404, description = "No actors stored")
    )
)]
pub async fn list_actors(State(state): State<AppState>) -> Result<Json<ActorsResponse>, ApiError> {
    let actors = state.store.read().await.list_actors();
    if actors.is_empty() {
        return Err(ApiError::not_found());
    }
    Ok(Json(ActorsResponse {
        success: true,
        actors,
    }))
}

#[utoipa::path(
    post,
    path = "/actors",
    request_body = ActorRequest,
    tag = "Actors",
    security(("bearer" = ["post:actors"])),
    responses(
        (status = 200, body = ActorResponse),
        (status = 400, description = "Missing name"),
        (status = 401, description = "Missing or invalid token"),
        (status = 403, description = "Token lacks post:actors"),
        (status = 422, description = "Gender longer than 6 characters")
    )
)]
pub async fn create_actor(
    Authorized(claims, _): Authorized<PostActors>,
    State(state): State<AppState>,
    payload: Result<Json<ActorRequest>, JsonRejection>,
) -> Result<Json<ActorResponse>, ApiError> {
    let Json(request) = payload.map_err(|_| ApiError::bad_request())?;
    let actor = state.store.write().await.create_actor(request)?;
    tracing::info!(actor_id = actor.id, subject = claims.subject(), "actor created");
    Ok(Json(ActorResponse {
        success: true,
        actors: actor,
    }))
}

#[utoipa::path(
    patch,
    path = "/actors/{id}",
    params(("id" = u64, Path, description = "Identifier of the actor to update")),
    request_body = ActorRequest,
    tag = "Actors",
    security(("bearer" = ["patch:actors"])),
    responses(
        (status = 200, body = ActorResponse),
        (status = 401, description = "Missing or invalid token"),
        (status = 403, description = "Token lacks patch:actors"),
        (status = 404, description = "Actor not found")
    )
)]
pub async fn update_actor(
    Authorized(claims, _): Authorized<PatchActors>,
    State(state): State<AppState>,
    id: Result<Path<u64>, PathRejection>,
    payload: Result<Json<ActorRequest>, JsonRejection>,
) -> Result<Json<ActorResponse>, ApiError> {
    let Path(id) = id.map_err(|_| ApiError::not_found())?;
    let Json(request) = payload.map_err(|_| ApiError::bad_request())?;
    let actor = state.store.write().await.update_actor(id, request)?;
    tracing::info!(actor_id = id, subject = claims.subject(), "actor updated");
    Ok(Json(ActorResponse {
        success: true,
        actors: actor,
    }))
}

#[utoipa::path(
    delete,
    path = "/actors/{id}",
    params(("id" = u64, Path, description = "Identifier of the actor to delete")),
    tag = "Actors",
    security(("bearer" = ["delete:actors"])),
    responses(
        (status = 200, body = DeleteResponse),
        (status = 401, description = "Missing or invalid token"),
        (status = 403, description = "Token lacks delete:actors"),
        (status = 404, description = "Actor not found")
    )
)]
pub async fn delete_actor(
    Authorized(claims, _): Authorized<DeleteActors>,
    State(state): State<AppState>,
    id: Result<Path<u64>, PathRejection>,
) -> Result<Json<DeleteResponse>, ApiError> {
    let Path(id) = id.map_err(|_| ApiError::not_found())?;
    state.store.write().await.delete_actor(id)?;
    tracing::info!(actor_id = id, subject = claims.subject(), "actor deleted");
    Ok(Json(DeleteResponse::new(id)))
}

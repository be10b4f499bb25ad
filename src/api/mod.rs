// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use axum::{
    http::HeaderName,
    routing::{get, patch},
    Router,
};
use tower_http::{
    cors::CorsLayer,
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    models::{
        Actor, ActorRequest, ActorResponse, ActorsResponse, DeleteResponse, Movie, MovieRequest,
        MovieResponse, MoviesResponse,
    },
    state::AppState,
};

pub mod actors;
pub mod health;
pub mod movies;

const REQUEST_ID_HEADER: &str = "x-request-id";

pub fn router(state: AppState) -> Router {
    let routes = Router::new()
        .route(
            "/movies",
            get(movies::list_movies).post(movies::create_movie),
        )
        .route(
            "/movies/{id}",
            patch(movies::update_movie).delete(movies::delete_movie),
        )
        .route(
            "/actors",
            get(actors::list_actors).post(actors::create_actor),
        )
        .route(
            "/actors/{id}",
            patch(actors::update_actor).delete(actors::delete_actor),
        )
        .route("/health/live", get(health::liveness))
        .route("/health/ready", get(health::readiness))
        .with_state(state);

    let request_id = HeaderName::from_static(REQUEST_ID_HEADER);

    Router::new()
        .merge(routes)
        .merge(SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi()))
        .layer(PropagateRequestIdLayer::new(request_id.clone()))
        .layer(TraceLayer::new_for_http())
        .layer(SetRequestIdLayer::new(request_id, MakeRequestUuid))
        .layer(CorsLayer::permissive())
}

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        movies::list_movies,
        movies::create_movie,
        movies::update_movie,
        movies::delete_movie,
        actors::list_actors,
        actors::create_actor,
        actors::update_actor,
        actors::delete_actor,
        health::liveness,
        health::readiness
    ),
    components(
        schemas(
            Movie,
            Actor,
            MovieRequest,
            ActorRequest,
            MoviesResponse,
            MovieResponse,
            ActorsResponse,
            ActorResponse,
            DeleteResponse,
            health::HealthResponse,
            health::ReadyResponse,
            health::HealthChecks
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Movies", description = "Movie records"),
        (name = "Actors", description = "Actor records"),
        (name = "Health", description = "Liveness and readiness probes")
    )
)]
struct ApiDoc;

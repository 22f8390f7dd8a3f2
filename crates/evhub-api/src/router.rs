//! Route table

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, TraceLayer},
};

use crate::handlers::{events, groups, health, subgroups, users, venues};
use crate::middleware::require_auth;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    // Public routes (no token)
    let public_routes = Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
        .route("/api/user/create/", post(users::create_user))
        .route("/api/user/token/", post(users::create_token));

    // Protected routes; route_layer keeps unknown paths a 404 instead of a 401
    let protected_routes = Router::new()
        .route("/api/user/me/", get(users::me).put(users::update_me).patch(users::update_me))
        .route("/api/venues/", get(venues::list_venues).post(venues::create_venue))
        .route(
            "/api/venues/{id}/",
            get(venues::get_venue)
                .put(venues::update_venue)
                .patch(venues::update_venue)
                .delete(venues::delete_venue),
        )
        .route("/api/groups/", get(groups::list_groups).post(groups::create_group))
        .route(
            "/api/groups/{id}/",
            get(groups::get_group)
                .put(groups::update_group)
                .patch(groups::update_group)
                .delete(groups::delete_group),
        )
        .route("/api/subgroups/", get(subgroups::list_subgroups).post(subgroups::create_subgroup))
        .route(
            "/api/subgroups/{id}/",
            get(subgroups::get_subgroup)
                .put(subgroups::update_subgroup)
                .patch(subgroups::update_subgroup)
                .delete(subgroups::delete_subgroup),
        )
        .route("/api/events/", get(events::list_events).post(events::create_event))
        .route(
            "/api/events/{id}/",
            get(events::get_event)
                .put(events::update_event)
                .patch(events::update_event)
                .delete(events::delete_event),
        )
        .route_layer(middleware::from_fn_with_state(state.clone(), require_auth));

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .with_state(state)
        // CORS
        .layer(CorsLayer::permissive())
        // Tracing
        .layer(TraceLayer::new_for_http().make_span_with(DefaultMakeSpan::default()))
}

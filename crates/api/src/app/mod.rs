//! HTTP API application wiring (Axum router + service wiring).
//!
//! This folder is structured like:
//! - `services.rs`: infrastructure wiring (user store + token signer)
//! - `routes/`: HTTP routes + handlers (one file per area)
//! - `dto.rs`: request/response DTOs
//! - `validate.rs`: boundary validation rules
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{
    routing::{get, post, put},
    Extension, Router,
};

use crate::middleware;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;
pub mod validate;

use services::AppServices;

/// Build the full HTTP router (public entrypoint used by `main.rs`).
pub fn build_app(jwt_secret: String) -> Router {
    build_app_with(Arc::new(AppServices::new(jwt_secret.as_bytes())))
}

/// Build the router around pre-wired services.
///
/// Tests use this to seed the store before the server starts; deployments
/// with their own store adapter wire it here too.
pub fn build_app_with(services: Arc<AppServices>) -> Router {
    let gate = axum::middleware::from_fn_with_state(
        middleware::AuthState {
            tokens: services.tokens().clone(),
            store: services.store().clone(),
        },
        middleware::authorize,
    );

    Router::new()
        .route("/", get(routes::system::root))
        .route("/health", get(routes::system::health))
        .route("/auth/login", post(routes::auth::login))
        // Public account routes.
        .route(
            "/users",
            get(routes::users::list_users).post(routes::users::create_user),
        )
        .route("/users/:id", get(routes::users::get_user))
        // Gated account routes: self-service mutations target the caller,
        // admin mutations target the path parameter.
        .route(
            "/users",
            put(routes::users::update_self)
                .delete(routes::users::delete_self)
                .route_layer(gate.clone()),
        )
        .route(
            "/users/:id",
            put(routes::users::update_user)
                .delete(routes::users::delete_user)
                .route_layer(gate),
        )
        .fallback(routes::system::fallback)
        .layer(Extension(services))
}

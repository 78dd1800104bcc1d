//! HTTP API application wiring (Axum router + service wiring).
//!
//! - `services.rs`: collaborator wiring (credential store, password hasher)
//! - `routes/`: HTTP routes + handlers
//! - `dto.rs`: response DTOs and JSON mapping helpers
//! - `extract.rs`: JSON-or-form request bodies
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{Router, routing::get};

use orgdesk_auth::{AuthConfig, AuthService};

pub mod dto;
pub mod errors;
pub mod extract;
pub mod routes;
pub mod services;

/// Build the full HTTP router (public entrypoint used by `main.rs`).
pub fn build_app(config: AuthConfig) -> Router {
    build_app_with(services::build_services(&config))
}

/// Build the router around an already wired [`AuthService`].
pub fn build_app_with(auth: Arc<AuthService>) -> Router {
    Router::new()
        .route("/health", get(routes::system::health))
        .nest("/api/auth", routes::auth::router(auth))
}

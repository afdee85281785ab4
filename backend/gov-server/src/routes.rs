use crate::{
    AppState, get_me, health, list_identities, login, register, set_identity_active, update_me,
};

use axum::{
    Router,
    routing::{get, post, put},
};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    let api = Router::new()
        // Public
        .route("/auth/register", post(register))
        .route("/auth/login", post(login))
        // Authenticated
        .route("/auth/me", get(get_me).put(update_me))
        // Admin
        .route("/admin/identities", get(list_identities))
        .route("/admin/identities/{id}/active", put(set_identity_active));

    Router::new()
        .nest("/api/v1", api)
        // Health check endpoints
        .route("/health", get(health::health))
        .route("/live", get(health::liveness))
        .route("/ready", get(health::readiness))
        // Add shared state
        .with_state(state)
        // The SPA frontend is served from another origin
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}

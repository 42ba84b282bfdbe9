//! Route definitions for the Brigade HTTP API.
//!
//! All routes are organized by domain and mounted under `/api`.
//! The router receives `AppState` and passes it to all handlers via
//! Axum's `State` extractor.

use axum::{
    Router,
    middleware as axum_middleware,
    routing::{delete, get, post, put},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(auth_routes())
        .merge(user_routes())
        .merge(product_routes())
        .merge(supplier_routes())
        .merge(restaurant_routes())
        .merge(audit_routes())
        .merge(health_routes());

    let cors = build_cors_layer(&state);

    Router::new()
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(axum_middleware::from_fn(
            middleware::logging::request_logging,
        ))
        .with_state(state)
}

/// Auth endpoints: login, refresh, register, logout, me, password
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/login", post(handlers::auth::login))
        .route("/auth/refresh", post(handlers::auth::refresh))
        .route("/auth/register", post(handlers::auth::register))
        .route("/auth/logout", post(handlers::auth::logout))
        .route("/auth/me", get(handlers::auth::me))
        .route("/auth/password", put(handlers::auth::change_password))
}

/// Administrative user management
fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users/{id}/role", put(handlers::user::change_role))
        .route("/users/{id}/active", put(handlers::user::change_active))
}

/// Product catalog CRUD
fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/products", get(handlers::product::list_products))
        .route("/products", post(handlers::product::create_product))
        .route("/products/{id}", get(handlers::product::get_product))
        .route("/products/{id}", put(handlers::product::update_product))
        .route("/products/{id}", delete(handlers::product::delete_product))
}

/// Supplier directory CRUD
fn supplier_routes() -> Router<AppState> {
    Router::new()
        .route("/suppliers", get(handlers::supplier::list_suppliers))
        .route("/suppliers", post(handlers::supplier::create_supplier))
        .route("/suppliers/{id}", get(handlers::supplier::get_supplier))
        .route("/suppliers/{id}", put(handlers::supplier::update_supplier))
        .route(
            "/suppliers/{id}",
            delete(handlers::supplier::delete_supplier),
        )
}

/// Restaurant profile
fn restaurant_routes() -> Router<AppState> {
    Router::new()
        .route("/restaurant", get(handlers::restaurant::get_profile))
        .route("/restaurant", put(handlers::restaurant::update_profile))
}

/// Audit trail search
fn audit_routes() -> Router<AppState> {
    Router::new().route("/audit", get(handlers::audit::search_audit))
}

/// Health check endpoints (no auth required)
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health_check))
}

/// Build CORS layer from configuration
fn build_cors_layer(state: &AppState) -> CorsLayer {
    use http::Method;
    use tower_http::cors::Any;

    let cors_config = &state.config.server.cors;

    let mut cors = CorsLayer::new();

    if cors_config.allowed_origins.contains(&"*".to_string()) {
        cors = cors.allow_origin(Any);
    } else {
        let origins: Vec<http::HeaderValue> = cors_config
            .allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        cors = cors.allow_origin(origins);
    }

    let methods: Vec<Method> = cors_config
        .allowed_methods
        .iter()
        .filter_map(|m| m.parse().ok())
        .collect();
    cors = cors.allow_methods(methods);

    if cors_config.allowed_headers.contains(&"*".to_string()) {
        cors = cors.allow_headers(Any);
    }

    cors.max_age(std::time::Duration::from_secs(cors_config.max_age_seconds))
}

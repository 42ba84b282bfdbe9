//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use sqlx::PgPool;

use brigade_auth::jwt::{JwtDecoder, JwtEncoder};
use brigade_auth::password::PasswordHasher;
use brigade_core::config::AppConfig;
use brigade_database::repositories::audit::AuditRepository;
use brigade_database::repositories::user::UserRepository;
use brigade_service::auth::AuthService;
use brigade_service::product::ProductService;
use brigade_service::restaurant::RestaurantService;
use brigade_service::supplier::SupplierService;
use brigade_service::user::UserService;

use crate::middleware::rate_limit::RateLimiter;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    // ── Configuration ────────────────────────────────────────
    /// Application configuration
    pub config: Arc<AppConfig>,

    // ── Infrastructure ───────────────────────────────────────
    /// PostgreSQL connection pool
    pub db_pool: PgPool,

    // ── Auth ─────────────────────────────────────────────────
    /// JWT token encoder
    pub jwt_encoder: Arc<JwtEncoder>,
    /// JWT token decoder and validator
    pub jwt_decoder: Arc<JwtDecoder>,
    /// Password hasher (Argon2)
    pub password_hasher: Arc<PasswordHasher>,
    /// Login attempt rate limiter
    pub login_limiter: RateLimiter,

    // ── Repositories ─────────────────────────────────────────
    /// User repository (liveness checks in the auth extractor)
    pub user_repo: Arc<UserRepository>,
    /// Audit log repository (admin audit search)
    pub audit_repo: Arc<AuditRepository>,

    // ── Services ─────────────────────────────────────────────
    /// Authentication flows
    pub auth_service: Arc<AuthService>,
    /// User self-service and administration
    pub user_service: Arc<UserService>,
    /// Product catalog
    pub product_service: Arc<ProductService>,
    /// Supplier directory
    pub supplier_service: Arc<SupplierService>,
    /// Restaurant profile
    pub restaurant_service: Arc<RestaurantService>,
}

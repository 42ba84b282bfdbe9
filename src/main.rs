//! Brigade Server — Restaurant Back-Office Platform
//!
//! Main entry point that wires all crates together and starts the server.

use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt};

use brigade_core::config::AppConfig;
use brigade_core::error::AppError;

#[tokio::main]
async fn main() {
    let config = match load_configuration() {
        Ok(c) => c,
        Err(e) => {
            // Misconfiguration (including missing signing secrets) is
            // startup-fatal: die before binding a socket.
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

/// Load configuration from file and environment
fn load_configuration() -> Result<AppConfig, AppError> {
    let env = std::env::var("BRIGADE_ENV").unwrap_or_else(|_| "development".to_string());
    AppConfig::load(&env)
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
        _ => {
            fmt().with_env_filter(filter).with_target(true).init();
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting Brigade v{}", env!("CARGO_PKG_VERSION"));

    // ── Step 1: Database connection + migrations ─────────────────
    let db_pool = brigade_database::connection::create_pool(&config.database).await?;
    brigade_database::migration::run_migrations(&db_pool).await?;

    // ── Step 2: Repositories ─────────────────────────────────────
    let user_repo = Arc::new(brigade_database::repositories::user::UserRepository::new(
        db_pool.clone(),
    ));
    let product_repo = Arc::new(
        brigade_database::repositories::product::ProductRepository::new(db_pool.clone()),
    );
    let supplier_repo = Arc::new(
        brigade_database::repositories::supplier::SupplierRepository::new(db_pool.clone()),
    );
    let restaurant_repo = Arc::new(
        brigade_database::repositories::restaurant::RestaurantRepository::new(db_pool.clone()),
    );
    let audit_repo = Arc::new(brigade_database::repositories::audit::AuditRepository::new(
        db_pool.clone(),
    ));

    // ── Step 3: Auth primitives ──────────────────────────────────
    let password_hasher = Arc::new(brigade_auth::password::PasswordHasher::new());
    let password_policy = brigade_auth::password::PasswordPolicy::new(&config.auth);
    let jwt_encoder = Arc::new(brigade_auth::jwt::JwtEncoder::new(&config.auth));
    let jwt_decoder = Arc::new(brigade_auth::jwt::JwtDecoder::new(&config.auth));

    // ── Step 4: Services ─────────────────────────────────────────
    let audit_recorder = brigade_service::audit::AuditRecorder::new(Arc::clone(&audit_repo));

    let auth_service = Arc::new(brigade_service::auth::AuthService::new(
        Arc::clone(&user_repo),
        Arc::clone(&password_hasher),
        password_policy.clone(),
        Arc::clone(&jwt_encoder),
        Arc::clone(&jwt_decoder),
        audit_recorder.clone(),
    ));
    let user_service = Arc::new(brigade_service::user::UserService::new(
        Arc::clone(&user_repo),
        Arc::clone(&password_hasher),
        password_policy,
        audit_recorder.clone(),
    ));
    let product_service = Arc::new(brigade_service::product::ProductService::new(
        Arc::clone(&product_repo),
        audit_recorder.clone(),
    ));
    let supplier_service = Arc::new(brigade_service::supplier::SupplierService::new(
        Arc::clone(&supplier_repo),
        audit_recorder.clone(),
    ));
    let restaurant_service = Arc::new(brigade_service::restaurant::RestaurantService::new(
        Arc::clone(&restaurant_repo),
        audit_recorder,
    ));

    let login_limiter = brigade_api::middleware::rate_limit::RateLimiter::new(
        config.auth.login_rate_limit_burst,
        config.auth.login_rate_limit_per_second,
    );

    // ── Step 5: Build and start HTTP server ──────────────────────
    let app_state = brigade_api::AppState {
        config: Arc::new(config.clone()),
        db_pool,
        jwt_encoder,
        jwt_decoder,
        password_hasher,
        login_limiter,
        user_repo,
        audit_repo,
        auth_service,
        user_service,
        product_service,
        supplier_service,
        restaurant_service,
    };

    let app = brigade_api::router::build_router(app_state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {}: {}", addr, e)))?;

    tracing::info!("Brigade server listening on {}", addr);

    // ── Step 6: Graceful shutdown ────────────────────────────────
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            shutdown_signal().await;
            tracing::info!("Shutdown signal received, starting graceful shutdown...");
        })
        .await
        .map_err(|e| AppError::internal(format!("Server error: {}", e)))?;

    tracing::info!("Brigade server shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}

//! Shared test helpers for integration tests.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode};
use serde_json::Value;
use sqlx::PgPool;
use tower::ServiceExt;
use uuid::Uuid;

use brigade_core::config::AppConfig;

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Database pool for direct queries
    pub db_pool: PgPool,
    /// Application config
    pub config: AppConfig,
}

impl TestApp {
    /// Create a new test application
    pub async fn new() -> Self {
        let config = AppConfig::load_file("tests/fixtures/test_config")
            .expect("Failed to load test config");

        let db_pool = brigade_database::connection::create_pool(&config.database)
            .await
            .expect("Failed to connect to test database");

        brigade_database::migration::run_migrations(&db_pool)
            .await
            .expect("Failed to run migrations");

        Self::clean_database(&db_pool).await;

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

        let password_hasher = Arc::new(brigade_auth::password::PasswordHasher::new());
        let password_policy = brigade_auth::password::PasswordPolicy::new(&config.auth);
        let jwt_encoder = Arc::new(brigade_auth::jwt::JwtEncoder::new(&config.auth));
        let jwt_decoder = Arc::new(brigade_auth::jwt::JwtDecoder::new(&config.auth));

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

        let app_state = brigade_api::AppState {
            config: Arc::new(config.clone()),
            db_pool: db_pool.clone(),
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

        let router = brigade_api::router::build_router(app_state);

        Self {
            router,
            db_pool,
            config,
        }
    }

    /// Clean all test data from the database
    async fn clean_database(pool: &PgPool) {
        let tables = [
            "audit_log",
            "products",
            "suppliers",
            "restaurant_profile",
            "users",
        ];

        for table in &tables {
            let query = format!("DELETE FROM {}", table);
            let _ = sqlx::query(&query).execute(pool).await;
        }
    }

    /// Create a test user and return their ID
    pub async fn create_test_user(&self, email: &str, password: &str, role: &str) -> Uuid {
        let hasher = brigade_auth::password::PasswordHasher::new();
        let hash = hasher.hash(password).expect("Failed to hash password");
        let id = Uuid::new_v4();

        sqlx::query(
            r#"INSERT INTO users (id, name, email, password_hash, role, is_active)
               VALUES ($1, $2, LOWER($3), $4, $5::user_role, TRUE)"#,
        )
        .bind(id)
        .bind(email.split('@').next().unwrap_or("test"))
        .bind(email)
        .bind(&hash)
        .bind(role)
        .execute(&self.db_pool)
        .await
        .expect("Failed to create test user");

        id
    }

    /// Deactivate a user directly in the database
    pub async fn deactivate_user(&self, id: Uuid) {
        sqlx::query("UPDATE users SET is_active = FALSE WHERE id = $1")
            .bind(id)
            .execute(&self.db_pool)
            .await
            .expect("Failed to deactivate user");
    }

    /// Login and return the JWT access token
    pub async fn login(&self, email: &str, password: &str) -> String {
        let body = serde_json::json!({
            "email": email,
            "password": password,
        });

        let response = self
            .request("POST", "/api/auth/login", Some(body), None)
            .await;

        assert_eq!(
            response.status,
            StatusCode::OK,
            "Login failed: {:?}",
            response.body
        );

        response.body["data"]["access_token"]
            .as_str()
            .expect("No access_token in login response")
            .to_string()
    }

    /// Count audit entries matching a record type and action
    pub async fn count_audit_entries(&self, record_type: &str, action: &str) -> i64 {
        sqlx::query_scalar(
            "SELECT COUNT(*) FROM audit_log WHERE record_type = $1 AND action = $2::audit_action",
        )
        .bind(record_type)
        .bind(action)
        .fetch_one(&self.db_pool)
        .await
        .expect("Failed to count audit entries")
    }

    /// Make an HTTP request to the test app
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json");

        if let Some(token) = token {
            req = req.header("Authorization", format!("Bearer {}", token));
        }

        let req = req
            .body(Body::from(body_str))
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();

        let set_cookie = response
            .headers()
            .get("set-cookie")
            .and_then(|v| v.to_str().ok())
            .map(String::from);

        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse {
            status,
            body,
            set_cookie,
        }
    }

    /// Make a request carrying a Cookie header (refresh flow)
    pub async fn request_with_cookie(
        &self,
        method: &str,
        path: &str,
        cookie: &str,
    ) -> TestResponse {
        let req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json")
            .header("Cookie", cookie)
            .body(Body::empty())
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");
        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse {
            status,
            body,
            set_cookie: None,
        }
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body
    pub body: Value,
    /// Value of the Set-Cookie header, if any
    pub set_cookie: Option<String>,
}

/// Extract the refresh token cookie pair (`name=value`) from a Set-Cookie
/// header value.
pub fn refresh_cookie_pair(set_cookie: &str) -> String {
    set_cookie
        .split(';')
        .next()
        .expect("Empty Set-Cookie header")
        .trim()
        .to_string()
}

//! Authentication configuration.

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Authentication and credential configuration.
///
/// Access and refresh tokens are signed with two distinct secrets so that
/// rotating or leaking one key class does not invalidate the other.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Secret key for signing access tokens (HMAC-SHA256).
    #[serde(default)]
    pub access_secret: String,
    /// Secret key for signing refresh tokens. Must differ from
    /// `access_secret`.
    #[serde(default)]
    pub refresh_secret: String,
    /// Access token TTL in minutes.
    #[serde(default = "default_access_ttl")]
    pub access_ttl_minutes: u64,
    /// Refresh token TTL in days.
    #[serde(default = "default_refresh_ttl")]
    pub refresh_ttl_days: u64,
    /// Minimum password length.
    #[serde(default = "default_password_min")]
    pub password_min_length: usize,
    /// Maximum login attempts per IP within the rate-limit window.
    #[serde(default = "default_login_burst")]
    pub login_rate_limit_burst: u32,
    /// Login attempt refill rate per second (token bucket).
    #[serde(default = "default_login_refill")]
    pub login_rate_limit_per_second: f64,
    /// Whether the refresh cookie is marked `Secure` (HTTPS only).
    #[serde(default)]
    pub secure_cookies: bool,
}

impl AuthConfig {
    /// Reject empty or reused signing secrets.
    ///
    /// A missing secret is a startup-fatal condition: token issuance and
    /// verification cannot work without it, and discovering that on the
    /// first request would masquerade as an authentication failure.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.access_secret.trim().is_empty() {
            return Err(AppError::configuration(
                "auth.access_secret is not set; refusing to start",
            ));
        }
        if self.refresh_secret.trim().is_empty() {
            return Err(AppError::configuration(
                "auth.refresh_secret is not set; refusing to start",
            ));
        }
        if self.access_secret == self.refresh_secret {
            return Err(AppError::configuration(
                "auth.access_secret and auth.refresh_secret must differ",
            ));
        }
        Ok(())
    }
}

fn default_access_ttl() -> u64 {
    15
}

fn default_refresh_ttl() -> u64 {
    7
}

fn default_password_min() -> usize {
    8
}

fn default_login_burst() -> u32 {
    5
}

fn default_login_refill() -> f64 {
    // One attempt regained every ~3 minutes, matching a 5-per-15-minutes
    // window.
    1.0 / 180.0
}

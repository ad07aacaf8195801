/**
 * Application Configuration
 *
 * This module loads and validates every setting the server needs, once,
 * at startup. Nothing else in the crate reads environment variables:
 * components receive their settings through `AppConfig` so tests can
 * construct them directly.
 *
 * # Configuration Sources
 *
 * Environment variables (typically via a `.env` file loaded in `main`):
 *
 * - `DATABASE_URL` - required, Postgres connection string
 * - `SECRET_KEY` - required, HMAC signing secret for access tokens
 * - `ALGORITHM` - optional, one of HS256/HS384/HS512 (default HS256)
 * - `ACCESS_TOKEN_EXPIRE_MINUTES` - optional, default 30
 * - `SERVER_PORT` - optional, default 3000
 * - `BOOTSTRAP_ADMIN_EMAIL` / `BOOTSTRAP_ADMIN_PASSWORD` - optional pair;
 *   when both are set an admin account is ensured at startup
 *
 * # Error Handling
 *
 * A missing required variable or an unparseable value is fatal: the
 * server refuses to start rather than limp along with, say, an empty
 * signing secret.
 */

use jsonwebtoken::Algorithm;
use std::env;
use thiserror::Error;

/// Errors produced while loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required environment variable is absent
    #[error("required environment variable {0} is not set")]
    MissingVar(&'static str),

    /// A variable is present but its value cannot be used
    #[error("environment variable {name} is invalid: {detail}")]
    InvalidVar {
        name: &'static str,
        detail: String,
    },
}

/// Optional admin account ensured at startup
#[derive(Debug, Clone)]
pub struct BootstrapAdmin {
    pub email: String,
    pub password: String,
}

/// All runtime settings, validated and ready to use
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Postgres connection string
    pub database_url: String,
    /// HMAC secret used to sign and verify access tokens
    pub secret_key: String,
    /// Signing algorithm, restricted to the HMAC family
    pub algorithm: Algorithm,
    /// Access token lifetime in minutes
    pub access_token_expire_minutes: i64,
    /// Port the HTTP server binds on
    pub server_port: u16,
    /// Admin account to ensure at startup, if configured
    pub bootstrap_admin: Option<BootstrapAdmin>,
}

impl AppConfig {
    /// Load configuration from the environment.
    ///
    /// # Errors
    ///
    /// - `MissingVar` when `DATABASE_URL` or `SECRET_KEY` is unset
    /// - `InvalidVar` for a non-HMAC `ALGORITHM`, an unparseable number,
    ///   or a bootstrap pair with only one half set
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url =
            env::var("DATABASE_URL").map_err(|_| ConfigError::MissingVar("DATABASE_URL"))?;
        let secret_key =
            env::var("SECRET_KEY").map_err(|_| ConfigError::MissingVar("SECRET_KEY"))?;

        let algorithm = match env::var("ALGORITHM") {
            Ok(value) => parse_hmac_algorithm(&value)?,
            Err(_) => Algorithm::HS256,
        };

        let access_token_expire_minutes =
            parse_var("ACCESS_TOKEN_EXPIRE_MINUTES", 30, |raw| raw.parse::<i64>().ok())?;
        let server_port = parse_var("SERVER_PORT", 3000, |raw| raw.parse::<u16>().ok())?;

        let bootstrap_admin = match (
            env::var("BOOTSTRAP_ADMIN_EMAIL"),
            env::var("BOOTSTRAP_ADMIN_PASSWORD"),
        ) {
            (Ok(email), Ok(password)) => Some(BootstrapAdmin { email, password }),
            (Err(_), Err(_)) => None,
            (Ok(_), Err(_)) => {
                return Err(ConfigError::InvalidVar {
                    name: "BOOTSTRAP_ADMIN_EMAIL",
                    detail: "set without BOOTSTRAP_ADMIN_PASSWORD".into(),
                })
            }
            (Err(_), Ok(_)) => {
                return Err(ConfigError::InvalidVar {
                    name: "BOOTSTRAP_ADMIN_PASSWORD",
                    detail: "set without BOOTSTRAP_ADMIN_EMAIL".into(),
                })
            }
        };

        Ok(Self {
            database_url,
            secret_key,
            algorithm,
            access_token_expire_minutes,
            server_port,
            bootstrap_admin,
        })
    }

    /// Token lifetime as a duration
    pub fn token_ttl(&self) -> chrono::Duration {
        chrono::Duration::minutes(self.access_token_expire_minutes)
    }
}

/// Parse an optional numeric variable, falling back to `default` when unset
fn parse_var<T>(
    name: &'static str,
    default: T,
    parse: impl Fn(&str) -> Option<T>,
) -> Result<T, ConfigError> {
    match env::var(name) {
        Ok(raw) => parse(&raw).ok_or_else(|| ConfigError::InvalidVar {
            name,
            detail: format!("cannot parse {raw:?}"),
        }),
        Err(_) => Ok(default),
    }
}

/// Accept only the HMAC algorithms the token service supports.
///
/// Asymmetric algorithms are rejected outright: the deployment only ever
/// holds one shared secret, and accepting an RSA name here would mean
/// keys that can never verify.
fn parse_hmac_algorithm(value: &str) -> Result<Algorithm, ConfigError> {
    match value {
        "HS256" => Ok(Algorithm::HS256),
        "HS384" => Ok(Algorithm::HS384),
        "HS512" => Ok(Algorithm::HS512),
        other => Err(ConfigError::InvalidVar {
            name: "ALGORITHM",
            detail: format!("{other:?} is not an HMAC algorithm (use HS256, HS384 or HS512)"),
        }),
    }
}

//! Environment-based application configuration.

use std::{net::SocketAddr, str::FromStr};

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_WEB_CLIENT_URL: &str = "http://localhost:3000";
const DEFAULT_SESSION_TTL_DAYS: i64 = 7;
const DEFAULT_RATE_LIMIT_BURST: u32 = 100;
// 100 requests replenished over 15 minutes
const DEFAULT_RATE_LIMIT_REPLENISH_SECS: u64 = 9;
const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 10;

/// Deployment environment the server runs in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnv {
    Development,
    Production,
    Test,
}

impl FromStr for AppEnv {
    type Err = ();

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "development" | "dev" => Ok(Self::Development),
            "production" | "prod" => Ok(Self::Production),
            "test" => Ok(Self::Test),
            _ => Err(()),
        }
    }
}

/// Per-client token bucket for the global rate limiter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitConfig {
    /// Requests a client may make before being throttled.
    pub burst: u32,
    /// Seconds needed to replenish a single request.
    pub replenish_secs: u64,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub database_max_connections: u32,

    pub bind_address: SocketAddr,
    /// Origin allowed to make credentialed cross-origin requests.
    pub web_client_url: String,
    pub app_env: AppEnv,

    pub session_ttl_days: i64,

    /// `None` disables rate limiting.
    pub rate_limit: Option<RateLimitConfig>,
    /// Read the client IP from `X-Forwarded-For` instead of the socket peer.
    pub trust_proxy: bool,
}

impl Config {
    /// Configuration with every optional setting at its default.
    pub fn new(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
            database_max_connections: DEFAULT_DATABASE_MAX_CONNECTIONS,
            bind_address: default_bind_address(),
            web_client_url: DEFAULT_WEB_CLIENT_URL.to_string(),
            app_env: AppEnv::Development,
            session_ttl_days: DEFAULT_SESSION_TTL_DAYS,
            rate_limit: Some(RateLimitConfig {
                burst: DEFAULT_RATE_LIMIT_BURST,
                replenish_secs: DEFAULT_RATE_LIMIT_REPLENISH_SECS,
            }),
            trust_proxy: false,
        }
    }

    /// Loads configuration from process environment variables.
    ///
    /// # Returns
    /// - `Ok(Config)` - All variables present and parseable
    /// - `Err(AppError::ConfigErr(MissingEnvVar))` - `DATABASE_URL` is not set
    /// - `Err(AppError::ConfigErr(InvalidEnvVar))` - A variable is set but cannot be parsed
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self::from_lookup(|name| std::env::var(name).ok())?)
    }

    /// Builds configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .filter(|value| !value.is_empty())
            .ok_or_else(|| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?;

        let rate_limit_enabled = parse_or(&lookup, "RATE_LIMIT_ENABLED", true, parse_bool)?;
        let rate_limit = if rate_limit_enabled {
            Some(RateLimitConfig {
                burst: parse_or(&lookup, "RATE_LIMIT_BURST", DEFAULT_RATE_LIMIT_BURST, parse)?,
                replenish_secs: parse_or(
                    &lookup,
                    "RATE_LIMIT_REPLENISH_SECS",
                    DEFAULT_RATE_LIMIT_REPLENISH_SECS,
                    parse,
                )?,
            })
        } else {
            None
        };

        Ok(Self {
            database_url,
            database_max_connections: parse_or(
                &lookup,
                "DATABASE_MAX_CONNECTIONS",
                DEFAULT_DATABASE_MAX_CONNECTIONS,
                parse,
            )?,
            bind_address: parse_or(
                &lookup,
                "BIND_ADDRESS",
                default_bind_address(),
                parse,
            )?,
            web_client_url: lookup("WEB_CLIENT_URL")
                .unwrap_or_else(|| DEFAULT_WEB_CLIENT_URL.to_string()),
            app_env: parse_or(&lookup, "APP_ENV", AppEnv::Development, parse)?,
            session_ttl_days: parse_or(
                &lookup,
                "SESSION_TTL_DAYS",
                DEFAULT_SESSION_TTL_DAYS,
                parse,
            )?,
            rate_limit,
            trust_proxy: parse_or(&lookup, "TRUST_PROXY", false, parse_bool)?,
        })
    }

    pub fn is_production(&self) -> bool {
        self.app_env == AppEnv::Production
    }

    /// The user seeder is a development utility and never runs in production.
    pub fn allow_seeding(&self) -> bool {
        !self.is_production()
    }
}

fn default_bind_address() -> SocketAddr {
    SocketAddr::from(([0, 0, 0, 0], 8080))
}

fn parse_or<F, T>(
    lookup: &F,
    name: &str,
    default: T,
    parser: fn(&str) -> Option<T>,
) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(name) {
        None => Ok(default),
        Some(value) if value.trim().is_empty() => Ok(default),
        Some(value) => parser(value.trim()).ok_or(ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value,
        }),
    }
}

fn parse<T: FromStr>(value: &str) -> Option<T> {
    value.parse().ok()
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

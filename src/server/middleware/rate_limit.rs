//! Global per-client rate limiting.
//!
//! A token bucket keyed by client IP is applied to the whole application. The peer
//! address is used unless the server runs behind a trusted proxy, in which case the
//! forwarded headers identify the client. The limiter's plain-text 429 is turned into
//! the error envelope by `middleware::envelope`.

use std::{sync::Arc, time::Duration};

use axum::Router;
use tokio::task::JoinHandle;
use tower_governor::{
    governor::GovernorConfigBuilder, key_extractor::SmartIpKeyExtractor, GovernorLayer,
};

use crate::server::{
    config::{Config, RateLimitConfig},
    error::{config::ConfigError, AppError},
};

/// How often idle client buckets are dropped from the limiter.
const CLEANUP_INTERVAL: Duration = Duration::from_secs(60);

/// Wraps `router` in the rate limiter described by `config`.
///
/// # Returns
/// - `Ok((router, None))` - Rate limiting is disabled
/// - `Ok((router, Some(handle)))` - Limiter applied; `handle` is the bucket cleanup task
/// - `Err(AppError::ConfigErr(InvalidRateLimit))` - Zero burst or replenish period
pub fn apply(router: Router, config: &Config) -> Result<(Router, Option<JoinHandle<()>>), AppError> {
    let Some(limits) = config.rate_limit else {
        tracing::info!("Rate limiting disabled");
        return Ok((router, None));
    };

    let (router, cleanup) = if config.trust_proxy {
        let governor = GovernorConfigBuilder::default()
            .key_extractor(SmartIpKeyExtractor)
            .per_second(limits.replenish_secs)
            .burst_size(limits.burst)
            .use_headers()
            .finish()
            .ok_or_else(|| invalid(limits))?;

        let limiter = governor.limiter().clone();
        let cleanup = spawn_cleanup(move || {
            limiter.retain_recent();
            limiter.len()
        });

        (router.layer(GovernorLayer::new(Arc::new(governor))), cleanup)
    } else {
        let governor = GovernorConfigBuilder::default()
            .per_second(limits.replenish_secs)
            .burst_size(limits.burst)
            .use_headers()
            .finish()
            .ok_or_else(|| invalid(limits))?;

        let limiter = governor.limiter().clone();
        let cleanup = spawn_cleanup(move || {
            limiter.retain_recent();
            limiter.len()
        });

        (router.layer(GovernorLayer::new(Arc::new(governor))), cleanup)
    };

    tracing::info!(
        "Rate limiting {} requests per client, one replenished every {}s",
        limits.burst,
        limits.replenish_secs
    );

    Ok((router, Some(cleanup)))
}

fn invalid(limits: RateLimitConfig) -> ConfigError {
    ConfigError::InvalidRateLimit {
        burst: limits.burst,
        replenish_secs: limits.replenish_secs,
    }
}

fn spawn_cleanup<F>(sweep: F) -> JoinHandle<()>
where
    F: Fn() -> usize + Send + 'static,
{
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(CLEANUP_INTERVAL);
        loop {
            interval.tick().await;
            let tracked = sweep();
            tracing::debug!("Rate limiter tracking {} clients", tracked);
        }
    })
}

//! Request pipeline stages shared by the router.
//!
//! Every route is composed as content-type check, validation, optional auth gate,
//! handler and optional post-handler step. Rate limiting, the error envelope for
//! layer-built responses and the hardening headers wrap the whole application.

pub mod auth;
pub mod content_type;
pub mod envelope;
pub mod rate_limit;
pub mod security_headers;
pub mod session;
pub mod validate;

#[cfg(test)]
mod test;

/// Largest request body accepted by any route.
pub const BODY_LIMIT_BYTES: usize = 10 * 1024 * 1024;

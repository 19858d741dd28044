use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is not set.
    ///
    /// The application requires this environment variable to be defined. Check the
    /// `.env.example` file for required configuration variables.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    /// Environment variable is set but its value cannot be parsed.
    #[error("Invalid value '{value}' for environment variable {name}")]
    InvalidEnvVar { name: String, value: String },

    /// Rate limiter settings were rejected by the governor builder.
    #[error("Invalid rate limit configuration: burst {burst}, replenish every {replenish_secs}s")]
    InvalidRateLimit { burst: u32, replenish_secs: u64 },
}

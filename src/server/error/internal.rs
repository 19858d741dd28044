use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// Argon2 failed to hash a password or parse a stored hash.
    ///
    /// Results in a 500 Internal Server Error with a generic message returned
    /// to client.
    #[error("Password hashing failed: {reason}")]
    PasswordHash {
        /// Display output of the underlying `password_hash::Error`
        reason: String,
    },

    /// A row that was just written could not be read back.
    #[error("{entity} with id {id} not found after write")]
    MissingAfterWrite {
        /// Name of the entity that was written
        entity: &'static str,
        /// Primary key that was written
        id: i32,
    },

    /// A generated value could not be encoded as an HTTP header.
    #[error("Generated value is not a valid {header} header")]
    InvalidHeaderValue {
        /// Name of the header being set
        header: String,
    },
}

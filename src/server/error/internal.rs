use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// Failure to hash a password with argon2.
    ///
    /// Results in a 500 Internal Server Error with a generic message returned
    /// to client.
    #[error("Failed to hash password: {reason}")]
    PasswordHash {
        /// Error reported by the hasher
        reason: String,
    },

    /// Failure to serialize a value into a JSON column.
    #[error("Failed to serialize {what}: {source}")]
    Serialize {
        /// Description of the value being serialized
        what: &'static str,
        /// The underlying serde error
        #[source]
        source: serde_json::Error,
    },
}

use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// A stored user role was not one of the known values.
    ///
    /// Roles are validated on every write path, so an unknown value in the
    /// database indicates outside modification or a bug. Results in a 500
    /// Internal Server Error with a generic message returned to the client.
    #[error("Unknown user role '{value}' stored in database")]
    UnknownUserRole {
        /// The stored value that failed to parse
        value: String,
    },

    /// A stored order status was not one of the known values.
    ///
    /// Statuses are validated on every write path, so an unknown value in the
    /// database indicates outside modification or a bug. Results in a 500
    /// Internal Server Error with a generic message returned to the client.
    #[error("Unknown order status '{value}' stored in database")]
    UnknownOrderStatus {
        /// The stored value that failed to parse
        value: String,
    },
}

use error_location::ErrorLocation;
use thiserror::Error;

/// Cut tracking and recorder control errors with source location tracking.
#[derive(Error, Debug)]
pub enum SlateError {
    /// Requested element order is not a permutation of the four element kinds.
    #[error("Invalid element order: {order} {location}")]
    InvalidOrder {
        /// The rejected order, rendered for diagnostics.
        order: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// Element name does not match any known element kind.
    #[error("Unknown element kind: {name:?} {location}")]
    InvalidKind {
        /// The unrecognized name.
        name: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// Cut number or version was not a positive integer.
    #[error("{field} must be a positive integer {location}")]
    InvalidNumber {
        /// Name of the offending field.
        field: &'static str,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// Local datagram send failed.
    #[error("Failed to send to {endpoint}: {source} {location}")]
    TransportFailure {
        /// Destination the payload was addressed to.
        endpoint: String,
        /// Underlying socket error.
        #[source]
        source: std::io::Error,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// Start requested while recording, or stop requested while idle.
    #[error("Invalid recording transition: {reason} {location}")]
    InvalidTransition {
        /// Description of the rejected transition.
        reason: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },
}

/// Result type alias using [`SlateError`].
pub type Result<T> = std::result::Result<T, SlateError>;

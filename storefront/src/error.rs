//! Storefront error types.

use thiserror::Error;

/// Errors produced by storefront providers and validation.
///
/// Async failures never cross the reducer boundary as errors: effects convert
/// them to store-local error strings via `Display` and feed them back as
/// failure actions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorefrontError {
    /// Network-level failure (connection, DNS, timeout).
    #[error("transport failure: {0}")]
    Transport(String),

    /// The upstream answered with a success envelope that contains no order.
    ///
    /// This is a domain failure, not an empty-but-valid response.
    #[error("order not found")]
    OrderNotFound,

    /// The upstream rejected the request.
    #[error("api error ({status}): {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Error message from the response body, when present.
        message: String,
    },

    /// The request requires credentials that are missing or expired.
    #[error("unauthorized")]
    Unauthorized,

    /// Caller-side validation failure, detected before any request is made.
    #[error("validation failed: {0}")]
    Validation(String),

    /// Snapshot or credential side-channel failure.
    ///
    /// Always swallowed at the dispatch boundary; logged, never surfaced.
    #[error("persistence failure: {0}")]
    Persistence(String),
}

/// Convenience alias used throughout the storefront crate.
pub type Result<T> = std::result::Result<T, StorefrontError>;

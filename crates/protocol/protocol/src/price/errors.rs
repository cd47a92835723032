//! Error types for price fetching.

use alloc::string::String;
use core::time::Duration;

use crate::{FixedPointError, PriceOracle};

/// A failure to obtain a fresh reading from a price feed.
///
/// Fetch errors are recoverable: a source with a last known price falls back to it.
#[derive(Debug, thiserror::Error, PartialEq, Eq, Clone)]
pub enum FetchError {
    /// The request could not be sent or the connection failed.
    #[error("transport error: {0}")]
    Transport(String),
    /// The request did not complete in time.
    #[error("request timed out after {0:?}")]
    Timeout(Duration),
    /// The endpoint answered with a non-success status.
    #[error("unexpected response status {0}")]
    Status(u16),
    /// The response body did not match the feed's schema.
    #[error("malformed response: {0}")]
    MalformedBody(String),
    /// The feed answered, but with no price or a zero price.
    #[error("empty price reading")]
    EmptyReading,
    /// The reading could not be converted to an 18-decimal price.
    #[error(transparent)]
    FixedPoint(#[from] FixedPointError),
}

impl FetchError {
    /// A short label for the failure, used in logs and metrics.
    pub const fn reason(&self) -> &'static str {
        match self {
            Self::Transport(_) => "transport",
            Self::Timeout(_) => "timeout",
            Self::Status(_) => "status",
            Self::MalformedBody(_) => "malformed_body",
            Self::EmptyReading => "empty_reading",
            Self::FixedPoint(_) => "fixed_point",
        }
    }
}

/// An error returned by a [`crate::PriceSource`].
#[derive(Debug, thiserror::Error, PartialEq, Eq, Clone)]
pub enum PriceSourceError {
    /// The fetch failed and no price has ever been read from this source.
    #[error("no {oracle} price available: {cause}")]
    NoFallbackAvailable {
        /// The oracle that failed.
        oracle: PriceOracle,
        /// Why the fresh fetch failed.
        cause: FetchError,
    },
}

//! Error types for system deposit construction.

use crate::{BurnError, PriceSourceError};

/// An error building a system deposit. No deposit is produced when this is returned.
#[derive(Debug, thiserror::Error, PartialEq, Eq, Clone)]
pub enum DepositError {
    /// The burn report could not be computed.
    #[error("failed to compute l1 burn: {0}")]
    Burn(#[from] BurnError),
    /// The price source had no price to report.
    #[error("failed to fetch price: {0}")]
    Source(#[from] PriceSourceError),
}

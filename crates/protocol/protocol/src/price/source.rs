//! The [`PriceSource`] trait and its result type.

use alloc::boxed::Box;
use alloy_primitives::U256;
use async_trait::async_trait;

use crate::{FetchError, PriceOracle, PriceSourceError};

/// A price returned by a [`PriceSource`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PricePoint {
    /// A price read from the feed during this fetch.
    Fresh(U256),
    /// The fetch failed, so the last known price was used.
    Stale {
        /// The last known price.
        price: U256,
        /// Why the fresh fetch failed.
        cause: FetchError,
    },
}

impl PricePoint {
    /// Returns the 18-decimal price.
    pub const fn price(&self) -> U256 {
        match self {
            Self::Fresh(price) | Self::Stale { price, .. } => *price,
        }
    }

    /// Returns `true` if the price is a fallback value.
    pub const fn is_stale(&self) -> bool {
        matches!(self, Self::Stale { .. })
    }

    /// Returns the fetch failure behind a fallback value.
    pub const fn cause(&self) -> Option<&FetchError> {
        match self {
            Self::Fresh(_) => None,
            Self::Stale { cause, .. } => Some(cause),
        }
    }
}

/// A source of 18-decimal prices for a single [`PriceOracle`].
#[async_trait]
#[auto_impl::auto_impl(&, Arc)]
pub trait PriceSource: Send + Sync {
    /// The oracle this source reads from.
    fn oracle(&self) -> PriceOracle;

    /// Fetches the current price, falling back to the last known price on failure.
    async fn fetch_price(&self) -> Result<PricePoint, PriceSourceError>;
}

//! The raw price feed abstraction.

use alloy_primitives::U256;
use async_trait::async_trait;
use sysdep_protocol::{FetchError, PriceOracle};

/// A feed that reads the current price from one oracle.
///
/// Feeds perform a single fetch and hold no state across calls. Wrap a feed in a
/// [`crate::FallbackSource`] to get timeout and last-known-price handling.
#[async_trait]
pub trait PriceFeed: Send + Sync {
    /// The oracle this feed reads from.
    fn oracle(&self) -> PriceOracle;

    /// Reads the current price, scaled to 18 decimals.
    async fn latest_price(&self) -> Result<U256, FetchError>;
}

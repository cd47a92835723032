//! The last known price of a single source.

use alloy_primitives::U256;
use spin::Mutex;

use crate::{FetchError, PriceOracle, PricePoint, PriceSourceError};

/// Holds the last fresh price read from one source.
///
/// The cache is owned by exactly one source. It starts empty, is overwritten by every fresh
/// non-zero reading, and is read whenever a fetch fails or comes back empty. It is never cleared.
#[derive(Debug, Default)]
pub struct PriceCache {
    last: Mutex<Option<U256>>,
}

impl PriceCache {
    /// Creates an empty [`PriceCache`].
    pub const fn new() -> Self {
        Self { last: Mutex::new(None) }
    }

    /// Creates a [`PriceCache`] seeded with a known price.
    pub const fn with_price(price: U256) -> Self {
        Self { last: Mutex::new(Some(price)) }
    }

    /// Returns the last known price, if any.
    pub fn last_known(&self) -> Option<U256> {
        *self.last.lock()
    }

    /// Resolves a raw reading against the cache.
    ///
    /// A non-zero reading is stored and returned as [`PricePoint::Fresh`]. A failed or zero
    /// reading returns the last known price as [`PricePoint::Stale`], or
    /// [`PriceSourceError::NoFallbackAvailable`] if there is none.
    pub fn resolve(
        &self,
        oracle: PriceOracle,
        reading: Result<U256, FetchError>,
    ) -> Result<PricePoint, PriceSourceError> {
        let mut last = self.last.lock();

        let cause = match reading {
            Ok(price) if !price.is_zero() => {
                *last = Some(price);
                debug!(target: "price_source", %oracle, %price, "Fresh price reading");
                return Ok(PricePoint::Fresh(price));
            }
            Ok(_) => FetchError::EmptyReading,
            Err(err) => err,
        };

        match *last {
            Some(price) => {
                warn!(
                    target: "price_source",
                    %oracle,
                    %price,
                    reason = cause.reason(),
                    err = %cause,
                    "Price fetch failed, falling back to last known price"
                );
                Ok(PricePoint::Stale { price, cause })
            }
            None => {
                error!(
                    target: "price_source",
                    %oracle,
                    reason = cause.reason(),
                    err = %cause,
                    "Price fetch failed with no last known price"
                );
                Err(PriceSourceError::NoFallbackAvailable { oracle, cause })
            }
        }
    }
}

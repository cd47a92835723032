//! A [`PriceSource`] that falls back to the last known price.

use std::{sync::Arc, time::Duration};

use async_trait::async_trait;
use sysdep_protocol::{
    FetchError, PriceCache, PriceOracle, PricePoint, PriceSource, PriceSourceError,
};

use crate::{Metrics, PriceFeed};

/// Wraps a [`PriceFeed`] with a request timeout and a [`PriceCache`].
///
/// Every fetch is bounded by the timeout. A fetch that fails, times out, or reads zero is
/// answered with the last fresh price, reported as [`PricePoint::Stale`].
#[derive(Debug)]
pub struct FallbackSource<F> {
    feed: F,
    cache: Arc<PriceCache>,
    timeout: Duration,
}

impl<F: PriceFeed> FallbackSource<F> {
    /// Creates a new [`FallbackSource`] with an empty cache.
    pub fn new(feed: F, timeout: Duration) -> Self {
        Self::with_cache(feed, Arc::new(PriceCache::new()), timeout)
    }

    /// Creates a new [`FallbackSource`] backed by an existing cache.
    pub const fn with_cache(feed: F, cache: Arc<PriceCache>, timeout: Duration) -> Self {
        Self { feed, cache, timeout }
    }

    /// Returns the wrapped feed.
    pub const fn feed(&self) -> &F {
        &self.feed
    }

    /// Returns the cache holding the last known price.
    pub fn cache(&self) -> &PriceCache {
        &self.cache
    }

    /// Returns the request timeout.
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }
}

#[async_trait]
impl<F: PriceFeed> PriceSource for FallbackSource<F> {
    fn oracle(&self) -> PriceOracle {
        self.feed.oracle()
    }

    async fn fetch_price(&self) -> Result<PricePoint, PriceSourceError> {
        let oracle = self.feed.oracle();
        let start = std::time::Instant::now();

        let reading = match tokio::time::timeout(self.timeout, self.feed.latest_price()).await {
            Ok(reading) => reading,
            Err(_) => Err(FetchError::Timeout(self.timeout)),
        };
        let result = self.cache.resolve(oracle, reading);

        Metrics::record_fetch(oracle, &result, start.elapsed().as_secs_f64());
        result
    }
}

//! Test utilities for the price sources.

use std::{
    sync::atomic::{AtomicUsize, Ordering},
    time::Duration,
};

use alloy_primitives::U256;
use async_trait::async_trait;
use sysdep_protocol::{FetchError, PriceOracle};

use crate::PriceFeed;

/// A [`PriceFeed`] that replays a script of readings, repeating the last one.
#[derive(Debug)]
pub(crate) struct ScriptedFeed {
    oracle: PriceOracle,
    readings: Vec<Result<U256, FetchError>>,
    delay: Option<Duration>,
    calls: AtomicUsize,
}

impl ScriptedFeed {
    pub(crate) fn new(oracle: PriceOracle, readings: Vec<Result<U256, FetchError>>) -> Self {
        Self { oracle, readings, delay: None, calls: AtomicUsize::new(0) }
    }

    pub(crate) fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PriceFeed for ScriptedFeed {
    fn oracle(&self) -> PriceOracle {
        self.oracle
    }

    async fn latest_price(&self) -> Result<U256, FetchError> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        let index = call.min(self.readings.len().saturating_sub(1));
        self.readings.get(index).cloned().unwrap_or(Err(FetchError::EmptyReading))
    }
}

/// Installs a test subscriber so log output shows up in failing tests.
pub(crate) fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

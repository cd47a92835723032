//! Test utilities for system deposits.

use alloc::boxed::Box;
use alloy_primitives::{B256, U256, b256};
use async_trait::async_trait;

use crate::{L1BlockRef, PriceOracle, PricePoint, PriceSource, PriceSourceError};

/// Hash of the block returned by [`test_block`].
pub(crate) const TEST_BLOCK_HASH: B256 =
    b256!("1c4c84c50740386c7dc081efddd644405f04cde73e30a2e381737acce9f5add3");

/// Block 42, with no fee data.
pub(crate) const fn test_block() -> L1BlockRef {
    L1BlockRef::new(42, TEST_BLOCK_HASH)
}

/// A [`PriceSource`] that always returns the same result.
#[derive(Debug, Clone)]
pub(crate) struct MockPriceSource {
    oracle: PriceOracle,
    result: Result<PricePoint, PriceSourceError>,
}

impl MockPriceSource {
    pub(crate) const fn new(
        oracle: PriceOracle,
        result: Result<PricePoint, PriceSourceError>,
    ) -> Self {
        Self { oracle, result }
    }

    pub(crate) const fn fresh(oracle: PriceOracle, price: U256) -> Self {
        Self::new(oracle, Ok(PricePoint::Fresh(price)))
    }
}

#[async_trait]
impl PriceSource for MockPriceSource {
    fn oracle(&self) -> PriceOracle {
        self.oracle
    }

    async fn fetch_price(&self) -> Result<PricePoint, PriceSourceError> {
        self.result.clone()
    }
}

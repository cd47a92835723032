//! Accessors for the L1 block fields consumed by system deposits.

use alloy_consensus::{Header, Sealed};
use alloy_primitives::B256;

/// The subset of an L1 block that system deposits are derived from.
#[auto_impl::auto_impl(&, Arc)]
pub trait L1BlockFields {
    /// The block number.
    fn number(&self) -> u64;

    /// The block hash.
    fn hash(&self) -> B256;

    /// The base fee per gas, if the block is post-London.
    fn base_fee_per_gas(&self) -> Option<u64>;

    /// The total gas used by the block.
    fn gas_used(&self) -> u64;
}

impl L1BlockFields for Sealed<Header> {
    fn number(&self) -> u64 {
        self.inner().number
    }

    fn hash(&self) -> B256 {
        Self::hash(self)
    }

    fn base_fee_per_gas(&self) -> Option<u64> {
        self.inner().base_fee_per_gas
    }

    fn gas_used(&self) -> u64 {
        self.inner().gas_used
    }
}

/// A plain L1 block reference carrying only the fields read by system deposits.
#[derive(Debug, Clone, Copy, Default, Hash, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct L1BlockRef {
    /// The block number.
    pub number: u64,
    /// The block hash.
    pub hash: B256,
    /// The base fee per gas.
    pub base_fee_per_gas: Option<u64>,
    /// The total gas used.
    pub gas_used: u64,
}

impl L1BlockRef {
    /// Creates a new [`L1BlockRef`] from a number and hash, with no fee data.
    pub const fn new(number: u64, hash: B256) -> Self {
        Self { number, hash, base_fee_per_gas: None, gas_used: 0 }
    }

    /// Returns a copy of the reference with the given fee fields.
    pub const fn with_fees(mut self, base_fee_per_gas: u64, gas_used: u64) -> Self {
        self.base_fee_per_gas = Some(base_fee_per_gas);
        self.gas_used = gas_used;
        self
    }
}

impl L1BlockFields for L1BlockRef {
    fn number(&self) -> u64 {
        self.number
    }

    fn hash(&self) -> B256 {
        self.hash
    }

    fn base_fee_per_gas(&self) -> Option<u64> {
        self.base_fee_per_gas
    }

    fn gas_used(&self) -> u64 {
        self.gas_used
    }
}

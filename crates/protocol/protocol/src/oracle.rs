//! The price oracles that feed system deposits.

use alloy_primitives::{Address, address};

/// A price oracle whose readings are reported to L2 through a system deposit.
///
/// Every oracle has its own fixed reporter contract on L2.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, derive_more::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum PriceOracle {
    /// A Chainlink `AggregatorV3Interface` feed, read through an L1 contract call.
    #[display("chainlink")]
    Chainlink,
    /// The Coingecko simple price API.
    #[display("coingecko")]
    Coingecko,
    /// The Redstone prices API.
    #[display("redstone")]
    Redstone,
}

impl PriceOracle {
    /// The L2 reporter contract for Chainlink prices.
    pub const CHAINLINK_REPORTER: Address = address!("4081101F39205EdD2eE7aA2756D01bb2fFBe56e6");

    /// The L2 reporter contract for Coingecko prices.
    pub const COINGECKO_REPORTER: Address = address!("d197a45De818f46781e59267Fb86F026D34F884d");

    /// The L2 reporter contract for Redstone prices.
    pub const REDSTONE_REPORTER: Address = address!("5FdEd0D534D0D880760394fdF83A45aCFAD3ca99");

    /// All oracles.
    pub const ALL: [Self; 3] = [Self::Chainlink, Self::Coingecko, Self::Redstone];

    /// Returns the L2 contract that price reports from this oracle are sent to.
    pub const fn reporter_address(&self) -> Address {
        match self {
            Self::Chainlink => Self::CHAINLINK_REPORTER,
            Self::Coingecko => Self::COINGECKO_REPORTER,
            Self::Redstone => Self::REDSTONE_REPORTER,
        }
    }

    /// Returns the oracle's label, as used in logs and metrics.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Chainlink => "chainlink",
            Self::Coingecko => "coingecko",
            Self::Redstone => "redstone",
        }
    }
}

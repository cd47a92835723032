#![doc = include_str!("../README.md")]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

#[macro_use]
extern crate tracing;

mod block;
pub use block::{L1BlockFields, L1BlockRef};

mod fixed;
pub use fixed::{FixedPointError, WAD_DECIMALS, f64_to_wad, scale_to_wad};

mod oracle;
pub use oracle::PriceOracle;

mod reports;
pub use reports::{BurnError, BurnReport, DecodeError, PriceReport, SystemReport};

mod price;
pub use price::{FetchError, PriceCache, PricePoint, PriceSource, PriceSourceError};

mod deposits;
pub use deposits::{
    DepositBuilder, DepositError, DepositShape, ForkSchedule, PriceDeposit, REGOLITH_SYSTEM_TX_GAS,
    SYSTEM_TX_GAS, SystemAddresses, deposit_bytes,
};

#[cfg(test)]
pub(crate) mod test_utils;

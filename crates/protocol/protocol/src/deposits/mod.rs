//! Module containing the system deposit builder.

mod errors;
pub use errors::DepositError;

mod shape;
pub use shape::{DepositShape, ForkSchedule, REGOLITH_SYSTEM_TX_GAS, SYSTEM_TX_GAS};

mod builder;
pub use builder::{DepositBuilder, PriceDeposit, SystemAddresses, deposit_bytes};

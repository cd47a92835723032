//! Module containing the system report calldata types.
//!
//! Each report is a fixed-layout call into an L2 reporter contract: a 4 byte selector followed by
//! one 32 byte big-endian word per argument.

mod errors;
pub use errors::{BurnError, DecodeError};

mod price;
pub use price::PriceReport;

mod burn;
pub use burn::BurnReport;

mod variant;
pub use variant::SystemReport;

mod common;

#[allow(missing_docs, unreachable_pub, unnameable_types)]
mod calls {
    alloy_sol_types::sol! {
        /// Records a price reading for an L1 block.
        function recordPrice(uint256 number, uint256 price);

        /// Reports the L1 fee burn of an L1 block.
        function report(uint64 number, uint64 burn);
    }
}
pub(crate) use calls::{recordPriceCall, reportCall};

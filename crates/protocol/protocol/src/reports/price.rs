//! Contains the price report calldata type.

use alloc::vec::Vec;
use alloy_primitives::{Bytes, U256};
use alloy_sol_types::SolCall;

use super::{
    common::{check_header, read_u256, word, write_u256},
    recordPriceCall,
};
use crate::DecodeError;

/// A price reading for an L1 block, reported to an oracle's L2 reporter contract.
///
/// Price Report Binary Format
/// +---------+--------------------------+
/// | Bytes   | Field                    |
/// +---------+--------------------------+
/// | 4       | Function signature       |
/// | 32      | `Number`                   |
/// | 32      | `Price`                    |
/// +---------+--------------------------+
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PriceReport {
    /// The L1 block number the price was read at.
    pub number: U256,
    /// The price, as an 18-decimal fixed point integer.
    pub price: U256,
}

impl PriceReport {
    /// The canonical signature of the reporter call.
    pub const SIGNATURE: &'static str = "recordPrice(uint256,uint256)";

    /// The 4 byte selector of "`recordPrice(uint256,uint256)`".
    pub const SELECTOR: [u8; 4] = recordPriceCall::SELECTOR;

    /// The number of call arguments.
    pub const ARGUMENTS: usize = 2;

    /// The length of an encoded price report.
    pub const LEN: usize = 4 + 32 * Self::ARGUMENTS;

    /// Creates a new [`PriceReport`] for the given L1 block number.
    pub fn new(number: u64, price: U256) -> Self {
        Self { number: U256::from(number), price }
    }

    /// Encodes the [`PriceReport`] into reporter calldata.
    pub fn encode_calldata(&self) -> Bytes {
        let mut buf = Vec::with_capacity(Self::LEN);
        buf.extend_from_slice(&Self::SELECTOR);
        write_u256(&mut buf, self.number);
        write_u256(&mut buf, self.price);
        buf.into()
    }

    /// Decodes a [`PriceReport`] from reporter calldata.
    pub fn decode_calldata(r: &[u8]) -> Result<Self, DecodeError> {
        check_header(r, Self::LEN, Self::SELECTOR)?;
        Ok(Self { number: read_u256(word(r, 0)), price: read_u256(word(r, 1)) })
    }
}

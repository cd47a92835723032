//! Contains the L1 burn report calldata type and the burn accountant.

use alloc::vec::Vec;
use alloy_primitives::{Address, Bytes, address};
use alloy_sol_types::SolCall;

use super::{
    common::{check_header, read_u64, word, write_u64},
    reportCall,
};
use crate::{BurnError, DecodeError, L1BlockFields};

/// The L1 fee burn of an L1 block.
///
/// L1 Burn Report Binary Format
/// +---------+--------------------------+
/// | Bytes   | Field                    |
/// +---------+--------------------------+
/// | 4       | Function signature       |
/// | 24      | Padding                  |
/// | 8       | `Number`                   |
/// | 24      | Padding                  |
/// | 8       | `Burn`                     |
/// +---------+--------------------------+
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BurnReport {
    /// The L1 block number.
    pub number: u64,
    /// The amount of ether burned by the block's base fee, in wei.
    pub burn: u64,
}

impl BurnReport {
    /// The canonical signature of the reporter call.
    pub const SIGNATURE: &'static str = "report(uint64,uint64)";

    /// The 4 byte selector of "`report(uint64,uint64)`".
    pub const SELECTOR: [u8; 4] = reportCall::SELECTOR;

    /// The number of call arguments.
    pub const ARGUMENTS: usize = 2;

    /// The length of an encoded burn report.
    pub const LEN: usize = 4 + 32 * Self::ARGUMENTS;

    /// The L2 contract that burn reports are sent to.
    pub const REPORTER: Address = address!("4081101F39205EdD2eE7aA2756D01bb2fFBe56e6");

    /// Computes the burn report of an L1 block as `base_fee_per_gas * gas_used`.
    ///
    /// Blocks without a base fee burn nothing.
    pub fn compute<B: L1BlockFields>(block: &B) -> Result<Self, BurnError> {
        let base_fee = block.base_fee_per_gas().unwrap_or_default();
        let gas_used = block.gas_used();
        let burn = base_fee
            .checked_mul(gas_used)
            .ok_or(BurnError::ArithmeticOverflow { base_fee, gas_used })?;
        Ok(Self { number: block.number(), burn })
    }

    /// Encodes the [`BurnReport`] into reporter calldata.
    pub fn encode_calldata(&self) -> Bytes {
        let mut buf = Vec::with_capacity(Self::LEN);
        buf.extend_from_slice(&Self::SELECTOR);
        write_u64(&mut buf, self.number);
        write_u64(&mut buf, self.burn);
        buf.into()
    }

    /// Decodes a [`BurnReport`] from reporter calldata.
    pub fn decode_calldata(r: &[u8]) -> Result<Self, DecodeError> {
        check_header(r, Self::LEN, Self::SELECTOR)?;
        let number = read_u64(word(r, 0), "number")?;
        let burn = read_u64(word(r, 1), "burn")?;
        Ok(Self { number, burn })
    }
}

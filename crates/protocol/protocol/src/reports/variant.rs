//! Contains the `SystemReport` enum, covering every report kind a system deposit can carry.

use alloy_primitives::{Bytes, U256};
use op_alloy_consensus::TxDeposit;

use crate::{BurnReport, DecodeError, PriceReport};

/// A decoded system report.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SystemReport {
    /// A price reading from one of the price oracles.
    Price(PriceReport),
    /// The L1 fee burn of a block.
    Burn(BurnReport),
}

impl SystemReport {
    /// Decodes a [`SystemReport`] from calldata, dispatching on its selector.
    pub fn decode_calldata(r: &[u8]) -> Result<Self, DecodeError> {
        if r.len() < 4 {
            return Err(DecodeError::MissingSelector);
        }
        // SAFETY: The length of `r` must be at least 4 bytes.
        let mut selector = [0u8; 4];
        selector.copy_from_slice(&r[0..4]);
        match selector {
            PriceReport::SELECTOR => PriceReport::decode_calldata(r).map(Self::Price),
            BurnReport::SELECTOR => BurnReport::decode_calldata(r).map(Self::Burn),
            _ => Err(DecodeError::SelectorMismatch(selector)),
        }
    }

    /// Decodes the report carried by a system deposit.
    pub fn from_deposit(tx: &TxDeposit) -> Result<Self, DecodeError> {
        Self::decode_calldata(&tx.input)
    }

    /// Encodes the [`SystemReport`] into calldata.
    pub fn encode_calldata(&self) -> Bytes {
        match self {
            Self::Price(report) => report.encode_calldata(),
            Self::Burn(report) => report.encode_calldata(),
        }
    }

    /// Returns the L1 block number the report was derived from.
    pub fn number(&self) -> U256 {
        match self {
            Self::Price(report) => report.number,
            Self::Burn(report) => U256::from(report.number),
        }
    }
}

impl From<PriceReport> for SystemReport {
    fn from(report: PriceReport) -> Self {
        Self::Price(report)
    }
}

impl From<BurnReport> for SystemReport {
    fn from(report: BurnReport) -> Self {
        Self::Burn(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::{string::ToString, vec::Vec};

    #[test]
    fn test_system_report_missing_selector() {
        assert_eq!(SystemReport::decode_calldata(&[0x01, 0x02]), Err(DecodeError::MissingSelector));
    }

    #[test]
    fn test_system_report_unknown_selector() {
        let err = SystemReport::decode_calldata(&[0xde, 0xad, 0xbe, 0xef]);
        assert_eq!(err, Err(DecodeError::SelectorMismatch([0xde, 0xad, 0xbe, 0xef])));
    }

    #[test]
    fn test_system_report_invalid_len() {
        let calldata = BurnReport::SELECTOR.into_iter().chain([0xde, 0xad]).collect::<Vec<u8>>();
        let err = SystemReport::decode_calldata(&calldata).unwrap_err();
        assert_eq!(err.to_string(), "Invalid report length. Expected 68, got 6");
    }

    #[test]
    fn test_system_report_dispatch() {
        let price = PriceReport::new(7, U256::from(3));
        let burn = BurnReport { number: 8, burn: 700 };

        let decoded = SystemReport::decode_calldata(&price.encode_calldata()).unwrap();
        assert_eq!(decoded, SystemReport::Price(price));
        assert_eq!(decoded.number(), U256::from(7));

        let decoded = SystemReport::decode_calldata(&burn.encode_calldata()).unwrap();
        assert_eq!(decoded, SystemReport::Burn(burn));
        assert_eq!(decoded.encode_calldata(), burn.encode_calldata());
    }

    #[test]
    fn test_system_report_from_deposit() {
        let report = PriceReport::new(9, U256::from(1_000));
        let tx = crate::DepositBuilder::system_deposit(
            alloy_primitives::B256::ZERO,
            0,
            crate::PriceOracle::REDSTONE_REPORTER,
            report.encode_calldata(),
            true,
        );
        assert_eq!(SystemReport::from_deposit(&tx), Ok(SystemReport::Price(report)));
    }
}

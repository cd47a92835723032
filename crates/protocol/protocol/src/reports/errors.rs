//! Contains error types for system report calldata.

/// An error decoding system report calldata.
#[derive(Debug, thiserror::Error, PartialEq, Eq, Copy, Clone)]
pub enum DecodeError {
    /// The calldata is too short to carry a selector.
    #[error("The provided calldata is too short, missing the 4 selector bytes")]
    MissingSelector,
    /// The calldata length does not match the report's fixed layout.
    #[error("Invalid report length. Expected {expected}, got {actual}")]
    LengthMismatch {
        /// The fixed length of the report.
        expected: usize,
        /// The length of the provided calldata.
        actual: usize,
    },
    /// The selector does not belong to the expected report.
    #[error("Invalid report selector {0:02x?}")]
    SelectorMismatch([u8; 4]),
    /// A narrow integer word has non-zero padding.
    #[error("Report field `{0}` exceeds its integer width")]
    ValueOutOfRange(&'static str),
}

/// An error computing the L1 fee burn of a block.
#[derive(Debug, thiserror::Error, PartialEq, Eq, Copy, Clone)]
pub enum BurnError {
    /// `base_fee_per_gas * gas_used` does not fit in 64 bits.
    #[error("L1 burn overflows u64: base fee {base_fee} * gas used {gas_used}")]
    ArithmeticOverflow {
        /// The block base fee.
        base_fee: u64,
        /// The block gas used.
        gas_used: u64,
    },
}

//! Word-level helpers shared by the report codecs.

use alloc::vec::Vec;
use alloy_primitives::U256;

use crate::DecodeError;

/// The width of an ABI word.
pub(crate) const WORD: usize = 32;

/// The number of zero bytes in front of a `uint64` word.
const U64_PADDING: usize = WORD - 8;

/// Validates the length and selector of a fixed-layout report.
pub(crate) fn check_header(r: &[u8], len: usize, selector: [u8; 4]) -> Result<(), DecodeError> {
    if r.len() != len {
        return Err(DecodeError::LengthMismatch { expected: len, actual: r.len() });
    }
    let mut found = [0u8; 4];
    found.copy_from_slice(&r[..4]);
    if found != selector {
        return Err(DecodeError::SelectorMismatch(found));
    }
    Ok(())
}

/// Returns the `index`th argument word of validated calldata.
pub(crate) fn word(r: &[u8], index: usize) -> &[u8] {
    let start = 4 + index * WORD;
    &r[start..start + WORD]
}

pub(crate) fn write_u256(buf: &mut Vec<u8>, value: U256) {
    buf.extend_from_slice(&value.to_be_bytes::<WORD>());
}

pub(crate) fn write_u64(buf: &mut Vec<u8>, value: u64) {
    buf.extend_from_slice(&[0u8; U64_PADDING]);
    buf.extend_from_slice(&value.to_be_bytes());
}

pub(crate) fn read_u256(word: &[u8]) -> U256 {
    U256::from_be_slice(word)
}

/// Reads a `uint64` word, rejecting any set bit above the low 8 bytes.
pub(crate) fn read_u64(word: &[u8], field: &'static str) -> Result<u64, DecodeError> {
    if word[..U64_PADDING].iter().any(|b| *b != 0) {
        return Err(DecodeError::ValueOutOfRange(field));
    }
    let mut be = [0u8; 8];
    be.copy_from_slice(&word[U64_PADDING..]);
    Ok(u64::from_be_bytes(be))
}

use super::crypto::Scalar;
use crate::bls12_381_const::{FP_LENGTH, FP_PAD_BY, PADDED_FP_LENGTH, SCALAR_LENGTH};
use crate::PrecompileError;
use primitives::{Bytes, B256};

/// Removes zeros with which the precompile inputs are left padded to 64 bytes.
///
/// Only the padding is checked here. Whether the remaining 48 bytes are below
/// the modulus is decided by the backend.
pub(super) fn remove_fp_padding(input: &[u8]) -> Result<&[u8; FP_LENGTH], PrecompileError> {
    if input.len() != PADDED_FP_LENGTH {
        return Err(PrecompileError::InvalidInputLength);
    }
    let (padding, unpadded) = input.split_at(FP_PAD_BY);
    if !padding.iter().all(|&x| x == 0) {
        return Err(PrecompileError::InvalidFieldElementPadding);
    }
    unpadded
        .try_into()
        .map_err(|_| PrecompileError::InvalidInputLength)
}

/// Left pads a 48 byte field element with 16 zero bytes, writing into `out`.
pub(super) fn pad_fp(out: &mut [u8], fp: &[u8]) {
    debug_assert_eq!(out.len(), PADDED_FP_LENGTH);
    debug_assert_eq!(fp.len(), FP_LENGTH);
    let (padding, rest) = out.split_at_mut(FP_PAD_BY);
    padding.fill(0);
    rest.copy_from_slice(fp);
}

/// Extracts a scalar from a 32 byte slice representation.
///
/// The value is not required to be less than the subgroup order.
pub(super) fn read_scalar(input: &[u8]) -> Result<Scalar, PrecompileError> {
    if input.len() != SCALAR_LENGTH {
        return Err(PrecompileError::InvalidInputLength);
    }
    input
        .try_into()
        .map_err(|_| PrecompileError::InvalidInputLength)
}

/// Number of `unit` sized slices in a variable length input.
///
/// Returns `None` for an empty input or a length that is not a multiple of
/// `unit`.
pub(super) fn pair_count(input_len: usize, unit: usize) -> Option<usize> {
    if input_len == 0 || input_len % unit != 0 {
        return None;
    }
    Some(input_len / unit)
}

/// Encodes a boolean as a 32 byte big-endian `uint256` of 0 or 1.
pub(super) fn encode_bool(value: bool) -> Bytes {
    Bytes::copy_from_slice(B256::with_last_byte(u8::from(value)).as_slice())
}

use super::crypto::Bls12381;
use super::utils::{pad_fp, remove_fp_padding};
use crate::bls12_381_const::{
    FP2_LENGTH, FP_LENGTH, G2_LENGTH, PADDED_FP2_LENGTH, PADDED_FP_LENGTH, PADDED_G2_LENGTH,
};
use crate::PrecompileError;
use primitives::Bytes;

/// Position, in library order, of the limb carried by each wire slot.
///
/// The ABI writes every Fp2 coordinate as `c0 ‖ c1` while the library orders
/// it `c1 ‖ c0`, so slot `i` of the wire lands at limb `i ^ 1`. The mapping is
/// its own inverse and serves both directions.
#[inline]
const fn swap_limb(slot: usize) -> usize {
    slot ^ 1
}

/// Encodes a G2 point into its 256 byte ABI form:
/// `x.c0 ‖ x.c1 ‖ y.c0 ‖ y.c1`, each limb left padded to 64 bytes.
/// Infinity encodes as all zeros.
pub(super) fn encode_g2<B: Bls12381>(point: &B::G2) -> Bytes {
    let unpadded = B::g2_to_bytes(point);
    let mut out = vec![0u8; PADDED_G2_LENGTH];
    for (slot, padded) in out.chunks_exact_mut(PADDED_FP_LENGTH).enumerate() {
        let limb = swap_limb(slot) * FP_LENGTH;
        pad_fp(padded, &unpadded[limb..limb + FP_LENGTH]);
    }
    out.into()
}

/// Extracts a G2 point from a 256 byte slice representation.
///
/// The point is checked to be on the curve. No subgroup check is performed.
pub(super) fn decode_g2<B: Bls12381>(input: &[u8]) -> Result<B::G2, PrecompileError> {
    if input.len() != PADDED_G2_LENGTH {
        return Err(PrecompileError::InvalidInputLength);
    }

    let mut unpadded = [0u8; G2_LENGTH];
    read_swapped(&mut unpadded, input)?;
    B::g2_from_bytes(&unpadded)
}

/// Extracts an Fp2 element from its 128 byte `c0 ‖ c1` ABI form into library
/// order `c1 ‖ c0`.
pub(super) fn decode_fp2(input: &[u8]) -> Result<[u8; FP2_LENGTH], PrecompileError> {
    if input.len() != PADDED_FP2_LENGTH {
        return Err(PrecompileError::InvalidInputLength);
    }

    let mut unpadded = [0u8; FP2_LENGTH];
    read_swapped(&mut unpadded, input)?;
    Ok(unpadded)
}

fn read_swapped(out: &mut [u8], input: &[u8]) -> Result<(), PrecompileError> {
    for (slot, padded) in input.chunks_exact(PADDED_FP_LENGTH).enumerate() {
        let limb = swap_limb(slot) * FP_LENGTH;
        out[limb..limb + FP_LENGTH].copy_from_slice(remove_fp_padding(padded)?);
    }
    Ok(())
}

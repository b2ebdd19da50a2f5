//! BLS12-381 pairing precompile. More details in [`pairing`]
use super::crypto::Bls12381;
use super::g1::decode_g1;
use super::g2::decode_g2;
use super::utils::{encode_bool, pair_count};
use super::Blst;
use crate::bls12_381_const::{PADDED_G1_LENGTH, PAIRING_ADDRESS, PAIRING_INPUT_LENGTH};
use crate::bls12_381_utils::pairing_required_gas;
use crate::{Precompile, PrecompileError, PrecompileId, PrecompileResult};
use tracing::trace;

/// [EIP-2537](https://eips.ethereum.org/EIPS/eip-2537#specification) BLS12_PAIRING precompile.
pub const PRECOMPILE: Precompile = Precompile::new(
    PrecompileId::Pairing,
    PAIRING_ADDRESS,
    pairing_required_gas,
    pairing::<Blst>,
);

/// Pairing call expects 384*k (k being a positive integer) bytes as an inputs
/// that is interpreted as byte concatenation of k slices. Each slice has the
/// following structure:
///    * 128 bytes of G1 point encoding
///    * 256 bytes of G2 point encoding
///
/// Each point is expected to be in the subgroup of order q.
/// Output is 32 bytes where first 31 bytes are equal to 0x00 and the last byte
/// is 0x01 if pairing result is equal to the multiplicative identity in a pairing
/// target field and 0x00 otherwise.
///
/// See also: <https://eips.ethereum.org/EIPS/eip-2537#abi-for-pairing>
pub fn pairing<B: Bls12381>(input: &[u8]) -> PrecompileResult {
    let k = pair_count(input.len(), PAIRING_INPUT_LENGTH)
        .ok_or(PrecompileError::InvalidInputLength)?;

    let mut pairs = Vec::with_capacity(k);
    for (i, slice) in input.chunks_exact(PAIRING_INPUT_LENGTH).enumerate() {
        let (encoded_g1, encoded_g2) = slice.split_at(PADDED_G1_LENGTH);
        let g1 = decode_g1::<B>(encoded_g1)?;
        let g2 = decode_g2::<B>(encoded_g2)?;

        // NB: Pairings MUST perform a subgroup check.
        if !B::g1_in_subgroup(&g1) {
            trace!("pairing input {i}: g1 point outside subgroup");
            return Err(PrecompileError::G1SubgroupError);
        }
        if !B::g2_in_subgroup(&g2) {
            trace!("pairing input {i}: g2 point outside subgroup");
            return Err(PrecompileError::G2SubgroupError);
        }

        pairs.push((g1, g2));
    }

    Ok(encode_bool(B::pairing_check(&pairs)))
}

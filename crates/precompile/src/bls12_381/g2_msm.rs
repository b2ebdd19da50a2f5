//! BLS12-381 G2 msm precompile. More details in [`g2_msm`]
use super::crypto::Bls12381;
use super::g2::{decode_g2, encode_g2};
use super::utils::{pair_count, read_scalar};
use super::Blst;
use crate::bls12_381_const::{G2_MULTIEXP_ADDRESS, G2_MULTIEXP_INPUT_LENGTH, PADDED_G2_LENGTH};
use crate::bls12_381_utils::g2_multiexp_required_gas;
use crate::{Precompile, PrecompileError, PrecompileId, PrecompileResult};

/// [EIP-2537](https://eips.ethereum.org/EIPS/eip-2537#specification) BLS12_G2MULTIEXP precompile.
pub const PRECOMPILE: Precompile = Precompile::new(
    PrecompileId::G2MultiExp,
    G2_MULTIEXP_ADDRESS,
    g2_multiexp_required_gas,
    g2_msm::<Blst>,
);

/// Implements EIP-2537 G2MULTIEXP precompile logic
///
/// G2 multi-scalar-multiplication call expects `288*k` bytes as an input that is interpreted
/// as byte concatenation of `k` slices each of them being a byte concatenation
/// of encoding of G2 point (`256` bytes) and encoding of a scalar value (`32`
/// bytes).
///
/// Output is an encoding of multi-scalar-multiplication operation result - single G2
/// point (`256` bytes).
/// See also: <https://eips.ethereum.org/EIPS/eip-2537#abi-for-g2-multiexponentiation>
pub fn g2_msm<B: Bls12381>(input: &[u8]) -> PrecompileResult {
    let k = pair_count(input.len(), G2_MULTIEXP_INPUT_LENGTH)
        .ok_or(PrecompileError::InvalidInputLength)?;

    let mut pairs = Vec::with_capacity(k);
    for slice in input.chunks_exact(G2_MULTIEXP_INPUT_LENGTH) {
        let (encoded_point, encoded_scalar) = slice.split_at(PADDED_G2_LENGTH);
        pairs.push((decode_g2::<B>(encoded_point)?, read_scalar(encoded_scalar)?));
    }

    Ok(encode_g2::<B>(&B::g2_msm(&pairs)))
}

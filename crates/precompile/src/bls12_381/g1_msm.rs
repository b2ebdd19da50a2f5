//! BLS12-381 G1 msm precompile. More details in [`g1_msm`]
use super::crypto::Bls12381;
use super::g1::{decode_g1, encode_g1};
use super::utils::{pair_count, read_scalar};
use super::Blst;
use crate::bls12_381_const::{G1_MULTIEXP_ADDRESS, G1_MULTIEXP_INPUT_LENGTH, PADDED_G1_LENGTH};
use crate::bls12_381_utils::g1_multiexp_required_gas;
use crate::{Precompile, PrecompileError, PrecompileId, PrecompileResult};

/// [EIP-2537](https://eips.ethereum.org/EIPS/eip-2537#specification) BLS12_G1MULTIEXP precompile.
pub const PRECOMPILE: Precompile = Precompile::new(
    PrecompileId::G1MultiExp,
    G1_MULTIEXP_ADDRESS,
    g1_multiexp_required_gas,
    g1_msm::<Blst>,
);

/// Implements EIP-2537 G1MULTIEXP precompile.
/// G1 multi-scalar-multiplication call expects `160*k` bytes as an input that is interpreted
/// as byte concatenation of `k` slices each of them being a byte concatenation
/// of encoding of G1 point (`128` bytes) and encoding of a scalar value (`32`
/// bytes).
/// Output is an encoding of multi-scalar-multiplication operation result - single G1
/// point (`128` bytes).
///
/// Every point is validated before any arithmetic, including points paired
/// with a zero scalar.
/// See also: <https://eips.ethereum.org/EIPS/eip-2537#abi-for-g1-multiexponentiation>
pub fn g1_msm<B: Bls12381>(input: &[u8]) -> PrecompileResult {
    let k = pair_count(input.len(), G1_MULTIEXP_INPUT_LENGTH)
        .ok_or(PrecompileError::InvalidInputLength)?;

    let mut pairs = Vec::with_capacity(k);
    for slice in input.chunks_exact(G1_MULTIEXP_INPUT_LENGTH) {
        let (encoded_point, encoded_scalar) = slice.split_at(PADDED_G1_LENGTH);
        let point = decode_g1::<B>(encoded_point)?;
        let scalar = read_scalar(encoded_scalar)?;
        pairs.push((point, scalar));
    }

    Ok(encode_g1::<B>(&B::g1_msm(&pairs)))
}

//! BLS12-381 G1 mul precompile. More details in [`g1_mul`]
use super::crypto::Bls12381;
use super::g1::{decode_g1, encode_g1};
use super::utils::read_scalar;
use super::Blst;
use crate::bls12_381_const::{G1_MUL_ADDRESS, G1_MUL_INPUT_LENGTH, PADDED_G1_LENGTH};
use crate::bls12_381_utils::g1_mul_required_gas;
use crate::{Precompile, PrecompileError, PrecompileId, PrecompileResult};

/// [EIP-2537](https://eips.ethereum.org/EIPS/eip-2537#specification) BLS12_G1MUL precompile.
pub const PRECOMPILE: Precompile = Precompile::new(
    PrecompileId::G1Mul,
    G1_MUL_ADDRESS,
    g1_mul_required_gas,
    g1_mul::<Blst>,
);

/// G1 multiplication call expects `160` bytes as an input that is interpreted as
/// byte concatenation of encoding of G1 point (`128` bytes) and encoding of a
/// scalar value (`32` bytes).
/// Output is an encoding of multiplication operation result - single G1 point
/// (`128` bytes).
/// See also: <https://eips.ethereum.org/EIPS/eip-2537#abi-for-g1-multiplication>
pub fn g1_mul<B: Bls12381>(input: &[u8]) -> PrecompileResult {
    if input.len() != G1_MUL_INPUT_LENGTH {
        return Err(PrecompileError::InvalidInputLength);
    }

    let point = decode_g1::<B>(&input[..PADDED_G1_LENGTH])?;
    let scalar = read_scalar(&input[PADDED_G1_LENGTH..])?;

    Ok(encode_g1::<B>(&B::g1_mul(&point, &scalar)))
}

//! BLS12-381 G2 mul precompile. More details in [`g2_mul`]
use super::crypto::Bls12381;
use super::g2::{decode_g2, encode_g2};
use super::utils::read_scalar;
use super::Blst;
use crate::bls12_381_const::{G2_MUL_ADDRESS, G2_MUL_INPUT_LENGTH, PADDED_G2_LENGTH};
use crate::bls12_381_utils::g2_mul_required_gas;
use crate::{Precompile, PrecompileError, PrecompileId, PrecompileResult};

/// [EIP-2537](https://eips.ethereum.org/EIPS/eip-2537#specification) BLS12_G2MUL precompile.
pub const PRECOMPILE: Precompile = Precompile::new(
    PrecompileId::G2Mul,
    G2_MUL_ADDRESS,
    g2_mul_required_gas,
    g2_mul::<Blst>,
);

/// G2 multiplication call expects `288` bytes as an input that is interpreted as
/// byte concatenation of encoding of G2 point (`256` bytes) and encoding of a
/// scalar value (`32` bytes).
/// Output is an encoding of multiplication operation result - single G2 point
/// (`256` bytes).
/// See also: <https://eips.ethereum.org/EIPS/eip-2537#abi-for-g2-multiplication>
pub fn g2_mul<B: Bls12381>(input: &[u8]) -> PrecompileResult {
    if input.len() != G2_MUL_INPUT_LENGTH {
        return Err(PrecompileError::InvalidInputLength);
    }

    let point = decode_g2::<B>(&input[..PADDED_G2_LENGTH])?;
    let scalar = read_scalar(&input[PADDED_G2_LENGTH..])?;

    Ok(encode_g2::<B>(&B::g2_mul(&point, &scalar)))
}

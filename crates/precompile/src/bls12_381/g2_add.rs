//! BLS12-381 G2 add precompile. More details in [`g2_add`]
use super::crypto::Bls12381;
use super::g2::{decode_g2, encode_g2};
use super::Blst;
use crate::bls12_381_const::{G2_ADD_ADDRESS, G2_ADD_INPUT_LENGTH, PADDED_G2_LENGTH};
use crate::bls12_381_utils::g2_add_required_gas;
use crate::{Precompile, PrecompileError, PrecompileId, PrecompileResult};

/// [EIP-2537](https://eips.ethereum.org/EIPS/eip-2537#specification) BLS12_G2ADD precompile.
pub const PRECOMPILE: Precompile = Precompile::new(
    PrecompileId::G2Add,
    G2_ADD_ADDRESS,
    g2_add_required_gas,
    g2_add::<Blst>,
);

/// G2 addition call expects `512` bytes as an input that is interpreted as byte
/// concatenation of two G2 points (`256` bytes each).
///
/// Output is an encoding of addition operation result - single G2 point (`256`
/// bytes).
/// See also <https://eips.ethereum.org/EIPS/eip-2537#abi-for-g2-addition>
pub fn g2_add<B: Bls12381>(input: &[u8]) -> PrecompileResult {
    if input.len() != G2_ADD_INPUT_LENGTH {
        return Err(PrecompileError::InvalidInputLength);
    }

    let a = decode_g2::<B>(&input[..PADDED_G2_LENGTH])?;
    let b = decode_g2::<B>(&input[PADDED_G2_LENGTH..])?;

    Ok(encode_g2::<B>(&B::g2_add(&a, &b)))
}

//! BLS12-381 G1 add precompile. More details in [`g1_add`]
use super::crypto::Bls12381;
use super::g1::{decode_g1, encode_g1};
use super::Blst;
use crate::bls12_381_const::{G1_ADD_ADDRESS, G1_ADD_INPUT_LENGTH, PADDED_G1_LENGTH};
use crate::bls12_381_utils::g1_add_required_gas;
use crate::{Precompile, PrecompileError, PrecompileId, PrecompileResult};

/// [EIP-2537](https://eips.ethereum.org/EIPS/eip-2537#specification) BLS12_G1ADD precompile.
pub const PRECOMPILE: Precompile = Precompile::new(
    PrecompileId::G1Add,
    G1_ADD_ADDRESS,
    g1_add_required_gas,
    g1_add::<Blst>,
);

/// G1 addition call expects `256` bytes as an input that is interpreted as byte
/// concatenation of two G1 points (`128` bytes each).
/// Output is an encoding of addition operation result - single G1 point (`128`
/// bytes).
///
/// No subgroup check is performed.
/// See also: <https://eips.ethereum.org/EIPS/eip-2537#abi-for-g1-addition>
pub fn g1_add<B: Bls12381>(input: &[u8]) -> PrecompileResult {
    if input.len() != G1_ADD_INPUT_LENGTH {
        return Err(PrecompileError::InvalidInputLength);
    }

    let a = decode_g1::<B>(&input[..PADDED_G1_LENGTH])?;
    let b = decode_g1::<B>(&input[PADDED_G1_LENGTH..])?;

    Ok(encode_g1::<B>(&B::g1_add(&a, &b)))
}

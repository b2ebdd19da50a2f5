//! BLS12-381 map fp2 to g2 precompile. More details in [`map_fp2_to_g2`]
use super::crypto::Bls12381;
use super::g2::{decode_fp2, encode_g2};
use super::Blst;
use crate::bls12_381_const::{MAP_FP2_TO_G2_ADDRESS, MAP_FP2_TO_G2_INPUT_LENGTH};
use crate::bls12_381_utils::map_fp2_to_g2_required_gas;
use crate::{Precompile, PrecompileError, PrecompileId, PrecompileResult};

/// [EIP-2537](https://eips.ethereum.org/EIPS/eip-2537#specification) BLS12_MAP_FP2_TO_G2 precompile.
pub const PRECOMPILE: Precompile = Precompile::new(
    PrecompileId::MapFp2ToG2,
    MAP_FP2_TO_G2_ADDRESS,
    map_fp2_to_g2_required_gas,
    map_fp2_to_g2::<Blst>,
);

/// Field-to-curve call expects 128 bytes as an input that is interpreted as
/// an element of Fp2, `c0` first. Output of this call is 256 bytes and is an
/// encoded G2 point.
/// See also: <https://eips.ethereum.org/EIPS/eip-2537#abi-for-mapping-fp2-element-to-g2-point>
pub fn map_fp2_to_g2<B: Bls12381>(input: &[u8]) -> PrecompileResult {
    if input.len() != MAP_FP2_TO_G2_INPUT_LENGTH {
        return Err(PrecompileError::InvalidInputLength);
    }

    let fp2 = decode_fp2(input)?;
    Ok(encode_g2::<B>(&B::map_fp2_to_g2(&fp2)?))
}

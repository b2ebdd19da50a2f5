//! BLS12-381 map fp to g1 precompile. More details in [`map_fp_to_g1`]
use super::crypto::Bls12381;
use super::g1::encode_g1;
use super::utils::remove_fp_padding;
use super::Blst;
use crate::bls12_381_const::{MAP_FP_TO_G1_ADDRESS, MAP_FP_TO_G1_INPUT_LENGTH};
use crate::bls12_381_utils::map_fp_to_g1_required_gas;
use crate::{Precompile, PrecompileError, PrecompileId, PrecompileResult};

/// [EIP-2537](https://eips.ethereum.org/EIPS/eip-2537#specification) BLS12_MAP_FP_TO_G1 precompile.
pub const PRECOMPILE: Precompile = Precompile::new(
    PrecompileId::MapFpToG1,
    MAP_FP_TO_G1_ADDRESS,
    map_fp_to_g1_required_gas,
    map_fp_to_g1::<Blst>,
);

/// Field-to-curve call expects 64 bytes as an input that is interpreted as an
/// element of Fp. Output of this call is 128 bytes and is an encoded G1 point.
/// See also: <https://eips.ethereum.org/EIPS/eip-2537#abi-for-mapping-fp-element-to-g1-point>
pub fn map_fp_to_g1<B: Bls12381>(input: &[u8]) -> PrecompileResult {
    if input.len() != MAP_FP_TO_G1_INPUT_LENGTH {
        return Err(PrecompileError::InvalidInputLength);
    }

    let fp = remove_fp_padding(input)?;
    Ok(encode_g1::<B>(&B::map_fp_to_g1(fp)?))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::bls12_381::g1::decode_g1;
    use crate::bls12_381_const::{FP_PAD_BY, MODULUS_REPR, PADDED_FP_LENGTH};
    use primitives::hex;
    use rstest::rstest;

    #[rstest]
    #[case::zero([0u8; PADDED_FP_LENGTH])]
    #[case::small(hex!("00000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000007"))]
    #[case::modulus_minus_one(hex!("000000000000000000000000000000001a0111ea397fe69a4b1ba7b6434bacd764774b84f38512bf6730d2a0f6b0f6241eabfffeb153ffffb9feffffffffaaaa"))]
    fn maps_into_subgroup(#[case] input: [u8; PADDED_FP_LENGTH]) {
        let out = map_fp_to_g1::<Blst>(&input).unwrap();
        let point = decode_g1::<Blst>(&out).unwrap();
        assert!(Blst::g1_in_subgroup(&point));
    }

    #[test]
    fn known_answer() {
        let mut input = [0u8; PADDED_FP_LENGTH];
        input[PADDED_FP_LENGTH - 1] = 7;
        let expected = hex!("0000000000000000000000000000000007f4f7db3160c952a4611ea09b4d899d880757313b5ce179eb49f5be483f06734378f17ec3a29c057a78d3bcd08505b400000000000000000000000000000000140bfc616d52a0f0e714b64985ecb3effb1f1faaadcefeb1cf72fb2b17b6aaf7d50cde06289c9d4ba937eede3fc43bf2");
        assert_eq!(&map_fp_to_g1::<Blst>(&input).unwrap()[..], &expected[..]);
    }

    #[test]
    fn rejects_modulus() {
        let mut input = [0u8; PADDED_FP_LENGTH];
        input[FP_PAD_BY..].copy_from_slice(&MODULUS_REPR);
        assert_eq!(
            map_fp_to_g1::<Blst>(&input),
            Err(PrecompileError::MapToCurveError)
        );
    }

    #[test]
    fn rejects_padding() {
        let mut input = [0u8; PADDED_FP_LENGTH];
        input[0] = 1;
        assert_eq!(
            map_fp_to_g1::<Blst>(&input),
            Err(PrecompileError::InvalidFieldElementPadding)
        );
    }

    #[rstest]
    #[case::empty(0)]
    #[case::unpadded(48)]
    #[case::fp2_sized(128)]
    fn rejects_length(#[case] len: usize) {
        assert_eq!(
            map_fp_to_g1::<Blst>(&vec![0u8; len]),
            Err(PrecompileError::InvalidInputLength)
        );
    }
}

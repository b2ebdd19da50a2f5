use super::crypto::Bls12381;
use super::utils::{pad_fp, remove_fp_padding};
use crate::bls12_381_const::{FP_LENGTH, G1_LENGTH, PADDED_FP_LENGTH, PADDED_G1_LENGTH};
use crate::PrecompileError;
use primitives::Bytes;

/// Encodes a G1 point into its 128 byte ABI form: `x ‖ y`, each coordinate
/// left padded to 64 bytes. Infinity encodes as all zeros.
pub(super) fn encode_g1<B: Bls12381>(point: &B::G1) -> Bytes {
    let unpadded = B::g1_to_bytes(point);
    let mut out = vec![0u8; PADDED_G1_LENGTH];
    for (slot, fp) in out
        .chunks_exact_mut(PADDED_FP_LENGTH)
        .zip(unpadded.chunks_exact(FP_LENGTH))
    {
        pad_fp(slot, fp);
    }
    out.into()
}

/// Extracts a G1 point from a 128 byte slice representation.
///
/// The point is checked to be on the curve. No subgroup check is performed.
pub(super) fn decode_g1<B: Bls12381>(input: &[u8]) -> Result<B::G1, PrecompileError> {
    if input.len() != PADDED_G1_LENGTH {
        return Err(PrecompileError::InvalidInputLength);
    }

    let mut unpadded = [0u8; G1_LENGTH];
    for (fp, slot) in unpadded
        .chunks_exact_mut(FP_LENGTH)
        .zip(input.chunks_exact(PADDED_FP_LENGTH))
    {
        fp.copy_from_slice(remove_fp_padding(slot)?);
    }

    B::g1_from_bytes(&unpadded)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::bls12_381::mock::Recorder;
    use crate::bls12_381::Blst;
    use primitives::hex;
    use rstest::rstest;

    const G1: [u8; PADDED_G1_LENGTH] = hex!("0000000000000000000000000000000017f1d3a73197d7942695638c4fa9ac0fc3688c4f9774b905a14e3a3f171bac586c55e83ff97a1aeffb3af00adb22c6bb0000000000000000000000000000000008b3f481e3aaa0f1a09e30ed741d8ae4fcf5e095d5d00af600db18cb2c04b3edd03cc744a2888ae40caa232946c5e7e1");

    #[test]
    fn strips_padding_in_order() {
        let mut input = [0u8; PADDED_G1_LENGTH];
        input[16..64].fill(0xaa);
        input[80..128].fill(0xbb);

        let point = decode_g1::<Recorder>(&input).unwrap();
        assert_eq!(&point[..48], &[0xaa; 48]);
        assert_eq!(&point[48..], &[0xbb; 48]);
        assert_eq!(encode_g1::<Recorder>(&point)[..], input[..]);
    }

    #[rstest]
    #[case::empty(0)]
    #[case::short(127)]
    #[case::long(129)]
    fn rejects_length(#[case] len: usize) {
        let input = vec![0u8; len];
        assert_eq!(
            decode_g1::<Recorder>(&input),
            Err(PrecompileError::InvalidInputLength)
        );
    }

    #[rstest]
    #[case::x_padding(0)]
    #[case::y_padding(79)]
    fn rejects_padding(#[case] index: usize) {
        let mut input = G1;
        input[index] = 1;
        assert_eq!(
            decode_g1::<Blst>(&input),
            Err(PrecompileError::InvalidFieldElementPadding)
        );
    }

    #[test]
    fn generator_round_trip() {
        let point = decode_g1::<Blst>(&G1).unwrap();
        assert_eq!(encode_g1::<Blst>(&point)[..], G1[..]);
    }

    #[test]
    fn infinity_round_trip() {
        let point = decode_g1::<Blst>(&[0; PADDED_G1_LENGTH]).unwrap();
        assert_eq!(encode_g1::<Blst>(&point)[..], [0u8; PADDED_G1_LENGTH][..]);
    }

    #[test]
    fn off_curve() {
        let mut input = G1;
        input[PADDED_G1_LENGTH - 1] ^= 1;
        assert_eq!(
            decode_g1::<Blst>(&input),
            Err(PrecompileError::G1PointNotOnCurve)
        );
    }
}

//! Backend that carries canonical bytes through unchanged, used to observe
//! exactly what the codecs hand to the curve library.
use super::crypto::{Bls12381, Scalar};
use crate::bls12_381_const::{FP2_LENGTH, FP_LENGTH, G1_LENGTH, G2_LENGTH};
use crate::PrecompileError;

#[derive(Debug)]
pub(crate) struct Recorder;

impl Bls12381 for Recorder {
    type G1 = [u8; G1_LENGTH];
    type G2 = [u8; G2_LENGTH];

    fn g1_from_bytes(bytes: &[u8; G1_LENGTH]) -> Result<Self::G1, PrecompileError> {
        Ok(*bytes)
    }

    fn g1_to_bytes(point: &Self::G1) -> [u8; G1_LENGTH] {
        *point
    }

    fn g1_add(a: &Self::G1, _b: &Self::G1) -> Self::G1 {
        *a
    }

    fn g1_mul(point: &Self::G1, _scalar: &Scalar) -> Self::G1 {
        *point
    }

    fn g1_msm(pairs: &[(Self::G1, Scalar)]) -> Self::G1 {
        pairs.first().map(|(p, _)| *p).unwrap_or([0; G1_LENGTH])
    }

    fn g1_in_subgroup(_point: &Self::G1) -> bool {
        true
    }

    fn map_fp_to_g1(fp: &[u8; FP_LENGTH]) -> Result<Self::G1, PrecompileError> {
        let mut out = [0; G1_LENGTH];
        out[..FP_LENGTH].copy_from_slice(fp);
        Ok(out)
    }

    fn g2_from_bytes(bytes: &[u8; G2_LENGTH]) -> Result<Self::G2, PrecompileError> {
        Ok(*bytes)
    }

    fn g2_to_bytes(point: &Self::G2) -> [u8; G2_LENGTH] {
        *point
    }

    fn g2_add(a: &Self::G2, _b: &Self::G2) -> Self::G2 {
        *a
    }

    fn g2_mul(point: &Self::G2, _scalar: &Scalar) -> Self::G2 {
        *point
    }

    fn g2_msm(pairs: &[(Self::G2, Scalar)]) -> Self::G2 {
        pairs.first().map(|(p, _)| *p).unwrap_or([0; G2_LENGTH])
    }

    fn g2_in_subgroup(_point: &Self::G2) -> bool {
        true
    }

    // Places the Fp2 element in the x coordinate so its limb order shows up
    // in the encoded output.
    fn map_fp2_to_g2(fp2: &[u8; FP2_LENGTH]) -> Result<Self::G2, PrecompileError> {
        let mut out = [0; G2_LENGTH];
        out[..FP2_LENGTH].copy_from_slice(fp2);
        Ok(out)
    }

    fn pairing_check(_pairs: &[(Self::G1, Self::G2)]) -> bool {
        true
    }
}

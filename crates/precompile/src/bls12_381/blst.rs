// This module contains a safe wrapper around the blst library.

use super::crypto::{Bls12381, Scalar};
use crate::bls12_381_const::{
    FP2_LENGTH, FP_LENGTH, G1_LENGTH, G2_LENGTH, MODULUS_REPR, NBITS, SCALAR_LENGTH,
};
use crate::PrecompileError;
use blst::{
    blst_bendian_from_fp, blst_final_exp, blst_fp, blst_fp12, blst_fp12_is_one, blst_fp12_mul,
    blst_fp2, blst_fp_from_bendian, blst_map_to_g1, blst_map_to_g2, blst_miller_loop, blst_p1,
    blst_p1_add_or_double_affine, blst_p1_affine, blst_p1_affine_in_g1, blst_p1_affine_is_inf,
    blst_p1_affine_on_curve, blst_p1_from_affine, blst_p1_to_affine, blst_p2,
    blst_p2_add_or_double_affine, blst_p2_affine, blst_p2_affine_in_g2, blst_p2_affine_is_inf,
    blst_p2_affine_on_curve, blst_p2_from_affine, blst_p2_to_affine, blst_scalar,
    blst_scalar_from_bendian, MultiPoint,
};
use core::cmp::Ordering;

/// [`Bls12381`] backed by [blst](https://github.com/supranational/blst).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Blst;

fn p1_to_affine(p: &blst_p1) -> blst_p1_affine {
    let mut p_affine = blst_p1_affine::default();
    // SAFETY: both inputs are valid blst types
    unsafe { blst_p1_to_affine(&mut p_affine, p) };
    p_affine
}

fn p1_from_affine(p_affine: &blst_p1_affine) -> blst_p1 {
    let mut p = blst_p1::default();
    // SAFETY: both inputs are valid blst types
    unsafe { blst_p1_from_affine(&mut p, p_affine) };
    p
}

fn p1_add_or_double(p: &blst_p1, p_affine: &blst_p1_affine) -> blst_p1 {
    let mut result = blst_p1::default();
    // SAFETY: all inputs are valid blst types
    unsafe { blst_p1_add_or_double_affine(&mut result, p, p_affine) };
    result
}

fn p1_is_inf(p_affine: &blst_p1_affine) -> bool {
    // SAFETY: argument is a valid blst type
    unsafe { blst_p1_affine_is_inf(p_affine) }
}

fn p2_to_affine(p: &blst_p2) -> blst_p2_affine {
    let mut p_affine = blst_p2_affine::default();
    // SAFETY: both inputs are valid blst types
    unsafe { blst_p2_to_affine(&mut p_affine, p) };
    p_affine
}

fn p2_from_affine(p_affine: &blst_p2_affine) -> blst_p2 {
    let mut p = blst_p2::default();
    // SAFETY: both inputs are valid blst types
    unsafe { blst_p2_from_affine(&mut p, p_affine) };
    p
}

fn p2_add_or_double(p: &blst_p2, p_affine: &blst_p2_affine) -> blst_p2 {
    let mut result = blst_p2::default();
    // SAFETY: all inputs are valid blst types
    unsafe { blst_p2_add_or_double_affine(&mut result, p, p_affine) };
    result
}

fn p2_is_inf(p_affine: &blst_p2_affine) -> bool {
    // SAFETY: argument is a valid blst type
    unsafe { blst_p2_affine_is_inf(p_affine) }
}

/// Checks if the input is a valid big-endian representation of a field element.
fn is_valid_be(input: &[u8; FP_LENGTH]) -> bool {
    for (i, modul) in input.iter().zip(MODULUS_REPR.iter()) {
        match i.cmp(modul) {
            Ordering::Greater => return false,
            Ordering::Less => return true,
            Ordering::Equal => continue,
        }
    }
    // false if matching the modulus
    false
}

/// Reads a canonical field element, returning `None` if the slice is not
/// [`FP_LENGTH`] bytes or the value is not less than the modulus.
fn read_fp(input: &[u8]) -> Option<blst_fp> {
    let input: &[u8; FP_LENGTH] = input.try_into().ok()?;
    if !is_valid_be(input) {
        return None;
    }
    let mut fp = blst_fp::default();
    // SAFETY: input has fixed length, and fp is a blst value.
    unsafe { blst_fp_from_bendian(&mut fp, input.as_ptr()) };
    Some(fp)
}

/// Reads an Fp2 element from canonical `c1 ‖ c0` bytes.
fn read_fp2(input: &[u8]) -> Option<blst_fp2> {
    if input.len() != FP2_LENGTH {
        return None;
    }
    let (c1, c0) = input.split_at(FP_LENGTH);
    Some(blst_fp2 {
        fp: [read_fp(c0)?, read_fp(c1)?],
    })
}

/// Writes a field element as 48 big-endian bytes.
fn write_fp(out: &mut [u8], fp: &blst_fp) {
    debug_assert_eq!(out.len(), FP_LENGTH);
    // SAFETY: out holds FP_LENGTH bytes, fp is a blst value.
    unsafe { blst_bendian_from_fp(out.as_mut_ptr(), fp) };
}

/// Converts a big-endian scalar into the little-endian blst representation.
///
/// The scalar is not reduced: values above the subgroup order are multiplied
/// with as-is.
fn read_scalar(input: &Scalar) -> blst_scalar {
    let mut out = blst_scalar::default();
    // SAFETY: input has fixed length, out is a blst value.
    unsafe { blst_scalar_from_bendian(&mut out, input.as_ptr()) };
    out
}

fn is_zero_scalar(scalar: &Scalar) -> bool {
    scalar.iter().all(|b| *b == 0)
}

/// Computes a single miller loop for a given G1, G2 pair
fn compute_miller_loop(g1: &blst_p1_affine, g2: &blst_p2_affine) -> blst_fp12 {
    let mut result = blst_fp12::default();

    // SAFETY: All arguments are valid blst types
    unsafe { blst_miller_loop(&mut result, g2, g1) }

    result
}

/// multiply_fp12 multiplies two fp12 elements
fn multiply_fp12(a: &blst_fp12, b: &blst_fp12) -> blst_fp12 {
    let mut result = blst_fp12::default();

    // SAFETY: All arguments are valid blst types
    unsafe { blst_fp12_mul(&mut result, a, b) }

    result
}

/// final_exp computes the final exponentiation on an fp12 element
fn final_exp(f: &blst_fp12) -> blst_fp12 {
    let mut result = blst_fp12::default();

    // SAFETY: All arguments are valid blst types
    unsafe { blst_final_exp(&mut result, f) }

    result
}

/// is_fp12_one checks if an fp12 element equals
/// multiplicative identity element, one
fn is_fp12_one(f: &blst_fp12) -> bool {
    // SAFETY: argument is a valid blst type
    unsafe { blst_fp12_is_one(f) }
}

impl Bls12381 for Blst {
    type G1 = blst_p1_affine;
    type G2 = blst_p2_affine;

    fn g1_from_bytes(bytes: &[u8; G1_LENGTH]) -> Result<Self::G1, PrecompileError> {
        if bytes.iter().all(|b| *b == 0) {
            return Ok(blst_p1_affine::default());
        }
        let (x, y) = bytes.split_at(FP_LENGTH);
        let out = blst_p1_affine {
            x: read_fp(x).ok_or(PrecompileError::NonCanonicalFieldElement)?,
            y: read_fp(y).ok_or(PrecompileError::NonCanonicalFieldElement)?,
        };

        // SAFETY: out is a blst value.
        if unsafe { !blst_p1_affine_on_curve(&out) } {
            return Err(PrecompileError::G1PointNotOnCurve);
        }
        Ok(out)
    }

    fn g1_to_bytes(point: &Self::G1) -> [u8; G1_LENGTH] {
        let mut out = [0u8; G1_LENGTH];
        if p1_is_inf(point) {
            return out;
        }
        let (x, y) = out.split_at_mut(FP_LENGTH);
        write_fp(x, &point.x);
        write_fp(y, &point.y);
        out
    }

    fn g1_add(a: &Self::G1, b: &Self::G1) -> Self::G1 {
        // Convert first point to Jacobian coordinates and add the second one
        // (in affine) to it. `a` and `b` may be equal.
        let sum = p1_add_or_double(&p1_from_affine(a), b);
        p1_to_affine(&sum)
    }

    fn g1_mul(point: &Self::G1, scalar: &Scalar) -> Self::G1 {
        // `blst_p1_mult` uses the GLV endomorphism for scalars below the
        // group order and is only correct for subgroup points.
        Self::g1_msm(&[(*point, *scalar)])
    }

    fn g1_msm(pairs: &[(Self::G1, Scalar)]) -> Self::G1 {
        let mut points = Vec::with_capacity(pairs.len());
        let mut scalars = Vec::with_capacity(pairs.len() * SCALAR_LENGTH);
        for (point, scalar) in pairs {
            // The batched blst API mishandles the point at infinity, and both
            // filtered cases contribute nothing to the sum.
            if p1_is_inf(point) || is_zero_scalar(scalar) {
                continue;
            }
            points.push(*point);
            scalars.extend_from_slice(&read_scalar(scalar).b);
        }

        if points.is_empty() {
            return blst_p1_affine::default();
        }

        let multiexp = points.mult(&scalars, NBITS);
        p1_to_affine(&multiexp)
    }

    fn g1_in_subgroup(point: &Self::G1) -> bool {
        // SAFETY: point is a blst value.
        p1_is_inf(point) || unsafe { blst_p1_affine_in_g1(point) }
    }

    fn map_fp_to_g1(fp: &[u8; FP_LENGTH]) -> Result<Self::G1, PrecompileError> {
        let fp = read_fp(fp).ok_or(PrecompileError::MapToCurveError)?;
        let mut p = blst_p1::default();
        // SAFETY: `p` and `fp` are blst values.
        // Third argument is unused if null.
        unsafe { blst_map_to_g1(&mut p, &fp, core::ptr::null()) };
        Ok(p1_to_affine(&p))
    }

    fn g2_from_bytes(bytes: &[u8; G2_LENGTH]) -> Result<Self::G2, PrecompileError> {
        if bytes.iter().all(|b| *b == 0) {
            return Ok(blst_p2_affine::default());
        }
        let (x, y) = bytes.split_at(FP2_LENGTH);
        let out = blst_p2_affine {
            x: read_fp2(x).ok_or(PrecompileError::NonCanonicalFieldElement)?,
            y: read_fp2(y).ok_or(PrecompileError::NonCanonicalFieldElement)?,
        };

        // SAFETY: out is a blst value.
        if unsafe { !blst_p2_affine_on_curve(&out) } {
            return Err(PrecompileError::G2PointNotOnCurve);
        }
        Ok(out)
    }

    fn g2_to_bytes(point: &Self::G2) -> [u8; G2_LENGTH] {
        let mut out = [0u8; G2_LENGTH];
        if p2_is_inf(point) {
            return out;
        }
        // Library order puts the c1 limb first.
        write_fp(&mut out[..FP_LENGTH], &point.x.fp[1]);
        write_fp(&mut out[FP_LENGTH..FP2_LENGTH], &point.x.fp[0]);
        write_fp(&mut out[FP2_LENGTH..FP2_LENGTH + FP_LENGTH], &point.y.fp[1]);
        write_fp(&mut out[FP2_LENGTH + FP_LENGTH..], &point.y.fp[0]);
        out
    }

    fn g2_add(a: &Self::G2, b: &Self::G2) -> Self::G2 {
        let sum = p2_add_or_double(&p2_from_affine(a), b);
        p2_to_affine(&sum)
    }

    fn g2_mul(point: &Self::G2, scalar: &Scalar) -> Self::G2 {
        // Same as `g1_mul`: `blst_p2_mult` assumes a subgroup point.
        Self::g2_msm(&[(*point, *scalar)])
    }

    fn g2_msm(pairs: &[(Self::G2, Scalar)]) -> Self::G2 {
        let mut points = Vec::with_capacity(pairs.len());
        let mut scalars = Vec::with_capacity(pairs.len() * SCALAR_LENGTH);
        for (point, scalar) in pairs {
            if p2_is_inf(point) || is_zero_scalar(scalar) {
                continue;
            }
            points.push(*point);
            scalars.extend_from_slice(&read_scalar(scalar).b);
        }

        if points.is_empty() {
            return blst_p2_affine::default();
        }

        let multiexp = points.mult(&scalars, NBITS);
        p2_to_affine(&multiexp)
    }

    fn g2_in_subgroup(point: &Self::G2) -> bool {
        // SAFETY: point is a blst value.
        p2_is_inf(point) || unsafe { blst_p2_affine_in_g2(point) }
    }

    fn map_fp2_to_g2(fp2: &[u8; FP2_LENGTH]) -> Result<Self::G2, PrecompileError> {
        let fp2 = read_fp2(fp2).ok_or(PrecompileError::MapToCurveError)?;
        let mut p = blst_p2::default();
        // SAFETY: `p` and `fp2` are blst values.
        // Third argument is unused if null.
        unsafe { blst_map_to_g2(&mut p, &fp2, core::ptr::null()) };
        Ok(p2_to_affine(&p))
    }

    fn pairing_check(pairs: &[(Self::G1, Self::G2)]) -> bool {
        // A pair with an infinity member contributes the identity.
        let mut pairs = pairs
            .iter()
            .filter(|(g1, g2)| !p1_is_inf(g1) && !p2_is_inf(g2));

        let Some((first_g1, first_g2)) = pairs.next() else {
            return true;
        };
        let mut acc = compute_miller_loop(first_g1, first_g2);

        // For the remaining pairs, compute miller loop and multiply with the accumulated result
        for (g1, g2) in pairs {
            let ml = compute_miller_loop(g1, g2);
            acc = multiply_fp12(&acc, &ml);
        }

        // Apply final exponentiation and check if result is one
        is_fp12_one(&final_exp(&acc))
    }
}

//! Capability interface to a BLS12-381 arithmetic library.
//!
//! The precompile handlers only marshal bytes. Every curve operation, including
//! point validation, goes through this trait, so any conforming backend can be
//! substituted without touching the codecs or handlers.
use crate::bls12_381_const::{FP2_LENGTH, FP_LENGTH, G1_LENGTH, G2_LENGTH, SCALAR_LENGTH};
use crate::PrecompileError;
use core::fmt::Debug;

/// Big-endian scalar of a multiplication, unrestricted in range.
pub type Scalar = [u8; SCALAR_LENGTH];

/// BLS12-381 arithmetic consumed by the precompiles.
///
/// Canonical bytes are unpadded big-endian coordinates in library order:
/// - G1: `x ‖ y` (48 bytes each).
/// - G2 and Fp2: `c1 ‖ c0` per coordinate, i.e. `x.c1 ‖ x.c0 ‖ y.c1 ‖ y.c0`.
///
/// All-zero canonical bytes denote the point at infinity.
pub trait Bls12381 {
    /// Affine G1 point.
    type G1: Clone + Debug + PartialEq;
    /// Affine G2 point.
    type G2: Clone + Debug + PartialEq;

    /// Constructs a G1 point, checking that it lies on the curve.
    ///
    /// No subgroup check is performed.
    fn g1_from_bytes(bytes: &[u8; G1_LENGTH]) -> Result<Self::G1, PrecompileError>;

    /// Serializes a G1 point to canonical bytes.
    fn g1_to_bytes(point: &Self::G1) -> [u8; G1_LENGTH];

    /// Adds two G1 points.
    fn g1_add(a: &Self::G1, b: &Self::G1) -> Self::G1;

    /// Multiplies a G1 point by a scalar.
    fn g1_mul(point: &Self::G1, scalar: &Scalar) -> Self::G1;

    /// Computes `sum(scalar_i * point_i)` over all pairs.
    fn g1_msm(pairs: &[(Self::G1, Scalar)]) -> Self::G1;

    /// Returns `true` if the point is in the prime order subgroup.
    fn g1_in_subgroup(point: &Self::G1) -> bool;

    /// Maps an Fp element to G1 with the simplified SWU map.
    fn map_fp_to_g1(fp: &[u8; FP_LENGTH]) -> Result<Self::G1, PrecompileError>;

    /// Constructs a G2 point, checking that it lies on the curve.
    ///
    /// No subgroup check is performed.
    fn g2_from_bytes(bytes: &[u8; G2_LENGTH]) -> Result<Self::G2, PrecompileError>;

    /// Serializes a G2 point to canonical bytes.
    fn g2_to_bytes(point: &Self::G2) -> [u8; G2_LENGTH];

    /// Adds two G2 points.
    fn g2_add(a: &Self::G2, b: &Self::G2) -> Self::G2;

    /// Multiplies a G2 point by a scalar.
    fn g2_mul(point: &Self::G2, scalar: &Scalar) -> Self::G2;

    /// Computes `sum(scalar_i * point_i)` over all pairs.
    fn g2_msm(pairs: &[(Self::G2, Scalar)]) -> Self::G2;

    /// Returns `true` if the point is in the prime order subgroup.
    fn g2_in_subgroup(point: &Self::G2) -> bool;

    /// Maps an Fp2 element, given as canonical `c1 ‖ c0` bytes, to G2 with the
    /// simplified SWU map.
    fn map_fp2_to_g2(fp2: &[u8; FP2_LENGTH]) -> Result<Self::G2, PrecompileError>;

    /// Returns `true` if the product of the pairings of all pairs is the
    /// multiplicative identity of the target field.
    fn pairing_check(pairs: &[(Self::G1, Self::G2)]) -> bool;
}

//! Interface for the precompiles. It contains the precompile result types,
//! the precompile output type, the error taxonomy and the function types the
//! dispatch table is built from.
use crate::bls12_381_utils::GasSchedule;
use primitives::Bytes;

/// Result of running a precompile handler: the raw output bytes or the reason
/// the input was rejected.
pub type PrecompileResult = Result<Bytes, PrecompileError>;

/// Result of a metered call: gas used and output bytes.
pub type PrecompileCallResult = Result<PrecompileOutput, PrecompileError>;

/// Handler function type. Takes the raw input and returns the raw output.
///
/// Handlers never mutate their input and never consult gas.
pub type PrecompileFn = fn(&[u8]) -> PrecompileResult;

/// Gas function type. Maps the raw input to the gas charged for it under the
/// given schedule. Evaluated before, and independently of, the handler.
pub type GasFn = fn(&GasSchedule, &[u8]) -> u64;

/// Precompile execution output
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PrecompileOutput {
    /// Gas used by the precompile
    pub gas_used: u64,
    /// Output bytes
    pub bytes: Bytes,
}

impl PrecompileOutput {
    /// Returns new precompile output with the given gas used and output bytes.
    pub fn new(gas_used: u64, bytes: Bytes) -> Self {
        Self { gas_used, bytes }
    }
}

/// Precompile error type.
///
/// Every variant aborts the whole call; no partial output is ever produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, thiserror::Error)]
pub enum PrecompileError {
    /// The gas limit given to a metered call is below the required gas.
    #[error("out of gas")]
    OutOfGas,
    /// Total input size does not match the size rule of the precompile, or a
    /// field element, point or scalar slice has the wrong width.
    #[error("invalid input length")]
    InvalidInputLength,
    /// The 16 top bytes of a padded field element are not zero.
    #[error("invalid field element top bytes")]
    InvalidFieldElementPadding,
    /// A point coordinate is not less than the base field modulus.
    #[error("non-canonical field element")]
    NonCanonicalFieldElement,
    /// Decoded coordinates do not satisfy the G1 curve equation.
    #[error("g1 point is not on curve")]
    G1PointNotOnCurve,
    /// Decoded coordinates do not satisfy the G2 curve equation.
    #[error("g2 point is not on curve")]
    G2PointNotOnCurve,
    /// A pairing input G1 point is on the curve but not in the prime order subgroup.
    #[error("g1 point is not on correct subgroup")]
    G1SubgroupError,
    /// A pairing input G2 point is on the curve but not in the prime order subgroup.
    #[error("g2 point is not on correct subgroup")]
    G2SubgroupError,
    /// The field-to-curve map rejected its input.
    #[error("field element could not be mapped to curve")]
    MapToCurveError,
}

impl PrecompileError {
    /// Returns `true` if the error is out of gas.
    pub fn is_oog(&self) -> bool {
        matches!(self, Self::OutOfGas)
    }
}

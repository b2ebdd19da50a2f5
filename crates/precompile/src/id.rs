//! Identifiers and addresses of the EIP-2537 precompiles.
use core::fmt;

use primitives::Address;

use crate::bls12_381_const::{
    G1_ADD_ADDRESS, G1_MULTIEXP_ADDRESS, G1_MUL_ADDRESS, G2_ADD_ADDRESS, G2_MULTIEXP_ADDRESS,
    G2_MUL_ADDRESS, MAP_FP2_TO_G2_ADDRESS, MAP_FP_TO_G1_ADDRESS, PAIRING_ADDRESS,
};
use crate::{u64_to_address, Precompile};

/// Unique precompile identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PrecompileId {
    /// Point addition in G1 (curve over base prime field).
    G1Add,
    /// Scalar multiplication in G1.
    G1Mul,
    /// Multi-scalar-multiplication (MSM) in G1.
    G1MultiExp,
    /// Point addition in G2 (curve over quadratic extension of the base prime field).
    G2Add,
    /// Scalar multiplication in G2.
    G2Mul,
    /// Multi-scalar-multiplication (MSM) in G2.
    G2MultiExp,
    /// Pairing operations between a set of pairs of (G1, G2) points.
    Pairing,
    /// Base field element mapping into the G1 point.
    MapFpToG1,
    /// Extension field element mapping into the G2 point.
    MapFp2ToG2,
}

impl PrecompileId {
    /// Every identifier, in address order.
    pub const ALL: [Self; 9] = [
        Self::G1Add,
        Self::G1Mul,
        Self::G1MultiExp,
        Self::G2Add,
        Self::G2Mul,
        Self::G2MultiExp,
        Self::Pairing,
        Self::MapFpToG1,
        Self::MapFp2ToG2,
    ];

    /// Returns the address the precompile is installed at.
    pub const fn address(&self) -> Address {
        let address = match self {
            Self::G1Add => G1_ADD_ADDRESS,
            Self::G1Mul => G1_MUL_ADDRESS,
            Self::G1MultiExp => G1_MULTIEXP_ADDRESS,
            Self::G2Add => G2_ADD_ADDRESS,
            Self::G2Mul => G2_MUL_ADDRESS,
            Self::G2MultiExp => G2_MULTIEXP_ADDRESS,
            Self::Pairing => PAIRING_ADDRESS,
            Self::MapFpToG1 => MAP_FP_TO_G1_ADDRESS,
            Self::MapFp2ToG2 => MAP_FP2_TO_G2_ADDRESS,
        };
        u64_to_address(address)
    }

    /// Returns the identifier installed at `address`, if any.
    pub fn from_address(address: &Address) -> Option<Self> {
        Self::ALL.into_iter().find(|id| id.address() == *address)
    }

    /// Returns the name of the precompile as defined in EIP-2537.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::G1Add => "BLS12_G1ADD",
            Self::G1Mul => "BLS12_G1MUL",
            Self::G1MultiExp => "BLS12_G1MULTIEXP",
            Self::G2Add => "BLS12_G2ADD",
            Self::G2Mul => "BLS12_G2MUL",
            Self::G2MultiExp => "BLS12_G2MULTIEXP",
            Self::Pairing => "BLS12_PAIRING",
            Self::MapFpToG1 => "BLS12_MAP_FP_TO_G1",
            Self::MapFp2ToG2 => "BLS12_MAP_FP2_TO_G2",
        }
    }

    /// Returns the precompile: its gas function and its handler bound to the
    /// default arithmetic backend.
    pub const fn precompile(&self) -> Precompile {
        use crate::bls12_381::*;
        match self {
            Self::G1Add => g1_add::PRECOMPILE,
            Self::G1Mul => g1_mul::PRECOMPILE,
            Self::G1MultiExp => g1_msm::PRECOMPILE,
            Self::G2Add => g2_add::PRECOMPILE,
            Self::G2Mul => g2_mul::PRECOMPILE,
            Self::G2MultiExp => g2_msm::PRECOMPILE,
            Self::Pairing => pairing::PRECOMPILE,
            Self::MapFpToG1 => map_fp_to_g1::PRECOMPILE,
            Self::MapFp2ToG2 => map_fp2_to_g2::PRECOMPILE,
        }
    }
}

impl fmt::Display for PrecompileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

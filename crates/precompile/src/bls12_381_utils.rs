//! Gas model of the EIP-2537 precompiles.
//!
//! Gas is computed from the input length alone, before the handler runs. The
//! pair count of the variable-arity precompiles is derived by plain division:
//! a malformed length is still charged here and rejected afterwards by the
//! handler.
use crate::bls12_381_const::{
    G1_ADD_GAS, G1_MULTIEXP_INPUT_LENGTH, G1_MULTIEXP_PER_PAIR_GAS, G1_MUL_GAS, G2_ADD_GAS,
    G2_MULTIEXP_INPUT_LENGTH, G2_MULTIEXP_PER_PAIR_GAS, G2_MUL_GAS, MAP_FP2_TO_G2_GAS,
    MAP_FP_TO_G1_GAS, PAIRING_BASE_GAS, PAIRING_INPUT_LENGTH, PAIRING_PER_PAIR_GAS,
};

/// Gas costs of the nine precompiles.
///
/// [`GasSchedule::DEFAULT`] carries the constants from
/// [`bls12_381_const`](crate::bls12_381_const). The multi-exponentiation
/// costs are not final and are expected to be overridden by chains that
/// settle on a discounted model.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GasSchedule {
    /// G1ADD cost.
    pub g1_add: u64,
    /// G1MUL cost.
    pub g1_mul: u64,
    /// G1MULTIEXP base cost.
    pub g1_multiexp_base: u64,
    /// G1MULTIEXP cost per (point, scalar) pair.
    pub g1_multiexp_per_pair: u64,
    /// G2ADD cost.
    pub g2_add: u64,
    /// G2MUL cost.
    pub g2_mul: u64,
    /// G2MULTIEXP base cost.
    pub g2_multiexp_base: u64,
    /// G2MULTIEXP cost per (point, scalar) pair.
    pub g2_multiexp_per_pair: u64,
    /// PAIRING base cost.
    pub pairing_base: u64,
    /// PAIRING cost per (G1, G2) pair.
    pub pairing_per_pair: u64,
    /// MAP_FP_TO_G1 cost.
    pub map_fp_to_g1: u64,
    /// MAP_FP2_TO_G2 cost.
    pub map_fp2_to_g2: u64,
}

impl GasSchedule {
    /// The default schedule.
    pub const DEFAULT: Self = Self {
        g1_add: G1_ADD_GAS,
        g1_mul: G1_MUL_GAS,
        g1_multiexp_base: 0,
        g1_multiexp_per_pair: G1_MULTIEXP_PER_PAIR_GAS,
        g2_add: G2_ADD_GAS,
        g2_mul: G2_MUL_GAS,
        g2_multiexp_base: 0,
        g2_multiexp_per_pair: G2_MULTIEXP_PER_PAIR_GAS,
        pairing_base: PAIRING_BASE_GAS,
        pairing_per_pair: PAIRING_PER_PAIR_GAS,
        map_fp_to_g1: MAP_FP_TO_G1_GAS,
        map_fp2_to_g2: MAP_FP2_TO_G2_GAS,
    };
}

impl Default for GasSchedule {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// `base + per_unit * k` where `k = input_len / unit`, saturating.
#[inline]
pub fn linear_pair_cost(input_len: usize, unit: usize, base: u64, per_unit: u64) -> u64 {
    let k = (input_len / unit) as u64;
    base.saturating_add(per_unit.saturating_mul(k))
}

/// Gas of BLS12_G1ADD.
pub fn g1_add_required_gas(schedule: &GasSchedule, _input: &[u8]) -> u64 {
    schedule.g1_add
}

/// Gas of BLS12_G1MUL.
pub fn g1_mul_required_gas(schedule: &GasSchedule, _input: &[u8]) -> u64 {
    schedule.g1_mul
}

/// Gas of BLS12_G1MULTIEXP.
pub fn g1_multiexp_required_gas(schedule: &GasSchedule, input: &[u8]) -> u64 {
    linear_pair_cost(
        input.len(),
        G1_MULTIEXP_INPUT_LENGTH,
        schedule.g1_multiexp_base,
        schedule.g1_multiexp_per_pair,
    )
}

/// Gas of BLS12_G2ADD.
pub fn g2_add_required_gas(schedule: &GasSchedule, _input: &[u8]) -> u64 {
    schedule.g2_add
}

/// Gas of BLS12_G2MUL.
pub fn g2_mul_required_gas(schedule: &GasSchedule, _input: &[u8]) -> u64 {
    schedule.g2_mul
}

/// Gas of BLS12_G2MULTIEXP.
pub fn g2_multiexp_required_gas(schedule: &GasSchedule, input: &[u8]) -> u64 {
    linear_pair_cost(
        input.len(),
        G2_MULTIEXP_INPUT_LENGTH,
        schedule.g2_multiexp_base,
        schedule.g2_multiexp_per_pair,
    )
}

/// Gas of BLS12_PAIRING.
pub fn pairing_required_gas(schedule: &GasSchedule, input: &[u8]) -> u64 {
    linear_pair_cost(
        input.len(),
        PAIRING_INPUT_LENGTH,
        schedule.pairing_base,
        schedule.pairing_per_pair,
    )
}

/// Gas of BLS12_MAP_FP_TO_G1.
pub fn map_fp_to_g1_required_gas(schedule: &GasSchedule, _input: &[u8]) -> u64 {
    schedule.map_fp_to_g1
}

/// Gas of BLS12_MAP_FP2_TO_G2.
pub fn map_fp2_to_g2_required_gas(schedule: &GasSchedule, _input: &[u8]) -> u64 {
    schedule.map_fp2_to_g2
}

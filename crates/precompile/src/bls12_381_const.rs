//! Constants for the EIP-2537 precompiles: addresses, default gas costs and
//! the byte layout of the ABI.

// Addresses of the nine precompiles, in activation order.
/// BLS12_G1ADD precompile address.
pub const G1_ADD_ADDRESS: u64 = 0x0a;
/// BLS12_G1MUL precompile address.
pub const G1_MUL_ADDRESS: u64 = 0x0b;
/// BLS12_G1MULTIEXP precompile address.
pub const G1_MULTIEXP_ADDRESS: u64 = 0x0c;
/// BLS12_G2ADD precompile address.
pub const G2_ADD_ADDRESS: u64 = 0x0d;
/// BLS12_G2MUL precompile address.
pub const G2_MUL_ADDRESS: u64 = 0x0e;
/// BLS12_G2MULTIEXP precompile address.
pub const G2_MULTIEXP_ADDRESS: u64 = 0x0f;
/// BLS12_PAIRING precompile address.
pub const PAIRING_ADDRESS: u64 = 0x10;
/// BLS12_MAP_FP_TO_G1 precompile address.
pub const MAP_FP_TO_G1_ADDRESS: u64 = 0x11;
/// BLS12_MAP_FP2_TO_G2 precompile address.
pub const MAP_FP2_TO_G2_ADDRESS: u64 = 0x12;

// Default gas schedule. See [`GasSchedule`](crate::bls12_381_utils::GasSchedule).
/// Gas cost of a G1 addition.
pub const G1_ADD_GAS: u64 = 600;
/// Gas cost of a G1 scalar multiplication.
pub const G1_MUL_GAS: u64 = 12000;
/// Per-pair gas cost of a G1 multi-exponentiation.
///
/// Placeholder until the target chain fixes a discounted cost; charged as a full
/// multiplication per pair.
pub const G1_MULTIEXP_PER_PAIR_GAS: u64 = G1_MUL_GAS;
/// Gas cost of a G2 addition.
pub const G2_ADD_GAS: u64 = 4500;
/// Gas cost of a G2 scalar multiplication.
pub const G2_MUL_GAS: u64 = 55000;
/// Per-pair gas cost of a G2 multi-exponentiation.
///
/// Placeholder until the target chain fixes a discounted cost; charged as a full
/// multiplication per pair.
pub const G2_MULTIEXP_PER_PAIR_GAS: u64 = G2_MUL_GAS;
/// Base gas cost of a pairing check.
pub const PAIRING_BASE_GAS: u64 = 115000;
/// Per-pair gas cost of a pairing check.
pub const PAIRING_PER_PAIR_GAS: u64 = 23000;
/// Gas cost of mapping an Fp element to G1.
pub const MAP_FP_TO_G1_GAS: u64 = 5500;
/// Gas cost of mapping an Fp2 element to G2.
pub const MAP_FP2_TO_G2_GAS: u64 = 110000;

// Constants related to the precompile inputs and outputs

/// FP_LENGTH specifies the number of bytes needed to represent an
/// Fp element. This is an element in the base field of BLS12-381.
pub const FP_LENGTH: usize = 48;
/// PADDED_FP_LENGTH specifies the number of bytes that the ABI uses
/// to represent an Fp element.
///
/// Note: Only FP_LENGTH bytes carry the value, the rest is zero padding
/// that keeps every element 32 byte aligned.
pub const PADDED_FP_LENGTH: usize = 64;
/// FP_PAD_BY specifies the number of zero bytes an Fp element is left padded by.
pub const FP_PAD_BY: usize = PADDED_FP_LENGTH - FP_LENGTH;

/// FP2_LENGTH specifies the number of bytes needed to represent an Fp^2 element.
pub const FP2_LENGTH: usize = 2 * FP_LENGTH;
/// PADDED_FP2_LENGTH specifies the number of bytes the ABI uses to represent
/// an Fp^2 element.
pub const PADDED_FP2_LENGTH: usize = 2 * PADDED_FP_LENGTH;

/// G1_LENGTH specifies the number of bytes needed to represent a G1 element.
///
/// Note: A G1 element contains 2 Fp elements.
pub const G1_LENGTH: usize = 2 * FP_LENGTH;
/// PADDED_G1_LENGTH specifies the number of bytes the ABI uses to represent
/// a G1 element.
pub const PADDED_G1_LENGTH: usize = 2 * PADDED_FP_LENGTH;

/// G2_LENGTH specifies the number of bytes needed to represent a G2 element.
///
/// Note: A G2 element contains 2 Fp^2 elements.
pub const G2_LENGTH: usize = 2 * FP2_LENGTH;
/// PADDED_G2_LENGTH specifies the number of bytes the ABI uses to represent
/// a G2 element.
pub const PADDED_G2_LENGTH: usize = 2 * PADDED_FP2_LENGTH;

/// SCALAR_LENGTH specifies the number of bytes of a multiplication scalar.
///
/// Note: Scalars are 32 byte aligned already and are not padded. Any value is
/// accepted, including values above the subgroup order.
pub const SCALAR_LENGTH: usize = 32;
/// NBITS specifies the number of bits of a multiplication scalar.
pub const NBITS: usize = 256;

/// Input length of G1ADD: two G1 elements.
pub const G1_ADD_INPUT_LENGTH: usize = 2 * PADDED_G1_LENGTH;
/// Input length of G1MUL: a G1 element and a scalar.
pub const G1_MUL_INPUT_LENGTH: usize = PADDED_G1_LENGTH + SCALAR_LENGTH;
/// Length of each (G1 element, scalar) pair of a G1MULTIEXP input.
pub const G1_MULTIEXP_INPUT_LENGTH: usize = G1_MUL_INPUT_LENGTH;

/// Input length of G2ADD: two G2 elements.
pub const G2_ADD_INPUT_LENGTH: usize = 2 * PADDED_G2_LENGTH;
/// Input length of G2MUL: a G2 element and a scalar.
pub const G2_MUL_INPUT_LENGTH: usize = PADDED_G2_LENGTH + SCALAR_LENGTH;
/// Length of each (G2 element, scalar) pair of a G2MULTIEXP input.
pub const G2_MULTIEXP_INPUT_LENGTH: usize = G2_MUL_INPUT_LENGTH;

/// Length of each (G1 element, G2 element) slice of a PAIRING input.
pub const PAIRING_INPUT_LENGTH: usize = PADDED_G1_LENGTH + PADDED_G2_LENGTH;
/// Output length of PAIRING: a big-endian `uint256` of 0 or 1.
pub const PAIRING_OUTPUT_LENGTH: usize = 32;

/// Input length of MAP_FP_TO_G1.
pub const MAP_FP_TO_G1_INPUT_LENGTH: usize = PADDED_FP_LENGTH;
/// Input length of MAP_FP2_TO_G2.
pub const MAP_FP2_TO_G2_INPUT_LENGTH: usize = PADDED_FP2_LENGTH;

// Big-endian non-Montgomery form.
/// The BLS12-381 base field modulus.
pub const MODULUS_REPR: [u8; FP_LENGTH] = [
    0x1a, 0x01, 0x11, 0xea, 0x39, 0x7f, 0xe6, 0x9a, 0x4b, 0x1b, 0xa7, 0xb6, 0x43, 0x4b, 0xac, 0xd7,
    0x64, 0x77, 0x4b, 0x84, 0xf3, 0x85, 0x12, 0xbf, 0x67, 0x30, 0xd2, 0xa0, 0xf6, 0xb0, 0xf6, 0x24,
    0x1e, 0xab, 0xff, 0xfe, 0xb1, 0x53, 0xff, 0xff, 0xb9, 0xfe, 0xff, 0xff, 0xff, 0xff, 0xaa, 0xab,
];

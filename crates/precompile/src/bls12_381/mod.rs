//! EIP-2537 BLS12-381 precompiles.
//!
//! Each handler is generic over the [`Bls12381`] arithmetic library and only
//! translates between the padded ABI encoding and library bytes. The
//! `PRECOMPILE` constant of every handler module binds it to [`Blst`].
use crate::Precompile;

mod blst;
mod crypto;
mod g1;
pub mod g1_add;
pub mod g1_msm;
pub mod g1_mul;
mod g2;
pub mod g2_add;
pub mod g2_msm;
pub mod g2_mul;
pub mod map_fp2_to_g2;
pub mod map_fp_to_g1;
pub mod pairing;
mod utils;

#[cfg(test)]
mod mock;
#[cfg(test)]
pub(crate) mod test_vectors;

pub use blst::Blst;
pub use crypto::{Bls12381, Scalar};

/// Returns the BLS12-381 precompiles with their addresses.
pub fn precompiles() -> impl Iterator<Item = Precompile> {
    [
        g1_add::PRECOMPILE,
        g1_mul::PRECOMPILE,
        g1_msm::PRECOMPILE,
        g2_add::PRECOMPILE,
        g2_mul::PRECOMPILE,
        g2_msm::PRECOMPILE,
        pairing::PRECOMPILE,
        map_fp_to_g1::PRECOMPILE,
        map_fp2_to_g2::PRECOMPILE,
    ]
    .into_iter()
}

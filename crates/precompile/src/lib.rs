//! # eip2537-precompile
//!
//! The nine BLS12-381 precompiled contracts of EIP-2537: ABI codecs, handlers,
//! gas model and dispatch table.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]

pub mod bls12_381;
pub mod bls12_381_const;
pub mod bls12_381_utils;
pub mod id;
pub mod interface;

pub use bls12_381_utils::GasSchedule;
pub use id::PrecompileId;
pub use interface::*;

use once_cell::race::OnceBox;
use primitives::Address;
use std::collections::HashMap;
use tracing::{debug, trace};

/// A precompile bound to its address, gas function and handler.
#[derive(Clone, Copy, Debug)]
pub struct Precompile {
    id: PrecompileId,
    address: Address,
    gas: GasFn,
    handler: PrecompileFn,
}

impl Precompile {
    /// Creates a new precompile installed at `address`.
    pub const fn new(id: PrecompileId, address: u64, gas: GasFn, handler: PrecompileFn) -> Self {
        Self {
            id,
            address: u64_to_address(address),
            gas,
            handler,
        }
    }

    /// Returns the precompile identifier.
    #[inline]
    pub fn id(&self) -> PrecompileId {
        self.id
    }

    /// Returns reference of address.
    #[inline]
    pub fn address(&self) -> &Address {
        &self.address
    }

    /// Returns the gas charged for `input` under the default schedule.
    #[inline]
    pub fn required_gas(&self, input: &[u8]) -> u64 {
        self.required_gas_with(&GasSchedule::DEFAULT, input)
    }

    /// Returns the gas charged for `input` under `schedule`.
    ///
    /// Depends on the input length only; the input is not validated.
    #[inline]
    pub fn required_gas_with(&self, schedule: &GasSchedule, input: &[u8]) -> u64 {
        (self.gas)(schedule, input)
    }

    /// Runs the handler without metering.
    pub fn execute(&self, input: &[u8]) -> PrecompileResult {
        (self.handler)(input).inspect_err(|err| {
            debug!("{} rejected {} byte input: {err}", self.id, input.len());
        })
    }

    /// Charges gas under the default schedule and runs the handler.
    pub fn call(&self, input: &[u8], gas_limit: u64) -> PrecompileCallResult {
        self.call_with(&GasSchedule::DEFAULT, input, gas_limit)
    }

    /// Charges gas under `schedule` and runs the handler.
    ///
    /// Fails with [`PrecompileError::OutOfGas`] before the handler runs if the
    /// required gas exceeds `gas_limit`.
    pub fn call_with(
        &self,
        schedule: &GasSchedule,
        input: &[u8],
        gas_limit: u64,
    ) -> PrecompileCallResult {
        let gas_used = self.required_gas_with(schedule, input);
        trace!(
            "{} called with {} bytes, gas {gas_used}/{gas_limit}",
            self.id,
            input.len()
        );
        if gas_used > gas_limit {
            debug!("{} out of gas: required {gas_used}, limit {gas_limit}", self.id);
            return Err(PrecompileError::OutOfGas);
        }
        let bytes = self.execute(input)?;
        Ok(PrecompileOutput::new(gas_used, bytes))
    }
}

/// Address to precompile table, metered with a [`GasSchedule`].
#[derive(Clone, Debug, Default)]
pub struct Precompiles {
    /// Precompiles
    inner: HashMap<Address, Precompile>,
    /// Gas schedule used by [`Precompiles::call`].
    schedule: GasSchedule,
}

impl Precompiles {
    /// Returns the nine EIP-2537 precompiles with the default gas schedule.
    pub fn eip2537() -> &'static Self {
        static INSTANCE: OnceBox<Precompiles> = OnceBox::new();
        INSTANCE.get_or_init(|| Box::new(Self::with_schedule(GasSchedule::DEFAULT)))
    }

    /// Returns the nine EIP-2537 precompiles metered with `schedule`.
    pub fn with_schedule(schedule: GasSchedule) -> Self {
        let mut precompiles = Self {
            inner: HashMap::default(),
            schedule,
        };
        precompiles.extend(bls12_381::precompiles());
        precompiles
    }

    /// Returns the gas schedule.
    #[inline]
    pub fn schedule(&self) -> &GasSchedule {
        &self.schedule
    }

    /// Returns an iterator over the precompiles addresses.
    #[inline]
    pub fn addresses(&self) -> impl ExactSizeIterator<Item = &Address> {
        self.inner.keys()
    }

    /// Returns an iterator over the precompiles.
    #[inline]
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &Precompile> {
        self.inner.values()
    }

    /// Is the given address a precompile.
    #[inline]
    pub fn contains(&self, address: &Address) -> bool {
        self.inner.contains_key(address)
    }

    /// Returns the precompile for the given address.
    #[inline]
    pub fn get(&self, address: &Address) -> Option<&Precompile> {
        self.inner.get(address)
    }

    /// Is the precompiles list empty.
    pub fn is_empty(&self) -> bool {
        self.inner.len() == 0
    }

    /// Returns the number of precompiles.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Calls the precompile at `address`, or returns `None` if there is none.
    pub fn call(
        &self,
        address: &Address,
        input: &[u8],
        gas_limit: u64,
    ) -> Option<PrecompileCallResult> {
        let precompile = self.get(address)?;
        Some(precompile.call_with(&self.schedule, input, gas_limit))
    }

    /// Extends the precompiles with the given precompiles.
    ///
    /// Other precompiles with overwrite existing precompiles.
    #[inline]
    pub fn extend(&mut self, other: impl IntoIterator<Item = Precompile>) {
        self.inner.extend(other.into_iter().map(|p| (*p.address(), p)));
    }
}

/// Const function for making an address by concatenating the bytes from two given numbers.
///
/// Note that 32 + 128 = 160 = 20 bytes (the length of an address).
///
/// This function is used as a convenience for specifying the addresses of the various precompiles.
#[inline]
pub const fn u64_to_address(x: u64) -> Address {
    let x = x.to_be_bytes();
    Address::new([
        0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, x[0], x[1], x[2], x[3], x[4], x[5], x[6], x[7],
    ])
}

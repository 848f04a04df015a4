//! Core traits for incremental cryptographic digests.
//!
//! This crate provides the contract that every rsdigest algorithm conforms
//! to. It is `no_std` compatible (requires `alloc`) and has zero
//! dependencies.
//!
//! # Trait Hierarchy
//!
//! | Trait | Purpose | Examples |
//! |-------|---------|----------|
//! | [`Digest`] | Fixed-output streaming hashes | SHA-256, BLAKE2b-512 |
//! | [`DynDigest`] | Object-safe runtime-sized digest service | keyed BLAKE2, Skein |
//! | [`Xof`] | Extendable-output readers | SHAKE128, SHAKE256 |
//! | [`Snapshot`] | State export/import and checked deep copy | all of the above |
//!
//! # Error Types
//!
//! - [`ParamError`] - Invalid construction parameters (output/key/salt bounds)
//! - [`BufferTooShortError`] - Output slice shorter than the digest size
//! - [`StateError`] - Snapshot decode failures and deep-copy mismatches
//!
//! # Fallibility Discipline
//!
//! This crate denies `unwrap`, `expect`, and indexing in non-test code to
//! ensure all error paths are handled explicitly.
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

mod digest;
pub mod error;
#[cfg(feature = "std")]
pub mod io;
mod snapshot;
mod xof;

pub use digest::{Digest, DynDigest};
pub use error::{BufferTooShortError, ParamError, StateError};
pub use snapshot::Snapshot;
pub use xof::Xof;

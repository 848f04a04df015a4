//! Incremental cryptographic hash digest engines.
//!
//! This crate is `no_std` compatible (requires `alloc`) and has zero library
//! dependencies outside the rsdigest workspace. Dev-only dependencies are
//! used for oracle testing and benchmarking.
//!
//! # Algorithms
//!
//! - SHA-2: [`Sha224`], [`Sha256`], [`Sha384`], [`Sha512`], [`Sha512_224`],
//!   [`Sha512_256`], and runtime-truncated [`Sha512T`].
//! - BLAKE2: [`Blake2b`], [`Blake2s`] (keyed, salted, personalized) plus the
//!   fixed [`Blake2b512`] and [`Blake2s256`].
//! - SHA-3/SHAKE: [`Sha3_224`], [`Sha3_256`], [`Sha3_384`], [`Sha3_512`],
//!   [`Shake128`], [`Shake256`] and their XOF readers.
//! - Skein: [`Skein256`], [`Skein512`], [`Skein1024`] (keyed, parameterized)
//!   plus fixed-output wrappers.
//! - Bespoke block loops: [`Md2`] and [`Gost3411`].
//!
//! Every engine supports mid-stream deep copies and opaque state snapshots
//! via [`Snapshot`].
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod crypto;

mod state;
mod util;

pub use crypto::{
  Blake2b, Blake2b512, Blake2s, Blake2s256, Gost3411, Md2, Sha3_224, Sha3_256, Sha3_384, Sha3_512, Sha224, Sha256,
  Sha384, Sha512, Sha512T, Sha512_224, Sha512_256, Shake128, Shake128Xof, Shake256, Shake256Xof, Skein256,
  Skein256_256, Skein512, Skein512_256, Skein512_512, Skein1024, Skein1024_1024, SkeinParams,
};
pub use traits::{BufferTooShortError, Digest, DynDigest, ParamError, Snapshot, StateError, Xof};

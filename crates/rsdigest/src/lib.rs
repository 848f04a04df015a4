//! Incremental cryptographic hash digests in pure Rust.
//!
//! `rsdigest` bundles a family of streaming digest engines behind one
//! buffering/finalization contract: the SHA-2 family (with runtime
//! SHA-512/t), keyed/salted/personalized BLAKE2b and BLAKE2s, SHA-3 and
//! SHAKE over Keccak-f[1600], Skein-256/512/1024 over Threefish UBI
//! chaining, plus the bespoke MD2 and GOST R 34.11-94 block loops. Every
//! engine supports mid-stream deep copies and opaque state snapshots.
//!
//! Zero dependencies, `no_std` compatible (requires `alloc`).
//!
//! # Quick Start
//!
//! ```
//! use rsdigest::{Digest, Sha256};
//!
//! // One-shot computation
//! let digest = Sha256::digest(b"abc");
//!
//! // Streaming computation
//! let mut hasher = Sha256::new();
//! hasher.update(b"ab");
//! hasher.update(b"c");
//! assert_eq!(hasher.finalize(), digest);
//! ```
//!
//! # Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `std` | Yes | `std::io` reader/writer adapters |
#![cfg_attr(not(feature = "std"), no_std)]

pub use digests::crypto;
pub use digests::{
  Blake2b, Blake2b512, Blake2s, Blake2s256, Gost3411, Md2, Sha3_224, Sha3_256, Sha3_384, Sha3_512, Sha224, Sha256,
  Sha384, Sha512, Sha512T, Sha512_224, Sha512_256, Shake128, Shake128Xof, Shake256, Shake256Xof, Skein256,
  Skein256_256, Skein512, Skein512_256, Skein512_512, Skein1024, Skein1024_1024, SkeinParams,
};
pub use traits::{BufferTooShortError, Digest, DynDigest, ParamError, Snapshot, StateError, Xof};

#[cfg(feature = "std")]
pub use traits::io::{DigestReader, DigestWriter};

//! Cryptographic hash functions.

mod engine32;
mod engine64;
mod keccak;
mod threefish;

pub mod blake2b;
pub mod blake2s;
pub mod gost3411;
pub mod md2;
pub mod sha3;
pub mod sha224;
pub mod sha256;
pub mod sha384;
pub mod sha512;
pub mod sha512_224;
pub mod sha512_256;
pub mod sha512_t;
pub mod skein;

pub use blake2b::{Blake2b, Blake2b512};
pub use blake2s::{Blake2s, Blake2s256};
pub use gost3411::Gost3411;
pub use md2::Md2;
pub use sha3::{Sha3_224, Sha3_256, Sha3_384, Sha3_512, Shake128, Shake128Xof, Shake256, Shake256Xof};
pub use sha224::Sha224;
pub use sha256::Sha256;
pub use sha384::Sha384;
pub use sha512::Sha512;
pub use sha512_224::Sha512_224;
pub use sha512_256::Sha512_256;
pub use sha512_t::Sha512T;
pub use skein::{Skein256, Skein256_256, Skein512, Skein512_256, Skein512_512, Skein1024, Skein1024_1024, SkeinParams};

//! SHA-224 (FIPS 180-4).
//!
//! SHA-256 with a distinct initial hash value, truncated to 28 bytes.

#![allow(clippy::indexing_slicing)] // Fixed-width chain-value truncation

use traits::{Digest, Snapshot, StateError};

use super::{
  engine32::{BLOCK_LEN, Engine32},
  sha256::Sha256Core,
};
use crate::{
  state::{AlgTag, StateReader, StateWriter},
  util::store_be32,
};

const H0: [u32; 8] = [
  0xc1059ed8, 0x367cd507, 0x3070dd17, 0xf70e5939, 0xffc00b31, 0x68581511, 0x64f98fa7, 0xbefa4fa4,
];

#[derive(Clone)]
pub struct Sha224 {
  engine: Engine32<Sha256Core>,
}

impl Default for Sha224 {
  #[inline]
  fn default() -> Self {
    Self {
      engine: Engine32::new(Sha256Core::new(H0)),
    }
  }
}

impl Digest for Sha224 {
  const OUTPUT_SIZE: usize = 28;
  const BLOCK_SIZE: usize = BLOCK_LEN;
  const NAME: &'static str = "SHA-224";
  type Output = [u8; 28];

  #[inline]
  fn new() -> Self {
    Self::default()
  }

  #[inline]
  fn update(&mut self, data: &[u8]) {
    self.engine.update(data);
  }

  fn finalize(&self) -> Self::Output {
    let core = self.engine.finalize_core();
    let mut out = [0u8; 28];
    store_be32(&core.state()[..7], &mut out);
    out
  }

  #[inline]
  fn reset(&mut self) {
    self.engine.reset_with(Sha256Core::new(H0));
  }
}

impl Snapshot for Sha224 {
  fn snapshot(&self) -> alloc::vec::Vec<u8> {
    let mut w = StateWriter::new(AlgTag::Sha224);
    w.words32(self.engine.core().state());
    w.u64(self.engine.bytes_hashed());
    w.tail(self.engine.buffered());
    w.finish()
  }

  fn restore(blob: &[u8]) -> Result<Self, StateError> {
    let mut r = StateReader::new(blob, AlgTag::Sha224)?;
    let mut state = [0u32; 8];
    r.words32(&mut state)?;
    let bytes_hashed = r.u64()?;
    let buffered = r.tail()?;
    r.finish()?;
    Ok(Self {
      engine: Engine32::from_parts(Sha256Core::new(state), bytes_hashed, buffered)?,
    })
  }
}

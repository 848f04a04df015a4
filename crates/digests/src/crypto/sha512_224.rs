//! SHA-512/224 (FIPS 180-4).
//!
//! The full SHA-512 computation under the specification-mandated IV,
//! emitting the first 28 bytes. The output ends mid-word, so truncation
//! goes through the byte-granular store helper.

use traits::{Digest, Snapshot, StateError};

use super::{
  engine64::{BLOCK_LEN, Engine64},
  sha512::Sha512Core,
};
use crate::{
  state::{AlgTag, StateReader, StateWriter},
  util::store_be64_prefix,
};

const H0: [u64; 8] = [
  0x8c3d_37c8_1954_4da2,
  0x73e1_9966_89dc_d4d6,
  0x1dfa_b7ae_32ff_9c82,
  0x679d_d514_582f_9fcf,
  0x0f6d_2b69_7bd4_4da8,
  0x77e3_6f73_04c4_8942,
  0x3f9d_85a8_6a1d_36c8,
  0x1112_e6ad_91d6_92a1,
];

#[derive(Clone)]
pub struct Sha512_224 {
  engine: Engine64<Sha512Core>,
}

impl Default for Sha512_224 {
  #[inline]
  fn default() -> Self {
    Self {
      engine: Engine64::new(Sha512Core::new(H0)),
    }
  }
}

impl Digest for Sha512_224 {
  const OUTPUT_SIZE: usize = 28;
  const BLOCK_SIZE: usize = BLOCK_LEN;
  const NAME: &'static str = "SHA-512/224";
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
    store_be64_prefix(core.state(), &mut out);
    out
  }

  #[inline]
  fn reset(&mut self) {
    self.engine.reset_with(Sha512Core::new(H0));
  }
}

impl Snapshot for Sha512_224 {
  fn snapshot(&self) -> alloc::vec::Vec<u8> {
    let mut w = StateWriter::new(AlgTag::Sha512_224);
    w.words64(self.engine.core().state());
    w.u128(self.engine.bytes_hashed());
    w.tail(self.engine.buffered());
    w.finish()
  }

  fn restore(blob: &[u8]) -> Result<Self, StateError> {
    let mut r = StateReader::new(blob, AlgTag::Sha512_224)?;
    let mut state = [0u64; 8];
    r.words64(&mut state)?;
    let bytes_hashed = r.u128()?;
    let buffered = r.tail()?;
    r.finish()?;
    Ok(Self {
      engine: Engine64::from_parts(Sha512Core::new(state), bytes_hashed, buffered)?,
    })
  }
}

//! SHA-512/256 (FIPS 180-4).
//!
//! The full SHA-512 computation under the specification-mandated IV,
//! emitting the first 32 bytes.

#![allow(clippy::indexing_slicing)] // Fixed-width chain-value truncation

use traits::{Digest, Snapshot, StateError};

use super::{
  engine64::{BLOCK_LEN, Engine64},
  sha512::Sha512Core,
};
use crate::{
  state::{AlgTag, StateReader, StateWriter},
  util::store_be64,
};

const H0: [u64; 8] = [
  0x2231_2194_fc2b_f72c,
  0x9f55_5fa3_c84c_64c2,
  0x2393_b86b_6f53_b151,
  0x9638_7719_5940_eabd,
  0x9628_3ee2_a88e_ffe3,
  0xbe5e_1e25_5386_3992,
  0x2b01_99fc_2c85_b8aa,
  0x0eb7_2ddc_81c5_2ca2,
];

#[derive(Clone)]
pub struct Sha512_256 {
  engine: Engine64<Sha512Core>,
}

impl Default for Sha512_256 {
  #[inline]
  fn default() -> Self {
    Self {
      engine: Engine64::new(Sha512Core::new(H0)),
    }
  }
}

impl Digest for Sha512_256 {
  const OUTPUT_SIZE: usize = 32;
  const BLOCK_SIZE: usize = BLOCK_LEN;
  const NAME: &'static str = "SHA-512/256";
  type Output = [u8; 32];

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
    let mut out = [0u8; 32];
    store_be64(&core.state()[..4], &mut out);
    out
  }

  #[inline]
  fn reset(&mut self) {
    self.engine.reset_with(Sha512Core::new(H0));
  }
}

impl Snapshot for Sha512_256 {
  fn snapshot(&self) -> alloc::vec::Vec<u8> {
    let mut w = StateWriter::new(AlgTag::Sha512_256);
    w.words64(self.engine.core().state());
    w.u128(self.engine.bytes_hashed());
    w.tail(self.engine.buffered());
    w.finish()
  }

  fn restore(blob: &[u8]) -> Result<Self, StateError> {
    let mut r = StateReader::new(blob, AlgTag::Sha512_256)?;
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

//! SHA-384 (FIPS 180-4).
//!
//! SHA-512 with a distinct initial hash value, truncated to 48 bytes.

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
  0xcbbb_9d5d_c105_9ed8,
  0x629a_292a_367c_d507,
  0x9159_015a_3070_dd17,
  0x152f_ecd8_f70e_5939,
  0x6733_2667_ffc0_0b31,
  0x8eb4_4a87_6858_1511,
  0xdb0c_2e0d_64f9_8fa7,
  0x47b5_481d_befa_4fa4,
];

#[derive(Clone)]
pub struct Sha384 {
  engine: Engine64<Sha512Core>,
}

impl Default for Sha384 {
  #[inline]
  fn default() -> Self {
    Self {
      engine: Engine64::new(Sha512Core::new(H0)),
    }
  }
}

impl Digest for Sha384 {
  const OUTPUT_SIZE: usize = 48;
  const BLOCK_SIZE: usize = BLOCK_LEN;
  const NAME: &'static str = "SHA-384";
  type Output = [u8; 48];

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
    let mut out = [0u8; 48];
    store_be64(&core.state()[..6], &mut out);
    out
  }

  #[inline]
  fn reset(&mut self) {
    self.engine.reset_with(Sha512Core::new(H0));
  }
}

impl Snapshot for Sha384 {
  fn snapshot(&self) -> alloc::vec::Vec<u8> {
    let mut w = StateWriter::new(AlgTag::Sha384);
    w.words64(self.engine.core().state());
    w.u128(self.engine.bytes_hashed());
    w.tail(self.engine.buffered());
    w.finish()
  }

  fn restore(blob: &[u8]) -> Result<Self, StateError> {
    let mut r = StateReader::new(blob, AlgTag::Sha384)?;
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

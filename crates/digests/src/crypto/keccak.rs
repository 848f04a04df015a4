//! Keccak-f[1600] sponge core (internal).
//!
//! This module exposes only the minimum surface needed by the SHA-3 and
//! SHAKE wrappers: a rate-generic absorbing core and a squeeze reader.

#![allow(clippy::indexing_slicing)] // Keccak state is fixed-size; indexing is audited

use traits::StateError;

const ROUNDS: usize = 24;

// Round constants.
const RC: [u64; ROUNDS] = [
  0x0000_0000_0000_0001,
  0x0000_0000_0000_8082,
  0x8000_0000_0000_808a,
  0x8000_0000_8000_8000,
  0x0000_0000_0000_808b,
  0x0000_0000_8000_0001,
  0x8000_0000_8000_8081,
  0x8000_0000_0000_8009,
  0x0000_0000_0000_008a,
  0x0000_0000_0000_0088,
  0x0000_0000_8000_8009,
  0x0000_0000_8000_000a,
  0x0000_0000_8000_808b,
  0x8000_0000_0000_008b,
  0x8000_0000_0000_8089,
  0x8000_0000_0000_8003,
  0x8000_0000_0000_8002,
  0x8000_0000_0000_0080,
  0x0000_0000_0000_800a,
  0x8000_0000_8000_000a,
  0x8000_0000_8000_8081,
  0x8000_0000_0000_8080,
  0x0000_0000_8000_0001,
  0x8000_0000_8000_8008,
];

// Rotation offsets and lane order for the combined rho+pi walk.
const RHO: [u32; 24] = [
  1, 3, 6, 10, 15, 21, 28, 36, 45, 55, 2, 14, 27, 41, 56, 8, 25, 43, 62, 18, 39, 61, 20, 44,
];
const PI: [usize; 24] = [
  10, 7, 11, 17, 18, 3, 5, 16, 8, 21, 24, 4, 15, 23, 19, 13, 12, 2, 20, 14, 22, 9, 6, 1,
];

fn keccakf(a: &mut [u64; 25]) {
  for &rc in &RC {
    // θ
    let mut c = [0u64; 5];
    for x in 0..5 {
      c[x] = a[x] ^ a[x + 5] ^ a[x + 10] ^ a[x + 15] ^ a[x + 20];
    }
    for x in 0..5 {
      let d = c[(x + 4) % 5] ^ c[(x + 1) % 5].rotate_left(1);
      for y in 0..5 {
        a[x + 5 * y] ^= d;
      }
    }

    // ρ + π
    let mut last = a[1];
    for i in 0..24 {
      let j = PI[i];
      let tmp = a[j];
      a[j] = last.rotate_left(RHO[i]);
      last = tmp;
    }

    // χ
    for y in 0..5 {
      let row = [a[5 * y], a[5 * y + 1], a[5 * y + 2], a[5 * y + 3], a[5 * y + 4]];
      for x in 0..5 {
        a[5 * y + x] = row[x] ^ ((!row[(x + 1) % 5]) & row[(x + 2) % 5]);
      }
    }

    // ι
    a[0] ^= rc;
  }
}

#[derive(Clone)]
pub(crate) struct KeccakCore<const RATE: usize> {
  state: [u64; 25],
  buf: [u8; RATE],
  buf_len: usize,
}

impl<const RATE: usize> Default for KeccakCore<RATE> {
  #[inline]
  fn default() -> Self {
    Self {
      state: [0u64; 25],
      buf: [0u8; RATE],
      buf_len: 0,
    }
  }
}

impl<const RATE: usize> KeccakCore<RATE> {
  #[inline(always)]
  fn absorb_block(state: &mut [u64; 25], block: &[u8; RATE]) {
    debug_assert_eq!(RATE % 8, 0);
    let (lanes, _) = block.as_chunks::<8>();
    for (word, lane) in state.iter_mut().zip(lanes) {
      *word ^= u64::from_le_bytes(*lane);
    }
    keccakf(state);
  }

  pub(crate) fn update(&mut self, mut data: &[u8]) {
    if data.is_empty() {
      return;
    }

    if self.buf_len != 0 {
      let take = core::cmp::min(RATE - self.buf_len, data.len());
      self.buf[self.buf_len..self.buf_len + take].copy_from_slice(&data[..take]);
      self.buf_len += take;
      data = &data[take..];

      if self.buf_len == RATE {
        Self::absorb_block(&mut self.state, &self.buf);
        self.buf_len = 0;
      }
    }

    let (blocks, rest) = data.as_chunks::<RATE>();
    for block in blocks {
      Self::absorb_block(&mut self.state, block);
    }
    data = rest;

    if !data.is_empty() {
      self.buf[..data.len()].copy_from_slice(data);
      self.buf_len = data.len();
    }
  }

  /// Pad and absorb the final block, returning the finished state.
  #[inline(always)]
  fn finalize_state(&self, ds: u8) -> [u64; 25] {
    let mut state = self.state;
    let mut buf = self.buf;

    // Domain separator at the first free byte, then pad10*1.
    buf[self.buf_len..].fill(0);
    buf[self.buf_len] ^= ds;
    buf[RATE - 1] ^= 0x80;

    Self::absorb_block(&mut state, &buf);
    state
  }

  pub(crate) fn finalize_into_fixed<const OUT: usize>(&self, ds: u8) -> [u8; OUT] {
    debug_assert!(OUT <= RATE);
    let state = self.finalize_state(ds);

    let mut out = [0u8; OUT];
    for (i, byte) in out.iter_mut().enumerate() {
      *byte = (state[i / 8] >> (8 * (i % 8))) as u8;
    }
    out
  }

  pub(crate) fn finalize_xof(&self, ds: u8) -> KeccakXof<RATE> {
    let state = self.finalize_state(ds);
    let mut buf = [0u8; RATE];
    KeccakXof::<RATE>::fill_buf(&state, &mut buf);
    KeccakXof { state, buf, pos: 0 }
  }

  #[inline]
  pub(crate) fn state_words(&self) -> &[u64; 25] {
    &self.state
  }

  #[inline]
  pub(crate) fn buffered(&self) -> &[u8] {
    &self.buf[..self.buf_len]
  }

  /// Rebuild a core from snapshot fields.
  pub(crate) fn from_parts(state: [u64; 25], buffered: &[u8]) -> Result<Self, StateError> {
    if buffered.len() >= RATE {
      return Err(StateError::CorruptField);
    }
    let mut buf = [0u8; RATE];
    buf[..buffered.len()].copy_from_slice(buffered);
    Ok(Self {
      state,
      buf,
      buf_len: buffered.len(),
    })
  }
}

#[derive(Clone)]
pub(crate) struct KeccakXof<const RATE: usize> {
  state: [u64; 25],
  buf: [u8; RATE],
  pos: usize,
}

impl<const RATE: usize> KeccakXof<RATE> {
  #[inline(always)]
  fn fill_buf(state: &[u64; 25], out: &mut [u8; RATE]) {
    debug_assert_eq!(RATE % 8, 0);
    let (lanes, _) = out.as_chunks_mut::<8>();
    for (lane, word) in lanes.iter_mut().zip(state) {
      *lane = word.to_le_bytes();
    }
  }

  pub(crate) fn squeeze_into(&mut self, mut out: &mut [u8]) {
    while !out.is_empty() {
      if self.pos == RATE {
        keccakf(&mut self.state);
        Self::fill_buf(&self.state, &mut self.buf);
        self.pos = 0;
      }

      let take = core::cmp::min(RATE - self.pos, out.len());
      out[..take].copy_from_slice(&self.buf[self.pos..self.pos + take]);
      self.pos += take;
      out = &mut out[take..];
    }
  }
}

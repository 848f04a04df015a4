//! Merkle–Damgård buffering engine for 64-bit-word compression cores.
//!
//! The 64-bit sibling of [`engine32`](super::engine32): 128-byte blocks and
//! a 128-bit byte counter, so message lengths past 2^64 bits survive. The
//! padding writes a 128-bit big-endian bit length into the last sixteen
//! bytes of the final block.

#![allow(clippy::indexing_slicing)] // Fixed-size block buffer manipulation

use traits::StateError;

pub(crate) const BLOCK_LEN: usize = 128;

/// A 64-bit-word compression function owning its chain value.
pub(crate) trait Compress64: Clone {
  fn compress(&mut self, block: &[u8; BLOCK_LEN]);
}

#[derive(Clone)]
pub(crate) struct Engine64<C> {
  core: C,
  buf: [u8; BLOCK_LEN],
  buf_len: usize,
  bytes_hashed: u128,
}

impl<C: Compress64> Engine64<C> {
  #[inline]
  pub(crate) fn new(core: C) -> Self {
    Self {
      core,
      buf: [0u8; BLOCK_LEN],
      buf_len: 0,
      bytes_hashed: 0,
    }
  }

  pub(crate) fn update(&mut self, mut data: &[u8]) {
    if data.is_empty() {
      return;
    }

    if self.buf_len != 0 {
      let take = core::cmp::min(BLOCK_LEN - self.buf_len, data.len());
      self.buf[self.buf_len..self.buf_len + take].copy_from_slice(&data[..take]);
      self.buf_len += take;
      data = &data[take..];

      if self.buf_len == BLOCK_LEN {
        self.core.compress(&self.buf);
        self.bytes_hashed = self.bytes_hashed.wrapping_add(BLOCK_LEN as u128);
        self.buf_len = 0;
      }
    }

    let (blocks, rest) = data.as_chunks::<BLOCK_LEN>();
    if !blocks.is_empty() {
      for block in blocks {
        self.core.compress(block);
      }
      self.bytes_hashed = self.bytes_hashed.wrapping_add((blocks.len() * BLOCK_LEN) as u128);
    }
    data = rest;

    if !data.is_empty() {
      self.buf[..data.len()].copy_from_slice(data);
      self.buf_len = data.len();
    }
  }

  /// Pad, compress the final block(s), and return the finished core.
  ///
  /// `self` is left untouched.
  #[must_use]
  pub(crate) fn finalize_core(&self) -> C {
    let mut core = self.core.clone();
    let mut block = self.buf;
    let mut len = self.buf_len;
    let bit_len = self.bytes_hashed.wrapping_add(len as u128) << 3;

    block[len] = 0x80;
    len += 1;

    if len > 112 {
      block[len..].fill(0);
      core.compress(&block);
      block = [0u8; BLOCK_LEN];
      len = 0;
    }

    block[len..112].fill(0);
    block[112..128].copy_from_slice(&bit_len.to_be_bytes());
    core.compress(&block);
    core
  }

  #[inline]
  pub(crate) fn reset_with(&mut self, core: C) {
    self.core = core;
    self.buf = [0u8; BLOCK_LEN];
    self.buf_len = 0;
    self.bytes_hashed = 0;
  }

  #[inline]
  pub(crate) fn core(&self) -> &C {
    &self.core
  }

  #[inline]
  pub(crate) fn bytes_hashed(&self) -> u128 {
    self.bytes_hashed
  }

  #[inline]
  pub(crate) fn buffered(&self) -> &[u8] {
    &self.buf[..self.buf_len]
  }

  /// Rebuild an engine from snapshot fields.
  pub(crate) fn from_parts(core: C, bytes_hashed: u128, buffered: &[u8]) -> Result<Self, StateError> {
    if buffered.len() >= BLOCK_LEN || !bytes_hashed.is_multiple_of(BLOCK_LEN as u128) {
      return Err(StateError::CorruptField);
    }
    let mut buf = [0u8; BLOCK_LEN];
    buf[..buffered.len()].copy_from_slice(buffered);
    Ok(Self {
      core,
      buf,
      buf_len: buffered.len(),
      bytes_hashed,
    })
  }
}

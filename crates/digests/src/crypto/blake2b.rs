//! BLAKE2b (RFC 7693), keyed, salted, and personalized.
//!
//! Portable, `no_std`, pure Rust implementation. [`Blake2b`] carries its
//! parameters at runtime (output length, optional key/salt/personalization);
//! [`Blake2b512`] is the fixed unkeyed 64-byte instance.
//!
//! The compression function consumes a final-block flag, so a completed
//! block is never compressed while it could still be the last one: the
//! engine keeps the most recent full block buffered and only compresses it
//! once later input proves another block follows.

#![allow(clippy::indexing_slicing)] // Compression schedule uses fixed indices

use alloc::{borrow::Cow, boxed::Box, vec::Vec};

use traits::{BufferTooShortError, Digest, DynDigest, ParamError, Snapshot, StateError};

use crate::{
  state::{AlgTag, StateReader, StateWriter},
  util::{load_le64, store_le64},
};

const BLOCK_LEN: usize = 128;
const MAX_OUT: usize = 64;
const MAX_KEY: usize = 64;
const SALT_LEN: usize = 16;
const PERSONAL_LEN: usize = 16;

const IV: [u64; 8] = [
  0x6a09_e667_f3bc_c908,
  0xbb67_ae85_84ca_a73b,
  0x3c6e_f372_fe94_f82b,
  0xa54f_f53a_5f1d_36f1,
  0x510e_527f_ade6_82d1,
  0x9b05_688c_2b3e_6c1f,
  0x1f83_d9ab_fb41_bd6b,
  0x5be0_cd19_137e_2179,
];

const SIGMA: [[usize; 16]; 12] = [
  [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15],
  [14, 10, 4, 8, 9, 15, 13, 6, 1, 12, 0, 2, 11, 7, 5, 3],
  [11, 8, 12, 0, 5, 2, 15, 13, 10, 14, 3, 6, 7, 1, 9, 4],
  [7, 9, 3, 1, 13, 12, 11, 14, 2, 6, 5, 10, 4, 0, 15, 8],
  [9, 0, 5, 7, 2, 4, 10, 15, 14, 1, 11, 12, 6, 8, 3, 13],
  [2, 12, 6, 10, 0, 11, 8, 3, 4, 13, 7, 5, 15, 14, 1, 9],
  [12, 5, 1, 15, 14, 13, 4, 10, 0, 7, 6, 3, 9, 2, 8, 11],
  [13, 11, 7, 14, 12, 1, 3, 9, 5, 0, 15, 4, 8, 6, 2, 10],
  [6, 15, 14, 9, 11, 3, 0, 8, 12, 2, 13, 7, 1, 4, 10, 5],
  [10, 2, 8, 4, 7, 6, 1, 5, 15, 11, 9, 14, 3, 12, 13, 0],
  [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15],
  [14, 10, 4, 8, 9, 15, 13, 6, 1, 12, 0, 2, 11, 7, 5, 3],
];

#[inline(always)]
fn g(v: &mut [u64; 16], a: usize, b: usize, c: usize, d: usize, x: u64, y: u64) {
  v[a] = v[a].wrapping_add(v[b]).wrapping_add(x);
  v[d] = (v[d] ^ v[a]).rotate_right(32);
  v[c] = v[c].wrapping_add(v[d]);
  v[b] = (v[b] ^ v[c]).rotate_right(24);
  v[a] = v[a].wrapping_add(v[b]).wrapping_add(y);
  v[d] = (v[d] ^ v[a]).rotate_right(16);
  v[c] = v[c].wrapping_add(v[d]);
  v[b] = (v[b] ^ v[c]).rotate_right(63);
}

#[inline(always)]
fn compress(h: &mut [u64; 8], block: &[u8; BLOCK_LEN], t: u128, is_last: bool) {
  let mut m = [0u64; 16];
  load_le64(block, &mut m);

  let mut v = [0u64; 16];
  v[..8].copy_from_slice(h);
  v[8..].copy_from_slice(&IV);
  v[12] ^= t as u64;
  v[13] ^= (t >> 64) as u64;
  if is_last {
    v[14] = !v[14];
  }

  for s in &SIGMA {
    g(&mut v, 0, 4, 8, 12, m[s[0]], m[s[1]]);
    g(&mut v, 1, 5, 9, 13, m[s[2]], m[s[3]]);
    g(&mut v, 2, 6, 10, 14, m[s[4]], m[s[5]]);
    g(&mut v, 3, 7, 11, 15, m[s[6]], m[s[7]]);

    g(&mut v, 0, 5, 10, 15, m[s[8]], m[s[9]]);
    g(&mut v, 1, 6, 11, 12, m[s[10]], m[s[11]]);
    g(&mut v, 2, 7, 8, 13, m[s[12]], m[s[13]]);
    g(&mut v, 3, 4, 9, 14, m[s[14]], m[s[15]]);
  }

  for i in 0..8 {
    h[i] ^= v[i] ^ v[i + 8];
  }
}

/// Runtime-parameterized BLAKE2b.
///
/// The key, salt, and personalization fixed at construction survive
/// [`reset`](Self::reset); counters, buffer, and chain value do not.
///
/// # Examples
///
/// ```
/// use digests::Blake2b;
///
/// let mut mac = Blake2b::new_keyed(32, b"secret key")?;
/// mac.update(b"message");
/// let mut tag = [0u8; 32];
/// mac.finalize_into(&mut tag)?;
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone)]
pub struct Blake2b {
  h: [u64; 8],
  buf: [u8; BLOCK_LEN],
  buf_len: usize,
  bytes_hashed: u128,
  h0: [u64; 8],
  key_block: [u8; BLOCK_LEN],
  key_len: usize,
  out_len: usize,
}

impl Blake2b {
  /// Unkeyed BLAKE2b with an output length of 1..=64 bytes.
  pub fn new(out_len: usize) -> Result<Self, ParamError> {
    Self::with_params(out_len, None, None, None)
  }

  /// Keyed BLAKE2b (Prefix-MAC mode) with a key of at most 64 bytes.
  pub fn new_keyed(out_len: usize, key: &[u8]) -> Result<Self, ParamError> {
    Self::with_params(out_len, Some(key), None, None)
  }

  /// Fully parameterized construction.
  ///
  /// `salt` and `personal`, when present, must be exactly 16 bytes each.
  pub fn with_params(
    out_len: usize,
    key: Option<&[u8]>,
    salt: Option<&[u8]>,
    personal: Option<&[u8]>,
  ) -> Result<Self, ParamError> {
    if out_len < 1 || out_len > MAX_OUT {
      return Err(ParamError::OutputLen {
        requested: out_len,
        min: 1,
        max: MAX_OUT,
      });
    }
    let key = key.unwrap_or(&[]);
    if key.len() > MAX_KEY {
      return Err(ParamError::KeyLen {
        requested: key.len(),
        max: MAX_KEY,
      });
    }
    if let Some(salt) = salt
      && salt.len() != SALT_LEN
    {
      return Err(ParamError::SaltLen {
        requested: salt.len(),
        expected: SALT_LEN,
      });
    }
    if let Some(personal) = personal
      && personal.len() != PERSONAL_LEN
    {
      return Err(ParamError::PersonalLen {
        requested: personal.len(),
        expected: PERSONAL_LEN,
      });
    }

    // Parameter block: digest length, key length, fanout 1, depth 1, then
    // salt and personalization words, all folded into the IV.
    let mut p = [0u64; 8];
    p[0] = out_len as u64 | (key.len() as u64) << 8 | 0x0101_0000;
    if let Some(salt) = salt {
      load_le64(salt, &mut p[4..6]);
    }
    if let Some(personal) = personal {
      load_le64(personal, &mut p[6..8]);
    }

    let mut h0 = IV;
    for (h, p) in h0.iter_mut().zip(&p) {
      *h ^= p;
    }

    let mut key_block = [0u8; BLOCK_LEN];
    key_block[..key.len()].copy_from_slice(key);

    let mut d = Self {
      h: h0,
      buf: [0u8; BLOCK_LEN],
      buf_len: 0,
      bytes_hashed: 0,
      h0,
      key_block,
      key_len: key.len(),
      out_len,
    };
    d.reset();
    Ok(d)
  }

  /// Internal constructor for the fixed unkeyed wrappers.
  pub(crate) fn fixed(out_len: usize) -> Self {
    debug_assert!((1..=MAX_OUT).contains(&out_len));
    let mut h0 = IV;
    h0[0] ^= out_len as u64 | 0x0101_0000;
    Self {
      h: h0,
      buf: [0u8; BLOCK_LEN],
      buf_len: 0,
      bytes_hashed: 0,
      h0,
      key_block: [0u8; BLOCK_LEN],
      key_len: 0,
      out_len,
    }
  }

  /// Output size in bytes.
  #[inline]
  #[must_use]
  pub fn output_size(&self) -> usize {
    self.out_len
  }

  /// Update the digest with additional data.
  pub fn update(&mut self, mut data: &[u8]) {
    if data.is_empty() {
      return;
    }

    if self.buf_len != 0 {
      let take = core::cmp::min(BLOCK_LEN - self.buf_len, data.len());
      self.buf[self.buf_len..self.buf_len + take].copy_from_slice(&data[..take]);
      self.buf_len += take;
      data = &data[take..];

      // Keep a full block buffered until we know there is more input, so the
      // final block can be compressed with the last-block flag.
      if self.buf_len == BLOCK_LEN && !data.is_empty() {
        self.bytes_hashed = self.bytes_hashed.wrapping_add(BLOCK_LEN as u128);
        compress(&mut self.h, &self.buf, self.bytes_hashed, false);
        self.buf_len = 0;
      }
    }

    let (blocks, rest) = data.as_chunks::<BLOCK_LEN>();
    if !blocks.is_empty() {
      // If `rest` is empty, hold back the last full block for finalization.
      let (to_compress, last_full) = if rest.is_empty() {
        (&blocks[..blocks.len() - 1], Some(blocks[blocks.len() - 1]))
      } else {
        (blocks, None)
      };

      for block in to_compress {
        self.bytes_hashed = self.bytes_hashed.wrapping_add(BLOCK_LEN as u128);
        compress(&mut self.h, block, self.bytes_hashed, false);
      }

      if let Some(last) = last_full {
        self.buf.copy_from_slice(&last);
        self.buf_len = BLOCK_LEN;
      }
    }
    data = rest;

    if !data.is_empty() {
      self.buf[..data.len()].copy_from_slice(data);
      self.buf_len = data.len();
    }
  }

  /// Full 64-byte chain-value output; callers truncate to `out_len`.
  pub(crate) fn finalize_raw(&self) -> [u8; MAX_OUT] {
    let mut h = self.h;
    let mut buf = self.buf;
    let len = self.buf_len;

    buf[len..].fill(0);
    let t = self.bytes_hashed.wrapping_add(len as u128);
    compress(&mut h, &buf, t, true);

    let mut out = [0u8; MAX_OUT];
    store_le64(&h, &mut out);
    out
  }

  /// Finalize into the front of `out`, returning the number of bytes written.
  ///
  /// Does not consume or reset the digest.
  pub fn finalize_into(&self, out: &mut [u8]) -> Result<usize, BufferTooShortError> {
    if out.len() < self.out_len {
      return Err(BufferTooShortError::new(self.out_len, out.len()));
    }
    let raw = self.finalize_raw();
    out[..self.out_len].copy_from_slice(&raw[..self.out_len]);
    Ok(self.out_len)
  }

  /// Reset to the post-construction state.
  ///
  /// A configured key is folded back into the first block.
  pub fn reset(&mut self) {
    self.h = self.h0;
    self.bytes_hashed = 0;
    if self.key_len > 0 {
      self.buf = self.key_block;
      self.buf_len = BLOCK_LEN;
    } else {
      self.buf = [0u8; BLOCK_LEN];
      self.buf_len = 0;
    }
  }
}

impl DynDigest for Blake2b {
  fn algorithm_name(&self) -> Cow<'static, str> {
    Cow::Borrowed("BLAKE2b")
  }

  #[inline]
  fn output_size(&self) -> usize {
    self.out_len
  }

  #[inline]
  fn block_size(&self) -> usize {
    BLOCK_LEN
  }

  #[inline]
  fn update(&mut self, data: &[u8]) {
    Blake2b::update(self, data);
  }

  fn finalize_into_reset(&mut self, out: &mut [u8]) -> Result<usize, BufferTooShortError> {
    let written = self.finalize_into(out)?;
    self.reset();
    Ok(written)
  }

  #[inline]
  fn reset(&mut self) {
    Blake2b::reset(self);
  }

  fn box_clone(&self) -> Box<dyn DynDigest> {
    Box::new(self.clone())
  }
}

impl Snapshot for Blake2b {
  fn snapshot(&self) -> Vec<u8> {
    let mut w = StateWriter::new(AlgTag::Blake2b);
    w.u8(self.out_len as u8);
    w.u8(self.key_len as u8);
    w.bytes(&self.key_block[..self.key_len]);
    w.words64(&self.h0);
    w.words64(&self.h);
    w.u128(self.bytes_hashed);
    w.tail(&self.buf[..self.buf_len]);
    w.finish()
  }

  fn restore(blob: &[u8]) -> Result<Self, StateError> {
    let mut r = StateReader::new(blob, AlgTag::Blake2b)?;
    let out_len = r.u8()? as usize;
    let key_len = r.u8()? as usize;
    if out_len < 1 || out_len > MAX_OUT || key_len > MAX_KEY {
      return Err(StateError::CorruptField);
    }
    let mut key_block = [0u8; BLOCK_LEN];
    r.bytes(&mut key_block[..key_len])?;
    let mut h0 = [0u64; 8];
    r.words64(&mut h0)?;
    let mut h = [0u64; 8];
    r.words64(&mut h)?;
    let bytes_hashed = r.u128()?;
    let buffered = r.tail()?;
    r.finish()?;
    if buffered.len() > BLOCK_LEN || !bytes_hashed.is_multiple_of(BLOCK_LEN as u128) {
      return Err(StateError::CorruptField);
    }
    let mut buf = [0u8; BLOCK_LEN];
    buf[..buffered.len()].copy_from_slice(buffered);
    Ok(Self {
      h,
      buf,
      buf_len: buffered.len(),
      bytes_hashed,
      h0,
      key_block,
      key_len,
      out_len,
    })
  }

  fn restore_from(&mut self, source: &Self) -> Result<(), StateError> {
    if self.out_len != source.out_len
      || self.key_len != source.key_len
      || self.key_block != source.key_block
      || self.h0 != source.h0
    {
      return Err(StateError::ParameterMismatch);
    }
    *self = source.clone();
    Ok(())
  }
}

/// Fixed unkeyed BLAKE2b-512.
#[derive(Clone)]
pub struct Blake2b512 {
  inner: Blake2b,
}

impl Default for Blake2b512 {
  #[inline]
  fn default() -> Self {
    Self {
      inner: Blake2b::fixed(64),
    }
  }
}

impl Digest for Blake2b512 {
  const OUTPUT_SIZE: usize = 64;
  const BLOCK_SIZE: usize = BLOCK_LEN;
  const NAME: &'static str = "BLAKE2b-512";
  type Output = [u8; 64];

  #[inline]
  fn new() -> Self {
    Self::default()
  }

  #[inline]
  fn update(&mut self, data: &[u8]) {
    self.inner.update(data);
  }

  #[inline]
  fn finalize(&self) -> Self::Output {
    self.inner.finalize_raw()
  }

  #[inline]
  fn reset(&mut self) {
    self.inner.reset();
  }
}

impl Snapshot for Blake2b512 {
  fn snapshot(&self) -> Vec<u8> {
    self.inner.snapshot()
  }

  fn restore(blob: &[u8]) -> Result<Self, StateError> {
    let inner = Blake2b::restore(blob)?;
    if inner.out_len != 64 || inner.key_len != 0 {
      return Err(StateError::ParameterMismatch);
    }
    Ok(Self { inner })
  }
}

//! GOST R 34.11-94 with the standard parameter-set S-box.
//!
//! Like MD2, this digest does not fit the Merkle–Damgård engines and runs
//! its own 32-byte block loop: each block generates four GOST 28147-89 keys
//! through the P/A transforms, encrypts the four quarters of the chain
//! value, and mixes the result through the ψ LFSR (ψ^12, ψ, ψ^61). A
//! running mod-2^256 sum of all message blocks and the bit length are
//! hashed as two trailing blocks at finalization.

#![allow(clippy::indexing_slicing)] // Fixed-size state and S-box indexing

use alloc::vec::Vec;

use traits::{Digest, Snapshot, StateError};

use crate::{
  state::{AlgTag, StateReader, StateWriter},
  util::load_le32,
};

const BLOCK_LEN: usize = 32;

// id-GostR3411-94-TestParamSet; row i substitutes nibble i.
const SBOX: [[u8; 16]; 8] = [
  [4, 10, 9, 2, 13, 8, 0, 14, 6, 11, 1, 12, 7, 15, 5, 3],
  [14, 11, 4, 12, 6, 13, 15, 10, 2, 3, 8, 1, 0, 7, 5, 9],
  [5, 8, 1, 13, 10, 3, 4, 2, 14, 15, 12, 7, 6, 0, 9, 11],
  [7, 13, 10, 1, 0, 8, 9, 15, 14, 4, 6, 12, 11, 2, 5, 3],
  [6, 12, 7, 1, 5, 15, 13, 8, 4, 10, 9, 14, 0, 3, 11, 2],
  [4, 11, 10, 0, 7, 2, 1, 13, 3, 6, 8, 5, 9, 12, 15, 14],
  [13, 11, 4, 1, 3, 15, 5, 9, 0, 10, 14, 7, 6, 8, 2, 12],
  [1, 15, 13, 0, 5, 7, 10, 4, 9, 2, 3, 14, 6, 11, 8, 12],
];

// Key order: k1..k8 three times forward, then once reversed.
const SCHEDULE: [usize; 32] = [
  0, 1, 2, 3, 4, 5, 6, 7, 0, 1, 2, 3, 4, 5, 6, 7, 0, 1, 2, 3, 4, 5, 6, 7, 7, 6, 5, 4, 3, 2, 1, 0,
];

// Iteration constant for the third key generation; the second and fourth
// use all-zero constants.
const C3: [u8; 32] = [
  0x00, 0xff, 0x00, 0xff, 0x00, 0xff, 0x00, 0xff, 0xff, 0x00, 0xff, 0x00, 0xff, 0x00, 0xff, 0x00, 0x00, 0xff, 0xff,
  0x00, 0xff, 0x00, 0x00, 0xff, 0xff, 0x00, 0x00, 0x00, 0xff, 0xff, 0x00, 0xff,
];

#[inline(always)]
fn substitute(x: u32) -> u32 {
  let mut out = 0u32;
  for (i, row) in SBOX.iter().enumerate() {
    let nibble = ((x >> (4 * i)) & 0xf) as usize;
    out |= (row[nibble] as u32) << (4 * i);
  }
  out
}

#[inline(always)]
fn round_g(key: u32, x: u32) -> u32 {
  substitute(x.wrapping_add(key)).rotate_left(11)
}

/// GOST 28147-89 ECB encryption of one 8-byte half-pair.
fn encrypt_block(key: &[u32; 8], input: &[u8; 8], out: &mut [u8]) {
  let mut n1 = u32::from_le_bytes([input[0], input[1], input[2], input[3]]);
  let mut n2 = u32::from_le_bytes([input[4], input[5], input[6], input[7]]);

  for &k in &SCHEDULE[..31] {
    let t = round_g(key[k], n1) ^ n2;
    n2 = n1;
    n1 = t;
  }
  // Final round leaves the halves in place.
  n2 = round_g(key[SCHEDULE[31]], n1) ^ n2;

  out[..4].copy_from_slice(&n1.to_le_bytes());
  out[4..8].copy_from_slice(&n2.to_le_bytes());
}

/// Byte-interleaving key selection.
fn transform_p(w: &[u8; 32]) -> [u32; 8] {
  let mut k = [0u8; 32];
  for i in 0..8 {
    k[4 * i] = w[i];
    k[4 * i + 1] = w[8 + i];
    k[4 * i + 2] = w[16 + i];
    k[4 * i + 3] = w[24 + i];
  }
  let mut key = [0u32; 8];
  load_le32(&k, &mut key);
  key
}

/// Word-shift mixing: drop the first 8-byte group, append the XOR of the
/// first two.
fn transform_a(y: &mut [u8; 32]) {
  let mut head = [0u8; 8];
  for (h, (a, b)) in head.iter_mut().zip(y[..8].iter().zip(&y[8..16])) {
    *h = a ^ b;
  }
  y.copy_within(8..32, 0);
  y[24..32].copy_from_slice(&head);
}

/// One step of the ψ LFSR over sixteen little-endian 16-bit words.
fn psi(s: &mut [u8; 32]) {
  let mut w = [0u16; 16];
  let (chunks, _) = s.as_chunks::<2>();
  for (word, chunk) in w.iter_mut().zip(chunks) {
    *word = u16::from_le_bytes(*chunk);
  }

  let tap = w[0] ^ w[1] ^ w[2] ^ w[3] ^ w[12] ^ w[15];

  let (chunks, _) = s.as_chunks_mut::<2>();
  for (chunk, word) in chunks.iter_mut().zip(w[1..].iter()) {
    *chunk = word.to_le_bytes();
  }
  chunks[15] = tap.to_le_bytes();
}

fn process_block(h: &mut [u8; 32], m: &[u8; 32]) {
  let mut u = *h;
  let mut v = *m;
  let mut s = [0u8; 32];

  for i in 0..4 {
    if i > 0 {
      transform_a(&mut u);
      if i == 2 {
        for (u, c) in u.iter_mut().zip(&C3) {
          *u ^= c;
        }
      }
      transform_a(&mut v);
      transform_a(&mut v);
    }

    let mut w = [0u8; 32];
    for (w, (u, v)) in w.iter_mut().zip(u.iter().zip(&v)) {
      *w = u ^ v;
    }
    let key = transform_p(&w);

    let mut quarter = [0u8; 8];
    quarter.copy_from_slice(&h[8 * i..8 * i + 8]);
    encrypt_block(&key, &quarter, &mut s[8 * i..8 * i + 8]);
  }

  // H' = ψ^61( H ⊕ ψ( M ⊕ ψ^12(S) ) )
  for _ in 0..12 {
    psi(&mut s);
  }
  for (s, m) in s.iter_mut().zip(m) {
    *s ^= m;
  }
  psi(&mut s);
  for (s, h) in s.iter_mut().zip(h.iter()) {
    *s ^= h;
  }
  for _ in 0..61 {
    psi(&mut s);
  }
  *h = s;
}

/// Little-endian mod-2^256 accumulation of message blocks.
fn sum_add(sum: &mut [u8; 32], block: &[u8; 32]) {
  let mut carry = 0u16;
  for (s, b) in sum.iter_mut().zip(block) {
    let t = *s as u16 + *b as u16 + carry;
    *s = t as u8;
    carry = t >> 8;
  }
}

/// GOST R 34.11-94 digest (standard parameter set).
#[derive(Clone)]
pub struct Gost3411 {
  h: [u8; 32],
  sum: [u8; 32],
  buf: [u8; BLOCK_LEN],
  buf_len: usize,
  byte_count: u64,
}

impl Default for Gost3411 {
  #[inline]
  fn default() -> Self {
    Self {
      h: [0u8; 32],
      sum: [0u8; 32],
      buf: [0u8; BLOCK_LEN],
      buf_len: 0,
      byte_count: 0,
    }
  }
}

impl Gost3411 {
  fn ingest_block(&mut self, block: &[u8; BLOCK_LEN]) {
    sum_add(&mut self.sum, block);
    process_block(&mut self.h, block);
  }
}

impl Digest for Gost3411 {
  const OUTPUT_SIZE: usize = 32;
  const BLOCK_SIZE: usize = BLOCK_LEN;
  const NAME: &'static str = "GOST3411";
  type Output = [u8; 32];

  #[inline]
  fn new() -> Self {
    Self::default()
  }

  fn update(&mut self, mut data: &[u8]) {
    if data.is_empty() {
      return;
    }
    self.byte_count = self.byte_count.wrapping_add(data.len() as u64);

    if self.buf_len != 0 {
      let take = core::cmp::min(BLOCK_LEN - self.buf_len, data.len());
      self.buf[self.buf_len..self.buf_len + take].copy_from_slice(&data[..take]);
      self.buf_len += take;
      data = &data[take..];

      if self.buf_len == BLOCK_LEN {
        let block = self.buf;
        self.ingest_block(&block);
        self.buf_len = 0;
      }
    }

    let (blocks, rest) = data.as_chunks::<BLOCK_LEN>();
    for block in blocks {
      self.ingest_block(block);
    }
    data = rest;

    if !data.is_empty() {
      self.buf[..data.len()].copy_from_slice(data);
      self.buf_len = data.len();
    }
  }

  fn finalize(&self) -> Self::Output {
    let mut h = self.h;
    let mut sum = self.sum;
    let bit_len = self.byte_count.wrapping_mul(8);

    // A trailing partial block is zero-filled and hashed as a normal
    // message block (the zeros do not disturb the running sum).
    if self.buf_len != 0 {
      let mut block = self.buf;
      block[self.buf_len..].fill(0);
      sum_add(&mut sum, &block);
      process_block(&mut h, &block);
    }

    // Bit length and running sum close the computation; neither feeds the
    // sum itself.
    let mut length_block = [0u8; BLOCK_LEN];
    length_block[..8].copy_from_slice(&bit_len.to_le_bytes());
    process_block(&mut h, &length_block);
    process_block(&mut h, &sum);

    h
  }

  #[inline]
  fn reset(&mut self) {
    *self = Self::default();
  }
}

impl Snapshot for Gost3411 {
  fn snapshot(&self) -> Vec<u8> {
    let mut w = StateWriter::new(AlgTag::Gost3411);
    w.bytes(&self.h);
    w.bytes(&self.sum);
    w.u64(self.byte_count);
    w.tail(&self.buf[..self.buf_len]);
    w.finish()
  }

  fn restore(blob: &[u8]) -> Result<Self, StateError> {
    let mut r = StateReader::new(blob, AlgTag::Gost3411)?;
    let mut h = [0u8; 32];
    r.bytes(&mut h)?;
    let mut sum = [0u8; 32];
    r.bytes(&mut sum)?;
    let byte_count = r.u64()?;
    let buffered = r.tail()?;
    r.finish()?;
    if buffered.len() >= BLOCK_LEN {
      return Err(StateError::CorruptField);
    }
    let mut buf = [0u8; BLOCK_LEN];
    buf[..buffered.len()].copy_from_slice(buffered);
    Ok(Self {
      h,
      sum,
      buf,
      buf_len: buffered.len(),
      byte_count,
    })
  }
}

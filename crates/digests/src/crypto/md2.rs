//! MD2 (RFC 1319).
//!
//! Legacy 16-byte digest kept for interoperability with old PKCS stacks.
//! MD2 does not fit the Merkle–Damgård engines: it has no bit counter,
//! pads with N bytes of value N, and appends a running checksum block that
//! is hashed after the padded message.

#![allow(clippy::indexing_slicing)] // Fixed-size state and S-box indexing

use alloc::vec::Vec;

use traits::{Digest, Snapshot, StateError};

use crate::state::{AlgTag, StateReader, StateWriter};

const BLOCK_LEN: usize = 16;

// Substitution table derived from the digits of pi.
const S: [u8; 256] = [
  41, 46, 67, 201, 162, 216, 124, 1, 61, 54, 84, 161, 236, 240, 6, 19, 98, 167, 5, 243, 192, 199, 115, 140, 152,
  147, 43, 217, 188, 76, 130, 202, 30, 155, 87, 60, 253, 212, 224, 22, 103, 66, 111, 24, 138, 23, 229, 18, 190, 78,
  196, 214, 218, 158, 222, 73, 160, 251, 245, 142, 187, 47, 238, 122, 169, 104, 121, 145, 21, 178, 7, 63, 148, 194,
  16, 137, 11, 34, 95, 33, 128, 127, 93, 154, 90, 144, 50, 39, 53, 62, 204, 231, 191, 247, 151, 3, 255, 25, 48,
  179, 72, 165, 181, 209, 215, 94, 146, 42, 172, 86, 170, 198, 79, 184, 56, 210, 150, 164, 125, 182, 118, 252, 107,
  226, 156, 116, 4, 241, 69, 157, 112, 89, 100, 113, 135, 32, 134, 91, 207, 101, 230, 45, 168, 2, 27, 96, 37, 173,
  174, 176, 185, 246, 28, 70, 97, 105, 52, 64, 126, 15, 85, 71, 163, 35, 221, 81, 175, 58, 195, 92, 249, 206, 186,
  197, 234, 38, 44, 83, 13, 110, 133, 40, 132, 9, 211, 223, 205, 244, 65, 129, 77, 82, 106, 220, 55, 200, 108, 193,
  171, 250, 36, 225, 123, 8, 12, 189, 177, 74, 120, 136, 149, 139, 227, 99, 232, 109, 233, 203, 213, 254, 59, 0,
  29, 57, 242, 239, 183, 14, 102, 88, 208, 228, 166, 119, 114, 248, 235, 117, 75, 10, 49, 68, 80, 180, 143, 237,
  31, 26, 219, 153, 141, 51, 159, 17, 131, 20,
];

/// Mix one 16-byte block into the 48-byte state.
fn process_block(x: &mut [u8; 48], block: &[u8; BLOCK_LEN]) {
  for j in 0..BLOCK_LEN {
    x[16 + j] = block[j];
    x[32 + j] = x[16 + j] ^ x[j];
  }
  let mut t = 0usize;
  for round in 0..18 {
    for k in 0..48 {
      x[k] ^= S[t];
      t = x[k] as usize;
    }
    t = (t + round) & 0xff;
  }
}

/// Fold one block into the running checksum.
fn update_checksum(c: &mut [u8; BLOCK_LEN], block: &[u8; BLOCK_LEN]) {
  let mut l = c[15];
  for j in 0..BLOCK_LEN {
    c[j] ^= S[(block[j] ^ l) as usize];
    l = c[j];
  }
}

/// MD2 digest.
#[derive(Clone)]
pub struct Md2 {
  x: [u8; 48],
  checksum: [u8; BLOCK_LEN],
  buf: [u8; BLOCK_LEN],
  buf_len: usize,
}

impl Default for Md2 {
  #[inline]
  fn default() -> Self {
    Self {
      x: [0u8; 48],
      checksum: [0u8; BLOCK_LEN],
      buf: [0u8; BLOCK_LEN],
      buf_len: 0,
    }
  }
}

impl Digest for Md2 {
  const OUTPUT_SIZE: usize = 16;
  const BLOCK_SIZE: usize = BLOCK_LEN;
  const NAME: &'static str = "MD2";
  type Output = [u8; 16];

  #[inline]
  fn new() -> Self {
    Self::default()
  }

  fn update(&mut self, mut data: &[u8]) {
    if data.is_empty() {
      return;
    }

    if self.buf_len != 0 {
      let take = core::cmp::min(BLOCK_LEN - self.buf_len, data.len());
      self.buf[self.buf_len..self.buf_len + take].copy_from_slice(&data[..take]);
      self.buf_len += take;
      data = &data[take..];

      if self.buf_len == BLOCK_LEN {
        let block = self.buf;
        update_checksum(&mut self.checksum, &block);
        process_block(&mut self.x, &block);
        self.buf_len = 0;
      }
    }

    let (blocks, rest) = data.as_chunks::<BLOCK_LEN>();
    for block in blocks {
      update_checksum(&mut self.checksum, block);
      process_block(&mut self.x, block);
    }
    data = rest;

    if !data.is_empty() {
      self.buf[..data.len()].copy_from_slice(data);
      self.buf_len = data.len();
    }
  }

  fn finalize(&self) -> Self::Output {
    let mut x = self.x;
    let mut checksum = self.checksum;

    // Pad with N bytes of value N (always at least one, at most a block).
    let pad = (BLOCK_LEN - self.buf_len) as u8;
    let mut block = self.buf;
    block[self.buf_len..].fill(pad);
    update_checksum(&mut checksum, &block);
    process_block(&mut x, &block);

    // The checksum is hashed as a trailing block.
    process_block(&mut x, &checksum);

    let mut out = [0u8; 16];
    out.copy_from_slice(&x[..16]);
    out
  }

  #[inline]
  fn reset(&mut self) {
    *self = Self::default();
  }
}

impl Snapshot for Md2 {
  fn snapshot(&self) -> Vec<u8> {
    let mut w = StateWriter::new(AlgTag::Md2);
    w.bytes(&self.x);
    w.bytes(&self.checksum);
    w.tail(&self.buf[..self.buf_len]);
    w.finish()
  }

  fn restore(blob: &[u8]) -> Result<Self, StateError> {
    let mut r = StateReader::new(blob, AlgTag::Md2)?;
    let mut x = [0u8; 48];
    r.bytes(&mut x)?;
    let mut checksum = [0u8; BLOCK_LEN];
    r.bytes(&mut checksum)?;
    let buffered = r.tail()?;
    r.finish()?;
    if buffered.len() >= BLOCK_LEN {
      return Err(StateError::CorruptField);
    }
    let mut buf = [0u8; BLOCK_LEN];
    buf[..buffered.len()].copy_from_slice(buffered);
    Ok(Self {
      x,
      checksum,
      buf,
      buf_len: buffered.len(),
    })
  }
}

#[cfg(test)]
mod tests {
  use traits::Digest as _;

  use super::*;

  // RFC 1319 appendix A.5 test suite.
  #[test]
  fn rfc_1319_suite() {
    let cases: &[(&[u8], [u8; 16])] = &[
      (b"", [
        0x83, 0x50, 0xe5, 0xa3, 0xe2, 0x4c, 0x15, 0x3d, 0xf2, 0x27, 0x5c, 0x9f, 0x80, 0x69, 0x27, 0x73,
      ]),
      (b"a", [
        0x32, 0xec, 0x01, 0xec, 0x4a, 0x6d, 0xac, 0x72, 0xc0, 0xab, 0x96, 0xfb, 0x34, 0xc0, 0xb5, 0xd1,
      ]),
      (b"abc", [
        0xda, 0x85, 0x3b, 0x0d, 0x3f, 0x88, 0xd9, 0x9b, 0x30, 0x28, 0x3a, 0x69, 0xe6, 0xde, 0xd6, 0xbb,
      ]),
      (b"message digest", [
        0xab, 0x4f, 0x49, 0x6b, 0xfb, 0x2a, 0x53, 0x0b, 0x21, 0x9f, 0xf3, 0x30, 0x31, 0xfe, 0x06, 0xb0,
      ]),
      (b"abcdefghijklmnopqrstuvwxyz", [
        0x4e, 0x8d, 0xdf, 0xf3, 0x65, 0x02, 0x92, 0xab, 0x5a, 0x41, 0x08, 0xc3, 0xaa, 0x47, 0x94, 0x0b,
      ]),
      (
        b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789",
        [
          0xda, 0x33, 0xde, 0xf2, 0xa4, 0x2d, 0xf1, 0x39, 0x75, 0x35, 0x28, 0x46, 0xc3, 0x03, 0x38, 0xcd,
        ],
      ),
      (
        b"12345678901234567890123456789012345678901234567890123456789012345678901234567890",
        [
          0xd5, 0x97, 0x6f, 0x79, 0xd8, 0x3d, 0x3a, 0x0d, 0xc9, 0x80, 0x6c, 0x3c, 0x66, 0xf3, 0xef, 0xd8,
        ],
      ),
    ];

    for (msg, want) in cases {
      assert_eq!(&Md2::digest(msg), want, "md2 mismatch for {:?}", msg);
    }
  }
}

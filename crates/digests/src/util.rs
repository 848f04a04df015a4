//! Word/endianness codec shared by every compression core.

#![allow(clippy::indexing_slicing)] // Fixed-size array indexing and block parsing

#[inline(always)]
pub(crate) const fn rotr32(x: u32, n: u32) -> u32 {
  x.rotate_right(n)
}

#[inline(always)]
pub(crate) const fn rotr64(x: u64, n: u32) -> u64 {
  x.rotate_right(n)
}

/// Read big-endian 32-bit words out of `bytes` into `words`.
///
/// `bytes.len()` must equal `4 * words.len()`.
#[inline(always)]
pub(crate) fn load_be32(bytes: &[u8], words: &mut [u32]) {
  let (chunks, rest) = bytes.as_chunks::<4>();
  debug_assert!(rest.is_empty());
  debug_assert_eq!(chunks.len(), words.len());
  for (word, chunk) in words.iter_mut().zip(chunks) {
    *word = u32::from_be_bytes(*chunk);
  }
}

/// Read big-endian 64-bit words out of `bytes` into `words`.
#[inline(always)]
pub(crate) fn load_be64(bytes: &[u8], words: &mut [u64]) {
  let (chunks, rest) = bytes.as_chunks::<8>();
  debug_assert!(rest.is_empty());
  debug_assert_eq!(chunks.len(), words.len());
  for (word, chunk) in words.iter_mut().zip(chunks) {
    *word = u64::from_be_bytes(*chunk);
  }
}

/// Read little-endian 32-bit words out of `bytes` into `words`.
#[inline(always)]
pub(crate) fn load_le32(bytes: &[u8], words: &mut [u32]) {
  let (chunks, rest) = bytes.as_chunks::<4>();
  debug_assert!(rest.is_empty());
  debug_assert_eq!(chunks.len(), words.len());
  for (word, chunk) in words.iter_mut().zip(chunks) {
    *word = u32::from_le_bytes(*chunk);
  }
}

/// Read little-endian 64-bit words out of `bytes` into `words`.
#[inline(always)]
pub(crate) fn load_le64(bytes: &[u8], words: &mut [u64]) {
  let (chunks, rest) = bytes.as_chunks::<8>();
  debug_assert!(rest.is_empty());
  debug_assert_eq!(chunks.len(), words.len());
  for (word, chunk) in words.iter_mut().zip(chunks) {
    *word = u64::from_le_bytes(*chunk);
  }
}

/// Write `words` into `out` as big-endian 32-bit words.
#[inline(always)]
pub(crate) fn store_be32(words: &[u32], out: &mut [u8]) {
  let (chunks, rest) = out.as_chunks_mut::<4>();
  debug_assert!(rest.is_empty());
  debug_assert_eq!(chunks.len(), words.len());
  for (chunk, word) in chunks.iter_mut().zip(words) {
    *chunk = word.to_be_bytes();
  }
}

/// Write `words` into `out` as big-endian 64-bit words.
#[inline(always)]
pub(crate) fn store_be64(words: &[u64], out: &mut [u8]) {
  let (chunks, rest) = out.as_chunks_mut::<8>();
  debug_assert!(rest.is_empty());
  debug_assert_eq!(chunks.len(), words.len());
  for (chunk, word) in chunks.iter_mut().zip(words) {
    *chunk = word.to_be_bytes();
  }
}

/// Write `words` into `out` as little-endian 32-bit words.
#[inline(always)]
pub(crate) fn store_le32(words: &[u32], out: &mut [u8]) {
  let (chunks, rest) = out.as_chunks_mut::<4>();
  debug_assert!(rest.is_empty());
  debug_assert_eq!(chunks.len(), words.len());
  for (chunk, word) in chunks.iter_mut().zip(words) {
    *chunk = word.to_le_bytes();
  }
}

/// Write `words` into `out` as little-endian 64-bit words.
#[inline(always)]
pub(crate) fn store_le64(words: &[u64], out: &mut [u8]) {
  let (chunks, rest) = out.as_chunks_mut::<8>();
  debug_assert!(rest.is_empty());
  debug_assert_eq!(chunks.len(), words.len());
  for (chunk, word) in chunks.iter_mut().zip(words) {
    *chunk = word.to_le_bytes();
  }
}

/// Write the first `out.len()` bytes of `words` rendered little-endian.
///
/// Used for truncated outputs that end mid-word.
#[inline(always)]
pub(crate) fn store_le64_prefix(words: &[u64], out: &mut [u8]) {
  for (i, byte) in out.iter_mut().enumerate() {
    *byte = (words[i / 8] >> (8 * (i % 8))) as u8;
  }
}

/// Write the first `out.len()` bytes of `words` rendered big-endian.
#[inline(always)]
pub(crate) fn store_be64_prefix(words: &[u64], out: &mut [u8]) {
  for (i, byte) in out.iter_mut().enumerate() {
    *byte = (words[i / 8] >> (8 * (7 - i % 8))) as u8;
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn be32_round_trip() {
    let bytes = [0x01, 0x02, 0x03, 0x04, 0xaa, 0xbb, 0xcc, 0xdd];
    let mut words = [0u32; 2];
    load_be32(&bytes, &mut words);
    assert_eq!(words, [0x0102_0304, 0xaabb_ccdd]);

    let mut out = [0u8; 8];
    store_be32(&words, &mut out);
    assert_eq!(out, bytes);
  }

  #[test]
  fn le64_round_trip() {
    let bytes = [0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08];
    let mut words = [0u64; 1];
    load_le64(&bytes, &mut words);
    assert_eq!(words, [0x0807_0605_0403_0201]);

    let mut out = [0u8; 8];
    store_le64(&words, &mut out);
    assert_eq!(out, bytes);
  }

  #[test]
  fn prefix_stores_truncate_mid_word() {
    let words = [0x0807_0605_0403_0201u64, 0x1817_1615_1413_1211];
    let mut out = [0u8; 11];
    store_le64_prefix(&words, &mut out);
    assert_eq!(out, [0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x11, 0x12, 0x13]);

    let mut out = [0u8; 11];
    store_be64_prefix(&words, &mut out);
    assert_eq!(out, [0x08, 0x07, 0x06, 0x05, 0x04, 0x03, 0x02, 0x01, 0x18, 0x17, 0x16]);
  }
}

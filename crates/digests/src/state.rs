//! Byte codec for opaque digest state blobs.
//!
//! Layout: one version byte, one algorithm tag byte, the algorithm's fixed
//! fields (little-endian), then any variable-length tail (the buffered
//! partial block) prefixed with a `u32` length. Decoding validates the
//! version, the tag, every field bound, and that the blob is consumed
//! exactly.

use alloc::vec::Vec;

use traits::StateError;

pub(crate) const STATE_VERSION: u8 = 1;

/// Algorithm discriminant embedded in every state blob.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub(crate) enum AlgTag {
  Sha224 = 1,
  Sha256 = 2,
  Sha384 = 3,
  Sha512 = 4,
  Sha512_224 = 5,
  Sha512_256 = 6,
  Sha512T = 7,
  Blake2b = 8,
  Blake2s = 9,
  Sha3_224 = 10,
  Sha3_256 = 11,
  Sha3_384 = 12,
  Sha3_512 = 13,
  Shake128 = 14,
  Shake256 = 15,
  Skein256 = 16,
  Skein512 = 17,
  Skein1024 = 18,
  Md2 = 19,
  Gost3411 = 20,
}

pub(crate) struct StateWriter {
  buf: Vec<u8>,
}

impl StateWriter {
  #[must_use]
  pub(crate) fn new(tag: AlgTag) -> Self {
    let mut buf = Vec::with_capacity(256);
    buf.push(STATE_VERSION);
    buf.push(tag as u8);
    Self { buf }
  }

  pub(crate) fn u8(&mut self, v: u8) {
    self.buf.push(v);
  }

  pub(crate) fn u64(&mut self, v: u64) {
    self.buf.extend_from_slice(&v.to_le_bytes());
  }

  pub(crate) fn u128(&mut self, v: u128) {
    self.buf.extend_from_slice(&v.to_le_bytes());
  }

  pub(crate) fn words32(&mut self, words: &[u32]) {
    for word in words {
      self.buf.extend_from_slice(&word.to_le_bytes());
    }
  }

  pub(crate) fn words64(&mut self, words: &[u64]) {
    for word in words {
      self.buf.extend_from_slice(&word.to_le_bytes());
    }
  }

  pub(crate) fn bytes(&mut self, bytes: &[u8]) {
    self.buf.extend_from_slice(bytes);
  }

  /// Variable-length trailing data, prefixed with its own length.
  pub(crate) fn tail(&mut self, bytes: &[u8]) {
    self.buf.extend_from_slice(&(bytes.len() as u32).to_le_bytes());
    self.buf.extend_from_slice(bytes);
  }

  #[must_use]
  pub(crate) fn finish(self) -> Vec<u8> {
    self.buf
  }
}

pub(crate) struct StateReader<'a> {
  rest: &'a [u8],
}

impl<'a> StateReader<'a> {
  pub(crate) fn new(blob: &'a [u8], tag: AlgTag) -> Result<Self, StateError> {
    let (&version, rest) = blob.split_first().ok_or(StateError::Truncated)?;
    if version != STATE_VERSION {
      return Err(StateError::UnknownVersion(version));
    }
    let (&found, rest) = rest.split_first().ok_or(StateError::Truncated)?;
    if found != tag as u8 {
      return Err(StateError::AlgorithmMismatch);
    }
    Ok(Self { rest })
  }

  fn take(&mut self, n: usize) -> Result<&'a [u8], StateError> {
    if self.rest.len() < n {
      return Err(StateError::Truncated);
    }
    let (head, rest) = self.rest.split_at(n);
    self.rest = rest;
    Ok(head)
  }

  pub(crate) fn u8(&mut self) -> Result<u8, StateError> {
    let (&v, rest) = self.rest.split_first().ok_or(StateError::Truncated)?;
    self.rest = rest;
    Ok(v)
  }

  pub(crate) fn u64(&mut self) -> Result<u64, StateError> {
    let bytes = self.take(8)?;
    let arr: [u8; 8] = bytes.try_into().map_err(|_| StateError::Truncated)?;
    Ok(u64::from_le_bytes(arr))
  }

  pub(crate) fn u128(&mut self) -> Result<u128, StateError> {
    let bytes = self.take(16)?;
    let arr: [u8; 16] = bytes.try_into().map_err(|_| StateError::Truncated)?;
    Ok(u128::from_le_bytes(arr))
  }

  pub(crate) fn words32(&mut self, out: &mut [u32]) -> Result<(), StateError> {
    let bytes = self.take(out.len() * 4)?;
    let (chunks, _) = bytes.as_chunks::<4>();
    for (word, chunk) in out.iter_mut().zip(chunks) {
      *word = u32::from_le_bytes(*chunk);
    }
    Ok(())
  }

  pub(crate) fn words64(&mut self, out: &mut [u64]) -> Result<(), StateError> {
    let bytes = self.take(out.len() * 8)?;
    let (chunks, _) = bytes.as_chunks::<8>();
    for (word, chunk) in out.iter_mut().zip(chunks) {
      *word = u64::from_le_bytes(*chunk);
    }
    Ok(())
  }

  pub(crate) fn bytes(&mut self, out: &mut [u8]) -> Result<(), StateError> {
    let bytes = self.take(out.len())?;
    out.copy_from_slice(bytes);
    Ok(())
  }

  /// Length-prefixed trailing data written by [`StateWriter::tail`].
  pub(crate) fn tail(&mut self) -> Result<&'a [u8], StateError> {
    let bytes = self.take(4)?;
    let arr: [u8; 4] = bytes.try_into().map_err(|_| StateError::Truncated)?;
    let len = u32::from_le_bytes(arr) as usize;
    self.take(len)
  }

  /// The blob must be fully consumed.
  pub(crate) fn finish(self) -> Result<(), StateError> {
    if self.rest.is_empty() {
      Ok(())
    } else {
      Err(StateError::TrailingBytes)
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn round_trip_all_field_kinds() {
    let mut w = StateWriter::new(AlgTag::Sha256);
    w.u8(7);
    w.u64(0x1122_3344_5566_7788);
    w.u128(1 << 100);
    w.words32(&[1, 2, 3]);
    w.words64(&[u64::MAX]);
    w.tail(&[9, 9, 9]);
    let blob = w.finish();

    let mut r = StateReader::new(&blob, AlgTag::Sha256).unwrap();
    assert_eq!(r.u8().unwrap(), 7);
    assert_eq!(r.u64().unwrap(), 0x1122_3344_5566_7788);
    assert_eq!(r.u128().unwrap(), 1 << 100);
    let mut w32 = [0u32; 3];
    r.words32(&mut w32).unwrap();
    assert_eq!(w32, [1, 2, 3]);
    let mut w64 = [0u64; 1];
    r.words64(&mut w64).unwrap();
    assert_eq!(w64, [u64::MAX]);
    assert_eq!(r.tail().unwrap(), &[9, 9, 9]);
    r.finish().unwrap();
  }

  #[test]
  fn rejects_wrong_tag() {
    let blob = StateWriter::new(AlgTag::Sha256).finish();
    assert_eq!(
      StateReader::new(&blob, AlgTag::Sha512).err(),
      Some(StateError::AlgorithmMismatch)
    );
  }

  #[test]
  fn rejects_unknown_version() {
    let mut blob = StateWriter::new(AlgTag::Md2).finish();
    blob[0] = 99;
    assert_eq!(
      StateReader::new(&blob, AlgTag::Md2).err(),
      Some(StateError::UnknownVersion(99))
    );
  }

  #[test]
  fn rejects_truncation_and_trailing() {
    let mut w = StateWriter::new(AlgTag::Md2);
    w.u64(5);
    let blob = w.finish();

    let mut r = StateReader::new(&blob[..6], AlgTag::Md2).unwrap();
    assert_eq!(r.u64().err(), Some(StateError::Truncated));

    let r = StateReader::new(&blob, AlgTag::Md2).unwrap();
    assert_eq!(r.finish().err(), Some(StateError::TrailingBytes));
  }

  #[test]
  fn tail_length_is_validated() {
    let mut w = StateWriter::new(AlgTag::Md2);
    w.tail(&[1, 2, 3, 4]);
    let mut blob = w.finish();
    // Claim a longer tail than the blob holds.
    blob[2] = 200;
    let mut r = StateReader::new(&blob, AlgTag::Md2).unwrap();
    assert_eq!(r.tail().err(), Some(StateError::Truncated));
  }
}

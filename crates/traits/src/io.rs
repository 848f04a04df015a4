//! I/O adapters that hash data as it flows through.
//!
//! [`DigestReader`] and [`DigestWriter`] wrap any `std::io::Read`/`Write`
//! and update a [`Digest`](crate::Digest) with every byte that passes
//! through, so callers can hash a stream without buffering it twice.

use crate::Digest;

/// Reader adapter that hashes everything read through it.
///
/// # Example
///
/// ```rust
/// use std::io::Cursor;
///
/// use traits::Digest;
/// # #[derive(Clone, Default)]
/// # struct Sum(u8);
/// # impl Digest for Sum {
/// #   const OUTPUT_SIZE: usize = 1;
/// #   const BLOCK_SIZE: usize = 1;
/// #   const NAME: &'static str = "SUM";
/// #   type Output = [u8; 1];
/// #   fn new() -> Self { Self(0) }
/// #   fn update(&mut self, data: &[u8]) {
/// #     self.0 = data.iter().fold(self.0, |acc, &b| acc.wrapping_add(b));
/// #   }
/// #   fn finalize(&self) -> Self::Output { [self.0] }
/// #   fn reset(&mut self) { self.0 = 0; }
/// # }
///
/// let mut reader = Sum::reader(Cursor::new(b"abc".to_vec()));
/// std::io::copy(&mut reader, &mut std::io::sink())?;
/// assert_eq!(reader.digest(), [b'a'.wrapping_add(b'b').wrapping_add(b'c')]);
/// # Ok::<(), std::io::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct DigestReader<R, D: Digest> {
  inner: R,
  hasher: D,
}

impl<R, D: Digest> DigestReader<R, D> {
  /// Wrap `inner`, hashing with a freshly constructed `D`.
  #[inline]
  #[must_use]
  pub fn new(inner: R) -> Self {
    Self {
      inner,
      hasher: D::new(),
    }
  }

  /// Digest of all bytes read so far.
  #[inline]
  #[must_use]
  pub fn digest(&self) -> D::Output {
    self.hasher.finalize()
  }

  /// Unwrap, returning the inner reader and the digest of bytes read.
  #[inline]
  #[must_use]
  pub fn into_parts(self) -> (R, D::Output) {
    let digest = self.hasher.finalize();
    (self.inner, digest)
  }

  /// Access the inner reader.
  #[inline]
  pub fn get_ref(&self) -> &R {
    &self.inner
  }
}

impl<R: std::io::Read, D: Digest> std::io::Read for DigestReader<R, D> {
  fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
    let n = self.inner.read(buf)?;
    if let Some(data) = buf.get(..n) {
      self.hasher.update(data);
    }
    Ok(n)
  }
}

/// Writer adapter that hashes everything written through it.
///
/// # Example
///
/// ```rust
/// use std::io::Write;
///
/// use traits::Digest;
/// # #[derive(Clone, Default)]
/// # struct Sum(u8);
/// # impl Digest for Sum {
/// #   const OUTPUT_SIZE: usize = 1;
/// #   const BLOCK_SIZE: usize = 1;
/// #   const NAME: &'static str = "SUM";
/// #   type Output = [u8; 1];
/// #   fn new() -> Self { Self(0) }
/// #   fn update(&mut self, data: &[u8]) {
/// #     self.0 = data.iter().fold(self.0, |acc, &b| acc.wrapping_add(b));
/// #   }
/// #   fn finalize(&self) -> Self::Output { [self.0] }
/// #   fn reset(&mut self) { self.0 = 0; }
/// # }
///
/// let mut writer = Sum::writer(Vec::new());
/// writer.write_all(b"hello")?;
/// let (out, digest) = writer.into_parts();
/// assert_eq!(out, b"hello".to_vec());
/// assert_eq!(digest, [b"hello".iter().fold(0u8, |acc, &b| acc.wrapping_add(b))]);
/// # Ok::<(), std::io::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct DigestWriter<W, D: Digest> {
  inner: W,
  hasher: D,
}

impl<W, D: Digest> DigestWriter<W, D> {
  /// Wrap `inner`, hashing with a freshly constructed `D`.
  #[inline]
  #[must_use]
  pub fn new(inner: W) -> Self {
    Self {
      inner,
      hasher: D::new(),
    }
  }

  /// Digest of all bytes written so far.
  #[inline]
  #[must_use]
  pub fn digest(&self) -> D::Output {
    self.hasher.finalize()
  }

  /// Unwrap, returning the inner writer and the digest of bytes written.
  #[inline]
  #[must_use]
  pub fn into_parts(self) -> (W, D::Output) {
    let digest = self.hasher.finalize();
    (self.inner, digest)
  }

  /// Access the inner writer.
  #[inline]
  pub fn get_ref(&self) -> &W {
    &self.inner
  }
}

impl<W: std::io::Write, D: Digest> std::io::Write for DigestWriter<W, D> {
  fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
    let n = self.inner.write(buf)?;
    if let Some(data) = buf.get(..n) {
      self.hasher.update(data);
    }
    Ok(n)
  }

  fn flush(&mut self) -> std::io::Result<()> {
    self.inner.flush()
  }
}

//! Cryptographic digest traits.
//!
//! [`Digest`] is the fixed-output streaming contract: updates, a
//! non-consuming finalize, and reset support. [`DynDigest`] is the
//! object-safe service interface for callers that select an algorithm (and
//! possibly an output length) at runtime.

use alloc::{borrow::Cow, boxed::Box, vec, vec::Vec};
use core::fmt::Debug;

use crate::error::BufferTooShortError;

/// Cryptographic hash function producing a fixed-size digest.
///
/// This trait is intended for algorithms whose output length is fixed at
/// compile time, like SHA-256 or BLAKE2b-512. Runtime-parameterized engines
/// implement [`DynDigest`] instead.
pub trait Digest: Clone + Default {
  /// Output size in bytes.
  const OUTPUT_SIZE: usize;

  /// Internal block size in bytes.
  const BLOCK_SIZE: usize;

  /// Canonical algorithm name, e.g. `"SHA-256"`.
  const NAME: &'static str;

  /// The digest output type.
  ///
  /// Typically `[u8; N]`.
  type Output: Copy + Eq + Debug + AsRef<[u8]>;

  /// Create a new hasher in its initial state.
  #[must_use]
  fn new() -> Self;

  /// Update the hasher with additional data.
  fn update(&mut self, data: &[u8]);

  /// Finalize and return the digest.
  ///
  /// This method does not consume the hasher, allowing further updates if
  /// needed.
  #[must_use]
  fn finalize(&self) -> Self::Output;

  /// Reset the hasher to its initial state.
  fn reset(&mut self);

  /// Update the hasher with multiple non-contiguous buffers.
  #[inline]
  fn update_vectored(&mut self, bufs: &[&[u8]]) {
    for buf in bufs {
      self.update(buf);
    }
  }

  /// Finalize into the front of `out`, returning the number of bytes written.
  ///
  /// Fails without writing anything if `out` is shorter than
  /// [`OUTPUT_SIZE`](Self::OUTPUT_SIZE).
  fn finalize_into(&self, out: &mut [u8]) -> Result<usize, BufferTooShortError> {
    let digest = self.finalize();
    let bytes = digest.as_ref();
    let Some(dst) = out.get_mut(..bytes.len()) else {
      return Err(BufferTooShortError::new(bytes.len(), out.len()));
    };
    dst.copy_from_slice(bytes);
    Ok(bytes.len())
  }

  /// Compute the digest of data in one shot.
  #[inline]
  #[must_use]
  fn digest(data: &[u8]) -> Self::Output {
    let mut h = Self::new();
    h.update(data);
    h.finalize()
  }

  /// Wrap a reader to compute the digest transparently during I/O.
  #[cfg(feature = "std")]
  #[inline]
  #[must_use]
  fn reader<R>(inner: R) -> crate::io::DigestReader<R, Self>
  where
    Self: Sized,
  {
    crate::io::DigestReader::new(inner)
  }

  /// Wrap a writer to compute the digest transparently during I/O.
  #[cfg(feature = "std")]
  #[inline]
  #[must_use]
  fn writer<W>(inner: W) -> crate::io::DigestWriter<W, Self>
  where
    Self: Sized,
  {
    crate::io::DigestWriter::new(inner)
  }
}

/// Object-safe digest service.
///
/// This is the minimal contract outside layers consume: they hold a
/// `Box<dyn DynDigest>`, feed it bytes, and drain the result without
/// knowing which algorithm (or output length) is behind it.
///
/// Unlike [`Digest::finalize`], [`finalize_into_reset`](Self::finalize_into_reset)
/// returns the instance to its post-construction state, retaining any key,
/// salt, or personalization it was built with.
pub trait DynDigest {
  /// Canonical algorithm name, e.g. `"Skein-512-256"`.
  fn algorithm_name(&self) -> Cow<'static, str>;

  /// Output size in bytes.
  fn output_size(&self) -> usize;

  /// Internal block size in bytes.
  fn block_size(&self) -> usize;

  /// Update the digest with additional data.
  fn update(&mut self, data: &[u8]);

  /// Write the digest into the front of `out` and reset.
  ///
  /// Writes exactly [`output_size`](Self::output_size) bytes and returns
  /// that count. Fails without writing anything (and without resetting) if
  /// `out` is too short.
  fn finalize_into_reset(&mut self, out: &mut [u8]) -> Result<usize, BufferTooShortError>;

  /// Reset to the post-construction state.
  fn reset(&mut self);

  /// Clone into a boxed trait object.
  fn box_clone(&self) -> Box<dyn DynDigest>;

  /// Finalize into a freshly allocated vector and reset.
  #[must_use]
  fn finalize_reset(&mut self) -> Vec<u8> {
    let mut out = vec![0u8; self.output_size()];
    // Infallible: `out` was sized from `output_size()`.
    let _ = self.finalize_into_reset(&mut out);
    out
  }
}

impl Clone for Box<dyn DynDigest> {
  fn clone(&self) -> Self {
    self.box_clone()
  }
}

impl<D> DynDigest for D
where
  D: Digest + 'static,
{
  #[inline]
  fn algorithm_name(&self) -> Cow<'static, str> {
    Cow::Borrowed(D::NAME)
  }

  #[inline]
  fn output_size(&self) -> usize {
    D::OUTPUT_SIZE
  }

  #[inline]
  fn block_size(&self) -> usize {
    D::BLOCK_SIZE
  }

  #[inline]
  fn update(&mut self, data: &[u8]) {
    Digest::update(self, data);
  }

  fn finalize_into_reset(&mut self, out: &mut [u8]) -> Result<usize, BufferTooShortError> {
    let written = self.finalize_into(out)?;
    Digest::reset(self);
    Ok(written)
  }

  #[inline]
  fn reset(&mut self) {
    Digest::reset(self);
  }

  fn box_clone(&self) -> Box<dyn DynDigest> {
    Box::new(self.clone())
  }
}

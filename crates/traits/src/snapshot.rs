//! State snapshot support.

use alloc::vec::Vec;

use crate::error::StateError;

/// Opaque state export/import and checked deep copy.
///
/// A snapshot captures the complete mutable state of a digest mid-stream:
/// chain value, byte counters, finalization flags, and the buffered partial
/// block, together with the fixed parameters the instance was constructed
/// with. Restoring the blob produces an instance that continues processing
/// observably identically to one that never paused.
///
/// Blobs are versioned and algorithm-tagged but deliberately opaque: they
/// are not portable across algorithm or parameter combinations, and their
/// layout may change between releases.
///
/// # Examples
///
/// ```
/// # use traits::{Digest, Snapshot, StateError};
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
/// # impl Snapshot for Sum {
/// #   fn snapshot(&self) -> Vec<u8> { vec![self.0] }
/// #   fn restore(blob: &[u8]) -> Result<Self, StateError> {
/// #     match blob {
/// #       [b] => Ok(Self(*b)),
/// #       _ => Err(StateError::Truncated),
/// #     }
/// #   }
/// # }
/// let mut h = Sum::new();
/// h.update(b"first half");
/// let blob = h.snapshot();
///
/// let mut resumed = Sum::restore(&blob)?;
/// h.update(b"second half");
/// resumed.update(b"second half");
/// assert_eq!(h.finalize(), resumed.finalize());
/// # Ok::<(), StateError>(())
/// ```
pub trait Snapshot: Clone + Sized {
  /// Flatten the full internal state into an opaque byte blob.
  #[must_use]
  fn snapshot(&self) -> Vec<u8>;

  /// Reconstruct a live digest from a blob produced by [`snapshot`](Self::snapshot).
  fn restore(blob: &[u8]) -> Result<Self, StateError>;

  /// Overwrite `self` with a deep copy of `source`'s state.
  ///
  /// Fails with [`StateError::ParameterMismatch`] when the two instances
  /// were constructed with incompatible fixed parameters (e.g. different
  /// configured output lengths). On error, `self` is unchanged.
  fn restore_from(&mut self, source: &Self) -> Result<(), StateError> {
    *self = source.clone();
    Ok(())
  }
}

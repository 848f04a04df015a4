//! Error types for digest construction and usage.
//!
//! Every error here is a programmer error detectable at the call site: the
//! engines perform no I/O and have no transient failure modes. Individual
//! algorithms document which variants they can return.

use core::fmt;

/// Invalid construction parameter.
///
/// Returned by parameterized constructors (keyed BLAKE2, Skein, SHA-512/t)
/// when a requested size violates a fixed algorithm bound. The instance is
/// never partially constructed; callers must retry with valid parameters.
///
/// # Examples
///
/// ```
/// use traits::ParamError;
///
/// fn check_output(requested: usize) -> Result<(), ParamError> {
///   if (1..=64).contains(&requested) {
///     Ok(())
///   } else {
///     Err(ParamError::OutputLen {
///       requested,
///       min: 1,
///       max: 64,
///     })
///   }
/// }
///
/// assert!(check_output(65).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ParamError {
  /// Requested digest output length is outside the algorithm's bounds.
  OutputLen {
    /// Length the caller asked for, in bytes.
    requested: usize,
    /// Smallest valid length, in bytes.
    min: usize,
    /// Largest valid length, in bytes.
    max: usize,
  },
  /// Key is longer than the algorithm allows.
  KeyLen {
    /// Length of the supplied key, in bytes.
    requested: usize,
    /// Largest valid key length, in bytes.
    max: usize,
  },
  /// Salt does not have the exact length the algorithm requires.
  SaltLen {
    /// Length of the supplied salt, in bytes.
    requested: usize,
    /// The only valid salt length, in bytes.
    expected: usize,
  },
  /// Personalization string does not have the exact required length.
  PersonalLen {
    /// Length of the supplied personalization, in bytes.
    requested: usize,
    /// The only valid personalization length, in bytes.
    expected: usize,
  },
  /// SHA-512/t truncation length is not a supported bit count.
  TruncationBits {
    /// Bit count the caller asked for.
    requested: usize,
  },
}

impl fmt::Display for ParamError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match *self {
      Self::OutputLen { requested, min, max } => {
        write!(f, "invalid digest output length {requested}: must be {min}..={max} bytes")
      }
      Self::KeyLen { requested, max } => {
        write!(f, "invalid key length {requested}: must be at most {max} bytes")
      }
      Self::SaltLen { requested, expected } => {
        write!(f, "invalid salt length {requested}: must be exactly {expected} bytes")
      }
      Self::PersonalLen { requested, expected } => {
        write!(f, "invalid personalization length {requested}: must be exactly {expected} bytes")
      }
      Self::TruncationBits { requested } => {
        write!(
          f,
          "invalid truncation length {requested}: must be a multiple of 8, below 512, and not 384"
        )
      }
    }
  }
}

impl core::error::Error for ParamError {}

/// Output slice too short for the digest.
///
/// Returned by `finalize_into`-style operations. Nothing is written to the
/// output slice when this error is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub struct BufferTooShortError {
  /// Bytes the digest needs.
  pub needed: usize,
  /// Bytes the caller provided.
  pub available: usize,
}

impl BufferTooShortError {
  /// Create a new error from the required and provided lengths.
  #[inline]
  #[must_use]
  pub const fn new(needed: usize, available: usize) -> Self {
    Self { needed, available }
  }
}

impl fmt::Display for BufferTooShortError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(
      f,
      "output buffer too short: need {} bytes, got {}",
      self.needed, self.available
    )
  }
}

impl core::error::Error for BufferTooShortError {}

/// Snapshot decode or state-transfer failure.
///
/// Returned when an opaque state blob cannot be decoded back into a live
/// digest, or when state is copied between instances whose fixed parameters
/// differ.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum StateError {
  /// Blob ended before all mandatory fields were read.
  Truncated,
  /// Blob carries a snapshot format version this build does not understand.
  UnknownVersion(u8),
  /// Blob was produced by a different algorithm or parameter combination.
  AlgorithmMismatch,
  /// Blob decoded cleanly but carried bytes past the final field.
  TrailingBytes,
  /// A decoded field holds a value the algorithm state cannot contain.
  CorruptField,
  /// Deep copy between instances with incompatible fixed parameters.
  ParameterMismatch,
}

impl fmt::Display for StateError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match *self {
      Self::Truncated => f.write_str("state blob truncated"),
      Self::UnknownVersion(v) => write!(f, "unknown state blob version {v}"),
      Self::AlgorithmMismatch => f.write_str("state blob belongs to a different algorithm"),
      Self::TrailingBytes => f.write_str("state blob has trailing bytes"),
      Self::CorruptField => f.write_str("state blob field out of range"),
      Self::ParameterMismatch => f.write_str("digest parameters do not match"),
    }
  }
}

impl core::error::Error for StateError {}

#[cfg(test)]
mod tests {
  use alloc::{format, string::ToString};

  use super::*;

  #[test]
  fn param_error_display_names_the_bound() {
    let e = ParamError::OutputLen {
      requested: 65,
      min: 1,
      max: 64,
    };
    assert_eq!(e.to_string(), "invalid digest output length 65: must be 1..=64 bytes");

    let e = ParamError::SaltLen {
      requested: 3,
      expected: 16,
    };
    assert_eq!(e.to_string(), "invalid salt length 3: must be exactly 16 bytes");
  }

  #[test]
  fn buffer_too_short_display() {
    let e = BufferTooShortError::new(32, 31);
    assert_eq!(e.to_string(), "output buffer too short: need 32 bytes, got 31");
  }

  #[test]
  fn state_error_display() {
    assert_eq!(StateError::Truncated.to_string(), "state blob truncated");
    assert_eq!(StateError::UnknownVersion(9).to_string(), "unknown state blob version 9");
    assert_eq!(
      StateError::ParameterMismatch.to_string(),
      "digest parameters do not match"
    );
  }

  #[test]
  fn errors_are_copy_eq_debug() {
    let a = StateError::AlgorithmMismatch;
    let b = a;
    assert_eq!(a, b);
    assert!(!format!("{a:?}").is_empty());
  }

  #[test]
  fn error_trait_impls() {
    fn assert_error<T: core::error::Error + Send + Sync>() {}
    assert_error::<ParamError>();
    assert_error::<BufferTooShortError>();
    assert_error::<StateError>();
  }
}

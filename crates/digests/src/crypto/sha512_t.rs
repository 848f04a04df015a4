//! SHA-512/t (FIPS 180-4 §5.3.6) for arbitrary truncation lengths.
//!
//! Reuses the full SHA-512 computation under an IV derived at construction
//! time: the SHA-512 initial hash value is XORed with `0xa5a5…a5`, then one
//! hash of the ASCII string `SHA-512/t` (with `t` in decimal) produces the
//! chain value the real computation starts from.

#![allow(clippy::indexing_slicing)] // Fixed-size label buffer + truncation

use alloc::{borrow::Cow, boxed::Box, format, vec::Vec};

use traits::{BufferTooShortError, DynDigest, ParamError, Snapshot, StateError};

use super::{
  engine64::{BLOCK_LEN, Engine64},
  sha512::{self, Sha512Core},
};
use crate::{
  state::{AlgTag, StateReader, StateWriter},
  util::store_be64_prefix,
};

/// Truncated SHA-512 with a runtime `t`.
///
/// `t` is given in bits and must be a positive multiple of 8 below 512,
/// excluding 384 (which is SHA-384, with its own standardized IV).
///
/// # Examples
///
/// ```
/// use digests::Sha512T;
///
/// let mut h = Sha512T::new(200)?;
/// h.update(b"abc");
/// let mut out = [0u8; 25];
/// h.finalize_into(&mut out)?;
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone)]
pub struct Sha512T {
  engine: Engine64<Sha512Core>,
  iv: [u64; 8],
  t_bits: usize,
}

/// Render the decimal `t` suffix of the IV-generation label.
///
/// The comparisons are deliberately strict (`> 100`, `> 10`, not `>=`):
/// 100 would encode as the two bytes `0x3a 0x30` and 10 as the single byte
/// `0x3a`. Published test vectors are defined against exactly this
/// procedure, so it is preserved bit-for-bit.
fn encode_label(t_bits: usize, out: &mut [u8; 12]) -> usize {
  out[..8].copy_from_slice(b"SHA-512/");
  let mut n = 8;
  let mut bits = t_bits;
  if bits > 100 {
    out[n] = b'0' + (bits / 100) as u8;
    n += 1;
    bits %= 100;
    out[n] = b'0' + (bits / 10) as u8;
    n += 1;
    bits %= 10;
    out[n] = b'0' + bits as u8;
    n += 1;
  } else if bits > 10 {
    out[n] = b'0' + (bits / 10) as u8;
    n += 1;
    bits %= 10;
    out[n] = b'0' + bits as u8;
    n += 1;
  } else {
    out[n] = b'0' + bits as u8;
    n += 1;
  }
  n
}

fn derive_iv(t_bits: usize) -> [u64; 8] {
  let mut seed = sha512::H0;
  for word in &mut seed {
    *word ^= 0xa5a5_a5a5_a5a5_a5a5;
  }

  let mut label = [0u8; 12];
  let len = encode_label(t_bits, &mut label);

  let mut engine = Engine64::new(Sha512Core::new(seed));
  engine.update(&label[..len]);
  *engine.finalize_core().state()
}

fn validate(t_bits: usize) -> Result<(), ParamError> {
  if t_bits == 0 || t_bits >= 512 || t_bits == 384 || !t_bits.is_multiple_of(8) {
    return Err(ParamError::TruncationBits { requested: t_bits });
  }
  Ok(())
}

impl Sha512T {
  /// Create a SHA-512/t digest for the given truncation length in bits.
  pub fn new(t_bits: usize) -> Result<Self, ParamError> {
    validate(t_bits)?;
    let iv = derive_iv(t_bits);
    Ok(Self {
      engine: Engine64::new(Sha512Core::new(iv)),
      iv,
      t_bits,
    })
  }

  /// Output size in bytes (`t / 8`).
  #[inline]
  #[must_use]
  pub fn output_size(&self) -> usize {
    self.t_bits / 8
  }

  /// The configured truncation length in bits.
  #[inline]
  #[must_use]
  pub fn t_bits(&self) -> usize {
    self.t_bits
  }

  /// Update the digest with additional data.
  #[inline]
  pub fn update(&mut self, data: &[u8]) {
    self.engine.update(data);
  }

  /// Finalize into the front of `out`, returning the number of bytes written.
  ///
  /// Does not consume or reset the digest.
  pub fn finalize_into(&self, out: &mut [u8]) -> Result<usize, BufferTooShortError> {
    let n = self.output_size();
    if out.len() < n {
      return Err(BufferTooShortError::new(n, out.len()));
    }
    let core = self.engine.finalize_core();
    store_be64_prefix(core.state(), &mut out[..n]);
    Ok(n)
  }

  /// Reset to the post-construction state. The derived IV is retained.
  #[inline]
  pub fn reset(&mut self) {
    self.engine.reset_with(Sha512Core::new(self.iv));
  }
}

impl DynDigest for Sha512T {
  fn algorithm_name(&self) -> Cow<'static, str> {
    Cow::Owned(format!("SHA-512/{}", self.t_bits))
  }

  #[inline]
  fn output_size(&self) -> usize {
    Sha512T::output_size(self)
  }

  #[inline]
  fn block_size(&self) -> usize {
    BLOCK_LEN
  }

  #[inline]
  fn update(&mut self, data: &[u8]) {
    Sha512T::update(self, data);
  }

  fn finalize_into_reset(&mut self, out: &mut [u8]) -> Result<usize, BufferTooShortError> {
    let written = self.finalize_into(out)?;
    self.reset();
    Ok(written)
  }

  #[inline]
  fn reset(&mut self) {
    Sha512T::reset(self);
  }

  fn box_clone(&self) -> Box<dyn DynDigest> {
    Box::new(self.clone())
  }
}

impl Snapshot for Sha512T {
  fn snapshot(&self) -> Vec<u8> {
    let mut w = StateWriter::new(AlgTag::Sha512T);
    w.u64(self.t_bits as u64);
    w.words64(self.engine.core().state());
    w.u128(self.engine.bytes_hashed());
    w.tail(self.engine.buffered());
    w.finish()
  }

  fn restore(blob: &[u8]) -> Result<Self, StateError> {
    let mut r = StateReader::new(blob, AlgTag::Sha512T)?;
    let t_bits = r.u64()? as usize;
    validate(t_bits).map_err(|_| StateError::CorruptField)?;
    let mut state = [0u64; 8];
    r.words64(&mut state)?;
    let bytes_hashed = r.u128()?;
    let buffered = r.tail()?;
    r.finish()?;
    Ok(Self {
      engine: Engine64::from_parts(Sha512Core::new(state), bytes_hashed, buffered)?,
      iv: derive_iv(t_bits),
      t_bits,
    })
  }

  fn restore_from(&mut self, source: &Self) -> Result<(), StateError> {
    if self.t_bits != source.t_bits {
      return Err(StateError::ParameterMismatch);
    }
    *self = source.clone();
    Ok(())
  }
}

//! Skein (version 1.3) over Threefish UBI chaining.
//!
//! Every Skein computation is a sequence of UBI invocations: an optional
//! key block, the configuration block (which binds the requested output
//! length), optional pre-message parameters in ascending type-tag order,
//! the streaming message itself, and finally one output-transform block per
//! chunk of requested output. Each UBI block is encrypted under the current
//! chain value with a 128-bit tweak encoding {type, first, final, 96-bit
//! position} and fed forward by XOR.
//!
//! Like BLAKE2, the message UBI must mark its last block, so a completed
//! block stays buffered until later input proves another follows.
//!
//! Chain values for the common (block size, output size) pairs are kept in
//! a read-only table and looked up at construction; other combinations
//! compute the key/config sequence on the spot.

#![allow(clippy::indexing_slicing)] // Fixed-size block and word-array manipulation

use alloc::{borrow::Cow, boxed::Box, format, vec::Vec};

use traits::{BufferTooShortError, Digest, DynDigest, ParamError, Snapshot, StateError};

use super::threefish::{encrypt_256, encrypt_512, encrypt_1024};
use crate::{
  state::{AlgTag, StateReader, StateWriter},
  util::{load_le64, store_le64_prefix},
};

// UBI type tags, ascending processing order.
const T_KEY: u64 = 0;
const T_CONFIG: u64 = 4;
const T_PERSONALIZATION: u64 = 8;
const T_PUBLIC_KEY: u64 = 12;
const T_KEY_ID: u64 = 16;
const T_NONCE: u64 = 20;
const T_MESSAGE: u64 = 48;
const T_OUTPUT: u64 = 63;

const FLAG_FIRST: u64 = 1 << 62;
const FLAG_FINAL: u64 = 1 << 63;

// Largest Threefish block; per-instance buffers use a prefix of this.
const MAX_BLOCK: usize = 128;

/// Pack a UBI tweak: 96-bit position, 6-bit type, first/final flags.
#[inline(always)]
fn make_tweak(ty: u64, position: u128, first: bool, last: bool) -> [u64; 2] {
  let mut t1 = ((position >> 64) as u64) & 0xffff_ffff;
  t1 |= ty << 56;
  if first {
    t1 |= FLAG_FIRST;
  }
  if last {
    t1 |= FLAG_FINAL;
  }
  [position as u64, t1]
}

/// Word-array plumbing shared by the three Threefish block sizes.
pub(crate) trait SkeinWords: Copy + Eq + core::fmt::Debug {
  const BYTES: usize;
  const STATE_BITS: usize;

  fn zeroed() -> Self;
  fn encrypt(key: &Self, tweak: &[u64; 2], block: &Self) -> Self;
  fn words(&self) -> &[u64];
  fn words_mut(&mut self) -> &mut [u64];
  /// Chain value for a parameterless configuration, if precomputed.
  fn cached_iv(out_len: usize) -> Option<Self>;

  fn load(bytes: &[u8]) -> Self {
    let mut v = Self::zeroed();
    load_le64(bytes, v.words_mut());
    v
  }

  /// Store a little-endian prefix of the state into `out`.
  fn store(&self, out: &mut [u8]) {
    store_le64_prefix(self.words(), out);
  }

  fn xor(&self, other: &Self) -> Self {
    let mut v = *self;
    for (a, b) in v.words_mut().iter_mut().zip(other.words()) {
      *a ^= b;
    }
    v
  }
}

// Skein 1.3 appendix B: precomputed configuration chain values.
const IV_256_256: [u64; 4] = [
  0xfc9d_a860_d048_b449,
  0x2fca_6647_9fa7_d833,
  0xb33b_c389_6656_840f,
  0x6a54_e920_fde8_da69,
];

const IV_512_256: [u64; 8] = [
  0xccd0_44a1_2fdb_3e13,
  0xe835_9030_1a79_a9eb,
  0x55ae_a061_4f81_6e6f,
  0x2a27_67a4_ae9b_94db,
  0xec06_025e_74dd_7683,
  0xe7a4_36cd_c474_6251,
  0xc36f_baf9_393a_d185,
  0x3eed_ba18_33ed_fc13,
];

const IV_512_512: [u64; 8] = [
  0x4903_adff_749c_51ce,
  0x0d95_de39_9746_df03,
  0x8fd1_9341_27c7_9bce,
  0x9a25_5629_ff35_2cb1,
  0x5db6_2599_df6c_a7b0,
  0xeabe_394c_a9d5_c3f4,
  0x9911_12c7_1a75_b523,
  0xae18_a40b_660f_cc33,
];

impl SkeinWords for [u64; 4] {
  const BYTES: usize = 32;
  const STATE_BITS: usize = 256;

  #[inline]
  fn zeroed() -> Self {
    [0u64; 4]
  }

  #[inline]
  fn encrypt(key: &Self, tweak: &[u64; 2], block: &Self) -> Self {
    encrypt_256(key, tweak, block)
  }

  #[inline]
  fn words(&self) -> &[u64] {
    self
  }

  #[inline]
  fn words_mut(&mut self) -> &mut [u64] {
    self
  }

  fn cached_iv(out_len: usize) -> Option<Self> {
    match out_len {
      32 => Some(IV_256_256),
      _ => None,
    }
  }
}

impl SkeinWords for [u64; 8] {
  const BYTES: usize = 64;
  const STATE_BITS: usize = 512;

  #[inline]
  fn zeroed() -> Self {
    [0u64; 8]
  }

  #[inline]
  fn encrypt(key: &Self, tweak: &[u64; 2], block: &Self) -> Self {
    encrypt_512(key, tweak, block)
  }

  #[inline]
  fn words(&self) -> &[u64] {
    self
  }

  #[inline]
  fn words_mut(&mut self) -> &mut [u64] {
    self
  }

  fn cached_iv(out_len: usize) -> Option<Self> {
    match out_len {
      32 => Some(IV_512_256),
      64 => Some(IV_512_512),
      _ => None,
    }
  }
}

impl SkeinWords for [u64; 16] {
  const BYTES: usize = 128;
  const STATE_BITS: usize = 1024;

  #[inline]
  fn zeroed() -> Self {
    [0u64; 16]
  }

  #[inline]
  fn encrypt(key: &Self, tweak: &[u64; 2], block: &Self) -> Self {
    encrypt_1024(key, tweak, block)
  }

  #[inline]
  fn words(&self) -> &[u64] {
    self
  }

  #[inline]
  fn words_mut(&mut self) -> &mut [u64] {
    self
  }

  fn cached_iv(_out_len: usize) -> Option<Self> {
    None
  }
}

/// One complete UBI invocation over `data`.
fn ubi_one_shot<W: SkeinWords>(chain: W, ty: u64, data: &[u8]) -> W {
  let nb = W::BYTES;
  let mut chain = chain;
  let mut position: u128 = 0;
  let mut first = true;
  let mut rest = data;
  loop {
    let take = core::cmp::min(nb, rest.len());
    let last = rest.len() <= nb;
    let mut block = [0u8; MAX_BLOCK];
    block[..take].copy_from_slice(&rest[..take]);
    position += take as u128;
    let tweak = make_tweak(ty, position, first, last);
    let m = W::load(&block[..nb]);
    chain = W::encrypt(&chain, &tweak, &m).xor(&m);
    if last {
      break;
    }
    first = false;
    rest = &rest[take..];
  }
  chain
}

/// Optional key and parameter blocks for a Skein instance.
///
/// Pre-message parameters are bound into the chain value in ascending
/// type-tag order: personalization, public key, key identifier, nonce.
///
/// # Examples
///
/// ```
/// use digests::{Skein512, SkeinParams};
///
/// let params = SkeinParams::new().key(b"secret").personalization(b"20260805 app@example.org");
/// let mut mac = Skein512::with_params(32, params)?;
/// mac.update(b"message");
/// # Ok::<(), digests::ParamError>(())
/// ```
#[derive(Clone, Default)]
pub struct SkeinParams {
  key: Option<Vec<u8>>,
  personalization: Option<Vec<u8>>,
  public_key: Option<Vec<u8>>,
  key_id: Option<Vec<u8>>,
  nonce: Option<Vec<u8>>,
}

impl SkeinParams {
  #[must_use]
  pub fn new() -> Self {
    Self::default()
  }

  /// Secret key (any length) for MAC or KDF use.
  #[must_use]
  pub fn key(mut self, key: &[u8]) -> Self {
    self.key = Some(key.to_vec());
    self
  }

  /// Application personalization string.
  #[must_use]
  pub fn personalization(mut self, personalization: &[u8]) -> Self {
    self.personalization = Some(personalization.to_vec());
    self
  }

  /// Public key binding (signature hashing).
  #[must_use]
  pub fn public_key(mut self, public_key: &[u8]) -> Self {
    self.public_key = Some(public_key.to_vec());
    self
  }

  /// Key derivation identifier.
  #[must_use]
  pub fn key_id(mut self, key_id: &[u8]) -> Self {
    self.key_id = Some(key_id.to_vec());
    self
  }

  /// Nonce for stream-cipher or randomized-hashing use.
  #[must_use]
  pub fn nonce(mut self, nonce: &[u8]) -> Self {
    self.nonce = Some(nonce.to_vec());
    self
  }

  fn is_trivial(&self) -> bool {
    self.key.is_none()
      && self.personalization.is_none()
      && self.public_key.is_none()
      && self.key_id.is_none()
      && self.nonce.is_none()
  }

  fn pre_message(&self) -> impl Iterator<Item = (u64, &[u8])> {
    [
      (T_PERSONALIZATION, self.personalization.as_deref()),
      (T_PUBLIC_KEY, self.public_key.as_deref()),
      (T_KEY_ID, self.key_id.as_deref()),
      (T_NONCE, self.nonce.as_deref()),
    ]
    .into_iter()
    .filter_map(|(ty, data)| data.map(|d| (ty, d)))
  }
}

/// Key/config/parameter UBI sequence, ignoring the precomputed table.
fn compute_initial<W: SkeinWords>(out_len: usize, params: &SkeinParams) -> W {
  let mut chain = W::zeroed();
  if let Some(key) = params.key.as_deref() {
    chain = ubi_one_shot(chain, T_KEY, key);
  }

  // Configuration block: schema "SHA3", version 1, output length in bits.
  let mut cfg = [0u8; 32];
  cfg[..4].copy_from_slice(b"SHA3");
  cfg[4..6].copy_from_slice(&1u16.to_le_bytes());
  cfg[8..16].copy_from_slice(&((out_len as u64) * 8).to_le_bytes());
  chain = ubi_one_shot(chain, T_CONFIG, &cfg);

  for (ty, data) in params.pre_message() {
    chain = ubi_one_shot(chain, ty, data);
  }
  chain
}

fn derive_initial<W: SkeinWords>(out_len: usize, params: &SkeinParams) -> W {
  if params.is_trivial()
    && let Some(iv) = W::cached_iv(out_len)
  {
    return iv;
  }
  compute_initial(out_len, params)
}

#[derive(Clone)]
struct SkeinCore<W: SkeinWords> {
  initial: W,
  chain: W,
  position: u128,
  first: bool,
  buf: [u8; MAX_BLOCK],
  buf_len: usize,
  out_len: usize,
}

impl<W: SkeinWords> SkeinCore<W> {
  fn new(out_len: usize, params: &SkeinParams) -> Self {
    let initial = derive_initial(out_len, params);
    Self {
      initial,
      chain: initial,
      position: 0,
      first: true,
      buf: [0u8; MAX_BLOCK],
      buf_len: 0,
      out_len,
    }
  }

  fn process_message_block(&mut self, block: &[u8]) {
    self.position += W::BYTES as u128;
    let tweak = make_tweak(T_MESSAGE, self.position, self.first, false);
    let m = W::load(block);
    self.chain = W::encrypt(&self.chain, &tweak, &m).xor(&m);
    self.first = false;
  }

  fn update(&mut self, mut data: &[u8]) {
    if data.is_empty() {
      return;
    }
    let nb = W::BYTES;

    if self.buf_len != 0 {
      let take = core::cmp::min(nb - self.buf_len, data.len());
      self.buf[self.buf_len..self.buf_len + take].copy_from_slice(&data[..take]);
      self.buf_len += take;
      data = &data[take..];

      // Keep a full block buffered until we know there is more input, so
      // the final block can carry the final-flag tweak.
      if self.buf_len == nb && !data.is_empty() {
        let block = self.buf;
        self.process_message_block(&block[..nb]);
        self.buf_len = 0;
      }
    }

    // Bulk blocks; the trailing chunk (full or partial) stays buffered.
    while data.len() > nb {
      let (block, rest) = data.split_at(nb);
      self.process_message_block(block);
      data = rest;
    }

    if !data.is_empty() {
      self.buf[..data.len()].copy_from_slice(data);
      self.buf_len = data.len();
    }
  }

  /// Final message block plus the output transform, writing `out.len()` bytes.
  fn finalize_raw(&self, out: &mut [u8]) {
    let nb = W::BYTES;

    let mut block = [0u8; MAX_BLOCK];
    block[..self.buf_len].copy_from_slice(&self.buf[..self.buf_len]);
    let position = self.position + self.buf_len as u128;
    let tweak = make_tweak(T_MESSAGE, position, self.first, true);
    let m = W::load(&block[..nb]);
    let chain = W::encrypt(&self.chain, &tweak, &m).xor(&m);

    // Output transform: one UBI per output block, each over an 8-byte
    // little-endian sequence counter, all keyed by the same chain value.
    let mut remaining = out;
    let mut counter: u64 = 0;
    while !remaining.is_empty() {
      let mut counter_block = [0u8; MAX_BLOCK];
      counter_block[..8].copy_from_slice(&counter.to_le_bytes());
      let tweak = make_tweak(T_OUTPUT, 8, true, true);
      let c = W::load(&counter_block[..nb]);
      let o = W::encrypt(&chain, &tweak, &c).xor(&c);

      let take = core::cmp::min(nb, remaining.len());
      o.store(&mut remaining[..take]);
      remaining = &mut remaining[take..];
      counter += 1;
    }
  }

  fn finalize_into(&self, out: &mut [u8]) -> Result<usize, BufferTooShortError> {
    if out.len() < self.out_len {
      return Err(BufferTooShortError::new(self.out_len, out.len()));
    }
    self.finalize_raw(&mut out[..self.out_len]);
    Ok(self.out_len)
  }

  fn reset(&mut self) {
    self.chain = self.initial;
    self.position = 0;
    self.first = true;
    self.buf = [0u8; MAX_BLOCK];
    self.buf_len = 0;
  }

  fn snapshot(&self, tag: AlgTag) -> Vec<u8> {
    let mut w = StateWriter::new(tag);
    w.u64(self.out_len as u64);
    w.words64(self.initial.words());
    w.words64(self.chain.words());
    w.u128(self.position);
    w.u8(self.first as u8);
    w.tail(&self.buf[..self.buf_len]);
    w.finish()
  }

  fn restore(blob: &[u8], tag: AlgTag) -> Result<Self, StateError> {
    let mut r = StateReader::new(blob, tag)?;
    let out_len = r.u64()? as usize;
    if out_len == 0 {
      return Err(StateError::CorruptField);
    }
    let mut initial = W::zeroed();
    r.words64(initial.words_mut())?;
    let mut chain = W::zeroed();
    r.words64(chain.words_mut())?;
    let position = r.u128()?;
    let first = match r.u8()? {
      0 => false,
      1 => true,
      _ => return Err(StateError::CorruptField),
    };
    let buffered = r.tail()?;
    r.finish()?;
    if buffered.len() > W::BYTES || !position.is_multiple_of(W::BYTES as u128) {
      return Err(StateError::CorruptField);
    }
    let mut buf = [0u8; MAX_BLOCK];
    buf[..buffered.len()].copy_from_slice(buffered);
    Ok(Self {
      initial,
      chain,
      position,
      first,
      buf,
      buf_len: buffered.len(),
      out_len,
    })
  }
}

macro_rules! skein_engine {
  ($(#[$doc:meta])* $name:ident, $words:ty, $tag:expr) => {
    $(#[$doc])*
    #[derive(Clone)]
    pub struct $name {
      core: SkeinCore<$words>,
    }

    impl $name {
      /// Unkeyed Skein with the given output length in bytes (at least 1).
      pub fn new(out_len: usize) -> Result<Self, ParamError> {
        Self::with_params(out_len, SkeinParams::new())
      }

      /// Keyed Skein (MAC mode); the key may have any length.
      pub fn new_keyed(out_len: usize, key: &[u8]) -> Result<Self, ParamError> {
        Self::with_params(out_len, SkeinParams::new().key(key))
      }

      /// Fully parameterized construction.
      pub fn with_params(out_len: usize, params: SkeinParams) -> Result<Self, ParamError> {
        if out_len == 0 {
          return Err(ParamError::OutputLen {
            requested: 0,
            min: 1,
            max: usize::MAX,
          });
        }
        Ok(Self {
          core: SkeinCore::new(out_len, &params),
        })
      }

      pub(crate) fn fixed(out_len: usize) -> Self {
        Self {
          core: SkeinCore::new(out_len, &SkeinParams::new()),
        }
      }

      /// Output size in bytes.
      #[inline]
      #[must_use]
      pub fn output_size(&self) -> usize {
        self.core.out_len
      }

      /// Update the digest with additional data.
      #[inline]
      pub fn update(&mut self, data: &[u8]) {
        self.core.update(data);
      }

      /// Finalize into the front of `out`, returning the number of bytes
      /// written. Does not consume or reset the digest.
      pub fn finalize_into(&self, out: &mut [u8]) -> Result<usize, BufferTooShortError> {
        self.core.finalize_into(out)
      }

      /// Reset to the post-construction state. Key and parameter blocks
      /// stay bound in the initial chain value.
      #[inline]
      pub fn reset(&mut self) {
        self.core.reset();
      }

      pub(crate) fn finalize_raw(&self, out: &mut [u8]) {
        self.core.finalize_raw(out);
      }
    }

    impl DynDigest for $name {
      fn algorithm_name(&self) -> Cow<'static, str> {
        Cow::Owned(format!(
          "Skein-{}-{}",
          <$words as SkeinWords>::STATE_BITS,
          self.core.out_len * 8
        ))
      }

      #[inline]
      fn output_size(&self) -> usize {
        self.core.out_len
      }

      #[inline]
      fn block_size(&self) -> usize {
        <$words as SkeinWords>::BYTES
      }

      #[inline]
      fn update(&mut self, data: &[u8]) {
        $name::update(self, data);
      }

      fn finalize_into_reset(&mut self, out: &mut [u8]) -> Result<usize, BufferTooShortError> {
        let written = self.finalize_into(out)?;
        self.reset();
        Ok(written)
      }

      #[inline]
      fn reset(&mut self) {
        $name::reset(self);
      }

      fn box_clone(&self) -> Box<dyn DynDigest> {
        Box::new(self.clone())
      }
    }

    impl Snapshot for $name {
      fn snapshot(&self) -> Vec<u8> {
        self.core.snapshot($tag)
      }

      fn restore(blob: &[u8]) -> Result<Self, StateError> {
        Ok(Self {
          core: SkeinCore::restore(blob, $tag)?,
        })
      }

      fn restore_from(&mut self, source: &Self) -> Result<(), StateError> {
        if self.core.out_len != source.core.out_len || self.core.initial != source.core.initial {
          return Err(StateError::ParameterMismatch);
        }
        *self = source.clone();
        Ok(())
      }
    }
  };
}

skein_engine!(
  /// Skein-256 with a runtime output length and optional parameters.
  Skein256,
  [u64; 4],
  AlgTag::Skein256
);
skein_engine!(
  /// Skein-512 with a runtime output length and optional parameters.
  ///
  /// # Examples
  ///
  /// ```
  /// use digests::Skein512;
  ///
  /// let mut h = Skein512::new(32)?;
  /// h.update(b"abc");
  /// let mut out = [0u8; 32];
  /// h.finalize_into(&mut out)?;
  /// # Ok::<(), Box<dyn std::error::Error>>(())
  /// ```
  Skein512,
  [u64; 8],
  AlgTag::Skein512
);
skein_engine!(
  /// Skein-1024 with a runtime output length and optional parameters.
  Skein1024,
  [u64; 16],
  AlgTag::Skein1024
);

macro_rules! skein_fixed {
  ($(#[$doc:meta])* $name:ident, $inner:ident, $block:expr, $out:expr, $alg_name:literal) => {
    $(#[$doc])*
    #[derive(Clone)]
    pub struct $name {
      inner: $inner,
    }

    impl Default for $name {
      #[inline]
      fn default() -> Self {
        Self {
          inner: $inner::fixed($out),
        }
      }
    }

    impl Digest for $name {
      const OUTPUT_SIZE: usize = $out;
      const BLOCK_SIZE: usize = $block;
      const NAME: &'static str = $alg_name;
      type Output = [u8; $out];

      #[inline]
      fn new() -> Self {
        Self::default()
      }

      #[inline]
      fn update(&mut self, data: &[u8]) {
        self.inner.update(data);
      }

      fn finalize(&self) -> Self::Output {
        let mut out = [0u8; $out];
        self.inner.finalize_raw(&mut out);
        out
      }

      #[inline]
      fn reset(&mut self) {
        self.inner.reset();
      }
    }

    impl Snapshot for $name {
      fn snapshot(&self) -> Vec<u8> {
        self.inner.snapshot()
      }

      fn restore(blob: &[u8]) -> Result<Self, StateError> {
        let inner = <$inner as Snapshot>::restore(blob)?;
        if inner.core.out_len != $out {
          return Err(StateError::ParameterMismatch);
        }
        Ok(Self { inner })
      }
    }
  };
}

skein_fixed!(
  /// Fixed Skein-256-256.
  Skein256_256, Skein256, 32, 32, "Skein-256-256"
);
skein_fixed!(
  /// Fixed Skein-512-256.
  Skein512_256, Skein512, 64, 32, "Skein-512-256"
);
skein_fixed!(
  /// Fixed Skein-512-512.
  Skein512_512, Skein512, 64, 64, "Skein-512-512"
);
skein_fixed!(
  /// Fixed Skein-1024-1024.
  Skein1024_1024, Skein1024, 128, 128, "Skein-1024-1024"
);

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn cached_ivs_match_config_derivation() {
    let trivial = SkeinParams::new();
    assert_eq!(
      <[u64; 4] as SkeinWords>::cached_iv(32),
      Some(compute_initial::<[u64; 4]>(32, &trivial))
    );
    assert_eq!(
      <[u64; 8] as SkeinWords>::cached_iv(32),
      Some(compute_initial::<[u64; 8]>(32, &trivial))
    );
    assert_eq!(
      <[u64; 8] as SkeinWords>::cached_iv(64),
      Some(compute_initial::<[u64; 8]>(64, &trivial))
    );
  }

  #[test]
  fn cache_misses_fall_back_to_derivation() {
    // 20-byte output has no table entry; construction must still work and
    // differ from the 32-byte configuration.
    let h20 = Skein512::new(20).unwrap();
    let h32 = Skein512::new(32).unwrap();
    assert_ne!(h20.core.initial, h32.core.initial);
  }

  #[test]
  fn empty_message_processes_one_zero_block() {
    let h = Skein512::new(64).unwrap();
    let mut a = [0u8; 64];
    h.finalize_into(&mut a).unwrap();

    // Same digest regardless of how many empty updates happened.
    let mut h2 = Skein512::new(64).unwrap();
    h2.update(b"");
    h2.update(b"");
    let mut b = [0u8; 64];
    h2.finalize_into(&mut b).unwrap();
    assert_eq!(a, b);
  }
}

//! SHA-3 and SHAKE (FIPS 202) over the Keccak-f[1600] sponge.
//!
//! The fixed digests use the `0x06` domain separator; the SHAKE types use
//! `0x1f` and also expose an [`Xof`] squeeze reader for arbitrary-length
//! output.

use alloc::vec::Vec;

use traits::{Digest, Snapshot, StateError, Xof};

use super::keccak::{KeccakCore, KeccakXof};
use crate::state::{AlgTag, StateReader, StateWriter};

const DS_SHA3: u8 = 0x06;
const DS_SHAKE: u8 = 0x1f;

macro_rules! sha3_digest {
  ($(#[$doc:meta])* $name:ident, $rate:literal, $out:literal, $ds:expr, $alg_name:literal, $tag:expr) => {
    $(#[$doc])*
    #[derive(Clone, Default)]
    pub struct $name {
      core: KeccakCore<$rate>,
    }

    impl Digest for $name {
      const OUTPUT_SIZE: usize = $out;
      const BLOCK_SIZE: usize = $rate;
      const NAME: &'static str = $alg_name;
      type Output = [u8; $out];

      #[inline]
      fn new() -> Self {
        Self::default()
      }

      #[inline]
      fn update(&mut self, data: &[u8]) {
        self.core.update(data);
      }

      #[inline]
      fn finalize(&self) -> Self::Output {
        self.core.finalize_into_fixed::<$out>($ds)
      }

      #[inline]
      fn reset(&mut self) {
        self.core = KeccakCore::default();
      }
    }

    impl Snapshot for $name {
      fn snapshot(&self) -> Vec<u8> {
        let mut w = StateWriter::new($tag);
        w.words64(self.core.state_words());
        w.tail(self.core.buffered());
        w.finish()
      }

      fn restore(blob: &[u8]) -> Result<Self, StateError> {
        let mut r = StateReader::new(blob, $tag)?;
        let mut state = [0u64; 25];
        r.words64(&mut state)?;
        let buffered = r.tail()?;
        r.finish()?;
        Ok(Self {
          core: KeccakCore::from_parts(state, buffered)?,
        })
      }
    }
  };
}

sha3_digest!(
  /// SHA3-224.
  Sha3_224, 144, 28, DS_SHA3, "SHA3-224", AlgTag::Sha3_224
);
sha3_digest!(
  /// SHA3-256.
  Sha3_256, 136, 32, DS_SHA3, "SHA3-256", AlgTag::Sha3_256
);
sha3_digest!(
  /// SHA3-384.
  Sha3_384, 104, 48, DS_SHA3, "SHA3-384", AlgTag::Sha3_384
);
sha3_digest!(
  /// SHA3-512.
  Sha3_512, 72, 64, DS_SHA3, "SHA3-512", AlgTag::Sha3_512
);
sha3_digest!(
  /// SHAKE128 with the conventional 32-byte fixed output.
  ///
  /// Use [`Shake128::finalize_xof`] for arbitrary-length output.
  Shake128, 168, 32, DS_SHAKE, "SHAKE128", AlgTag::Shake128
);
sha3_digest!(
  /// SHAKE256 with the conventional 64-byte fixed output.
  ///
  /// Use [`Shake256::finalize_xof`] for arbitrary-length output.
  Shake256, 136, 64, DS_SHAKE, "SHAKE256", AlgTag::Shake256
);

impl Shake128 {
  /// Finalize into a squeeze reader for arbitrary-length output.
  #[must_use]
  pub fn finalize_xof(&self) -> Shake128Xof {
    Shake128Xof {
      inner: self.core.finalize_xof(DS_SHAKE),
    }
  }
}

impl Shake256 {
  /// Finalize into a squeeze reader for arbitrary-length output.
  #[must_use]
  pub fn finalize_xof(&self) -> Shake256Xof {
    Shake256Xof {
      inner: self.core.finalize_xof(DS_SHAKE),
    }
  }
}

/// SHAKE128 squeeze reader.
#[derive(Clone)]
pub struct Shake128Xof {
  inner: KeccakXof<168>,
}

impl Xof for Shake128Xof {
  #[inline]
  fn squeeze(&mut self, out: &mut [u8]) {
    self.inner.squeeze_into(out);
  }
}

/// SHAKE256 squeeze reader.
#[derive(Clone)]
pub struct Shake256Xof {
  inner: KeccakXof<136>,
}

impl Xof for Shake256Xof {
  #[inline]
  fn squeeze(&mut self, out: &mut [u8]) {
    self.inner.squeeze_into(out);
  }
}

use digests::{Sha224, Sha256, Sha384, Sha512, Sha512_224, Sha512_256};
use proptest::prelude::*;
use traits::Digest as _;

macro_rules! differential {
  ($one_shot:ident, $streaming:ident, $ours:ty, $oracle:ty, $out:expr) => {
    fn oracle_for(data: &[u8]) -> [u8; $out] {
      use sha2::Digest as _;
      let out = <$oracle>::digest(data);
      let mut bytes = [0u8; $out];
      bytes.copy_from_slice(&out);
      bytes
    }

    proptest! {
      #[test]
      fn $one_shot(data in proptest::collection::vec(any::<u8>(), 0..8192)) {
        prop_assert_eq!(<$ours>::digest(&data), oracle_for(&data));
      }

      #[test]
      fn $streaming(data in proptest::collection::vec(any::<u8>(), 0..8192)) {
        let expected = oracle_for(&data);

        let mut h = <$ours>::new();
        let mut i = 0usize;
        while i < data.len() {
          let step = (data[i] as usize % 97) + 1;
          let end = core::cmp::min(data.len(), i + step);
          h.update(&data[i..end]);
          i = end;
        }

        prop_assert_eq!(h.finalize(), expected);
      }
    }
  };
}

macro_rules! differential_mod {
  ($module:ident, $ours:ty, $oracle:ty, $out:expr) => {
    mod $module {
      use super::*;

      differential!(one_shot_matches_oracle, streaming_matches_oracle, $ours, $oracle, $out);
    }
  };
}

differential_mod!(sha224, Sha224, sha2::Sha224, 28);
differential_mod!(sha256, Sha256, sha2::Sha256, 32);
differential_mod!(sha384, Sha384, sha2::Sha384, 48);
differential_mod!(sha512, Sha512, sha2::Sha512, 64);
differential_mod!(sha512_224, Sha512_224, sha2::Sha512_224, 28);
differential_mod!(sha512_256, Sha512_256, sha2::Sha512_256, 32);

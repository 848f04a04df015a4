use digests::{Sha3_224, Sha3_256, Sha3_384, Sha3_512, Shake128, Shake256};
use proptest::prelude::*;
use traits::{Digest as _, Xof as _};

macro_rules! sha3_differential {
  ($module:ident, $ours:ty, $oracle:ty, $out:expr) => {
    mod $module {
      use super::*;

      fn oracle_for(data: &[u8]) -> [u8; $out] {
        use sha3::Digest as _;
        let out = <$oracle>::digest(data);
        let mut bytes = [0u8; $out];
        bytes.copy_from_slice(&out);
        bytes
      }

      proptest! {
        #[test]
        fn one_shot_matches_oracle(data in proptest::collection::vec(any::<u8>(), 0..8192)) {
          prop_assert_eq!(<$ours>::digest(&data), oracle_for(&data));
        }

        #[test]
        fn streaming_matches_oracle(data in proptest::collection::vec(any::<u8>(), 0..8192)) {
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
    }
  };
}

sha3_differential!(sha3_224, Sha3_224, sha3::Sha3_224, 28);
sha3_differential!(sha3_256, Sha3_256, sha3::Sha3_256, 32);
sha3_differential!(sha3_384, Sha3_384, sha3::Sha3_384, 48);
sha3_differential!(sha3_512, Sha3_512, sha3::Sha3_512, 64);

fn shake128_ref(data: &[u8], out: &mut [u8]) {
  use sha3::digest::{ExtendableOutput, Update, XofReader};
  let mut h = sha3::Shake128::default();
  h.update(data);
  let mut reader = h.finalize_xof();
  reader.read(out);
}

fn shake256_ref(data: &[u8], out: &mut [u8]) {
  use sha3::digest::{ExtendableOutput, Update, XofReader};
  let mut h = sha3::Shake256::default();
  h.update(data);
  let mut reader = h.finalize_xof();
  reader.read(out);
}

proptest! {
  #[test]
  fn shake128_xof_matches_oracle(
    data in proptest::collection::vec(any::<u8>(), 0..4096),
    out_len in 0usize..2048,
  ) {
    let mut expected = vec![0u8; out_len];
    shake128_ref(&data, &mut expected);

    let mut h = Shake128::new();
    h.update(&data);
    let mut xof = h.finalize_xof();
    let mut actual = vec![0u8; out_len];
    xof.squeeze(&mut actual);

    prop_assert_eq!(actual, expected);
  }

  #[test]
  fn shake256_multi_squeeze_matches_oracle(
    data in proptest::collection::vec(any::<u8>(), 0..4096),
    out_len in 0usize..2048,
  ) {
    let mut expected = vec![0u8; out_len];
    shake256_ref(&data, &mut expected);

    let mut h = Shake256::new();
    h.update(&data);
    let mut xof = h.finalize_xof();

    // Squeeze in uneven pieces.
    let mut actual = vec![0u8; out_len];
    let mut pos = 0usize;
    let mut step = 1usize;
    while pos < out_len {
      let end = core::cmp::min(out_len, pos + step);
      xof.squeeze(&mut actual[pos..end]);
      pos = end;
      step = (step * 2 + 3) % 211 + 1;
    }

    prop_assert_eq!(actual, expected);
  }
}

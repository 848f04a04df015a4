use digests::{Blake2b, Blake2b512, Blake2s, Blake2s256};
use proptest::prelude::*;
use traits::Digest as _;

fn blake2b512_ref(data: &[u8]) -> [u8; 64] {
  use blake2::Digest as _;
  let out = blake2::Blake2b512::digest(data);
  let mut bytes = [0u8; 64];
  bytes.copy_from_slice(&out);
  bytes
}

fn blake2s256_ref(data: &[u8]) -> [u8; 32] {
  use blake2::Digest as _;
  let out = blake2::Blake2s256::digest(data);
  let mut bytes = [0u8; 32];
  bytes.copy_from_slice(&out);
  bytes
}

fn blake2b_var_ref(out_len: usize, data: &[u8]) -> Vec<u8> {
  use blake2::digest::{Update, VariableOutput};
  let mut h = blake2::Blake2bVar::new(out_len).unwrap();
  h.update(data);
  let mut out = vec![0u8; out_len];
  h.finalize_variable(&mut out).unwrap();
  out
}

fn blake2s_var_ref(out_len: usize, data: &[u8]) -> Vec<u8> {
  use blake2::digest::{Update, VariableOutput};
  let mut h = blake2::Blake2sVar::new(out_len).unwrap();
  h.update(data);
  let mut out = vec![0u8; out_len];
  h.finalize_variable(&mut out).unwrap();
  out
}

fn blake2b_mac_ref(key: &[u8], salt: &[u8], personal: &[u8], data: &[u8]) -> [u8; 64] {
  use blake2::digest::Mac as _;
  let mut h = blake2::Blake2bMac512::new_with_salt_and_personal(key, salt, personal).unwrap();
  h.update(data);
  let out = h.finalize().into_bytes();
  let mut bytes = [0u8; 64];
  bytes.copy_from_slice(&out);
  bytes
}

proptest! {
  #[test]
  fn blake2b512_one_shot_matches_oracle(data in proptest::collection::vec(any::<u8>(), 0..8192)) {
    prop_assert_eq!(Blake2b512::digest(&data), blake2b512_ref(&data));
  }

  #[test]
  fn blake2b512_streaming_matches_oracle(data in proptest::collection::vec(any::<u8>(), 0..8192)) {
    let expected = blake2b512_ref(&data);

    let mut h = Blake2b512::new();
    let mut i = 0usize;
    while i < data.len() {
      let step = (data[i] as usize % 97) + 1;
      let end = core::cmp::min(data.len(), i + step);
      h.update(&data[i..end]);
      i = end;
    }

    prop_assert_eq!(h.finalize(), expected);
  }

  #[test]
  fn blake2s256_one_shot_matches_oracle(data in proptest::collection::vec(any::<u8>(), 0..8192)) {
    prop_assert_eq!(Blake2s256::digest(&data), blake2s256_ref(&data));
  }

  #[test]
  fn blake2s256_streaming_matches_oracle(data in proptest::collection::vec(any::<u8>(), 0..8192)) {
    let expected = blake2s256_ref(&data);

    let mut h = Blake2s256::new();
    let mut i = 0usize;
    while i < data.len() {
      let step = (data[i] as usize % 67) + 1;
      let end = core::cmp::min(data.len(), i + step);
      h.update(&data[i..end]);
      i = end;
    }

    prop_assert_eq!(h.finalize(), expected);
  }

  #[test]
  fn blake2b_variable_output_matches_oracle(
    data in proptest::collection::vec(any::<u8>(), 0..4096),
    out_len in 1usize..=64,
  ) {
    let mut h = Blake2b::new(out_len).unwrap();
    h.update(&data);
    let mut out = vec![0u8; out_len];
    h.finalize_into(&mut out).unwrap();

    prop_assert_eq!(out, blake2b_var_ref(out_len, &data));
  }

  #[test]
  fn blake2s_variable_output_matches_oracle(
    data in proptest::collection::vec(any::<u8>(), 0..4096),
    out_len in 1usize..=32,
  ) {
    let mut h = Blake2s::new(out_len).unwrap();
    h.update(&data);
    let mut out = vec![0u8; out_len];
    h.finalize_into(&mut out).unwrap();

    prop_assert_eq!(out, blake2s_var_ref(out_len, &data));
  }

  #[test]
  fn blake2b_keyed_matches_oracle(
    data in proptest::collection::vec(any::<u8>(), 0..4096),
    key in proptest::collection::vec(any::<u8>(), 1..=64),
  ) {
    use blake2::digest::Mac as _;
    let mut oracle = blake2::Blake2bMac512::new_from_slice(&key).unwrap();
    oracle.update(&data);
    let mut expected = [0u8; 64];
    expected.copy_from_slice(&oracle.finalize().into_bytes());

    let mut h = Blake2b::new_keyed(64, &key).unwrap();
    h.update(&data);
    let mut out = [0u8; 64];
    h.finalize_into(&mut out).unwrap();

    prop_assert_eq!(out, expected);
  }

  #[test]
  fn blake2b_salt_and_personal_match_oracle(
    data in proptest::collection::vec(any::<u8>(), 0..2048),
    key in proptest::collection::vec(any::<u8>(), 1..=64),
    salt in proptest::collection::vec(any::<u8>(), 16..=16),
    personal in proptest::collection::vec(any::<u8>(), 16..=16),
  ) {
    let expected = blake2b_mac_ref(&key, &salt, &personal, &data);

    let mut h = Blake2b::with_params(64, Some(&key), Some(&salt), Some(&personal)).unwrap();
    h.update(&data);
    let mut out = [0u8; 64];
    h.finalize_into(&mut out).unwrap();

    prop_assert_eq!(out, expected);
  }
}

#[test]
fn construction_bounds_are_enforced() {
  assert!(Blake2b::new(0).is_err());
  assert!(Blake2b::new(65).is_err());
  assert!(Blake2b::new_keyed(32, &[0u8; 65]).is_err());
  assert!(Blake2b::with_params(32, None, Some(&[0u8; 15]), None).is_err());
  assert!(Blake2b::with_params(32, None, None, Some(&[0u8; 17])).is_err());

  assert!(Blake2s::new(0).is_err());
  assert!(Blake2s::new(33).is_err());
  assert!(Blake2s::new_keyed(32, &[0u8; 33]).is_err());
  assert!(Blake2s::with_params(32, None, Some(&[0u8; 7]), None).is_err());
  assert!(Blake2s::with_params(32, None, None, Some(&[0u8; 9])).is_err());
}

#[test]
fn keyed_reset_reproduces_fresh_instance() {
  let key = b"0123456789abcdef";
  let mut reused = Blake2b::new_keyed(32, key).unwrap();
  reused.update(b"first message");
  let mut first = [0u8; 32];
  reused.finalize_into(&mut first).unwrap();

  reused.reset();
  reused.update(b"second message");
  let mut after_reset = [0u8; 32];
  reused.finalize_into(&mut after_reset).unwrap();

  let mut fresh = Blake2b::new_keyed(32, key).unwrap();
  fresh.update(b"second message");
  let mut expected = [0u8; 32];
  fresh.finalize_into(&mut expected).unwrap();

  assert_eq!(after_reset, expected);
  assert_ne!(first, after_reset);
}

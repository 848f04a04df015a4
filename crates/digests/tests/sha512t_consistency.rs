use digests::{Sha512T, Sha512_224, Sha512_256};
use proptest::prelude::*;
use traits::{Digest as _, DynDigest};

// The runtime-t engine must agree byte-for-byte with the fixed FIPS types,
// which carry the standard hard-coded IVs. This pins the IV self-derivation
// procedure.
proptest! {
  #[test]
  fn t224_matches_fixed_type(data in proptest::collection::vec(any::<u8>(), 0..4096)) {
    let mut h = Sha512T::new(224).unwrap();
    h.update(&data);
    let mut out = [0u8; 28];
    h.finalize_into(&mut out).unwrap();
    prop_assert_eq!(out, Sha512_224::digest(&data));
  }

  #[test]
  fn t256_matches_fixed_type(data in proptest::collection::vec(any::<u8>(), 0..4096)) {
    let mut h = Sha512T::new(256).unwrap();
    h.update(&data);
    let mut out = [0u8; 32];
    h.finalize_into(&mut out).unwrap();
    prop_assert_eq!(out, Sha512_256::digest(&data));
  }

  // Distinct t values must never collide on a shared prefix of output.
  #[test]
  fn distinct_t_values_diverge(data in proptest::collection::vec(any::<u8>(), 0..1024)) {
    let mut h1 = Sha512T::new(128).unwrap();
    let mut h2 = Sha512T::new(192).unwrap();
    h1.update(&data);
    h2.update(&data);
    let mut a = [0u8; 16];
    let mut b = [0u8; 24];
    h1.finalize_into(&mut a).unwrap();
    h2.finalize_into(&mut b).unwrap();
    prop_assert_ne!(&a[..], &b[..16]);
  }
}

#[test]
fn reports_runtime_identity() {
  let h = Sha512T::new(224).unwrap();
  assert_eq!(h.algorithm_name(), "SHA-512/224");
  assert_eq!(h.output_size(), 28);
  assert_eq!(DynDigest::block_size(&h), 128);
}

#[test]
fn finalize_does_not_disturb_streaming() {
  let mut h = Sha512T::new(136).unwrap();
  h.update(b"hello ");

  let mut mid = [0u8; 17];
  h.finalize_into(&mut mid).unwrap();

  h.update(b"world");
  let mut full = [0u8; 17];
  h.finalize_into(&mut full).unwrap();

  let mut direct = Sha512T::new(136).unwrap();
  direct.update(b"hello world");
  let mut expected = [0u8; 17];
  direct.finalize_into(&mut expected).unwrap();

  assert_eq!(full, expected);
  assert_ne!(mid, full);
}

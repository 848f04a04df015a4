use digests::{Blake2b, Blake2b512, Blake2s256};
use hex_literal::hex;
use traits::Digest as _;

// RFC 7693 appendix A/E and the reference blake2 test vectors.

#[test]
fn blake2b512_empty() {
  assert_eq!(
    Blake2b512::digest(b""),
    hex!(
      "786a02f742015903c6c6fd852552d272912f4740e15847618a86e217f71f5419"
      "d25e1031afee585313896444934eb04b903a685b1448b755d56f701afe9be2ce"
    )
  );
}

#[test]
fn blake2b512_abc() {
  assert_eq!(
    Blake2b512::digest(b"abc"),
    hex!(
      "ba80a53f981c4d0d6a2797b69f12f6e94c212f14685ac4b74b12bb6fdbffa2d1"
      "7d87c5392aab792dc252d5de4533cc9518d38aa8dbf1925ab92386edd4009923"
    )
  );
}

#[test]
fn blake2s256_abc() {
  assert_eq!(
    Blake2s256::digest(b"abc"),
    hex!("508c5e8c327c14e2e1a72ba34eeb452f37458b209ed63a294d999b4c86675982")
  );
}

#[test]
fn blake2s256_empty() {
  assert_eq!(
    Blake2s256::digest(b""),
    hex!("69217a3079908094e11121d042354a7c1f55b6482ca1a51e1b250dfd1ed0eef9")
  );
}

#[test]
fn variable_output_sizes_are_distinct_configurations() {
  // BLAKE2 binds the output length into the parameter block, so a shorter
  // digest is not a prefix of a longer one.
  let mut h32 = Blake2b::new(32).unwrap();
  let mut h64 = Blake2b::new(64).unwrap();
  h32.update(b"abc");
  h64.update(b"abc");

  let mut out32 = [0u8; 32];
  let mut out64 = [0u8; 64];
  h32.finalize_into(&mut out32).unwrap();
  h64.finalize_into(&mut out64).unwrap();

  assert_ne!(out32, out64[..32]);
}

#[test]
fn split_updates_match_one_shot_at_block_edges() {
  fn pattern(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i as u8).wrapping_mul(31).wrapping_add((i >> 8) as u8)).collect()
  }

  // Exercise the held-back-block paths: exact multiples and off-by-one.
  for &len in &[63usize, 64, 65, 127, 128, 129, 255, 256, 257] {
    let msg = pattern(len);
    let expected_b = Blake2b512::digest(&msg);
    let expected_s = Blake2s256::digest(&msg);

    for split in 0..=len {
      let (a, b) = msg.split_at(split);

      let mut h = Blake2b512::new();
      h.update(a);
      h.update(b);
      assert_eq!(h.finalize(), expected_b, "blake2b split mismatch len={len} split={split}");

      let mut h = Blake2s256::new();
      h.update(a);
      h.update(b);
      assert_eq!(h.finalize(), expected_s, "blake2s split mismatch len={len} split={split}");
    }
  }
}

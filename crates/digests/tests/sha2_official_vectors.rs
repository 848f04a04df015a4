use digests::{Sha224, Sha256, Sha384, Sha512, Sha512_224, Sha512_256};
use hex_literal::hex;
use traits::Digest as _;

// FIPS 180-4 example vectors.

#[test]
fn sha224_vectors() {
  assert_eq!(
    Sha224::digest(b""),
    hex!("d14a028c2a3a2bc9476102bb288234c415a2b01f828ea62ac5b3e42f")
  );
  assert_eq!(
    Sha224::digest(b"abc"),
    hex!("23097d223405d8228642a477bda255b32aadbce4bda0b3f7e36c9da7")
  );
}

#[test]
fn sha256_vectors() {
  assert_eq!(
    Sha256::digest(b""),
    hex!("e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855")
  );
  assert_eq!(
    Sha256::digest(b"abc"),
    hex!("ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad")
  );
  assert_eq!(
    Sha256::digest(b"abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq"),
    hex!("248d6a61d20638b8e5c026930c3e6039a33ce45964ff2167f6ecedd419db06c1")
  );
}

#[test]
fn sha384_vectors() {
  assert_eq!(
    Sha384::digest(b""),
    hex!(
      "38b060a751ac96384cd9327eb1b1e36a21fdb71114be07434c0cc7bf63f6e1da"
      "274edebfe76f65fbd51ad2f14898b95b"
    )
  );
  assert_eq!(
    Sha384::digest(b"abc"),
    hex!(
      "cb00753f45a35e8bb5a03d699ac65007272c32ab0eded1631a8b605a43ff5bed"
      "8086072ba1e7cc2358baeca134c825a7"
    )
  );
}

#[test]
fn sha512_vectors() {
  assert_eq!(
    Sha512::digest(b""),
    hex!(
      "cf83e1357eefb8bdf1542850d66d8007d620e4050b5715dc83f4a921d36ce9ce"
      "47d0d13c5d85f2b0ff8318d2877eec2f63b931bd47417a81a538327af927da3e"
    )
  );
  assert_eq!(
    Sha512::digest(b"abc"),
    hex!(
      "ddaf35a193617abacc417349ae20413112e6fa4e89a97ea20a9eeee64b55d39a"
      "2192992a274fc1a836ba3c23a3feebbd454d4423643ce80e2a9ac94fa54ca49f"
    )
  );
  assert_eq!(
    Sha512::digest(
      b"abcdefghbcdefghicdefghijdefghijkefghijklfghijklmghijklmn\
        hijklmnoijklmnopjklmnopqklmnopqrlmnopqrsmnopqrstnopqrstu"
    ),
    hex!(
      "8e959b75dae313da8cf4f72814fc143f8f7779c6eb9f7fa17299aeadb6889018"
      "501d289e4900f7e4331b99dec4b5433ac7d329eeb6dd26545e96e55b874be909"
    )
  );
}

#[test]
fn sha512_224_vectors() {
  assert_eq!(
    Sha512_224::digest(b""),
    hex!("6ed0dd02806fa89e25de060c19d3ac86cabb87d6a0ddd05c333b84f4")
  );
  assert_eq!(
    Sha512_224::digest(b"abc"),
    hex!("4634270f707b6a54daae7530460842e20e37ed265ceee9a43e8924aa")
  );
}

#[test]
fn sha512_256_vectors() {
  assert_eq!(
    Sha512_256::digest(b""),
    hex!("c672b8d1ef56ed28ab87c3622c5114069bdd3ad7b8f9737498d0c01ecef0967a")
  );
  assert_eq!(
    Sha512_256::digest(b"abc"),
    hex!("53048e2681941ef99b2e29b76b4c7dabe4c2d0c634fc6d46e0e2f13107e7af23")
  );
}

// Padding-boundary lengths, every two-way split.
#[test]
fn split_updates_match_one_shot_at_padding_edges() {
  fn pattern(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i as u8).wrapping_mul(31).wrapping_add((i >> 8) as u8)).collect()
  }

  for &len in &[55usize, 56, 57, 63, 64, 65, 111, 112, 113, 127, 128, 129] {
    let msg = pattern(len);

    let expected256 = Sha256::digest(&msg);
    let expected512 = Sha512::digest(&msg);
    for split in 0..=len {
      let (a, b) = msg.split_at(split);

      let mut h = Sha256::new();
      h.update(a);
      h.update(b);
      assert_eq!(h.finalize(), expected256, "sha256 split mismatch len={len} split={split}");

      let mut h = Sha512::new();
      h.update(a);
      h.update(b);
      assert_eq!(h.finalize(), expected512, "sha512 split mismatch len={len} split={split}");
    }
  }
}

//! Threefish block functions (Skein 1.3), internal to the Skein digests.
//!
//! Only encryption is needed here: UBI chaining feeds each plaintext block
//! forward by XOR, so the inverse cipher never runs. The key schedule
//! extends the key with the parity word (`C240 ^ k0 ^ … ^ kn`) and the
//! tweak with `t2 = t0 ^ t1`; a subkey is injected before every fourth
//! round and once more after the last.

#![allow(clippy::indexing_slicing)] // Fixed-size word arrays and rotation tables

const C240: u64 = 0x1bd1_1bda_a9fc_1a22;

const ROT_256: [[u32; 2]; 8] = [
  [14, 16],
  [52, 57],
  [23, 40],
  [5, 37],
  [25, 33],
  [46, 12],
  [58, 22],
  [32, 32],
];
const PERM_256: [usize; 4] = [0, 3, 2, 1];

const ROT_512: [[u32; 4]; 8] = [
  [46, 36, 19, 37],
  [33, 27, 14, 42],
  [17, 49, 36, 39],
  [44, 9, 54, 56],
  [39, 30, 34, 24],
  [13, 50, 10, 17],
  [25, 29, 39, 43],
  [8, 35, 56, 22],
];
const PERM_512: [usize; 8] = [2, 1, 4, 7, 6, 5, 0, 3];

const ROT_1024: [[u32; 8]; 8] = [
  [24, 13, 8, 47, 8, 17, 22, 37],
  [38, 19, 10, 55, 49, 18, 23, 52],
  [33, 4, 51, 13, 34, 41, 59, 17],
  [5, 20, 48, 41, 47, 28, 16, 25],
  [41, 9, 37, 31, 12, 47, 44, 30],
  [16, 34, 56, 51, 4, 53, 42, 41],
  [31, 44, 47, 46, 19, 42, 44, 25],
  [9, 48, 35, 52, 23, 31, 37, 20],
];
const PERM_1024: [usize; 16] = [0, 9, 2, 13, 6, 11, 4, 15, 10, 7, 12, 3, 14, 5, 8, 1];

#[inline(always)]
fn extend_tweak(tweak: &[u64; 2]) -> [u64; 3] {
  [tweak[0], tweak[1], tweak[0] ^ tweak[1]]
}

#[inline(always)]
fn add_subkey<const NW: usize>(x: &mut [u64; NW], ks: &[u64], ts: &[u64; 3], s: usize) {
  for (i, word) in x.iter_mut().enumerate() {
    *word = word.wrapping_add(ks[(s + i) % (NW + 1)]);
  }
  x[NW - 3] = x[NW - 3].wrapping_add(ts[s % 3]);
  x[NW - 2] = x[NW - 2].wrapping_add(ts[(s + 1) % 3]);
  x[NW - 1] = x[NW - 1].wrapping_add(s as u64);
}

#[inline(always)]
fn mix<const NW: usize>(x: &mut [u64; NW], rot: &[u32]) {
  for j in 0..NW / 2 {
    x[2 * j] = x[2 * j].wrapping_add(x[2 * j + 1]);
    x[2 * j + 1] = x[2 * j + 1].rotate_left(rot[j]) ^ x[2 * j];
  }
}

pub(crate) fn encrypt_256(key: &[u64; 4], tweak: &[u64; 2], block: &[u64; 4]) -> [u64; 4] {
  let mut ks = [0u64; 5];
  ks[..4].copy_from_slice(key);
  ks[4] = C240 ^ key[0] ^ key[1] ^ key[2] ^ key[3];
  let ts = extend_tweak(tweak);

  let mut x = *block;
  for s in 0..18 {
    add_subkey(&mut x, &ks, &ts, s);
    for r in 0..4 {
      mix(&mut x, &ROT_256[(4 * s + r) % 8]);
      x = core::array::from_fn(|i| x[PERM_256[i]]);
    }
  }
  add_subkey(&mut x, &ks, &ts, 18);
  x
}

pub(crate) fn encrypt_512(key: &[u64; 8], tweak: &[u64; 2], block: &[u64; 8]) -> [u64; 8] {
  let mut ks = [0u64; 9];
  ks[..8].copy_from_slice(key);
  ks[8] = key.iter().fold(C240, |acc, &k| acc ^ k);
  let ts = extend_tweak(tweak);

  let mut x = *block;
  for s in 0..18 {
    add_subkey(&mut x, &ks, &ts, s);
    for r in 0..4 {
      mix(&mut x, &ROT_512[(4 * s + r) % 8]);
      x = core::array::from_fn(|i| x[PERM_512[i]]);
    }
  }
  add_subkey(&mut x, &ks, &ts, 18);
  x
}

pub(crate) fn encrypt_1024(key: &[u64; 16], tweak: &[u64; 2], block: &[u64; 16]) -> [u64; 16] {
  let mut ks = [0u64; 17];
  ks[..16].copy_from_slice(key);
  ks[16] = key.iter().fold(C240, |acc, &k| acc ^ k);
  let ts = extend_tweak(tweak);

  let mut x = *block;
  for s in 0..20 {
    add_subkey(&mut x, &ks, &ts, s);
    for r in 0..4 {
      mix(&mut x, &ROT_1024[(4 * s + r) % 8]);
      x = core::array::from_fn(|i| x[PERM_1024[i]]);
    }
  }
  add_subkey(&mut x, &ks, &ts, 20);
  x
}

#[cfg(test)]
mod tests {
  use super::*;

  // Changing any single key, tweak, or plaintext word must change the
  // ciphertext (sanity on the schedule indices, not a conformance test —
  // those run against an independent Skein implementation).
  #[test]
  fn schedule_consumes_every_input_word() {
    let key = [0x0101_0101_0101_0101u64; 8];
    let tweak = [0x0202_0202_0202_0202u64, 0x0303_0303_0303_0303];
    let block = [0x0404_0404_0404_0404u64; 8];
    let base = encrypt_512(&key, &tweak, &block);

    for i in 0..8 {
      let mut k = key;
      k[i] ^= 1;
      assert_ne!(encrypt_512(&k, &tweak, &block), base, "key word {i} ignored");
    }
    for i in 0..2 {
      let mut t = tweak;
      t[i] ^= 1;
      assert_ne!(encrypt_512(&key, &t, &block), base, "tweak word {i} ignored");
    }
    for i in 0..8 {
      let mut b = block;
      b[i] ^= 1;
      assert_ne!(encrypt_512(&key, &tweak, &b), base, "block word {i} ignored");
    }
  }

  #[test]
  fn variants_differ() {
    let base256 = encrypt_256(&[0; 4], &[0; 2], &[0; 4]);
    let base512 = encrypt_512(&[0; 8], &[0; 2], &[0; 8]);
    let base1024 = encrypt_1024(&[0; 16], &[0; 2], &[0; 16]);
    assert_ne!(&base256[..], &base512[..4]);
    assert_ne!(&base512[..], &base1024[..8]);
  }
}

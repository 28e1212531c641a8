//! MurmurHash3 x86/32 (**NOT CRYPTO**).
//!
//! The 32-bit variant: one 32-bit state lane, 4-byte blocks, 4-byte digest.

#![allow(clippy::indexing_slicing)] // Tight block parsing + fixed-size tail buffer

use traits::Fingerprint;

use crate::fmix::fmix32;

const BLOCK_LEN: usize = 4;

const C1: u32 = 0xcc9e2d51;
const C2: u32 = 0x1b873593;

/// Streaming MurmurHash3 x86/32.
///
/// Input may arrive in chunks of any size; a partial block is carried across
/// calls and the digest is byte-identical to hashing the whole stream at once.
///
/// ```rust
/// use murmur::{Fingerprint, Murmur3_32};
///
/// let mut h = Murmur3_32::new();
/// h.update(b"hello");
/// assert_eq!(h.finalize_u32(), 0x248bfa47);
/// ```
#[derive(Clone)]
pub struct Murmur3_32 {
  state: u32,
  seed: u32,
  block: [u8; BLOCK_LEN],
  block_len: usize,
  bytes_hashed: u64,
}

impl Default for Murmur3_32 {
  #[inline]
  fn default() -> Self {
    Self::with_seed(0)
  }
}

impl Murmur3_32 {
  /// One-shot `u32` digest of `data` with `seed`.
  #[inline]
  #[must_use]
  pub fn hash_u32(seed: u32, data: &[u8]) -> u32 {
    let mut h = Self::with_seed(seed);
    h.update(data);
    h.finalize_u32()
  }

  /// Digest of the bytes consumed so far as a `u32`.
  ///
  /// `finalize()` is the little-endian encoding of this value.
  #[inline]
  #[must_use]
  pub fn finalize_u32(&self) -> u32 {
    self.finalize_inner()
  }

  #[inline(always)]
  fn mix_block(state: &mut u32, block: &[u8; BLOCK_LEN]) {
    let mut k1 = u32::from_le_bytes(*block);
    k1 = k1.wrapping_mul(C1);
    k1 = k1.rotate_left(15);
    k1 = k1.wrapping_mul(C2);

    let mut h1 = *state ^ k1;
    h1 = h1.rotate_left(13);
    *state = h1.wrapping_mul(5).wrapping_add(0xe6546b64);
  }

  #[inline]
  fn update_block(&mut self, block: &[u8; BLOCK_LEN]) {
    Self::mix_block(&mut self.state, block);
    self.bytes_hashed = self.bytes_hashed.wrapping_add(BLOCK_LEN as u64);
  }

  /// Fold 1-3 leftover bytes into the lane.
  ///
  /// The partial word is assembled little-endian; the block transform's second
  /// half (rotate + multiply-add on `h`) is skipped for tails.
  #[inline(always)]
  fn fold_tail(h1: u32, tail: &[u8]) -> u32 {
    let mut k1 = 0u32;
    match tail.len() {
      3 => {
        k1 |= (tail[2] as u32) << 16;
        k1 |= (tail[1] as u32) << 8;
        k1 |= tail[0] as u32;
      }
      2 => {
        k1 |= (tail[1] as u32) << 8;
        k1 |= tail[0] as u32;
      }
      1 => {
        k1 |= tail[0] as u32;
      }
      _ => return h1,
    }
    k1 = k1.wrapping_mul(C1);
    k1 = k1.rotate_left(15);
    k1 = k1.wrapping_mul(C2);
    h1 ^ k1
  }

  #[inline]
  fn finalize_inner(&self) -> u32 {
    let total_len = self.bytes_hashed.wrapping_add(self.block_len as u64);

    let mut h1 = Self::fold_tail(self.state, &self.block[..self.block_len]);
    h1 ^= total_len as u32;
    fmix32(h1)
  }
}

impl Fingerprint for Murmur3_32 {
  const OUTPUT_SIZE: usize = 4;
  const BLOCK_SIZE: usize = BLOCK_LEN;
  type Output = [u8; 4];
  type Seed = u32;

  #[inline]
  fn with_seed(seed: u32) -> Self {
    Self {
      state: seed,
      seed,
      block: [0u8; BLOCK_LEN],
      block_len: 0,
      bytes_hashed: 0,
    }
  }

  #[inline]
  fn seed(&self) -> u32 {
    self.seed
  }

  fn update(&mut self, mut data: &[u8]) {
    if data.is_empty() {
      return;
    }

    if self.block_len != 0 {
      let take = core::cmp::min(BLOCK_LEN - self.block_len, data.len());
      self.block[self.block_len..self.block_len + take].copy_from_slice(&data[..take]);
      self.block_len += take;
      data = &data[take..];

      if self.block_len == BLOCK_LEN {
        let block = self.block;
        self.update_block(&block);
        self.block_len = 0;
      }
    }

    let (blocks, rest) = data.as_chunks::<BLOCK_LEN>();
    if !blocks.is_empty() {
      for block in blocks {
        Self::mix_block(&mut self.state, block);
      }
      self.bytes_hashed = self.bytes_hashed.wrapping_add((blocks.len() * BLOCK_LEN) as u64);
    }
    data = rest;

    if !data.is_empty() {
      self.block[..data.len()].copy_from_slice(data);
      self.block_len = data.len();
    }
  }

  #[inline]
  fn finalize(&self) -> Self::Output {
    self.finalize_inner().to_le_bytes()
  }
}

#[cfg(feature = "std")]
impl std::io::Write for Murmur3_32 {
  #[inline]
  fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
    self.update(buf);
    Ok(buf.len())
  }

  #[inline]
  fn flush(&mut self) -> std::io::Result<()> {
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use traits::Fingerprint;

  use super::Murmur3_32;

  #[test]
  fn known_vectors() {
    assert_eq!(Murmur3_32::hash_u32(0, b""), 0);
    assert_eq!(Murmur3_32::hash_u32(1, b""), 0x514e28b7);
    assert_eq!(Murmur3_32::hash_u32(0xffff_ffff, b""), 0x81f16f39);
    assert_eq!(Murmur3_32::hash_u32(0, b"hello"), 0x248bfa47);
    assert_eq!(Murmur3_32::hash_u32(0, b"hello, world"), 0x149bbb7f);
    assert_eq!(Murmur3_32::hash_u32(0, b"19 Jan 2038 at 3:14:07 AM"), 0xe31e8a70);
    assert_eq!(
      Murmur3_32::hash_u32(0, b"The quick brown fox jumps over the lazy dog."),
      0xd5c48bfc
    );
  }

  #[test]
  fn digest_bytes_are_little_endian() {
    assert_eq!(Murmur3_32::hash(b"hello"), 0x248bfa47u32.to_le_bytes());
  }

  #[test]
  fn streaming_matches_oneshot_at_every_split() {
    let data = b"hello, world";
    for split in 0..=data.len() {
      let mut h = Murmur3_32::new();
      h.update(&data[..split]);
      h.update(&data[split..]);
      assert_eq!(h.finalize_u32(), 0x149bbb7f, "split at {split}");
    }
  }

  #[test]
  fn accessors_agree() {
    let mut h = Murmur3_32::with_seed(7);
    h.update(b"abc");
    assert_eq!(h.finalize(), h.finalize_u32().to_le_bytes());
  }
}

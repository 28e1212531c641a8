//! MurmurHash3 x64/128 (**NOT CRYPTO**).
//!
//! The x64 128-bit variant: two 64-bit state lanes, 16-byte blocks split into
//! two little-endian words, 16-byte digest. This is the variant to reach for
//! on 64-bit hosts.

#![allow(clippy::indexing_slicing)] // Tight block parsing + fixed-size tail buffer

use traits::Fingerprint;

use crate::fmix::fmix64;

const BLOCK_LEN: usize = 16;

const C1: u64 = 0x87c3_7b91_1142_53d5;
const C2: u64 = 0x4cf5_ad43_2745_937f;

/// Streaming MurmurHash3 x64/128.
///
/// Same streaming contract as [`Murmur3_32`](crate::Murmur3_32), with a
/// 16-byte digest and a 64-bit seed. [`finalize_u64`](Self::finalize_u64)
/// returns the low lane, the conventional 64-bit truncation of this variant.
#[derive(Clone)]
pub struct Murmur3X64_128 {
  state: [u64; 2],
  seed: u64,
  block: [u8; BLOCK_LEN],
  block_len: usize,
  bytes_hashed: u64,
}

impl Default for Murmur3X64_128 {
  #[inline]
  fn default() -> Self {
    Self::with_seed(0)
  }
}

impl Murmur3X64_128 {
  /// One-shot `u128` digest of `data` with `seed`.
  #[inline]
  #[must_use]
  pub fn hash_u128(seed: u64, data: &[u8]) -> u128 {
    let mut h = Self::with_seed(seed);
    h.update(data);
    h.finalize_u128()
  }

  /// One-shot 64-bit digest of `data` with `seed` (the low lane of the
  /// 128-bit result).
  #[inline]
  #[must_use]
  pub fn hash_u64(seed: u64, data: &[u8]) -> u64 {
    let mut h = Self::with_seed(seed);
    h.update(data);
    h.finalize_u64()
  }

  /// Digest of the bytes consumed so far as a `u128`.
  ///
  /// The low 64 bits are the first lane; `finalize()` is the little-endian
  /// encoding of this value.
  #[inline]
  #[must_use]
  pub fn finalize_u128(&self) -> u128 {
    u128::from_le_bytes(self.finalize())
  }

  /// Digest of the bytes consumed so far, truncated to the low lane.
  #[inline]
  #[must_use]
  pub fn finalize_u64(&self) -> u64 {
    let h = self.finalize_inner();
    h[0]
  }

  #[inline(always)]
  fn mix_block(h: &mut [u64; 2], block: &[u8; BLOCK_LEN]) {
    let (words, _) = block.as_chunks::<8>();
    let mut k1 = u64::from_le_bytes(words[0]);
    let mut k2 = u64::from_le_bytes(words[1]);

    k1 = k1.wrapping_mul(C1);
    k1 = k1.rotate_left(31);
    k1 = k1.wrapping_mul(C2);
    h[0] ^= k1;
    h[0] = h[0].rotate_left(27);
    h[0] = h[0].wrapping_add(h[1]);
    h[0] = h[0].wrapping_mul(5).wrapping_add(0x52dce729);

    k2 = k2.wrapping_mul(C2);
    k2 = k2.rotate_left(33);
    k2 = k2.wrapping_mul(C1);
    h[1] ^= k2;
    h[1] = h[1].rotate_left(31);
    h[1] = h[1].wrapping_add(h[0]);
    h[1] = h[1].wrapping_mul(5).wrapping_add(0x38495ab5);
  }

  #[inline]
  fn update_block(&mut self, block: &[u8; BLOCK_LEN]) {
    Self::mix_block(&mut self.state, block);
    self.bytes_hashed = self.bytes_hashed.wrapping_add(BLOCK_LEN as u64);
  }

  /// Fold 1-15 leftover bytes.
  ///
  /// Bytes 9-15 build the second word (folded only when byte 9 is present);
  /// bytes 1-8 build the first. Tails skip the lane rotate/add/multiply half
  /// of the block transform.
  #[inline(always)]
  fn fold_tail(h: &mut [u64; 2], tail: &[u8]) {
    if tail.len() > 8 {
      let mut k2 = 0u64;
      for (j, &b) in tail[8..].iter().enumerate() {
        k2 |= (b as u64) << (8 * j);
      }
      k2 = k2.wrapping_mul(C2);
      k2 = k2.rotate_left(33);
      k2 = k2.wrapping_mul(C1);
      h[1] ^= k2;
    }

    if !tail.is_empty() {
      let mut k1 = 0u64;
      for (j, &b) in tail.iter().take(8).enumerate() {
        k1 |= (b as u64) << (8 * j);
      }
      k1 = k1.wrapping_mul(C1);
      k1 = k1.rotate_left(31);
      k1 = k1.wrapping_mul(C2);
      h[0] ^= k1;
    }
  }

  #[inline]
  fn finalize_inner(&self) -> [u64; 2] {
    let total_len = self.bytes_hashed.wrapping_add(self.block_len as u64);

    let mut h = self.state;
    Self::fold_tail(&mut h, &self.block[..self.block_len]);

    h[0] ^= total_len;
    h[1] ^= total_len;

    h[0] = h[0].wrapping_add(h[1]);
    h[1] = h[1].wrapping_add(h[0]);

    h[0] = fmix64(h[0]);
    h[1] = fmix64(h[1]);

    h[0] = h[0].wrapping_add(h[1]);
    h[1] = h[1].wrapping_add(h[0]);

    h
  }
}

impl Fingerprint for Murmur3X64_128 {
  const OUTPUT_SIZE: usize = 16;
  const BLOCK_SIZE: usize = BLOCK_LEN;
  type Output = [u8; 16];
  type Seed = u64;

  #[inline]
  fn with_seed(seed: u64) -> Self {
    Self {
      state: [seed; 2],
      seed,
      block: [0u8; BLOCK_LEN],
      block_len: 0,
      bytes_hashed: 0,
    }
  }

  #[inline]
  fn seed(&self) -> u64 {
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
    let h = self.finalize_inner();
    let mut out = [0u8; 16];
    out[..8].copy_from_slice(&h[0].to_le_bytes());
    out[8..].copy_from_slice(&h[1].to_le_bytes());
    out
  }
}

#[cfg(feature = "std")]
impl std::io::Write for Murmur3X64_128 {
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

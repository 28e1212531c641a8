//! MurmurHash3 x86/128 (**NOT CRYPTO**).
//!
//! The x86 128-bit variant: four 32-bit state lanes, 16-byte blocks, 16-byte
//! digest. Each block is four little-endian words, one per lane; the lanes
//! form a ring, lane `i` folding in lane `(i + 1) % 4` every block.

#![allow(clippy::indexing_slicing)] // Tight block parsing + fixed-size tail buffer

use traits::Fingerprint;

use crate::fmix::fmix32;

const BLOCK_LEN: usize = 16;

/// Per-word multiply constants; word `i` uses the pair `(C[i], C[(i + 1) % 4])`.
const C: [u32; 4] = [0x239b961b, 0xab0e9789, 0x38b34ae5, 0xa1e38b93];
/// Per-word rotations applied between the two multiplies.
const R: [u32; 4] = [15, 16, 17, 18];
/// Per-lane rotations applied after the word is folded in.
const S: [u32; 4] = [19, 17, 15, 13];
/// Per-lane additive constants for the `h*5 + K` post-mix.
const K: [u32; 4] = [0x561ccd1b, 0x0bcaa747, 0x96cd1c35, 0x32ac3b17];

/// Streaming MurmurHash3 x86/128.
///
/// Same streaming contract as [`Murmur3_32`](crate::Murmur3_32), with a
/// 16-byte digest. Prefer [`Murmur3X64_128`](crate::Murmur3X64_128) on 64-bit
/// hosts; this variant exists for digest compatibility with 32-bit producers.
#[derive(Clone)]
pub struct Murmur3X86_128 {
  state: [u32; 4],
  seed: u32,
  block: [u8; BLOCK_LEN],
  block_len: usize,
  bytes_hashed: u64,
}

impl Default for Murmur3X86_128 {
  #[inline]
  fn default() -> Self {
    Self::with_seed(0)
  }
}

impl Murmur3X86_128 {
  /// One-shot `u128` digest of `data` with `seed`.
  #[inline]
  #[must_use]
  pub fn hash_u128(seed: u32, data: &[u8]) -> u128 {
    let mut h = Self::with_seed(seed);
    h.update(data);
    h.finalize_u128()
  }

  /// Digest of the bytes consumed so far as a `u128`.
  ///
  /// The low 64 bits come from the first two lanes; `finalize()` is the
  /// little-endian encoding of this value.
  #[inline]
  #[must_use]
  pub fn finalize_u128(&self) -> u128 {
    u128::from_le_bytes(self.finalize())
  }

  #[inline(always)]
  fn mix_block(h: &mut [u32; 4], block: &[u8; BLOCK_LEN]) {
    let (words, _) = block.as_chunks::<4>();
    for i in 0..4 {
      let mut k = u32::from_le_bytes(words[i]);
      k = k.wrapping_mul(C[i]);
      k = k.rotate_left(R[i]);
      k = k.wrapping_mul(C[(i + 1) % 4]);

      h[i] ^= k;
      h[i] = h[i].rotate_left(S[i]);
      // Lane 3 reads lane 0 post-update, closing the ring.
      h[i] = h[i].wrapping_add(h[(i + 1) % 4]);
      h[i] = h[i].wrapping_mul(5).wrapping_add(K[i]);
    }
  }

  #[inline]
  fn update_block(&mut self, block: &[u8; BLOCK_LEN]) {
    Self::mix_block(&mut self.state, block);
    self.bytes_hashed = self.bytes_hashed.wrapping_add(BLOCK_LEN as u64);
  }

  /// Fold 1-15 leftover bytes, highest partial word first.
  ///
  /// A word is folded into its lane only once its first byte is present; tails
  /// skip the lane rotate/add/multiply half of the block transform.
  #[inline(always)]
  fn fold_tail(h: &mut [u32; 4], tail: &[u8]) {
    for (i, word) in tail.chunks(4).enumerate().rev() {
      let mut k = 0u32;
      for (j, &b) in word.iter().enumerate() {
        k |= (b as u32) << (8 * j);
      }
      k = k.wrapping_mul(C[i]);
      k = k.rotate_left(R[i]);
      k = k.wrapping_mul(C[(i + 1) % 4]);
      h[i] ^= k;
    }
  }

  /// One round of the finalization cross-mix: sum every lane into lane 0,
  /// then broadcast lane 0 back into the others.
  #[inline(always)]
  fn cross_mix(h: &mut [u32; 4]) {
    h[0] = h[0].wrapping_add(h[1]);
    h[0] = h[0].wrapping_add(h[2]);
    h[0] = h[0].wrapping_add(h[3]);
    h[1] = h[1].wrapping_add(h[0]);
    h[2] = h[2].wrapping_add(h[0]);
    h[3] = h[3].wrapping_add(h[0]);
  }

  #[inline]
  fn finalize_inner(&self) -> [u32; 4] {
    let total_len = self.bytes_hashed.wrapping_add(self.block_len as u64);

    let mut h = self.state;
    Self::fold_tail(&mut h, &self.block[..self.block_len]);

    let t = total_len as u32;
    for lane in &mut h {
      *lane ^= t;
    }

    Self::cross_mix(&mut h);
    for lane in &mut h {
      *lane = fmix32(*lane);
    }
    Self::cross_mix(&mut h);

    h
  }
}

impl Fingerprint for Murmur3X86_128 {
  const OUTPUT_SIZE: usize = 16;
  const BLOCK_SIZE: usize = BLOCK_LEN;
  type Output = [u8; 16];
  type Seed = u32;

  #[inline]
  fn with_seed(seed: u32) -> Self {
    Self {
      state: [seed; 4],
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
    let h = self.finalize_inner();
    let mut out = [0u8; 16];
    for (i, lane) in h.iter().copied().enumerate() {
      let offset = i * 4;
      out[offset..offset + 4].copy_from_slice(&lane.to_le_bytes());
    }
    out
  }
}

#[cfg(feature = "std")]
impl std::io::Write for Murmur3X86_128 {
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

//! Finalization mixers shared by the MurmurHash3 variants.

/// 32-bit avalanche: forces every input bit to affect every output bit.
#[inline(always)]
pub(crate) const fn fmix32(mut h: u32) -> u32 {
  h ^= h >> 16;
  h = h.wrapping_mul(0x85ebca6b);
  h ^= h >> 13;
  h = h.wrapping_mul(0xc2b2ae35);
  h ^= h >> 16;
  h
}

/// 64-bit avalanche.
#[inline(always)]
pub(crate) const fn fmix64(mut k: u64) -> u64 {
  k ^= k >> 33;
  k = k.wrapping_mul(0xff51_afd7_ed55_8ccd);
  k ^= k >> 33;
  k = k.wrapping_mul(0xc4ce_b9fe_1a85_ec53);
  k ^= k >> 33;
  k
}

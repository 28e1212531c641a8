//! Streaming equivalence properties.
//!
//! Incremental updates must produce byte-identical digests to one-shot
//! hashing: at every split point, for arbitrary chunkings, and through the
//! vectored update path.

use murmur::{Fingerprint, Murmur3X64_128, Murmur3X86_128, Murmur3_32};
use proptest::prelude::*;

// Test Strategies

/// Generate arbitrary byte vectors up to 4KB.
fn arb_data() -> impl Strategy<Value = Vec<u8>> {
  prop::collection::vec(any::<u8>(), 0..4096)
}

/// Generate chunk sizes for streaming updates.
fn arb_chunks() -> impl Strategy<Value = Vec<usize>> {
  prop::collection::vec(1..64usize, 0..64)
}

// Generic Property Helpers

/// One-shot digest vs a two-chunk split at `split`.
fn prop_split_equals_oneshot<F: Fingerprint>(seed: F::Seed, data: &[u8], split: usize) -> bool {
  let split = split.min(data.len());
  let oneshot = F::hash_with_seed(seed, data);

  let mut incremental = F::with_seed(seed);
  incremental.update(&data[..split]);
  incremental.update(&data[split..]);

  incremental.finalize() == oneshot
}

/// One-shot digest vs updates cycling through arbitrary chunk sizes.
fn prop_chunked_equals_oneshot<F: Fingerprint>(seed: F::Seed, data: &[u8], chunks: &[usize]) -> bool {
  let oneshot = F::hash_with_seed(seed, data);

  let mut hasher = F::with_seed(seed);
  let mut offset = 0;
  let mut idx = 0;
  while offset < data.len() {
    let chunk = if chunks.is_empty() { 1 } else { chunks[idx % chunks.len()] };
    let end = (offset + chunk).min(data.len());
    hasher.update(&data[offset..end]);
    offset = end;
    idx += 1;
  }

  hasher.finalize() == oneshot
}

/// `update_vectored` vs hashing the flattened buffers.
fn prop_vectored_equals_flat<F: Fingerprint>(seed: F::Seed, parts: &[Vec<u8>]) -> bool {
  let flat: Vec<u8> = parts.concat();
  let oneshot = F::hash_with_seed(seed, &flat);

  let slices: Vec<&[u8]> = parts.iter().map(|p| p.as_slice()).collect();
  let mut hasher = F::with_seed(seed);
  hasher.update_vectored(&slices);

  hasher.finalize() == oneshot
}

/// Exhaustive split coverage on a fixed buffer, including empty chunks.
fn every_split_point<F: Fingerprint>(seed: F::Seed) {
  let data: Vec<u8> = (0u32..96).map(|i| (i.wrapping_mul(0x9e3779b9) >> 24) as u8).collect();
  let oneshot = F::hash_with_seed(seed, &data);

  for split in 0..=data.len() {
    let mut hasher = F::with_seed(seed);
    hasher.update(&data[..split]);
    hasher.update(&data[split..]);
    assert_eq!(hasher.finalize(), oneshot, "split at {split}");
  }
}

#[test]
fn x86_32_every_split_point() {
  every_split_point::<Murmur3_32>(1);
}

#[test]
fn x86_128_every_split_point() {
  every_split_point::<Murmur3X86_128>(1);
}

#[test]
fn x64_128_every_split_point() {
  every_split_point::<Murmur3X64_128>(1);
}

proptest! {
  #![proptest_config(ProptestConfig::with_cases(512))]

  #[test]
  fn x86_32_split(data in arb_data(), split in 0..4096usize, seed in any::<u32>()) {
    prop_assert!(prop_split_equals_oneshot::<Murmur3_32>(seed, &data, split));
  }

  #[test]
  fn x86_128_split(data in arb_data(), split in 0..4096usize, seed in any::<u32>()) {
    prop_assert!(prop_split_equals_oneshot::<Murmur3X86_128>(seed, &data, split));
  }

  #[test]
  fn x64_128_split(data in arb_data(), split in 0..4096usize, seed in any::<u64>()) {
    prop_assert!(prop_split_equals_oneshot::<Murmur3X64_128>(seed, &data, split));
  }

  #[test]
  fn x86_32_chunked(data in arb_data(), chunks in arb_chunks(), seed in any::<u32>()) {
    prop_assert!(prop_chunked_equals_oneshot::<Murmur3_32>(seed, &data, &chunks));
  }

  #[test]
  fn x86_128_chunked(data in arb_data(), chunks in arb_chunks(), seed in any::<u32>()) {
    prop_assert!(prop_chunked_equals_oneshot::<Murmur3X86_128>(seed, &data, &chunks));
  }

  #[test]
  fn x64_128_chunked(data in arb_data(), chunks in arb_chunks(), seed in any::<u64>()) {
    prop_assert!(prop_chunked_equals_oneshot::<Murmur3X64_128>(seed, &data, &chunks));
  }

  #[test]
  fn x86_32_vectored(parts in prop::collection::vec(arb_data(), 0..8), seed in any::<u32>()) {
    prop_assert!(prop_vectored_equals_flat::<Murmur3_32>(seed, &parts));
  }

  #[test]
  fn x64_128_vectored(parts in prop::collection::vec(arb_data(), 0..8), seed in any::<u64>()) {
    prop_assert!(prop_vectored_equals_flat::<Murmur3X64_128>(seed, &parts));
  }
}

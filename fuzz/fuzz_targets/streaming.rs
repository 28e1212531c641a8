//! Fuzz target for the streaming update API.
//!
//! Tests that arbitrary sequences of update calls produce the same digest as
//! hashing the whole input in one call, for every variant.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use murmur::{Fingerprint, Murmur3X64_128, Murmur3X86_128, Murmur3_32};

#[derive(Arbitrary, Debug)]
struct Input {
  data: Vec<u8>,
  seed: u32,
  /// Chunk sizes for streaming updates
  chunk_sizes: Vec<usize>,
}

fuzz_target!(|input: Input| {
  test_streaming::<Murmur3_32>("x86/32", input.seed, &input.data, &input.chunk_sizes);
  test_streaming::<Murmur3X86_128>("x86/128", input.seed, &input.data, &input.chunk_sizes);
  test_streaming::<Murmur3X64_128>("x64/128", u64::from(input.seed), &input.data, &input.chunk_sizes);
});

fn test_streaming<F: Fingerprint>(name: &str, seed: F::Seed, data: &[u8], chunk_sizes: &[usize]) {
  let expected = F::hash_with_seed(seed, data);

  let mut hasher = F::with_seed(seed);
  let mut offset = 0;
  let mut chunk_idx = 0;

  while offset < data.len() {
    let chunk_size = if chunk_sizes.is_empty() {
      1
    } else {
      (chunk_sizes[chunk_idx % chunk_sizes.len()] % 256).max(1)
    };

    let end = (offset + chunk_size).min(data.len());
    hasher.update(&data[offset..end]);
    offset = end;
    chunk_idx += 1;
  }

  assert_eq!(hasher.finalize(), expected, "{name} streaming mismatch");
}

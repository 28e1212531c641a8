//! Published verification vectors for all three variants.
//!
//! The self-check procedure: hash `[0, 1, ..., i-1]` with seed `256 - i` for
//! every `i` in `0..=255`, concatenate the 256 digests, hash the concatenation
//! with seed 0, and compare the first four little-endian digest bytes against
//! the variant's published verification value.

use murmur::{Fingerprint, Murmur3X64_128, Murmur3X86_128, Murmur3_32};

fn verification_value<F>() -> u32
where
  F: Fingerprint,
  F::Seed: From<u32>,
{
  let mut key = [0u8; 256];
  for (i, b) in key.iter_mut().enumerate() {
    *b = i as u8;
  }

  let mut digests = Vec::with_capacity(256 * F::OUTPUT_SIZE);
  for i in 0..256usize {
    let mut h = F::with_seed(F::Seed::from(256 - i as u32));
    h.update(&key[..i]);
    h.sum_into(&mut digests);
  }

  let outer = F::hash(&digests);
  let bytes = outer.as_ref();
  u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])
}

#[test]
fn x86_32_verification() {
  assert_eq!(verification_value::<Murmur3_32>(), 0xb0f57ee3);
}

#[test]
fn x86_128_verification() {
  assert_eq!(verification_value::<Murmur3X86_128>(), 0xb3ece62a);
}

#[test]
fn x64_128_verification() {
  assert_eq!(verification_value::<Murmur3X64_128>(), 0x6384ba69);
}

/// Byte-at-a-time streaming must agree with one-shot hashing at the lengths
/// where the tail handling changes shape.
fn boundary_lengths<F: Fingerprint>(seed: F::Seed) {
  let lengths = [
    0,
    1,
    F::BLOCK_SIZE - 1,
    F::BLOCK_SIZE,
    F::BLOCK_SIZE + 1,
    2 * F::BLOCK_SIZE - 1,
    2 * F::BLOCK_SIZE,
  ];
  for len in lengths {
    let data: Vec<u8> = (0..len).map(|i| i as u8).collect();
    let oneshot = F::hash_with_seed(seed, &data);

    let mut streamed = F::with_seed(seed);
    for byte in &data {
      streamed.update(core::slice::from_ref(byte));
    }
    assert_eq!(streamed.finalize(), oneshot, "length {len}");
  }
}

#[test]
fn x86_32_boundary_lengths() {
  boundary_lengths::<Murmur3_32>(0x9747b28c);
}

#[test]
fn x86_128_boundary_lengths() {
  boundary_lengths::<Murmur3X86_128>(0x9747b28c);
}

#[test]
fn x64_128_boundary_lengths() {
  boundary_lengths::<Murmur3X64_128>(0x0123_4567_89ab_cdef);
}

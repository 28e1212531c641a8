//! Differential fuzzing against the `murmur3` crate, plus self-consistency
//! checks on the streaming state machine.

#![no_main]

use std::io::Cursor;

use libfuzzer_sys::fuzz_target;
use murmur::{Fingerprint, Murmur3X64_128, Murmur3X86_128, Murmur3_32};

fuzz_target!(|data: &[u8]| {
  test_x86_32_differential(data);

  test_self_consistency::<Murmur3_32>("x86/32", 0x9747b28c, data);
  test_self_consistency::<Murmur3X86_128>("x86/128", 0x9747b28c, data);
  test_self_consistency::<Murmur3X64_128>("x64/128", 0x9747b28c, data);
});

fn test_x86_32_differential(data: &[u8]) {
  let ours = Murmur3_32::hash_u32(0, data);
  let reference = murmur3::murmur3_32(&mut Cursor::new(data), 0).expect("cursor reads cannot fail");

  assert_eq!(
    ours,
    reference,
    "x86/32 differential mismatch: ours={:#010x}, reference={:#010x}, len={}",
    ours,
    reference,
    data.len()
  );
}

fn test_self_consistency<F: Fingerprint>(name: &str, seed: F::Seed, data: &[u8]) {
  let oneshot = F::hash_with_seed(seed, data);

  // Finalize must be idempotent and must not disturb the stream.
  let mut hasher = F::with_seed(seed);
  hasher.update(data);
  let first = hasher.finalize();
  let second = hasher.finalize();
  assert_eq!(first, oneshot, "{name} one-shot/streaming mismatch");
  assert_eq!(second, oneshot, "{name} finalize is not idempotent");

  // A reset hasher must behave like a fresh one.
  hasher.reset();
  hasher.update(data);
  assert_eq!(hasher.finalize(), oneshot, "{name} reset round-trip mismatch");
}

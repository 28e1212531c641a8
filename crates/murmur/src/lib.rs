//! MurmurHash3 fingerprint hashes (**NOT CRYPTO**).
//!
//! Streaming implementations of the three MurmurHash3 variants. These are fast,
//! well-distributed hashes for hash tables, partitioning, deduplication, and
//! content fingerprints. They offer no collision resistance and must not be
//! used where an adversary controls the input.
//!
//! | Type | Digest | Block | Seed |
//! |------|--------|-------|------|
//! | [`Murmur3_32`] | 4 bytes | 4 bytes | `u32` |
//! | [`Murmur3X86_128`] | 16 bytes | 16 bytes | `u32` |
//! | [`Murmur3X64_128`] | 16 bytes | 16 bytes | `u64` |
//!
//! Every variant accepts input incrementally: feeding a stream in chunks of any
//! size yields the same digest as feeding it in one piece. Digest bytes are
//! little-endian and identical on every platform, matching the reference
//! vectors published with the algorithm.
//!
//! # Usage
//!
//! ```rust
//! use murmur::{Fingerprint, Murmur3_32};
//!
//! // One-shot
//! let digest = Murmur3_32::hash(b"hello, world");
//!
//! // Streaming
//! let mut hasher = Murmur3_32::new();
//! hasher.update(b"hello, ");
//! hasher.update(b"world");
//! assert_eq!(hasher.finalize(), digest);
//! ```
//!
//! This crate is `no_std` compatible; the engines allocate nothing. The `std`
//! feature adds `std::io::Write` impls and the [`io`] adapters.
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(feature = "std")]
extern crate std;

mod fmix;
#[cfg(feature = "std")]
pub mod io;
mod x64_128;
mod x86_32;
mod x86_128;

pub use traits::Fingerprint;
pub use x64_128::Murmur3X64_128;
pub use x86_32::Murmur3_32;
pub use x86_128::Murmur3X86_128;

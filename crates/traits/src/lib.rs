//! Core traits for rsmurmur.
//!
//! This crate provides the foundational trait that all rsmurmur engines
//! conform to. It is `no_std` compatible and has zero dependencies.
//!
//! # Trait Hierarchy
//!
//! | Trait | Purpose | Examples |
//! |-------|---------|----------|
//! | [`Fingerprint`] | Seeded streaming non-cryptographic hashes | MurmurHash3 x86/32, x86/128, x64/128 |
//!
//! # I/O Adapters
//!
//! With the `std` feature, [`io`] provides [`FingerprintReader`](io::FingerprintReader)
//! and [`FingerprintWriter`](io::FingerprintWriter), which hash bytes transparently as
//! they pass through a reader or writer.
//!
//! # Fallibility Discipline
//!
//! This crate denies `unwrap`, `expect`, and indexing in non-test code to ensure
//! all error paths are handled explicitly.
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

mod fingerprint;
#[cfg(feature = "std")]
pub mod io;

pub use fingerprint::Fingerprint;

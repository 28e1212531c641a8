//! I/O adapters for fingerprint hashes.
//!
//! This module re-exports [`FingerprintReader`] and [`FingerprintWriter`],
//! which wrap [`std::io::Read`] and [`std::io::Write`] implementations to
//! compute a fingerprint transparently during I/O operations.
//!
//! # Performance
//!
//! - Zero-cost abstraction: All methods are `#[inline]`
//! - Vectored I/O support on both adapters
//! - Correctness: Only hashes bytes actually transferred (handles short reads/writes)
//!
//! # Example
//!
//! ```rust
//! use murmur::{Fingerprint, Murmur3X64_128};
//! use std::io::Read;
//!
//! let mut reader = Murmur3X64_128::reader(std::io::Cursor::new(b"hello".to_vec()));
//! let mut contents = Vec::new();
//! reader.read_to_end(&mut contents)?;
//! assert_eq!(reader.digest(), Murmur3X64_128::hash(b"hello"));
//! # Ok::<(), std::io::Error>(())
//! ```

pub use traits::io::{FingerprintReader, FingerprintWriter};

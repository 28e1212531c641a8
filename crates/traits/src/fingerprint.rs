//! Seeded streaming fingerprint hashes (**NOT CRYPTO**).
//!
//! The [`Fingerprint`] trait covers fast, well-distributed hashes used for
//! hash tables, partitioning, deduplication, and content fingerprints.
//!
//! - **Performance**: Zero-cost abstractions, inline-friendly
//! - **Streaming**: Incremental updates with cross-call tail buffering
//! - **Determinism**: Digests are byte-exact and platform-independent

use core::fmt::Debug;

/// A seeded, streaming, non-cryptographic fingerprint hash.
///
/// These hashes are suitable for hash tables, sharding, fingerprints, and other
/// non-adversarial settings. They are **not** suitable for signatures, MACs,
/// password hashing, or untrusted inputs where collision attacks matter.
///
/// # Usage
///
/// ```rust,ignore
/// use murmur::Murmur3_32;
/// use traits::Fingerprint;
///
/// // One-shot (fastest for data already in memory)
/// let digest = Murmur3_32::hash(b"hello world");
///
/// // Streaming (for incremental or large data)
/// let mut hasher = Murmur3_32::with_seed(42);
/// hasher.update(b"hello ");
/// hasher.update(b"world");
/// let digest = hasher.finalize();
/// ```
///
/// # Implementor Requirements
///
/// - `new()` must return the same state as `Default::default()` and
///   `with_seed(Seed::default())`
/// - `update(a); update(b)` must produce the same digest as `update(a ++ b)`
///   for every split point, including empty chunks
/// - `finalize()` must be idempotent and non-consuming: it reads the digest of
///   the bytes so far without disturbing the stream, and later updates continue
///   accumulating as if no digest had been read
/// - `reset()` must restore the state of a freshly constructed hasher with the
///   same seed
/// - Digest bytes are little-endian and identical on every platform
pub trait Fingerprint: Clone + Default {
  /// Digest size in bytes.
  ///
  /// - MurmurHash3 x86/32: 4
  /// - MurmurHash3 x86/128 and x64/128: 16
  const OUTPUT_SIZE: usize;

  /// Input block size in bytes consumed by one full mixing step.
  ///
  /// Inputs that are not a multiple of this length leave a partial tail,
  /// carried across `update` calls and folded at `finalize`.
  const BLOCK_SIZE: usize;

  /// The digest type, a fixed-size byte array (`[u8; Self::OUTPUT_SIZE]`).
  type Output: Copy + Eq + Debug + AsRef<[u8]>;

  /// Seed type (`u32` or `u64` depending on variant width).
  type Seed: Copy + Eq + Debug + Default;

  /// Create a new hasher with `seed` broadcast into every state lane.
  #[must_use]
  fn with_seed(seed: Self::Seed) -> Self;

  /// Create a new hasher with the default (zero) seed.
  #[inline]
  #[must_use]
  fn new() -> Self {
    Self::with_seed(Self::Seed::default())
  }

  /// The seed this hasher was constructed with (and reverts to on [`reset`](Self::reset)).
  #[must_use]
  fn seed(&self) -> Self::Seed;

  /// Update the hasher with additional data.
  ///
  /// This method can be called multiple times to process data incrementally.
  /// All bytes are always accepted; there is no backpressure and no failure path.
  fn update(&mut self, data: &[u8]);

  /// Update the hasher with multiple non-contiguous buffers.
  ///
  /// Semantics are identical to calling [`update`](Self::update) on each buffer
  /// in order.
  #[inline]
  fn update_vectored(&mut self, bufs: &[&[u8]]) {
    for buf in bufs {
      self.update(buf);
    }
  }

  /// Update the hasher with `std::io::IoSlice` buffers.
  ///
  /// This is a convenience for integrating with vectored I/O APIs.
  #[cfg(feature = "std")]
  #[inline]
  fn update_io_slices(&mut self, bufs: &[std::io::IoSlice<'_>]) {
    for buf in bufs {
      self.update(buf);
    }
  }

  /// Finalize and return the digest of all bytes consumed so far.
  ///
  /// This method does not consume the hasher and does not disturb the pending
  /// tail: further updates continue the same stream, and calling `finalize`
  /// repeatedly without intervening updates returns identical bytes.
  #[must_use]
  fn finalize(&self) -> Self::Output;

  /// Reset the hasher to its initial state, keeping the construction seed.
  ///
  /// After calling this, the hasher behaves as if newly constructed with
  /// [`seed`](Self::seed).
  #[inline]
  fn reset(&mut self) {
    self.reset_with_seed(self.seed());
  }

  /// Reset the hasher to the initial state for `seed`.
  #[inline]
  fn reset_with_seed(&mut self, seed: Self::Seed) {
    *self = Self::with_seed(seed);
  }

  /// Append the current digest bytes to `out`.
  ///
  /// Leaves the hasher untouched, so a digest can be taken mid-stream and
  /// the stream continued afterwards.
  #[cfg(feature = "alloc")]
  #[inline]
  fn sum_into(&self, out: &mut alloc::vec::Vec<u8>) {
    out.extend_from_slice(self.finalize().as_ref());
  }

  /// Compute the digest of `data` in one shot with the default (zero) seed.
  #[inline]
  #[must_use]
  fn hash(data: &[u8]) -> Self::Output {
    Self::hash_with_seed(Self::Seed::default(), data)
  }

  /// Compute the digest of `data` in one shot with `seed`.
  #[inline]
  #[must_use]
  fn hash_with_seed(seed: Self::Seed, data: &[u8]) -> Self::Output {
    let mut h = Self::with_seed(seed);
    h.update(data);
    h.finalize()
  }

  /// Wrap a reader to compute the fingerprint transparently during I/O.
  ///
  /// # Example
  ///
  /// ```rust,ignore
  /// use murmur::Murmur3_32;
  /// use traits::Fingerprint;
  ///
  /// let file = std::fs::File::open("data.bin")?;
  /// let mut reader = Murmur3_32::reader(file);
  /// std::io::copy(&mut reader, &mut std::io::sink())?;
  /// println!("fingerprint: {:02x?}", reader.digest());
  /// ```
  #[cfg(feature = "std")]
  #[inline]
  #[must_use]
  fn reader<R>(inner: R) -> crate::io::FingerprintReader<R, Self>
  where
    Self: Sized,
  {
    crate::io::FingerprintReader::new(inner)
  }

  /// Wrap a writer to compute the fingerprint transparently during I/O.
  ///
  /// # Example
  ///
  /// ```rust,ignore
  /// use murmur::Murmur3_32;
  /// use traits::Fingerprint;
  ///
  /// let file = std::fs::File::create("output.bin")?;
  /// let mut writer = Murmur3_32::writer(file);
  /// writer.write_all(b"hello world")?;
  /// let (file, digest) = writer.into_parts();
  /// println!("fingerprint: {digest:02x?}");
  /// ```
  #[cfg(feature = "std")]
  #[inline]
  #[must_use]
  fn writer<W>(inner: W) -> crate::io::FingerprintWriter<W, Self>
  where
    Self: Sized,
  {
    crate::io::FingerprintWriter::new(inner)
  }
}

//! I/O adapter support for fingerprint hashes.
//!
//! This module provides wrappers that compute a [`Fingerprint`](crate::Fingerprint)
//! transparently while bytes pass through a [`Read`](std::io::Read) or
//! [`Write`](std::io::Write). Everything here requires the `std` feature.
//!
//! # Example
//!
//! ```rust
//! # use traits::Fingerprint;
//! # #[derive(Clone, Default)]
//! # struct Sum {
//! #   acc: u32,
//! #   seed: u32,
//! # }
//! # impl Fingerprint for Sum {
//! #   const OUTPUT_SIZE: usize = 4;
//! #   const BLOCK_SIZE: usize = 1;
//! #   type Output = [u8; 4];
//! #   type Seed = u32;
//! #   fn with_seed(seed: u32) -> Self {
//! #     Sum { acc: seed, seed }
//! #   }
//! #   fn seed(&self) -> u32 {
//! #     self.seed
//! #   }
//! #   fn update(&mut self, data: &[u8]) {
//! #     self.acc = data.iter().fold(self.acc, |acc, &b| acc.wrapping_add(u32::from(b)));
//! #   }
//! #   fn finalize(&self) -> [u8; 4] {
//! #     self.acc.to_le_bytes()
//! #   }
//! # }
//! # use std::io::Cursor;
//! let mut reader = Sum::reader(Cursor::new(b"abc".to_vec()));
//! std::io::copy(&mut reader, &mut std::io::sink())?;
//! assert_eq!(
//!   reader.digest(),
//!   (u32::from(b'a') + u32::from(b'b') + u32::from(b'c')).to_le_bytes()
//! );
//! # Ok::<(), std::io::Error>(())
//! ```

#[inline]
fn read_and_update<R>(inner: &mut R, buf: &mut [u8], mut on_data: impl FnMut(&[u8])) -> std::io::Result<usize>
where
  R: std::io::Read,
{
  let n = inner.read(buf)?;
  if let Some(data) = buf.get(..n) {
    on_data(data);
  }
  Ok(n)
}

#[inline]
fn read_vectored_and_update<R>(
  inner: &mut R,
  bufs: &mut [std::io::IoSliceMut<'_>],
  mut on_data: impl FnMut(&[u8]),
) -> std::io::Result<usize>
where
  R: std::io::Read,
{
  let n = inner.read_vectored(bufs)?;
  let mut remaining = n;
  for buf in bufs {
    let to_hash = remaining.min(buf.len());
    if to_hash == 0 {
      break;
    }
    if let Some(data) = buf.get(..to_hash) {
      on_data(data);
    }
    remaining -= to_hash;
  }
  Ok(n)
}

#[inline]
fn write_and_update<W>(inner: &mut W, buf: &[u8], mut on_data: impl FnMut(&[u8])) -> std::io::Result<usize>
where
  W: std::io::Write,
{
  on_data(buf);
  inner.write(buf)
}

#[inline]
fn write_vectored_and_update<W>(
  inner: &mut W,
  bufs: &[std::io::IoSlice<'_>],
  mut on_data: impl FnMut(&[u8]),
) -> std::io::Result<usize>
where
  W: std::io::Write,
{
  for buf in bufs {
    on_data(buf);
  }
  inner.write_vectored(bufs)
}

// ─────────────────────────────────────────────────────────────────────────────
// Fingerprint I/O Adapters
// ─────────────────────────────────────────────────────────────────────────────

/// Wraps a [`Read`](std::io::Read) and computes a fingerprint transparently.
///
/// All reads from this type pass through to the inner reader while
/// updating the fingerprint with the actual bytes read (handling short reads).
///
/// # Type Parameters
///
/// - `R`: The inner reader type
/// - `F`: The fingerprint algorithm type (e.g., `Murmur3_32`)
///
/// # Example
///
/// ```rust
/// # use traits::Fingerprint;
/// # #[derive(Clone, Default)]
/// # struct Sum {
/// #   acc: u32,
/// #   seed: u32,
/// # }
/// # impl Fingerprint for Sum {
/// #   const OUTPUT_SIZE: usize = 4;
/// #   const BLOCK_SIZE: usize = 1;
/// #   type Output = [u8; 4];
/// #   type Seed = u32;
/// #   fn with_seed(seed: u32) -> Self {
/// #     Sum { acc: seed, seed }
/// #   }
/// #   fn seed(&self) -> u32 {
/// #     self.seed
/// #   }
/// #   fn update(&mut self, data: &[u8]) {
/// #     self.acc = data.iter().fold(self.acc, |acc, &b| acc.wrapping_add(u32::from(b)));
/// #   }
/// #   fn finalize(&self) -> [u8; 4] {
/// #     self.acc.to_le_bytes()
/// #   }
/// # }
/// # use std::io::Cursor;
/// let mut reader = Sum::reader(Cursor::new(b"abc".to_vec()));
/// std::io::copy(&mut reader, &mut std::io::sink())?;
/// assert_eq!(
///   reader.digest(),
///   (u32::from(b'a') + u32::from(b'b') + u32::from(b'c')).to_le_bytes()
/// );
/// # Ok::<(), std::io::Error>(())
/// ```
#[derive(Clone)]
pub struct FingerprintReader<R, F: crate::Fingerprint> {
  inner: R,
  hasher: F,
}

impl<R, F: crate::Fingerprint> FingerprintReader<R, F> {
  /// Create a new reader wrapper with the default (zero) seed.
  #[inline]
  #[must_use]
  pub fn new(inner: R) -> Self {
    Self {
      inner,
      hasher: F::new(),
    }
  }

  /// Create a new reader wrapper seeded with `seed`.
  #[inline]
  #[must_use]
  pub fn with_seed(inner: R, seed: F::Seed) -> Self {
    Self {
      inner,
      hasher: F::with_seed(seed),
    }
  }

  /// Get the digest of the bytes read so far.
  ///
  /// This does not consume the reader or disturb the hasher -
  /// further reads will continue updating the fingerprint.
  #[inline]
  #[must_use]
  pub fn digest(&self) -> F::Output {
    self.hasher.finalize()
  }

  /// Get a mutable reference to the underlying hasher.
  ///
  /// This allows advanced use cases like resetting mid-stream.
  #[inline]
  pub fn hasher_mut(&mut self) -> &mut F {
    &mut self.hasher
  }

  /// Unwrap this `FingerprintReader`, returning the inner reader and the final digest.
  #[inline]
  pub fn into_parts(self) -> (R, F::Output) {
    (self.inner, self.hasher.finalize())
  }

  /// Unwrap this `FingerprintReader`, returning the inner reader and discarding the digest.
  #[inline]
  pub fn into_inner(self) -> R {
    self.inner
  }

  /// Get a reference to the inner reader.
  #[inline]
  pub fn inner(&self) -> &R {
    &self.inner
  }

  /// Get a mutable reference to the inner reader.
  #[inline]
  pub fn inner_mut(&mut self) -> &mut R {
    &mut self.inner
  }
}

impl<R: std::io::Read, F: crate::Fingerprint> std::io::Read for FingerprintReader<R, F> {
  #[inline]
  fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
    read_and_update(&mut self.inner, buf, |data| self.hasher.update(data))
  }

  #[inline]
  fn read_vectored(&mut self, bufs: &mut [std::io::IoSliceMut<'_>]) -> std::io::Result<usize> {
    read_vectored_and_update(&mut self.inner, bufs, |data| self.hasher.update(data))
  }
}

/// Wraps a [`Write`](std::io::Write) and computes a fingerprint transparently.
///
/// All writes to this type pass through to the inner writer while
/// updating the fingerprint with the bytes being written.
///
/// # Important: Hash-Then-Write Order
///
/// The fingerprint is updated **before** writing to the inner writer.
/// This ensures that if the write fails, the caller knows exactly
/// what data was hashed vs what was successfully written.
///
/// # Type Parameters
///
/// - `W`: The inner writer type
/// - `F`: The fingerprint algorithm type (e.g., `Murmur3_32`)
///
/// # Example
///
/// ```rust
/// # use traits::Fingerprint;
/// # #[derive(Clone, Default)]
/// # struct Sum {
/// #   acc: u32,
/// #   seed: u32,
/// # }
/// # impl Fingerprint for Sum {
/// #   const OUTPUT_SIZE: usize = 4;
/// #   const BLOCK_SIZE: usize = 1;
/// #   type Output = [u8; 4];
/// #   type Seed = u32;
/// #   fn with_seed(seed: u32) -> Self {
/// #     Sum { acc: seed, seed }
/// #   }
/// #   fn seed(&self) -> u32 {
/// #     self.seed
/// #   }
/// #   fn update(&mut self, data: &[u8]) {
/// #     self.acc = data.iter().fold(self.acc, |acc, &b| acc.wrapping_add(u32::from(b)));
/// #   }
/// #   fn finalize(&self) -> [u8; 4] {
/// #     self.acc.to_le_bytes()
/// #   }
/// # }
/// # use std::io::Write;
/// let mut writer = Sum::writer(Vec::new());
/// writer.write_all(b"hello world")?;
/// let (out, digest) = writer.into_parts();
/// assert_eq!(out, b"hello world".to_vec());
/// assert_eq!(
///   digest,
///   b"hello world"
///     .iter()
///     .fold(0u32, |acc, &b| acc.wrapping_add(u32::from(b)))
///     .to_le_bytes()
/// );
/// # Ok::<(), std::io::Error>(())
/// ```
#[derive(Clone)]
pub struct FingerprintWriter<W, F: crate::Fingerprint> {
  inner: W,
  hasher: F,
}

impl<W, F: crate::Fingerprint> FingerprintWriter<W, F> {
  /// Create a new writer wrapper with the default (zero) seed.
  #[inline]
  #[must_use]
  pub fn new(inner: W) -> Self {
    Self {
      inner,
      hasher: F::new(),
    }
  }

  /// Create a new writer wrapper seeded with `seed`.
  #[inline]
  #[must_use]
  pub fn with_seed(inner: W, seed: F::Seed) -> Self {
    Self {
      inner,
      hasher: F::with_seed(seed),
    }
  }

  /// Get the digest of the bytes written so far.
  #[inline]
  #[must_use]
  pub fn digest(&self) -> F::Output {
    self.hasher.finalize()
  }

  /// Get a mutable reference to the underlying hasher.
  #[inline]
  pub fn hasher_mut(&mut self) -> &mut F {
    &mut self.hasher
  }

  /// Unwrap this `FingerprintWriter`, returning the inner writer and the final digest.
  #[inline]
  pub fn into_parts(self) -> (W, F::Output) {
    (self.inner, self.hasher.finalize())
  }

  /// Unwrap this `FingerprintWriter`, returning the inner writer and discarding the digest.
  #[inline]
  pub fn into_inner(self) -> W {
    self.inner
  }

  /// Get a reference to the inner writer.
  #[inline]
  pub fn inner(&self) -> &W {
    &self.inner
  }

  /// Get a mutable reference to the inner writer.
  #[inline]
  pub fn inner_mut(&mut self) -> &mut W {
    &mut self.inner
  }
}

impl<W: std::io::Write, F: crate::Fingerprint> std::io::Write for FingerprintWriter<W, F> {
  #[inline]
  fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
    write_and_update(&mut self.inner, buf, |data| self.hasher.update(data))
  }

  #[inline]
  fn flush(&mut self) -> std::io::Result<()> {
    self.inner.flush()
  }

  #[inline]
  fn write_vectored(&mut self, bufs: &[std::io::IoSlice<'_>]) -> std::io::Result<usize> {
    write_vectored_and_update(&mut self.inner, bufs, |data| self.hasher.update(data))
  }
}

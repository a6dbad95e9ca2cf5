use std::collections::TryReserveError;

/// Error type for the [`SkipMap`](crate::SkipMap).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
  /// Indicates that the map was configured with a key size of zero.
  ZeroKeySize,

  /// Indicates that the operating system random source could not seed the level generator.
  Entropy,

  /// Indicates that the key does not have the fixed size the map was created with.
  KeySize {
    /// The key size of the map.
    expected: usize,
    /// The size of the rejected key.
    actual: usize,
  },

  /// Indicates that storage for a node, its key copy or its tower could not be obtained.
  /// The map is left unchanged.
  Allocation(TryReserveError),

  /// Indicates that the arena already addresses as many nodes as a `u32` index can reach.
  Full,

  /// Indicates that a [`Cursor`](crate::Cursor) was used after the entry it points to was
  /// removed, or with a map other than the one that created it.
  InvalidatedCursor,
}

impl core::fmt::Display for Error {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    match self {
      Self::ZeroKeySize => write!(f, "key size must be greater than zero"),
      Self::Entropy => write!(f, "failed to seed the level generator from the os random source"),
      Self::KeySize { expected, actual } => {
        write!(f, "key size {actual} does not match the map key size {expected}")
      }
      Self::Allocation(e) => write!(f, "allocation failed: {e}"),
      Self::Full => write!(f, "the map has no room for another node"),
      Self::InvalidatedCursor => write!(f, "cursor has been invalidated"),
    }
  }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    match self {
      Self::Allocation(e) => Some(e),
      _ => None,
    }
  }
}

impl From<TryReserveError> for Error {
  fn from(e: TryReserveError) -> Self {
    Self::Allocation(e)
  }
}

impl Error {
  #[inline]
  pub(crate) const fn key_size(expected: usize, actual: usize) -> Self {
    Self::KeySize { expected, actual }
  }
}

/// The outcome of [`SkipMap::insert`](super::SkipMap::insert).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Insert<V> {
  /// The key was not in the map, a new entry was created.
  Inserted,
  /// The key was already in the map. Its value was replaced in place, and the previous value is
  /// handed back.
  Updated(V),
}

impl<V> Insert<V> {
  /// Returns `true` if a new entry was created.
  #[inline]
  pub const fn is_inserted(&self) -> bool {
    matches!(self, Self::Inserted)
  }

  /// Returns `true` if an existing entry was updated.
  #[inline]
  pub const fn is_updated(&self) -> bool {
    matches!(self, Self::Updated(_))
  }

  /// Returns the replaced value, if any.
  #[inline]
  pub fn into_previous(self) -> Option<V> {
    match self {
      Self::Inserted => None,
      Self::Updated(v) => Some(v),
    }
  }
}

/// The outcome of [`SkipMap::remove`](super::SkipMap::remove).
///
/// Dropping the value of [`Remove::Removed`] is the destructive removal: the map has already
/// released the key copy and the node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Remove<V> {
  /// The entry was removed, its value is handed back.
  Removed(V),
  /// No entry with that key exists. The map is unchanged.
  NotFound,
}

impl<V> Remove<V> {
  /// Returns `true` if an entry was removed.
  #[inline]
  pub const fn is_removed(&self) -> bool {
    matches!(self, Self::Removed(_))
  }

  /// Returns `true` if no entry was found.
  #[inline]
  pub const fn is_not_found(&self) -> bool {
    matches!(self, Self::NotFound)
  }

  /// Returns the removed value, if any.
  #[inline]
  pub fn into_value(self) -> Option<V> {
    match self {
      Self::Removed(v) => Some(v),
      Self::NotFound => None,
    }
  }
}

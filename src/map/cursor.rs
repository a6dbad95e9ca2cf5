use super::{node::NodeId, Comparator, Error, SkipMap};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum State {
  Positioned(NodeId),
  Exhausted,
}

/// A position in a [`SkipMap`], created by [`SkipMap::begin`].
///
/// Unlike [`Iter`](super::Iter), a cursor does not borrow the map: every operation takes the
/// map as an argument, and the map may be modified between two operations.
///
/// A cursor tracks its entry by identity, not by position:
///
/// - inserting or removing *other* entries never moves the cursor away from its entry;
/// - once *its* entry is removed, every operation fails with [`Error::InvalidatedCursor`],
///   even if a new entry with the same key is inserted later;
/// - using the cursor with a map other than the one that created it fails with
///   [`Error::InvalidatedCursor`] as well.
///
/// Identities are never reused: a slot is recycled under a new generation, and a slot whose
/// generation counter is exhausted is retired.
///
/// An exhausted cursor has no current key or value, and stays exhausted.
///
/// Dropping a cursor never affects the map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cursor {
  map: usize,
  state: State,
}

impl Cursor {
  #[inline]
  pub(super) const fn new(map: usize, node: Option<NodeId>) -> Self {
    Self {
      map,
      state: match node {
        Some(id) => State::Positioned(id),
        None => State::Exhausted,
      },
    }
  }

  /// Returns `true` if the cursor moved past the last entry, or was created on an empty map.
  #[inline]
  pub const fn is_exhausted(&self) -> bool {
    matches!(self.state, State::Exhausted)
  }

  /// Returns the current key, or `None` if the cursor is exhausted.
  #[inline]
  pub fn key<'a, V, C, R>(&self, map: &'a SkipMap<V, C, R>) -> Result<Option<&'a [u8]>, Error> {
    self.entry(map).map(|ent| ent.map(|(k, _)| k))
  }

  /// Returns the current value, or `None` if the cursor is exhausted.
  #[inline]
  pub fn value<'a, V, C, R>(&self, map: &'a SkipMap<V, C, R>) -> Result<Option<&'a V>, Error> {
    self.entry(map).map(|ent| ent.map(|(_, v)| v))
  }

  /// Returns the current entry, or `None` if the cursor is exhausted.
  pub fn entry<'a, V, C, R>(
    &self,
    map: &'a SkipMap<V, C, R>,
  ) -> Result<Option<(&'a [u8], &'a V)>, Error> {
    Ok(self.resolve(map)?.map(|idx| map.entry(idx)))
  }

  /// Moves to the next entry, or becomes exhausted if the current entry is the last one.
  ///
  /// Incrementing an exhausted cursor is a no-op.
  pub fn increment<V, C, R>(&mut self, map: &SkipMap<V, C, R>) -> Result<(), Error> {
    if let Some(idx) = self.resolve(map)? {
      self.state = match map.arena.next(idx, 0) {
        Some(next) => State::Positioned(map.arena.id(next)),
        None => State::Exhausted,
      };
    }
    Ok(())
  }

  /// Returns the key of the next entry without moving the cursor.
  ///
  /// Returns `None` if the cursor is at the last entry or exhausted.
  pub fn peek_next<'a, V, C, R>(
    &self,
    map: &'a SkipMap<V, C, R>,
  ) -> Result<Option<&'a [u8]>, Error> {
    Ok(
      self
        .resolve(map)?
        .and_then(|idx| map.arena.next(idx, 0))
        .map(|next| map.arena.key(next)),
    )
  }

  /// Evaluates `pred` on the current key. Returns `false` if the cursor is exhausted.
  ///
  /// ## Example
  ///
  /// ```rust
  /// use sklmap::SkipMap;
  ///
  /// let mut map = SkipMap::new(1).unwrap();
  /// map.insert(&[2], "two").unwrap();
  ///
  /// let cursor = map.begin();
  /// assert!(cursor.equals_predicate(&map, |k| k == [2u8]).unwrap());
  /// assert!(!cursor.equals_predicate(&map, |k| k == [3u8]).unwrap());
  /// ```
  pub fn equals_predicate<V, C, R, P>(&self, map: &SkipMap<V, C, R>, pred: P) -> Result<bool, Error>
  where
    P: FnOnce(&[u8]) -> bool,
  {
    Ok(self.key(map)?.is_some_and(pred))
  }

  /// Returns `true` if the cursor's entry is in `map`, or the cursor is an exhausted cursor of
  /// `map`.
  #[inline]
  pub fn is_valid<V, C, R>(&self, map: &SkipMap<V, C, R>) -> bool {
    self.resolve(map).is_ok()
  }

  /// Moves the cursor to the first entry whose key is greater than or equal to `key`.
  ///
  /// This also revives an invalidated cursor of the same map. It fails only if the cursor
  /// belongs to another map.
  pub fn seek<V, C: Comparator, R>(&mut self, map: &SkipMap<V, C, R>, key: &[u8]) -> Result<(), Error> {
    if self.map != map.id {
      return Err(Error::InvalidatedCursor);
    }

    *self = Self::new(map.id, map.seek_ge(key).map(|idx| map.arena.id(idx)));
    Ok(())
  }

  fn resolve<V, C, R>(&self, map: &SkipMap<V, C, R>) -> Result<Option<u32>, Error> {
    if self.map != map.id {
      return Err(Error::InvalidatedCursor);
    }

    match self.state {
      State::Exhausted => Ok(None),
      State::Positioned(id) => match map.arena.resolve(id) {
        Some(idx) => Ok(Some(idx)),
        None => {
          #[cfg(feature = "tracing")]
          tracing::trace!(index = id.index, "cursor entry was removed");

          Err(Error::InvalidatedCursor)
        }
      },
    }
  }
}

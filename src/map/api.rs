use std::vec::Vec;

use super::*;

// --------------------------------Public Methods--------------------------------
impl<V, C, R> SkipMap<V, C, R> {
  /// Returns the configured maximum tower height.
  ///
  /// Every node of the map has a height in `1..=height()`.
  #[inline]
  pub const fn height(&self) -> Height {
    self.max_height
  }

  /// Returns the fixed size, in bytes, of every key in the map.
  #[inline]
  pub const fn key_size(&self) -> usize {
    self.key_size
  }

  /// Returns the number of entries in the map.
  #[inline]
  pub const fn len(&self) -> usize {
    self.len
  }

  /// Returns `true` if the map has no entries.
  #[inline]
  pub const fn is_empty(&self) -> bool {
    self.len == 0
  }

  /// Returns the comparator the map orders its keys with.
  #[inline]
  pub const fn comparator(&self) -> &C {
    &self.cmp
  }

  /// Returns the first entry of the map.
  pub fn first(&self) -> Option<(&[u8], &V)> {
    self.arena.next(HEAD, 0).map(|idx| self.entry(idx))
  }

  /// Returns the value of the first entry of the map.
  #[inline]
  pub fn front(&self) -> Option<&V> {
    self.first().map(|(_, v)| v)
  }

  /// Returns an iterator over the entries of the map, in key order.
  #[inline]
  pub fn iter(&self) -> Iter<'_, V> {
    Iter::new(&self.arena, self.arena.next(HEAD, 0), self.len)
  }

  /// Returns an iterator over the keys of the map, in order.
  #[inline]
  pub fn keys(&self) -> Keys<'_, V> {
    Keys(self.iter())
  }

  /// Returns an iterator over the values of the map, in key order.
  #[inline]
  pub fn values(&self) -> Values<'_, V> {
    Values(self.iter())
  }

  /// Returns a cursor positioned at the first entry, or exhausted if the map is empty.
  ///
  /// The cursor does not borrow the map, so the map can still be modified while it is alive.
  /// See [`Cursor`] for how it reacts to modifications.
  ///
  /// ## Example
  ///
  /// ```rust
  /// use sklmap::SkipMap;
  ///
  /// let mut map = SkipMap::new(1).unwrap();
  /// map.insert(b"a", 1).unwrap();
  /// map.insert(b"b", 2).unwrap();
  ///
  /// let mut cursor = map.begin();
  /// assert_eq!(cursor.key(&map).unwrap(), Some(&b"a"[..]));
  /// cursor.increment(&map).unwrap();
  /// assert_eq!(cursor.value(&map).unwrap(), Some(&2));
  /// cursor.increment(&map).unwrap();
  /// assert!(cursor.is_exhausted());
  /// ```
  pub fn begin(&self) -> Cursor {
    let node = self.arena.next(HEAD, 0).map(|idx| self.arena.id(idx));
    Cursor::new(self.id, node)
  }

  /// Tears the map down, releasing every key copy, and hands the values back in key order.
  ///
  /// ## Example
  ///
  /// ```rust
  /// use sklmap::SkipMap;
  ///
  /// let mut map = SkipMap::new(1).unwrap();
  /// map.insert(b"b", String::from("second")).unwrap();
  /// map.insert(b"a", String::from("first")).unwrap();
  /// assert_eq!(map.free(), ["first", "second"]);
  /// ```
  pub fn free(mut self) -> Vec<V> {
    let mut values = Vec::with_capacity(self.len);
    self.drain_with(|v| values.push(v));
    values
  }

  /// Tears the map down, dropping every key copy and every value.
  ///
  /// This is what dropping the map does as well.
  #[inline]
  pub fn deep_free(self) {
    drop(self)
  }

  /// Removes every entry, dropping the values. The configuration of the map is kept.
  pub fn clear(&mut self) {
    self.drain_with(drop);
  }

  #[inline]
  pub(super) fn entry(&self, idx: u32) -> (&[u8], &V) {
    let node = self.arena.node(idx);
    (node.key(), node.value())
  }
}

impl<V, C: Comparator, R> SkipMap<V, C, R> {
  /// Returns the value associated with the given key, if it exists.
  ///
  /// A key whose length differs from [`key_size`](SkipMap::key_size) is never found.
  #[inline]
  pub fn get(&self, key: &[u8]) -> Option<&V> {
    self.find(key).map(|idx| self.arena.node(idx).value())
  }

  /// Returns a mutable reference to the value associated with the given key, if it exists.
  #[inline]
  pub fn get_mut(&mut self, key: &[u8]) -> Option<&mut V> {
    let idx = self.find(key)?;
    Some(self.arena.node_mut(idx).value_mut())
  }

  /// Returns the entry associated with the given key, if it exists.
  #[inline]
  pub fn get_key_value(&self, key: &[u8]) -> Option<(&[u8], &V)> {
    self.find(key).map(|idx| self.entry(idx))
  }

  /// Returns `true` if the key exists in the map.
  #[inline]
  pub fn contains_key(&self, key: &[u8]) -> bool {
    self.find(key).is_some()
  }

  /// Returns the last entry of the map.
  #[inline]
  pub fn last(&self) -> Option<(&[u8], &V)> {
    self.find_last().map(|idx| self.entry(idx))
  }

  /// Returns an iterator starting at the first entry whose key is greater than or equal to `key`.
  ///
  /// The iterator is empty if the key does not have the size of the map keys.
  ///
  /// ## Example
  ///
  /// ```rust
  /// use sklmap::SkipMap;
  ///
  /// let mut map = SkipMap::new(1).unwrap();
  /// for k in [b"a", b"c", b"e"] {
  ///   map.insert(k, ()).unwrap();
  /// }
  ///
  /// let keys: Vec<_> = map.range_from(b"b").map(|(k, _)| k[0]).collect();
  /// assert_eq!(keys, [b'c', b'e']);
  /// ```
  #[inline]
  pub fn range_from(&self, key: &[u8]) -> Iter<'_, V> {
    Iter::new(&self.arena, self.seek_ge(key), self.len)
  }

  /// Removes the entry with the given key, handing its value back.
  ///
  /// Returns [`Remove::NotFound`] and leaves the map untouched if the key is absent.
  ///
  /// ## Example
  ///
  /// ```rust
  /// use sklmap::{Remove, SkipMap};
  ///
  /// let mut map = SkipMap::new(1).unwrap();
  /// map.insert(b"k", 10).unwrap();
  /// assert_eq!(map.remove(b"k"), Remove::Removed(10));
  /// assert_eq!(map.remove(b"k"), Remove::NotFound);
  /// ```
  #[inline]
  pub fn remove(&mut self, key: &[u8]) -> Remove<V> {
    self.remove_in(key)
  }

  /// Removes the entry with the given key and drops its value.
  ///
  /// Returns `true` if an entry was removed.
  #[inline]
  pub fn remove_and_drop(&mut self, key: &[u8]) -> bool {
    self.remove_in(key).is_removed()
  }
}

impl<V, C: Comparator, R: RngCore> SkipMap<V, C, R> {
  /// Inserts a key-value pair.
  ///
  /// If the key is absent a node is created and [`Insert::Inserted`] is returned. If the key is
  /// present its value is replaced in place, no node is created, and the previous value is
  /// returned in [`Insert::Updated`].
  ///
  /// # Errors
  ///
  /// - Returns [`Error::KeySize`] if the key does not have [`key_size`](SkipMap::key_size) bytes.
  /// - Returns [`Error::Allocation`] if storage for the node could not be obtained. The map is
  ///   unchanged and the value is dropped.
  /// - Returns [`Error::Full`] if the map already holds as many nodes as it can address.
  ///
  /// ## Example
  ///
  /// ```rust
  /// use sklmap::{Insert, SkipMap};
  ///
  /// let mut map = SkipMap::new(2).unwrap();
  /// assert_eq!(map.insert(b"hi", 1).unwrap(), Insert::Inserted);
  /// assert_eq!(map.insert(b"hi", 2).unwrap(), Insert::Updated(1));
  /// assert_eq!(map.len(), 1);
  /// assert!(map.insert(b"hey", 3).is_err());
  /// ```
  pub fn insert(&mut self, key: &[u8], value: V) -> Result<Insert<V>, Error> {
    if key.len() != self.key_size {
      return Err(Error::key_size(self.key_size, key.len()));
    }
    self.insert_in(key, value)
  }
}

impl<'a, V, C, R> IntoIterator for &'a SkipMap<V, C, R> {
  type Item = (&'a [u8], &'a V);
  type IntoIter = Iter<'a, V>;

  #[inline]
  fn into_iter(self) -> Self::IntoIter {
    self.iter()
  }
}

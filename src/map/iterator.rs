use core::iter::FusedIterator;

use super::{arena::Arena, node::Link};

/// An iterator over the entries of a [`SkipMap`](super::SkipMap), in key order.
///
/// The iterator borrows the map, so the map cannot be modified while it is alive.
pub struct Iter<'a, V> {
  arena: &'a Arena<V>,
  next: Link,
  remaining: usize,
}

impl<V> Clone for Iter<'_, V> {
  fn clone(&self) -> Self {
    Self {
      arena: self.arena,
      next: self.next,
      remaining: self.remaining,
    }
  }
}

impl<'a, V> Iter<'a, V> {
  /// `remaining` is an upper bound of the entries left to yield.
  #[inline]
  pub(super) const fn new(arena: &'a Arena<V>, next: Link, remaining: usize) -> Self {
    Self {
      arena,
      next,
      remaining,
    }
  }
}

impl<'a, V> Iterator for Iter<'a, V> {
  type Item = (&'a [u8], &'a V);

  fn next(&mut self) -> Option<Self::Item> {
    let idx = self.next?;
    let node = self.arena.node(idx);
    self.next = node.tower()[0];
    self.remaining = self.remaining.saturating_sub(1);
    Some((node.key(), node.value()))
  }

  #[inline]
  fn size_hint(&self) -> (usize, Option<usize>) {
    match self.next {
      Some(_) => (1, Some(self.remaining)),
      None => (0, Some(0)),
    }
  }
}

impl<V> FusedIterator for Iter<'_, V> {}

impl<V> core::fmt::Debug for Iter<'_, V> {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.debug_struct("Iter")
      .field("next", &self.next)
      .field("remaining", &self.remaining)
      .finish()
  }
}

/// An iterator over the keys of a [`SkipMap`](super::SkipMap), in order.
#[derive(Debug)]
pub struct Keys<'a, V>(pub(super) Iter<'a, V>);

impl<V> Clone for Keys<'_, V> {
  fn clone(&self) -> Self {
    Self(self.0.clone())
  }
}

impl<'a, V> Iterator for Keys<'a, V> {
  type Item = &'a [u8];

  #[inline]
  fn next(&mut self) -> Option<Self::Item> {
    self.0.next().map(|(k, _)| k)
  }

  #[inline]
  fn size_hint(&self) -> (usize, Option<usize>) {
    self.0.size_hint()
  }
}

impl<V> FusedIterator for Keys<'_, V> {}

/// An iterator over the values of a [`SkipMap`](super::SkipMap), in key order.
#[derive(Debug)]
pub struct Values<'a, V>(pub(super) Iter<'a, V>);

impl<V> Clone for Values<'_, V> {
  fn clone(&self) -> Self {
    Self(self.0.clone())
  }
}

impl<'a, V> Iterator for Values<'a, V> {
  type Item = &'a V;

  #[inline]
  fn next(&mut self) -> Option<Self::Item> {
    self.0.next().map(|(_, v)| v)
  }

  #[inline]
  fn size_hint(&self) -> (usize, Option<usize>) {
    self.0.size_hint()
  }
}

impl<V> FusedIterator for Values<'_, V> {}

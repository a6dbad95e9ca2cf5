use std::{boxed::Box, vec::Vec};

use crate::Error;

/// A forward reference: the arena index of the next node on a level, `None` at the end.
pub(crate) type Link = Option<u32>;

/// Identity of a node, stable for as long as the node is in the map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct NodeId {
  pub(crate) index: u32,
  pub(crate) generation: u32,
}

#[derive(Debug)]
pub(crate) struct Node<V> {
  key: Box<[u8]>,
  value: V,
  // The tower holds exactly `height` links. Most nodes are short, so the
  // links above the height of a node are never allocated.
  tower: Box<[Link]>,
}

impl<V> Node<V> {
  /// Allocates a node, copying the key. Nothing is linked yet.
  pub(crate) fn try_new(key: &[u8], value: V, height: usize) -> Result<Self, Error> {
    let mut k = Vec::new();
    k.try_reserve_exact(key.len())?;
    k.extend_from_slice(key);

    Ok(Self {
      key: k.into_boxed_slice(),
      value,
      tower: new_tower(height)?,
    })
  }

  #[inline]
  pub(crate) fn key(&self) -> &[u8] {
    &self.key
  }

  #[inline]
  pub(crate) const fn value(&self) -> &V {
    &self.value
  }

  #[inline]
  pub(crate) fn value_mut(&mut self) -> &mut V {
    &mut self.value
  }

  #[inline]
  pub(crate) fn replace_value(&mut self, value: V) -> V {
    core::mem::replace(&mut self.value, value)
  }

  #[inline]
  pub(crate) fn into_value(self) -> V {
    self.value
  }

  #[inline]
  pub(crate) fn height(&self) -> usize {
    self.tower.len()
  }

  #[inline]
  pub(crate) fn tower(&self) -> &[Link] {
    &self.tower
  }

  #[inline]
  pub(crate) fn tower_mut(&mut self) -> &mut [Link] {
    &mut self.tower
  }
}

/// Allocates a tower of `height` empty links.
pub(crate) fn new_tower(height: usize) -> Result<Box<[Link]>, Error> {
  let mut tower = Vec::new();
  tower.try_reserve_exact(height)?;
  tower.resize(height, None);
  Ok(tower.into_boxed_slice())
}

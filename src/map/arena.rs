use std::{boxed::Box, vec::Vec};

use super::node::{new_tower, Link, Node, NodeId};
use crate::Error;

/// The arena index of the header node.
pub(crate) const HEAD: u32 = 0;

#[derive(Debug)]
enum Slot<V> {
  /// The sentinel, which compares less than every key and has a full height tower.
  Head(Box<[Link]>),
  Occupied { generation: u32, node: Node<V> },
  Vacant { generation: u32, next_free: Option<u32> },
  /// Every generation of the slot was used, it is never handed out again.
  Retired,
}

/// Owns every node of a map. Nodes are addressed by index, the header lives at [`HEAD`].
///
/// Released slots are recycled. Each slot carries a generation which is bumped on release,
/// so a [`NodeId`] taken before a removal never resolves to the node that reuses the slot.
#[derive(Debug)]
pub(crate) struct Arena<V> {
  slots: Vec<Slot<V>>,
  free: Option<u32>,
}

impl<V> Arena<V> {
  pub(crate) fn new(max_height: usize, capacity: usize) -> Result<Self, Error> {
    let mut slots = Vec::new();
    slots.try_reserve(capacity.saturating_add(1))?;
    slots.push(Slot::Head(new_tower(max_height)?));
    Ok(Self { slots, free: None })
  }

  #[inline]
  pub(crate) fn node(&self, idx: u32) -> &Node<V> {
    match &self.slots[idx as usize] {
      Slot::Occupied { node, .. } => node,
      _ => unreachable!("link {idx} does not point to a live node"),
    }
  }

  #[inline]
  pub(crate) fn node_mut(&mut self, idx: u32) -> &mut Node<V> {
    match &mut self.slots[idx as usize] {
      Slot::Occupied { node, .. } => node,
      _ => unreachable!("link {idx} does not point to a live node"),
    }
  }

  #[inline]
  pub(crate) fn key(&self, idx: u32) -> &[u8] {
    self.node(idx).key()
  }

  #[inline]
  pub(crate) fn tower(&self, idx: u32) -> &[Link] {
    match &self.slots[idx as usize] {
      Slot::Head(tower) => tower,
      Slot::Occupied { node, .. } => node.tower(),
      Slot::Vacant { .. } | Slot::Retired => {
        unreachable!("link {idx} points to a released slot")
      }
    }
  }

  #[inline]
  pub(crate) fn tower_mut(&mut self, idx: u32) -> &mut [Link] {
    match &mut self.slots[idx as usize] {
      Slot::Head(tower) => tower,
      Slot::Occupied { node, .. } => node.tower_mut(),
      Slot::Vacant { .. } | Slot::Retired => {
        unreachable!("link {idx} points to a released slot")
      }
    }
  }

  /// Returns the successor of `idx` on `level`.
  #[inline]
  pub(crate) fn next(&self, idx: u32, level: usize) -> Link {
    self.tower(idx)[level]
  }

  /// Returns the identity of a live node.
  #[inline]
  pub(crate) fn id(&self, idx: u32) -> NodeId {
    match &self.slots[idx as usize] {
      Slot::Occupied { generation, .. } => NodeId {
        index: idx,
        generation: *generation,
      },
      _ => unreachable!("link {idx} does not point to a live node"),
    }
  }

  /// Resolves an identity to an index, if that node is still in the arena.
  #[inline]
  pub(crate) fn resolve(&self, id: NodeId) -> Option<u32> {
    match self.slots.get(id.index as usize)? {
      Slot::Occupied { generation, .. } if *generation == id.generation => Some(id.index),
      _ => None,
    }
  }

  /// Makes sure the next [`Arena::insert`] does not need to allocate.
  #[inline]
  pub(crate) fn reserve(&mut self) -> Result<(), Error> {
    if self.free.is_none() {
      next_index(self.slots.len())?;
      self.slots.try_reserve(1)?;
    }
    Ok(())
  }

  /// Stores a node and returns its index. Call [`Arena::reserve`] first.
  pub(crate) fn insert(&mut self, node: Node<V>) -> u32 {
    match self.free {
      Some(idx) => {
        let slot = &mut self.slots[idx as usize];
        let generation = match *slot {
          Slot::Vacant {
            generation,
            next_free,
          } => {
            self.free = next_free;
            generation
          }
          _ => unreachable!("free list points to a live slot"),
        };
        *slot = Slot::Occupied { generation, node };
        idx
      }
      None => {
        let idx = match next_index(self.slots.len()) {
          Ok(idx) => idx,
          Err(_) => unreachable!("insert without a successful reserve"),
        };
        self.slots.push(Slot::Occupied {
          generation: 0,
          node,
        });
        idx
      }
    }
  }

  /// Takes a node out of the arena. The node must already be unlinked from every level.
  ///
  /// A slot whose generation is exhausted is retired instead of recycled.
  pub(crate) fn release(&mut self, idx: u32) -> Node<V> {
    let slot = &mut self.slots[idx as usize];
    let generation = match slot {
      Slot::Occupied { generation, .. } => generation.checked_add(1),
      _ => unreachable!("release of a slot that is not live"),
    };
    let vacant = match generation {
      Some(generation) => Slot::Vacant {
        generation,
        next_free: self.free,
      },
      None => Slot::Retired,
    };
    let old = core::mem::replace(slot, vacant);
    if generation.is_some() {
      self.free = Some(idx);
    }
    match old {
      Slot::Occupied { node, .. } => node,
      _ => unreachable!(),
    }
  }

  #[cfg(test)]
  pub(crate) fn slots(&self) -> usize {
    self.slots.len()
  }

  #[cfg(test)]
  pub(crate) fn capacity(&self) -> usize {
    self.slots.capacity()
  }
}

/// Returns the index a new slot at position `len` gets. The last `u32` is never an index, so
/// `u32::MAX` slots is the limit.
#[inline]
fn next_index(len: usize) -> Result<u32, Error> {
  match u32::try_from(len) {
    Ok(idx) if idx < u32::MAX => Ok(idx),
    _ => Err(Error::Full),
  }
}

use core::cmp::Ordering;

use sklmap::{Builder, Cursor, Insert, Remove, SkipMap};

type IntCmp = fn(&[u8], &[u8]) -> Ordering;

fn int_compare(a: &[u8], b: &[u8]) -> Ordering {
  let a = i32::from_le_bytes(a.try_into().unwrap());
  let b = i32::from_le_bytes(b.try_into().unwrap());
  a.cmp(&b)
}

fn key(i: i32) -> [u8; 4] {
  i.to_le_bytes()
}

fn int_map<V>() -> SkipMap<V, IntCmp> {
  Builder::new()
    .with_key_size(4)
    .with_comparator(int_compare as IntCmp)
    .build()
    .unwrap()
}

fn scenario_a() -> SkipMap<f32, IntCmp> {
  let mut map = int_map();
  for (k, v) in [1, 2, 3, 4, 5].into_iter().zip([10.0, 20.0, 30.0, 40.0, 50.0]) {
    assert_eq!(map.insert(&key(k), v).unwrap(), Insert::Inserted);
  }
  assert_eq!(map.len(), 5);
  assert_eq!(map.get(&key(3)), Some(&30.0));
  map
}

fn scenario_b() -> SkipMap<f32, IntCmp> {
  let mut map = scenario_a();
  assert_eq!(map.remove(&key(3)), Remove::Removed(30.0));
  assert_eq!(map.len(), 4);
  assert_eq!(map.get(&key(3)), None);
  assert_eq!(map.get(&key(4)), Some(&40.0));
  map
}

#[test]
fn insert_then_find() {
  scenario_a();
}

#[test]
fn remove_present_key() {
  scenario_b();
}

#[test]
fn remove_absent_key() {
  let mut map = scenario_b();
  assert_eq!(map.remove(&key(99)), Remove::NotFound);
  assert_eq!(map.len(), 4);
}

#[test]
fn cursor_walk() {
  let mut map = int_map();
  for k in 1..=6 {
    map.insert(&key(k), k).unwrap();
  }

  let mut it: Cursor = map.begin();
  assert_eq!(it.key(&map).unwrap(), Some(&key(1)[..]));
  it.increment(&map).unwrap();
  assert_eq!(it.key(&map).unwrap(), Some(&key(2)[..]));
  assert_eq!(it.peek_next(&map).unwrap(), Some(&key(3)[..]));
  assert_eq!(it.key(&map).unwrap(), Some(&key(2)[..]));

  for k in 3..=6 {
    it.increment(&map).unwrap();
    assert!(it.equals_predicate(&map, |cur| cur == key(k)).unwrap());
  }
  it.increment(&map).unwrap();
  assert!(it.is_exhausted());
  it.increment(&map).unwrap();
  assert!(it.is_exhausted());
}

#[test]
fn insert_existing_key_replaces_value() {
  let mut map = int_map();
  assert_eq!(map.insert(&key(42), "v1").unwrap(), Insert::Inserted);
  assert_eq!(map.insert(&key(42), "v2").unwrap(), Insert::Updated("v1"));
  assert_eq!(map.len(), 1);
  assert_eq!(map.get(&key(42)), Some(&"v2"));
}

#[test]
fn iteration_is_sorted_and_complete() {
  let mut map = int_map();
  let ints = [17, -4, 99, 0, 23, -100, 5, 64, 8, 1];
  for i in ints {
    map.insert(&key(i), i).unwrap();
  }

  let mut sorted = ints.to_vec();
  sorted.sort_unstable();
  let values: Vec<i32> = map.values().copied().collect();
  assert_eq!(values, sorted);
  assert_eq!(map.iter().count(), map.len());
}

#[test]
fn free_hands_values_back() {
  let mut map = int_map();
  for i in [3, 1, 2] {
    map.insert(&key(i), vec![i; i as usize]).unwrap();
  }
  assert_eq!(map.free(), [vec![1], vec![2, 2], vec![3, 3, 3]]);
}

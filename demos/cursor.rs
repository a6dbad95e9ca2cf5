use core::cmp::Ordering;

use sklmap::{Error, SkipMap};

fn int_compare(a: &[u8], b: &[u8]) -> Ordering {
  let a = i32::from_le_bytes(a.try_into().unwrap());
  let b = i32::from_le_bytes(b.try_into().unwrap());
  a.cmp(&b)
}

fn is_two(key: &[u8]) -> bool {
  key == 2i32.to_le_bytes()
}

fn main() -> Result<(), Error> {
  let mut map = SkipMap::with_comparator(4, int_compare)?;
  for (k, v) in (1i32..=5).zip([10.10f32, 20.20, 30.30, 40.40, 50.50]) {
    let _ = map.insert(&k.to_le_bytes(), v)?;
  }
  println!("Currently the size of the map is {}", map.len());

  let mut cursor = map.begin();
  if cursor.key(&map)? == Some(&1i32.to_le_bytes()[..]) {
    println!("Cursor is pointing to the 1st element");
  }

  cursor.increment(&map)?;
  if cursor.equals_predicate(&map, is_two)? {
    println!("Cursor is pointing to the 2nd element");
  }

  if cursor.peek_next(&map)? == Some(&3i32.to_le_bytes()[..]) {
    println!("The next element is the 3rd one");
  }

  // Removing another entry leaves the cursor where it is.
  map.remove_and_drop(&3i32.to_le_bytes());
  println!("After removing key 3 the cursor still holds {:?}", cursor.value(&map)?);

  // Removing the cursor's own entry invalidates it.
  map.remove_and_drop(&2i32.to_le_bytes());
  match cursor.value(&map) {
    Err(Error::InvalidatedCursor) => println!("The cursor was invalidated"),
    other => println!("Unexpected cursor state: {other:?}"),
  }

  let mut cursor = map.begin();
  while let Some((k, v)) = cursor.entry(&map)? {
    println!("{} => {v}", i32::from_le_bytes(k.try_into().unwrap()));
    cursor.increment(&map)?;
  }
  Ok(())
}

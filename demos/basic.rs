use core::cmp::Ordering;

use sklmap::{Builder, Error, SkipMap};

fn int_compare(a: &[u8], b: &[u8]) -> Ordering {
  let a = i32::from_le_bytes(a.try_into().unwrap());
  let b = i32::from_le_bytes(b.try_into().unwrap());
  a.cmp(&b)
}

fn main() -> Result<(), Error> {
  let mut map: SkipMap<f32, _> = Builder::new()
    .with_key_size(4)
    .with_comparator(int_compare)
    .build()?;

  for (k, v) in [(10i32, 10.10f32), (20, 20.20), (30, 30.30), (40, 40.40)] {
    let _ = map.insert(&k.to_le_bytes(), v)?;
  }

  if map.len() == 4 {
    println!("Currently the size of the map is 4");
  }

  if map.get(&30i32.to_le_bytes()) == Some(&30.30) {
    println!("Found the value with key 30");
  }

  if map.contains_key(&20i32.to_le_bytes()) {
    println!("Key 20 is in the map");
  }

  if map.remove(&40i32.to_le_bytes()).is_removed() {
    println!("Key 40 removed successfully");
  }

  println!(
    "height: {}, empty: {}, values: {:?}",
    map.height(),
    map.is_empty(),
    map.free()
  );
  Ok(())
}

//! Filling a `FixedList` to capacity:
//!
//! * Adding items until the list is full.
//! * Getting the rejected item back from the error.
//! * Freeing a slot and reusing it.

use fixed_list::FixedList;

fn main() {
    let mut list = FixedList::<String, 3>::new();

    for name in ["Alice", "Bob", "Charlie", "Dave"] {
        match list.queue(name.to_string()) {
            Ok(()) => println!("Added {name}, {} slots left", list.available()),
            Err(error) => println!("No room for {}: {error}", error.value()),
        }
    }

    // Removing an item frees its slot for the next insertion.
    if let Some(removed) = list.remove(&"Bob".to_string()) {
        println!("Removed {removed}");
    }

    list.push("Dave".to_string())
        .expect("we just freed a slot by removing an item");

    for name in &list {
        println!("In list: {name}");
    }
}

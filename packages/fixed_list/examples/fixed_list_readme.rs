//! Example that demonstrates the exact usage shown in the README.md file.
//!
//! This shows how to use `FixedList` as a stack and as a queue.

use fixed_list::FixedList;

fn main() {
    println!("=== Fixed List README Example ===");

    let mut list = FixedList::<i32, 20>::new();

    list.queue(111).unwrap();
    list.queue(222).unwrap();
    list.push(333).unwrap();

    println!("List contents: {list:?}");

    // The front of the list is where `push()` and `pop()` operate.
    let popped = list.pop();
    println!("Popped from the front: {popped:?}");
    assert_eq!(popped, Some(333));

    // The back of the list is where `queue()` and `dequeue()` operate.
    let dequeued = list.dequeue();
    println!("Dequeued from the back: {dequeued:?}");
    assert_eq!(dequeued, Some(222));

    println!(
        "List holds {} items with room for {} more",
        list.len(),
        list.available()
    );
    assert_eq!(list.len(), 1);
    assert_eq!(list.available(), 19);

    println!("README example completed successfully!");
}

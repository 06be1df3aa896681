//! A list with a fixed maximum number of items that never allocates memory.
//!
//! This crate provides [`FixedList`], a singly-linked list whose storage for all `CAPACITY` items
//! lives inline in the list value itself. It is meant for embedded and real-time code where heap
//! allocation is unavailable or unwelcome, or simply overkill. The price is that memory for the
//! full capacity is reserved for the lifetime of the list.
//!
//! # Key Features
//!
//! - **No allocation**: every operation works within the inline backing array
//! - **Stack and queue operations**: [`push()`](FixedList::push) and [`pop()`](FixedList::pop)
//!   at the front, [`queue()`](FixedList::queue) and [`dequeue()`](FixedList::dequeue) at the back
//! - **Removal by value**: [`remove()`](FixedList::remove) takes out the first matching item
//! - **Forward iteration**: [`Iter`], [`IterMut`], [`IntoIter`] and position [`Cursor`]s
//! - **Capacity checked at compile time**: a list with zero capacity does not compile
//! - **`no_std`**: only depends on `core`
//!
//! # How it works
//!
//! The backing array is a pool of slots. Unused slots form a stack threaded through the slots
//! themselves (an intrusive free list). Adding an item pops a slot from that stack, fills it and
//! links it into the list of used slots. Removing an item unlinks its slot and pushes it back
//! onto the free stack.
//!
//! Adding to a full list fails with a [`CapacityError`] that gives the rejected item back.
//! Removing from an empty list returns `None`.
//!
//! # Example
//!
//! ```rust
//! use fixed_list::FixedList;
//!
//! let mut list = FixedList::<i32, 20>::new();
//!
//! list.queue(111).unwrap();
//! list.queue(222).unwrap();
//! list.push(333).unwrap();
//!
//! // The list now contains 333, 111, 222.
//! assert_eq!(list.pop(), Some(333));
//! assert!(list.contains(&222));
//!
//! for item in &list {
//!     println!("{item}");
//! }
//! ```
//!
//! # Thread safety
//!
//! The list does no synchronization of its own. It is `Send` and `Sync` whenever the items are,
//! and all modifications require an exclusive reference, so sharing a list between threads
//! takes the usual wrapping in a `Mutex` or similar.

#![cfg_attr(not(test), no_std)]

mod cursor;
mod error;
mod fixed_list;
mod iter;
mod slot;

pub use cursor::*;
pub use error::*;
pub use fixed_list::*;
pub use iter::*;
pub(crate) use slot::*;

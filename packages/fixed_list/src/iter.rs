use core::any::type_name;
use core::iter::FusedIterator;
use core::marker::PhantomData;
use core::ptr::NonNull;

use crate::{FixedList, Slot};

/// Iterates over shared references to the items of a [`FixedList`], from front to back.
///
/// Created by [`FixedList::iter()`].
///
/// The list cannot be modified while the iterator is alive:
///
/// ```rust,compile_fail,E0502
/// use fixed_list::FixedList;
///
/// let mut list = FixedList::<i32, 8>::from_slice(&[1, 2, 3]);
///
/// for item in list.iter() {
///     if *item == 2 {
///         _ = list.pop();
///     }
/// }
/// ```
#[derive(Debug)]
pub struct Iter<'a, T, const CAPACITY: usize> {
    list: &'a FixedList<T, CAPACITY>,
    next: Option<usize>,
    remaining: usize,
}

impl<'a, T, const CAPACITY: usize> Iter<'a, T, CAPACITY> {
    pub(crate) fn new(list: &'a FixedList<T, CAPACITY>) -> Self {
        Self {
            list,
            next: list.used_head(),
            remaining: list.len(),
        }
    }
}

impl<'a, T, const CAPACITY: usize> Iterator for Iter<'a, T, CAPACITY> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.next?;
        let slot = self.list.slot(index);

        self.next = slot.forward();
        self.remaining = self
            .remaining
            .checked_sub(1)
            .expect("the used list is exactly as long as the used count");

        Some(slot.value())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T, const CAPACITY: usize> ExactSizeIterator for Iter<'_, T, CAPACITY> {}

impl<T, const CAPACITY: usize> FusedIterator for Iter<'_, T, CAPACITY> {}

impl<T, const CAPACITY: usize> Clone for Iter<'_, T, CAPACITY> {
    fn clone(&self) -> Self {
        Self {
            list: self.list,
            next: self.next,
            remaining: self.remaining,
        }
    }
}

/// Iterates over exclusive references to the items of a [`FixedList`], from front to back.
///
/// Created by [`FixedList::iter_mut()`].
///
/// The list cannot be touched in any other way while the iterator is alive:
///
/// ```rust,compile_fail,E0499
/// use fixed_list::FixedList;
///
/// let mut list = FixedList::<i32, 8>::from_slice(&[1, 2, 3]);
///
/// for item in list.iter_mut() {
///     *item += 1;
///     list.clear();
/// }
/// ```
#[derive(Debug)]
pub struct IterMut<'a, T, const CAPACITY: usize> {
    first_slot_ptr: NonNull<Slot<T>>,
    next: Option<usize>,
    remaining: usize,

    _list: PhantomData<&'a mut FixedList<T, CAPACITY>>,
}

impl<'a, T, const CAPACITY: usize> IterMut<'a, T, CAPACITY> {
    pub(crate) fn new(list: &'a mut FixedList<T, CAPACITY>) -> Self {
        let next = list.used_head();
        let remaining = list.len();

        Self {
            first_slot_ptr: NonNull::from(list.slots_mut()).cast::<Slot<T>>(),
            next,
            remaining,
            _list: PhantomData,
        }
    }
}

impl<'a, T, const CAPACITY: usize> Iterator for IterMut<'a, T, CAPACITY> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.next?;

        assert!(
            index < CAPACITY,
            "slot {index} index out of bounds in list of {}",
            type_name::<T>()
        );

        // SAFETY: The pointer came from an exclusive borrow of the slot array that we hold for
        // 'a and the index is within the array bounds (asserted above).
        let mut slot_ptr = unsafe { self.first_slot_ptr.add(index) };

        // SAFETY: The used list visits every slot at most once, so no two references we hand out
        // ever point to the same slot. Nothing else can touch the slots while we hold the borrow.
        let slot = unsafe { slot_ptr.as_mut() };

        self.next = slot.forward();
        self.remaining = self
            .remaining
            .checked_sub(1)
            .expect("the used list is exactly as long as the used count");

        Some(slot.value_mut())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T, const CAPACITY: usize> ExactSizeIterator for IterMut<'_, T, CAPACITY> {}

impl<T, const CAPACITY: usize> FusedIterator for IterMut<'_, T, CAPACITY> {}

// SAFETY: The iterator is equivalent to an exclusive reference to the list, which may move
// between threads if the items can.
unsafe impl<T: Send, const CAPACITY: usize> Send for IterMut<'_, T, CAPACITY> {}

// SAFETY: Shared access to the iterator gives no access to the items at all.
unsafe impl<T: Sync, const CAPACITY: usize> Sync for IterMut<'_, T, CAPACITY> {}

/// Moves the items out of a [`FixedList`], from front to back.
///
/// Created by calling `into_iter()` on a [`FixedList`].
#[derive(Debug)]
pub struct IntoIter<T, const CAPACITY: usize> {
    list: FixedList<T, CAPACITY>,
}

impl<T, const CAPACITY: usize> Iterator for IntoIter<T, CAPACITY> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.list.pop()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len(), Some(self.list.len()))
    }
}

impl<T, const CAPACITY: usize> ExactSizeIterator for IntoIter<T, CAPACITY> {}

impl<T, const CAPACITY: usize> FusedIterator for IntoIter<T, CAPACITY> {}

impl<T, const CAPACITY: usize> IntoIterator for FixedList<T, CAPACITY> {
    type Item = T;
    type IntoIter = IntoIter<T, CAPACITY>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { list: self }
    }
}

impl<'a, T, const CAPACITY: usize> IntoIterator for &'a FixedList<T, CAPACITY> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T, CAPACITY>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T, const CAPACITY: usize> IntoIterator for &'a mut FixedList<T, CAPACITY> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T, CAPACITY>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

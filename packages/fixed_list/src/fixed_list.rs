use core::any::type_name;
use core::array;
use core::fmt::{self, Debug, Formatter};

use crate::{CapacityError, Cursor, CursorMut, Iter, IterMut, Slot};

/// A list with a fixed maximum number of items that never allocates memory.
///
/// All `CAPACITY` slots are stored inline in the list itself, so the memory for every item the
/// list can ever hold is reserved for as long as the list exists. In exchange, no operation ever
/// touches the heap, which makes the list suitable for embedded and real-time code.
///
/// Items can be added at either end and removed from either end:
///
/// * [`push()`][1] and [`pop()`][2] add and remove at the front (stack-like).
/// * [`queue()`][3] adds at the back, so [`queue()`][3] followed by [`pop()`][2] is FIFO.
/// * [`dequeue()`][4] removes from the back.
/// * [`remove()`][5] removes the first item equal to a given value.
///
/// Adding an item to a full list fails with a [`CapacityError`] that hands the item back.
/// Removing from an empty list returns `None`.
///
/// # Internals
///
/// The slots form two singly-linked chains threaded through the backing array: a stack of free
/// slots and the list of used slots, for which both the head and the tail are tracked. Because
/// the links only point forward, removing from the back and removing by value require a scan
/// from the front. Everything else is O(1).
///
/// # Iteration
///
/// Use [`iter()`][6], [`iter_mut()`][7] or a [`Cursor`] from [`cursor_front()`][8]. All of these
/// borrow the list, so the list cannot be modified while they are alive.
///
/// # Example
///
/// ```rust
/// use fixed_list::FixedList;
///
/// let mut list = FixedList::<i32, 20>::new();
///
/// list.queue(111).unwrap();
/// list.queue(222).unwrap();
/// list.push(333).unwrap();
///
/// // The list now contains 333, 111, 222.
/// assert_eq!(list.iter().copied().collect::<Vec<_>>(), [333, 111, 222]);
///
/// assert_eq!(list.pop(), Some(333));
/// assert_eq!(list.dequeue(), Some(222));
/// assert_eq!(list.len(), 1);
/// assert_eq!(list.available(), 19);
/// ```
///
/// A list without any capacity is rejected at compile time:
///
/// ```rust,compile_fail
/// use fixed_list::FixedList;
///
/// let list = FixedList::<u32, 0>::new();
/// ```
///
/// [1]: Self::push
/// [2]: Self::pop
/// [3]: Self::queue
/// [4]: Self::dequeue
/// [5]: Self::remove
/// [6]: Self::iter
/// [7]: Self::iter_mut
/// [8]: Self::cursor_front
#[derive(Clone)]
pub struct FixedList<T, const CAPACITY: usize> {
    slots: [Slot<T>; CAPACITY],

    /// Head of the stack of free slots. The most recently freed slot is reused first.
    /// `None` if the list is full.
    free_head: Option<usize>,

    /// First slot of the used list, which is where `push()` and `pop()` operate.
    used_head: Option<usize>,

    /// Last slot of the used list, which is where `queue()` and `dequeue()` operate.
    used_tail: Option<usize>,

    used_count: usize,
}

impl<T, const CAPACITY: usize> FixedList<T, CAPACITY> {
    /// Creates an empty list.
    ///
    /// # Example
    ///
    /// ```rust
    /// use fixed_list::FixedList;
    ///
    /// let list = FixedList::<String, 8>::new();
    ///
    /// assert!(list.is_empty());
    /// assert_eq!(list.available(), 8);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        const {
            assert!(CAPACITY > 0, "FixedList must have non-zero capacity");
        }

        Self {
            slots: array::from_fn(|index| Slot::vacant(Self::following(index))),
            free_head: Some(0),
            used_head: None,
            used_tail: None,
            used_count: 0,
        }
    }

    /// Creates a list holding clones of the first `CAPACITY` values of `values`, in order.
    ///
    /// Values beyond the capacity of the list are ignored. Use [`collect()`][1] to build a list
    /// from owned values instead.
    ///
    /// # Example
    ///
    /// ```rust
    /// use fixed_list::FixedList;
    ///
    /// let list = FixedList::<u8, 2>::from_slice(&[1, 2, 3]);
    ///
    /// assert_eq!(list.len(), 2);
    /// assert_eq!(list.front(), Some(&1));
    /// assert_eq!(list.back(), Some(&2));
    /// ```
    ///
    /// [1]: Iterator::collect
    #[must_use]
    pub fn from_slice(values: &[T]) -> Self
    where
        T: Clone,
    {
        values.iter().cloned().collect()
    }

    /// The index that follows `index` when slots are chained in array order.
    fn following(index: usize) -> Option<usize> {
        index.checked_add(1).filter(|next| *next < CAPACITY)
    }

    /// The number of items in the list.
    #[must_use]
    pub fn len(&self) -> usize {
        self.used_count
    }

    /// The number of items that can still be added before the list is full.
    #[must_use]
    pub fn available(&self) -> usize {
        CAPACITY
            .checked_sub(self.used_count)
            .expect("used count can never exceed capacity")
    }

    /// The maximum number of items the list can hold.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        CAPACITY
    }

    /// Whether the list holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.used_head.is_none()
    }

    /// Whether every slot of the list is in use.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.free_head.is_none()
    }

    /// Adds an item to the front of the list.
    ///
    /// # Errors
    ///
    /// Returns the item inside a [`CapacityError`] if the list is full. The list is not modified.
    ///
    /// # Example
    ///
    /// ```rust
    /// use fixed_list::FixedList;
    ///
    /// let mut list = FixedList::<i32, 2>::new();
    ///
    /// list.push(111).unwrap();
    /// list.push(222).unwrap();
    /// assert!(list.push(333).is_err());
    ///
    /// assert_eq!(list.pop(), Some(222));
    /// assert_eq!(list.pop(), Some(111));
    /// assert_eq!(list.pop(), None);
    /// ```
    pub fn push(&mut self, value: T) -> Result<(), CapacityError<T>> {
        let Some(index) = self.take_free_slot() else {
            return Err(CapacityError::new(value));
        };

        let old_head = self.used_head;
        self.slot_mut(index).occupy(value, old_head);

        self.used_head = Some(index);

        if self.used_tail.is_none() {
            self.used_tail = Some(index);
        }

        self.count_added();

        #[cfg(debug_assertions)]
        self.integrity_check();

        Ok(())
    }

    /// Adds an item to the back of the list.
    ///
    /// # Errors
    ///
    /// Returns the item inside a [`CapacityError`] if the list is full. The list is not modified.
    ///
    /// # Example
    ///
    /// ```rust
    /// use fixed_list::FixedList;
    ///
    /// let mut list = FixedList::<i32, 20>::new();
    ///
    /// list.queue(22).unwrap();
    /// list.queue(33).unwrap();
    /// list.queue(44).unwrap();
    ///
    /// assert_eq!(list.pop(), Some(22));
    /// assert_eq!(list.pop(), Some(33));
    /// assert_eq!(list.pop(), Some(44));
    /// ```
    pub fn queue(&mut self, value: T) -> Result<(), CapacityError<T>> {
        let Some(index) = self.take_free_slot() else {
            return Err(CapacityError::new(value));
        };

        self.slot_mut(index).occupy(value, None);

        match self.used_tail {
            Some(old_tail) => self.slot_mut(old_tail).set_forward(Some(index)),
            None => self.used_head = Some(index),
        }

        self.used_tail = Some(index);

        self.count_added();

        #[cfg(debug_assertions)]
        self.integrity_check();

        Ok(())
    }

    /// Removes the item at the front of the list and returns it.
    ///
    /// Returns `None` if the list is empty.
    pub fn pop(&mut self) -> Option<T> {
        let head = self.used_head?;

        Some(self.take(None, head))
    }

    /// Removes the item at the back of the list and returns it.
    ///
    /// Returns `None` if the list is empty.
    ///
    /// This is O(n) because the predecessor of the last item has to be found by walking the
    /// list from the front.
    ///
    /// # Example
    ///
    /// ```rust
    /// use fixed_list::FixedList;
    ///
    /// let mut list = FixedList::<i32, 20>::new();
    ///
    /// list.push(22).unwrap();
    /// list.push(33).unwrap();
    /// list.push(44).unwrap();
    ///
    /// assert_eq!(list.dequeue(), Some(22));
    /// assert_eq!(list.dequeue(), Some(33));
    /// assert_eq!(list.dequeue(), Some(44));
    /// assert_eq!(list.dequeue(), None);
    /// ```
    pub fn dequeue(&mut self) -> Option<T> {
        let tail = self.used_tail?;

        let (predecessor, _) = self
            .links()
            .find(|&(_, index)| index == tail)
            .expect("the tail is always reachable from the head");

        Some(self.take(predecessor, tail))
    }

    /// Removes the first item that is equal to `value` and returns it.
    ///
    /// Returns `None` and leaves the list unchanged if no item matches. At most one item is
    /// removed even if several are equal to `value`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use fixed_list::FixedList;
    ///
    /// let mut list: FixedList<i32, 4> = [1, 2, 1].into_iter().collect();
    ///
    /// assert_eq!(list.remove(&1), Some(1));
    /// assert!(list.contains(&1));
    /// assert_eq!(list.remove(&5), None);
    /// assert_eq!(list.len(), 2);
    /// ```
    pub fn remove(&mut self, value: &T) -> Option<T>
    where
        T: PartialEq,
    {
        let (predecessor, index) = self
            .links()
            .find(|&(_, index)| self.slot(index).value() == value)?;

        Some(self.take(predecessor, index))
    }

    /// Whether any item in the list is equal to `value`.
    #[must_use]
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.iter().any(|item| item == value)
    }

    /// Removes all items from the list, dropping them.
    pub fn clear(&mut self) {
        for (index, slot) in self.slots.iter_mut().enumerate() {
            slot.reset(Self::following(index));
        }

        self.free_head = Some(0);
        self.used_head = None;
        self.used_tail = None;
        self.used_count = 0;

        #[cfg(debug_assertions)]
        self.integrity_check();
    }

    /// The item at the front of the list, if any.
    #[must_use]
    pub fn front(&self) -> Option<&T> {
        self.used_head.map(|index| self.slot(index).value())
    }

    /// The item at the front of the list, if any, for modification in place.
    #[must_use]
    pub fn front_mut(&mut self) -> Option<&mut T> {
        let head = self.used_head?;
        Some(self.slot_mut(head).value_mut())
    }

    /// The item at the back of the list, if any.
    #[must_use]
    pub fn back(&self) -> Option<&T> {
        self.used_tail.map(|index| self.slot(index).value())
    }

    /// The item at the back of the list, if any, for modification in place.
    #[must_use]
    pub fn back_mut(&mut self) -> Option<&mut T> {
        let tail = self.used_tail?;
        Some(self.slot_mut(tail).value_mut())
    }

    /// Iterates over the items from front to back.
    pub fn iter(&self) -> Iter<'_, T, CAPACITY> {
        Iter::new(self)
    }

    /// Iterates over the items from front to back, allowing them to be modified in place.
    ///
    /// # Example
    ///
    /// ```rust
    /// use fixed_list::FixedList;
    ///
    /// let mut list = FixedList::<i32, 4>::from_slice(&[1, 2, 3]);
    ///
    /// for item in list.iter_mut() {
    ///     *item *= 10;
    /// }
    ///
    /// assert_eq!(list.iter().copied().collect::<Vec<_>>(), [10, 20, 30]);
    /// ```
    pub fn iter_mut(&mut self) -> IterMut<'_, T, CAPACITY> {
        IterMut::new(self)
    }

    /// A cursor positioned at the front of the list.
    ///
    /// If the list is empty, this is equal to [`cursor_end()`][1].
    ///
    /// [1]: Self::cursor_end
    #[must_use]
    pub fn cursor_front(&self) -> Cursor<'_, T, CAPACITY> {
        Cursor::new(self, self.used_head)
    }

    /// A cursor positioned past the back of the list.
    #[must_use]
    pub fn cursor_end(&self) -> Cursor<'_, T, CAPACITY> {
        Cursor::new(self, None)
    }

    /// A cursor positioned at the front of the list that can modify the items it visits.
    #[must_use]
    pub fn cursor_front_mut(&mut self) -> CursorMut<'_, T, CAPACITY> {
        let head = self.used_head;
        CursorMut::new(self, head)
    }

    #[must_use]
    pub(crate) fn used_head(&self) -> Option<usize> {
        self.used_head
    }

    #[must_use]
    pub(crate) fn slots_mut(&mut self) -> &mut [Slot<T>; CAPACITY] {
        &mut self.slots
    }

    /// # Panics
    ///
    /// Panics if the index is out of bounds.
    #[must_use]
    pub(crate) fn slot(&self, index: usize) -> &Slot<T> {
        self.slots.get(index).unwrap_or_else(|| {
            panic!(
                "slot {index} index out of bounds in list of {}",
                type_name::<T>()
            )
        })
    }

    /// # Panics
    ///
    /// Panics if the index is out of bounds.
    #[must_use]
    pub(crate) fn slot_mut(&mut self, index: usize) -> &mut Slot<T> {
        self.slots.get_mut(index).unwrap_or_else(|| {
            panic!(
                "slot {index} index out of bounds in list of {}",
                type_name::<T>()
            )
        })
    }

    /// Walks the used list, yielding each slot index together with the index of its predecessor.
    fn links(&self) -> Links<'_, T, CAPACITY> {
        Links {
            list: self,
            previous: None,
            current: self.used_head,
        }
    }

    /// Pops a slot off the free stack. The caller is responsible for linking it into the used
    /// list.
    fn take_free_slot(&mut self) -> Option<usize> {
        let index = self.free_head?;
        self.free_head = self.slot(index).forward();
        Some(index)
    }

    fn count_added(&mut self) {
        self.used_count = self
            .used_count
            .checked_add(1)
            .expect("guarded by the free stack having had a slot to give");
    }

    /// Unlinks a slot from the used list, pushes it onto the free stack and returns its value.
    fn take(&mut self, predecessor: Option<usize>, index: usize) -> T {
        let forward = self.slot(index).forward();

        match predecessor {
            Some(predecessor) => self.slot_mut(predecessor).set_forward(forward),
            None => self.used_head = forward,
        }

        if self.used_tail == Some(index) {
            self.used_tail = predecessor;
        }

        let free_head = self.free_head;
        let value = self.slot_mut(index).vacate(free_head);
        self.free_head = Some(index);

        self.used_count = self
            .used_count
            .checked_sub(1)
            .expect("the slot was on the used list so the count must be non-zero");

        #[cfg(debug_assertions)]
        self.integrity_check();

        value
    }

    #[cfg_attr(test, mutants::skip)] // This is essentially test logic, mutation is meaningless.
    #[cfg(debug_assertions)]
    pub(crate) fn integrity_check(&self) {
        let mut observed_linked = [false; CAPACITY];

        let mut observe = |index: usize| {
            let linked = observed_linked.get_mut(index).unwrap_or_else(|| {
                panic!(
                    "link to out-of-bounds slot {index} in list of {}",
                    type_name::<T>()
                )
            });

            assert!(
                !*linked,
                "slot {index} is linked into a chain more than once in list of {}",
                type_name::<T>()
            );

            *linked = true;
        };

        let mut observed_used_count: usize = 0;
        let mut observed_tail = None;
        let mut next = self.used_head;

        while let Some(index) = next {
            observe(index);

            let slot = self.slot(index);

            assert!(
                slot.is_occupied(),
                "slot {index} is on the used list but holds no value in list of {}",
                type_name::<T>()
            );

            observed_used_count = observed_used_count
                .checked_add(1)
                .expect("guarded by each slot being observed at most once");
            observed_tail = Some(index);
            next = slot.forward();
        }

        assert!(
            self.used_tail == observed_tail,
            "self.used_tail {:?} does not match the observed tail {:?} in list of {}",
            self.used_tail,
            observed_tail,
            type_name::<T>()
        );

        assert!(
            self.used_count == observed_used_count,
            "self.used_count {} does not match the observed used count {} in list of {}",
            self.used_count,
            observed_used_count,
            type_name::<T>()
        );

        let mut observed_free_count: usize = 0;
        let mut next = self.free_head;

        while let Some(index) = next {
            observe(index);

            let slot = self.slot(index);

            assert!(
                !slot.is_occupied(),
                "slot {index} is on the free stack but holds a value in list of {}",
                type_name::<T>()
            );

            observed_free_count = observed_free_count
                .checked_add(1)
                .expect("guarded by each slot being observed at most once");
            next = slot.forward();
        }

        assert!(
            observed_used_count.checked_add(observed_free_count) == Some(CAPACITY),
            "{observed_used_count} used and {observed_free_count} free slots do not add up to capacity {CAPACITY} in list of {}",
            type_name::<T>()
        );
    }
}

impl<T, const CAPACITY: usize> Default for FixedList<T, CAPACITY> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const CAPACITY: usize> FromIterator<T> for FixedList<T, CAPACITY> {
    /// Collects the first `CAPACITY` values of the iterator, in order. Any further values are
    /// left in the iterator.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();

        for value in iter.into_iter().take(CAPACITY) {
            if list.queue(value).is_err() {
                unreachable!("we never take more than CAPACITY values into an empty list");
            }
        }

        list
    }
}

impl<T: Debug, const CAPACITY: usize> Debug for FixedList<T, CAPACITY> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq, const CAPACITY: usize> PartialEq for FixedList<T, CAPACITY> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq, const CAPACITY: usize> Eq for FixedList<T, CAPACITY> {}

/// Walks the used list of a [`FixedList`], yielding `(predecessor, index)` pairs.
#[derive(Debug)]
struct Links<'a, T, const CAPACITY: usize> {
    list: &'a FixedList<T, CAPACITY>,
    previous: Option<usize>,
    current: Option<usize>,
}

impl<T, const CAPACITY: usize> Iterator for Links<'_, T, CAPACITY> {
    type Item = (Option<usize>, usize);

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.current?;
        let predecessor = self.previous;

        self.previous = Some(index);
        self.current = self.list.slot(index).forward();

        Some((predecessor, index))
    }
}

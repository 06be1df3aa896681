use core::fmt::{self, Debug, Formatter};
use core::ptr;

use crate::FixedList;

/// A position in a [`FixedList`] that can only move from front to back.
///
/// A cursor either points at an item or is at the end, one step past the last item. Moving a
/// cursor that is already at the end leaves it at the end.
///
/// Cursors are cheap to copy. Two cursors are equal if they point at the same item of the same
/// list, or if both are at the end.
///
/// The cursor borrows the list, so the list cannot be modified while the cursor exists.
///
/// # Example
///
/// ```rust
/// use fixed_list::FixedList;
///
/// let list = FixedList::<i32, 20>::from_slice(&[111, 222, 333]);
///
/// let mut cursor = list.cursor_front();
/// assert_eq!(cursor.current(), Some(&111));
///
/// cursor.move_next();
/// assert_eq!(cursor.current(), Some(&222));
///
/// cursor.advance(15);
/// assert_eq!(cursor, list.cursor_end());
/// assert_eq!(cursor.current(), None);
/// ```
///
/// Modifying the list while a cursor into it is still in use does not compile:
///
/// ```rust,compile_fail,E0502
/// use fixed_list::FixedList;
///
/// let mut list = FixedList::<i32, 20>::from_slice(&[111, 222, 333]);
///
/// let cursor = list.cursor_front();
/// list.push(444).unwrap();
/// assert_eq!(cursor.current(), Some(&111));
/// ```
pub struct Cursor<'a, T, const CAPACITY: usize> {
    list: &'a FixedList<T, CAPACITY>,

    /// Index of the slot we point at, `None` once we are past the back of the list.
    position: Option<usize>,
}

impl<'a, T, const CAPACITY: usize> Cursor<'a, T, CAPACITY> {
    #[must_use]
    pub(crate) fn new(list: &'a FixedList<T, CAPACITY>, position: Option<usize>) -> Self {
        Self { list, position }
    }

    /// The item the cursor points at, or `None` if the cursor is at the end.
    #[must_use]
    pub fn current(&self) -> Option<&'a T> {
        let list = self.list;
        self.position.map(|index| list.slot(index).value())
    }

    /// Whether the cursor is past the back of the list.
    #[must_use]
    pub fn is_end(&self) -> bool {
        self.position.is_none()
    }

    /// Moves the cursor to the next item, or to the end if it points at the last item.
    pub fn move_next(&mut self) {
        if let Some(index) = self.position {
            self.position = self.list.slot(index).forward();
        }
    }

    /// Moves the cursor forward by up to `steps` items, stopping at the end.
    pub fn advance(&mut self, steps: usize) {
        for _ in 0..steps {
            if self.is_end() {
                break;
            }

            self.move_next();
        }
    }
}

impl<T, const CAPACITY: usize> Clone for Cursor<'_, T, CAPACITY> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, const CAPACITY: usize> Copy for Cursor<'_, T, CAPACITY> {}

impl<T, const CAPACITY: usize> PartialEq for Cursor<'_, T, CAPACITY> {
    fn eq(&self, other: &Self) -> bool {
        match (self.position, other.position) {
            (None, None) => true,
            (Some(a), Some(b)) => a == b && ptr::eq(self.list, other.list),
            _ => false,
        }
    }
}

impl<T, const CAPACITY: usize> Eq for Cursor<'_, T, CAPACITY> {}

impl<T, const CAPACITY: usize> Debug for Cursor<'_, T, CAPACITY> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("position", &self.position)
            .finish_non_exhaustive()
    }
}

/// A position in a [`FixedList`] that can only move from front to back and can modify the item
/// it points at.
///
/// Has the same movement rules as [`Cursor`].
///
/// # Example
///
/// ```rust
/// use fixed_list::FixedList;
///
/// let mut list = FixedList::<i32, 4>::from_slice(&[1, 2, 3]);
///
/// let mut cursor = list.cursor_front_mut();
/// cursor.move_next();
///
/// if let Some(item) = cursor.current_mut() {
///     *item = 20;
/// }
///
/// assert_eq!(list.iter().copied().collect::<Vec<_>>(), [1, 20, 3]);
/// ```
///
/// The cursor holds an exclusive borrow, so the list cannot be cleared under it:
///
/// ```rust,compile_fail,E0499
/// use fixed_list::FixedList;
///
/// let mut list = FixedList::<i32, 4>::from_slice(&[1, 2, 3]);
///
/// let mut cursor = list.cursor_front_mut();
/// list.clear();
/// cursor.move_next();
/// ```
pub struct CursorMut<'a, T, const CAPACITY: usize> {
    list: &'a mut FixedList<T, CAPACITY>,
    position: Option<usize>,
}

impl<'a, T, const CAPACITY: usize> CursorMut<'a, T, CAPACITY> {
    #[must_use]
    pub(crate) fn new(list: &'a mut FixedList<T, CAPACITY>, position: Option<usize>) -> Self {
        Self { list, position }
    }

    /// The item the cursor points at, or `None` if the cursor is at the end.
    #[must_use]
    pub fn current(&self) -> Option<&T> {
        self.position.map(|index| self.list.slot(index).value())
    }

    /// The item the cursor points at, or `None` if the cursor is at the end.
    #[must_use]
    pub fn current_mut(&mut self) -> Option<&mut T> {
        let index = self.position?;
        Some(self.list.slot_mut(index).value_mut())
    }

    /// Whether the cursor is past the back of the list.
    #[must_use]
    pub fn is_end(&self) -> bool {
        self.position.is_none()
    }

    /// Moves the cursor to the next item, or to the end if it points at the last item.
    pub fn move_next(&mut self) {
        if let Some(index) = self.position {
            self.position = self.list.slot(index).forward();
        }
    }

    /// Moves the cursor forward by up to `steps` items, stopping at the end.
    pub fn advance(&mut self, steps: usize) {
        for _ in 0..steps {
            if self.is_end() {
                break;
            }

            self.move_next();
        }
    }
}

impl<T, const CAPACITY: usize> Debug for CursorMut<'_, T, CAPACITY> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("CursorMut")
            .field("position", &self.position)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use static_assertions::{assert_impl_all, assert_not_impl_any};

    use super::*;

    assert_impl_all!(Cursor<'static, u32, 4>: Send, Sync, Copy, Eq);
    assert_impl_all!(CursorMut<'static, u32, 4>: Send, Sync);
    assert_not_impl_any!(CursorMut<'static, u32, 4>: Clone);

    #[test]
    fn front_cursor_of_empty_list_is_end() {
        let list = FixedList::<u32, 4>::new();

        let cursor = list.cursor_front();

        assert!(cursor.is_end());
        assert_eq!(cursor, list.cursor_end());
        assert_eq!(cursor.current(), None);
    }

    #[test]
    fn front_cursor_of_non_empty_list_is_not_end() {
        let list = FixedList::<u32, 4>::from_slice(&[1]);

        assert_ne!(list.cursor_front(), list.cursor_end());
        assert_eq!(list.cursor_front(), list.cursor_front());
    }

    #[test]
    fn copy_keeps_old_position() {
        let list = FixedList::<u32, 4>::from_slice(&[1, 2, 3]);

        let mut cursor = list.cursor_front();
        let before = cursor;
        cursor.move_next();

        assert_eq!(before.current(), Some(&1));
        assert_eq!(cursor.current(), Some(&2));
        assert_ne!(before, cursor);
    }

    #[test]
    fn move_next_at_end_is_noop() {
        let list = FixedList::<u32, 4>::from_slice(&[1]);

        let mut cursor = list.cursor_front();
        cursor.move_next();
        assert!(cursor.is_end());

        cursor.move_next();
        assert!(cursor.is_end());
    }

    #[test]
    fn advance_is_bounded_by_end() {
        let list = FixedList::<u32, 8>::from_slice(&[1, 2, 3, 4]);

        let mut cursor = list.cursor_front();
        cursor.advance(2);
        assert_eq!(cursor.current(), Some(&3));

        cursor.advance(100);
        assert_eq!(cursor, list.cursor_end());

        cursor.advance(1);
        assert!(cursor.is_end());
    }

    #[test]
    fn advance_zero_stays_put() {
        let list = FixedList::<u32, 8>::from_slice(&[1, 2]);

        let mut cursor = list.cursor_front();
        cursor.advance(0);

        assert_eq!(cursor, list.cursor_front());
    }

    #[test]
    fn cursors_of_different_lists_differ_unless_at_end() {
        let a = FixedList::<u32, 4>::from_slice(&[1]);
        let b = FixedList::<u32, 4>::from_slice(&[1]);

        assert_ne!(a.cursor_front(), b.cursor_front());
        assert_eq!(a.cursor_end(), b.cursor_end());
    }

    #[test]
    fn cursor_visits_len_items() {
        let mut list = FixedList::<u32, 8>::new();
        list.queue(2).unwrap();
        list.push(1).unwrap();
        list.queue(3).unwrap();

        let mut visited = 0_usize;
        let mut cursor = list.cursor_front();

        while cursor != list.cursor_end() {
            visited = visited.checked_add(1).unwrap();
            cursor.move_next();
        }

        assert_eq!(visited, list.len());
    }

    #[test]
    fn cursor_mut_modifies_items() {
        let mut list = FixedList::<u32, 8>::from_slice(&[1, 2, 3]);

        let mut cursor = list.cursor_front_mut();
        while let Some(item) = cursor.current_mut() {
            *item = item.wrapping_add(10);
            cursor.move_next();
        }

        assert!(cursor.is_end());
        assert_eq!(cursor.current(), None);
        assert_eq!(list.iter().copied().collect::<Vec<_>>(), [11, 12, 13]);
    }

    #[test]
    fn cursor_mut_advance_is_bounded() {
        let mut list = FixedList::<u32, 8>::from_slice(&[1, 2, 3]);

        let mut cursor = list.cursor_front_mut();
        cursor.advance(2);
        assert_eq!(cursor.current(), Some(&3));

        cursor.advance(5);
        assert!(cursor.is_end());
        assert_eq!(cursor.current_mut(), None);
    }

    #[test]
    fn debug_shows_position() {
        let list = FixedList::<u32, 8>::from_slice(&[1]);

        assert_eq!(
            format!("{:?}", list.cursor_front()),
            "Cursor { position: Some(0), .. }"
        );
    }
}

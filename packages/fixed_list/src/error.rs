use thiserror::Error;

/// Returned by [`FixedList::push()`][1] and [`FixedList::queue()`][2] when every slot of the
/// list is already in use.
///
/// The rejected value is handed back to the caller intact and the list is left unchanged.
///
/// # Example
///
/// ```rust
/// use fixed_list::FixedList;
///
/// let mut list = FixedList::<String, 1>::new();
/// list.push("first".to_string()).unwrap();
///
/// let error = list.push("second".to_string()).unwrap_err();
/// assert_eq!(error.into_value(), "second");
/// assert_eq!(list.len(), 1);
/// ```
///
/// [1]: crate::FixedList::push
/// [2]: crate::FixedList::queue
#[derive(Debug, Error, Eq, PartialEq)]
#[error("the list is full, no free slot is available for another item")]
pub struct CapacityError<T> {
    value: T,
}

impl<T> CapacityError<T> {
    #[must_use]
    pub(crate) fn new(value: T) -> Self {
        Self { value }
    }

    /// Borrows the value that could not be inserted.
    #[must_use]
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Takes back ownership of the value that could not be inserted.
    #[must_use]
    pub fn into_value(self) -> T {
        self.value
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error as _;
    use std::fmt::Debug;

    use static_assertions::assert_impl_all;

    use super::*;

    assert_impl_all!(CapacityError<u32>: Send, Sync, Debug);

    #[test]
    fn returns_rejected_value() {
        let error = CapacityError::new(42_u32);

        assert_eq!(*error.value(), 42);
        assert_eq!(error.into_value(), 42);
    }

    #[test]
    fn is_error_with_message() {
        let error = CapacityError::new(7_u8);

        assert!(error.source().is_none());
        assert!(error.to_string().contains("full"));
    }
}

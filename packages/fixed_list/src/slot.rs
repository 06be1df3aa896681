use core::any::type_name;
use core::mem;

/// One cell of the backing array of a [`FixedList`][crate::FixedList].
///
/// A slot is always a member of exactly one chain: the free stack (no value) or the used list
/// (holds a value). The `forward` link points to the next slot of that same chain.
#[derive(Clone, Debug)]
pub(crate) struct Slot<T> {
    forward: Option<usize>,
    value: Option<T>,
}

impl<T> Slot<T> {
    #[must_use]
    pub(crate) fn vacant(forward: Option<usize>) -> Self {
        Self {
            forward,
            value: None,
        }
    }

    #[must_use]
    pub(crate) fn forward(&self) -> Option<usize> {
        self.forward
    }

    pub(crate) fn set_forward(&mut self, forward: Option<usize>) {
        self.forward = forward;
    }

    #[cfg(any(debug_assertions, test))]
    #[must_use]
    pub(crate) fn is_occupied(&self) -> bool {
        self.value.is_some()
    }

    /// Stores a value in a slot that was just taken off the free stack.
    ///
    /// # Panics
    ///
    /// Panics if the slot already holds a value.
    pub(crate) fn occupy(&mut self, value: T, forward: Option<usize>) {
        let previous = self.value.replace(value);

        assert!(
            previous.is_none(),
            "occupied a slot that already held a value in list of {}",
            type_name::<T>()
        );

        self.forward = forward;
    }

    /// Moves the value out of the slot and links the now-vacant slot to `forward`.
    ///
    /// # Panics
    ///
    /// Panics if the slot does not hold a value.
    pub(crate) fn vacate(&mut self, forward: Option<usize>) -> T {
        self.forward = forward;

        self.value.take().unwrap_or_else(|| {
            panic!(
                "vacated a slot that held no value in list of {}",
                type_name::<T>()
            )
        })
    }

    /// Drops any value the slot holds and links it to `forward`.
    pub(crate) fn reset(&mut self, forward: Option<usize>) {
        drop(mem::replace(self, Self::vacant(forward)));
    }

    /// # Panics
    ///
    /// Panics if the slot does not hold a value.
    #[must_use]
    pub(crate) fn value(&self) -> &T {
        self.value.as_ref().unwrap_or_else(|| {
            panic!(
                "read a slot that held no value in list of {}",
                type_name::<T>()
            )
        })
    }

    /// # Panics
    ///
    /// Panics if the slot does not hold a value.
    #[must_use]
    pub(crate) fn value_mut(&mut self) -> &mut T {
        self.value.as_mut().unwrap_or_else(|| {
            panic!(
                "wrote a slot that held no value in list of {}",
                type_name::<T>()
            )
        })
    }
}

//! The positional (list-like) capability set.

use std::collections::VecDeque;

use crate::error::TriggerError;
use crate::result::TriggerResult;
use crate::traits::collection::Collection;

/// An ordered container addressable by index.
///
/// Out-of-range access is reported as
/// [`ErrorKind::IndexOutOfBounds`](crate::error::ErrorKind::IndexOutOfBounds).
pub trait IndexedCollection<E>: Collection<E> {
    /// Element at `index`.
    fn get(&self, index: usize) -> TriggerResult<&E>;

    /// Insert `element` at `index`, shifting later elements right.
    /// `index == len` appends.
    fn insert(&mut self, index: usize, element: E) -> TriggerResult<()>;

    /// Remove and return the element at `index`.
    fn remove_at(&mut self, index: usize) -> TriggerResult<E>;

    /// Replace the element at `index`, returning the previous one.
    fn set(&mut self, index: usize, element: E) -> TriggerResult<E>;

    /// Position of the first element equal to `element`.
    fn index_of(&self, element: &E) -> Option<usize>;
}

impl<E, C> IndexedCollection<E> for &mut C
where
    C: IndexedCollection<E> + ?Sized,
{
    fn get(&self, index: usize) -> TriggerResult<&E> {
        (**self).get(index)
    }

    fn insert(&mut self, index: usize, element: E) -> TriggerResult<()> {
        (**self).insert(index, element)
    }

    fn remove_at(&mut self, index: usize) -> TriggerResult<E> {
        (**self).remove_at(index)
    }

    fn set(&mut self, index: usize, element: E) -> TriggerResult<E> {
        (**self).set(index, element)
    }

    fn index_of(&self, element: &E) -> Option<usize> {
        (**self).index_of(element)
    }
}

impl<E: Clone + PartialEq> IndexedCollection<E> for Vec<E> {
    fn get(&self, index: usize) -> TriggerResult<&E> {
        self.as_slice()
            .get(index)
            .ok_or_else(|| TriggerError::index_out_of_bounds(index, Vec::len(self)))
    }

    fn insert(&mut self, index: usize, element: E) -> TriggerResult<()> {
        if index > Vec::len(self) {
            return Err(TriggerError::index_out_of_bounds(index, Vec::len(self)));
        }
        Vec::insert(self, index, element);
        Ok(())
    }

    fn remove_at(&mut self, index: usize) -> TriggerResult<E> {
        if index >= Vec::len(self) {
            return Err(TriggerError::index_out_of_bounds(index, Vec::len(self)));
        }
        Ok(Vec::remove(self, index))
    }

    fn set(&mut self, index: usize, element: E) -> TriggerResult<E> {
        let len = Vec::len(self);
        let slot = self
            .as_mut_slice()
            .get_mut(index)
            .ok_or_else(|| TriggerError::index_out_of_bounds(index, len))?;
        Ok(std::mem::replace(slot, element))
    }

    fn index_of(&self, element: &E) -> Option<usize> {
        self.as_slice().iter().position(|e| e == element)
    }
}

impl<E: Clone + PartialEq> IndexedCollection<E> for VecDeque<E> {
    fn get(&self, index: usize) -> TriggerResult<&E> {
        VecDeque::get(self, index)
            .ok_or_else(|| TriggerError::index_out_of_bounds(index, VecDeque::len(self)))
    }

    fn insert(&mut self, index: usize, element: E) -> TriggerResult<()> {
        if index > VecDeque::len(self) {
            return Err(TriggerError::index_out_of_bounds(index, VecDeque::len(self)));
        }
        VecDeque::insert(self, index, element);
        Ok(())
    }

    fn remove_at(&mut self, index: usize) -> TriggerResult<E> {
        let len = VecDeque::len(self);
        VecDeque::remove(self, index).ok_or_else(|| TriggerError::index_out_of_bounds(index, len))
    }

    fn set(&mut self, index: usize, element: E) -> TriggerResult<E> {
        let len = VecDeque::len(self);
        let slot = VecDeque::get_mut(self, index)
            .ok_or_else(|| TriggerError::index_out_of_bounds(index, len))?;
        Ok(std::mem::replace(slot, element))
    }

    fn index_of(&self, element: &E) -> Option<usize> {
        VecDeque::iter(self).position(|e| e == element)
    }
}

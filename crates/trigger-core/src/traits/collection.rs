//! The generic container capability set.

use std::collections::{BTreeSet, HashSet, VecDeque};
use std::hash::{BuildHasher, Hash};

use crate::result::TriggerResult;

/// Capability set shared by every container that can be decorated.
///
/// Mutators return [`TriggerResult`] so a decorated container, whose hooks may
/// fail, exposes the same signatures as the plain container underneath. The
/// boolean result follows the usual "did the container change" convention.
pub trait Collection<E> {
    /// Number of elements.
    fn len(&self) -> usize;

    /// Whether the container holds no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether `element` is present.
    fn contains(&self, element: &E) -> bool;

    /// Iterate over the elements in the container's own order.
    fn iter(&self) -> Box<dyn Iterator<Item = &E> + '_>;

    /// Remove every element.
    fn clear(&mut self);

    /// Add one element. Returns `true` if the container changed.
    fn add(&mut self, element: E) -> TriggerResult<bool>;

    /// Remove one occurrence of `element`. Returns `true` if it was present.
    fn remove(&mut self, element: &E) -> TriggerResult<bool>;

    /// Add every element of `elements`. Returns `true` if the container changed.
    fn add_all(&mut self, elements: &[E]) -> TriggerResult<bool>;

    /// Remove every element equal to one in `elements`. Returns `true` if the
    /// container changed.
    fn remove_all(&mut self, elements: &[E]) -> TriggerResult<bool>;
}

impl<E, C> Collection<E> for &mut C
where
    C: Collection<E> + ?Sized,
{
    fn len(&self) -> usize {
        (**self).len()
    }

    fn is_empty(&self) -> bool {
        (**self).is_empty()
    }

    fn contains(&self, element: &E) -> bool {
        (**self).contains(element)
    }

    fn iter(&self) -> Box<dyn Iterator<Item = &E> + '_> {
        (**self).iter()
    }

    fn clear(&mut self) {
        (**self).clear()
    }

    fn add(&mut self, element: E) -> TriggerResult<bool> {
        (**self).add(element)
    }

    fn remove(&mut self, element: &E) -> TriggerResult<bool> {
        (**self).remove(element)
    }

    fn add_all(&mut self, elements: &[E]) -> TriggerResult<bool> {
        (**self).add_all(elements)
    }

    fn remove_all(&mut self, elements: &[E]) -> TriggerResult<bool> {
        (**self).remove_all(elements)
    }
}

impl<E: Clone + PartialEq> Collection<E> for Vec<E> {
    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn contains(&self, element: &E) -> bool {
        self.as_slice().contains(element)
    }

    fn iter(&self) -> Box<dyn Iterator<Item = &E> + '_> {
        Box::new(self.as_slice().iter())
    }

    fn clear(&mut self) {
        Vec::clear(self)
    }

    fn add(&mut self, element: E) -> TriggerResult<bool> {
        self.push(element);
        Ok(true)
    }

    fn remove(&mut self, element: &E) -> TriggerResult<bool> {
        match self.as_slice().iter().position(|e| e == element) {
            Some(index) => {
                Vec::remove(self, index);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn add_all(&mut self, elements: &[E]) -> TriggerResult<bool> {
        self.extend_from_slice(elements);
        Ok(!elements.is_empty())
    }

    fn remove_all(&mut self, elements: &[E]) -> TriggerResult<bool> {
        let before = Vec::len(self);
        self.retain(|e| !elements.contains(e));
        Ok(Vec::len(self) != before)
    }
}

impl<E: Clone + PartialEq> Collection<E> for VecDeque<E> {
    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    fn contains(&self, element: &E) -> bool {
        VecDeque::contains(self, element)
    }

    fn iter(&self) -> Box<dyn Iterator<Item = &E> + '_> {
        Box::new(VecDeque::iter(self))
    }

    fn clear(&mut self) {
        VecDeque::clear(self)
    }

    fn add(&mut self, element: E) -> TriggerResult<bool> {
        self.push_back(element);
        Ok(true)
    }

    fn remove(&mut self, element: &E) -> TriggerResult<bool> {
        match VecDeque::iter(self).position(|e| e == element) {
            Some(index) => {
                VecDeque::remove(self, index);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn add_all(&mut self, elements: &[E]) -> TriggerResult<bool> {
        self.extend(elements.iter().cloned());
        Ok(!elements.is_empty())
    }

    fn remove_all(&mut self, elements: &[E]) -> TriggerResult<bool> {
        let before = VecDeque::len(self);
        self.retain(|e| !elements.contains(e));
        Ok(VecDeque::len(self) != before)
    }
}

impl<E, S> Collection<E> for HashSet<E, S>
where
    E: Clone + Eq + Hash,
    S: BuildHasher,
{
    fn len(&self) -> usize {
        HashSet::len(self)
    }

    fn contains(&self, element: &E) -> bool {
        HashSet::contains(self, element)
    }

    fn iter(&self) -> Box<dyn Iterator<Item = &E> + '_> {
        Box::new(HashSet::iter(self))
    }

    fn clear(&mut self) {
        HashSet::clear(self)
    }

    fn add(&mut self, element: E) -> TriggerResult<bool> {
        Ok(self.insert(element))
    }

    fn remove(&mut self, element: &E) -> TriggerResult<bool> {
        Ok(HashSet::remove(self, element))
    }

    fn add_all(&mut self, elements: &[E]) -> TriggerResult<bool> {
        let mut changed = false;
        for element in elements {
            changed |= self.insert(element.clone());
        }
        Ok(changed)
    }

    fn remove_all(&mut self, elements: &[E]) -> TriggerResult<bool> {
        let mut changed = false;
        for element in elements {
            changed |= HashSet::remove(self, element);
        }
        Ok(changed)
    }
}

impl<E: Clone + Ord> Collection<E> for BTreeSet<E> {
    fn len(&self) -> usize {
        BTreeSet::len(self)
    }

    fn contains(&self, element: &E) -> bool {
        BTreeSet::contains(self, element)
    }

    fn iter(&self) -> Box<dyn Iterator<Item = &E> + '_> {
        Box::new(BTreeSet::iter(self))
    }

    fn clear(&mut self) {
        BTreeSet::clear(self)
    }

    fn add(&mut self, element: E) -> TriggerResult<bool> {
        Ok(self.insert(element))
    }

    fn remove(&mut self, element: &E) -> TriggerResult<bool> {
        Ok(BTreeSet::remove(self, element))
    }

    fn add_all(&mut self, elements: &[E]) -> TriggerResult<bool> {
        let mut changed = false;
        for element in elements {
            changed |= self.insert(element.clone());
        }
        Ok(changed)
    }

    fn remove_all(&mut self, elements: &[E]) -> TriggerResult<bool> {
        let mut changed = false;
        for element in elements {
            changed |= BTreeSet::remove(self, element);
        }
        Ok(changed)
    }
}

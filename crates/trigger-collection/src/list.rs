//! The positional trigger list.
//!
//! A [`TriggerList`] is a [`TriggerCollection`] plus interception of
//! positional reads. The generic operations are forwarded to the inner
//! collection, so they dispatch exactly as they would on a plain
//! `TriggerCollection` with the same bindings.

use std::fmt;

use trigger_core::result::TriggerResult;
use trigger_core::traits::{Collection, IndexedCollection};

use crate::builder::CollectionBuilder;
use crate::collection::{TriggerCollection, TriggerCollectionBuilder};
use crate::hooks::dispatcher::dispatch_read;
use crate::hooks::{HookRegistry, IntoHookResult, ReadRecord};

/// An ordered, indexable container with intercepted mutations and reads.
pub struct TriggerList<E, C> {
    inner: TriggerCollection<E, C>,
    reads: ReadRecord<E>,
}

impl<E, C> TriggerList<E, C>
where
    C: IndexedCollection<E>,
{
    /// Starts configuring a trigger list over `base`.
    pub fn wrap(base: C) -> TriggerListBuilder<E, C> {
        TriggerListBuilder::new(base)
    }

    /// Shared access to the wrapped container.
    pub fn base(&self) -> &C {
        self.inner.base()
    }

    /// The bindings for the generic operations.
    pub fn hooks(&self) -> &HookRegistry<E> {
        self.inner.hooks()
    }

    /// The bindings for positional reads.
    pub fn read_hooks(&self) -> &ReadRecord<E> {
        &self.reads
    }

    /// Unwraps the handle, returning the base container.
    pub fn into_inner(self) -> C {
        self.inner.into_inner()
    }
}

impl<E, C> Collection<E> for TriggerList<E, C>
where
    E: Clone,
    C: IndexedCollection<E>,
{
    fn len(&self) -> usize {
        self.inner.len()
    }

    fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    fn contains(&self, element: &E) -> bool {
        self.inner.contains(element)
    }

    fn iter(&self) -> Box<dyn Iterator<Item = &E> + '_> {
        self.inner.iter()
    }

    fn clear(&mut self) {
        self.inner.clear()
    }

    fn add(&mut self, element: E) -> TriggerResult<bool> {
        self.inner.add(element)
    }

    fn remove(&mut self, element: &E) -> TriggerResult<bool> {
        self.inner.remove(element)
    }

    fn add_all(&mut self, elements: &[E]) -> TriggerResult<bool> {
        self.inner.add_all(elements)
    }

    fn remove_all(&mut self, elements: &[E]) -> TriggerResult<bool> {
        self.inner.remove_all(elements)
    }
}

impl<E, C> IndexedCollection<E> for TriggerList<E, C>
where
    E: Clone,
    C: IndexedCollection<E>,
{
    fn get(&self, index: usize) -> TriggerResult<&E> {
        let base = self.inner.base();
        dispatch_read(&self.reads, index, || base.get(index))
    }

    fn insert(&mut self, index: usize, element: E) -> TriggerResult<()> {
        self.inner.base_mut().insert(index, element)
    }

    fn remove_at(&mut self, index: usize) -> TriggerResult<E> {
        self.inner.base_mut().remove_at(index)
    }

    fn set(&mut self, index: usize, element: E) -> TriggerResult<E> {
        self.inner.base_mut().set(index, element)
    }

    fn index_of(&self, element: &E) -> Option<usize> {
        self.inner.base().index_of(element)
    }
}

impl<E, C: fmt::Debug> fmt::Debug for TriggerList<E, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TriggerList")
            .field("inner", &self.inner)
            .field("reads", &self.reads)
            .finish()
    }
}

/// Builder returned by [`TriggerList::wrap`].
///
/// Accepts every [`CollectionBuilder`] setter plus [`before_get`] and
/// [`after_get`], in any order.
///
/// [`before_get`]: TriggerListBuilder::before_get
/// [`after_get`]: TriggerListBuilder::after_get
pub struct TriggerListBuilder<E, C> {
    inner: TriggerCollectionBuilder<E, C>,
    reads: ReadRecord<E>,
}

impl<E, C> TriggerListBuilder<E, C>
where
    C: IndexedCollection<E>,
{
    /// Creates a builder with no bindings.
    pub fn new(base: C) -> Self {
        Self {
            inner: TriggerCollectionBuilder::new(base),
            reads: ReadRecord::new(),
        }
    }

    /// Binds the hook run before `get` with the requested index.
    pub fn before_get<F, O>(mut self, hook: F) -> Self
    where
        F: Fn(usize) -> O + Send + Sync + 'static,
        O: IntoHookResult + 'static,
    {
        self.reads.set_before(hook);
        self
    }

    /// Binds the hook run after a successful `get` with the index and value.
    pub fn after_get<F, O>(mut self, hook: F) -> Self
    where
        E: 'static,
        F: Fn(usize, &E) -> O + Send + Sync + 'static,
        O: IntoHookResult + 'static,
    {
        self.reads.set_after(hook);
        self
    }

    /// Seals the bindings and returns the handle.
    pub fn build(self) -> TriggerList<E, C> {
        TriggerList {
            inner: self.inner.build(),
            reads: self.reads,
        }
    }
}

impl<E: 'static, C> CollectionBuilder<E> for TriggerListBuilder<E, C> {
    fn hooks_mut(&mut self) -> &mut HookRegistry<E> {
        self.inner.hooks_mut()
    }
}

impl<E, C: fmt::Debug> fmt::Debug for TriggerListBuilder<E, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TriggerListBuilder")
            .field("inner", &self.inner)
            .field("reads", &self.reads)
            .finish()
    }
}

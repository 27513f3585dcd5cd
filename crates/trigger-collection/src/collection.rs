//! The generic trigger collection and its builder.

use std::fmt;

use trigger_core::result::TriggerResult;
use trigger_core::traits::Collection;

use crate::builder::CollectionBuilder;
use crate::hooks::{HookDispatcher, HookRegistry};

/// A container whose `add`, `remove`, `add_all` and `remove_all` run through
/// gates and hooks. Every other operation goes straight to the base.
///
/// `C` can be an owned container or a `&mut` borrow of one; either way the
/// handle adds behavior only, never data.
///
/// ```
/// use trigger_collection::prelude::*;
///
/// let mut items: Vec<i32> = Vec::new();
/// let mut gated = TriggerCollection::wrap(&mut items)
///     .gate_add(|x| *x <= 5)
///     .build();
///
/// assert!(gated.add(5).unwrap());
/// assert!(!gated.add(6).unwrap());
/// drop(gated);
/// assert_eq!(items, vec![5]);
/// ```
pub struct TriggerCollection<E, C> {
    base: C,
    dispatcher: HookDispatcher<E>,
}

impl<E, C> TriggerCollection<E, C>
where
    C: Collection<E>,
{
    /// Starts configuring a trigger collection over `base`.
    pub fn wrap(base: C) -> TriggerCollectionBuilder<E, C> {
        TriggerCollectionBuilder::new(base)
    }

    /// Wraps `base` with an already configured registry.
    pub fn with_hooks(base: C, hooks: HookRegistry<E>) -> Self {
        Self {
            base,
            dispatcher: HookDispatcher::new(hooks),
        }
    }

    /// Shared access to the wrapped container.
    pub fn base(&self) -> &C {
        &self.base
    }

    /// Mutable access for passthrough operations. Never used for the
    /// intercepted ones.
    pub(crate) fn base_mut(&mut self) -> &mut C {
        &mut self.base
    }

    /// The bindings this handle dispatches through.
    pub fn hooks(&self) -> &HookRegistry<E> {
        self.dispatcher.registry()
    }

    /// Unwraps the handle, returning the base container.
    pub fn into_inner(self) -> C {
        self.base
    }
}

impl<E, C> Collection<E> for TriggerCollection<E, C>
where
    E: Clone,
    C: Collection<E>,
{
    fn len(&self) -> usize {
        self.base.len()
    }

    fn is_empty(&self) -> bool {
        self.base.is_empty()
    }

    fn contains(&self, element: &E) -> bool {
        self.base.contains(element)
    }

    fn iter(&self) -> Box<dyn Iterator<Item = &E> + '_> {
        self.base.iter()
    }

    fn clear(&mut self) {
        self.base.clear()
    }

    fn add(&mut self, element: E) -> TriggerResult<bool> {
        self.dispatcher.add(&mut self.base, element)
    }

    fn remove(&mut self, element: &E) -> TriggerResult<bool> {
        self.dispatcher.remove(&mut self.base, element)
    }

    fn add_all(&mut self, elements: &[E]) -> TriggerResult<bool> {
        self.dispatcher.add_all(&mut self.base, elements)
    }

    fn remove_all(&mut self, elements: &[E]) -> TriggerResult<bool> {
        self.dispatcher.remove_all(&mut self.base, elements)
    }
}

impl<E, C: fmt::Debug> fmt::Debug for TriggerCollection<E, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TriggerCollection")
            .field("base", &self.base)
            .field("dispatcher", &self.dispatcher)
            .finish()
    }
}

/// Builder returned by [`TriggerCollection::wrap`].
pub struct TriggerCollectionBuilder<E, C> {
    base: C,
    hooks: HookRegistry<E>,
}

impl<E, C> TriggerCollectionBuilder<E, C>
where
    C: Collection<E>,
{
    /// Creates a builder with no bindings.
    pub fn new(base: C) -> Self {
        Self {
            base,
            hooks: HookRegistry::new(),
        }
    }

    /// Seals the bindings and returns the handle.
    pub fn build(self) -> TriggerCollection<E, C> {
        TriggerCollection::with_hooks(self.base, self.hooks)
    }
}

impl<E: 'static, C> CollectionBuilder<E> for TriggerCollectionBuilder<E, C> {
    fn hooks_mut(&mut self) -> &mut HookRegistry<E> {
        &mut self.hooks
    }
}

impl<E, C: fmt::Debug> fmt::Debug for TriggerCollectionBuilder<E, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TriggerCollectionBuilder")
            .field("base", &self.base)
            .field("hooks", &self.hooks)
            .finish()
    }
}

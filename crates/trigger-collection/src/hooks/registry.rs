//! Hook registry: one typed record per intercepted mutating operation.

use std::fmt;

use tracing::debug;

use super::definitions::{BatchOp, ElementOp, IntoHookResult, Operation, OperationRecord};

/// Gates and hooks for `add`, `remove`, `add_all` and `remove_all`.
///
/// Each slot holds at most one binding; setting it again replaces the prior
/// one. Registries are plain owned values, so two builders never observe each
/// other's bindings.
pub struct HookRegistry<E> {
    /// `add(element)`.
    add: OperationRecord<E, bool>,
    /// `remove(&element)`.
    remove: OperationRecord<E, bool>,
    /// `add_all(&elements)`.
    add_all: OperationRecord<[E], bool>,
    /// `remove_all(&elements)`.
    remove_all: OperationRecord<[E], bool>,
}

impl<E> HookRegistry<E> {
    /// Creates a registry with every operation at its defaults.
    pub fn new() -> Self {
        Self {
            add: OperationRecord::new(),
            remove: OperationRecord::new(),
            add_all: OperationRecord::new(),
            remove_all: OperationRecord::new(),
        }
    }

    /// Returns the record for a single-element operation.
    pub fn record(&self, op: ElementOp) -> &OperationRecord<E, bool> {
        match op {
            ElementOp::Add => &self.add,
            ElementOp::Remove => &self.remove,
        }
    }

    /// Returns the record for a batch operation.
    pub fn batch_record(&self, op: BatchOp) -> &OperationRecord<[E], bool> {
        match op {
            BatchOp::AddAll => &self.add_all,
            BatchOp::RemoveAll => &self.remove_all,
        }
    }

    fn record_mut(&mut self, op: ElementOp) -> &mut OperationRecord<E, bool> {
        match op {
            ElementOp::Add => &mut self.add,
            ElementOp::Remove => &mut self.remove,
        }
    }

    fn batch_record_mut(&mut self, op: BatchOp) -> &mut OperationRecord<[E], bool> {
        match op {
            BatchOp::AddAll => &mut self.add_all,
            BatchOp::RemoveAll => &mut self.remove_all,
        }
    }

    /// Returns every operation with at least one binding.
    pub fn configured_operations(&self) -> Vec<Operation> {
        let mut ops = Vec::new();
        if self.add.is_configured() {
            ops.push(Operation::Add);
        }
        if self.remove.is_configured() {
            ops.push(Operation::Remove);
        }
        if self.add_all.is_configured() {
            ops.push(Operation::AddAll);
        }
        if self.remove_all.is_configured() {
            ops.push(Operation::RemoveAll);
        }
        ops
    }
}

impl<E: 'static> HookRegistry<E> {
    /// Binds the gate for a single-element operation.
    pub fn set_gate<F>(&mut self, op: ElementOp, gate: F)
    where
        F: Fn(&E) -> bool + Send + Sync + 'static,
    {
        self.record_mut(op).set_gate(gate);
        debug!(op = %Operation::from(op), slot = "gate", "Hook bound");
    }

    /// Binds the before-hook for a single-element operation.
    pub fn set_before<F, O>(&mut self, op: ElementOp, hook: F)
    where
        F: Fn(&E) -> O + Send + Sync + 'static,
        O: IntoHookResult + 'static,
    {
        self.record_mut(op).set_before(hook);
        debug!(op = %Operation::from(op), slot = "before", "Hook bound");
    }

    /// Binds the after-hook for a single-element operation. The hook receives
    /// the element and the result the container returned.
    pub fn set_after<F, O>(&mut self, op: ElementOp, hook: F)
    where
        F: Fn(&E, bool) -> O + Send + Sync + 'static,
        O: IntoHookResult + 'static,
    {
        self.record_mut(op)
            .set_after(move |element: &E, changed: &bool| hook(element, *changed));
        debug!(op = %Operation::from(op), slot = "after", "Hook bound");
    }

    /// Binds the gate for a batch operation. The gate sees the whole batch.
    pub fn set_batch_gate<F>(&mut self, op: BatchOp, gate: F)
    where
        F: Fn(&[E]) -> bool + Send + Sync + 'static,
    {
        self.batch_record_mut(op).set_gate(gate);
        debug!(op = %Operation::from(op), slot = "gate", "Hook bound");
    }

    /// Binds the before-hook for a batch operation.
    pub fn set_batch_before<F, O>(&mut self, op: BatchOp, hook: F)
    where
        F: Fn(&[E]) -> O + Send + Sync + 'static,
        O: IntoHookResult + 'static,
    {
        self.batch_record_mut(op).set_before(hook);
        debug!(op = %Operation::from(op), slot = "before", "Hook bound");
    }

    /// Binds the after-hook for a batch operation.
    pub fn set_batch_after<F, O>(&mut self, op: BatchOp, hook: F)
    where
        F: Fn(&[E], bool) -> O + Send + Sync + 'static,
        O: IntoHookResult + 'static,
    {
        self.batch_record_mut(op)
            .set_after(move |elements: &[E], changed: &bool| hook(elements, *changed));
        debug!(op = %Operation::from(op), slot = "after", "Hook bound");
    }
}

impl<E> Default for HookRegistry<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> fmt::Debug for HookRegistry<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HookRegistry")
            .field("add", &self.add)
            .field("remove", &self.remove)
            .field("add_all", &self.add_all)
            .field("remove_all", &self.remove_all)
            .finish()
    }
}

impl<E> Clone for HookRegistry<E> {
    fn clone(&self) -> Self {
        Self {
            add: self.add.clone(),
            remove: self.remove.clone(),
            add_all: self.add_all.clone(),
            remove_all: self.remove_all.clone(),
        }
    }
}

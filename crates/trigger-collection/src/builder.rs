//! Chained configuration shared by every trigger builder.
//!
//! Builders only provide [`CollectionBuilder::hooks_mut`]; the setters come
//! with the trait and return the implementing builder's own type, so a
//! [`TriggerListBuilder`](crate::list::TriggerListBuilder) keeps its list
//! setters available after any number of generic ones.

use crate::hooks::{BatchOp, ElementOp, HookRegistry, IntoHookResult};

/// Configuration surface for the generic intercepted operations.
pub trait CollectionBuilder<E: 'static>: Sized {
    /// Mutable access to the registry under construction.
    fn hooks_mut(&mut self) -> &mut HookRegistry<E>;

    /// Binds the gate for `op`. A gate returning `false` vetoes the call.
    fn gate<F>(mut self, op: ElementOp, gate: F) -> Self
    where
        F: Fn(&E) -> bool + Send + Sync + 'static,
    {
        self.hooks_mut().set_gate(op, gate);
        self
    }

    /// Binds the hook run before `op`.
    fn before<F, O>(mut self, op: ElementOp, hook: F) -> Self
    where
        F: Fn(&E) -> O + Send + Sync + 'static,
        O: IntoHookResult + 'static,
    {
        self.hooks_mut().set_before(op, hook);
        self
    }

    /// Binds the hook run after `op` with the element and its result.
    fn after<F, O>(mut self, op: ElementOp, hook: F) -> Self
    where
        F: Fn(&E, bool) -> O + Send + Sync + 'static,
        O: IntoHookResult + 'static,
    {
        self.hooks_mut().set_after(op, hook);
        self
    }

    /// Binds the gate for a batch operation. The whole batch is admitted or
    /// rejected.
    fn gate_batch<F>(mut self, op: BatchOp, gate: F) -> Self
    where
        F: Fn(&[E]) -> bool + Send + Sync + 'static,
    {
        self.hooks_mut().set_batch_gate(op, gate);
        self
    }

    /// Binds the hook run before a batch operation.
    fn before_batch<F, O>(mut self, op: BatchOp, hook: F) -> Self
    where
        F: Fn(&[E]) -> O + Send + Sync + 'static,
        O: IntoHookResult + 'static,
    {
        self.hooks_mut().set_batch_before(op, hook);
        self
    }

    /// Binds the hook run after a batch operation.
    fn after_batch<F, O>(mut self, op: BatchOp, hook: F) -> Self
    where
        F: Fn(&[E], bool) -> O + Send + Sync + 'static,
        O: IntoHookResult + 'static,
    {
        self.hooks_mut().set_batch_after(op, hook);
        self
    }

    /// Shorthand for `gate(ElementOp::Add, ..)`.
    fn gate_add<F>(self, gate: F) -> Self
    where
        F: Fn(&E) -> bool + Send + Sync + 'static,
    {
        self.gate(ElementOp::Add, gate)
    }

    /// Shorthand for `before(ElementOp::Add, ..)`.
    fn before_add<F, O>(self, hook: F) -> Self
    where
        F: Fn(&E) -> O + Send + Sync + 'static,
        O: IntoHookResult + 'static,
    {
        self.before(ElementOp::Add, hook)
    }

    /// Shorthand for `after(ElementOp::Add, ..)`.
    fn after_add<F, O>(self, hook: F) -> Self
    where
        F: Fn(&E, bool) -> O + Send + Sync + 'static,
        O: IntoHookResult + 'static,
    {
        self.after(ElementOp::Add, hook)
    }

    /// Shorthand for `gate(ElementOp::Remove, ..)`.
    fn gate_remove<F>(self, gate: F) -> Self
    where
        F: Fn(&E) -> bool + Send + Sync + 'static,
    {
        self.gate(ElementOp::Remove, gate)
    }

    /// Shorthand for `before(ElementOp::Remove, ..)`.
    fn before_remove<F, O>(self, hook: F) -> Self
    where
        F: Fn(&E) -> O + Send + Sync + 'static,
        O: IntoHookResult + 'static,
    {
        self.before(ElementOp::Remove, hook)
    }

    /// Shorthand for `after(ElementOp::Remove, ..)`.
    fn after_remove<F, O>(self, hook: F) -> Self
    where
        F: Fn(&E, bool) -> O + Send + Sync + 'static,
        O: IntoHookResult + 'static,
    {
        self.after(ElementOp::Remove, hook)
    }

    /// Shorthand for `before_batch(BatchOp::AddAll, ..)`.
    fn before_add_all<F, O>(self, hook: F) -> Self
    where
        F: Fn(&[E]) -> O + Send + Sync + 'static,
        O: IntoHookResult + 'static,
    {
        self.before_batch(BatchOp::AddAll, hook)
    }

    /// Shorthand for `after_batch(BatchOp::AddAll, ..)`.
    fn after_add_all<F, O>(self, hook: F) -> Self
    where
        F: Fn(&[E], bool) -> O + Send + Sync + 'static,
        O: IntoHookResult + 'static,
    {
        self.after_batch(BatchOp::AddAll, hook)
    }

    /// Shorthand for `before_batch(BatchOp::RemoveAll, ..)`.
    fn before_remove_all<F, O>(self, hook: F) -> Self
    where
        F: Fn(&[E]) -> O + Send + Sync + 'static,
        O: IntoHookResult + 'static,
    {
        self.before_batch(BatchOp::RemoveAll, hook)
    }

    /// Shorthand for `after_batch(BatchOp::RemoveAll, ..)`.
    fn after_remove_all<F, O>(self, hook: F) -> Self
    where
        F: Fn(&[E], bool) -> O + Send + Sync + 'static,
        O: IntoHookResult + 'static,
    {
        self.after_batch(BatchOp::RemoveAll, hook)
    }
}

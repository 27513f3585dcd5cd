//! Hook dispatcher: runs the gate / before / delegate / after protocol.
//!
//! For mutating operations:
//! - The gate is evaluated first. A `false` gate vetoes the call: no hook runs,
//!   the container is not touched, and the operation reports `false`.
//! - The before-hook runs next; if it fails, the container is not touched.
//! - The real operation runs on the base container; if it fails, the
//!   after-hook is skipped.
//! - The after-hook runs last. Its failure does not undo the mutation.
//!
//! Positional reads follow the same sequence without a gate.
//!
//! Every failure is returned to the caller unchanged.

use tracing::{debug, trace};

use trigger_core::result::TriggerResult;
use trigger_core::traits::Collection;

use super::definitions::{BatchOp, ElementOp, Operation, OperationRecord, ReadRecord};
use super::registry::HookRegistry;

/// Dispatches intercepted operations through a sealed [`HookRegistry`].
#[derive(Clone)]
pub struct HookDispatcher<E> {
    /// Bindings fixed at build time.
    registry: HookRegistry<E>,
}

impl<E> HookDispatcher<E> {
    /// Creates a dispatcher over a configured registry.
    pub fn new(registry: HookRegistry<E>) -> Self {
        Self { registry }
    }

    /// Returns the registry this dispatcher reads from.
    pub fn registry(&self) -> &HookRegistry<E> {
        &self.registry
    }
}

impl<E> std::fmt::Debug for HookDispatcher<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HookDispatcher")
            .field("registry", &self.registry)
            .finish()
    }
}

impl<E: Clone> HookDispatcher<E> {
    /// Intercepted `add`.
    pub fn add<C>(&self, base: &mut C, element: E) -> TriggerResult<bool>
    where
        C: Collection<E> + ?Sized,
    {
        let record = self.registry.record(ElementOp::Add);
        dispatch(Operation::Add, record, &element, false, || {
            base.add(element.clone())
        })
    }

    /// Intercepted `remove`.
    pub fn remove<C>(&self, base: &mut C, element: &E) -> TriggerResult<bool>
    where
        C: Collection<E> + ?Sized,
    {
        let record = self.registry.record(ElementOp::Remove);
        dispatch(Operation::Remove, record, element, false, || {
            base.remove(element)
        })
    }

    /// Intercepted `add_all`.
    pub fn add_all<C>(&self, base: &mut C, elements: &[E]) -> TriggerResult<bool>
    where
        C: Collection<E> + ?Sized,
    {
        let record = self.registry.batch_record(BatchOp::AddAll);
        dispatch(Operation::AddAll, record, elements, false, || {
            base.add_all(elements)
        })
    }

    /// Intercepted `remove_all`.
    pub fn remove_all<C>(&self, base: &mut C, elements: &[E]) -> TriggerResult<bool>
    where
        C: Collection<E> + ?Sized,
    {
        let record = self.registry.batch_record(BatchOp::RemoveAll);
        dispatch(Operation::RemoveAll, record, elements, false, || {
            base.remove_all(elements)
        })
    }
}

/// Runs one mutating operation through its record.
///
/// `vetoed` is what the operation reports when the gate rejects `input`.
pub fn dispatch<I, R, F>(
    op: Operation,
    record: &OperationRecord<I, R>,
    input: &I,
    vetoed: R,
    call: F,
) -> TriggerResult<R>
where
    I: ?Sized,
    F: FnOnce() -> TriggerResult<R>,
{
    if !record.allows(input) {
        debug!(op = %op, "Operation vetoed by gate");
        return Ok(vetoed);
    }

    record.run_before(input).inspect_err(|e| {
        debug!(op = %op, error = %e, "Before hook failed");
    })?;
    trace!(op = %op, "Before hook completed");

    let result = call().inspect_err(|e| {
        debug!(op = %op, error = %e, "Delegate call failed, skipping after hook");
    })?;
    trace!(op = %op, "Delegate call completed");

    record.run_after(input, &result).inspect_err(|e| {
        debug!(op = %op, error = %e, "After hook failed");
    })?;
    trace!(op = %op, "After hook completed");

    Ok(result)
}

/// Runs one positional read through its record.
pub fn dispatch_read<'a, E, F>(
    record: &ReadRecord<E>,
    index: usize,
    read: F,
) -> TriggerResult<&'a E>
where
    F: FnOnce() -> TriggerResult<&'a E>,
{
    let op = Operation::Get;

    record.run_before(index).inspect_err(|e| {
        debug!(op = %op, index, error = %e, "Before hook failed");
    })?;

    let value = read().inspect_err(|e| {
        debug!(op = %op, index, error = %e, "Read failed, skipping after hook");
    })?;

    record.run_after(index, value).inspect_err(|e| {
        debug!(op = %op, index, error = %e, "After hook failed");
    })?;
    trace!(op = %op, index, "Read dispatched");

    Ok(value)
}

//! Intercepted operations and the typed hook records bound to them.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use trigger_core::result::TriggerResult;

/// Every operation the dispatcher intercepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    /// `Collection::add`.
    Add,
    /// `Collection::remove`.
    Remove,
    /// `Collection::add_all`.
    AddAll,
    /// `Collection::remove_all`.
    RemoveAll,
    /// `IndexedCollection::get`.
    Get,
}

impl Operation {
    /// Returns the string name of this operation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Remove => "remove",
            Self::AddAll => "add_all",
            Self::RemoveAll => "remove_all",
            Self::Get => "get",
        }
    }

    /// Returns whether a gate can veto this operation.
    ///
    /// Positional reads are never vetoable.
    pub fn is_gated(&self) -> bool {
        !matches!(self, Self::Get)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Operations that take a single element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementOp {
    /// `add(element)`.
    Add,
    /// `remove(&element)`.
    Remove,
}

/// Operations that take a whole batch. Gates on these see the entire batch
/// and veto it as a unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BatchOp {
    /// `add_all(&elements)`.
    AddAll,
    /// `remove_all(&elements)`.
    RemoveAll,
}

impl From<ElementOp> for Operation {
    fn from(op: ElementOp) -> Self {
        match op {
            ElementOp::Add => Self::Add,
            ElementOp::Remove => Self::Remove,
        }
    }
}

impl From<BatchOp> for Operation {
    fn from(op: BatchOp) -> Self {
        match op {
            BatchOp::AddAll => Self::AddAll,
            BatchOp::RemoveAll => Self::RemoveAll,
        }
    }
}

/// Conversion from a hook's return value into the dispatcher's result.
///
/// Lets hooks be written either as plain side effects returning `()` or as
/// fallible callbacks returning [`TriggerResult<()>`].
pub trait IntoHookResult {
    /// Converts into a hook outcome.
    fn into_hook_result(self) -> TriggerResult<()>;
}

impl IntoHookResult for () {
    fn into_hook_result(self) -> TriggerResult<()> {
        Ok(())
    }
}

impl IntoHookResult for TriggerResult<()> {
    fn into_hook_result(self) -> TriggerResult<()> {
        self
    }
}

type GateFn<I> = Arc<dyn Fn(&I) -> bool + Send + Sync>;
type BeforeFn<I> = Arc<dyn Fn(&I) -> TriggerResult<()> + Send + Sync>;
type AfterFn<I, R> = Arc<dyn Fn(&I, &R) -> TriggerResult<()> + Send + Sync>;

/// Gate, before-hook and after-hook bound to one mutating operation.
///
/// `I` is the operation's input (`E` or `[E]`), `R` its result. Unset slots
/// behave as always-allow / no-op.
pub struct OperationRecord<I: ?Sized, R> {
    gate: Option<GateFn<I>>,
    before: Option<BeforeFn<I>>,
    after: Option<AfterFn<I, R>>,
}

impl<I: ?Sized, R> OperationRecord<I, R> {
    /// Creates a record with every slot at its default.
    pub fn new() -> Self {
        Self {
            gate: None,
            before: None,
            after: None,
        }
    }

    /// Replaces the gate predicate.
    pub fn set_gate<F>(&mut self, gate: F)
    where
        I: 'static,
        F: Fn(&I) -> bool + Send + Sync + 'static,
    {
        self.gate = Some(Arc::new(gate));
    }

    /// Replaces the before-hook.
    pub fn set_before<F, O>(&mut self, hook: F)
    where
        I: 'static,
        F: Fn(&I) -> O + Send + Sync + 'static,
        O: IntoHookResult + 'static,
    {
        self.before = Some(Arc::new(move |input: &I| hook(input).into_hook_result()));
    }

    /// Replaces the after-hook.
    pub fn set_after<F, O>(&mut self, hook: F)
    where
        I: 'static,
        R: 'static,
        F: Fn(&I, &R) -> O + Send + Sync + 'static,
        O: IntoHookResult + 'static,
    {
        self.after = Some(Arc::new(move |input: &I, result: &R| {
            hook(input, result).into_hook_result()
        }));
    }

    /// Evaluates the gate. Always `true` when no gate is bound.
    pub fn allows(&self, input: &I) -> bool {
        self.gate.as_ref().is_none_or(|gate| gate(input))
    }

    /// Runs the before-hook, if any.
    pub fn run_before(&self, input: &I) -> TriggerResult<()> {
        match &self.before {
            Some(hook) => hook(input),
            None => Ok(()),
        }
    }

    /// Runs the after-hook, if any.
    pub fn run_after(&self, input: &I, result: &R) -> TriggerResult<()> {
        match &self.after {
            Some(hook) => hook(input, result),
            None => Ok(()),
        }
    }

    /// Returns whether any slot has been bound.
    pub fn is_configured(&self) -> bool {
        self.gate.is_some() || self.before.is_some() || self.after.is_some()
    }
}

impl<I: ?Sized, R> Default for OperationRecord<I, R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I: ?Sized, R> Clone for OperationRecord<I, R> {
    fn clone(&self) -> Self {
        Self {
            gate: self.gate.clone(),
            before: self.before.clone(),
            after: self.after.clone(),
        }
    }
}

impl<I: ?Sized, R> fmt::Debug for OperationRecord<I, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OperationRecord")
            .field("gate", &self.gate.as_ref().map(|_| "<closure>"))
            .field("before", &self.before.as_ref().map(|_| "<closure>"))
            .field("after", &self.after.as_ref().map(|_| "<closure>"))
            .finish()
    }
}

type ReadBeforeFn = Arc<dyn Fn(usize) -> TriggerResult<()> + Send + Sync>;
type ReadAfterFn<E> = Arc<dyn Fn(usize, &E) -> TriggerResult<()> + Send + Sync>;

/// Before/after hooks bound to positional reads. Reads have no gate.
pub struct ReadRecord<E> {
    before: Option<ReadBeforeFn>,
    after: Option<ReadAfterFn<E>>,
}

impl<E> ReadRecord<E> {
    /// Creates a record with no hooks bound.
    pub fn new() -> Self {
        Self {
            before: None,
            after: None,
        }
    }

    /// Replaces the before-hook.
    pub fn set_before<F, O>(&mut self, hook: F)
    where
        F: Fn(usize) -> O + Send + Sync + 'static,
        O: IntoHookResult + 'static,
    {
        self.before = Some(Arc::new(move |index| hook(index).into_hook_result()));
    }

    /// Replaces the after-hook.
    pub fn set_after<F, O>(&mut self, hook: F)
    where
        E: 'static,
        F: Fn(usize, &E) -> O + Send + Sync + 'static,
        O: IntoHookResult + 'static,
    {
        self.after = Some(Arc::new(move |index, value: &E| {
            hook(index, value).into_hook_result()
        }));
    }

    /// Runs the before-hook, if any.
    pub fn run_before(&self, index: usize) -> TriggerResult<()> {
        match &self.before {
            Some(hook) => hook(index),
            None => Ok(()),
        }
    }

    /// Runs the after-hook, if any.
    pub fn run_after(&self, index: usize, value: &E) -> TriggerResult<()> {
        match &self.after {
            Some(hook) => hook(index, value),
            None => Ok(()),
        }
    }

    /// Returns whether any hook has been bound.
    pub fn is_configured(&self) -> bool {
        self.before.is_some() || self.after.is_some()
    }
}

impl<E> Default for ReadRecord<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Clone for ReadRecord<E> {
    fn clone(&self) -> Self {
        Self {
            before: self.before.clone(),
            after: self.after.clone(),
        }
    }
}

impl<E> fmt::Debug for ReadRecord<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReadRecord")
            .field("before", &self.before.as_ref().map(|_| "<closure>"))
            .field("after", &self.after.as_ref().map(|_| "<closure>"))
            .finish()
    }
}

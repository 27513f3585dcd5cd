//! A ready-made hook set that records every intercepted call.

use std::fmt::Debug;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use serde::{Deserialize, Serialize};

use trigger_core::result::TriggerResult;
use trigger_core::traits::IndexedCollection;

use crate::builder::CollectionBuilder;
use crate::hooks::{BatchOp, ElementOp, Operation};
use crate::list::TriggerListBuilder;

/// Which side of the real operation an entry was recorded on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditPhase {
    /// Recorded by a before-hook.
    Before,
    /// Recorded by an after-hook.
    After,
}

/// One recorded hook invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditEntry {
    /// The intercepted operation.
    pub operation: Operation,
    /// Before or after the real call.
    pub phase: AuditPhase,
    /// `Debug` rendering of the input (element, batch or index).
    pub input: String,
    /// `Debug` rendering of the result. Only set for after entries.
    pub outcome: Option<String>,
}

impl AuditEntry {
    fn before(operation: Operation, input: String) -> Self {
        Self {
            operation,
            phase: AuditPhase::Before,
            input,
            outcome: None,
        }
    }

    fn after(operation: Operation, input: String, outcome: String) -> Self {
        Self {
            operation,
            phase: AuditPhase::After,
            input,
            outcome: Some(outcome),
        }
    }
}

/// Shared, append-only log of hook invocations.
///
/// Cloning the trail shares the underlying log, so the clone captured by the
/// hooks and the one kept by the caller see the same entries.
#[derive(Debug, Clone, Default)]
pub struct AuditTrail {
    entries: Arc<Mutex<Vec<AuditEntry>>>,
}

impl AuditTrail {
    /// Creates an empty trail.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<AuditEntry>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn push(&self, entry: AuditEntry) {
        self.lock().push(entry);
    }

    /// Binds before/after hooks for `add`, `remove`, `add_all` and
    /// `remove_all` that append to this trail.
    ///
    /// Replaces any before/after hooks already bound to those operations.
    /// Gates are left alone, so vetoed calls leave no entries.
    pub fn install<E, B>(&self, builder: B) -> B
    where
        E: Debug + 'static,
        B: CollectionBuilder<E>,
    {
        let mut builder = builder;
        for op in [ElementOp::Add, ElementOp::Remove] {
            let before = self.clone();
            let after = self.clone();
            builder = builder
                .before(op, move |element: &E| {
                    before.push(AuditEntry::before(op.into(), format!("{element:?}")))
                })
                .after(op, move |element: &E, changed| {
                    after.push(AuditEntry::after(
                        op.into(),
                        format!("{element:?}"),
                        changed.to_string(),
                    ))
                });
        }
        for op in [BatchOp::AddAll, BatchOp::RemoveAll] {
            let before = self.clone();
            let after = self.clone();
            builder = builder
                .before_batch(op, move |batch: &[E]| {
                    before.push(AuditEntry::before(op.into(), format!("{batch:?}")))
                })
                .after_batch(op, move |batch: &[E], changed| {
                    after.push(AuditEntry::after(
                        op.into(),
                        format!("{batch:?}"),
                        changed.to_string(),
                    ))
                });
        }
        builder
    }

    /// Binds before/after hooks for positional reads on a list builder.
    pub fn install_reads<E, C>(&self, builder: TriggerListBuilder<E, C>) -> TriggerListBuilder<E, C>
    where
        E: Debug + 'static,
        C: IndexedCollection<E>,
    {
        let before = self.clone();
        let after = self.clone();
        builder
            .before_get(move |index| {
                before.push(AuditEntry::before(Operation::Get, index.to_string()))
            })
            .after_get(move |index, value: &E| {
                after.push(AuditEntry::after(
                    Operation::Get,
                    index.to_string(),
                    format!("{value:?}"),
                ))
            })
    }

    /// Snapshot of every entry recorded so far.
    pub fn entries(&self) -> Vec<AuditEntry> {
        self.lock().clone()
    }

    /// Number of recorded entries.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Whether nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Serializes the entries as a JSON array.
    pub fn to_json(&self) -> TriggerResult<String> {
        Ok(serde_json::to_string_pretty(&*self.lock())?)
    }
}

//! # trigger-collection
//!
//! Instrumented containers. Wraps any [`Collection`] or
//! [`IndexedCollection`] so that its mutating operations (and, for lists,
//! positional reads) run through user-supplied hooks:
//!
//! - Gate predicates that can veto `add`, `remove`, `add_all`, `remove_all`
//! - Before/after hooks around each intercepted operation
//! - A positional variant ([`TriggerList`]) adding `get` interception
//! - An [`AuditTrail`] hook set recording every intercepted call
//!
//! Everything else passes through to the wrapped container unchanged.
//!
//! [`Collection`]: trigger_core::traits::Collection
//! [`IndexedCollection`]: trigger_core::traits::IndexedCollection

pub mod audit;
pub mod builder;
pub mod collection;
pub mod hooks;
pub mod list;
pub mod prelude;

pub use audit::{AuditEntry, AuditPhase, AuditTrail};
pub use builder::CollectionBuilder;
pub use collection::{TriggerCollection, TriggerCollectionBuilder};
pub use hooks::{BatchOp, ElementOp, HookDispatcher, HookRegistry, Operation};
pub use list::{TriggerList, TriggerListBuilder};

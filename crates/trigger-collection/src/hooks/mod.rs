//! Hook system: typed operation records, registry, and dispatcher.

pub mod definitions;
pub mod dispatcher;
pub mod registry;

pub use definitions::{BatchOp, ElementOp, IntoHookResult, Operation, OperationRecord, ReadRecord};
pub use dispatcher::HookDispatcher;
pub use registry::HookRegistry;

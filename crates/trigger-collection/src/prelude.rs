//! Convenience re-exports for building and using trigger collections.

pub use trigger_core::error::{ErrorKind, TriggerError};
pub use trigger_core::result::TriggerResult;
pub use trigger_core::traits::{Collection, IndexedCollection};

pub use crate::builder::CollectionBuilder;
pub use crate::collection::TriggerCollection;
pub use crate::hooks::{BatchOp, ElementOp, Operation};
pub use crate::list::TriggerList;

//! Convenience result type alias.

use crate::error::TriggerError;

/// A specialized `Result` type for collection operations and hooks.
pub type TriggerResult<T> = Result<T, TriggerError>;

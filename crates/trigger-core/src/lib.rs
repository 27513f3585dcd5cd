//! # trigger-core
//!
//! Core crate for trigger collections. Contains the container capability
//! traits and their std implementations, configuration schemas, and the
//! unified error system.
//!
//! This crate has **no** internal dependencies on other workspace crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;

pub use error::{ErrorKind, TriggerError};
pub use result::TriggerResult;
pub use traits::{Collection, IndexedCollection};

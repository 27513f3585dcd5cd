//! Container capability traits.
//!
//! Implemented for the std containers here, and by the decorated handles in
//! `trigger-collection`, so either can be used wherever the other is expected.

pub mod collection;
pub mod indexed;

pub use collection::Collection;
pub use indexed::IndexedCollection;

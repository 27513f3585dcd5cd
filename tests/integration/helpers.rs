//! Shared test helpers for integration tests.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use trigger_core::error::TriggerError;
use trigger_core::result::TriggerResult;
use trigger_core::traits::{Collection, IndexedCollection};

/// Ordered record of hook and delegate calls, shared between closures.
#[derive(Debug, Clone, Default)]
pub struct Journal(Arc<Mutex<Vec<String>>>);

impl Journal {
    /// Create an empty journal
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a line
    pub fn push(&self, line: impl Into<String>) {
        self.0.lock().unwrap().push(line.into());
    }

    /// All lines recorded so far
    pub fn lines(&self) -> Vec<String> {
        self.0.lock().unwrap().clone()
    }

    /// Whether nothing was recorded
    pub fn is_empty(&self) -> bool {
        self.0.lock().unwrap().is_empty()
    }
}

/// A `Vec<i32>`-backed list that journals every delegate call it receives,
/// and can be told to reject all mutations.
#[derive(Debug)]
pub struct JournaledVec {
    pub items: Vec<i32>,
    journal: Journal,
    read_only: bool,
}

impl JournaledVec {
    /// Create an empty, writable list
    pub fn new(journal: &Journal) -> Self {
        Self {
            items: Vec::new(),
            journal: journal.clone(),
            read_only: false,
        }
    }

    /// Create a list that fails every mutation with a delegate error
    pub fn read_only(journal: &Journal, items: Vec<i32>) -> Self {
        Self {
            items,
            journal: journal.clone(),
            read_only: true,
        }
    }

    fn mutate(&self, line: String) -> TriggerResult<()> {
        self.journal.push(line);
        if self.read_only {
            return Err(TriggerError::delegate("list is read-only"));
        }
        Ok(())
    }
}

impl Collection<i32> for JournaledVec {
    fn len(&self) -> usize {
        Vec::len(&self.items)
    }

    fn contains(&self, element: &i32) -> bool {
        self.items.as_slice().contains(element)
    }

    fn iter(&self) -> Box<dyn Iterator<Item = &i32> + '_> {
        Box::new(self.items.as_slice().iter())
    }

    fn clear(&mut self) {
        self.items.clear()
    }

    fn add(&mut self, element: i32) -> TriggerResult<bool> {
        self.mutate(format!("delegate add {element}"))?;
        Collection::add(&mut self.items, element)
    }

    fn remove(&mut self, element: &i32) -> TriggerResult<bool> {
        self.mutate(format!("delegate remove {element}"))?;
        Collection::remove(&mut self.items, element)
    }

    fn add_all(&mut self, elements: &[i32]) -> TriggerResult<bool> {
        self.mutate(format!("delegate add_all {elements:?}"))?;
        Collection::add_all(&mut self.items, elements)
    }

    fn remove_all(&mut self, elements: &[i32]) -> TriggerResult<bool> {
        self.mutate(format!("delegate remove_all {elements:?}"))?;
        Collection::remove_all(&mut self.items, elements)
    }
}

impl IndexedCollection<i32> for JournaledVec {
    fn get(&self, index: usize) -> TriggerResult<&i32> {
        self.journal.push(format!("delegate get {index}"));
        IndexedCollection::get(&self.items, index)
    }

    fn insert(&mut self, index: usize, element: i32) -> TriggerResult<()> {
        self.mutate(format!("delegate insert {index} {element}"))?;
        IndexedCollection::insert(&mut self.items, index, element)
    }

    fn remove_at(&mut self, index: usize) -> TriggerResult<i32> {
        self.mutate(format!("delegate remove_at {index}"))?;
        IndexedCollection::remove_at(&mut self.items, index)
    }

    fn set(&mut self, index: usize, element: i32) -> TriggerResult<i32> {
        self.mutate(format!("delegate set {index} {element}"))?;
        IndexedCollection::set(&mut self.items, index, element)
    }

    fn index_of(&self, element: &i32) -> Option<usize> {
        IndexedCollection::index_of(&self.items, element)
    }
}

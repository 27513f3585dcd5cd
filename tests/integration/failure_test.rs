//! Integration tests for hook and delegate failures.

mod helpers;

use trigger_collection::prelude::*;

use helpers::{Journal, JournaledVec};

#[test]
fn test_failing_before_hook_skips_delegate_and_after() {
    let journal = Journal::new();
    let after = journal.clone();

    let mut gated = TriggerCollection::wrap(JournaledVec::new(&journal))
        .before_add(|x: &i32| -> TriggerResult<()> {
            if *x > 100 {
                return Err(TriggerError::hook("value too large to audit"));
            }
            Ok(())
        })
        .after_add(move |x, r| after.push(format!("after add {x} {r}")))
        .build();

    let err = gated.add(500).unwrap_err();
    assert_eq!(err.kind, ErrorKind::Hook);
    assert_eq!(err.message, "value too large to audit");
    assert!(gated.is_empty());
    assert!(journal.is_empty());

    assert!(gated.add(1).unwrap());
    assert_eq!(journal.lines(), vec!["delegate add 1", "after add 1 true"]);
}

#[test]
fn test_failing_after_hook_keeps_mutation() {
    let journal = Journal::new();

    let mut gated = TriggerCollection::wrap(JournaledVec::new(&journal))
        .after_remove_all(|_: &[i32], _| -> TriggerResult<()> {
            Err(TriggerError::hook("sink unavailable"))
        })
        .build();

    gated.add_all(&[1, 2, 3]).unwrap();
    let err = gated.remove_all(&[1, 3]).unwrap_err();

    assert!(err.is(ErrorKind::Hook));
    assert_eq!(gated.into_inner().items, vec![2]);
}

#[test]
fn test_delegate_failure_skips_after_hook() {
    let journal = Journal::new();
    let (before, after) = (journal.clone(), journal.clone());

    let mut gated = TriggerCollection::wrap(JournaledVec::read_only(&journal, vec![1]))
        .before_remove(move |x| before.push(format!("before remove {x}")))
        .after_remove(move |x, r| after.push(format!("after remove {x} {r}")))
        .build();

    let err = gated.remove(&1).unwrap_err();

    assert_eq!(err.kind, ErrorKind::Delegate);
    assert_eq!(journal.lines(), vec!["before remove 1", "delegate remove 1"]);
    assert_eq!(gated.base().items, vec![1]);
}

#[test]
fn test_vetoed_call_is_not_an_error() {
    let journal = Journal::new();
    let before = journal.clone();

    let mut gated = TriggerCollection::wrap(JournaledVec::read_only(&journal, vec![1]))
        .gate_remove(|_| false)
        .before_remove(move |_| before.push("before remove"))
        .build();

    assert!(!gated.remove(&1).unwrap());
    assert!(journal.is_empty());
}

#[test]
fn test_failing_get_hook_skips_read() {
    let journal = Journal::new();
    let after = journal.clone();

    let mut base = JournaledVec::new(&journal);
    base.items.push(3);

    let list = TriggerList::wrap(base)
        .before_get(|i| -> TriggerResult<()> {
            if i == 0 {
                return Err(TriggerError::hook("index 0 is reserved"));
            }
            Ok(())
        })
        .after_get(move |i, _: &i32| after.push(format!("after get {i}")))
        .build();

    let err = list.get(0).unwrap_err();
    assert!(err.is(ErrorKind::Hook));
    assert!(journal.is_empty());
}

#[test]
fn test_failing_after_get_hook_surfaces_error() {
    let list = TriggerList::wrap(vec![1, 2])
        .after_get(|_, value: &i32| -> TriggerResult<()> {
            if *value % 2 == 0 {
                return Err(TriggerError::hook("even value read"));
            }
            Ok(())
        })
        .build();

    assert_eq!(*list.get(0).unwrap(), 1);
    assert!(list.get(1).unwrap_err().is(ErrorKind::Hook));
}

#[test]
fn test_list_delegate_failure_propagates_unchanged() {
    let journal = Journal::new();
    let mut list = TriggerList::wrap(JournaledVec::read_only(&journal, Vec::new()))
        .before_add_all(|_: &[i32]| {})
        .build();

    let err = list.add_all(&[1]).unwrap_err();
    assert_eq!(err.kind, ErrorKind::Delegate);
    assert_eq!(err.message, "list is read-only");
    let err = list.insert(0, 1).unwrap_err();
    assert_eq!(err.kind, ErrorKind::Delegate);
}

//! Integration tests for the generic trigger collection.

mod helpers;

use std::collections::{BTreeSet, HashSet, VecDeque};

use trigger_collection::prelude::*;

use helpers::{Journal, JournaledVec};

#[test]
fn test_gate_vetoes_add_above_limit() {
    let journal = Journal::new();
    let (before, after) = (journal.clone(), journal.clone());

    let mut items: Vec<i32> = Vec::new();
    let mut gated = TriggerCollection::wrap(&mut items)
        .gate_add(|x| *x <= 5)
        .before_add(move |x| before.push(format!("before add {x}")))
        .after_add(move |x, r| after.push(format!("after add {x} {r}")))
        .build();

    assert!(gated.add(5).unwrap());
    assert!(!gated.add(6).unwrap());
    drop(gated);

    assert_eq!(items, vec![5]);
    assert_eq!(journal.lines(), vec!["before add 5", "after add 5 true"]);
}

#[test]
fn test_add_all_on_set_calls_hooks_once() {
    let journal = Journal::new();
    let (before, after) = (journal.clone(), journal.clone());

    let mut set = TriggerCollection::wrap(HashSet::new())
        .before_add_all(move |batch: &[i32]| before.push(format!("before {}", batch.len())))
        .after_add_all(move |batch: &[i32], changed| {
            after.push(format!("after {} {changed}", batch.len()))
        })
        .build();

    assert!(set.add_all(&[1, 2, 3]).unwrap());
    assert_eq!(set.len(), 3);
    assert_eq!(journal.lines(), vec!["before 3", "after 3 true"]);
}

#[test]
fn test_hooks_bracket_the_delegate_call() {
    let journal = Journal::new();
    let (before, after) = (journal.clone(), journal.clone());

    let mut gated = TriggerCollection::wrap(JournaledVec::new(&journal))
        .before_remove(move |x| before.push(format!("before remove {x}")))
        .after_remove(move |x, r| after.push(format!("after remove {x} {r}")))
        .build();

    gated.add(1).unwrap();
    gated.remove(&1).unwrap();

    assert_eq!(
        journal.lines(),
        vec![
            "delegate add 1",
            "before remove 1",
            "delegate remove 1",
            "after remove 1 true",
        ]
    );
}

#[test]
fn test_after_hook_receives_actual_result() {
    let journal = Journal::new();
    let after = journal.clone();

    let mut set = TriggerCollection::wrap(BTreeSet::from([1]))
        .after_add(move |x: &i32, added| after.push(format!("{x} {added}")))
        .build();

    assert!(!set.add(1).unwrap());
    assert!(set.add(2).unwrap());
    assert_eq!(journal.lines(), vec!["1 false", "2 true"]);
}

#[test]
fn test_passthrough_matches_base() {
    let journal = Journal::new();
    let hook = |journal: &Journal| {
        let journal = journal.clone();
        move |x: &i32| journal.push(format!("hook {x}"))
    };

    let bare = VecDeque::from(vec![3, 1, 2]);
    let mut wrapped = TriggerCollection::wrap(bare.clone())
        .before_add(hook(&journal))
        .before_remove(hook(&journal))
        .gate_add(|_| false)
        .build();

    assert_eq!(wrapped.len(), Collection::len(&bare));
    assert_eq!(wrapped.is_empty(), Collection::is_empty(&bare));
    assert_eq!(wrapped.contains(&1), Collection::contains(&bare, &1));
    assert_eq!(wrapped.contains(&9), Collection::contains(&bare, &9));
    assert_eq!(
        wrapped.iter().collect::<Vec<_>>(),
        Collection::iter(&bare).collect::<Vec<_>>()
    );

    wrapped.clear();
    assert!(wrapped.is_empty());
    assert!(journal.is_empty());
}

#[test]
fn test_remove_all_batch_veto_is_all_or_nothing() {
    let mut gated = TriggerCollection::wrap(vec![1, 2, 3, 4])
        .gate_batch(BatchOp::RemoveAll, |batch: &[i32]| !batch.contains(&1))
        .build();

    assert!(!gated.remove_all(&[1, 2]).unwrap());
    assert_eq!(gated.len(), 4);
    assert!(gated.remove_all(&[2, 3]).unwrap());
    assert_eq!(gated.into_inner(), vec![1, 4]);
}

#[test]
fn test_last_binding_wins() {
    let journal = Journal::new();
    let (first, second) = (journal.clone(), journal.clone());

    let mut gated = TriggerCollection::wrap(Vec::<i32>::new())
        .before_add(move |_| first.push("first"))
        .before_add(move |_| second.push("second"))
        .gate_add(|_| false)
        .gate_add(|_| true)
        .build();

    assert!(gated.add(1).unwrap());
    assert_eq!(journal.lines(), vec!["second"]);
}

#[test]
fn test_independent_builders_do_not_share_bindings() {
    let first = TriggerCollection::wrap(Vec::<i32>::new()).gate_add(|_| false);
    let second = TriggerCollection::wrap(Vec::<i32>::new()).gate_add(|_| true);

    let mut first = first.build();
    let mut second = second.build();

    assert!(!first.add(1).unwrap());
    assert!(second.add(1).unwrap());
    assert!(first.is_empty());
    assert_eq!(second.len(), 1);
}

#[test]
fn test_wrapped_collection_is_a_drop_in_replacement() {
    fn fill(target: &mut dyn Collection<i32>) -> TriggerResult<usize> {
        for value in 0..5 {
            target.add(value)?;
        }
        target.remove(&0)?;
        Ok(target.len())
    }

    let mut bare: Vec<i32> = Vec::new();
    let mut wrapped = TriggerCollection::wrap(Vec::new())
        .gate_add(|x: &i32| x % 2 == 0)
        .build();

    assert_eq!(fill(&mut bare).unwrap(), 4);
    assert_eq!(fill(&mut wrapped).unwrap(), 2);
    assert_eq!(wrapped.into_inner(), vec![2, 4]);
}

#[test]
fn test_configured_operations_reported() {
    let gated = TriggerCollection::wrap(Vec::<i32>::new())
        .gate(ElementOp::Remove, |_| true)
        .after_batch(BatchOp::AddAll, |_, _| {})
        .build();

    assert_eq!(
        gated.hooks().configured_operations(),
        vec![Operation::Remove, Operation::AddAll]
    );
}

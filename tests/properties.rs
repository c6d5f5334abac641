use std::cell::Cell;
use std::rc::Rc;

use proptest::prelude::*;
use proptest::test_runner::Config as ProptestConfig;
use recent_files::{HistoryEntry, RecencyList};

#[derive(Clone, Debug)]
enum Op {
    Add(u8),
    Clear,
}

fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        9 => (0u8..12).prop_map(Op::Add),
        1 => Just(Op::Clear),
    ]
}

fn entry(n: u8) -> HistoryEntry {
    HistoryEntry::new(format!("/libs/{n}.bib"))
}

proptest! {
    #![proptest_config(ProptestConfig {
        failure_persistence: None,
        .. ProptestConfig::default()
    })]
    #[test]
    fn invariants_hold_after_every_operation(
        capacity in 1usize..=6,
        ops in prop::collection::vec(arb_op(), 0..64),
    ) {
        let mut list = RecencyList::new(capacity).unwrap();
        let fired = Rc::new(Cell::new(0usize));
        let f = fired.clone();
        list.subscribe(move |_| f.set(f.get() + 1));

        for (i, op) in ops.iter().enumerate() {
            let before = list.to_vec();
            match op {
                Op::Add(n) => {
                    let added = entry(*n);
                    list.add(added.clone());
                    let after = list.to_vec();
                    prop_assert_eq!(&after[0], &added);
                    // the rest keeps its relative order, minus the promoted entry
                    let rest: Vec<_> = before.into_iter().filter(|e| *e != added).collect();
                    let expected_tail = &rest[..rest.len().min(capacity - 1)];
                    prop_assert_eq!(&after[1..], expected_tail);
                }
                Op::Clear => {
                    list.clear();
                    prop_assert!(list.is_empty());
                    prop_assert_eq!(list.size(), 0);
                }
            }
            prop_assert!(list.size() <= capacity);
            let mut unique = list.to_vec();
            unique.sort();
            unique.dedup();
            prop_assert_eq!(unique.len(), list.size());
            prop_assert_eq!(fired.get(), i + 1);
        }
    }

    #[test]
    fn readding_never_grows_the_list(
        capacity in 1usize..=6,
        adds in prop::collection::vec(0u8..12, 1..32),
    ) {
        let mut list = RecencyList::new(capacity).unwrap();
        for n in &adds {
            list.add(entry(*n));
        }
        let size = list.size();
        let front = list.get(0).unwrap().clone();
        list.add(front.clone());
        prop_assert_eq!(list.size(), size);
        prop_assert_eq!(list.front(), Some(&front));
    }
}

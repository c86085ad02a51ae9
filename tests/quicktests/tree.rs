use avl::{DuplicatePolicy, DuplicateValueError, Tree};

use std::collections::{BTreeSet, HashSet};

use crate::Op;

/// Applies a set of operations to a tree and a `BTreeSet`.
/// This way we can ensure that after a random smattering of inserts
/// and deletes we have the same set of values in both.
fn do_ops<T>(ops: &[Op<T>], bst: &mut Tree<T>, set: &mut BTreeSet<T>)
where
    T: Ord + Clone,
{
    for op in ops {
        match op {
            Op::Insert(x) => {
                let _ = bst.insert(x.clone());
                set.insert(x.clone());
            }
            Op::Delete(x) => {
                bst.delete(x);
                set.remove(x);
            }
        }
    }
}

fn in_order<T: Clone>(tree: &Tree<T>) -> Vec<T> {
    let mut values = Vec::new();
    tree.in_order(|x| values.push(x.clone()));
    values
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    let mut tree = Tree::new();
    let mut set = BTreeSet::new();

    do_ops(&ops, &mut tree, &mut set);
    in_order(&tree) == set.into_iter().collect::<Vec<_>>()
}

#[quickcheck]
fn invariants_hold_after_operations(ops: Vec<Op<i16>>) -> bool {
    let mut tree = Tree::new();
    let mut set = BTreeSet::new();

    do_ops(&ops, &mut tree, &mut set);
    tree.is_balanced() && tree.is_height_correct() && tree.is_ordered() && tree.len() == set.len()
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let mut tree = Tree::with_policy(DuplicatePolicy::Ignore);
    for x in &xs {
        tree.insert(*x).unwrap();
    }

    xs.iter().all(|x| tree.contains(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let mut tree = Tree::with_policy(DuplicatePolicy::Ignore);
    for x in &xs {
        tree.insert(*x).unwrap();
    }
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| !tree.contains(x))
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree = Tree::with_policy(DuplicatePolicy::Ignore);
    for x in &xs {
        tree.insert(*x).unwrap();
    }
    for delete in &deletes {
        tree.delete(delete);
    }

    let mut still_present = xs;
    for delete in &deletes {
        // We may have inserted the same value multiple times - delete each one.
        while let Some(pos) = still_present.iter().position(|x| x == delete) {
            still_present.swap_remove(pos);
        }
    }

    deletes.iter().all(|x| !tree.contains(x)) && still_present.iter().all(|x| tree.contains(x))
}

#[quickcheck]
fn duplicates_are_rejected(xs: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    let mut seen = HashSet::new();

    xs.into_iter().all(|x| {
        let height = tree.height();
        let len = tree.len();
        match tree.insert(x) {
            Ok(()) => seen.insert(x),
            Err(DuplicateValueError) => {
                !seen.insert(x) && tree.height() == height && tree.len() == len
            }
        }
    })
}

#[quickcheck]
fn deleting_missing_value_changes_nothing(xs: Vec<i8>, missing: i8) -> bool {
    let mut tree = Tree::with_policy(DuplicatePolicy::Ignore);
    for x in xs.iter().filter(|x| **x != missing) {
        tree.insert(*x).unwrap();
    }

    let before = in_order(&tree);
    let height = tree.height();
    tree.delete(&missing);

    in_order(&tree) == before && tree.height() == height
}

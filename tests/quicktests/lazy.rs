use lazy_bst::{Error, LazyTree};

use std::collections::{BTreeSet, HashSet};

use crate::Op;

/// Applies a set of operations to a tree and to two sets: one with the live
/// elements and one with every element that has a node. Returns `false` as
/// soon as the tree disagrees with the sets.
fn do_ops<E>(ops: &[Op<E>], tree: &mut LazyTree<E>) -> bool
where
    E: Ord + Clone,
{
    let mut live = BTreeSet::new();
    let mut all = BTreeSet::new();

    for op in ops {
        let agrees = match op {
            Op::Insert(x) => {
                all.insert(x.clone());
                tree.insert(x.clone()) == live.insert(x.clone())
            }
            Op::Remove(x) => tree.remove(x) == live.remove(x),
            Op::Find(x) => match tree.find(x) {
                Ok(found) => live.contains(found) && tree.contains(x),
                Err(Error::NotFound) => !live.contains(x) && !tree.contains(x),
                Err(Error::EmptyTree) => false,
            },
            Op::Clear => {
                tree.clear();
                live.clear();
                all.clear();
                true
            }
        };

        if !agrees || tree.size() != live.len() || tree.size_hard() != all.len() {
            return false;
        }
    }

    tree.iter().eq(live.iter()) && tree.iter_hard().eq(all.iter())
}

quickcheck::quickcheck! {
    fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
        let mut tree = LazyTree::new();
        do_ops(&ops, &mut tree)
    }
}

quickcheck::quickcheck! {
    fn sizes_match_distinct_count(xs: Vec<i8>) -> bool {
        let tree: LazyTree<_> = xs.iter().copied().collect();
        let distinct: HashSet<_> = xs.into_iter().collect();

        tree.size() == distinct.len() && tree.size_hard() == distinct.len()
    }
}

quickcheck::quickcheck! {
    fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
        let tree: LazyTree<_> = xs.iter().copied().collect();
        let added: HashSet<_> = xs.into_iter().collect();
        let nots: HashSet<_> = nots.into_iter().collect();
        let mut nots = nots.difference(&added);

        nots.all(|x| tree.find(x) == Err(Error::NotFound))
    }
}

quickcheck::quickcheck! {
    fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
        let mut tree: LazyTree<_> = xs.iter().copied().collect();
        let hard_before = tree.size_hard();
        for delete in &deletes {
            tree.remove(delete);
        }

        let deleted: HashSet<_> = deletes.iter().collect();
        let still_present: Vec<_> = xs.iter().filter(|x| !deleted.contains(x)).collect();

        tree.size_hard() == hard_before
            && deletes.iter().all(|x| !tree.contains(x))
            && still_present.iter().all(|x| tree.contains(x))
    }
}

quickcheck::quickcheck! {
    fn resurrection_adds_no_nodes(xs: Vec<i8>) -> bool {
        let mut tree: LazyTree<_> = xs.iter().copied().collect();
        let hard = tree.size_hard();
        for x in &xs {
            tree.remove(x);
        }
        let emptied = tree.is_empty();
        for x in &xs {
            tree.insert(*x);
        }

        emptied && tree.size() == hard && tree.size_hard() == hard
    }
}

quickcheck::quickcheck! {
    fn soft_traversal_is_strictly_ascending(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
        let mut tree: LazyTree<_> = xs.iter().copied().collect();
        for x in &deletes {
            tree.remove(x);
        }

        let mut soft = Vec::new();
        tree.traverse_soft(|x| soft.push(*x));
        let mut hard = Vec::new();
        tree.traverse_hard(|x| hard.push(*x));

        soft.windows(2).all(|w| w[0] < w[1])
            && hard.windows(2).all(|w| w[0] < w[1])
            && soft.iter().eq(tree.iter())
            && hard.iter().eq(tree.iter_hard())
    }
}

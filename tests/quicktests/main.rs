use quickcheck::{Arbitrary, Gen};

mod lazy;

/// The "things" a quicktest does to a tree.
#[derive(Copy, Clone, Debug)]
pub enum Op<E> {
    /// Insert the element into the tree
    Insert(E),
    /// Softly remove the element from the tree
    Remove(E),
    /// Look the element up
    Find(E),
    /// Throw everything away
    Clear,
}

impl<E> Arbitrary for Op<E>
where
    E: Arbitrary,
{
    /// Clearing is rare so trees get a chance to grow between clears.
    fn arbitrary(g: &mut Gen) -> Self {
        match g.choose(&[0, 0, 0, 1, 1, 2, 2, 3]).unwrap() {
            0 => Op::Insert(E::arbitrary(g)),
            1 => Op::Remove(E::arbitrary(g)),
            2 => Op::Find(E::arbitrary(g)),
            3 => Op::Clear,
            _ => unreachable!(),
        }
    }
}

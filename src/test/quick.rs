use quickcheck::{Arbitrary, Gen};

/// An enum for the various kinds of "things" to do to
/// a tree in a quicktest.
#[derive(Copy, Clone, Debug)]
pub(crate) enum Op<T> {
    /// Insert the element into the data structure
    Insert(T),
    /// Remove the element from the data structure
    Remove(T),
    /// Check that a deep copy equals the original
    Copy,
    /// Check that mirroring twice gives back the original
    Mirror,
}

impl<T> Arbitrary for Op<T>
where
    T: Arbitrary,
{
    /// Tells quickcheck how to randomly choose an operation. Inserts and
    /// removes are weighted so trees actually grow.
    fn arbitrary(g: &mut Gen) -> Self {
        match g.choose(&[0, 0, 0, 1, 1, 2, 3]).copied().unwrap_or(0) {
            0 => Op::Insert(T::arbitrary(g)),
            1 => Op::Remove(T::arbitrary(g)),
            2 => Op::Copy,
            _ => Op::Mirror,
        }
    }
}

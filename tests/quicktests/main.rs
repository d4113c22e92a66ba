use quickcheck::{Arbitrary, Gen};

mod ordered_tree;

/// An enum for the various kinds of "things" to do to
/// binary search trees in a quicktest.
#[derive(Copy, Clone, Debug)]
pub enum Op<T> {
    /// Insert the element into the data structure
    Insert(T),
    /// Remove the element from the data structure
    Remove(T),
}

impl<T> Arbitrary for Op<T>
where
    T: Arbitrary,
{
    /// Tells quickcheck how to randomly choose an operation
    fn arbitrary(g: &mut Gen) -> Self {
        if bool::arbitrary(g) {
            Op::Insert(T::arbitrary(g))
        } else {
            Op::Remove(T::arbitrary(g))
        }
    }
}

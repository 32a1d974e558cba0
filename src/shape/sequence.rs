use crate::value::Value;

/// What a single input argument looks like to the shape validator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extent {
    /// An ordered sequence with the given length
    Sequence(usize),

    /// A scalar that cannot be indexed, tagged with its kind
    Scalar(&'static str),
}

/// An ordered, indexable input sequence
///
/// `item` hands out an owned copy of the element so that each unit of work
/// (sequential or concurrent) owns its Element Tuple outright.
pub trait Sequence {
    type Item;

    /// Shape of this argument
    fn extent(&self) -> Extent;

    /// Owned copy of the element at `index`
    ///
    /// Only called with `index` below the validated common length.
    fn item(&self, index: usize) -> Self::Item;
}

impl<T: Clone> Sequence for Vec<T> {
    type Item = T;

    fn extent(&self) -> Extent {
        Extent::Sequence(self.len())
    }

    fn item(&self, index: usize) -> T {
        self[index].clone()
    }
}

impl<T: Clone> Sequence for &Vec<T> {
    type Item = T;

    fn extent(&self) -> Extent {
        Extent::Sequence(self.len())
    }

    fn item(&self, index: usize) -> T {
        self[index].clone()
    }
}

impl<T: Clone> Sequence for &[T] {
    type Item = T;

    fn extent(&self) -> Extent {
        Extent::Sequence(self.len())
    }

    fn item(&self, index: usize) -> T {
        self[index].clone()
    }
}

impl<T: Clone, const N: usize> Sequence for [T; N] {
    type Item = T;

    fn extent(&self) -> Extent {
        Extent::Sequence(N)
    }

    fn item(&self, index: usize) -> T {
        self[index].clone()
    }
}

impl<T: Clone, const N: usize> Sequence for &[T; N] {
    type Item = T;

    fn extent(&self) -> Extent {
        Extent::Sequence(N)
    }

    fn item(&self, index: usize) -> T {
        self[index].clone()
    }
}

/// Only `Value::List` is a sequence; every other variant is a scalar
impl Sequence for Value {
    type Item = Value;

    fn extent(&self) -> Extent {
        match self {
            Value::List(items) => Extent::Sequence(items.len()),
            other => Extent::Scalar(other.kind()),
        }
    }

    fn item(&self, index: usize) -> Value {
        match self {
            Value::List(items) => items[index].clone(),
            _ => Value::Null,
        }
    }
}

impl Sequence for &Value {
    type Item = Value;

    fn extent(&self) -> Extent {
        (**self).extent()
    }

    fn item(&self, index: usize) -> Value {
        (**self).item(index)
    }
}

/// The ordered set of input sequences handed to a multi-sequence operation
///
/// Homogeneous sets (arrays, vectors and slices of one sequence type) yield a
/// `Vec` per index. Fixed-arity tuples of sequences yield a typed tuple, so
/// `(&names, &ages)` hands the user function a `(String, u32)`.
pub trait SequenceSet {
    /// Element Tuple passed to the user function for one index
    type Tuple;

    /// Shape of every member, in argument order
    fn extents(&self) -> Vec<Extent>;

    /// Element Tuple for `index`
    fn tuple(&self, index: usize) -> Self::Tuple;
}

impl<S: Sequence, const N: usize> SequenceSet for [S; N] {
    type Tuple = Vec<S::Item>;

    fn extents(&self) -> Vec<Extent> {
        self.iter().map(|seq| seq.extent()).collect()
    }

    fn tuple(&self, index: usize) -> Self::Tuple {
        self.iter().map(|seq| seq.item(index)).collect()
    }
}

impl<S: Sequence, const N: usize> SequenceSet for &[S; N] {
    type Tuple = Vec<S::Item>;

    fn extents(&self) -> Vec<Extent> {
        self.iter().map(|seq| seq.extent()).collect()
    }

    fn tuple(&self, index: usize) -> Self::Tuple {
        self.iter().map(|seq| seq.item(index)).collect()
    }
}

impl<S: Sequence> SequenceSet for Vec<S> {
    type Tuple = Vec<S::Item>;

    fn extents(&self) -> Vec<Extent> {
        self.iter().map(|seq| seq.extent()).collect()
    }

    fn tuple(&self, index: usize) -> Self::Tuple {
        self.iter().map(|seq| seq.item(index)).collect()
    }
}

impl<S: Sequence> SequenceSet for &[S] {
    type Tuple = Vec<S::Item>;

    fn extents(&self) -> Vec<Extent> {
        self.iter().map(|seq| seq.extent()).collect()
    }

    fn tuple(&self, index: usize) -> Self::Tuple {
        self.iter().map(|seq| seq.item(index)).collect()
    }
}

macro_rules! tuple_sequence_set {
    ($($name:ident => $idx:tt),+) => {
        impl<$($name: Sequence),+> SequenceSet for ($($name,)+) {
            type Tuple = ($(<$name as Sequence>::Item,)+);

            fn extents(&self) -> Vec<Extent> {
                vec![$(self.$idx.extent()),+]
            }

            fn tuple(&self, index: usize) -> Self::Tuple {
                ($(self.$idx.item(index),)+)
            }
        }
    };
}

tuple_sequence_set!(A => 0);
tuple_sequence_set!(A => 0, B => 1);
tuple_sequence_set!(A => 0, B => 1, C => 2);
tuple_sequence_set!(A => 0, B => 1, C => 2, D => 3);

use std::collections::VecDeque;
use std::rc::Rc;

/// An ordered, finite collection that the operations can sweep.
///
/// Elements are indexed from `0` to `len() - 1` and are handed out by
/// reference; a sweep never mutates the sequence.
pub trait Sequence {
    /// The element type
    type Item;

    /// The number of elements in the sequence
    fn len(&self) -> usize;

    /// Check whether the sequence is empty
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Get the element at the index, if it exists
    fn get(&self, index: usize) -> Option<&Self::Item>;

    /// The elements in ascending index order
    fn elements(&self) -> impl Iterator<Item = &Self::Item>;
}

impl<T> Sequence for [T] {
    type Item = T;

    #[inline]
    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    #[inline]
    fn get(&self, index: usize) -> Option<&T> {
        <[T]>::get(self, index)
    }

    #[inline]
    fn elements(&self) -> impl Iterator<Item = &T> {
        <[T]>::iter(self)
    }
}

impl<T, const N: usize> Sequence for [T; N] {
    type Item = T;

    #[inline]
    fn len(&self) -> usize {
        N
    }

    #[inline]
    fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }

    #[inline]
    fn elements(&self) -> impl Iterator<Item = &T> {
        self.as_slice().iter()
    }
}

impl<T> Sequence for Vec<T> {
    type Item = T;

    #[inline]
    fn len(&self) -> usize {
        Vec::len(self)
    }

    #[inline]
    fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }

    #[inline]
    fn elements(&self) -> impl Iterator<Item = &T> {
        self.as_slice().iter()
    }
}

impl<T> Sequence for VecDeque<T> {
    type Item = T;

    #[inline]
    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    #[inline]
    fn get(&self, index: usize) -> Option<&T> {
        VecDeque::get(self, index)
    }

    #[inline]
    fn elements(&self) -> impl Iterator<Item = &T> {
        VecDeque::iter(self)
    }
}

impl<T> Sequence for Box<[T]> {
    type Item = T;

    #[inline]
    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    #[inline]
    fn get(&self, index: usize) -> Option<&T> {
        <[T]>::get(self, index)
    }

    #[inline]
    fn elements(&self) -> impl Iterator<Item = &T> {
        <[T]>::iter(self)
    }
}

// Rc<[T]> is how dynamic values store their sequences
impl<T> Sequence for Rc<[T]> {
    type Item = T;

    #[inline]
    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    #[inline]
    fn get(&self, index: usize) -> Option<&T> {
        <[T]>::get(self, index)
    }

    #[inline]
    fn elements(&self) -> impl Iterator<Item = &T> {
        <[T]>::iter(self)
    }
}

impl<S> Sequence for &S
where
    S: Sequence + ?Sized,
{
    type Item = S::Item;

    #[inline]
    fn len(&self) -> usize {
        S::len(self)
    }

    #[inline]
    fn get(&self, index: usize) -> Option<&S::Item> {
        S::get(self, index)
    }

    #[inline]
    fn elements(&self) -> impl Iterator<Item = &S::Item> {
        S::elements(self)
    }
}

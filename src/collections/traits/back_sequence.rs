use crate::collections::contiguous::Vector;

/// A collection which can be modified and accessed at its back, such as a [`Vector`]. This is all
/// a [`Stack`](crate::collections::adaptor::Stack) needs from the sequence it wraps.
pub trait BackSequence {
    type Item;

    /// Appends `value` after the current last element.
    fn push_back(&mut self, value: Self::Item);

    /// Removes and returns the last element, or [`None`] if the collection is empty.
    fn pop_back(&mut self) -> Option<Self::Item>;

    fn back(&self) -> Option<&Self::Item>;

    fn back_mut(&mut self) -> Option<&mut Self::Item>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T> BackSequence for Vector<T> {
    type Item = T;

    fn push_back(&mut self, value: T) {
        self.push(value);
    }

    fn pop_back(&mut self) -> Option<T> {
        self.pop()
    }

    fn back(&self) -> Option<&T> {
        self.last()
    }

    fn back_mut(&mut self) -> Option<&mut T> {
        self.last_mut()
    }

    fn len(&self) -> usize {
        Vector::len(self)
    }
}

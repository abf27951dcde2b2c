use std::cmp::Ordering;
use std::fmt::{self, Debug, Formatter};
use std::hash::{Hash, Hasher};

use crate::collections::contiguous::Vector;
use crate::collections::traits::BackSequence;

/// A last-in, first-out adaptor over a [`BackSequence`], which is a [`Vector`] by default.
///
/// The Stack owns its underlying sequence and only exposes its back: values are pushed onto and
/// popped from the top. Comparisons delegate to the underlying sequence, so two stacks are equal
/// when their sequences are, and order lexicographically from the bottom up.
///
/// # Examples
/// ```
/// # use generic_algo::collections::adaptor::Stack;
/// let mut stack = Stack::new();
/// stack.push(1);
/// stack.push(2);
/// stack.push(3);
///
/// assert_eq!(stack.top(), Some(&3));
/// assert_eq!(stack.pop(), Some(3));
/// assert_eq!(stack.top(), Some(&2));
/// assert_eq!(stack.len(), 2);
/// ```
pub struct Stack<T, S: BackSequence<Item = T> = Vector<T>> {
    seq: S,
}

impl<T> Stack<T> {
    /// Creates an empty Stack backed by a [`Vector`].
    pub const fn new() -> Stack<T> {
        Stack { seq: Vector::new() }
    }
}

impl<T, S: BackSequence<Item = T>> Stack<T, S> {
    /// Creates a Stack on top of `seq`. Its last value becomes the top of the Stack.
    pub const fn with_sequence(seq: S) -> Stack<T, S> {
        Stack { seq }
    }

    /// Consumes the Stack, returning the underlying sequence.
    pub fn into_inner(self) -> S {
        self.seq
    }

    /// Returns a reference to the most recently pushed value, or [`None`] if the Stack is empty.
    pub fn top(&self) -> Option<&T> {
        self.seq.back()
    }

    pub fn top_mut(&mut self) -> Option<&mut T> {
        self.seq.back_mut()
    }

    pub fn push(&mut self, value: T) {
        self.seq.push_back(value)
    }

    /// Removes and returns the most recently pushed value, or [`None`] if the Stack is empty.
    pub fn pop(&mut self) -> Option<T> {
        self.seq.pop_back()
    }

    pub fn len(&self) -> usize {
        self.seq.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seq.is_empty()
    }
}

impl<T, S: BackSequence<Item = T>> From<S> for Stack<T, S> {
    fn from(seq: S) -> Self {
        Stack::with_sequence(seq)
    }
}

impl<T, S: BackSequence<Item = T> + Default> Default for Stack<T, S> {
    fn default() -> Self {
        Stack::with_sequence(S::default())
    }
}

impl<T, S: BackSequence<Item = T> + Clone> Clone for Stack<T, S> {
    fn clone(&self) -> Self {
        Stack::with_sequence(self.seq.clone())
    }
}

impl<T, S: BackSequence<Item = T> + PartialEq> PartialEq for Stack<T, S> {
    fn eq(&self, other: &Self) -> bool {
        self.seq == other.seq
    }
}

impl<T, S: BackSequence<Item = T> + Eq> Eq for Stack<T, S> {}

impl<T, S: BackSequence<Item = T> + PartialOrd> PartialOrd for Stack<T, S> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.seq.partial_cmp(&other.seq)
    }
}

impl<T, S: BackSequence<Item = T> + Ord> Ord for Stack<T, S> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.seq.cmp(&other.seq)
    }
}

impl<T, S: BackSequence<Item = T> + Hash> Hash for Stack<T, S> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.seq.hash(state)
    }
}

impl<T, S: BackSequence<Item = T> + Debug> Debug for Stack<T, S> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stack")
            .field("seq", &self.seq)
            .finish()
    }
}

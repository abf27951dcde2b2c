use std::cell::RefCell;
use std::ops::{Deref, DerefMut};
use std::rc::Rc;

use crate::traits::{FalseType, TrueType, TypeTraits};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ZeroSizedType;

// SAFETY: ZeroSizedType is Copy.
unsafe impl TypeTraits for ZeroSizedType {
    type Trivial = TrueType;
}

/// Increments a shared counter whenever a clone of it is dropped, used to check that algorithms
/// and buffers neither leak nor double-drop values.
#[derive(Debug, Clone)]
pub struct CountedDrop(pub Rc<RefCell<usize>>);

impl CountedDrop {
    pub fn new(value: usize) -> CountedDrop {
        CountedDrop(Rc::new(RefCell::new(value)))
    }
}

// SAFETY: FalseType is always a valid classification.
unsafe impl TypeTraits for CountedDrop {
    type Trivial = FalseType;
}

impl Deref for CountedDrop {
    type Target = Rc<RefCell<usize>>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for CountedDrop {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl Drop for CountedDrop {
    fn drop(&mut self) {
        self.0.replace_with(|v| *v + 1);
    }
}

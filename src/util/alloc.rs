//! Test helpers for observing how containers treat their elements.

use std::cell::Cell;
use std::rc::Rc;

/// A zero-sized element, used to check that containers never allocate for it.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ZeroSizedType;

/// Increments a shared counter each time an instance is dropped. Clones share the counter, so a
/// container's drop behaviour can be measured from the outside.
#[derive(Debug, Clone)]
pub struct CountedDrop(pub Rc<Cell<usize>>);

impl CountedDrop {
    pub fn new() -> CountedDrop {
        CountedDrop(Rc::new(Cell::new(0)))
    }

    pub fn drops(&self) -> usize {
        self.0.get()
    }
}

impl Drop for CountedDrop {
    fn drop(&mut self) {
        self.0.set(self.0.get() + 1);
    }
}

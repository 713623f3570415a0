#![cfg(test)]

use std::iter;

use super::*;
use crate::util::alloc::{CountedDrop, ZeroSizedType};
use crate::util::error::{CapacityOverflow, IndexOutOfBounds, InsertError, ReserveError};
use crate::util::panic::assert_panics;

#[test]
fn test_creation_defaults() {
    let vec = Vector::<i32>::with_cap(0);
    assert_eq!(vec.cap(), DEFAULT_CAP, "A requested capacity of 0 should use the default.");
    assert_eq!(vec.len(), 0);

    let vec = Vector::<i32>::with_cap(3);
    assert_eq!(vec.cap(), 3);

    let mut vec = Vector::<i32>::new();
    assert_eq!(vec.cap(), 0, "new shouldn't allocate.");
    vec.push(1);
    assert_eq!(vec.cap(), DEFAULT_CAP, "An unallocated Vector should grow to the default.");
}

#[test]
fn test_growth_policy() {
    let mut caps = [0_usize; 6];
    let mut cap = 1;
    for slot in caps.iter_mut() {
        cap = next_cap(cap).unwrap();
        *slot = cap;
    }
    assert_eq!(caps, [2, 3, 4, 6, 9, 13], "Growth should be 1.5x, but always at least +1.");
    assert_eq!(next_cap(usize::MAX / 2 + 1), Err(CapacityOverflow));
    assert!(next_cap(usize::MAX / 2).is_ok());
}

#[test]
fn test_push_and_order_preservation() {
    let mut vec = Vector::with_cap(1);
    let mut reallocs = 0;
    let mut last_cap = vec.cap();

    for i in 0..1000_u32 {
        vec.push(i);
        assert!(vec.len() <= vec.cap(), "len should never exceed cap.");
        if vec.cap() != last_cap {
            reallocs += 1;
            last_cap = vec.cap();
        }
    }

    assert!(reallocs <= 20, "Pushing 1000 items should only reallocate O(log n) times.");
    for i in 0..1000 {
        assert_eq!(vec.get(i), Some(&(i as u32)), "Items should retain insertion order.");
    }
    assert_eq!(vec.get(1000), None);
}

#[test]
fn test_pop() {
    let mut vec: Vector<_> = (1..=3).collect();
    assert_eq!(vec.pop(), Some(3));
    assert_eq!(vec.pop(), Some(2));
    assert_eq!(vec.pop(), Some(1));
    assert_eq!(vec.pop(), None, "Popping an empty Vector should fail.");
    assert_eq!(vec.len(), 0, "A failed pop should leave len at 0.");
}

#[test]
fn test_set() {
    let mut vec: Vector<_> = (0..3).collect();
    assert_eq!(vec.set(2, 20), Ok(2));
    assert_eq!(
        vec.set(3, 30),
        Err(IndexOutOfBounds { index: 3, len: 3 }),
        "set shouldn't extend the Vector."
    );
    assert_eq!(&*vec, &[0, 1, 20]);
}

#[test]
fn test_insert() {
    let mut vec = Vector::new();
    vec.push(2);
    vec.push(3);
    vec.insert(0, 1);
    assert_eq!(&*vec, &[1, 2, 3], "Inserting at the front should shift all items.");

    vec.insert(3, 4);
    assert_eq!(&*vec, &[1, 2, 3, 4], "Inserting at len should append.");

    assert_eq!(
        vec.try_insert(6, 0),
        Err(InsertError::IndexOutOfBounds(IndexOutOfBounds { index: 6, len: 4 }))
    );
    assert_eq!(&*vec, &[1, 2, 3, 4], "A failed insert shouldn't mutate the Vector.");

    let mut full = Vector::with_cap(2);
    full.extend([10, 30]);
    full.insert(1, 20);
    assert_eq!(full.cap(), 3, "Inserting into a full Vector should grow it.");
    assert_eq!(&*full, &[10, 20, 30]);

    assert_panics!({
        let mut vec = Vector::<u8>::new();
        vec.insert(1, 0);
    });
}

#[test]
fn test_remove() {
    let mut vec: Vector<_> = "Hello world!".chars().collect();
    assert_eq!(vec.remove(1), 'e');
    assert_eq!(vec.remove(4), ' ');
    assert_eq!(vec, "Hlloworld!".chars().collect());

    assert_panics!({
        let mut vec: Vector<u8> = Vector::new();
        vec.remove(0);
    });
}

#[test]
fn test_reserve() {
    let mut vec: Vector<_> = (0..4).collect();
    let cap = vec.cap();

    vec.reserve(2);
    assert_eq!(vec.cap(), cap, "Reserving less than the capacity should be a no-op.");

    vec.reserve(100);
    assert_eq!(vec.cap(), 100, "Reserve should set the exact capacity.");
    assert_eq!(&*vec, &[0, 1, 2, 3], "Existing items should be kept.");

    assert_eq!(
        vec.try_reserve(usize::MAX),
        Err(ReserveError::CapacityOverflow(CapacityOverflow)),
        "A capacity larger than isize::MAX bytes should fail."
    );
    assert_eq!(vec.cap(), 100, "A failed reserve should leave the Vector unchanged.");
    assert_eq!(&*vec, &[0, 1, 2, 3]);
}

#[test]
fn test_clear() {
    let counter = CountedDrop::new();
    let mut vec: Vector<_> = iter::repeat_with(|| counter.clone()).take(10).collect();
    let cap = vec.cap();

    vec.clear();
    assert_eq!(counter.drops(), 10, "clear should drop all elements.");
    assert_eq!(vec.len(), 0);
    assert_eq!(vec.cap(), cap, "clear should keep the allocation.");
}

#[test]
fn test_drop() {
    let counter = CountedDrop::new();
    let vec: Vector<_> = iter::repeat_with(|| counter.clone()).take(10).collect();

    drop(vec);
    assert_eq!(counter.drops(), 10, "10 elements should have been dropped.");
}

#[test]
fn test_zst_support() {
    let mut vec = Vector::new();
    for _ in 0..100 {
        vec.push(ZeroSizedType);
    }
    assert_eq!(vec.len(), 100);
    assert_eq!(vec.pop(), Some(ZeroSizedType));
    assert_eq!(vec.get(98), Some(&ZeroSizedType));
}

#[test]
fn test_extend_from_slice() {
    let mut vec = Vector::with_cap(2);
    vec.extend_from_slice(b"hello");
    vec.extend_from_slice(b", world");
    assert_eq!(&*vec, b"hello, world");
    assert!(vec.cap() >= vec.len());
}

#[test]
fn test_iterators() {
    let mut vec: Vector<_> = (0_usize..5).collect();
    for i in vec.iter_mut() {
        *i *= 2;
    }
    assert_eq!(&*vec, &[0, 2, 4, 6, 8]);

    let mut iter = vec.clone().into_iter();
    assert_eq!(iter.next(), Some(0));
    assert_eq!(iter.next_back(), Some(8));
    assert_eq!(iter.len(), 3);
    assert_eq!(iter.collect::<Vector<_>>(), (1..4).map(|i| i * 2).collect());

    let counter = CountedDrop::new();
    let vec: Vector<_> = iter::repeat_with(|| counter.clone()).take(10).collect();
    let mut iter = vec.into_iter();
    drop(iter.next());
    drop(iter);
    assert_eq!(
        counter.drops(),
        10,
        "Dropping a partially consumed iterator should drop the remaining elements."
    );
}

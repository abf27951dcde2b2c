#![cfg(test)]

use std::mem::MaybeUninit;
use std::rc::Rc;

use super::*;
use crate::util::alloc::CountedDrop;

#[derive(Clone, Copy, Debug, PartialEq)]
struct Pixel(u8, u8, u8);

#[derive(Clone, Debug, PartialEq)]
struct Label(String);

crate::type_traits!(trivial: Pixel);
crate::type_traits!(non_trivial: Label);

#[test]
fn test_classification() {
    assert!(is_trivial::<u8>());
    assert!(is_trivial::<f64>());
    assert!(is_trivial::<char>());
    assert!(is_trivial::<&String>(), "Shared references are always trivial.");
    assert!(is_trivial::<[u16; 8]>());
    assert!(is_trivial::<Option<i32>>());
    assert!(is_trivial::<(u8, i64, bool, char)>());
    assert!(is_trivial::<Pixel>());

    assert!(!is_trivial::<String>());
    assert!(!is_trivial::<Rc<u8>>());
    assert!(!is_trivial::<Box<u8>>());
    assert!(!is_trivial::<[String; 2]>());
    assert!(!is_trivial::<Option<Label>>());
    assert!(
        !is_trivial::<(u8, u8, u8, String)>(),
        "A single non-trivial element makes the tuple non-trivial."
    );
}

#[test]
fn test_conjunction() {
    assert!(<<TrueType as Bool>::And<TrueType> as Bool>::VALUE);
    assert!(!<<TrueType as Bool>::And<FalseType> as Bool>::VALUE);
    assert!(!<<FalseType as Bool>::And<TrueType> as Bool>::VALUE);
    assert!(!<<FalseType as Bool>::And<FalseType> as Bool>::VALUE);
}

#[test]
fn test_copy_run() {
    let src = [1_u32, 2, 3, 4];
    let mut dst = [0_u32; 4];
    copy_run(&src, &mut dst);
    assert_eq!(dst, src);

    let src = [Label("a".into()), Label("b".into())];
    let mut dst = [Label(String::new()), Label(String::new())];
    copy_run(&src, &mut dst);
    assert_eq!(dst, src);
}

#[test]
fn test_copy_run_within() {
    let mut run = [0_u8, 1, 2, 3, 4, 5, 6, 7];
    copy_run_within(&mut run, 0..4, 2);
    assert_eq!(run, [0, 1, 0, 1, 2, 3, 6, 7], "Overlapping forward copy should act like memmove.");

    let mut run = [0_u8, 1, 2, 3, 4, 5, 6, 7];
    copy_run_within(&mut run, 3..8, 0);
    assert_eq!(run, [3, 4, 5, 6, 7, 5, 6, 7]);

    let mut run: Vec<String> = (0..6).map(|i| i.to_string()).collect();
    copy_run_within(&mut run, 0..4, 2);
    assert_eq!(run, ["0", "1", "0", "1", "2", "3"]);

    let mut run: Vec<String> = (0..6).map(|i| i.to_string()).collect();
    copy_run_within(&mut run, 2..6, 0);
    assert_eq!(run, ["2", "3", "4", "5", "4", "5"]);
}

#[test]
fn test_clone_into_uninit() {
    let counter = CountedDrop::new(0);
    let src = [counter.clone(), counter.clone()];
    let mut dst = [const { MaybeUninit::<CountedDrop>::uninit() }; 2];

    clone_run_into_uninit(&src, &mut dst);
    assert_eq!(Rc::strong_count(&counter), 5, "Both values should have been cloned.");

    for slot in dst.iter_mut() {
        // SAFETY: Every slot has just been initialized.
        unsafe { slot.assume_init_drop() };
    }
    assert_eq!(*counter.borrow(), 2);

    let src = [Pixel(1, 2, 3); 3];
    let mut dst = [MaybeUninit::<Pixel>::uninit(); 3];
    clone_run_into_uninit(&src, &mut dst);
    // SAFETY: Every slot has just been initialized.
    assert_eq!(unsafe { dst[2].assume_init() }, Pixel(1, 2, 3));
}

#![cfg(test)]

use super::*;
use crate::collections::contiguous::Vector;
use crate::util::panic::assert_panics;

#[test]
fn test_capability_ranks() {
    assert!(InputTag::RANK < ForwardTag::RANK);
    assert!(ForwardTag::RANK < BidirectionalTag::RANK);
    assert!(BidirectionalTag::RANK < RandomAccessTag::RANK);
    assert!(RandomAccessTag::RANK < ContiguousTag::RANK);
    assert!(OutputTag::RANK < InputTag::RANK);
    assert_eq!(ContiguousTag::NAME, "ContiguousTag");

    assert!(has_capability::<[u8], RandomAccessTag>());
    assert!(has_capability::<ForwardView<&[u8]>, ForwardTag>());
    assert!(!has_capability::<ForwardView<&[u8]>, BidirectionalTag>());
    assert!(!has_capability::<RandomAccessView<&[u8]>, ContiguousTag>());
}

#[test]
fn test_category_of_views() {
    let values = [1, 2, 3];
    assert_eq!(category_of(&values[..]), ContiguousTag);
    assert_eq!(category_of(&ForwardView(&values[..])), ForwardTag);
    assert_eq!(category_of(&BidirectionalView(&values[..])), BidirectionalTag);
    assert_eq!(category_of(&RandomAccessView(&values[..])), RandomAccessTag);
    assert_eq!(category_of(&ReverseView(&values[..])), BidirectionalTag);
}

#[test]
fn test_slice_positions() {
    let values = [10, 20, 30];
    let seq = &values[..];

    let mut pos = seq.begin();
    assert_eq!(*seq.at(&pos), 10);
    seq.next(&mut pos);
    assert_eq!(*seq.at(&pos), 20);
    seq.prev(&mut pos);
    assert_eq!(pos, 0);
    assert_eq!(seq.jump(&pos, 3), seq.end());
    assert_eq!(seq.diff(&3, &1), -2);
}

#[test]
fn test_slice_bounds() {
    assert_panics!({
        let values = [1, 2, 3];
        let _ = values[..].at(&3);
    }, "Index 3 out of bounds");
    assert_panics!({
        let values = [1, 2, 3];
        let mut pos = 0;
        values[..].prev(&mut pos);
    }, "Moving position 0 by -1");
    assert_panics!({
        let values = [1, 2, 3];
        let _ = values[..].jump(&1, 5);
    });
    assert_panics!({
        let mut values = [1, 2, 3];
        values[..].swap_at(&0, &7);
    }, "Index 7 out of bounds");

    let values = [1, 2, 3];
    let mut end = 2;
    values[..].next(&mut end);
    assert_eq!(end, 3, "Moving onto the past-the-end position is allowed.");
}

#[test]
fn test_distance_and_advance_dispatch() {
    let values = [0, 1, 2, 3, 4, 5];
    let seq = &values[..];

    assert_eq!(<ContiguousTag as Traverse<[i32]>>::distance(seq, &1, &5), 4);
    assert_eq!(<ContiguousTag as Traverse<[i32]>>::distance(seq, &5, &1), -4);

    let forward = ForwardView(seq);
    assert_eq!(<ForwardTag as Traverse<_>>::distance(&forward, &1, &5), 4);

    let bidi = BidirectionalView(seq);
    let mut pos = 5;
    <BidirectionalTag as Traverse<_>>::advance(&bidi, &mut pos, -3);
    assert_eq!(pos, 2);
    <BidirectionalTag as Traverse<_>>::advance(&bidi, &mut pos, 2);
    assert_eq!(pos, 4);

    let mut pos = 0;
    <ForwardTag as Traverse<_>>::advance(&forward, &mut pos, 6);
    assert_eq!(pos, 6);
}

#[test]
fn test_reverse_view() {
    let mut values = [1, 2, 3, 4];
    let view = ReverseView(&values[..]);

    let mut collected = Vec::new();
    let mut pos = view.begin();
    while pos != view.end() {
        collected.push(*view.at(&pos));
        view.next(&mut pos);
    }
    assert_eq!(collected, [4, 3, 2, 1]);
    assert_eq!(view.base_position(&4), 3);

    let mut view = ReverseView(&mut values[..]);
    *view.at_mut(&4) = 40;
    view.swap_at(&1, &2);
    assert_eq!(values, [2, 1, 3, 40]);
}

#[test]
fn test_writer_and_back_inserter() {
    let src = [1, 2, 3];
    let mut dst = [0; 4];

    let mut writer = Writer::new(&mut dst[..], 1);
    writer.put(9);
    writer.put_slice(&src[..2]);
    assert_eq!(*writer.position(), 4);
    assert_eq!(dst, [0, 9, 1, 2]);

    let mut out = Vector::new();
    let mut inserter = BackInserter::new(&mut out);
    inserter.put(1);
    inserter.put_slice(&src);
    assert_eq!(&*out, &[1, 1, 2, 3]);
}

#[test]
fn test_writer_through_restricted_view() {
    let src = [String::from("a"), String::from("b")];
    let mut dst = vec![String::new(); 3];

    let mut view = ForwardView(&mut dst[..]);
    let mut writer = Writer::new(&mut view, 1);
    writer.put_slice(&src);
    assert_eq!(writer.into_position(), 3);
    assert_eq!(dst, ["", "a", "b"]);
}

#[test]
fn test_rotate_strategies() {
    fn rotated<C: Traverse<[u32]>>(middle: usize) -> (Vec<u32>, usize) {
        let mut values: Vec<u32> = (0..10).collect();
        let pos = C::rotate(&mut values[..], 0, middle, 10);
        (values, pos)
    }

    for middle in 0..=10 {
        let mut expected: Vec<u32> = (0..10).collect();
        expected.rotate_left(middle);
        let new_first = 10 - middle;

        assert_eq!(rotated::<ForwardTag>(middle), (expected.clone(), new_first));
        assert_eq!(rotated::<BidirectionalTag>(middle), (expected.clone(), new_first));
        assert_eq!(rotated::<RandomAccessTag>(middle), (expected.clone(), new_first));
        assert_eq!(rotated::<ContiguousTag>(middle), (expected, new_first));
    }
}

#[test]
fn test_gcd() {
    assert_eq!(gcd(12, 8), 4);
    assert_eq!(gcd(7, 3), 1);
    assert_eq!(gcd(10, 0), 10);
}

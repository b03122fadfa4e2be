//! Slicing and access scenarios over a shared five-element buffer.

use input_buffer::{Index, SliceView};
use pretty_assertions::assert_eq;

fn numbers() -> SliceView<i32> {
    SliceView::new(vec![1, 2, 3, 4, 5])
}

#[test]
fn test_slice_between() {
    assert_eq!(numbers().range(1..3), [2, 3]);
}

#[test]
fn test_slice_to() {
    assert_eq!(numbers().range(..3), [1, 2, 3]);
}

#[test]
fn test_slice_from() {
    assert_eq!(numbers().range(2..), [3, 4, 5]);
}

#[test]
fn test_slice_to_end_anchor() {
    let s = numbers().slice(Index::FromStart(1)..Index::FromEnd(1));
    assert_eq!(s, [2, 3, 4]);
}

#[test]
fn test_slice_from_end_anchor() {
    let s = numbers().slice(Index::FromEnd(5)..Index::FromStart(1));
    assert_eq!(s, [1]);
}

#[test]
fn test_slice_full_range() {
    let s = numbers();
    assert_eq!(s.slice(..), s);
    assert_eq!(s.range(..), s);
}

#[test]
fn test_explicit_length_slice() {
    let s = numbers();
    assert_eq!(s.slice_len(1, 3), [2, 3, 4]);
    assert_eq!(s.slice_len(Index::FromEnd(2), 2), [4, 5]);
    assert_eq!(s.slice_len(5, 0), [0i32; 0]);
}

#[test]
fn test_try_get_past_end() {
    let s = SliceView::new(vec![1, 2, 3]);
    assert_eq!(s.try_get(3), None);
}

#[test]
fn test_try_get_last() {
    let s = SliceView::new(vec![1, 2, 3]);
    assert_eq!(s.try_get(2), Some(3));
}

#[test]
fn test_anchor_resolution() {
    let s = numbers();
    assert_eq!(s.get(Index::FromEnd(5)), Ok(1));
    assert_eq!(s.slice(..Index::FromEnd(1)).len(), 4);
    assert_eq!(s.get(Index::FromEnd(1)), Ok(5));
}

#[test]
fn test_nested_slices_address_backing() {
    let s = numbers();
    let inner = s.range(1..).range(1..).range(..2);
    assert_eq!(inner, [3, 4]);
    assert_eq!(inner.raw_range(), 2..4);

    inner.set(Index::FromEnd(1), 40).unwrap();
    assert_eq!(s, [1, 2, 3, 40, 5]);
    assert_eq!(s.range(3..).get(0), Ok(40));
}

#[test]
fn test_reverse_comparisons() {
    let s = numbers().range(1..3);
    assert!(vec![2, 3] == s);
    assert!([2, 3] == s);
    assert!(vec![2, 3, 4] != s);
}

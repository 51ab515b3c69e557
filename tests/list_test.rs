//! Tests for building and rendering linked lists

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use lcfixture::util::testing;
use lcfixture::{list_from_values, parse_list, DomainError, ListNode};
use rstest::rstest;

#[rstest]
#[case(vec![1, 2, 3], "[1, 2, 3]")]
#[case(vec![42], "[42]")]
#[case(vec![-1, 0, 1], "[-1, 0, 1]")]
#[case(vec![5, 5, 5, 5], "[5, 5, 5, 5]")]
fn given_values_when_building_list_then_renders_same_sequence(
    #[case] values: Vec<i32>,
    #[case] expected: &str,
) {
    testing::init_test_setup();
    let head = list_from_values(values.clone()).expect("non-empty list");

    assert_eq!(head.to_string(), expected);
    assert_eq!(head.to_vec(), values);
    assert_eq!(head.len(), values.len());
}

#[test]
fn given_empty_sequence_when_building_list_then_returns_none() {
    assert!(list_from_values(std::iter::empty::<i32>()).is_none());
    assert!(parse_list("[]").unwrap().is_none());
}

#[test]
fn given_built_list_when_walking_next_then_links_follow_input_order() {
    let head = list_from_values(1..=3).unwrap();

    let second = head.next.as_deref().unwrap();
    let third = second.next.as_deref().unwrap();
    assert_eq!((head.val, second.val, third.val), (1, 2, 3));
    assert!(third.next.is_none());
}

#[test]
fn given_hand_built_list_when_compared_then_equals_built_list() {
    let mut expected = ListNode::new(1);
    let mut second = ListNode::new(2);
    second.next = Some(Box::new(ListNode::new(3)));
    expected.next = Some(Box::new(second));

    assert_eq!(list_from_values([1, 2, 3]), Some(Box::new(expected)));
}

#[test]
fn given_long_list_when_dropped_then_does_not_overflow_stack() {
    let head = list_from_values(0..200_000).unwrap();
    assert_eq!(head.len(), 200_000);
    drop(head);
}

#[test]
fn given_long_list_when_compared_cloned_and_hashed_then_does_not_overflow_stack() {
    let head = list_from_values(0..200_000).unwrap();
    let copy = head.clone();

    assert_eq!(copy.len(), 200_000);
    assert!(head == copy);
    assert_eq!(hash_of(&head), hash_of(&copy));

    let other = list_from_values((0..200_000).map(|v| if v == 199_999 { -1 } else { v })).unwrap();
    assert!(head != other);
}

#[test]
fn given_lists_of_different_length_when_hashed_then_differ() {
    let short = list_from_values([1, 2]).unwrap();
    let long = list_from_values([1, 2, 3]).unwrap();
    assert_ne!(short, long);
    assert_ne!(hash_of(&short), hash_of(&long));
}

#[test]
fn given_list_when_debug_formatted_then_shows_values() {
    let head = list_from_values([1, 2, 3]).unwrap();
    assert_eq!(format!("{head:?}"), "ListNode([1, 2, 3])");
}

fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

#[test]
fn given_literal_when_parsing_list_then_builds_list() {
    let head = parse_list("[1,2,3]").unwrap().unwrap();
    assert_eq!(head.to_string(), "[1, 2, 3]");
}

#[test]
fn given_literal_with_null_when_parsing_list_then_rejects_marker() {
    let err = parse_list("[1,null,3]").unwrap_err();
    assert_eq!(err, DomainError::UnexpectedMarker { index: 1 });
}

//! Singly linked list fixture.

use std::fmt;
use std::hash::{Hash, Hasher};

use itertools::Itertools;
use tracing::{debug, instrument};

/// Node of a singly linked list.
///
/// Shaped like the node type exercise solutions receive: a value and an
/// exclusively owned successor. `None` terminates the chain.
pub struct ListNode {
    pub val: i32,
    pub next: Option<Box<ListNode>>,
}

impl ListNode {
    pub fn new(val: i32) -> Self {
        Self { val, next: None }
    }

    /// Same as [`list_from_values`].
    pub fn from_values<I>(values: I) -> Option<Box<ListNode>>
    where
        I: IntoIterator<Item = i32>,
    {
        list_from_values(values)
    }

    /// Iterates the values from this node to the end of the chain.
    pub fn values(&self) -> Values<'_> {
        Values { cursor: Some(self) }
    }

    pub fn to_vec(&self) -> Vec<i32> {
        self.values().collect()
    }

    /// Number of nodes reachable from this one, itself included.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.values().count()
    }
}

// Unlink iteratively, the derived drop would recurse once per node.
impl Drop for ListNode {
    fn drop(&mut self) {
        let mut next = self.next.take();
        while let Some(mut node) = next {
            next = node.next.take();
        }
    }
}

// Iterative over the chain, like `Drop`.
impl PartialEq for ListNode {
    fn eq(&self, other: &Self) -> bool {
        self.values().eq(other.values())
    }
}

impl Eq for ListNode {}

impl Hash for ListNode {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for val in self.values() {
            val.hash(state);
        }
        self.len().hash(state);
    }
}

impl Clone for ListNode {
    fn clone(&self) -> Self {
        let mut head = ListNode::new(self.val);
        head.next = list_from_values(self.values().skip(1));
        head
    }
}

impl fmt::Debug for ListNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ListNode").field(&self.to_vec()).finish()
    }
}

impl fmt::Display for ListNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.values().join(", "))
    }
}

/// Borrowing iterator over the values of a list.
#[derive(Debug, Clone)]
pub struct Values<'a> {
    cursor: Option<&'a ListNode>,
}

impl Iterator for Values<'_> {
    type Item = i32;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.cursor?;
        self.cursor = node.next.as_deref();
        Some(node.val)
    }
}

/// Builds a singly linked list holding `values` in order.
///
/// Returns `None` for an empty sequence. Every element becomes exactly one
/// node; there is no failure mode.
#[instrument(level = "debug", skip_all)]
pub fn list_from_values<I>(values: I) -> Option<Box<ListNode>>
where
    I: IntoIterator<Item = i32>,
{
    let mut pseudo = ListNode::new(0);
    let mut tail = &mut pseudo;
    let mut count = 0usize;

    for val in values {
        tail = &mut **tail.next.insert(Box::new(ListNode::new(val)));
        count += 1;
    }

    debug!(count, "built linked list");
    pseudo.next.take()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_values_when_building_list_then_keeps_order() {
        let head = list_from_values([1, 2, 3]).expect("non-empty list");
        assert_eq!(head.val, 1);
        assert_eq!(head.to_vec(), vec![1, 2, 3]);
        assert_eq!(head.len(), 3);
    }

    #[test]
    fn given_no_values_when_building_list_then_returns_none() {
        assert!(list_from_values(Vec::new()).is_none());
    }

    #[test]
    fn given_single_value_when_building_list_then_next_is_none() {
        let head = list_from_values([7]).expect("non-empty list");
        assert_eq!(head.val, 7);
        assert!(head.next.is_none());
    }

    #[test]
    fn given_list_when_displayed_then_renders_bracketed_values() {
        let head = ListNode::from_values([1, 2, 3]).expect("non-empty list");
        assert_eq!(head.to_string(), "[1, 2, 3]");
    }

    #[test]
    fn given_zero_when_building_list_then_zero_is_a_value() {
        let head = list_from_values([0, 0]).expect("non-empty list");
        assert_eq!(head.to_vec(), vec![0, 0]);
    }
}

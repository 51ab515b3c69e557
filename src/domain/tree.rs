//! Binary tree fixture built from a level-order sequence.
//!
//! A level-order sequence lists nodes breadth-first, left to right, with a
//! null marker (`None`) wherever a parent exists but the child does not:
//!
//! ```text
//! [3, 9, 20, None, None, 15, 7]
//!
//!       3
//!      / \
//!     9   20
//!        /  \
//!       15   7
//! ```

use std::collections::VecDeque;
use std::fmt;
use std::hash::{Hash, Hasher};

use itertools::Itertools;
use tracing::{debug, instrument, trace};

use crate::domain::error::{DomainError, DomainResult};

/// Null token used by `Display`.
pub const NULL_TOKEN: &str = "None";

/// Node of a binary tree with exclusively owned children.
pub struct TreeNode {
    pub val: i32,
    pub left: Option<Box<TreeNode>>,
    pub right: Option<Box<TreeNode>>,
}

impl TreeNode {
    pub fn new(val: i32) -> Self {
        Self {
            val,
            left: None,
            right: None,
        }
    }

    fn boxed(val: i32) -> Box<Self> {
        Box::new(Self::new(val))
    }

    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Level-order encoding of this tree with trailing null markers trimmed.
    ///
    /// Each visited node contributes its left and right child (value or
    /// marker); only present children are visited in turn.
    pub fn to_level_order(&self) -> Vec<Option<i32>> {
        let mut slots = vec![Some(self.val)];
        let mut queue = VecDeque::from([self]);

        while let Some(node) = queue.pop_front() {
            for child in [&node.left, &node.right] {
                match child.as_deref() {
                    Some(child) => {
                        slots.push(Some(child.val));
                        queue.push_back(child);
                    }
                    None => slots.push(None),
                }
            }
        }

        while matches!(slots.last(), Some(None)) {
            slots.pop();
        }
        slots
    }

    /// Number of nodes in the tree.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            count += 1;
            stack.extend(node.left.as_deref());
            stack.extend(node.right.as_deref());
        }
        count
    }

    /// Calculates the depth of the tree using a breadth-first traversal.
    /// Each element in the queue is a pair (node, depth).
    pub fn depth(&self) -> usize {
        let mut max_depth = 0;
        let mut queue = VecDeque::new();
        queue.push_back((self, 1)); // (node, depth)

        while let Some((node, depth)) = queue.pop_front() {
            max_depth = max_depth.max(depth);
            for child in [&node.left, &node.right].into_iter().flatten() {
                queue.push_back((&**child, depth + 1));
            }
        }

        max_depth
    }
}

// Degenerate trees are as deep as they are long; drop them with an explicit stack.
impl Drop for TreeNode {
    fn drop(&mut self) {
        let mut stack: Vec<Box<TreeNode>> = Vec::new();
        stack.extend(self.left.take());
        stack.extend(self.right.take());
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

// Walks node pairs with an explicit stack, like `Drop`.
impl PartialEq for TreeNode {
    fn eq(&self, other: &Self) -> bool {
        let mut stack = vec![(self, other)];
        while let Some((a, b)) = stack.pop() {
            if a.val != b.val {
                return false;
            }
            for (x, y) in [(&a.left, &b.left), (&a.right, &b.right)] {
                match (x.as_deref(), y.as_deref()) {
                    (Some(x), Some(y)) => stack.push((x, y)),
                    (None, None) => {}
                    _ => return false,
                }
            }
        }
        true
    }
}

impl Eq for TreeNode {}

// The trimmed level-order encoding identifies a tree, so it agrees with `eq`.
impl Hash for TreeNode {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.to_level_order().hash(state);
    }
}

impl Clone for TreeNode {
    fn clone(&self) -> Self {
        let mut root = TreeNode::new(self.val);
        let mut stack: Vec<(&TreeNode, &mut TreeNode)> = vec![(self, &mut root)];

        while let Some((src, dst)) = stack.pop() {
            let TreeNode { left, right, .. } = dst;
            if let Some(child) = src.left.as_deref() {
                stack.push((child, &mut **left.insert(TreeNode::boxed(child.val))));
            }
            if let Some(child) = src.right.as_deref() {
                stack.push((child, &mut **right.insert(TreeNode::boxed(child.val))));
            }
        }
        drop(stack);

        root
    }
}

impl fmt::Debug for TreeNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("TreeNode")
            .field(&format_args!("{}", self))
            .finish()
    }
}

impl fmt::Display for TreeNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_slots(&self.to_level_order(), NULL_TOKEN))
    }
}

/// Formats a level-order sequence as `[a, b, <null_token>, c]`.
pub fn format_slots(slots: &[Option<i32>], null_token: &str) -> String {
    let body = slots
        .iter()
        .map(|slot| match slot {
            Some(val) => val.to_string(),
            None => null_token.to_string(),
        })
        .join(", ");
    format!("[{body}]")
}

/// Builds a binary tree from a level-order sequence.
///
/// The first entry becomes the root. The remaining entries are consumed in
/// pairs, left child then right child, by frontier nodes taken in FIFO order.
/// Every value becomes a node and joins the back of the frontier; a marker
/// leaves its child slot empty and adds nothing.
///
/// # Errors
///
/// * [`DomainError::MissingRoot`] if the first entry is a marker.
/// * [`DomainError::OrphanValue`] if a value arrives after the frontier is
///   exhausted, i.e. no node exists that could be its parent.
///
/// Markers arriving after the frontier is exhausted describe no node and are
/// ignored.
#[instrument(level = "debug", skip_all)]
pub fn tree_from_level_order<I>(values: I) -> DomainResult<Option<Box<TreeNode>>>
where
    I: IntoIterator<Item = Option<i32>>,
{
    let mut slots = values.into_iter().enumerate();
    let mut root = match slots.next() {
        None => return Ok(None),
        Some((_, None)) => return Err(DomainError::MissingRoot),
        Some((_, Some(val))) => TreeNode::boxed(val),
    };

    let mut count = 1usize;
    let mut frontier: VecDeque<&mut TreeNode> = VecDeque::new();
    frontier.push_back(&mut *root);

    while let Some((index, left)) = slots.next() {
        let right = slots.next();

        let Some(parent) = frontier.pop_front() else {
            if let Some(value) = left {
                return Err(DomainError::OrphanValue { index, value });
            }
            if let Some((index, Some(value))) = right {
                return Err(DomainError::OrphanValue { index, value });
            }
            trace!(index, "ignoring surplus null markers");
            continue;
        };

        let TreeNode {
            left: left_slot,
            right: right_slot,
            ..
        } = parent;

        *left_slot = left.map(TreeNode::boxed);
        if let Some(child) = left_slot.as_deref_mut() {
            frontier.push_back(child);
            count += 1;
        }

        if let Some((_, right)) = right {
            *right_slot = right.map(TreeNode::boxed);
            if let Some(child) = right_slot.as_deref_mut() {
                frontier.push_back(child);
                count += 1;
            }
        }
    }
    drop(frontier);

    debug!(count, "built binary tree");
    Ok(Some(root))
}

#[cfg(test)]
mod tests {
    use super::*;

    //      3
    //     / \
    //    9  20
    //       / \
    //      15  7
    #[test]
    fn given_level_order_when_building_tree_then_assigns_children_per_level() {
        let root = tree_from_level_order([Some(3), Some(9), Some(20), None, None, Some(15), Some(7)])
            .expect("valid sequence")
            .expect("non-empty tree");

        assert_eq!(root.val, 3);
        let left = root.left.as_deref().expect("left child");
        assert_eq!(left.val, 9);
        assert!(left.is_leaf());

        let right = root.right.as_deref().expect("right child");
        assert_eq!(right.val, 20);
        assert_eq!(right.left.as_deref().map(|n| n.val), Some(15));
        assert_eq!(right.right.as_deref().map(|n| n.val), Some(7));

        assert_eq!(root.len(), 5);
        assert_eq!(root.depth(), 3);
    }

    #[test]
    fn given_empty_sequence_when_building_tree_then_returns_none() {
        let root = tree_from_level_order(Vec::new()).expect("valid sequence");
        assert!(root.is_none());
    }

    #[test]
    fn given_single_value_when_building_tree_then_returns_leaf_root() {
        let root = tree_from_level_order([Some(1)])
            .expect("valid sequence")
            .expect("non-empty tree");
        assert!(root.is_leaf());
        assert_eq!(root.to_string(), "[1]");
    }

    #[test]
    fn given_leading_marker_when_building_tree_then_fails_with_missing_root() {
        let err = tree_from_level_order([None, Some(1)]).unwrap_err();
        assert_eq!(err, DomainError::MissingRoot);
    }

    #[test]
    fn given_value_without_parent_when_building_tree_then_fails_with_orphan() {
        let err = tree_from_level_order([Some(1), None, None, Some(2)]).unwrap_err();
        assert_eq!(err, DomainError::OrphanValue { index: 3, value: 2 });
    }

    #[test]
    fn given_surplus_markers_when_building_tree_then_ignores_them() {
        let root = tree_from_level_order([Some(1), None, None, None, None])
            .expect("valid sequence")
            .expect("non-empty tree");
        assert!(root.is_leaf());
    }

    #[test]
    fn given_odd_tail_when_building_tree_then_only_left_child_is_set() {
        let root = tree_from_level_order([Some(1), Some(2)])
            .expect("valid sequence")
            .expect("non-empty tree");
        assert_eq!(root.left.as_deref().map(|n| n.val), Some(2));
        assert!(root.right.is_none());
    }

    #[test]
    fn given_slots_when_formatting_then_uses_null_token() {
        let slots = [Some(1), None, Some(2)];
        assert_eq!(format_slots(&slots, "null"), "[1, null, 2]");
        assert_eq!(format_slots(&[], "None"), "[]");
    }
}

//! Build linked-list and binary-tree fixtures from exercise literals.
//!
//! ```
//! use lcfixture::{list_from_values, tree_from_level_order};
//!
//! let head = list_from_values([1, 2, 3]).unwrap();
//! assert_eq!(head.to_string(), "[1, 2, 3]");
//!
//! let root = tree_from_level_order([Some(3), Some(9), Some(20), None, None, Some(15), Some(7)])
//!     .unwrap()
//!     .unwrap();
//! assert_eq!(root.to_string(), "[3, 9, 20, None, None, 15, 7]");
//! ```

pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod render;
pub mod util;

pub use domain::{
    list_from_values, parse_list, parse_slots, parse_tree, parse_values, tree_from_level_order,
    DomainError, DomainResult, ListNode, TreeNode,
};

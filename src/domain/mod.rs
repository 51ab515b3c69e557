//! Domain layer: fixture structures and their builders
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod error;
pub mod example;
pub mod list;
pub mod literal;
pub mod tree;

pub use error::{DomainError, DomainResult};
pub use example::{
    extract_examples, find_signature, params_from_signature, parse_example, Argument, ExampleCase,
    Param, ParamKind,
};
pub use list::{list_from_values, ListNode};
pub use literal::{parse_list, parse_slots, parse_tree, parse_values};
pub use tree::{tree_from_level_order, TreeNode};

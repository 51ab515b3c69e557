//! Rendering of fixtures for assertions, debug output and the CLI.

use std::collections::VecDeque;
use std::fmt;

use clap::ValueEnum;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use termtree::Tree;
use tracing::instrument;

use crate::domain::tree::format_slots;
use crate::domain::{ListNode, TreeNode};

pub use crate::domain::tree::NULL_TOKEN as DEFAULT_NULL_TOKEN;

/// How a fixture is written out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `[3, 9, 20, None, None, 15, 7]`
    #[default]
    Flat,
    /// `[3,9,20,null,null,15,7]`
    Json,
    /// Box-drawing diagram (trees) or `1 -> 2 -> 3` chain (lists)
    Diagram,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OutputFormat::Flat => "flat",
            OutputFormat::Json => "json",
            OutputFormat::Diagram => "diagram",
        };
        f.write_str(name)
    }
}

/// Formats a level-order sequence with the given null token.
pub fn render_slots(slots: &[Option<i32>], null_token: &str) -> String {
    format_slots(slots, null_token)
}

fn render_json(slots: Vec<Option<i32>>) -> String {
    serde_json::Value::from(slots).to_string()
}

/// Renders a list, or `null_token` when there is none (except as JSON: `[]`).
#[instrument(level = "trace", skip(head))]
pub fn render_list(head: Option<&ListNode>, format: OutputFormat, null_token: &str) -> String {
    match (head, format) {
        (None, OutputFormat::Json) => "[]".to_string(),
        (None, _) => null_token.to_string(),
        (Some(head), OutputFormat::Flat) => head.to_string(),
        (Some(head), OutputFormat::Json) => {
            render_json(head.values().map(Some).collect())
        }
        (Some(head), OutputFormat::Diagram) => head.values().join(" -> "),
    }
}

/// Renders a tree, or `null_token` when there is none (except as JSON: `[]`).
#[instrument(level = "trace", skip(root))]
pub fn render_tree(root: Option<&TreeNode>, format: OutputFormat, null_token: &str) -> String {
    match (root, format) {
        (None, OutputFormat::Json) => "[]".to_string(),
        (None, _) => null_token.to_string(),
        (Some(root), OutputFormat::Flat) => format_slots(&root.to_level_order(), null_token),
        (Some(root), OutputFormat::Json) => render_json(root.to_level_order()),
        (Some(root), OutputFormat::Diagram) => root.to_diagram(null_token).to_string(),
    }
}

pub trait TreeDiagram {
    fn to_diagram(&self, null_token: &str) -> Tree<String>;
}

impl TreeDiagram for TreeNode {
    /// Labels are collected breadth-first as `(label, child count)` and the
    /// diagram is assembled back to front, so deep trees need no recursion.
    /// Both sides are shown once one exists, so left and right stay
    /// distinguishable.
    fn to_diagram(&self, null_token: &str) -> Tree<String> {
        let mut entries: Vec<(String, usize)> = Vec::new();
        let mut queue: VecDeque<Option<&TreeNode>> = VecDeque::from([Some(self)]);

        while let Some(slot) = queue.pop_front() {
            match slot {
                None => entries.push((null_token.to_string(), 0)),
                Some(node) if node.is_leaf() => entries.push((node.val.to_string(), 0)),
                Some(node) => {
                    entries.push((node.val.to_string(), 2));
                    queue.push_back(node.left.as_deref());
                    queue.push_back(node.right.as_deref());
                }
            }
        }

        // Children sit later in breadth-first order than their parent, and
        // the first child of each entry is the oldest unattached subtree.
        let mut finished: Vec<Tree<String>> = Vec::new();
        for (label, children) in entries.into_iter().rev() {
            let leaves: Vec<_> = (0..children).filter_map(|_| finished.pop()).collect();
            finished.push(Tree::new(label).with_leaves(leaves));
        }
        finished
            .pop()
            .unwrap_or_else(|| Tree::new(self.val.to_string()))
    }
}

//! Example inputs: turning a line like `head = [1,2,3], n = 2` into call arguments.
//!
//! Each declared parameter has a name and a kind. `ListNode` and `TreeNode`
//! parameters are built into fixtures, everything else is passed through as
//! raw text. Parameters can be declared by hand or read from a solution's
//! `def` line, and input lines can be pulled out of the `Example N:` blocks of
//! a problem description.

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use regex::Regex;
use tracing::{debug, instrument};

use crate::domain::error::{DomainError, DomainResult};
use crate::domain::list::ListNode;
use crate::domain::tree::{TreeNode, NULL_TOKEN};
use crate::domain::literal::{parse_list, parse_tree};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    ListNode,
    TreeNode,
    Raw,
}

impl ParamKind {
    /// Maps a declared type name to a parameter kind.
    pub fn from_type_name(type_name: &str) -> Self {
        match type_name.trim() {
            "ListNode" | "Optional[ListNode]" => ParamKind::ListNode,
            "TreeNode" | "Optional[TreeNode]" => ParamKind::TreeNode,
            _ => ParamKind::Raw,
        }
    }
}

/// A declared parameter, written `name:Type` (`name` alone means raw).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Param {
    pub name: String,
    pub kind: ParamKind,
}

impl Param {
    pub fn new(name: impl Into<String>, kind: ParamKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }
}

impl FromStr for Param {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, kind) = match s.split_once(':') {
            Some((name, type_name)) => (name.trim(), ParamKind::from_type_name(type_name)),
            None => (s.trim(), ParamKind::Raw),
        };
        let valid = name
            .chars()
            .next()
            .is_some_and(|c| c.is_alphabetic() || c == '_')
            && name.chars().all(|c| c.is_alphanumeric() || c == '_');
        if !valid {
            return Err(DomainError::InvalidParam(s.to_string()));
        }
        Ok(Param::new(name, kind))
    }
}

/// A converted call argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Argument {
    List(Option<Box<ListNode>>),
    Tree(Option<Box<TreeNode>>),
    Raw(String),
}

impl Argument {
    /// Renders the argument, printing absent structures as `null_token`.
    pub fn render(&self, null_token: &str) -> String {
        match self {
            Argument::List(Some(head)) => head.to_string(),
            Argument::Tree(Some(root)) => {
                crate::domain::tree::format_slots(&root.to_level_order(), null_token)
            }
            Argument::List(None) | Argument::Tree(None) => null_token.to_string(),
            Argument::Raw(text) => text.clone(),
        }
    }
}

impl fmt::Display for Argument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(NULL_TOKEN))
    }
}

/// Reads the parameters of a `def name(self, a: T, b: U):` line.
///
/// A leading `self` is dropped. Commas inside brackets (`Dict[int, str]`) do
/// not split parameters; default values are ignored.
#[instrument(level = "debug")]
pub fn params_from_signature(line: &str) -> DomainResult<Vec<Param>> {
    let caps = signature_regex()
        .captures(line)
        .ok_or_else(|| DomainError::InvalidSignature(line.trim().to_string()))?;
    let inner = caps.get(2).map_or("", |m| m.as_str());
    debug!(function = caps.get(1).map_or("", |m| m.as_str()), "reading signature");

    split_top_level(inner)
        .into_iter()
        .map(|decl| decl.split_once('=').map_or(decl, |(decl, _)| decl).trim())
        .filter(|decl| !decl.is_empty())
        .enumerate()
        .filter(|(i, decl)| !(*i == 0 && *decl == "self"))
        .map(|(_, decl)| decl.parse::<Param>())
        .collect()
}

/// Returns the first `def` line of a source text, skipping comment lines.
pub fn find_signature(source: &str) -> Option<&str> {
    source
        .lines()
        .map(str::trim)
        .filter(|line| !line.starts_with('#'))
        .find(|line| signature_regex().is_match(line))
}

fn signature_regex() -> &'static Regex {
    static SIGNATURE: OnceLock<Regex> = OnceLock::new();
    SIGNATURE.get_or_init(|| {
        Regex::new(r"\bdef\s+([A-Za-z_]\w*)\s*\((.*)\)").expect("signature pattern is valid")
    })
}

fn split_top_level(text: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    for (i, c) in text.char_indices() {
        match c {
            '[' | '(' | '{' => depth += 1,
            ']' | ')' | '}' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                parts.push(&text[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    parts.push(&text[start..]);
    parts
}

/// An `Example N:` block: its input line and expected output.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExampleCase {
    pub input: String,
    pub output: String,
}

#[derive(Clone, Copy)]
enum Section {
    Input,
    Output,
}

/// Collects the `Example N:` blocks of a problem description.
///
/// Lines may carry a leading comment marker (`#`, `*`, `//`), as descriptions
/// pasted into solution files do. Within a block, `Input:` and `Output:` open
/// a section and following lines continue it; `Explanation:` and `Note:`
/// close it. `Constraints:` ends the last block.
#[instrument(level = "debug", skip_all)]
pub fn extract_examples(text: &str) -> Vec<ExampleCase> {
    let mut cases: Vec<ExampleCase> = Vec::new();
    let mut in_block = false;
    let mut section: Option<Section> = None;

    for line in text.lines() {
        let line = strip_comment_marker(line);
        if example_heading_regex().is_match(line) {
            cases.push(ExampleCase::default());
            in_block = true;
            section = None;
            continue;
        }
        if line.starts_with("Constraints:") {
            in_block = false;
            continue;
        }
        let Some(case) = cases.last_mut().filter(|_| in_block) else {
            continue;
        };

        let content = if let Some(rest) = line.strip_prefix("Input:") {
            section = Some(Section::Input);
            rest
        } else if let Some(rest) = line.strip_prefix("Output:") {
            section = Some(Section::Output);
            rest
        } else if line.starts_with("Explanation:") || line.starts_with("Note:") {
            section = None;
            continue;
        } else {
            line
        };

        let target = match section {
            Some(Section::Input) => &mut case.input,
            Some(Section::Output) => &mut case.output,
            None => continue,
        };
        let content = content.trim();
        if !content.is_empty() {
            if !target.is_empty() {
                target.push(' ');
            }
            target.push_str(content);
        }
    }

    debug!(count = cases.len(), "extracted examples");
    cases
}

fn strip_comment_marker(line: &str) -> &str {
    let line = line.trim();
    line.strip_prefix("//")
        .or_else(|| line.strip_prefix('#'))
        .or_else(|| line.strip_prefix('*'))
        .unwrap_or(line)
        .trim()
}

fn example_heading_regex() -> &'static Regex {
    static HEADING: OnceLock<Regex> = OnceLock::new();
    HEADING.get_or_init(|| Regex::new(r"Example ?[0-9]*:").expect("heading pattern is valid"))
}

fn example_pattern(params: &[Param]) -> DomainResult<Regex> {
    let mut pattern: String = params
        .iter()
        .map(|p| format!(r"\b{} *=(.*?)", regex::escape(&p.name)))
        .collect();
    pattern.push('$');
    Regex::new(&pattern).map_err(|e| DomainError::InvalidParam(e.to_string()))
}

/// Splits an example input line into arguments for `params`, in declaration order.
///
/// Every parameter must appear as `name = value`, in order. Values are
/// trimmed and lose one trailing comma before conversion.
#[instrument(level = "debug", skip(params))]
pub fn parse_example(line: &str, params: &[Param]) -> DomainResult<Vec<Argument>> {
    if params.is_empty() {
        return Ok(Vec::new());
    }

    let caps = example_pattern(params)?
        .captures(line.trim())
        .ok_or_else(|| DomainError::ExampleMismatch {
            input: line.to_string(),
        })?;

    params
        .iter()
        .enumerate()
        .map(|(i, param)| -> DomainResult<Argument> {
            let raw = caps.get(i + 1).map_or("", |m| m.as_str()).trim();
            let raw = raw.strip_suffix(',').unwrap_or(raw).trim();
            debug!(name = %param.name, kind = ?param.kind, raw, "converting argument");
            Ok(match param.kind {
                ParamKind::ListNode => Argument::List(parse_list(raw)?),
                ParamKind::TreeNode => Argument::Tree(parse_tree(raw)?),
                ParamKind::Raw => Argument::Raw(raw.to_string()),
            })
        })
        .collect()
}

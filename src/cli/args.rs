//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::domain::Param;
use crate::render::OutputFormat;

/// Build linked lists and binary trees from exercise literals
#[derive(Parser, Debug)]
#[command(name = "lcfixture")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Debug level: -d info, -dd debug, -ddd trace
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub debug: u8,

    /// Project directory for local config (default: cwd)
    #[arg(short = 'C', long, global = true)]
    pub project_dir: Option<PathBuf>,

    /// Token printed for absent nodes (overrides config)
    #[arg(long, global = true)]
    pub null_token: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build a linked list from a literal like [1,2,3]
    List {
        /// List literal
        #[arg(allow_hyphen_values = true)]
        literal: String,
        /// Output format (overrides config)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// Build a binary tree from a level-order literal like [3,9,20,null,null,15,7]
    Tree {
        /// Level-order literal
        #[arg(allow_hyphen_values = true)]
        literal: String,
        /// Output format (overrides config)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// Convert example input into arguments
    ///
    /// Takes one input line, or every `Example N:` block of a description
    /// file. Parameters come from --param, from --signature, or from the
    /// first `def` line of the file.
    Example {
        /// Input line, e.g. "head = [1,2,3], n = 2"
        #[arg(required_unless_present = "file")]
        line: Option<String>,
        /// Parameter declaration name:Type, in order (e.g. head:ListNode)
        #[arg(short, long = "param")]
        params: Vec<Param>,
        /// Solution signature, e.g. "def addTwoNumbers(self, l1: ListNode, l2: ListNode):"
        #[arg(short, long, conflicts_with = "params")]
        signature: Option<String>,
        /// Problem description with `Example N:` blocks ("-" reads stdin)
        #[arg(short, long, conflicts_with = "line")]
        file: Option<PathBuf>,
    },

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show effective configuration
    Show,
    /// Print a commented config template
    Template,
    /// Show config file locations
    Path,
}

//! CLI support for oslc-query
//!
//! Provides programmatic access to the `oslcq` commands for embedding in
//! other tools.

mod check;
mod docs;

pub use check::{CheckOptions, CheckResult, Clause, execute_check};
pub use docs::{DocTopic, get_doc_topic, get_docs_overview};

use std::io;

use thiserror::Error;

use crate::ParseError;

/// Errors that can occur during CLI operations
#[derive(Debug, Error)]
pub enum CliError {
    /// Parser error
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    /// `--invert` given for a clause that is not a property selection
    #[error("--invert only applies to select and properties clauses, not {}", .0.param_name())]
    InvertUnsupported(Clause),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// No input provided
    #[error("No expression provided. Pass it as an argument or pipe it to stdin.")]
    NoInput,

    /// Unknown documentation topic
    #[error("Unknown topic: '{0}'\nRun 'oslcq docs' to see available topics.")]
    UnknownTopic(String),
}

//! Error types with rich diagnostics using miette
//!
//! Both errors point at the offending token inside the normalized path text.

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

pub use crate::types::FieldError;

/// Source context for error reporting
#[derive(Debug, Clone)]
pub struct SourceContext {
    /// Name of the source (filename or "<path>")
    pub name: String,
    /// The normalized path text
    pub source: String,
}

impl SourceContext {
    /// Create a new source context
    pub fn new(name: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            source: source.into(),
        }
    }

    /// Create a NamedSource for miette
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.name, self.source.clone())
    }
}

// ============================================================================
// Path Errors
// ============================================================================

/// Errors that abort parsing of a single path
#[derive(Error, Diagnostic, Debug)]
pub enum PathError {
    #[error("not supported path command: {letter}")]
    #[diagnostic(
        code(pathcode::parse::not_supported_command),
        help("supported commands are M, L, H, V, C, S, Q, T, A and their lowercase forms")
    )]
    NotSupportedCommand {
        letter: char,
        #[source_code]
        src: NamedSource<String>,
        #[label("unknown command")]
        span: SourceSpan,
    },

    #[error("malformed path data for command {command}: {reason}")]
    #[diagnostic(code(pathcode::parse::malformed_path_data))]
    MalformedPathData {
        /// Command letter in its original case
        command: char,
        /// Raw token that failed to convert
        token: String,
        /// Every token handed to the command
        window: Vec<String>,
        relative: bool,
        minified: bool,
        reason: FieldError,
        #[source_code]
        src: NamedSource<String>,
        #[label("cannot read this value")]
        span: SourceSpan,
    },
}

impl PathError {
    /// Letter of the command the error refers to.
    pub fn letter(&self) -> char {
        match self {
            PathError::NotSupportedCommand { letter, .. } => *letter,
            PathError::MalformedPathData { command, .. } => *command,
        }
    }
}

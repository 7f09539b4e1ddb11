//! Rendering of command nodes as Compose path builder calls.
//!
//! Full mode output for one node:
//!
//! ```text
//! // c 1 2 3 4 5 6
//! curveToRelative(
//!     dx1 = 1.0f,
//!     ...
//! )
//! ```
//!
//! Minified mode drops the comment and puts every argument on one line.

use std::borrow::Cow;
use std::fmt;

use crate::node::PathNode;
use crate::types::FloatLiteral;

/// Approximate bytecode size of one method invocation.
pub const METHOD_INVOKE_BYTE_SIZE: usize = 6;
/// Approximate bytecode size of pushing a float argument.
pub const FLOAT_APPROXIMATE_BYTE_SIZE: usize = 4;
/// Approximate bytecode size of pushing a boolean argument.
pub const BOOLEAN_APPROXIMATE_BYTE_SIZE: usize = 2;
/// JVM limit on the bytecode size of a single method.
pub const METHOD_SIZE_THRESHOLD: usize = 32767;

const PARAMETER_INDENT: &str = "    ";

/// Output configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Drop comments and keep every call on a single line
    pub minified: bool,
    /// Indent applied to node calls inside a block
    pub indent: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            minified: false,
            indent: 4,
        }
    }
}

impl RenderOptions {
    pub fn minified() -> Self {
        Self {
            minified: true,
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParameterValue {
    Float(f32),
    Flag(bool),
}

impl ParameterValue {
    /// Form used in the comment line and in rebuilt tokens.
    pub fn source_text(&self) -> String {
        match self {
            ParameterValue::Float(value) => FloatLiteral(*value).trimmed(),
            ParameterValue::Flag(true) => "1".to_string(),
            ParameterValue::Flag(false) => "0".to_string(),
        }
    }

    pub fn approximate_byte_size(&self) -> usize {
        match self {
            ParameterValue::Float(_) => FLOAT_APPROXIMATE_BYTE_SIZE,
            ParameterValue::Flag(_) => BOOLEAN_APPROXIMATE_BYTE_SIZE,
        }
    }
}

impl fmt::Display for ParameterValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParameterValue::Float(value) => write!(f, "{}f", FloatLiteral(*value)),
            ParameterValue::Flag(flag) => write!(f, "{flag}"),
        }
    }
}

/// A named argument of a builder call.
#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
    pub name: Cow<'static, str>,
    pub value: ParameterValue,
}

impl Parameter {
    pub fn float(name: &'static str, value: f32) -> Self {
        Self {
            name: Cow::Borrowed(name),
            value: ParameterValue::Float(value),
        }
    }

    /// A coordinate argument, `d`-prefixed when relative.
    pub fn coordinate(name: &'static str, value: f32, relative: bool) -> Self {
        let name = if relative {
            Cow::Owned(format!("d{name}"))
        } else {
            Cow::Borrowed(name)
        };
        Self {
            name,
            value: ParameterValue::Float(value),
        }
    }

    pub fn flag(name: &'static str, value: bool) -> Self {
        Self {
            name: Cow::Borrowed(name),
            value: ParameterValue::Flag(value),
        }
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.name, self.value)
    }
}

/// Comment body for a node: cased letter, values, optional close letter.
pub(crate) fn comment<N: PathNode + ?Sized>(node: &N) -> String {
    let mut text = String::new();
    text.push(node.command().cased_letter(node.is_relative()));
    for parameter in node.parameters() {
        text.push(' ');
        text.push_str(&parameter.value.source_text());
    }
    if node.should_close() {
        text.push('z');
    }
    text
}

pub(crate) fn render_call<N: PathNode + ?Sized>(node: &N) -> String {
    let minified = node.minified();
    let parameters = node.parameters();

    let arguments = if minified || node.force_inline() {
        parameters
            .iter()
            .map(|p| p.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    } else {
        let mut arguments = String::from("\n");
        for parameter in &parameters {
            arguments.push_str(PARAMETER_INDENT);
            arguments.push_str(&parameter.to_string());
            arguments.push_str(",\n");
        }
        arguments
    };

    let suffix = if node.is_relative() { "Relative" } else { "" };
    let call = format!("{}{}({})", node.command().function(), suffix, arguments);

    match (minified, node.should_close()) {
        (true, false) => call,
        (true, true) => format!("{call}\nclose()"),
        (false, close) => {
            let close = if close { "close()\n" } else { "" };
            format!("// {}\n{}\n{}", comment(node), call, close)
        }
    }
}

/// Shift every line after the first right by `indent` spaces.
pub(crate) fn indent_continuation(text: &str, indent: usize) -> String {
    let pad = " ".repeat(indent);
    text.replace('\n', &format!("\n{pad}"))
}

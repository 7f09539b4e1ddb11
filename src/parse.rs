//! Token dispatch: turns normalized path text into command nodes.

use miette::SourceSpan;

use crate::command::PathCommand;
use crate::errors::{PathError, SourceContext};
use crate::log;
use crate::node::{CommandNode, FieldFailure};
use crate::wrapper::PathWrapper;

/// Source name used in diagnostics.
const SOURCE_NAME: &str = "<path>";

/// A whitespace-separated token and its byte offset in the normalized text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Token<'a> {
    text: &'a str,
    offset: usize,
}

impl Token<'_> {
    fn span(&self) -> SourceSpan {
        (self.offset, self.text.len()).into()
    }

    fn starts_number(&self) -> bool {
        self.text
            .chars()
            .next()
            .is_some_and(|ch| ch.is_ascii_digit() || matches!(ch, '-' | '+' | '.'))
    }
}

fn tokenize(text: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut start = None;
    for (offset, ch) in text.char_indices() {
        match (ch.is_whitespace(), start) {
            (true, Some(begin)) => {
                tokens.push(Token {
                    text: &text[begin..offset],
                    offset: begin,
                });
                start = None;
            }
            (false, None) => start = Some(offset),
            _ => {}
        }
    }
    if let Some(begin) = start {
        tokens.push(Token {
            text: &text[begin..],
            offset: begin,
        });
    }
    tokens
}

/// Parse normalized path text into a [`PathWrapper`].
///
/// Numbers following a complete command repeat it; after a move they become
/// lines of the same relativity.
pub fn parse(normalized: &str, minified: bool) -> Result<PathWrapper, PathError> {
    let tokens = tokenize(normalized);
    log::trace!(count = tokens.len(), "tokenized path data");

    let context = SourceContext::new(SOURCE_NAME, normalized);
    let mut nodes = Vec::new();
    let mut last: Option<(PathCommand, bool)> = None;
    let mut cursor = 0;

    while cursor < tokens.len() {
        let token = tokens[cursor];

        let (command, relative, explicit) = if token.starts_number() {
            match last {
                Some((previous, relative)) => (previous.continuation(), relative, false),
                None => return Err(not_supported(&context, token)),
            }
        } else {
            let letter = token.text.chars().next().unwrap_or_default();
            match PathCommand::from_letter(letter) {
                Some((command, relative)) => (command, relative, true),
                None => return Err(not_supported(&context, token)),
            }
        };

        let end = (cursor + command.arity()).min(tokens.len());
        let window: Vec<String> = tokens[cursor..end]
            .iter()
            .enumerate()
            .map(|(index, t)| {
                if index == 0 && !explicit {
                    format!("{}{}", command.cased_letter(relative), t.text)
                } else {
                    t.text.to_string()
                }
            })
            .collect();

        log::trace!(
            command = %command.cased_letter(relative),
            implicit = !explicit,
            window = ?window,
            "dispatching command"
        );

        match CommandNode::parse(command, &window, relative, minified) {
            Ok(node) => nodes.push(node),
            Err(failure) => {
                let token = tokens[cursor + failure.index];
                return Err(malformed(
                    &context,
                    token,
                    command.cased_letter(relative),
                    window,
                    relative,
                    minified,
                    failure,
                ));
            }
        }

        last = Some((command, relative));
        cursor = end;
    }

    Ok(PathWrapper::new(normalized.to_string(), nodes, minified))
}

fn not_supported(context: &SourceContext, token: Token<'_>) -> PathError {
    let letter = token.text.chars().next().unwrap_or_default();
    log::debug!(letter = %letter, offset = token.offset, "not supported path command");
    PathError::NotSupportedCommand {
        letter,
        src: context.named_source(),
        span: (token.offset, letter.len_utf8()).into(),
    }
}

fn malformed(
    context: &SourceContext,
    token: Token<'_>,
    command: char,
    window: Vec<String>,
    relative: bool,
    minified: bool,
    failure: FieldFailure,
) -> PathError {
    log::debug!(
        token = token.text,
        command = %command,
        window = ?window,
        relative,
        minified,
        path = context.source.as_str(),
        error = %failure.error,
        "malformed path data"
    );
    PathError::MalformedPathData {
        command,
        token: token.text.to_string(),
        window,
        relative,
        minified,
        reason: failure.error,
        src: context.named_source(),
        span: token.span(),
    }
}

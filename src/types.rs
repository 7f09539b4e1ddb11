//! Scalar field conversion and float literal formatting.

use std::fmt;

use pest::Parser;

use crate::command::CLOSE_LETTER;
use crate::{PathDataParser, Rule};

/// Error type for a token that cannot become a command field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    /// Token is not a decimal number
    NotANumber,
    /// Number overflows to infinity
    NotFinite,
    /// Arc flag is neither `0` nor `1`
    NotAFlag,
    /// The path ended before the command received all its fields
    MissingTokens { expected: usize, found: usize },
    /// A close letter follows a command that cannot close
    NotClosable,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldError::NotANumber => write!(f, "not a number"),
            FieldError::NotFinite => write!(f, "number is not finite"),
            FieldError::NotAFlag => write!(f, "arc flag must be 0 or 1"),
            FieldError::MissingTokens { expected, found } => {
                write!(f, "expected {expected} values, found {found}")
            }
            FieldError::NotClosable => write!(f, "command cannot close the path"),
        }
    }
}

impl std::error::Error for FieldError {}

/// Strip the command letter from the first token and the close letter from the last.
pub(crate) fn field_text(token: &str, first: bool, last: bool) -> &str {
    let mut text = token;
    if first {
        if let Some(ch) = text.chars().next() {
            if ch.is_ascii_alphabetic() {
                text = &text[ch.len_utf8()..];
            }
        }
    }
    if last {
        text = text
            .strip_suffix(CLOSE_LETTER)
            .or_else(|| text.strip_suffix(CLOSE_LETTER.to_ascii_uppercase()))
            .unwrap_or(text);
    }
    text
}

/// Whether a token ends with the close letter, ignoring case.
pub(crate) fn ends_with_close(token: &str) -> bool {
    token
        .chars()
        .next_back()
        .is_some_and(|ch| ch.eq_ignore_ascii_case(&CLOSE_LETTER))
}

/// Convert a number field.
pub fn parse_scalar(text: &str) -> Result<f32, FieldError> {
    PathDataParser::parse(Rule::number_token, text).map_err(|_| FieldError::NotANumber)?;
    let value: f32 = text.parse().map_err(|_| FieldError::NotANumber)?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(FieldError::NotFinite)
    }
}

/// Convert an arc flag field. Only the literals `0` and `1` are flags.
pub fn parse_flag(text: &str) -> Result<bool, FieldError> {
    PathDataParser::parse(Rule::flag_token, text).map_err(|_| FieldError::NotAFlag)?;
    Ok(text == "1")
}

/// A float printed the way the JVM prints a `Float`.
///
/// Decimal notation for magnitudes in `[1e-3, 1e7)`, scientific notation
/// (`1.0E-5`) otherwise. There is always at least one fractional digit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FloatLiteral(pub f32);

impl FloatLiteral {
    /// Same text with a trailing `.0` dropped, as used in comments.
    pub fn trimmed(self) -> String {
        let text = self.to_string();
        match text.strip_suffix(".0") {
            Some(stripped) => stripped.to_string(),
            None => text,
        }
    }
}

impl fmt::Display for FloatLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = self.0;
        if value.is_nan() {
            return f.write_str("NaN");
        }
        if value.is_infinite() {
            return f.write_str(if value > 0.0 { "Infinity" } else { "-Infinity" });
        }

        let magnitude = value.abs();
        if magnitude == 0.0 || (1e-3..1e7).contains(&magnitude) {
            let text = value.to_string();
            if text.contains('.') {
                f.write_str(&text)
            } else {
                write!(f, "{text}.0")
            }
        } else {
            let text = format!("{value:e}");
            let (mantissa, exponent) = text.split_once('e').unwrap_or((text.as_str(), "0"));
            if mantissa.contains('.') {
                write!(f, "{mantissa}E{exponent}")
            } else {
                write!(f, "{mantissa}.0E{exponent}")
            }
        }
    }
}

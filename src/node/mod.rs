//! Typed path commands.
//!
//! Each command variant owns the raw tokens it was parsed from, its decoded
//! fields, and enough metadata to render itself. Nodes are immutable: the
//! `with_*` hooks on the role traits return a modified copy whose tokens are
//! rebuilt from the new field values.

mod arc;
mod curve;
mod line;

use std::fmt;

use enum_dispatch::enum_dispatch;
use glam::Vec2;

use crate::command::PathCommand;
use crate::render::{self, METHOD_INVOKE_BYTE_SIZE, Parameter};
use crate::types::{self, FieldError};

pub use arc::ArcTo;
pub use curve::{CurveTo, QuadTo, ReflectiveCurveTo, ReflectiveQuadTo};
pub use line::{HorizontalLineTo, LineTo, MoveTo, VerticalLineTo};

// ============================================================================
// Shared behaviour
// ============================================================================

/// Behaviour common to every command node.
#[enum_dispatch]
pub trait PathNode {
    fn meta(&self) -> &NodeMeta;

    fn command(&self) -> PathCommand;

    /// Builder call arguments, in field order.
    fn parameters(&self) -> Vec<Parameter>;

    /// Keep arguments on one line even in full mode.
    fn force_inline(&self) -> bool {
        false
    }

    fn source_tokens(&self) -> &[String] {
        self.meta().tokens()
    }

    fn is_relative(&self) -> bool {
        self.meta().relative()
    }

    fn minified(&self) -> bool {
        self.meta().minified()
    }

    fn should_close(&self) -> bool {
        self.meta().should_close()
    }

    /// Source-like description, e.g. `M 85.122 64.795z`.
    fn comment(&self) -> String {
        render::comment(self)
    }

    /// Render as a Compose path builder call.
    fn render(&self) -> String {
        render::render_call(self)
    }

    /// Approximate bytecode size of the rendered call.
    fn approximate_byte_size(&self) -> usize {
        let arguments: usize = self
            .parameters()
            .iter()
            .map(|p| p.value.approximate_byte_size())
            .sum();
        let close = if self.should_close() {
            METHOD_INVOKE_BYTE_SIZE
        } else {
            0
        };
        METHOD_INVOKE_BYTE_SIZE + arguments + close
    }
}

/// Data every node carries besides its fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeMeta {
    /// Raw tokens consumed, the first one prefixed with the command letter
    pub(crate) tokens: Vec<String>,
    pub(crate) relative: bool,
    pub(crate) minified: bool,
    pub(crate) should_close: bool,
}

impl NodeMeta {
    pub(crate) fn new(tokens: Vec<String>, relative: bool, minified: bool) -> Self {
        let should_close = tokens.last().is_some_and(|t| types::ends_with_close(t));
        Self {
            tokens,
            relative,
            minified,
            should_close,
        }
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn relative(&self) -> bool {
        self.relative
    }

    pub fn minified(&self) -> bool {
        self.minified
    }

    /// Set when the last token ends with the close letter.
    pub fn should_close(&self) -> bool {
        self.should_close
    }

    /// Tokens regenerated from field values, keeping relativity, mode and close flag.
    fn retokenized(&self, command: PathCommand, parameters: &[Parameter]) -> Self {
        let mut tokens: Vec<String> = parameters.iter().map(|p| p.value.source_text()).collect();
        if let Some(first) = tokens.first_mut() {
            first.insert(0, command.cased_letter(self.relative));
        }
        if self.should_close {
            if let Some(last) = tokens.last_mut() {
                last.push(crate::command::CLOSE_LETTER);
            }
        }
        Self {
            tokens,
            ..self.clone()
        }
    }
}

/// Node types that can refresh their tokens after a field changes.
pub(crate) trait Retokenize: PathNode + Sized {
    fn meta_mut(&mut self) -> &mut NodeMeta;

    fn retokenized(mut self) -> Self {
        let meta = self.meta().retokenized(self.command(), &self.parameters());
        *self.meta_mut() = meta;
        self
    }
}

// ============================================================================
// Field decoding
// ============================================================================

/// A field that failed to decode, by position in the token window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldFailure {
    pub index: usize,
    pub error: FieldError,
}

/// Reader over the token window handed to one command.
pub(crate) struct Fields<'a> {
    window: &'a [String],
}

impl<'a> Fields<'a> {
    pub(crate) fn new(command: PathCommand, window: &'a [String]) -> Result<Self, FieldFailure> {
        let arity = command.arity();
        if window.len() < arity {
            return Err(FieldFailure {
                index: window.len().saturating_sub(1),
                error: FieldError::MissingTokens {
                    expected: arity,
                    found: window.len(),
                },
            });
        }
        let window = &window[..arity];
        if !command.closable() && window.last().is_some_and(|t| types::ends_with_close(t)) {
            return Err(FieldFailure {
                index: arity - 1,
                error: FieldError::NotClosable,
            });
        }
        Ok(Self { window })
    }

    fn text(&self, index: usize) -> &'a str {
        let last = self.window.len() - 1;
        types::field_text(&self.window[index], index == 0, index == last)
    }

    pub(crate) fn scalar(&self, index: usize) -> Result<f32, FieldFailure> {
        types::parse_scalar(self.text(index)).map_err(|error| FieldFailure { index, error })
    }

    pub(crate) fn flag(&self, index: usize) -> Result<bool, FieldFailure> {
        types::parse_flag(self.text(index)).map_err(|error| FieldFailure { index, error })
    }

    pub(crate) fn meta(&self, relative: bool, minified: bool) -> NodeMeta {
        NodeMeta::new(self.window.to_vec(), relative, minified)
    }
}

// ============================================================================
// Capability roles
// ============================================================================

pub trait CoordinateX {
    fn x(&self) -> f32;
    fn with_x(&self, x: f32) -> Self
    where
        Self: Sized;
}

pub trait CoordinateY {
    fn y(&self) -> f32;
    fn with_y(&self, y: f32) -> Self
    where
        Self: Sized;
}

/// Endpoint with both coordinates.
pub trait CoordinatePoint: CoordinateX + CoordinateY {
    fn point(&self) -> Vec2 {
        Vec2::new(self.x(), self.y())
    }

    fn with_point(&self, point: Vec2) -> Self
    where
        Self: Sized,
    {
        self.with_x(point.x).with_y(point.y)
    }
}

impl<T: CoordinateX + CoordinateY> CoordinatePoint for T {}

pub trait ControlPoint1 {
    fn control_point_1(&self) -> Vec2;
    fn with_control_point_1(&self, point: Vec2) -> Self
    where
        Self: Sized;
}

pub trait ControlPoint2 {
    fn control_point_2(&self) -> Vec2;
    fn with_control_point_2(&self, point: Vec2) -> Self
    where
        Self: Sized;
}

pub trait ControlPoint3 {
    fn control_point_3(&self) -> Vec2;
    fn with_control_point_3(&self, point: Vec2) -> Self
    where
        Self: Sized;
}

// ============================================================================
// Command node
// ============================================================================

#[enum_dispatch(PathNode)]
#[derive(Debug, Clone, PartialEq)]
pub enum CommandNode {
    MoveTo(MoveTo),
    LineTo(LineTo),
    HorizontalLineTo(HorizontalLineTo),
    VerticalLineTo(VerticalLineTo),
    CurveTo(CurveTo),
    ReflectiveCurveTo(ReflectiveCurveTo),
    QuadTo(QuadTo),
    ReflectiveQuadTo(ReflectiveQuadTo),
    ArcTo(ArcTo),
}

impl CommandNode {
    /// Build the variant for `command` from its token window.
    pub fn parse(
        command: PathCommand,
        window: &[String],
        relative: bool,
        minified: bool,
    ) -> Result<Self, FieldFailure> {
        let fields = Fields::new(command, window)?;
        let node = match command {
            PathCommand::MoveTo => MoveTo::parse(&fields, relative, minified)?.into(),
            PathCommand::LineTo => LineTo::parse(&fields, relative, minified)?.into(),
            PathCommand::HorizontalLineTo => {
                HorizontalLineTo::parse(&fields, relative, minified)?.into()
            }
            PathCommand::VerticalLineTo => VerticalLineTo::parse(&fields, relative, minified)?.into(),
            PathCommand::CurveTo => CurveTo::parse(&fields, relative, minified)?.into(),
            PathCommand::ReflectiveCurveTo => {
                ReflectiveCurveTo::parse(&fields, relative, minified)?.into()
            }
            PathCommand::QuadTo => QuadTo::parse(&fields, relative, minified)?.into(),
            PathCommand::ReflectiveQuadTo => {
                ReflectiveQuadTo::parse(&fields, relative, minified)?.into()
            }
            PathCommand::ArcTo => ArcTo::parse(&fields, relative, minified)?.into(),
        };
        Ok(node)
    }

    /// Endpoint x, for the variants that have one.
    pub fn x(&self) -> Option<f32> {
        match self {
            CommandNode::MoveTo(n) => Some(n.x()),
            CommandNode::LineTo(n) => Some(n.x()),
            CommandNode::HorizontalLineTo(n) => Some(n.x()),
            CommandNode::ArcTo(n) => Some(n.x()),
            _ => None,
        }
    }

    /// Endpoint y, for the variants that have one.
    pub fn y(&self) -> Option<f32> {
        match self {
            CommandNode::MoveTo(n) => Some(n.y()),
            CommandNode::LineTo(n) => Some(n.y()),
            CommandNode::VerticalLineTo(n) => Some(n.y()),
            CommandNode::ArcTo(n) => Some(n.y()),
            _ => None,
        }
    }

    pub fn control_point_1(&self) -> Option<Vec2> {
        match self {
            CommandNode::CurveTo(n) => Some(n.control_point_1()),
            CommandNode::ReflectiveCurveTo(n) => Some(n.control_point_1()),
            CommandNode::QuadTo(n) => Some(n.control_point_1()),
            CommandNode::ReflectiveQuadTo(n) => Some(n.control_point_1()),
            _ => None,
        }
    }

    pub fn control_point_2(&self) -> Option<Vec2> {
        match self {
            CommandNode::CurveTo(n) => Some(n.control_point_2()),
            CommandNode::ReflectiveCurveTo(n) => Some(n.control_point_2()),
            CommandNode::QuadTo(n) => Some(n.control_point_2()),
            _ => None,
        }
    }

    pub fn control_point_3(&self) -> Option<Vec2> {
        match self {
            CommandNode::CurveTo(n) => Some(n.control_point_3()),
            _ => None,
        }
    }

    /// Copy with `f` applied to every endpoint and control point.
    ///
    /// Horizontal and vertical lines map their single coordinate through the
    /// matching axis. Radii, rotation and flags are left untouched.
    pub fn map_points(&self, f: impl Fn(Vec2) -> Vec2) -> CommandNode {
        match self {
            CommandNode::MoveTo(n) => n.with_point(f(n.point())).into(),
            CommandNode::LineTo(n) => n.with_point(f(n.point())).into(),
            CommandNode::HorizontalLineTo(n) => n.with_x(f(Vec2::new(n.x(), 0.0)).x).into(),
            CommandNode::VerticalLineTo(n) => n.with_y(f(Vec2::new(0.0, n.y())).y).into(),
            CommandNode::CurveTo(n) => n
                .with_control_point_1(f(n.control_point_1()))
                .with_control_point_2(f(n.control_point_2()))
                .with_control_point_3(f(n.control_point_3()))
                .into(),
            CommandNode::ReflectiveCurveTo(n) => n
                .with_control_point_1(f(n.control_point_1()))
                .with_control_point_2(f(n.control_point_2()))
                .into(),
            CommandNode::QuadTo(n) => n
                .with_control_point_1(f(n.control_point_1()))
                .with_control_point_2(f(n.control_point_2()))
                .into(),
            CommandNode::ReflectiveQuadTo(n) => {
                n.with_control_point_1(f(n.control_point_1())).into()
            }
            CommandNode::ArcTo(n) => n.with_point(f(n.point())).into(),
        }
    }
}

impl fmt::Display for CommandNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.comment())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn window(tokens: &[&str]) -> Vec<String> {
        tokens.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn parse_dispatches_on_command() {
        let node = CommandNode::parse(PathCommand::ArcTo, &window(&["a5", "3", "20", "0", "1", "8", "8"]), true, false)
            .unwrap();
        assert!(matches!(node, CommandNode::ArcTo(_)));
        assert!(node.is_relative());
        assert_eq!(node.command(), PathCommand::ArcTo);
    }

    #[test]
    fn short_window_reports_missing_tokens() {
        let failure = CommandNode::parse(PathCommand::CurveTo, &window(&["c1", "2", "3"]), true, false)
            .unwrap_err();
        assert_eq!(
            failure.error,
            FieldError::MissingTokens {
                expected: 6,
                found: 3
            }
        );
    }

    #[test]
    fn bad_field_reports_its_index() {
        let failure = CommandNode::parse(PathCommand::LineTo, &window(&["L1", "x2"]), false, false)
            .unwrap_err();
        assert_eq!(failure.index, 1);
        assert_eq!(failure.error, FieldError::NotANumber);
    }

    #[test]
    fn close_flag_comes_from_last_token() {
        let node = CommandNode::parse(PathCommand::LineTo, &window(&["l1", "2Z"]), true, false).unwrap();
        assert!(node.should_close());
        assert_eq!(node.y(), Some(2.0));

        let node = CommandNode::parse(PathCommand::LineTo, &window(&["l1", "2"]), true, false).unwrap();
        assert!(!node.should_close());
    }

    #[test]
    fn role_accessors_follow_variant_capabilities() {
        let h = CommandNode::parse(PathCommand::HorizontalLineTo, &window(&["H4"]), false, false).unwrap();
        assert_eq!(h.x(), Some(4.0));
        assert_eq!(h.y(), None);

        let q = CommandNode::parse(PathCommand::QuadTo, &window(&["q1", "2", "3", "4"]), true, false).unwrap();
        assert_eq!(q.control_point_1(), Some(Vec2::new(1.0, 2.0)));
        assert_eq!(q.control_point_2(), Some(Vec2::new(3.0, 4.0)));
        assert_eq!(q.control_point_3(), None);
        assert_eq!(q.x(), None);
    }

    #[test]
    fn map_points_rebuilds_tokens_and_keeps_close() {
        let node = CommandNode::parse(PathCommand::MoveTo, &window(&["M1", "2z"]), false, true).unwrap();
        let moved = node.map_points(|p| p * 2.0);
        assert_eq!(moved.x(), Some(2.0));
        assert_eq!(moved.y(), Some(4.0));
        assert!(moved.should_close());
        assert!(moved.minified());
        assert_eq!(moved.source_tokens(), &["M2".to_string(), "4z".to_string()]);
        assert_eq!(node.x(), Some(1.0));
    }

    #[test]
    fn map_points_on_vertical_line_uses_y_axis() {
        let node = CommandNode::parse(PathCommand::VerticalLineTo, &window(&["v3"]), true, false).unwrap();
        let moved = node.map_points(|p| p + Vec2::new(10.0, 1.0));
        assert_eq!(moved.y(), Some(4.0));
        assert_eq!(moved.source_tokens(), &["v4".to_string()]);
    }

    #[test]
    fn byte_size_counts_invocation_fields_and_close() {
        let line = CommandNode::parse(PathCommand::LineTo, &window(&["L1", "2"]), false, false).unwrap();
        assert_eq!(line.approximate_byte_size(), 6 + 2 * 4);

        let closed = CommandNode::parse(PathCommand::CurveTo, &window(&["c1", "2", "3", "4", "5", "6z"]), true, false)
            .unwrap();
        assert_eq!(closed.approximate_byte_size(), 6 + 6 * 4 + 6);

        let arc = CommandNode::parse(PathCommand::ArcTo, &window(&["A5", "3", "20", "0", "1", "8", "8"]), false, false)
            .unwrap();
        assert_eq!(arc.approximate_byte_size(), 6 + 5 * 4 + 2 * 2);
    }

    #[test]
    fn display_prints_comment_form() {
        let node = CommandNode::parse(PathCommand::MoveTo, &window(&["M85.122", "64.795z"]), false, false).unwrap();
        assert_eq!(node.to_string(), "M 85.122 64.795z");
    }
}

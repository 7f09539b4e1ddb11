//! Elliptical arc command.

use glam::Vec2;

use crate::command::PathCommand;
use crate::render::Parameter;

use super::{CoordinateX, CoordinateY, FieldFailure, Fields, NodeMeta, PathNode, Retokenize};

/// `A`/`a`: elliptical arc to `(x, y)`.
#[derive(Debug, Clone, PartialEq)]
pub struct ArcTo {
    pub(crate) meta: NodeMeta,
    /// Horizontal radius (rx)
    pub(crate) a: f32,
    /// Vertical radius (ry)
    pub(crate) b: f32,
    /// Rotation of the ellipse x-axis, in degrees
    pub(crate) theta: f32,
    /// Large-arc flag
    pub(crate) is_more_than_half: bool,
    /// Sweep flag
    pub(crate) is_positive_arc: bool,
    pub(crate) x: f32,
    pub(crate) y: f32,
}

impl ArcTo {
    pub(crate) fn parse(
        fields: &Fields<'_>,
        relative: bool,
        minified: bool,
    ) -> Result<Self, FieldFailure> {
        Ok(Self {
            a: fields.scalar(0)?,
            b: fields.scalar(1)?,
            theta: fields.scalar(2)?,
            is_more_than_half: fields.flag(3)?,
            is_positive_arc: fields.flag(4)?,
            x: fields.scalar(5)?,
            y: fields.scalar(6)?,
            meta: fields.meta(relative, minified),
        })
    }

    /// Radii as `(rx, ry)`.
    pub fn radii(&self) -> Vec2 {
        Vec2::new(self.a, self.b)
    }

    /// Rotation of the ellipse x-axis, in degrees.
    pub fn theta(&self) -> f32 {
        self.theta
    }

    pub fn is_more_than_half(&self) -> bool {
        self.is_more_than_half
    }

    pub fn is_positive_arc(&self) -> bool {
        self.is_positive_arc
    }

    pub fn with_radii(&self, radii: Vec2) -> Self {
        Self {
            a: radii.x,
            b: radii.y,
            ..self.clone()
        }
        .retokenized()
    }

    pub fn with_theta(&self, theta: f32) -> Self {
        Self {
            theta,
            ..self.clone()
        }
        .retokenized()
    }

    pub fn with_flags(&self, is_more_than_half: bool, is_positive_arc: bool) -> Self {
        Self {
            is_more_than_half,
            is_positive_arc,
            ..self.clone()
        }
        .retokenized()
    }
}

impl PathNode for ArcTo {
    fn meta(&self) -> &NodeMeta {
        &self.meta
    }

    fn command(&self) -> PathCommand {
        PathCommand::ArcTo
    }

    fn parameters(&self) -> Vec<Parameter> {
        let relative = self.meta.relative;
        let (a, b) = if relative {
            ("a", "b")
        } else {
            ("horizontalEllipseRadius", "verticalEllipseRadius")
        };
        vec![
            Parameter::float(a, self.a),
            Parameter::float(b, self.b),
            Parameter::float("theta", self.theta),
            Parameter::flag("isMoreThanHalf", self.is_more_than_half),
            Parameter::flag("isPositiveArc", self.is_positive_arc),
            Parameter::coordinate("x1", self.x, relative),
            Parameter::coordinate("y1", self.y, relative),
        ]
    }
}

impl Retokenize for ArcTo {
    fn meta_mut(&mut self) -> &mut NodeMeta {
        &mut self.meta
    }
}

impl CoordinateX for ArcTo {
    fn x(&self) -> f32 {
        self.x
    }

    fn with_x(&self, x: f32) -> Self {
        Self { x, ..self.clone() }.retokenized()
    }
}

impl CoordinateY for ArcTo {
    fn y(&self) -> f32 {
        self.y
    }

    fn with_y(&self, y: f32) -> Self {
        Self { y, ..self.clone() }.retokenized()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::FieldError;
    use crate::node::CommandNode;

    fn window(tokens: &[&str]) -> Vec<String> {
        tokens.iter().map(|t| t.to_string()).collect()
    }

    fn parse_arc(tokens: &[&str], relative: bool) -> ArcTo {
        match CommandNode::parse(PathCommand::ArcTo, &window(tokens), relative, false).unwrap() {
            CommandNode::ArcTo(arc) => arc,
            other => panic!("expected an arc, got {other:?}"),
        }
    }

    fn reparsed(arc: &ArcTo) -> ArcTo {
        let tokens: Vec<&str> = arc.source_tokens().iter().map(String::as_str).collect();
        parse_arc(&tokens, arc.is_relative())
    }

    #[test]
    fn absolute_arc_renders_radii_names() {
        let node = CommandNode::parse(
            PathCommand::ArcTo,
            &window(&["A5", "3", "20", "0", "1", "8", "8"]),
            false,
            false,
        )
        .unwrap();
        assert_eq!(
            node.render(),
            "// A 5 3 20 0 1 8 8\n\
             arcTo(\n    \
             horizontalEllipseRadius = 5.0f,\n    \
             verticalEllipseRadius = 3.0f,\n    \
             theta = 20.0f,\n    \
             isMoreThanHalf = false,\n    \
             isPositiveArc = true,\n    \
             x1 = 8.0f,\n    \
             y1 = 8.0f,\n\
             )\n"
        );
    }

    #[test]
    fn relative_closed_arc_minified() {
        let node = CommandNode::parse(
            PathCommand::ArcTo,
            &window(&["a15", "13", "50", "1", "0", "18", "80z"]),
            true,
            true,
        )
        .unwrap();
        assert_eq!(
            node.render(),
            "arcToRelative(a = 15.0f, b = 13.0f, theta = 50.0f, isMoreThanHalf = true, \
             isPositiveArc = false, dx1 = 18.0f, dy1 = 80.0f)\nclose()"
        );
    }

    #[test]
    fn flags_must_be_zero_or_one() {
        let failure = CommandNode::parse(
            PathCommand::ArcTo,
            &window(&["a5", "3", "20", "0", "2", "8", "8"]),
            true,
            false,
        )
        .unwrap_err();
        assert_eq!(failure.index, 4);
        assert_eq!(failure.error, FieldError::NotAFlag);
    }

    #[test]
    fn endpoint_copy_keeps_flags() {
        let CommandNode::ArcTo(arc) = CommandNode::parse(
            PathCommand::ArcTo,
            &window(&["a5", "3", "20", "1", "1", "8", "8z"]),
            true,
            false,
        )
        .unwrap() else {
            panic!("expected an arc");
        };
        let moved = arc.with_y(-2.0);
        assert!(moved.is_more_than_half());
        assert!(moved.is_positive_arc());
        assert_eq!(moved.meta.tokens.last().map(String::as_str), Some("-2z"));
        assert_eq!(moved.meta.tokens.first().map(String::as_str), Some("a5"));
    }

    #[test]
    fn radii_copy_reparses_to_the_same_arc() {
        let arc = parse_arc(&["a5", "3", "20", "0", "1", "8", "8"], true);
        let scaled = arc.with_radii(Vec2::new(10.0, 6.0));
        assert_eq!(scaled.radii(), Vec2::new(10.0, 6.0));
        assert_eq!(scaled.source_tokens(), &window(&["a10", "6", "20", "0", "1", "8", "8"])[..]);
        assert_eq!(reparsed(&scaled), scaled);
        assert_eq!(arc.radii(), Vec2::new(5.0, 3.0));
    }

    #[test]
    fn theta_and_flag_copies_reparse_to_the_same_arc() {
        let arc = parse_arc(&["A5", "3", "20", "0", "1", "8", "8z"], false);

        let rotated = arc.with_theta(-45.5);
        assert_eq!(rotated.theta(), -45.5);
        assert_eq!(reparsed(&rotated), rotated);

        let flipped = rotated.with_flags(true, false);
        assert!(flipped.is_more_than_half());
        assert!(!flipped.is_positive_arc());
        assert!(flipped.should_close());
        assert_eq!(
            flipped.source_tokens(),
            &window(&["A5", "3", "-45.5", "1", "0", "8", "8z"])[..]
        );
        assert_eq!(reparsed(&flipped), flipped);
    }
}

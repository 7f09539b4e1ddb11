//! Straight segment commands: move, line, horizontal and vertical line.

use crate::command::PathCommand;
use crate::render::Parameter;

use super::{CoordinateX, CoordinateY, FieldFailure, Fields, NodeMeta, PathNode, Retokenize};

/// `M`/`m`: start a new sub-path at `(x, y)`.
#[derive(Debug, Clone, PartialEq)]
pub struct MoveTo {
    pub(crate) meta: NodeMeta,
    pub(crate) x: f32,
    pub(crate) y: f32,
}

impl MoveTo {
    pub(crate) fn parse(
        fields: &Fields<'_>,
        relative: bool,
        minified: bool,
    ) -> Result<Self, FieldFailure> {
        Ok(Self {
            x: fields.scalar(0)?,
            y: fields.scalar(1)?,
            meta: fields.meta(relative, minified),
        })
    }
}

impl PathNode for MoveTo {
    fn meta(&self) -> &NodeMeta {
        &self.meta
    }

    fn command(&self) -> PathCommand {
        PathCommand::MoveTo
    }

    fn parameters(&self) -> Vec<Parameter> {
        let relative = self.meta.relative;
        vec![
            Parameter::coordinate("x", self.x, relative),
            Parameter::coordinate("y", self.y, relative),
        ]
    }

    fn force_inline(&self) -> bool {
        true
    }
}

impl Retokenize for MoveTo {
    fn meta_mut(&mut self) -> &mut NodeMeta {
        &mut self.meta
    }
}

impl CoordinateX for MoveTo {
    fn x(&self) -> f32 {
        self.x
    }

    fn with_x(&self, x: f32) -> Self {
        Self { x, ..self.clone() }.retokenized()
    }
}

impl CoordinateY for MoveTo {
    fn y(&self) -> f32 {
        self.y
    }

    fn with_y(&self, y: f32) -> Self {
        Self { y, ..self.clone() }.retokenized()
    }
}

/// `L`/`l`: straight line to `(x, y)`.
#[derive(Debug, Clone, PartialEq)]
pub struct LineTo {
    pub(crate) meta: NodeMeta,
    pub(crate) x: f32,
    pub(crate) y: f32,
}

impl LineTo {
    pub(crate) fn parse(
        fields: &Fields<'_>,
        relative: bool,
        minified: bool,
    ) -> Result<Self, FieldFailure> {
        Ok(Self {
            x: fields.scalar(0)?,
            y: fields.scalar(1)?,
            meta: fields.meta(relative, minified),
        })
    }
}

impl PathNode for LineTo {
    fn meta(&self) -> &NodeMeta {
        &self.meta
    }

    fn command(&self) -> PathCommand {
        PathCommand::LineTo
    }

    fn parameters(&self) -> Vec<Parameter> {
        let relative = self.meta.relative;
        vec![
            Parameter::coordinate("x", self.x, relative),
            Parameter::coordinate("y", self.y, relative),
        ]
    }

    fn force_inline(&self) -> bool {
        true
    }
}

impl Retokenize for LineTo {
    fn meta_mut(&mut self) -> &mut NodeMeta {
        &mut self.meta
    }
}

impl CoordinateX for LineTo {
    fn x(&self) -> f32 {
        self.x
    }

    fn with_x(&self, x: f32) -> Self {
        Self { x, ..self.clone() }.retokenized()
    }
}

impl CoordinateY for LineTo {
    fn y(&self) -> f32 {
        self.y
    }

    fn with_y(&self, y: f32) -> Self {
        Self { y, ..self.clone() }.retokenized()
    }
}

/// `H`/`h`: horizontal line to `x`.
#[derive(Debug, Clone, PartialEq)]
pub struct HorizontalLineTo {
    pub(crate) meta: NodeMeta,
    pub(crate) x: f32,
}

impl HorizontalLineTo {
    pub(crate) fn parse(
        fields: &Fields<'_>,
        relative: bool,
        minified: bool,
    ) -> Result<Self, FieldFailure> {
        Ok(Self {
            x: fields.scalar(0)?,
            meta: fields.meta(relative, minified),
        })
    }
}

impl PathNode for HorizontalLineTo {
    fn meta(&self) -> &NodeMeta {
        &self.meta
    }

    fn command(&self) -> PathCommand {
        PathCommand::HorizontalLineTo
    }

    fn parameters(&self) -> Vec<Parameter> {
        vec![Parameter::coordinate("x", self.x, self.meta.relative)]
    }

    fn force_inline(&self) -> bool {
        true
    }
}

impl Retokenize for HorizontalLineTo {
    fn meta_mut(&mut self) -> &mut NodeMeta {
        &mut self.meta
    }
}

impl CoordinateX for HorizontalLineTo {
    fn x(&self) -> f32 {
        self.x
    }

    fn with_x(&self, x: f32) -> Self {
        Self { x, ..self.clone() }.retokenized()
    }
}

/// `V`/`v`: vertical line to `y`.
#[derive(Debug, Clone, PartialEq)]
pub struct VerticalLineTo {
    pub(crate) meta: NodeMeta,
    pub(crate) y: f32,
}

impl VerticalLineTo {
    pub(crate) fn parse(
        fields: &Fields<'_>,
        relative: bool,
        minified: bool,
    ) -> Result<Self, FieldFailure> {
        Ok(Self {
            y: fields.scalar(0)?,
            meta: fields.meta(relative, minified),
        })
    }
}

impl PathNode for VerticalLineTo {
    fn meta(&self) -> &NodeMeta {
        &self.meta
    }

    fn command(&self) -> PathCommand {
        PathCommand::VerticalLineTo
    }

    fn parameters(&self) -> Vec<Parameter> {
        vec![Parameter::coordinate("y", self.y, self.meta.relative)]
    }

    fn force_inline(&self) -> bool {
        true
    }
}

impl Retokenize for VerticalLineTo {
    fn meta_mut(&mut self) -> &mut NodeMeta {
        &mut self.meta
    }
}

impl CoordinateY for VerticalLineTo {
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
    use crate::node::CommandNode;

    fn parse(command: PathCommand, tokens: &[&str], relative: bool, minified: bool) -> CommandNode {
        let window: Vec<String> = tokens.iter().map(|t| t.to_string()).collect();
        CommandNode::parse(command, &window, relative, minified).unwrap()
    }

    #[test]
    fn move_renders_inline_with_comment() {
        let node = parse(PathCommand::MoveTo, &["M85.122", "64.795"], false, false);
        assert_eq!(
            node.render(),
            "// M 85.122 64.795\nmoveTo(x = 85.122f, y = 64.795f)\n"
        );
    }

    #[test]
    fn relative_line_uses_delta_names() {
        let node = parse(PathCommand::LineTo, &["l-12.34", "88.6"], true, false);
        assert_eq!(
            node.render(),
            "// l -12.34 88.6\nlineToRelative(dx = -12.34f, dy = 88.6f)\n"
        );
    }

    #[test]
    fn horizontal_line_closes_after_call() {
        let node = parse(PathCommand::HorizontalLineTo, &["H10z"], false, false);
        assert_eq!(
            node.render(),
            "// H 10z\nhorizontalLineTo(x = 10.0f)\nclose()\n"
        );
    }

    #[test]
    fn minified_vertical_line_has_no_comment() {
        let node = parse(PathCommand::VerticalLineTo, &["v-5Z"], true, true);
        assert_eq!(node.render(), "verticalLineToRelative(dy = -5.0f)\nclose()");
    }

    #[test]
    fn copy_hooks_preserve_mode_and_relativity() {
        let CommandNode::LineTo(line) = parse(PathCommand::LineTo, &["l1", "2z"], true, true) else {
            panic!("expected a line");
        };
        let moved = line.with_x(3.5);
        assert_eq!(moved.x, 3.5);
        assert_eq!(moved.y, 2.0);
        assert!(moved.meta.relative);
        assert!(moved.meta.minified);
        assert!(moved.meta.should_close);
        assert_eq!(moved.meta.tokens, vec!["l3.5".to_string(), "2z".to_string()]);
    }
}

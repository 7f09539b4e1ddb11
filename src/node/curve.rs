//! Bezier commands.

use glam::Vec2;

use crate::command::PathCommand;
use crate::render::Parameter;

use super::{
    ControlPoint1, ControlPoint2, ControlPoint3, FieldFailure, Fields, NodeMeta, PathNode,
    Retokenize,
};

fn point(fields: &Fields<'_>, first: usize) -> Result<Vec2, FieldFailure> {
    Ok(Vec2::new(fields.scalar(first)?, fields.scalar(first + 1)?))
}

fn point_parameters(parameters: &mut Vec<Parameter>, names: [&'static str; 2], point: Vec2, relative: bool) {
    parameters.push(Parameter::coordinate(names[0], point.x, relative));
    parameters.push(Parameter::coordinate(names[1], point.y, relative));
}

/// `C`/`c`: cubic bezier with two control points ending at the third point.
#[derive(Debug, Clone, PartialEq)]
pub struct CurveTo {
    pub(crate) meta: NodeMeta,
    pub(crate) p1: Vec2,
    pub(crate) p2: Vec2,
    pub(crate) p3: Vec2,
}

impl CurveTo {
    pub(crate) fn parse(
        fields: &Fields<'_>,
        relative: bool,
        minified: bool,
    ) -> Result<Self, FieldFailure> {
        Ok(Self {
            p1: point(fields, 0)?,
            p2: point(fields, 2)?,
            p3: point(fields, 4)?,
            meta: fields.meta(relative, minified),
        })
    }
}

impl PathNode for CurveTo {
    fn meta(&self) -> &NodeMeta {
        &self.meta
    }

    fn command(&self) -> PathCommand {
        PathCommand::CurveTo
    }

    fn parameters(&self) -> Vec<Parameter> {
        let relative = self.meta.relative;
        let mut parameters = Vec::with_capacity(6);
        point_parameters(&mut parameters, ["x1", "y1"], self.p1, relative);
        point_parameters(&mut parameters, ["x2", "y2"], self.p2, relative);
        point_parameters(&mut parameters, ["x3", "y3"], self.p3, relative);
        parameters
    }
}

impl Retokenize for CurveTo {
    fn meta_mut(&mut self) -> &mut NodeMeta {
        &mut self.meta
    }
}

impl ControlPoint1 for CurveTo {
    fn control_point_1(&self) -> Vec2 {
        self.p1
    }

    fn with_control_point_1(&self, p1: Vec2) -> Self {
        Self { p1, ..self.clone() }.retokenized()
    }
}

impl ControlPoint2 for CurveTo {
    fn control_point_2(&self) -> Vec2 {
        self.p2
    }

    fn with_control_point_2(&self, p2: Vec2) -> Self {
        Self { p2, ..self.clone() }.retokenized()
    }
}

impl ControlPoint3 for CurveTo {
    fn control_point_3(&self) -> Vec2 {
        self.p3
    }

    fn with_control_point_3(&self, p3: Vec2) -> Self {
        Self { p3, ..self.clone() }.retokenized()
    }
}

/// `S`/`s`: cubic bezier whose first control point mirrors the previous curve.
#[derive(Debug, Clone, PartialEq)]
pub struct ReflectiveCurveTo {
    pub(crate) meta: NodeMeta,
    pub(crate) p1: Vec2,
    pub(crate) p2: Vec2,
}

impl ReflectiveCurveTo {
    pub(crate) fn parse(
        fields: &Fields<'_>,
        relative: bool,
        minified: bool,
    ) -> Result<Self, FieldFailure> {
        Ok(Self {
            p1: point(fields, 0)?,
            p2: point(fields, 2)?,
            meta: fields.meta(relative, minified),
        })
    }
}

impl PathNode for ReflectiveCurveTo {
    fn meta(&self) -> &NodeMeta {
        &self.meta
    }

    fn command(&self) -> PathCommand {
        PathCommand::ReflectiveCurveTo
    }

    fn parameters(&self) -> Vec<Parameter> {
        let relative = self.meta.relative;
        let mut parameters = Vec::with_capacity(4);
        point_parameters(&mut parameters, ["x1", "y1"], self.p1, relative);
        point_parameters(&mut parameters, ["x2", "y2"], self.p2, relative);
        parameters
    }
}

impl Retokenize for ReflectiveCurveTo {
    fn meta_mut(&mut self) -> &mut NodeMeta {
        &mut self.meta
    }
}

impl ControlPoint1 for ReflectiveCurveTo {
    fn control_point_1(&self) -> Vec2 {
        self.p1
    }

    fn with_control_point_1(&self, p1: Vec2) -> Self {
        Self { p1, ..self.clone() }.retokenized()
    }
}

impl ControlPoint2 for ReflectiveCurveTo {
    fn control_point_2(&self) -> Vec2 {
        self.p2
    }

    fn with_control_point_2(&self, p2: Vec2) -> Self {
        Self { p2, ..self.clone() }.retokenized()
    }
}

/// `Q`/`q`: quadratic bezier.
#[derive(Debug, Clone, PartialEq)]
pub struct QuadTo {
    pub(crate) meta: NodeMeta,
    pub(crate) p1: Vec2,
    pub(crate) p2: Vec2,
}

impl QuadTo {
    pub(crate) fn parse(
        fields: &Fields<'_>,
        relative: bool,
        minified: bool,
    ) -> Result<Self, FieldFailure> {
        Ok(Self {
            p1: point(fields, 0)?,
            p2: point(fields, 2)?,
            meta: fields.meta(relative, minified),
        })
    }
}

impl PathNode for QuadTo {
    fn meta(&self) -> &NodeMeta {
        &self.meta
    }

    fn command(&self) -> PathCommand {
        PathCommand::QuadTo
    }

    fn parameters(&self) -> Vec<Parameter> {
        let relative = self.meta.relative;
        let mut parameters = Vec::with_capacity(4);
        point_parameters(&mut parameters, ["x1", "y1"], self.p1, relative);
        point_parameters(&mut parameters, ["x2", "y2"], self.p2, relative);
        parameters
    }
}

impl Retokenize for QuadTo {
    fn meta_mut(&mut self) -> &mut NodeMeta {
        &mut self.meta
    }
}

impl ControlPoint1 for QuadTo {
    fn control_point_1(&self) -> Vec2 {
        self.p1
    }

    fn with_control_point_1(&self, p1: Vec2) -> Self {
        Self { p1, ..self.clone() }.retokenized()
    }
}

impl ControlPoint2 for QuadTo {
    fn control_point_2(&self) -> Vec2 {
        self.p2
    }

    fn with_control_point_2(&self, p2: Vec2) -> Self {
        Self { p2, ..self.clone() }.retokenized()
    }
}

/// `T`/`t`: quadratic bezier with a mirrored control point.
///
/// The single point is rendered as `x1`/`y1`.
#[derive(Debug, Clone, PartialEq)]
pub struct ReflectiveQuadTo {
    pub(crate) meta: NodeMeta,
    pub(crate) p1: Vec2,
}

impl ReflectiveQuadTo {
    pub(crate) fn parse(
        fields: &Fields<'_>,
        relative: bool,
        minified: bool,
    ) -> Result<Self, FieldFailure> {
        Ok(Self {
            p1: point(fields, 0)?,
            meta: fields.meta(relative, minified),
        })
    }
}

impl PathNode for ReflectiveQuadTo {
    fn meta(&self) -> &NodeMeta {
        &self.meta
    }

    fn command(&self) -> PathCommand {
        PathCommand::ReflectiveQuadTo
    }

    fn parameters(&self) -> Vec<Parameter> {
        let mut parameters = Vec::with_capacity(2);
        point_parameters(&mut parameters, ["x1", "y1"], self.p1, self.meta.relative);
        parameters
    }
}

impl Retokenize for ReflectiveQuadTo {
    fn meta_mut(&mut self) -> &mut NodeMeta {
        &mut self.meta
    }
}

impl ControlPoint1 for ReflectiveQuadTo {
    fn control_point_1(&self) -> Vec2 {
        self.p1
    }

    fn with_control_point_1(&self, p1: Vec2) -> Self {
        Self { p1, ..self.clone() }.retokenized()
    }
}

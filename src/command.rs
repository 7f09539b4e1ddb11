//! Static metadata for the path command letters.

use std::fmt;

/// Letter that closes the current sub-path. Never a command of its own.
pub const CLOSE_LETTER: char = 'z';

/// Zero-based index of the large-arc flag inside an arc argument group.
pub const ARC_LARGE_ARC_FLAG_FIELD: usize = 3;

/// Zero-based index of the sweep flag inside an arc argument group.
pub const ARC_SWEEP_FLAG_FIELD: usize = 4;

/// One of the nine drawing commands a path can contain.
///
/// Equality is by command only; relativity travels separately.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PathCommand {
    MoveTo,
    LineTo,
    HorizontalLineTo,
    VerticalLineTo,
    CurveTo,
    ReflectiveCurveTo,
    QuadTo,
    ReflectiveQuadTo,
    ArcTo,
}

/// Row of the command table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandSpec {
    pub command: PathCommand,
    /// Lowercase letter of the command
    pub letter: char,
    /// Number of scalar fields one invocation consumes
    pub arity: usize,
    /// Whether a trailing close letter may follow the last field
    pub closable: bool,
    /// Name of the emitted builder function
    pub function: &'static str,
}

static TABLE: [CommandSpec; 9] = [
    CommandSpec {
        command: PathCommand::MoveTo,
        letter: 'm',
        arity: 2,
        closable: true,
        function: "moveTo",
    },
    CommandSpec {
        command: PathCommand::LineTo,
        letter: 'l',
        arity: 2,
        closable: true,
        function: "lineTo",
    },
    CommandSpec {
        command: PathCommand::HorizontalLineTo,
        letter: 'h',
        arity: 1,
        closable: true,
        function: "horizontalLineTo",
    },
    CommandSpec {
        command: PathCommand::VerticalLineTo,
        letter: 'v',
        arity: 1,
        closable: true,
        function: "verticalLineTo",
    },
    CommandSpec {
        command: PathCommand::CurveTo,
        letter: 'c',
        arity: 6,
        closable: true,
        function: "curveTo",
    },
    CommandSpec {
        command: PathCommand::ReflectiveCurveTo,
        letter: 's',
        arity: 4,
        closable: true,
        function: "reflectiveCurveTo",
    },
    CommandSpec {
        command: PathCommand::QuadTo,
        letter: 'q',
        arity: 4,
        closable: true,
        function: "quadTo",
    },
    CommandSpec {
        command: PathCommand::ReflectiveQuadTo,
        letter: 't',
        arity: 2,
        closable: true,
        function: "reflectiveQuadTo",
    },
    CommandSpec {
        command: PathCommand::ArcTo,
        letter: 'a',
        arity: 7,
        closable: true,
        function: "arcTo",
    },
];

impl PathCommand {
    /// All commands in table order.
    pub const ALL: [PathCommand; 9] = [
        PathCommand::MoveTo,
        PathCommand::LineTo,
        PathCommand::HorizontalLineTo,
        PathCommand::VerticalLineTo,
        PathCommand::CurveTo,
        PathCommand::ReflectiveCurveTo,
        PathCommand::QuadTo,
        PathCommand::ReflectiveQuadTo,
        PathCommand::ArcTo,
    ];

    /// Look up a command letter, ignoring case.
    ///
    /// Returns the command and whether the letter was lowercase (relative).
    /// The close letter is not a command and yields `None`.
    pub fn from_letter(letter: char) -> Option<(PathCommand, bool)> {
        let lower = letter.to_ascii_lowercase();
        TABLE
            .iter()
            .find(|spec| spec.letter == lower)
            .map(|spec| (spec.command, letter.is_ascii_lowercase()))
    }

    pub fn spec(self) -> &'static CommandSpec {
        // TABLE is laid out in declaration order
        &TABLE[self as usize]
    }

    pub fn letter(self) -> char {
        self.spec().letter
    }

    pub fn arity(self) -> usize {
        self.spec().arity
    }

    pub fn closable(self) -> bool {
        self.spec().closable
    }

    pub fn function(self) -> &'static str {
        self.spec().function
    }

    /// Letter in the case matching `relative`.
    pub fn cased_letter(self, relative: bool) -> char {
        if relative {
            self.letter()
        } else {
            self.letter().to_ascii_uppercase()
        }
    }

    /// Letter an implicit continuation of this command resolves to.
    ///
    /// Extra coordinate pairs after a move are line segments.
    pub fn continuation(self) -> PathCommand {
        match self {
            PathCommand::MoveTo => PathCommand::LineTo,
            other => other,
        }
    }
}

impl fmt::Display for PathCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Whether `ch` is any supported command letter or the close letter.
pub fn is_command_letter(ch: char) -> bool {
    ch.eq_ignore_ascii_case(&CLOSE_LETTER) || PathCommand::from_letter(ch).is_some()
}

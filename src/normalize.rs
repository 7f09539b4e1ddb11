//! Separator insertion for raw path data.
//!
//! Path data allows numbers to run together (`10-5`, `.5.5`), commands to
//! sit directly against their arguments, and arc flags to be glued to the
//! following coordinate (`a20 60 45 0130 20`). [`normalize`] rewrites such
//! text into single-space separated tokens where every token is either a
//! command letter glued to its first argument or a bare argument, with an
//! optional close letter glued to the end.

use crate::command::{ARC_LARGE_ARC_FLAG_FIELD, ARC_SWEEP_FLAG_FIELD, CLOSE_LETTER};
use crate::log;

/// Number of fields in one arc argument group.
const ARC_GROUP_LEN: usize = 7;

/// Normalize raw path data. Never fails; malformed content surfaces when
/// the result is parsed.
pub fn normalize(raw: &str) -> String {
    log::debug!(raw, "normalizing path data");

    let mut normalizer = Normalizer::with_capacity(raw.len());
    for ch in raw.chars() {
        normalizer.push(ch);
    }
    let normalized = normalizer.finish();

    log::debug!(normalized = normalized.as_str(), "normalized path data");
    normalized
}

/// State of the number currently being written.
#[derive(Debug, Default, Clone, Copy)]
struct NumberState {
    active: bool,
    len: usize,
    seen_dot: bool,
    seen_exponent: bool,
    /// Slot inside the arc group, when inside an arc command
    arc_field: Option<usize>,
}

impl NumberState {
    /// A single `0`/`1` digit sitting in one of the arc flag slots.
    fn is_complete_flag(&self, last: Option<char>) -> bool {
        self.len == 1
            && matches!(last, Some('0' | '1'))
            && matches!(
                self.arc_field,
                Some(ARC_LARGE_ARC_FLAG_FIELD | ARC_SWEEP_FLAG_FIELD)
            )
    }
}

#[derive(Debug, Default)]
struct Normalizer {
    out: String,
    number: NumberState,
    /// Next arc slot to hand out, `None` outside arc commands
    arc_next: Option<usize>,
    /// Last pushed character is a command letter
    after_command: bool,
}

impl Normalizer {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            out: String::with_capacity(capacity + capacity / 4),
            ..Self::default()
        }
    }

    fn last(&self) -> Option<char> {
        self.out.chars().next_back()
    }

    fn push(&mut self, ch: char) {
        match ch {
            ',' => self.separator(),
            c if c.is_whitespace() => self.separator(),
            'e' | 'E' if self.number.active && !self.number.seen_exponent => {
                self.number.seen_exponent = true;
                self.number.len += 1;
                self.emit(ch);
            }
            c if c.eq_ignore_ascii_case(&CLOSE_LETTER) => self.close(c),
            '0'..='9' => {
                if !self.number.active || self.number.is_complete_flag(self.last()) {
                    self.begin_number();
                }
                self.number.len += 1;
                self.emit(ch);
            }
            '-' | '+' => {
                let exponent_sign = self.number.active && matches!(self.last(), Some('e' | 'E'));
                if !exponent_sign {
                    self.begin_number();
                }
                self.number.len += 1;
                self.emit(ch);
            }
            '.' => {
                let split = !self.number.active
                    || self.number.seen_dot
                    || self.number.seen_exponent
                    || self.number.is_complete_flag(self.last());
                if split {
                    self.begin_number();
                }
                self.number.seen_dot = true;
                self.number.len += 1;
                self.emit(ch);
            }
            _ => self.command(ch),
        }
    }

    fn emit(&mut self, ch: char) {
        self.out.push(ch);
        self.after_command = false;
    }

    fn separator(&mut self) {
        self.number.active = false;
        if !self.out.is_empty() && !self.after_command && self.last() != Some(' ') {
            self.out.push(' ');
        }
    }

    fn begin_number(&mut self) {
        if !self.out.is_empty() && !self.after_command && self.last() != Some(' ') {
            self.out.push(' ');
        }
        let arc_field = self.arc_next.map(|slot| {
            self.arc_next = Some((slot + 1) % ARC_GROUP_LEN);
            slot
        });
        self.number = NumberState {
            active: true,
            arc_field,
            ..NumberState::default()
        };
    }

    fn close(&mut self, ch: char) {
        self.number.active = false;
        if self.last() == Some(' ') {
            self.out.pop();
        }
        self.emit(ch);
    }

    fn command(&mut self, ch: char) {
        self.number.active = false;
        if !self.out.is_empty() && self.last() != Some(' ') {
            self.out.push(' ');
        }
        self.out.push(ch);
        self.after_command = true;
        self.arc_next = ch.eq_ignore_ascii_case(&'a').then_some(0);
    }

    fn finish(mut self) -> String {
        let trimmed = self.out.trim_end().len();
        self.out.truncate(trimmed);
        self.out
    }
}

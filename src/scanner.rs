//! The scanner: a stateful wrapper around a pattern and a cursor exposing
//! anchored `match_` and sliding `find`.

use std::rc::Rc;

use crate::context::Context;
use crate::cursor::Cursor;
use crate::matcher;
use crate::pattern::{Match, Pattern};
use crate::scope::Scope;

pub struct Scanner<'a> {
    pattern: Rc<Pattern>,

    cursor: Cursor<'a>,

    ctx: &'a Context,
}

impl<'a> Scanner<'a> {
    pub(crate) fn new(pattern: Rc<Pattern>, cursor: Cursor<'a>, ctx: &'a Context) -> Self {
        Self { pattern, cursor, ctx }
    }

    /// `match`: succeeds only when the pattern consumes all remaining
    /// input from the scanner's current position (anchored full match).
    pub fn match_(&mut self) -> Option<Rc<Match>> {
        let mut probe = self.cursor;
        let mut top = Scope::new();
        match matcher::exec(&self.pattern, Some(&mut top), &mut probe, self.ctx) {
            Ok(m) if probe.is_done() => {
                self.cursor = probe;
                Some(m)
            }
            _ => None,
        }
    }

    /// `find`: repeatedly attempts a match at the current position,
    /// advancing one code point on failure, until a match is found or
    /// input is exhausted. On success the scanner's cursor is repositioned
    /// to the match's `end`, so the next `find` call continues from there.
    pub fn find(&mut self) -> Option<Rc<Match>> {
        loop {
            let mut probe = self.cursor;
            let mut top = Scope::new();
            match matcher::exec(&self.pattern, Some(&mut top), &mut probe, self.ctx) {
                Ok(m) => {
                    self.cursor.set_position(m.end);
                    return Some(m);
                }
                Err(_) => {
                    if self.cursor.is_done() {
                        return None;
                    }
                    self.cursor.read(self.ctx);
                }
            }
        }
    }

    pub fn cursor(&self) -> Cursor<'a> {
        self.cursor
    }
}

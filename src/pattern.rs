//! The pattern value: a closed tagged sum of combinator variants, and the
//! match record it produces.

use std::rc::Rc;

use crate::cursor::CodePoint;
use crate::scope::Scope;

/// A compiled, immutable pattern. Every variant carries an optional
/// `:name` binding; if present and the matcher runs inside a non-null
/// scope, the produced match is inserted there under that key.
#[derive(Debug, Clone)]
pub enum Pattern {
    /// Matches a fixed sequence of code points exactly.
    Literal { seq: Vec<CodePoint>, bind: Option<String> },

    /// Concatenation: every sub-pattern must match in order.
    AllOf { items: Vec<Pattern>, bind: Option<String> },

    /// Ordered choice: the first sub-pattern to succeed wins.
    OneOf { items: Vec<Pattern>, bind: Option<String> },

    /// Grouping: matches the sub-pattern exactly once.
    JustOne { inner: Box<Pattern>, bind: Option<String> },

    /// Optional: matches the sub-pattern zero or one times.
    ZeroOrOne { inner: Box<Pattern>, bind: Option<String> },

    /// Greedy repetition, may match empty.
    ZeroOrMore { inner: Box<Pattern>, bind: Option<String> },

    /// Greedy repetition, at least one match.
    OneOrMore { inner: Box<Pattern>, bind: Option<String> },

    /// Positive lookahead: consumes no input.
    HasNext { inner: Box<Pattern>, bind: Option<String> },

    /// Negative lookahead: consumes no input.
    NotNext { inner: Box<Pattern>, bind: Option<String> },

    /// Consumes one code point if `pred` holds.
    Builtin {
        name: &'static str,
        pred: fn(CodePoint) -> bool,
        bind: Option<String>,
    },

    /// Deferred lookup in the context registry, resolved at match time
    /// (so recursive and mutually-recursive definitions work).
    Named { name: String, bind: Option<String> },
}

impl Pattern {
    pub fn binding(&self) -> Option<&str> {
        match self {
            Pattern::Literal { bind, .. }
            | Pattern::AllOf { bind, .. }
            | Pattern::OneOf { bind, .. }
            | Pattern::JustOne { bind, .. }
            | Pattern::ZeroOrOne { bind, .. }
            | Pattern::ZeroOrMore { bind, .. }
            | Pattern::OneOrMore { bind, .. }
            | Pattern::HasNext { bind, .. }
            | Pattern::NotNext { bind, .. }
            | Pattern::Builtin { bind, .. }
            | Pattern::Named { bind, .. } => bind.as_deref(),
        }
    }

    /// Attaches a `:name` binding, as produced by the compiler's
    /// `primitive [':' name]` production.
    pub fn with_binding(mut self, name: impl Into<String>) -> Self {
        let name = Some(name.into());
        match &mut self {
            Pattern::Literal { bind, .. }
            | Pattern::AllOf { bind, .. }
            | Pattern::OneOf { bind, .. }
            | Pattern::JustOne { bind, .. }
            | Pattern::ZeroOrOne { bind, .. }
            | Pattern::ZeroOrMore { bind, .. }
            | Pattern::OneOrMore { bind, .. }
            | Pattern::HasNext { bind, .. }
            | Pattern::NotNext { bind, .. }
            | Pattern::Builtin { bind, .. }
            | Pattern::Named { bind, .. } => *bind = name,
        }
        self
    }
}

/// A successful consumption: the span it covers, the captures made inside
/// it, and the sibling chain when produced by repetition.
#[derive(Debug)]
pub struct Match {
    /// Byte offset into the original input where the match begins.
    pub loc: usize,

    /// Byte offset into the original input where the match ends.
    pub end: usize,

    /// Captures made directly inside this match. Absent for lookahead
    /// matches and the character built-ins, which bind nothing of their own.
    pub scope: Option<Scope>,

    /// The next repetition in a chain, when this match was produced by
    /// `ZeroOrMore`/`OneOrMore`. `None` for every other variant.
    pub next: Option<Rc<Match>>,
}

impl Match {
    pub fn get(&self, name: &str) -> Option<Rc<Match>> {
        self.scope.as_ref().and_then(|s| s.get(name))
    }

    pub fn is_empty(&self) -> bool {
        self.loc == self.end
    }
}

//! The matcher interpreter: every pattern variant consumes a prefix of a
//! cursor, threading a capture scope, and returns a match or an ordinary
//! (non-error) failure.

use std::rc::Rc;

use crate::context::Context;
use crate::cursor::{CodePoint, Cursor};
use crate::err::Error;
use crate::pattern::{Match, Pattern};
use crate::scope::Scope;
use crate::trace_exec;

/// Matching simply didn't succeed — not reported through the error
/// channel, except that `Named` resolution failure additionally sets the
/// context's sticky error as a side effect.
#[derive(Debug)]
pub struct Fail;

pub type MatchResult = Result<Rc<Match>, Fail>;

pub fn exec(pat: &Pattern, mut scope: Option<&mut Scope>, cur: &mut Cursor, ctx: &Context) -> MatchResult {
    let beg = cur.position();
    let result = match pat {
        Pattern::Literal { seq, .. } => exec_literal(seq, cur, ctx),
        Pattern::AllOf { items, .. } => exec_all_of(items, cur, ctx),
        Pattern::OneOf { items, .. } => exec_one_of(items, scope.as_deref_mut(), cur, ctx),
        Pattern::JustOne { inner, .. } => exec_all_of(std::slice::from_ref(inner.as_ref()), cur, ctx),
        Pattern::ZeroOrOne { inner, .. } => exec_zero_or_one(inner, cur, ctx),
        Pattern::ZeroOrMore { inner, .. } => exec_repeat(inner, cur, ctx, 0),
        Pattern::OneOrMore { inner, .. } => exec_repeat(inner, cur, ctx, 1),
        Pattern::HasNext { inner, .. } => exec_has_next(inner, cur, ctx),
        Pattern::NotNext { inner, .. } => exec_not_next(inner, cur, ctx),
        Pattern::Builtin { pred, .. } => exec_builtin(*pred, cur, ctx),
        Pattern::Named { name, .. } => exec_named(name, scope.as_deref_mut(), cur, ctx),
    };
    let result = trace_exec!("exec", beg, result);
    if let Ok(m) = &result {
        if let Some(outer) = scope {
            // Bubble the child's own captures up first, so a transparent
            // wrapper (`OneOf`, `JustOne`) exposes what its branches bound.
            // An explicit `:name` on `pat` itself is staged after, so it
            // shadows any same-named capture absorbed from further in.
            if let Some(child_scope) = &m.scope {
                outer.absorb(child_scope);
            }
            if let Some(name) = pat.binding() {
                outer.put(name.to_string(), Rc::clone(m));
            }
        }
    }
    result
}

fn leaf(loc: usize, end: usize) -> Rc<Match> {
    Rc::new(Match {
        loc,
        end,
        scope: None,
        next: None,
    })
}

fn exec_literal(seq: &[CodePoint], cur: &mut Cursor, ctx: &Context) -> MatchResult {
    let start = cur.position();
    for &expect in seq {
        let got = cur.read(ctx);
        if got != expect {
            return Err(Fail);
        }
    }
    Ok(leaf(start, cur.position()))
}

fn exec_all_of(items: &[Pattern], cur: &mut Cursor, ctx: &Context) -> MatchResult {
    let start = cur.position();
    let mut sub = Scope::new();
    for child in items {
        exec(child, Some(&mut sub), cur, ctx)?;
    }
    sub.commit();
    Ok(Rc::new(Match {
        loc: start,
        end: cur.position(),
        scope: Some(sub),
        next: None,
    }))
}

fn exec_one_of(items: &[Pattern], mut scope: Option<&mut Scope>, cur: &mut Cursor, ctx: &Context) -> MatchResult {
    for child in items {
        let saved = *cur;
        match exec(child, scope.as_deref_mut(), cur, ctx) {
            Ok(m) => {
                if let Some(outer) = scope.as_deref_mut() {
                    outer.commit();
                }
                return Ok(m);
            }
            Err(Fail) => {
                if let Some(outer) = scope.as_deref_mut() {
                    outer.cancel();
                }
                *cur = saved;
            }
        }
    }
    Err(Fail)
}

fn exec_zero_or_one(inner: &Pattern, cur: &mut Cursor, ctx: &Context) -> MatchResult {
    let start = cur.position();
    let saved = *cur;
    let mut sub = Scope::new();
    match exec(inner, Some(&mut sub), cur, ctx) {
        Ok(_) => {
            sub.commit();
            Ok(Rc::new(Match {
                loc: start,
                end: cur.position(),
                scope: Some(sub),
                next: None,
            }))
        }
        Err(Fail) => {
            *cur = saved;
            Ok(leaf(start, start))
        }
    }
}

fn exec_repeat(inner: &Pattern, cur: &mut Cursor, ctx: &Context, min: usize) -> MatchResult {
    let start = cur.position();
    let mut attempts: Vec<(usize, usize, Scope)> = Vec::new();
    loop {
        let saved = *cur;
        let mut sub = Scope::new();
        match exec(inner, Some(&mut sub), cur, ctx) {
            Ok(_) => {
                sub.commit();
                attempts.push((saved.position(), cur.position(), sub));
            }
            Err(Fail) => {
                *cur = saved;
                break;
            }
        }
    }
    if attempts.len() < min {
        return Err(Fail);
    }
    if attempts.is_empty() {
        return Ok(leaf(start, start));
    }
    // Stitch the chain tail-to-head so each node's `next` points forward.
    let mut next = None;
    for (loc, end, scope) in attempts.into_iter().rev() {
        next = Some(Rc::new(Match {
            loc,
            end,
            scope: Some(scope),
            next,
        }));
    }
    Ok(next.unwrap())
}

fn exec_has_next(inner: &Pattern, cur: &mut Cursor, ctx: &Context) -> MatchResult {
    let start = cur.position();
    let saved = *cur;
    // A lookahead is side-effect free: the child is run with no scope so
    // it can't leak captures, and the reported match is always empty at
    // `start` regardless of what the child itself spans.
    let outcome = exec(inner, None, cur, ctx);
    *cur = saved;
    outcome.map(|_| leaf(start, start))
}

fn exec_not_next(inner: &Pattern, cur: &mut Cursor, ctx: &Context) -> MatchResult {
    let start = cur.position();
    let saved = *cur;
    let outcome = exec(inner, None, cur, ctx);
    *cur = saved;
    match outcome {
        Ok(_) => Err(Fail),
        Err(Fail) => Ok(leaf(start, start)),
    }
}

fn exec_builtin(pred: fn(CodePoint) -> bool, cur: &mut Cursor, ctx: &Context) -> MatchResult {
    let start = cur.position();
    let saved = *cur;
    let cp = cur.read(ctx);
    if cp >= 0 && pred(cp) {
        Ok(leaf(start, cur.position()))
    } else {
        *cur = saved;
        Err(Fail)
    }
}

fn exec_named(name: &str, scope: Option<&mut Scope>, cur: &mut Cursor, ctx: &Context) -> MatchResult {
    match ctx.registry().lookup(name) {
        Some(pattern) => exec(&pattern, scope, cur, ctx),
        None => {
            ctx.set_error(Error::undefined(format!("undefined pattern reference: {name}")));
            Err(Fail)
        }
    }
}

//! `Context`: the crate's top-level handle. Owns the registry and the
//! sticky error state, and doubles as the scratch buffer the compiler and
//! matcher thread a shared reference through.

use std::cell::RefCell;
use std::rc::Rc;

use crate::compiler;
use crate::cursor::{Cursor, Text};
use crate::err::{Error, ErrorKind};
use crate::pattern::Pattern;
use crate::registry::Registry;
use crate::scanner::Scanner;

#[derive(Debug)]
pub struct Context {
    registry: RefCell<Registry>,

    error: RefCell<Option<Error>>,
}

impl Context {
    /// `init`: a fresh context with the prelude already registered.
    pub fn init() -> Self {
        Self {
            registry: RefCell::new(Registry::with_prelude()),
            error: RefCell::new(None),
        }
    }

    /// `define`: installs or overwrites a named pattern in the registry.
    pub fn define(&self, name: impl Into<String>, pattern: Pattern) {
        self.registry.borrow_mut().define(name, pattern);
    }

    /// `compile`: parses `text` into an executable pattern. Also sets the
    /// sticky error on failure, mirroring the C API's side channel.
    pub fn compile(&self, text: Text<'_>) -> Result<Rc<Pattern>, Error> {
        match compiler::compile(text, self) {
            Ok(pattern) => Ok(Rc::new(pattern)),
            Err(e) => {
                self.set_error(e.clone());
                Err(e)
            }
        }
    }

    /// `start`: begins a scan of `text` with `pattern`.
    pub fn start<'a>(&'a self, pattern: Rc<Pattern>, text: Text<'a>) -> Scanner<'a> {
        Scanner::new(pattern, Cursor::new(text), self)
    }

    /// `errnum`: the sticky error's kind, or `ErrorKind::None`.
    pub fn errnum(&self) -> ErrorKind {
        self.error.borrow().as_ref().map(Error::kind).unwrap_or(ErrorKind::None)
    }

    /// `errmsg`: the sticky error's message, if any.
    pub fn errmsg(&self) -> Option<String> {
        self.error.borrow().as_ref().map(|e| e.message().to_string())
    }

    /// `errclr`: clears the sticky error.
    pub fn errclr(&self) {
        *self.error.borrow_mut() = None;
    }

    /// Records `error` as the context's sticky error, unless one is
    /// already set — errors are sticky until `errclr`, so an operation
    /// that triggers several sub-steps reports the first failure.
    pub(crate) fn set_error(&self, error: Error) {
        let mut slot = self.error.borrow_mut();
        if slot.is_none() {
            *slot = Some(error);
        }
    }

    pub(crate) fn registry(&self) -> std::cell::Ref<'_, Registry> {
        self.registry.borrow()
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::init()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sticky_error_keeps_the_first_one() {
        let ctx = Context::init();
        ctx.set_error(Error::syntax("first"));
        ctx.set_error(Error::syntax("second"));
        assert_eq!(ctx.errmsg().as_deref(), Some("first"));
        ctx.errclr();
        assert_eq!(ctx.errnum(), ErrorKind::None);
    }
}

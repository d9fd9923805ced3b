//! The named-pattern table, seeded with the eight prelude built-ins.
//! `splat` (`*`) and `quark` (`?`) are resolved the same way but are not
//! pre-registered — the engine doesn't bake in a glob dialect, callers
//! define them.

use std::collections::HashMap;
use std::rc::Rc;

use crate::builtin;
use crate::pattern::Pattern;

#[derive(Debug)]
pub struct Registry {
    table: HashMap<String, Rc<Pattern>>,
}

impl Registry {
    pub fn with_prelude() -> Self {
        let mut registry = Self {
            table: HashMap::new(),
        };
        registry.seed_prelude();
        registry
    }

    fn seed_prelude(&mut self) {
        let builtins: &[(&'static str, fn(crate::cursor::CodePoint) -> bool)] = &[
            ("char", builtin::any),
            ("digit", builtin::digit),
            ("alpha", builtin::alpha),
            ("alnum", builtin::alnum),
            ("blank", builtin::blank),
            ("space", builtin::space),
            ("upper", builtin::upper),
            ("lower", builtin::lower),
        ];
        for &(name, pred) in builtins {
            self.define(
                name,
                Pattern::Builtin {
                    name,
                    pred,
                    bind: None,
                },
            );
        }
    }

    pub fn define(&mut self, name: impl Into<String>, pattern: Pattern) {
        self.table.insert(name.into(), Rc::new(pattern));
    }

    pub fn lookup(&self, name: &str) -> Option<Rc<Pattern>> {
        self.table.get(name).cloned()
    }
}

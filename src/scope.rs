//! The staged/commit/cancel capture scope. `OneOf` relies on this to
//! abandon bindings made by a failed alternative.

use std::collections::HashMap;
use std::rc::Rc;

use crate::pattern::Match;

/// A mapping from binding name to match, scoped to one enclosing primitive.
///
/// `put` stages an entry; `commit` folds staged entries into the live
/// table (later entries shadow earlier ones, staged or already committed);
/// `cancel` discards the staging area untouched. `get` only ever sees the
/// committed table.
#[derive(Debug, Default)]
pub struct Scope {
    committed: HashMap<String, Rc<Match>>,

    staged: Vec<(String, Rc<Match>)>,
}

impl Scope {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn put(&mut self, name: impl Into<String>, m: Rc<Match>) {
        self.staged.push((name.into(), m));
    }

    pub fn commit(&mut self) {
        for (name, m) in self.staged.drain(..) {
            self.committed.insert(name, m);
        }
    }

    pub fn cancel(&mut self) {
        self.staged.clear();
    }

    pub fn get(&self, name: &str) -> Option<Rc<Match>> {
        self.committed.get(name).cloned()
    }

    pub fn is_empty(&self) -> bool {
        self.committed.is_empty() && self.staged.is_empty()
    }

    /// Stages every entry already committed in `other` into `self`, so a
    /// transparent wrapper (`OneOf`, `JustOne`) can pass a child's captures
    /// up to its own enclosing scope. Staged, not committed directly, so an
    /// enclosing `:name` binding applied afterward on the same key still
    /// wins once `self` commits.
    pub fn absorb(&mut self, other: &Scope) {
        for (name, m) in &other.committed {
            self.staged.push((name.clone(), Rc::clone(m)));
        }
    }
}

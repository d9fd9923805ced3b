#![doc = include_str!("../README.md")]

pub mod builtin;
pub mod compiler;
pub mod context;
pub mod cursor;
pub mod err;
pub mod matcher;
pub mod pattern;
pub mod registry;
pub mod scanner;
pub mod scope;

pub(crate) mod log;
pub(crate) use log::*;

pub use context::Context;
pub use err::{Error, ErrorKind};
pub use pattern::{Match, Pattern};
pub use scanner::Scanner;

/// Re-exports of the crate's everyday surface for a single glob import.
pub mod prelude {
    pub use crate::context::Context;
    pub use crate::cursor::{CodePoint, Format, Text};
    pub use crate::err::{Error, ErrorKind};
    pub use crate::pattern::{Match, Pattern};
    pub use crate::scanner::Scanner;
}

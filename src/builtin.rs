//! The prelude's character-class predicates, written as free functions
//! over a single code point (`is_ascii_digit`, `is_ascii_alphabetic`,
//! ...), rather than as `char`/`u8`-generic trait impls, since
//! `Pattern::Builtin` only ever needs `fn(CodePoint) -> bool`.

use crate::cursor::CodePoint;

fn ascii_byte(cp: CodePoint) -> Option<u8> {
    if (0..=0x7F).contains(&cp) {
        Some(cp as u8)
    } else {
        None
    }
}

pub fn any(cp: CodePoint) -> bool {
    cp >= 0
}

pub fn digit(cp: CodePoint) -> bool {
    ascii_byte(cp).is_some_and(|b| b.is_ascii_digit())
}

pub fn alpha(cp: CodePoint) -> bool {
    ascii_byte(cp).is_some_and(|b| b.is_ascii_alphabetic())
}

pub fn alnum(cp: CodePoint) -> bool {
    ascii_byte(cp).is_some_and(|b| b.is_ascii_alphanumeric())
}

pub fn blank(cp: CodePoint) -> bool {
    ascii_byte(cp).is_some_and(|b| b == b' ' || b == b'\t')
}

pub fn space(cp: CodePoint) -> bool {
    ascii_byte(cp).is_some_and(|b| b.is_ascii_whitespace() || b == 0x0B)
}

pub fn upper(cp: CodePoint) -> bool {
    ascii_byte(cp).is_some_and(|b| b.is_ascii_uppercase())
}

pub fn lower(cp: CodePoint) -> bool {
    ascii_byte(cp).is_some_and(|b| b.is_ascii_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn space_includes_vertical_tab() {
        assert!(space(0x0B));
        assert!(space(b' ' as CodePoint));
        assert!(!space(b'x' as CodePoint));
    }

    #[test]
    fn blank_excludes_newline() {
        assert!(blank(b'\t' as CodePoint));
        assert!(!blank(b'\n' as CodePoint));
    }

    #[test]
    fn classes_reject_non_ascii_and_sentinels() {
        assert!(!digit(-1));
        assert!(!alpha(0x4E2D));
        assert!(any(0));
        assert!(!any(-1));
    }
}

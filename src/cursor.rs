//! The text cursor: a byte-offset position over either a raw byte
//! sequence or a UTF-8 decoded code point sequence.

use crate::err::Error;
use crate::trace_read;

/// A signed code point: non-negative values are valid, negative values are
/// sentinels (`END`, `ERR`).
pub type CodePoint = i32;

/// Returned by [`Cursor::read`] once the cursor has consumed all input.
pub const END: CodePoint = -1;

/// Returned by [`Cursor::read`] when the input could not be decoded.
pub const ERR: CodePoint = -2;

/// Selects how a [`Cursor`] turns input bytes into code points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// Each input byte is one code point in `0..=255`.
    Bytes,

    /// Input is UTF-8; one to four bytes decode to one Unicode scalar value.
    Chars,
}

/// A borrowed slice of input tagged with the [`Format`] it should be read
/// under. Used both for pattern source text and for scanned input text.
#[derive(Debug, Clone, Copy)]
pub struct Text<'a> {
    pub bytes: &'a [u8],

    pub format: Format,
}

impl<'a> Text<'a> {
    pub fn bytes(data: &'a [u8]) -> Self {
        Self {
            bytes: data,
            format: Format::Bytes,
        }
    }

    pub fn chars(data: &'a str) -> Self {
        Self {
            bytes: data.as_bytes(),
            format: Format::Chars,
        }
    }
}

/// A cursor over `input`, tracking `start`, `position` and `end` as byte
/// offsets. Copying a cursor is the sole backtracking mechanism.
#[derive(Debug, Clone, Copy)]
pub struct Cursor<'a> {
    input: &'a [u8],

    start: usize,

    position: usize,

    end: usize,

    format: Format,
}

impl<'a> Cursor<'a> {
    pub fn new(text: Text<'a>) -> Self {
        Self {
            input: text.bytes,
            start: 0,
            position: 0,
            end: text.bytes.len(),
            format: text.format,
        }
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn end(&self) -> usize {
        self.end
    }

    pub fn is_done(&self) -> bool {
        self.position >= self.end
    }

    pub fn set_position(&mut self, position: usize) {
        self.position = position.min(self.end);
    }

    /// Advances past one code point, returning it, [`END`] at end of input,
    /// or [`ERR`] (and setting `ctx`'s sticky error) on malformed UTF-8.
    pub fn read(&mut self, ctx: &crate::context::Context) -> CodePoint {
        let beg = self.position;
        let cp = match self.format {
            Format::Bytes => self.read_byte(),
            Format::Chars => self.read_char(ctx),
        };
        trace_read!(beg, cp)
    }

    fn read_byte(&mut self) -> CodePoint {
        if self.position >= self.end {
            return END;
        }
        let b = self.input[self.position];
        self.position += 1;
        b as CodePoint
    }

    fn read_char(&mut self, ctx: &crate::context::Context) -> CodePoint {
        if self.position >= self.end {
            return END;
        }
        let bytes = &self.input[self.position..self.end];
        let b0 = bytes[0];
        let (len, mut cp) = if b0 & 0x80 == 0 {
            (1usize, b0 as u32)
        } else if b0 & 0xE0 == 0xC0 {
            (2, (b0 & 0x1F) as u32)
        } else if b0 & 0xF0 == 0xE0 {
            (3, (b0 & 0x0F) as u32)
        } else if b0 & 0xF8 == 0xF0 {
            (4, (b0 & 0x07) as u32)
        } else {
            ctx.set_error(Error::format("invalid UTF-8 leading byte"));
            return ERR;
        };
        if bytes.len() < len {
            ctx.set_error(Error::format("truncated UTF-8 sequence"));
            return ERR;
        }
        for &b in &bytes[1..len] {
            if b & 0xC0 != 0x80 {
                ctx.set_error(Error::format("invalid UTF-8 continuation byte"));
                return ERR;
            }
            cp = (cp << 6) | (b & 0x3F) as u32;
        }
        self.position += len;
        cp as CodePoint
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::Context;

    #[test]
    fn bytes_read_advances_and_ends() {
        let ctx = Context::init();
        let mut cur = Cursor::new(Text::bytes(b"ab"));
        assert_eq!(cur.read(&ctx), b'a' as CodePoint);
        assert_eq!(cur.read(&ctx), b'b' as CodePoint);
        assert_eq!(cur.read(&ctx), END);
        assert_eq!(cur.read(&ctx), END);
    }

    #[test]
    fn chars_decode_multibyte() {
        let ctx = Context::init();
        let mut cur = Cursor::new(Text::chars("今"));
        assert_eq!(cur.read(&ctx), '今' as CodePoint);
        assert_eq!(cur.read(&ctx), END);
    }

    #[test]
    fn chars_report_format_error_on_bad_continuation() {
        let ctx = Context::init();
        let bad = [0xE4u8, 0x00, 0x00];
        let mut cur = Cursor::new(Text::bytes(&bad));
        cur = Cursor {
            format: Format::Chars,
            ..cur
        };
        assert_eq!(cur.read(&ctx), ERR);
        assert_eq!(ctx.errnum(), crate::err::ErrorKind::Format);
    }

    #[test]
    fn snapshot_restore_is_a_value_copy() {
        let ctx = Context::init();
        let mut cur = Cursor::new(Text::bytes(b"abc"));
        let saved = cur;
        cur.read(&ctx);
        cur.read(&ctx);
        cur = saved;
        assert_eq!(cur.position(), 0);
    }
}

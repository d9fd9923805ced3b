//! The pattern DSL compiler: a tokenizer with two-code-point lookahead
//! feeding a recursive-descent parser.

use crate::context::Context;
use crate::cursor::{Cursor, Text, CodePoint, END};
use crate::err::Error;
use crate::pattern::Pattern;

pub fn compile(text: Text<'_>, ctx: &Context) -> Result<Pattern, Error> {
    let mut c = Compiler::new(text, ctx)?;
    c.compile_full()
}

struct Compiler<'a> {
    cur: Cursor<'a>,

    ch1: CodePoint,

    ch2: CodePoint,

    ctx: &'a Context,
}

fn is_opening_bracket(cp: CodePoint) -> bool {
    matches!(cp, c if c == '(' as CodePoint || c == '{' as CodePoint || c == '[' as CodePoint || c == '<' as CodePoint)
}

fn is_closing_bracket(cp: CodePoint) -> bool {
    matches!(cp, c if c == ')' as CodePoint || c == '}' as CodePoint || c == ']' as CodePoint || c == '>' as CodePoint)
}

fn closer_for(opener: CodePoint) -> CodePoint {
    match opener as u8 as char {
        '(' => ')' as CodePoint,
        '{' => '}' as CodePoint,
        '[' => ']' as CodePoint,
        '<' => '>' as CodePoint,
        _ => unreachable!("only called with an opening bracket"),
    }
}

fn is_whitespace(cp: CodePoint) -> bool {
    matches!(cp, c if c == ' ' as CodePoint
        || c == '\t' as CodePoint
        || c == '\n' as CodePoint
        || c == '\r' as CodePoint
        || c == 0x0C
        || c == 0x0B)
}

fn is_ascii_digit(cp: CodePoint) -> bool {
    (b'0' as CodePoint..=b'9' as CodePoint).contains(&cp)
}

fn is_ident_start(cp: CodePoint) -> bool {
    (0..=0x7F).contains(&cp) && ((cp as u8 as char).is_ascii_alphabetic() || cp == b'_' as CodePoint)
}

fn is_ident_continue(cp: CodePoint) -> bool {
    is_ident_start(cp) || is_ascii_digit(cp)
}

/// A run of non-break code points terminates literal text; this is also
/// used to detect when `~`/`^` should be read as a lookahead operator.
fn is_break(cp: CodePoint) -> bool {
    cp == END || is_opening_bracket(cp) || cp == '*' as CodePoint || cp == '?' as CodePoint || cp == '\\' as CodePoint
}

fn starts_sub_pattern(cp: CodePoint) -> bool {
    is_opening_bracket(cp) || cp == '*' as CodePoint || cp == '?' as CodePoint
}

impl<'a> Compiler<'a> {
    fn new(text: Text<'a>, ctx: &'a Context) -> Result<Self, Error> {
        let mut c = Self {
            cur: Cursor::new(text),
            ch1: END,
            ch2: END,
            ctx,
        };
        c.advance()?;
        c.advance()?;
        Ok(c)
    }

    fn advance(&mut self) -> Result<(), Error> {
        self.ch1 = self.ch2;
        let cp = self.cur.read(self.ctx);
        if cp == crate::cursor::ERR {
            return Err(Error::format("malformed input"));
        }
        self.ch2 = cp;
        Ok(())
    }

    fn skip_ws(&mut self) -> Result<(), Error> {
        while is_whitespace(self.ch1) {
            self.advance()?;
        }
        Ok(())
    }

    fn is_lookahead_break(&self) -> bool {
        (self.ch1 == '~' as CodePoint || self.ch1 == '^' as CodePoint) && starts_sub_pattern(self.ch2)
    }

    /// `full := ( text | pattern )*`
    fn compile_full(&mut self) -> Result<Pattern, Error> {
        let mut items = Vec::new();
        loop {
            if self.ch1 == END {
                break;
            }
            if is_break(self.ch1) || self.is_lookahead_break() {
                items.push(self.parse_pattern_unit()?);
            } else {
                items.push(self.parse_literal_text()?);
            }
        }
        Ok(Pattern::AllOf { items, bind: None })
    }

    /// A maximal run of non-break code points, whitespace preserved.
    fn parse_literal_text(&mut self) -> Result<Pattern, Error> {
        let mut seq = Vec::new();
        while !is_break(self.ch1) && !self.is_lookahead_break() {
            seq.push(self.ch1);
            self.advance()?;
        }
        Ok(Pattern::Literal { seq, bind: None })
    }

    /// `pattern := primitive | '~' primitive | '^' primitive | named`
    fn parse_pattern_unit(&mut self) -> Result<Pattern, Error> {
        if self.ch1 == '~' as CodePoint && starts_sub_pattern(self.ch2) {
            self.advance()?;
            self.skip_ws()?;
            let inner = self.parse_primitive()?;
            return Ok(Pattern::NotNext {
                inner: Box::new(inner),
                bind: None,
            });
        }
        if self.ch1 == '^' as CodePoint && starts_sub_pattern(self.ch2) {
            self.advance()?;
            self.skip_ws()?;
            let inner = self.parse_primitive()?;
            return Ok(Pattern::HasNext {
                inner: Box::new(inner),
                bind: None,
            });
        }
        if self.ch1 == '*' as CodePoint {
            self.advance()?;
            return Ok(Pattern::Named {
                name: "splat".to_string(),
                bind: None,
            });
        }
        if self.ch1 == '?' as CodePoint {
            self.advance()?;
            return Ok(Pattern::Named {
                name: "quark".to_string(),
                bind: None,
            });
        }
        if is_ident_start(self.ch1) {
            let name = self.parse_ident()?;
            return Ok(Pattern::Named { name, bind: None });
        }
        self.parse_primitive()
    }

    /// `primitive := ( string | charEsc | codeDec | compound ) [':' name]`
    fn parse_primitive(&mut self) -> Result<Pattern, Error> {
        let prim = if self.ch1 == '"' as CodePoint || self.ch1 == '`' as CodePoint || self.ch1 == '\'' as CodePoint {
            self.parse_quoted_string()?
        } else if self.ch1 == '\\' as CodePoint {
            self.parse_char_escape()?
        } else if is_ascii_digit(self.ch1) {
            self.parse_code_decimal()?
        } else if is_opening_bracket(self.ch1) {
            self.parse_compound()?
        } else if is_closing_bracket(self.ch1) {
            return Err(Error::syntax("Mismatched brackets"));
        } else if self.ch1 == END {
            return Err(Error::syntax("Unterminated pattern"));
        } else {
            return Err(Error::syntax("Expected sub-pattern"));
        };

        self.skip_ws()?;
        if self.ch1 == ':' as CodePoint {
            self.advance()?;
            self.skip_ws()?;
            let name = self.parse_ident()?;
            return Ok(prim.with_binding(name));
        }
        Ok(prim)
    }

    /// `string := '"' … '"' | '`' … '`' | "'" … "'"` — no escape processing.
    fn parse_quoted_string(&mut self) -> Result<Pattern, Error> {
        let quote = self.ch1;
        self.advance()?;
        let mut seq = Vec::new();
        loop {
            if self.ch1 == END {
                return Err(Error::syntax("Unterminated string"));
            }
            if self.ch1 == quote {
                self.advance()?;
                break;
            }
            seq.push(self.ch1);
            self.advance()?;
        }
        Ok(Pattern::Literal { seq, bind: None })
    }

    /// `charEsc := '\' <one code point>`
    fn parse_char_escape(&mut self) -> Result<Pattern, Error> {
        self.advance()?;
        if self.ch1 == END {
            return Err(Error::syntax("Unterminated pattern"));
        }
        let cp = self.ch1;
        self.advance()?;
        Ok(Pattern::Literal { seq: vec![cp], bind: None })
    }

    /// `codeDec := <digits>+` — one decimal code point.
    fn parse_code_decimal(&mut self) -> Result<Pattern, Error> {
        let mut value: i64 = 0;
        while is_ascii_digit(self.ch1) {
            value = value * 10 + (self.ch1 - '0' as CodePoint) as i64;
            self.advance()?;
        }
        if is_ident_continue(self.ch1) {
            return Err(Error::syntax("Non-digit at end of character code"));
        }
        Ok(Pattern::Literal {
            seq: vec![value as CodePoint],
            bind: None,
        })
    }

    /// `compound := '(' branches ')' | '[' branches ']' | '{' branches '}' | '<' branches '>'`
    fn parse_compound(&mut self) -> Result<Pattern, Error> {
        let opener = self.ch1;
        let closer = closer_for(opener);
        self.advance()?;

        let mut branches = Vec::new();
        loop {
            self.skip_ws()?;
            let mut pieces = Vec::new();
            while self.ch1 != ('|' as CodePoint) && self.ch1 != closer {
                pieces.push(self.parse_pattern_unit()?);
                self.skip_ws()?;
            }
            if pieces.is_empty() {
                return Err(Error::syntax("Expected sub-pattern"));
            }
            branches.push(Pattern::AllOf { items: pieces, bind: None });
            if self.ch1 == '|' as CodePoint {
                self.advance()?;
                continue;
            }
            break;
        }
        debug_assert_eq!(self.ch1, closer);
        self.advance()?;

        let choice = Pattern::OneOf { items: branches, bind: None };
        let wrapped = match opener as u8 as char {
            '(' => Pattern::JustOne {
                inner: Box::new(choice),
                bind: None,
            },
            '[' => Pattern::ZeroOrOne {
                inner: Box::new(choice),
                bind: None,
            },
            '{' => Pattern::ZeroOrMore {
                inner: Box::new(choice),
                bind: None,
            },
            '<' => Pattern::OneOrMore {
                inner: Box::new(choice),
                bind: None,
            },
            _ => unreachable!(),
        };
        Ok(wrapped)
    }

    /// `ident := [A-Za-z_][A-Za-z0-9_]*`
    fn parse_ident(&mut self) -> Result<String, Error> {
        if !is_ident_start(self.ch1) {
            return Err(Error::syntax("Expected sub-pattern"));
        }
        let mut s = String::new();
        while is_ident_continue(self.ch1) {
            s.push(self.ch1 as u8 as char);
            self.advance()?;
        }
        Ok(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::Text;

    fn compile_str(src: &str) -> Result<Pattern, Error> {
        let ctx = Context::init();
        compile(Text::chars(src), &ctx)
    }

    #[test]
    fn unterminated_bracket_is_a_syntax_error() {
        let err = compile_str("( 'a'").unwrap_err();
        assert_eq!(err.kind(), crate::err::ErrorKind::Syntax);
    }

    #[test]
    fn mismatched_bracket_is_reported() {
        let err = compile_str("( 'a' ]").unwrap_err();
        assert_eq!(err.message(), "Mismatched brackets");
    }

    #[test]
    fn unterminated_string_is_reported() {
        let err = compile_str("'abc").unwrap_err();
        assert_eq!(err.message(), "Unterminated string");
    }

    #[test]
    fn empty_branch_is_rejected() {
        let err = compile_str("(|'a')").unwrap_err();
        assert_eq!(err.message(), "Expected sub-pattern");
    }

    #[test]
    fn digit_run_followed_by_letter_is_a_syntax_error() {
        let err = compile_str("(104a)").unwrap_err();
        assert_eq!(err.message(), "Non-digit at end of character code");
    }

    #[test]
    fn empty_source_compiles_to_an_empty_all_of() {
        let pat = compile_str("").unwrap();
        assert!(matches!(pat, Pattern::AllOf { ref items, .. } if items.is_empty()));
    }
}

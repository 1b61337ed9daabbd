//! String literals: `"..."`, with backslash escapes and a closing
//! unescaped `"`. Raw newline/CR/tab and bare `'` are rejected inside a
//! string literal with messages matched to a small AOT-compiler
//! front-end's exact wording.

use sanic_util::CompileResult;

use super::escape_character;
use crate::stream::{CharPattern, CharStream};
use crate::token::TokenKind;

pub(crate) fn lex(stream: &mut CharStream) -> CompileResult<()> {
    stream.ignore(1, false); // opening quote

    stream.repeat_until(
        CharPattern::Class(|c| c == '"'),
        |s| {
            let c = s.front()?;
            if c == '\\' {
                s.ignore(1, false);
                let escaped = s.front()?;
                let decoded = escape_character(s, escaped)?;
                s.ignore(1, false);
                s.consume_char(decoded);
            } else if c == '\'' {
                return Err(s.syntax_error("Cannot use ' in a string literal, use \\' instead."));
            } else if c == '\n' || c == '\r' || c == '\t' {
                return Err(s.syntax_error("Illegal character in string."));
            } else {
                s.consume(1);
            }
            Ok(())
        },
        Some("Unexpected EOF"),
    )?;

    stream.ignore(1, false); // closing quote
    stream.return_token(TokenKind::Str);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sanic_util::FileId;

    #[test]
    fn lexes_plain_string() {
        let mut s = CharStream::new("\"hello\" rest", FileId::DUMMY);
        lex(&mut s).unwrap();
        let tok = s.extract_result().unwrap().unwrap();
        assert_eq!(tok.text, "hello");
        assert_eq!(tok.kind, TokenKind::Str);
    }

    #[test]
    fn decodes_escape_sequences() {
        let mut s = CharStream::new("\"a\\nb\"", FileId::DUMMY);
        lex(&mut s).unwrap();
        let tok = s.extract_result().unwrap().unwrap();
        assert_eq!(tok.text, "a\nb");
    }

    #[test]
    fn bare_single_quote_is_rejected() {
        let mut s = CharStream::new("\"a'b\"", FileId::DUMMY);
        let err = lex(&mut s).unwrap_err();
        assert!(err.to_string().contains("use \\' instead"));
    }

    #[test]
    fn raw_newline_is_rejected() {
        let mut s = CharStream::new("\"a\nb\"", FileId::DUMMY);
        let err = lex(&mut s).unwrap_err();
        assert!(err.to_string().contains("Illegal character in string."));
    }

    #[test]
    fn unterminated_string_is_eof_error() {
        let mut s = CharStream::new("\"abc", FileId::DUMMY);
        let err = lex(&mut s).unwrap_err();
        assert!(err.to_string().contains("Unexpected EOF"));
    }

    #[test]
    fn unknown_escape_names_offending_char() {
        let mut s = CharStream::new("\"a\\qb\"", FileId::DUMMY);
        let err = lex(&mut s).unwrap_err();
        assert!(err.to_string().contains("\\q"));
    }
}

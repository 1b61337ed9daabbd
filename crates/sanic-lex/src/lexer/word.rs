//! Identifiers and reserved words: `[A-Za-z_][A-Za-z0-9_]*`. Keyword
//! recognition (`let`, `extern`, `int`, `string`) happens in the parser,
//! by comparing a plain word token's text — the lexer does not
//! distinguish them.

use sanic_util::CompileResult;

use crate::stream::{CharPattern, CharStream};
use crate::token::TokenKind;

pub(crate) fn lex(stream: &mut CharStream) -> CompileResult<()> {
    stream.consume(1); // [A-Za-z_]
    stream.consume_while(
        CharPattern::Class(|c| c.is_ascii_alphanumeric() || c == '_'),
        None,
    )?;
    stream.return_token(TokenKind::Word);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sanic_util::FileId;

    #[test]
    fn lexes_identifier_with_digits_and_underscore() {
        let mut s = CharStream::new("foo_bar2 rest", FileId::DUMMY);
        lex(&mut s).unwrap();
        let tok = s.extract_result().unwrap().unwrap();
        assert_eq!(tok.text, "foo_bar2");
        assert_eq!(tok.kind, TokenKind::Word);
    }

    #[test]
    fn stops_before_non_identifier_char() {
        let mut s = CharStream::new("abc;", FileId::DUMMY);
        lex(&mut s).unwrap();
        let tok = s.extract_result().unwrap().unwrap();
        assert_eq!(tok.text, "abc");
        assert_eq!(s.front().unwrap(), ';');
    }
}

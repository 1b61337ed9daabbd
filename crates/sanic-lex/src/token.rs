//! The token model (C1): an immutable lexeme plus enough provenance for
//! diagnostics.

use std::rc::Rc;

use sanic_util::Span;

/// What kind of lexeme a [`Token`] is. The parser uses this, not the raw
/// text, to tell literals apart from identifiers/keywords (keywords are
/// just [`TokenKind::Word`]s whose text happens to be `"let"`, `"extern"`,
/// `"int"`, or `"string"` — recognized by the parser, not the lexer).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenKind {
    /// An identifier or a reserved word; which one depends on the text.
    Word,
    /// A run of ASCII digits.
    Integer,
    /// A single decoded character between single quotes.
    Char,
    /// Decoded bytes between double quotes.
    Str,
    /// Punctuation: a single character, or the `->` digraph.
    Punct,
}

/// A single lexeme: its source text, its kind, and the span it came from.
///
/// Tokens are immutable once produced. They are wrapped in [`Rc`] because a
/// leaf token is referenced both by the AST node built from it and, on the
/// error path, by a diagnostic — the only place in this pipeline where two
/// owners of the same node legitimately exist.
#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    pub text: String,
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    pub fn new(text: impl Into<String>, kind: TokenKind, span: Span) -> Rc<Token> {
        Rc::new(Token { text: text.into(), kind, span })
    }

    pub fn is_word(&self, text: &str) -> bool {
        self.kind == TokenKind::Word && self.text == text
    }

    pub fn is_punct(&self, text: &str) -> bool {
        self.kind == TokenKind::Punct && self.text == text
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sanic_util::FileId;

    #[test]
    fn is_word_checks_kind_and_text() {
        let tok = Token::new("let", TokenKind::Word, Span::new(1, 1, 4, FileId::DUMMY));
        assert!(tok.is_word("let"));
        assert!(!tok.is_word("extern"));
    }

    #[test]
    fn is_punct_rejects_word_tokens() {
        let tok = Token::new("+", TokenKind::Word, Span::new(1, 1, 2, FileId::DUMMY));
        assert!(!tok.is_punct("+"));
    }
}

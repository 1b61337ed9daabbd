//! The lexer (C3): a fixed matcher cascade run once per token, each
//! matcher split into its own module by concern, mirroring how a small
//! AOT-compiler front-end organizes this stage:
//! - `whitespace` — ASCII whitespace and `//`/`/* */` comments
//! - `word` — identifiers and reserved words
//! - `number` — integer literals
//! - `string` — string literals and escape decoding
//! - `char_lit` — character literals
//! - `punct` — the `->` digraph and single-character punctuation

mod char_lit;
mod number;
mod punct;
mod string;
mod whitespace;
mod word;

use std::rc::Rc;

use sanic_util::{CompileResult, FileId};

use crate::stream::CharStream;
use crate::token::Token;

/// Tokenizes one source file.
pub struct Lexer {
    stream: CharStream,
}

impl Lexer {
    pub fn new(source: &str, file_id: FileId) -> Self {
        Self { stream: CharStream::new(source, file_id) }
    }

    /// Lex the whole input into an ordered token sequence.
    pub fn tokenize(mut self) -> CompileResult<Vec<Rc<Token>>> {
        let mut tokens = Vec::new();
        while let Some(token) = self.next_token()? {
            tokens.push(token);
        }
        Ok(tokens)
    }

    fn next_token(&mut self) -> CompileResult<Option<Rc<Token>>> {
        whitespace::skip(&mut self.stream)?;

        if self.stream.front().is_err() {
            return self.stream.extract_result();
        }

        let c = self.stream.front()?;
        if c.is_ascii_alphabetic() || c == '_' {
            word::lex(&mut self.stream)?;
        } else if c.is_ascii_digit() {
            number::lex(&mut self.stream)?;
        } else if c == '"' {
            string::lex(&mut self.stream)?;
        } else if c == '\'' {
            char_lit::lex(&mut self.stream)?;
        } else {
            punct::lex(&mut self.stream)?;
        }

        self.stream.extract_result()
    }
}

/// Maps an escaped character (the one immediately following a backslash)
/// to its decoded value. Grounded on the exact escape table of a small
/// AOT-compiler front-end's lexer: `n`, `r`, `t`, `'`, `"`, `\`.
pub(crate) fn escape_character(stream: &CharStream, c: char) -> CompileResult<char> {
    match c {
        'n' => Ok('\n'),
        'r' => Ok('\r'),
        't' => Ok('\t'),
        '\'' => Ok('\''),
        '"' => Ok('"'),
        '\\' => Ok('\\'),
        other => Err(stream.syntax_error(format!("Unexpected escape character: \\{other}"))),
    }
}

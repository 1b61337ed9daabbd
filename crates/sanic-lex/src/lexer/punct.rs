//! The `->` digraph and single-character punctuation. Tried in that order
//! so `->` is never split into `-` followed by `>`.

use sanic_util::CompileResult;

use crate::stream::{CharPattern, CharStream};
use crate::token::TokenKind;

pub(crate) fn lex(stream: &mut CharStream) -> CompileResult<()> {
    if stream.peek_is(&CharPattern::Literal("->")) {
        stream.consume(2);
    } else {
        stream.consume(1);
    }
    stream.return_token(TokenKind::Punct);
    Ok(())
}

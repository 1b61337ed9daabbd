//! Integer literals: a maximal run of ASCII digits.

use sanic_util::CompileResult;

use crate::stream::{CharPattern, CharStream};
use crate::token::TokenKind;

pub(crate) fn lex(stream: &mut CharStream) -> CompileResult<()> {
    stream.consume_while(CharPattern::Class(|c| c.is_ascii_digit()), None)?;
    stream.return_token(TokenKind::Integer);
    Ok(())
}

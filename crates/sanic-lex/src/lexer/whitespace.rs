//! Skips runs of ASCII whitespace, `//` line comments, and `/* */` block
//! comments between tokens. None of this produces a token.

use sanic_util::CompileResult;

use crate::stream::{CharPattern, CharStream};

pub(crate) fn skip(stream: &mut CharStream) -> CompileResult<()> {
    loop {
        let before = skip_once(stream)?;
        if !before {
            break;
        }
    }
    Ok(())
}

/// Runs one whitespace/comment skip; returns whether anything was skipped
/// so the caller can loop until a fixed point (e.g. `// x\n  /* y */` is
/// two runs back to back).
fn skip_once(stream: &mut CharStream) -> CompileResult<bool> {
    if stream.front().is_err() {
        return Ok(false);
    }

    if stream.peek_is(&CharPattern::Class(|c| c.is_ascii_whitespace())) {
        stream.ignore_while(CharPattern::Class(|c| c.is_ascii_whitespace()), true, None)?;
        return Ok(true);
    }

    if stream.peek_is(&CharPattern::Literal("//")) {
        stream.ignore(2, true);
        stream.ignore_while(CharPattern::Class(|c| c != '\n'), true, None)?;
        return Ok(true);
    }

    if stream.peek_is(&CharPattern::Literal("/*")) {
        stream.ignore(2, true);
        stream.repeat_until(
            CharPattern::Literal("*/"),
            |s| {
                s.ignore(1, true);
                Ok(())
            },
            Some("Unexpected EOF in block comment."),
        )?;
        if stream.front().is_ok() {
            stream.ignore(2, true);
        }
        return Ok(true);
    }

    Ok(false)
}

//! Lexical analysis: turns source text into an ordered token sequence.
//!
//! Two layers: [`stream::CharStream`] is the low-level cursor with an
//! accumulate-then-latch token-building API, and [`lexer::Lexer`] drives
//! it through the fixed matcher cascade for this language's token grammar.

pub mod lexer;
pub mod stream;
pub mod token;

pub use lexer::Lexer;
pub use stream::{CharPattern, CharStream};
pub use token::{Token, TokenKind};

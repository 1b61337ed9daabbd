//! The error taxonomy shared by every compiler stage.
//!
//! Every stage returns `Result<_, CompileError>` and propagates with `?`.
//! There is no error recovery and no multi-error reporting: the first
//! failure aborts the compilation. The driver renders a `CompileError` to
//! stderr as `<kind>: <message>` and exits nonzero (see `sanic-drv`).

use thiserror::Error;

use crate::span::Span;

/// A single compiler failure, tagged with the stable kind name used in
/// diagnostics.
#[derive(Debug, Error)]
pub enum CompileError {
    /// The input path could not be opened.
    #[error("FileNotFound: {path}")]
    FileNotFound { path: String },

    /// The lexer rejected the input.
    #[error("Syntax: {message} (line {}, col {} -> {})", span.line, span.start_col, span.end_col)]
    Syntax { message: String, span: Span },

    /// The parser rejected the token stream.
    #[error("Parse: {message}")]
    Parse { message: String },

    /// The emitter found a type or arity mismatch.
    #[error("Type: {message}")]
    Type { message: String },

    /// A name could not be resolved.
    #[error("Undeclared: {name}")]
    Undeclared { name: String },

    /// A name was declared twice.
    #[error("Redeclared: {name}")]
    Redeclared { name: String },

    /// An internal invariant was violated. Always a compiler bug, never a
    /// consequence of user input.
    #[error("IllegalState: {message}")]
    IllegalState { message: String },

    /// An `unreachable!`-style guard tripped. Always a compiler bug.
    #[error("Assertion: {message}")]
    Assertion { message: String },
}

impl CompileError {
    pub fn syntax(message: impl Into<String>, span: Span) -> Self {
        CompileError::Syntax { message: message.into(), span }
    }

    pub fn parse(message: impl Into<String>) -> Self {
        CompileError::Parse { message: message.into() }
    }

    pub fn ty(message: impl Into<String>) -> Self {
        CompileError::Type { message: message.into() }
    }

    pub fn undeclared(name: impl Into<String>) -> Self {
        CompileError::Undeclared { name: name.into() }
    }

    pub fn redeclared(name: impl Into<String>) -> Self {
        CompileError::Redeclared { name: name.into() }
    }

    pub fn illegal_state(message: impl Into<String>) -> Self {
        CompileError::IllegalState { message: message.into() }
    }

    pub fn assertion(message: impl Into<String>) -> Self {
        CompileError::Assertion { message: message.into() }
    }

    /// The stable kind name used as the diagnostic prefix, independent of
    /// the rendered message.
    pub fn kind(&self) -> &'static str {
        match self {
            CompileError::FileNotFound { .. } => "FileNotFound",
            CompileError::Syntax { .. } => "Syntax",
            CompileError::Parse { .. } => "Parse",
            CompileError::Type { .. } => "Type",
            CompileError::Undeclared { .. } => "Undeclared",
            CompileError::Redeclared { .. } => "Redeclared",
            CompileError::IllegalState { .. } => "IllegalState",
            CompileError::Assertion { .. } => "Assertion",
        }
    }
}

/// Result type alias used throughout the pipeline.
pub type CompileResult<T> = std::result::Result<T, CompileError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::span::FileId;

    #[test]
    fn kind_names_match_taxonomy() {
        let span = Span::new(1, 1, 1, FileId::DUMMY);
        assert_eq!(CompileError::syntax("x", span).kind(), "Syntax");
        assert_eq!(CompileError::parse("x").kind(), "Parse");
        assert_eq!(CompileError::ty("x").kind(), "Type");
        assert_eq!(CompileError::undeclared("foo").kind(), "Undeclared");
        assert_eq!(CompileError::redeclared("foo").kind(), "Redeclared");
    }

    #[test]
    fn display_includes_kind_prefix() {
        let err = CompileError::undeclared("foo");
        assert_eq!(err.to_string(), "Undeclared: foo");
    }
}

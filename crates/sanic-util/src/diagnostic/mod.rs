//! Diagnostic rendering.
//!
//! The compiler reports exactly one diagnostic per failed compilation: the
//! first [`CompileError`](crate::CompileError) raised by any stage. There is
//! no severity levels, no diagnostic codes registry, and no multi-error
//! batching — SPEC_FULL's error model is "first failure aborts".

use std::io::Write;

use crate::CompileError;

/// Render a [`CompileError`] the way `sanic-drv` writes it to stderr:
/// `<Kind>: <message>`.
///
/// # Examples
///
/// ```
/// use sanic_util::diagnostic::render;
/// use sanic_util::CompileError;
///
/// let rendered = render(&CompileError::undeclared("foo"));
/// assert_eq!(rendered, "Undeclared: foo");
/// ```
pub fn render(error: &CompileError) -> String {
    error.to_string()
}

/// Write a rendered diagnostic to the given writer, followed by a newline.
pub fn emit(error: &CompileError, mut out: impl Write) -> std::io::Result<()> {
    writeln!(out, "{}", render(error))
}

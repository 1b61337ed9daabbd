//! Foundation types shared by every stage of the compiler: source locations,
//! string interning, and the error taxonomy used for all diagnostics.
//!
//! Nothing in this crate is stage-specific. `sanic-lex`, `sanic-par`,
//! `sanic-gen`, and `sanic-drv` all depend on it and nothing else in the
//! workspace depends on them.

pub mod diagnostic;
pub mod error;
pub mod span;
pub mod symbol;

pub use error::CompileError;
pub use span::{FileId, Span};
pub use symbol::{Interner, Symbol};

//! C6: AST-to-LLVM-IR emitter.
//!
//! A single [`Emitter`] owns the LLVM `Context` (by reference), the
//! `Module`, the `Builder`, and the name-to-value environment for the
//! synthesized `main`. There is no separate MIR or LIR: every AST node
//! lowers straight to instructions.

pub mod emitter;
pub mod types;

pub use emitter::Emitter;

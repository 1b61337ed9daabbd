//! Interned identifiers.
//!
//! A [`Symbol`] is a compact handle into an [`Interner`], used in place of
//! `String` wherever a name is compared repeatedly (let-bindings, extern
//! names, call callees). Unlike a typical compiler's global interner, this
//! one is owned by a single compilation — see [`Interner`] for why.

mod interner;

pub use interner::Interner;

/// A handle to an interned string. Cheap to copy and compare; meaningless
/// outside the [`Interner`] that produced it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Symbol(u32);

impl Symbol {
    #[inline]
    pub const fn index(&self) -> u32 {
        self.0
    }
}

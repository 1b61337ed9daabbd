//! A non-concurrent string interner.
//!
//! A single compilation runs on one thread from start to finish, so there
//! is no lock-free table here, just a `HashMap` the [`Interner`]'s owner
//! mutates directly. `rustc_hash::FxHashMap` is used for its speed on the
//! short ASCII identifiers this language's keywords and names actually are.

use rustc_hash::FxHashMap;

use super::Symbol;

/// Owns the canonical copy of every interned string for one compilation.
#[derive(Default)]
pub struct Interner {
    map: FxHashMap<Box<str>, Symbol>,
    strings: Vec<Box<str>>,
}

impl Interner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Intern `text`, returning its existing [`Symbol`] if already known or
    /// allocating a fresh one otherwise.
    ///
    /// # Examples
    ///
    /// ```
    /// use sanic_util::symbol::Interner;
    ///
    /// let mut interner = Interner::new();
    /// let a = interner.intern("putchar");
    /// let b = interner.intern("putchar");
    /// assert_eq!(a, b);
    /// ```
    pub fn intern(&mut self, text: &str) -> Symbol {
        if let Some(&sym) = self.map.get(text) {
            return sym;
        }
        let sym = Symbol(self.strings.len() as u32);
        self.strings.push(text.into());
        self.map.insert(text.into(), sym);
        sym
    }

    /// Resolve a symbol back to its text. Panics on a symbol from a
    /// different interner — every symbol used by a compilation must come
    /// from that compilation's own interner.
    pub fn resolve(&self, symbol: Symbol) -> &str {
        &self.strings[symbol.0 as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck_macros::quickcheck;

    #[test]
    fn distinct_strings_get_distinct_symbols() {
        let mut interner = Interner::new();
        let a = interner.intern("foo");
        let b = interner.intern("bar");
        assert_ne!(a, b);
    }

    #[test]
    fn resolve_round_trips() {
        let mut interner = Interner::new();
        let sym = interner.intern("hello");
        assert_eq!(interner.resolve(sym), "hello");
    }

    #[test]
    fn repeated_intern_is_idempotent() {
        let mut interner = Interner::new();
        let first = interner.intern("x");
        for _ in 0..100 {
            assert_eq!(interner.intern("x"), first);
        }
    }

    /// Interning any string and resolving it back always yields the
    /// original text, regardless of what was interned before it.
    #[quickcheck]
    fn intern_then_resolve_round_trips(prefix: Vec<String>, text: String) -> bool {
        let mut interner = Interner::new();
        for s in &prefix {
            interner.intern(s);
        }
        let sym = interner.intern(&text);
        interner.resolve(sym) == text
    }

    /// Interning the same string twice always returns the same symbol.
    #[quickcheck]
    fn interning_twice_yields_same_symbol(text: String) -> bool {
        let mut interner = Interner::new();
        interner.intern(&text) == interner.intern(&text)
    }
}

//! String interning for constructor and parameter names.
//!
//! Names appear many times across a type graph (every `TypeConstructor`
//! handle, every diagnostic render), so they are deduplicated into `Atom`s:
//! cheap `Copy` symbols that compare and hash as a single `u32`.
//!
//! A process-wide [`Interner`] instance backs the free functions
//! [`intern`]/[`resolve`]; it is safe to use from any number of threads.

use dashmap::DashMap;
use once_cell::sync::Lazy;
use std::sync::RwLock;
use tracing::trace;

/// Interned string symbol.
///
/// Equality and hashing are O(1) on the symbol value. Two `Atom`s produced
/// by the same [`Interner`] are equal iff their strings are equal.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Atom(u32);

impl Atom {
    /// Raw symbol value, for debug output.
    pub const fn index(self) -> u32 {
        self.0
    }
}

impl std::fmt::Debug for Atom {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Atom({} {:?})", self.0, resolve(*self))
    }
}

impl std::fmt::Display for Atom {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&resolve(*self))
    }
}

/// Thread-safe string interner.
///
/// Lookups go through a concurrent map; resolution reads an append-only
/// table guarded by an `RwLock` (writes only on first sighting of a string).
pub struct Interner {
    symbols: DashMap<Box<str>, Atom>,
    strings: RwLock<Vec<Box<str>>>,
}

impl Default for Interner {
    fn default() -> Self {
        Self::new()
    }
}

impl Interner {
    pub fn new() -> Self {
        Self {
            symbols: DashMap::new(),
            strings: RwLock::new(Vec::new()),
        }
    }

    /// Intern `text`, returning its symbol.
    pub fn intern(&self, text: &str) -> Atom {
        if let Some(existing) = self.symbols.get(text) {
            return *existing;
        }
        let mut strings = self.strings.write().expect("interner table poisoned");
        // Re-check under the write lock: another thread may have won the race.
        if let Some(existing) = self.symbols.get(text) {
            return *existing;
        }
        let atom = Atom(u32::try_from(strings.len()).expect("interner overflow"));
        strings.push(Box::from(text));
        self.symbols.insert(Box::from(text), atom);
        trace!(index = atom.0, text, "Interner::intern");
        atom
    }

    /// Resolve a symbol back to its string.
    ///
    /// Panics if `atom` was not produced by this interner.
    pub fn resolve(&self, atom: Atom) -> String {
        let strings = self.strings.read().expect("interner table poisoned");
        strings
            .get(atom.0 as usize)
            .unwrap_or_else(|| panic!("unknown atom index {}", atom.0))
            .to_string()
    }

    /// Number of distinct strings interned so far.
    pub fn len(&self) -> usize {
        self.strings.read().expect("interner table poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

static GLOBAL: Lazy<Interner> = Lazy::new(Interner::new);

/// Intern `text` in the process-wide interner.
pub fn intern(text: &str) -> Atom {
    GLOBAL.intern(text)
}

/// Resolve an [`Atom`] from the process-wide interner.
pub fn resolve(atom: Atom) -> String {
    GLOBAL.resolve(atom)
}

#[cfg(test)]
#[path = "../tests/interner_tests.rs"]
mod tests;

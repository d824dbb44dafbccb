use super::*;

#[test]
fn test_intern_dedupes() {
    let interner = Interner::new();
    let a = interner.intern("Animal");
    let b = interner.intern("Animal");
    let c = interner.intern("Dog");
    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn test_resolve_round_trip() {
    let interner = Interner::new();
    let atom = interner.intern("Cell");
    assert_eq!(interner.resolve(atom), "Cell");
}

#[test]
fn test_len_counts_distinct() {
    let interner = Interner::new();
    interner.intern("a");
    interner.intern("b");
    interner.intern("a");
    assert_eq!(interner.len(), 2);
}

#[test]
fn test_global_interner() {
    let a = intern("Source");
    let b = intern("Source");
    assert_eq!(a, b);
    assert_eq!(resolve(a), "Source");
}

#[test]
fn test_atom_display() {
    let atom = intern("Sink");
    assert_eq!(atom.to_string(), "Sink");
}

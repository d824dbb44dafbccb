use crate::checker::{DEFAULT, ERROR_TYPES_EQUAL_TO_ANYTHING};
use crate::fixtures::{Menagerie, in_, inv, out, star};
use rayon::prelude::*;

/// The shared preset checkers hold no per-query state, so any number of
/// threads may hammer the same instance against the same type graph.
#[test]
fn test_shared_checker_across_threads() {
    let zoo = Menagerie::new();

    (0..256usize).into_par_iter().for_each(|i| {
        match i % 4 {
            0 => {
                assert!(DEFAULT.is_subtype_of(&zoo.dog(), &zoo.animal()));
                assert!(!DEFAULT.is_subtype_of(&zoo.animal(), &zoo.dog()));
            }
            1 => {
                assert!(DEFAULT.is_subtype_of(
                    &zoo.sub_source_of(inv(zoo.dog())),
                    &zoo.source_of(out(zoo.animal())),
                ));
                assert!(DEFAULT.is_subtype_of(&zoo.cell_of(inv(zoo.cat())), &zoo.cell_of(star())));
            }
            2 => {
                assert!(DEFAULT.equal_types(&zoo.sink_of(in_(zoo.dog())), &zoo.sink_of(inv(zoo.dog()))));
                assert!(!DEFAULT.equal_types(&zoo.dog(), &zoo.cat()));
            }
            _ => {
                let error = tyrel_types::Ty::error("unresolved");
                assert!(ERROR_TYPES_EQUAL_TO_ANYTHING.equal_types(&error, &zoo.animal()));
                assert!(DEFAULT.is_subtype_of(&error, &zoo.cell_of(star())));
            }
        }
    });
}

/// Concurrent queries over independently built type graphs.
#[test]
fn test_independent_graphs_across_threads() {
    (0..16usize).into_par_iter().for_each(|_| {
        let zoo = Menagerie::new();
        assert!(DEFAULT.is_subtype_of(&zoo.grand_cell_of(inv(zoo.dog())), &zoo.cell_of(star())));
        assert!(!DEFAULT.is_subtype_of(&zoo.cell_of(inv(zoo.dog())), &zoo.cell_of(inv(zoo.animal()))));
    });
}

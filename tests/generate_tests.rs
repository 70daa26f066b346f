use minefield::{annotate_rows, random_field, Annotation, Grid, GridError};
use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn generated(seed: u64, nrows: usize, ncols: usize, nmines: usize) -> Grid {
    let mut rng = SmallRng::seed_from_u64(seed);
    random_field(&mut rng, nrows, ncols, nmines).unwrap()
}

#[test]
fn test_generate_exact_mine_count() {
    let grid = generated(42, 5, 7, 9);
    assert_eq!(grid.num_rows(), 5);
    assert_eq!(grid.num_cols(), 7);
    assert_eq!(grid.num_mines(), 9);
}

#[test]
fn test_generate_zero_mines() {
    let grid = generated(1, 4, 4, 0);
    assert_eq!(grid.num_mines(), 0);
}

#[test]
fn test_generate_full_field() {
    let grid = generated(7, 3, 4, 12);
    assert_eq!(grid.num_mines(), 12);
}

#[test]
fn test_generate_empty_field() {
    let grid = generated(0, 0, 0, 0);
    assert_eq!(grid.num_rows(), 0);
    assert_eq!(grid.num_cols(), 0);
}

#[test]
fn test_generate_overfull_rejected() {
    let mut rng = SmallRng::seed_from_u64(42);
    let err = random_field(&mut rng, 3, 4, 13).unwrap_err();
    assert_eq!(
        err,
        GridError::TooManyMines {
            requested: 13,
            capacity: 12
        }
    );
}

#[test]
fn test_generate_seeded_is_reproducible() {
    assert_eq!(generated(99, 6, 6, 10), generated(99, 6, 6, 10));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn generated_fields_annotate_cleanly(
        seed in any::<u64>(),
        nrows in 1usize..10,
        ncols in 1usize..10,
    ) {
        let nmines = (nrows * ncols) / 3;
        let grid = generated(seed, nrows, ncols, nmines);
        prop_assert_eq!(grid.num_mines(), nmines);

        let rows: Vec<String> = grid
            .to_string()
            .split('\n')
            .map(str::to_owned)
            .collect();
        let annotated = annotate_rows(&rows).unwrap();
        prop_assert_eq!(annotated.len(), nrows);

        // mine positions survive annotation
        for (r, row) in annotated.iter().enumerate() {
            for (c, ch) in row.chars().enumerate() {
                prop_assert_eq!(ch == '*', grid.is_mine(r, c));
                if ch == ' ' {
                    prop_assert_eq!(grid.annotation(r, c), Annotation::Clear);
                }
            }
        }
    }
}

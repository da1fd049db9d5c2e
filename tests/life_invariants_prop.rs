//! Property tests for the Life engine.
//!
//! Invariants covered:
//! - Stored neighbour counts match a full rescan after any mix of toggles
//!   (including off-grid ones) and generation steps.
//! - Toggling a cell twice restores the grid exactly.
//! - Serial and parallel stepping agree.

use pocket_games::LifeGrid;
use proptest::prelude::*;

#[derive(Clone, Debug)]
enum Op {
    Toggle(isize, isize),
    Advance,
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => (-2isize..14, -2isize..14).prop_map(|(r, c)| Op::Toggle(r, c)),
        1 => Just(Op::Advance),
    ]
}

fn assert_counts_match_rescan(grid: &LifeGrid) {
    for (row, column, cell) in grid.iter_cells() {
        assert_eq!(
            cell.live_neighbours(),
            grid.count_live_neighbours(row, column),
            "stale count at ({}, {})",
            row,
            column
        );
    }
}

proptest! {
    #[test]
    fn neighbour_counts_survive_any_sequence(
        rows in 1usize..12,
        columns in 1usize..12,
        ops in prop::collection::vec(op(), 0..120),
    ) {
        let mut grid = LifeGrid::new(rows, columns).unwrap();
        for op in ops {
            match op {
                Op::Toggle(r, c) => grid.toggle_cell(r, c),
                Op::Advance => {
                    grid.advance_generation();
                }
            }
        }
        assert_counts_match_rescan(&grid);
    }

    #[test]
    fn double_toggle_is_identity(
        cells in prop::collection::vec((0isize..10, 0isize..10), 0..60),
        row in -1isize..11,
        column in -1isize..11,
    ) {
        let mut grid = LifeGrid::new(10, 10).unwrap();
        for (r, c) in cells {
            grid.toggle_cell(r, c);
        }
        let before = grid.clone();

        grid.toggle_cell(row, column);
        grid.toggle_cell(row, column);
        prop_assert_eq!(grid, before);
    }

    #[test]
    fn parallel_step_matches_serial(
        cells in prop::collection::vec((0isize..24, 0isize..16), 0..200),
        generations in 1usize..8,
    ) {
        let mut serial = LifeGrid::new(24, 16).unwrap();
        for (r, c) in cells {
            serial.toggle_cell(r, c);
        }
        let mut parallel = serial.clone();

        for _ in 0..generations {
            prop_assert_eq!(serial.advance_generation(), parallel.advance_generation_parallel());
        }
        prop_assert_eq!(&serial, &parallel);
        assert_counts_match_rescan(&parallel);
    }
}

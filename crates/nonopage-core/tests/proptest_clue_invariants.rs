#![forbid(unsafe_code)]

//! Property-based invariant tests for clue extraction and padding.
//!
//! These verify what must hold for any line of cells and any grid:
//!
//! 1. The clue runs sum to the number of filled cells.
//! 2. Every run is at least 1.
//! 3. The run count equals the number of blank-to-filled transitions.
//! 4. Padding never changes the clues of existing rows, and padded-on rows
//!    are blank.
//! 5. Tiling covers the padded grid exactly once.

use nonopage_core::{Cell, CellGrid, ClueLine, split_into_tiles};
use proptest::prelude::*;

// ── Helpers ─────────────────────────────────────────────────────────────

fn line_strategy() -> impl Strategy<Value = Vec<Cell>> {
    prop::collection::vec(
        prop_oneof![Just(Cell::Blank), Just(Cell::Filled)],
        0..64,
    )
}

fn grid_strategy() -> impl Strategy<Value = CellGrid> {
    (1usize..20, 1usize..20).prop_flat_map(|(width, height)| {
        prop::collection::vec(
            prop::collection::vec(
                prop_oneof![Just(Cell::Blank), Just(Cell::Filled)],
                width..=width,
            ),
            height..=height,
        )
        .prop_map(|rows| CellGrid::from_rows(rows).expect("rows are uniform"))
    })
}

// ═════════════════════════════════════════════════════════════════════════
// 1 + 2. Run sums and run minimums
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn runs_sum_to_filled_count(line in line_strategy()) {
        let clues = ClueLine::from_cells(line.iter().copied());
        let filled = line.iter().filter(|cell| cell.is_filled()).count() as u32;
        let sum: u32 = clues.values().iter().sum();
        prop_assert_eq!(sum, filled);
        prop_assert!(clues.values().iter().all(|&run| run >= 1));
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3. Run count equals blank-to-filled transitions
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn run_count_matches_transitions(line in line_strategy()) {
        let clues = ClueLine::from_cells(line.iter().copied());
        let mut transitions = 0usize;
        let mut previous = Cell::Blank;
        for &cell in &line {
            if cell.is_filled() && !previous.is_filled() {
                transitions += 1;
            }
            previous = cell;
        }
        prop_assert_eq!(clues.run_count(), transitions);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4. Padding preserves existing clues
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn padding_preserves_clues(grid in grid_strategy(), tile in 1usize..8) {
        let padded = grid.padded_to_multiple(tile, tile).expect("non-zero tile");
        prop_assert_eq!(padded.width() % tile, 0);
        prop_assert_eq!(padded.height() % tile, 0);

        let original_rows = grid.row_clues();
        let padded_rows = padded.row_clues();
        prop_assert_eq!(&padded_rows[..grid.height()], &original_rows[..]);
        prop_assert!(padded_rows[grid.height()..].iter().all(ClueLine::is_blank));

        let original_cols = grid.column_clues();
        let padded_cols = padded.column_clues();
        prop_assert_eq!(&padded_cols[..grid.width()], &original_cols[..]);
        prop_assert!(padded_cols[grid.width()..].iter().all(ClueLine::is_blank));
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 5. Tiling covers the padded grid exactly once
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn tiles_cover_the_grid(grid in grid_strategy(), tile in 1usize..8) {
        let tiles = split_into_tiles(&grid, tile, tile).expect("non-zero tile");
        let padded = grid.padded_to_multiple(tile, tile).expect("non-zero tile");

        let expected = (padded.width() / tile) * (padded.height() / tile);
        prop_assert_eq!(tiles.len(), expected);

        for t in &tiles {
            prop_assert_eq!(t.grid().width(), tile);
            prop_assert_eq!(t.grid().height(), tile);
            // Every tile cell matches the padded source at its offset.
            for y in 0..tile {
                for x in 0..tile {
                    let source = padded.get(
                        t.position().col * tile + x,
                        t.position().row * tile + y,
                    );
                    prop_assert_eq!(t.grid().get(x, y), source);
                }
            }
        }
    }
}

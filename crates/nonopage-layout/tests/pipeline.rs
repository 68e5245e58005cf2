#![forbid(unsafe_code)]

//! End-to-end pipeline: solved grid -> tiles -> clue extraction -> grouped
//! lane trees, the way the surrounding print tooling consumes this crate.

use nonopage_core::{Cell, CellGrid, split_into_tiles};
use nonopage_layout::{LaneNode, Nonogram};

fn checkerboard(width: usize, height: usize) -> CellGrid {
    let rows = (0..height)
        .map(|y| {
            (0..width)
                .map(|x| {
                    if (x + y) % 2 == 0 {
                        Cell::Filled
                    } else {
                        Cell::Blank
                    }
                })
                .collect()
        })
        .collect();
    CellGrid::from_rows(rows).expect("rows are uniform")
}

#[test]
fn tiles_feed_independent_nonograms() {
    let grid = checkerboard(9, 10);
    let tiles = split_into_tiles(&grid, 5, 5).expect("non-zero tile size");
    assert_eq!(tiles.len(), 4);

    for tile in &tiles {
        let puzzle = Nonogram::from_grid(tile.grid());
        assert_eq!(puzzle.horizontal().lane_count(), 5);
        assert_eq!(puzzle.vertical().lane_count(), 5);

        // 5 lanes fit one top group holding one full subgroup.
        let root = puzzle.horizontal().root();
        assert_eq!(root.children().len(), 1);
        let top = root.children()[0].as_group().expect("top level is groups");
        assert_eq!(top.children().len(), 1);
        assert_eq!(top.children()[0].lane_count(), 5);

        // The tile's precomputed clues match what the lanes carry.
        let lane_clues: Vec<_> = puzzle
            .horizontal()
            .iter_lanes()
            .map(|lane| lane.clues().clone())
            .collect();
        assert_eq!(lane_clues, tile.row_clues().to_vec());
    }
}

#[test]
fn tall_grid_groups_into_pages() {
    let grid = checkerboard(4, 23);
    let puzzle = Nonogram::from_grid(&grid);

    let sizes: Vec<usize> = puzzle
        .horizontal()
        .root()
        .children()
        .iter()
        .map(LaneNode::lane_count)
        .collect();
    assert_eq!(sizes, vec![10, 10, 3]);

    let spans: Vec<_> = puzzle.horizontal().root().child_spans().collect();
    assert_eq!(spans, vec![0..10, 10..20, 20..23]);

    // Columns group independently of rows.
    assert_eq!(puzzle.vertical().lane_count(), 4);
    assert_eq!(puzzle.vertical().root().children().len(), 1);
}

#[test]
fn blank_grid_lanes_are_blank_but_grouped() {
    let grid = CellGrid::blank(12, 7);
    let puzzle = Nonogram::from_grid(&grid);

    assert_eq!(puzzle.horizontal().lane_count(), 7);
    assert_eq!(puzzle.vertical().lane_count(), 12);
    assert!(puzzle.horizontal().iter_lanes().all(|lane| lane.clues().is_blank()));

    let spans: Vec<_> = puzzle.vertical().root().child_spans().collect();
    assert_eq!(spans, vec![0..10, 10..12]);
}

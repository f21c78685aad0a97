use std::collections::BTreeSet;

use crate::{possible_adjacent_codes, Board, Cell, Face, Tile, Track, TRACK_COLS, TRACK_ROWS};

/// Computes the legal destinations for the selected tile.
///
/// The search runs in two stages. First, every placed tile whose
/// neighbor set contains the selected tile's code contributes the cells
/// directly left and right of it. Only when that yields nothing does the
/// fallback kick in: the first free cell in column `rank - 1`, scanning
/// track A's rows top to bottom, then track B's. The fallback column
/// ignores the tile's color, so tiles of different colors can stack up
/// in the same column across rows; nothing enforces per-row meld
/// consistency yet.
///
/// Occupied cells and the tile's own current cell never survive the
/// final filter, so every returned cell is free. Wildcards have neither
/// adjacency nor a rank for the fallback column and get no targets.
pub fn candidate_targets(board: &Board, selected: &Tile) -> Vec<Cell> {
    let Face::Colored { rank, .. } = selected.face else {
        return Vec::new();
    };
    let code = selected.face.code();

    let mut candidates: BTreeSet<Cell> = BTreeSet::new();
    for placement in board.placements() {
        let Ok(neighbor_codes) = possible_adjacent_codes(placement.face) else {
            // Placed wildcard: no defined adjacency, contributes nothing.
            continue;
        };
        if !neighbor_codes.contains(&code) {
            continue;
        }
        let beside = placement.cell;
        if beside.col > 0 {
            candidates.insert(Cell {
                col: beside.col - 1,
                ..beside
            });
        }
        if beside.col + 1 < TRACK_COLS {
            candidates.insert(Cell {
                col: beside.col + 1,
                ..beside
            });
        }
    }

    if candidates.is_empty() {
        let col = rank.get() - 1;
        'tracks: for track in Track::BOTH {
            for row in 0..TRACK_ROWS {
                let cell = Cell { track, row, col };
                if board.is_free(cell) {
                    candidates.insert(cell);
                    break 'tracks;
                }
            }
        }
    }

    candidates
        .into_iter()
        .filter(|&cell| board.is_free(cell))
        .collect()
}

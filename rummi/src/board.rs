use serde::{Deserialize, Serialize};

use crate::{Face, IllegalPlacement, TileId};

pub const TRACK_ROWS: u8 = 8;
pub const TRACK_COLS: u8 = 13;

/// One of the two independent placement grids ("Set A" / "Set B").
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Track {
    A,
    B,
}

impl Track {
    pub const BOTH: [Track; 2] = [Track::A, Track::B];
}

impl std::fmt::Display for Track {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Track::A => write!(f, "A"),
            Track::B => write!(f, "B"),
        }
    }
}

/// A single grid position. Rows and columns are zero-based.
///
/// The derived ordering (track, then row, then col) is what gives
/// candidate target lists their deterministic order.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub track: Track,
    pub row: u8,
    pub col: u8,
}

impl Cell {
    /// Bounds-checked constructor for coordinates coming from outside
    /// the core, e.g. a presentation process.
    pub fn new(track: Track, row: u8, col: u8) -> Result<Cell, IllegalPlacement> {
        if row >= TRACK_ROWS || col >= TRACK_COLS {
            return Err(IllegalPlacement::OutOfBounds { track, row, col });
        }
        Ok(Cell { track, row, col })
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({},{})", self.track, self.row, self.col)
    }
}

/// One occupied cell.
///
/// The face is copied from the tile's immutable identity, so board scans
/// and snapshots need no external tile lookup.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Placement {
    pub cell: Cell,
    pub tile: TileId,
    pub face: Face,
}

/// The two tracks and every tile currently on them.
#[derive(Clone, Debug, Default)]
pub struct Board {
    /// There is exactly one entry in this list for every occupied cell;
    /// it is the single source of truth for what is on the board.
    /// A tile appears at most once.
    placements: Vec<Placement>,
}

impl Board {
    pub fn new() -> Self {
        Self {
            placements: Vec::new(),
        }
    }

    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    pub fn len(&self) -> usize {
        self.placements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    pub fn occupant(&self, cell: Cell) -> Option<TileId> {
        self.placements
            .iter()
            .find(|p| p.cell == cell)
            .map(|p| p.tile)
    }

    pub fn is_free(&self, cell: Cell) -> bool {
        self.occupant(cell).is_none()
    }

    /// Where the given tile currently sits, if it is placed at all.
    pub fn cell_of(&self, tile: TileId) -> Option<Cell> {
        self.placements
            .iter()
            .find(|p| p.tile == tile)
            .map(|p| p.cell)
    }

    /// Moves `tile` onto `cell`, dropping any prior placement of the same
    /// tile. Fails if another tile already holds the cell; callers going
    /// through the target calculator never hit that case.
    pub fn place(&mut self, tile: TileId, face: Face, cell: Cell) -> Result<(), IllegalPlacement> {
        if let Some(occupant) = self.occupant(cell) {
            if occupant != tile {
                return Err(IllegalPlacement::OccupiedCell { cell, occupant });
            }
        }
        self.remove(tile);
        self.placements.push(Placement { cell, tile, face });
        Ok(())
    }

    /// Takes `tile` off the board, returning the cell it vacated.
    pub fn remove(&mut self, tile: TileId) -> Option<Cell> {
        let idx = self.placements.iter().position(|p| p.tile == tile)?;
        Some(self.placements.remove(idx).cell)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tile;

    fn cell(track: Track, row: u8, col: u8) -> Cell {
        Cell::new(track, row, col).unwrap()
    }

    #[test]
    fn cell_bounds_are_checked() {
        assert!(Cell::new(Track::A, 7, 12).is_ok());
        assert_eq!(
            Cell::new(Track::A, 8, 0),
            Err(IllegalPlacement::OutOfBounds {
                track: Track::A,
                row: 8,
                col: 0
            })
        );
        assert!(Cell::new(Track::B, 0, 13).is_err());
    }

    #[test]
    fn placing_on_an_occupied_cell_fails() {
        let mut board = Board::new();
        let target = cell(Track::A, 3, 5);
        board.place(TileId(0), tile!("R:08"), target).unwrap();
        assert_eq!(
            board.place(TileId(1), tile!("R:09"), target),
            Err(IllegalPlacement::OccupiedCell {
                cell: target,
                occupant: TileId(0)
            })
        );
        assert_eq!(board.len(), 1);
    }

    #[test]
    fn replacing_moves_instead_of_duplicating() {
        let mut board = Board::new();
        let from = cell(Track::A, 0, 6);
        let to = cell(Track::B, 2, 6);
        board.place(TileId(4), tile!("B:07"), from).unwrap();
        board.place(TileId(4), tile!("B:07"), to).unwrap();
        assert_eq!(board.len(), 1);
        assert_eq!(board.cell_of(TileId(4)), Some(to));
        assert!(board.is_free(from));
    }

    #[test]
    fn remove_vacates_the_cell() {
        let mut board = Board::new();
        let target = cell(Track::A, 1, 1);
        board.place(TileId(9), tile!("P:02"), target).unwrap();
        assert_eq!(board.remove(TileId(9)), Some(target));
        assert!(board.is_empty());
        assert_eq!(board.remove(TileId(9)), None);
    }
}

use crate::{Cell, TileId, Track, TRACK_COLS, TRACK_ROWS};

/// The error type for dealing from the draw pile.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct EmptyPile {
    pub requested: usize,
    pub remaining: usize,
}

impl std::error::Error for EmptyPile {}

impl std::fmt::Display for EmptyPile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Tried to deal {} tiles but only {} remain in the draw pile",
            self.requested, self.remaining
        )
    }
}

/// The error type for [`possible_adjacent_codes`](crate::possible_adjacent_codes).
///
/// Wildcards have no defined neighbor set; callers must special-case them
/// instead of treating the query as an empty result.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct InvalidAdjacencyQuery;

impl std::error::Error for InvalidAdjacencyQuery {}

impl std::fmt::Display for InvalidAdjacencyQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Adjacency is undefined for wildcard tiles")
    }
}

/// The error type for placing a single tile on the board.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum IllegalPlacement {
    OutOfBounds { track: Track, row: u8, col: u8 },
    OccupiedCell { cell: Cell, occupant: TileId },
}

impl std::error::Error for IllegalPlacement {}

impl std::fmt::Display for IllegalPlacement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IllegalPlacement::OutOfBounds { track, row, col } => write!(
                f,
                "Cell ({}, {}) is outside track {}'s {}x{} grid",
                row, col, track, TRACK_ROWS, TRACK_COLS
            ),
            IllegalPlacement::OccupiedCell { cell, occupant } => {
                write!(f, "Cell {} is already occupied by tile {}", cell, occupant)
            }
        }
    }
}

/// The error type for one inbound presentation-layer event.
#[derive(Debug)]
pub enum IllegalEvent {
    UnknownTile { id: TileId },
    TileNotDealt { id: TileId },
    NoTileSelected,
    TargetNotOffered { cell: Cell },
    Placement { err: IllegalPlacement },
}

impl std::error::Error for IllegalEvent {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            IllegalEvent::Placement { err } => Some(err),
            _ => None,
        }
    }
}

impl std::fmt::Display for IllegalEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IllegalEvent::UnknownTile { id } => {
                write!(f, "Tile {} does not exist in this game", id)
            }
            IllegalEvent::TileNotDealt { id } => {
                write!(f, "Tile {} is still in the draw pile", id)
            }
            IllegalEvent::NoTileSelected => {
                write!(f, "A target was chosen, but no tile is selected")
            }
            IllegalEvent::TargetNotOffered { cell } => {
                write!(f, "Cell {} is not among the offered targets", cell)
            }
            IllegalEvent::Placement { err: _ } => {
                write!(f, "The selected tile could not be placed")
            }
        }
    }
}

impl From<IllegalPlacement> for IllegalEvent {
    fn from(err: IllegalPlacement) -> Self {
        IllegalEvent::Placement { err }
    }
}

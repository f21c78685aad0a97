use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::{
    candidate_targets, deal, starting_deck, validate_board, Board, Cell, CellView, EmptyPile,
    HandView, IllegalEvent, PlacementView, Selection, Snapshot, Tile, TileId, TileView, HAND_SIZE,
};

/// One player's name and ordered hand, dealt at game start.
///
/// Placed tiles stay in the list; their `is_in_hand` flag going false is
/// what removes them (tiles never return to the hand).
#[derive(Clone, Debug)]
pub struct Player {
    pub name: String,
    pub hand: Vec<TileId>,
}

/// The full state of one game: the tile table, the draw pile, both
/// players' hands, the board, and the current selection.
///
/// All mutation happens synchronously inside single event-handler calls;
/// there is no locking and no suspension point anywhere in the core.
#[derive(Clone, Debug)]
pub struct GameSession {
    /// Indexed by [`TileId`]; built once per game, never reordered.
    tiles: Vec<Tile>,
    draw_pile: Vec<TileId>,
    players: Vec<Player>,
    board: Board,
    selection: Selection,
}

impl GameSession {
    /// Builds the deck, shuffles it, and deals [`HAND_SIZE`] tiles to
    /// each named player.
    pub fn new(player_names: &[&str], rng: &mut StdRng) -> Result<Self, EmptyPile> {
        Self::with_hand_size(player_names, HAND_SIZE, rng)
    }

    pub fn with_hand_size(
        player_names: &[&str],
        hand_size: usize,
        rng: &mut StdRng,
    ) -> Result<Self, EmptyPile> {
        let mut tiles = starting_deck();
        let mut draw_pile: Vec<TileId> = tiles.iter().map(|t| t.id).collect();
        draw_pile.shuffle(rng);

        let mut players = Vec::with_capacity(player_names.len());
        for name in player_names {
            let hand = deal(&mut draw_pile, rng, hand_size)?;
            for &id in &hand {
                tiles[id.index()].is_in_hand = true;
            }
            players.push(Player {
                name: String::from(*name),
                hand,
            });
        }

        Ok(Self {
            tiles,
            draw_pile,
            players,
            board: Board::new(),
            selection: Selection::Idle,
        })
    }

    pub fn tile(&self, id: TileId) -> Option<&Tile> {
        self.tiles.get(id.index())
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn draw_pile_len(&self) -> usize {
        self.draw_pile.len()
    }

    /// Ids of the wildcard tiles, for the host's decorative effect pool.
    pub fn wildcard_ids(&self) -> Vec<TileId> {
        self.tiles
            .iter()
            .filter(|t| t.face.is_wildcard())
            .map(|t| t.id)
            .collect()
    }

    /// `Idle -> Selected`, or re-targeting from an existing selection.
    ///
    /// Deselects any previously selected tile, marks the new one and
    /// computes its candidate targets. Selecting the same tile twice in a
    /// row leaves the state unchanged. Only tiles in play can be
    /// selected: a tile still in the draw pile is rejected, so the pile
    /// drains through dealing alone.
    pub fn select_tile(&mut self, id: TileId) -> Result<&[Cell], IllegalEvent> {
        let Some(tile) = self.tiles.get(id.index()) else {
            return Err(IllegalEvent::UnknownTile { id });
        };
        if !tile.is_in_hand && self.board.cell_of(id).is_none() {
            return Err(IllegalEvent::TileNotDealt { id });
        }
        if let Some(prev) = self.selection.selected_tile() {
            self.tiles[prev.index()].is_selected = false;
        }
        self.tiles[id.index()].is_selected = true;
        let targets = candidate_targets(&self.board, &self.tiles[id.index()]);
        self.selection = Selection::Selected { tile: id, targets };
        Ok(self.selection.targets())
    }

    /// `Selected -> Idle` by way of the move executor.
    ///
    /// The cell must be one of the targets currently on offer; anything
    /// else is rejected without touching the board.
    pub fn choose_target(&mut self, cell: Cell) -> Result<(), IllegalEvent> {
        let Some(tile) = self.selection.selected_tile() else {
            return Err(IllegalEvent::NoTileSelected);
        };
        if !self.selection.offers(cell) {
            return Err(IllegalEvent::TargetNotOffered { cell });
        }
        self.apply_move(tile, cell)?;
        self.tiles[tile.index()].is_selected = false;
        self.selection = Selection::Idle;
        Ok(())
    }

    /// The move executor: takes the tile out of the hand if it was still
    /// there, drops its prior placement and appends the new one.
    ///
    /// Public for callers bypassing the target calculator; those get the
    /// defensive occupied-cell check instead of a silent overwrite.
    pub fn apply_move(&mut self, id: TileId, cell: Cell) -> Result<(), IllegalEvent> {
        let face = self.tile(id).ok_or(IllegalEvent::UnknownTile { id })?.face;
        self.board
            .place(id, face, cell)
            .map_err(IllegalEvent::from)?;
        self.tiles[id.index()].is_in_hand = false;
        Ok(())
    }

    /// Re-runs the board validity scan and applies the reports to the
    /// tiles' `is_invalid` flags. The scan produces no reports yet, so
    /// today this only clears stale flags.
    pub fn refresh_validity(&mut self) {
        for tile in &mut self.tiles {
            tile.is_invalid = false;
        }
        for report in validate_board(&self.board) {
            if let Some(occupant) = self.board.occupant(report.cell) {
                self.tiles[occupant.index()].is_invalid = true;
            }
        }
    }

    /// The outbound view of the whole session for the presentation layer.
    pub fn snapshot(&self) -> Snapshot {
        let hands = self
            .players
            .iter()
            .map(|player| HandView {
                player: player.name.clone(),
                tiles: player
                    .hand
                    .iter()
                    .map(|&id| {
                        let tile = &self.tiles[id.index()];
                        TileView {
                            id: tile.id.0,
                            code: tile.code(),
                            is_selected: tile.is_selected,
                            is_in_hand: tile.is_in_hand,
                            is_invalid: tile.is_invalid,
                        }
                    })
                    .collect(),
            })
            .collect();

        let placements = self
            .board
            .placements()
            .iter()
            .map(|p| PlacementView {
                track: p.cell.track,
                row: p.cell.row,
                col: p.cell.col,
                code: p.face.code(),
            })
            .collect();

        let targets = self
            .selection
            .targets()
            .iter()
            .map(|c| CellView {
                track: c.track,
                row: c.row,
                col: c.col,
            })
            .collect();

        Snapshot {
            hands,
            placements,
            targets,
            selected: self.selection.selected_tile().map(|id| id.0),
        }
    }
}

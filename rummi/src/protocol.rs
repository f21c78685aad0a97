use serde::{Deserialize, Serialize};

use crate::Track;

/// An inbound event from the presentation layer.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Request {
    /// Start a fresh game, discarding the current one.
    ///
    /// The response is the initial [`Snapshot`].
    NewGame { players: u8 },
    /// Pick up a tile (or switch the pending move to a different tile).
    ///
    /// The response snapshot carries the candidate targets for it.
    SelectTile { tile: u16 },
    /// Drop the currently selected tile onto one of the offered cells.
    ChooseTarget { track: Track, row: u8, col: u8 },
    /// Ask for the current state without changing it.
    Snapshot,
    /// The host should shut down.
    Bye,
}

/// Dummy struct for use in host communication.
///
/// Used to signal an acknowledgement without data.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Okay();

/// Per-tile view with the flags the presentation layer styles by.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileView {
    pub id: u16,
    pub code: String,
    pub is_selected: bool,
    pub is_in_hand: bool,
    pub is_invalid: bool,
}

/// One player's ordered hand. Tiles stay listed after being placed;
/// `is_in_hand` going false is what removes them from rendering.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandView {
    pub player: String,
    pub tiles: Vec<TileView>,
}

/// One occupied board cell.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacementView {
    pub track: Track,
    pub row: u8,
    pub col: u8,
    pub code: String,
}

/// A candidate target cell, rendered as a clickable move area.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellView {
    pub track: Track,
    pub row: u8,
    pub col: u8,
}

/// Everything the presentation layer needs to draw one frame.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub hands: Vec<HandView>,
    pub placements: Vec<PlacementView>,
    /// Candidate targets for the selected tile; empty while idle.
    pub targets: Vec<CellView>,
    /// Id of the selected tile, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub selected: Option<u16>,
}

use crate::{Cell, TileId};

/// Which tile, if any, is currently picked up, plus the targets offered
/// for it.
///
/// This is a per-session value owned by the [`GameSession`](crate::GameSession),
/// so two sessions can never share a selection. There is no cancel
/// transition: selecting a different tile is the only way to abandon a
/// pending move.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Selection {
    #[default]
    Idle,
    Selected { tile: TileId, targets: Vec<Cell> },
}

impl Selection {
    pub fn selected_tile(&self) -> Option<TileId> {
        match self {
            Selection::Selected { tile, .. } => Some(*tile),
            Selection::Idle => None,
        }
    }

    /// The candidate targets currently on offer; empty while idle.
    pub fn targets(&self) -> &[Cell] {
        match self {
            Selection::Selected { targets, .. } => targets,
            Selection::Idle => &[],
        }
    }

    pub fn offers(&self, cell: Cell) -> bool {
        self.targets().contains(&cell)
    }
}

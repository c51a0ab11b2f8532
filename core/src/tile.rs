use serde::{Deserialize, Serialize};

use crate::*;

/// Stable identity of a tile for the lifetime of its puzzle.
pub type TileId = u32;

/// Solution cell of a puzzle.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Tile {
    pub id: TileId,
    pub x: Coord,
    pub y: Coord,
    /// `None` for blank tiles.
    pub color: Option<Rgba>,
}

impl Tile {
    pub const fn coords(&self) -> Coord2 {
        (self.x, self.y)
    }

    pub const fn is_painted(&self) -> bool {
        self.color.is_some()
    }
}

/// Player-visible state of a single tile.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TileState {
    Hidden,
    Marked,
    Revealed,
}

impl TileState {
    pub const fn is_hidden(self) -> bool {
        matches!(self, Self::Hidden)
    }
}

impl Default for TileState {
    fn default() -> Self {
        Self::Hidden
    }
}

/// What a committed selection does to its tiles.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    Mark,
    Reveal,
}

impl Action {
    /// State a hidden tile ends up in when the action applies to it.
    pub const fn target_state(self) -> TileState {
        match self {
            Self::Mark => TileState::Marked,
            Self::Reveal => TileState::Revealed,
        }
    }
}

impl Default for Action {
    fn default() -> Self {
        Self::Reveal
    }
}

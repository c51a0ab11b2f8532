use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// What a renderer draws for a single tile.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum ViewCell {
    Hidden,
    Marked,
    /// Revealed painted tile, drawn in its solution color.
    Painted(Rgba),
    /// Revealed blank tile.
    Mistake,
}

impl ViewCell {
    fn new(tile: &Tile, state: TileState) -> Self {
        match (state, tile.color) {
            (TileState::Hidden, _) => Self::Hidden,
            (TileState::Marked, _) => Self::Marked,
            (TileState::Revealed, Some(color)) => Self::Painted(color),
            (TileState::Revealed, None) => Self::Mistake,
        }
    }
}

/// Read-only snapshot of everything a host needs to draw the board.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoardView {
    pub size: Coord2,
    pub cells: Array2<ViewCell>,
    pub cols: Vec<Clue>,
    pub rows: Vec<Clue>,
    pub completion: Completion,
    pub selected: Selection,
    pub indicator: Option<Indicator>,
    pub progress: Progress,
    pub mistakes: CellCount,
}

impl BoardView {
    pub fn capture(game: &Game, controller: &GestureController) -> Self {
        let puzzle = game.puzzle();
        let board = game.state().board();
        let cells = puzzle
            .tiles()
            .map(|tile| ViewCell::new(tile, board[tile.coords().to_nd_index()]));

        Self {
            size: game.size(),
            cells,
            cols: puzzle.cols().to_vec(),
            rows: puzzle.rows().to_vec(),
            completion: game.completion().clone(),
            selected: controller.selection().to_vec(),
            indicator: controller.indicator(),
            progress: game.progress(),
            mistakes: game.mistakes(),
        }
    }

    /// Checks that every per-tile and per-line field agrees with `size`,
    /// e.g. after the view was deserialized.
    pub fn validate(&self) -> Result<()> {
        let (width, height) = self.size;
        let expected = (usize::from(width), usize::from(height));
        if self.cells.dim() != expected
            || self.cols.len() != expected.0
            || self.rows.len() != expected.1
            || self.completion.cols.len() != expected.0
            || self.completion.rows.len() != expected.1
        {
            return Err(PuzzleError::InvalidBoardShape);
        }

        if let Some(&id) = self.selected.iter().find(|&&id| id >= mult(width, height)) {
            return Err(PuzzleError::UnknownTile(id));
        }

        Ok(())
    }

    pub fn cell_at(&self, coords: Coord2) -> ViewCell {
        self.cells[coords.to_nd_index()]
    }

    pub fn is_selected(&self, id: TileId) -> bool {
        self.selected.contains(&id)
    }
}

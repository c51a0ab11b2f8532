use ndarray::Array2;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::*;

/// Completion of one line, one flag per clue run in clue order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineCompletion {
    runs: SmallVec<[bool; 8]>,
}

impl LineCompletion {
    /// Scans `line` and marks each painted run complete when all of its tiles are revealed.
    pub fn scan(puzzle: &Puzzle, board: &Array2<TileState>, line: Line) -> Self {
        let mut runs = SmallVec::new();
        let mut length: Coord = 0;
        let mut revealed: Coord = 0;

        for coords in line.iter_cells(puzzle.size()) {
            if puzzle.is_painted(coords) {
                length += 1;
                if board[coords.to_nd_index()] == TileState::Revealed {
                    revealed += 1;
                }
            } else if length > 0 {
                runs.push(length == revealed);
                length = 0;
                revealed = 0;
            }
        }
        if length > 0 {
            runs.push(length == revealed);
        }

        Self { runs }
    }

    pub fn runs(&self) -> &[bool] {
        &self.runs
    }

    /// A line without painted tiles is vacuously complete.
    pub fn is_complete(&self) -> bool {
        self.runs.iter().all(|&complete| complete)
    }
}

/// Per-line completion for every column and row.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Completion {
    pub cols: Vec<LineCompletion>,
    pub rows: Vec<LineCompletion>,
}

impl Completion {
    pub fn line(&self, line: Line) -> &LineCompletion {
        match line.axis {
            Axis::Column => &self.cols[usize::from(line.index)],
            Axis::Row => &self.rows[usize::from(line.index)],
        }
    }

    pub fn is_line_complete(&self, line: Line) -> bool {
        self.line(line).is_complete()
    }

    pub fn iter_complete_lines(&self) -> impl Iterator<Item = Line> + '_ {
        let cols = self.cols.iter().enumerate().map(|(x, c)| (Line::column(x as Coord), c));
        let rows = self.rows.iter().enumerate().map(|(y, c)| (Line::row(y as Coord), c));
        cols.chain(rows)
            .filter(|(_, completion)| completion.is_complete())
            .map(|(line, _)| line)
    }
}

/// Player progress on one puzzle. Every transition returns a new state and
/// leaves `self` untouched.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayState {
    board: Array2<TileState>,
    completion: Completion,
}

impl PlayState {
    /// Everything hidden, except lines with an empty clue which start out marked.
    pub fn new(puzzle: &Puzzle) -> Self {
        let hidden = Self {
            board: Array2::default(puzzle.size().to_nd_index()),
            completion: Completion::default(),
        };
        let completion = hidden.recompute_line_completion(puzzle);
        hidden.auto_fill_completed_lines(completion)
    }

    pub fn size(&self) -> Coord2 {
        self.board.board_size()
    }

    pub fn board(&self) -> &Array2<TileState> {
        &self.board
    }

    pub fn completion(&self) -> &Completion {
        &self.completion
    }

    pub fn tile_state_at(&self, coords: Coord2) -> TileState {
        self.board[coords.to_nd_index()]
    }

    pub fn count(&self, state: TileState) -> CellCount {
        self.board.iter().filter(|&&tile| tile == state).count() as CellCount
    }

    /// Applies `action` to `tiles` the way a committed selection does: marks
    /// only annotate, reveals also refresh completion and auto-fill.
    pub fn apply(&self, puzzle: &Puzzle, action: Action, tiles: &[TileId]) -> Result<Self> {
        match action {
            Action::Mark => self.apply_mark(puzzle, tiles),
            Action::Reveal => {
                let revealed = self.apply_reveal(puzzle, tiles)?;
                let completion = revealed.recompute_line_completion(puzzle);
                Ok(revealed.auto_fill_completed_lines(completion))
            }
        }
    }

    /// Marks every hidden target, or, when no target is hidden anymore, clears
    /// the marks on all targets. Revealed tiles are never touched.
    pub fn apply_mark(&self, puzzle: &Puzzle, tiles: &[TileId]) -> Result<Self> {
        let targets = self.targets(puzzle, tiles)?;
        let all_settled = targets
            .iter()
            .all(|&coords| !self.tile_state_at(coords).is_hidden());
        let (from, to) = if all_settled {
            (TileState::Marked, TileState::Hidden)
        } else {
            (TileState::Hidden, TileState::Marked)
        };

        let mut next = self.clone();
        for coords in targets {
            let tile = &mut next.board[coords.to_nd_index()];
            if *tile == from {
                *tile = to;
            }
        }
        Ok(next)
    }

    /// Reveals all hidden targets when each of them is painted. Otherwise only
    /// the first hidden blank target in scan order is revealed, as a mistake.
    pub fn apply_reveal(&self, puzzle: &Puzzle, tiles: &[TileId]) -> Result<Self> {
        let hidden: Vec<_> = self
            .targets(puzzle, tiles)?
            .into_iter()
            .filter(|&coords| self.tile_state_at(coords).is_hidden())
            .collect();

        let mut next = self.clone();
        match hidden.iter().find(|&&coords| !puzzle.is_painted(coords)) {
            None => {
                for coords in hidden {
                    next.board[coords.to_nd_index()] = TileState::Revealed;
                }
            }
            Some(&mistake) => {
                log::debug!("Selection contains blank tile {:?}, revealing it alone", mistake);
                next.board[mistake.to_nd_index()] = TileState::Revealed;
            }
        }
        Ok(next)
    }

    pub fn recompute_line_completion(&self, puzzle: &Puzzle) -> Completion {
        let (width, height) = puzzle.size();
        Completion {
            cols: (0..width)
                .map(|x| LineCompletion::scan(puzzle, &self.board, Line::column(x)))
                .collect(),
            rows: (0..height)
                .map(|y| LineCompletion::scan(puzzle, &self.board, Line::row(y)))
                .collect(),
        }
    }

    /// Adopts `completion` and marks every hidden tile of a complete line.
    pub fn auto_fill_completed_lines(&self, completion: Completion) -> Self {
        let size = self.size();
        let mut board = self.board.clone();
        for line in completion.iter_complete_lines() {
            for coords in line.iter_cells(size) {
                let tile = &mut board[coords.to_nd_index()];
                if tile.is_hidden() {
                    *tile = TileState::Marked;
                }
            }
        }

        Self { board, completion }
    }

    /// Target coordinates in scan order, without duplicates.
    fn targets(&self, puzzle: &Puzzle, tiles: &[TileId]) -> Result<Vec<Coord2>> {
        if self.size() != puzzle.size() {
            return Err(PuzzleError::InvalidBoardShape);
        }

        let mut mask: Array2<bool> = Array2::default(puzzle.size().to_nd_index());
        for &id in tiles {
            mask[puzzle.coords_of(id)?.to_nd_index()] = true;
        }

        Ok(mask
            .indexed_iter()
            .filter(|&(_, &targeted)| targeted)
            .map(|((x, y), _)| (x as Coord, y as Coord))
            .collect())
    }
}

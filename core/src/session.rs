use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Progress {
    Ready,
    Active,
    Solved,
}

impl Progress {
    pub const fn is_solved(self) -> bool {
        matches!(self, Self::Solved)
    }
}

impl Default for Progress {
    fn default() -> Self {
        Self::Ready
    }
}

/// A puzzle together with the player's progress on it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Game {
    puzzle: Puzzle,
    state: PlayState,
    progress: Progress,
}

impl Game {
    pub fn new(puzzle: Puzzle) -> Self {
        let state = PlayState::new(&puzzle);
        let progress = if puzzle.painted_count() == 0 {
            Progress::Solved
        } else {
            Progress::Ready
        };
        Self {
            puzzle,
            state,
            progress,
        }
    }

    pub fn puzzle(&self) -> &Puzzle {
        &self.puzzle
    }

    pub fn state(&self) -> &PlayState {
        &self.state
    }

    pub fn progress(&self) -> Progress {
        self.progress
    }

    pub fn is_solved(&self) -> bool {
        self.progress.is_solved()
    }

    pub fn size(&self) -> Coord2 {
        self.puzzle.size()
    }

    pub fn tile_state_at(&self, coords: Coord2) -> TileState {
        self.state.tile_state_at(coords)
    }

    pub fn completion(&self) -> &Completion {
        self.state.completion()
    }

    /// Revealed blank tiles.
    pub fn mistakes(&self) -> CellCount {
        self.puzzle
            .iter_tiles()
            .filter(|tile| !tile.is_painted())
            .filter(|tile| self.tile_state_at(tile.coords()) == TileState::Revealed)
            .count() as CellCount
    }

    /// Painted tiles still waiting to be revealed.
    pub fn tiles_left(&self) -> CellCount {
        let revealed_painted = self
            .puzzle
            .iter_tiles()
            .filter(|tile| tile.is_painted())
            .filter(|tile| self.tile_state_at(tile.coords()) == TileState::Revealed)
            .count() as CellCount;
        self.puzzle.painted_count() - revealed_painted
    }

    pub fn commit(&mut self, commit: &Commit) -> Result<CommitOutcome> {
        if commit.tiles.is_empty() {
            log::warn!("{:?} committed with an empty selection", commit.action);
        }
        Ok(match commit.action {
            Action::Mark => CommitOutcome::Mark(self.mark(&commit.tiles)?),
            Action::Reveal => CommitOutcome::Reveal(self.reveal(&commit.tiles)?),
        })
    }

    pub fn mark(&mut self, tiles: &[TileId]) -> Result<MarkOutcome> {
        use MarkOutcome::*;

        let next = self.state.apply(&self.puzzle, Action::Mark, tiles)?;
        let outcome = if next == self.state {
            NoChange
        } else if next.count(TileState::Marked) > self.state.count(TileState::Marked) {
            Marked
        } else {
            Unmarked
        };

        log::debug!("Mark {} tiles: {:?}", tiles.len(), outcome);
        self.replace_state(next);
        Ok(outcome)
    }

    pub fn reveal(&mut self, tiles: &[TileId]) -> Result<RevealOutcome> {
        use RevealOutcome::*;

        let mistakes = self.mistakes();
        let next = self.state.apply(&self.puzzle, Action::Reveal, tiles)?;
        let changed = next != self.state;
        self.replace_state(next);

        let outcome = if !changed {
            NoChange
        } else if self.mistakes() > mistakes {
            Mistake
        } else if self.tiles_left() == 0 {
            Solved
        } else {
            Revealed
        };

        log::debug!("Reveal {} tiles: {:?}", tiles.len(), outcome);
        Ok(outcome)
    }

    fn replace_state(&mut self, next: PlayState) {
        if next == self.state {
            return;
        }

        self.state = next;
        self.progress = if self.tiles_left() == 0 {
            Progress::Solved
        } else {
            Progress::Active
        };
    }
}

use serde::{Deserialize, Serialize};

pub use color::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use gesture::*;
pub use observation::*;
pub use puzzle::*;
pub use selector::*;
pub use session::*;
pub use settings::*;
pub use tile::*;
pub use types::*;

mod color;
mod engine;
mod error;
mod generator;
mod gesture;
mod observation;
mod puzzle;
mod selector;
mod session;
mod settings;
mod tile;
mod types;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MarkOutcome {
    NoChange,
    Marked,
    Unmarked,
}

impl MarkOutcome {
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::NoChange)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RevealOutcome {
    NoChange,
    Revealed,
    /// A blank tile was revealed.
    Mistake,
    /// The last painted tile was revealed.
    Solved,
}

impl RevealOutcome {
    pub const fn has_update(self) -> bool {
        use RevealOutcome::*;
        match self {
            NoChange => false,
            Revealed => true,
            Mistake => true,
            Solved => true,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CommitOutcome {
    Mark(MarkOutcome),
    Reveal(RevealOutcome),
}

impl CommitOutcome {
    pub const fn has_update(self) -> bool {
        match self {
            Self::Mark(outcome) => outcome.has_update(),
            Self::Reveal(outcome) => outcome.has_update(),
        }
    }
}

use thiserror::Error;

use crate::TileId;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PuzzleError {
    #[error("Pixel buffer has {actual} bytes, expected {expected}")]
    InvalidBufferLength { expected: usize, actual: usize },
    #[error("Image has no pixels")]
    EmptyImage,
    #[error("Image is too large for a board")]
    ImageTooLarge,
    #[error("Unknown tile id {0}")]
    UnknownTile(TileId),
    #[error("Board shape does not match the puzzle")]
    InvalidBoardShape,
    #[error("Invalid color match rule: {0}")]
    InvalidColorMatch(String),
    #[error("Invalid settings: {0}")]
    InvalidSettings(String),
}

pub type Result<T> = core::result::Result<T, PuzzleError>;

use crate::*;
pub use image::*;

mod image;

pub trait PuzzleGenerator {
    fn generate(self, color_match: &ColorMatch) -> Result<Puzzle>;
}

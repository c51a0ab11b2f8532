use ndarray::Array2;

use super::*;

/// Decoded image in row-major RGBA order, four bytes per pixel.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RgbaImage<'a> {
    width: u32,
    height: u32,
    data: &'a [u8],
}

impl<'a> RgbaImage<'a> {
    pub fn new(width: u32, height: u32, data: &'a [u8]) -> Result<Self> {
        let expected = (width as usize)
            .checked_mul(height as usize)
            .and_then(|pixels| pixels.checked_mul(4))
            .ok_or(PuzzleError::ImageTooLarge)?;
        if data.len() != expected {
            return Err(PuzzleError::InvalidBufferLength {
                expected,
                actual: data.len(),
            });
        }

        Ok(Self {
            width,
            height,
            data,
        })
    }

    pub const fn width(&self) -> u32 {
        self.width
    }

    pub const fn height(&self) -> u32 {
        self.height
    }

    /// RGBA bytes at `(x, y)`, `None` outside the image.
    pub fn pixel(&self, x: usize, y: usize) -> Option<[u8; 4]> {
        if x >= self.width as usize || y >= self.height as usize {
            return None;
        }
        let offset = (x + y * self.width as usize) * 4;
        self.data.get(offset..offset + 4)?.try_into().ok()
    }
}

/// Turns every pixel into one tile: blank where `color_match` matches, painted
/// with the pixel's color otherwise.
impl PuzzleGenerator for RgbaImage<'_> {
    fn generate(self, color_match: &ColorMatch) -> Result<Puzzle> {
        let (width, height) = (self.width as usize, self.height as usize);
        if width == 0 || height == 0 {
            return Err(PuzzleError::EmptyImage);
        }
        if Coord::try_from(width).is_err() || Coord::try_from(height).is_err() {
            return Err(PuzzleError::ImageTooLarge);
        }

        log::debug!(
            "Generating puzzle from {}x{} image, blank rule {}",
            width,
            height,
            color_match
        );

        let colors = Array2::from_shape_fn((width, height), |(x, y)| {
            self.pixel(x, y)
                .filter(|&pixel| !color_match.is_blank(pixel))
                .map(Rgba::from_pixel)
        });

        Puzzle::from_colors(colors)
    }
}

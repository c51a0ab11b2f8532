use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::*;

/// Ordered run lengths of consecutive painted tiles along one line.
pub type Clue = SmallVec<[Coord; 8]>;

/// Run-length encodes painted cells, emitting a run each time a blank cell or
/// the end of the line follows at least one painted cell.
pub fn run_lengths(cells: impl IntoIterator<Item = bool>) -> Clue {
    let mut clue = Clue::new();
    let mut length: Coord = 0;

    for painted in cells {
        if painted {
            length += 1;
        } else if length > 0 {
            clue.push(length);
            length = 0;
        }
    }
    if length > 0 {
        clue.push(length);
    }

    clue
}

/// Immutable puzzle definition: the solution board and its clues.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Puzzle {
    tiles: Array2<Tile>,
    cols: Vec<Clue>,
    rows: Vec<Clue>,
    painted_count: CellCount,
}

impl Puzzle {
    /// Builds a puzzle from its solution, indexed `[x][y]`; `None` is a blank tile.
    pub fn from_colors(colors: Array2<Option<Rgba>>) -> Result<Self> {
        let (width, height) = colors.dim();
        if width == 0 || height == 0 {
            return Err(PuzzleError::EmptyImage);
        }
        if Coord::try_from(width).is_err()
            || Coord::try_from(height).is_err()
            || width.saturating_mul(height) > TileId::MAX as usize
        {
            return Err(PuzzleError::ImageTooLarge);
        }

        let tiles = Array2::from_shape_fn((width, height), |(x, y)| Tile {
            id: (x * height + y) as TileId,
            x: x as Coord,
            y: y as Coord,
            color: colors[(x, y)],
        });
        let size = tiles.board_size();

        let encode = |line: Line| {
            run_lengths(
                line.iter_cells(size)
                    .map(|coords| tiles[coords.to_nd_index()].is_painted()),
            )
        };
        let cols = (0..size.0).map(|x| encode(Line::column(x))).collect();
        let rows = (0..size.1).map(|y| encode(Line::row(y))).collect();
        let painted_count = tiles.iter().filter(|tile| tile.is_painted()).count() as CellCount;

        log::debug!(
            "Built {}x{} puzzle with {} painted tiles",
            size.0,
            size.1,
            painted_count
        );

        Ok(Self {
            tiles,
            cols,
            rows,
            painted_count,
        })
    }

    /// Builds a puzzle where every `true` cell is painted opaque black.
    pub fn from_mask(mask: Array2<bool>) -> Result<Self> {
        const INK: Rgba = Rgba::new(0, 0, 0, 1.);
        Self::from_colors(mask.mapv(|painted| painted.then_some(INK)))
    }

    pub fn size(&self) -> Coord2 {
        self.tiles.board_size()
    }

    pub fn width(&self) -> Coord {
        self.size().0
    }

    pub fn height(&self) -> Coord {
        self.size().1
    }

    pub fn total_tiles(&self) -> CellCount {
        self.tiles.len() as CellCount
    }

    pub fn painted_count(&self) -> CellCount {
        self.painted_count
    }

    pub fn tile_id(&self, (x, y): Coord2) -> TileId {
        TileId::from(x) * TileId::from(self.height()) + TileId::from(y)
    }

    pub fn coords_of(&self, id: TileId) -> Result<Coord2> {
        if id >= self.total_tiles() {
            return Err(PuzzleError::UnknownTile(id));
        }
        let height = TileId::from(self.height());
        Ok(((id / height) as Coord, (id % height) as Coord))
    }

    pub fn tile(&self, id: TileId) -> Result<&Tile> {
        let coords = self.coords_of(id)?;
        Ok(&self[coords])
    }

    pub fn is_painted(&self, coords: Coord2) -> bool {
        self[coords].is_painted()
    }

    pub fn cols(&self) -> &[Clue] {
        &self.cols
    }

    pub fn rows(&self) -> &[Clue] {
        &self.rows
    }

    pub fn clue(&self, line: Line) -> &Clue {
        match line.axis {
            Axis::Column => &self.cols[usize::from(line.index)],
            Axis::Row => &self.rows[usize::from(line.index)],
        }
    }

    /// Tiles in scan order: ascending `x`, then ascending `y`.
    pub fn iter_tiles(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter()
    }

    pub fn tiles(&self) -> &Array2<Tile> {
        &self.tiles
    }
}

impl Index<Coord2> for Puzzle {
    type Output = Tile;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.tiles[coords.to_nd_index()]
    }
}

use ndarray::Array2;
use serde::{Deserialize, Serialize};

/// Single coordinate axis used for board width, height, and positions.
pub type Coord = u16;

/// Count type used for tile counts and clue run lengths summed over a board.
pub type CellCount = u32;

/// Two-dimensional coordinates `(x, y)`.
pub type Coord2 = (Coord, Coord);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

/// Size of a board-shaped array as `(width, height)`.
pub trait BoardSize {
    fn board_size(&self) -> Coord2;
}

impl<T> BoardSize for Array2<T> {
    fn board_size(&self) -> Coord2 {
        let (w, h) = self.dim();
        // saturates; puzzles never exceed `Coord` in either dimension
        (
            Coord::try_from(w).unwrap_or(Coord::MAX),
            Coord::try_from(h).unwrap_or(Coord::MAX),
        )
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    /// Fixed `x`, varying `y`.
    Column,
    /// Fixed `y`, varying `x`.
    Row,
}

/// One column or row of the board.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Line {
    pub axis: Axis,
    pub index: Coord,
}

impl Line {
    pub const fn column(x: Coord) -> Self {
        Self {
            axis: Axis::Column,
            index: x,
        }
    }

    pub const fn row(y: Coord) -> Self {
        Self {
            axis: Axis::Row,
            index: y,
        }
    }

    /// Number of cells along this line on a board of the given size.
    pub const fn len(self, (width, height): Coord2) -> Coord {
        match self.axis {
            Axis::Column => height,
            Axis::Row => width,
        }
    }

    pub const fn is_empty(self, size: Coord2) -> bool {
        self.len(size) == 0
    }

    /// Coordinates of the cell at `offset` along this line.
    pub const fn at(self, offset: Coord) -> Coord2 {
        match self.axis {
            Axis::Column => (self.index, offset),
            Axis::Row => (offset, self.index),
        }
    }

    /// Iterates the line's cells in ascending order.
    pub fn iter_cells(self, size: Coord2) -> LineIter {
        LineIter {
            line: self,
            next: 0,
            end: self.len(size),
        }
    }
}

#[derive(Debug)]
pub struct LineIter {
    line: Line,
    next: Coord,
    end: Coord,
}

impl Iterator for LineIter {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.end {
            return None;
        }
        let coords = self.line.at(self.next);
        self.next += 1;
        Some(coords)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = usize::from(self.end - self.next);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for LineIter {}

/// Every column `0..width` followed by every row `0..height`.
pub fn iter_lines((width, height): Coord2) -> impl Iterator<Item = Line> {
    (0..width)
        .map(Line::column)
        .chain((0..height).map(Line::row))
}

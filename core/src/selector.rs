use serde::{Deserialize, Serialize};

use crate::*;

/// Device (client) coordinates of a pointer.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Device-space bounding box of the first tile. Every tile is assumed to have
/// the same size, laid out edge to edge starting at this one.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CellGeometry {
    pub top: f64,
    pub left: f64,
    pub width: f64,
    pub height: f64,
}

impl CellGeometry {
    pub const fn new(top: f64, left: f64, width: f64, height: f64) -> Self {
        Self {
            top,
            left,
            width,
            height,
        }
    }

    pub fn is_degenerate(&self) -> bool {
        !(self.width > 0. && self.height > 0.)
    }

    /// Grid coordinates under `point`, clamped onto a board of `size`.
    pub fn cell_at(&self, point: Point, (width, height): Coord2) -> Coord2 {
        (
            grid_index(point.x, self.left, self.width, width),
            grid_index(point.y, self.top, self.height, height),
        )
    }
}

fn grid_index(coord: f64, origin: f64, cell_size: f64, dimension: Coord) -> Coord {
    let max = f64::from(dimension.saturating_sub(1));
    // NaN from a degenerate geometry saturates to 0 in the cast
    ((coord - origin) / cell_size).floor().clamp(0., max) as Coord
}

/// Source of the first tile's bounding box, measured once the board is laid out.
pub trait GeometrySource {
    fn first_cell_bounds(&self) -> CellGeometry;
}

impl<F> GeometrySource for F
where
    F: Fn() -> CellGeometry,
{
    fn first_cell_bounds(&self) -> CellGeometry {
        self()
    }
}

impl GeometrySource for CellGeometry {
    fn first_cell_bounds(&self) -> CellGeometry {
        *self
    }
}

/// Ids of the tiles a drag covers, in order from the start tile outwards.
pub type Selection = Vec<TileId>;

/// Maps a drag from `start` to `current` onto one straight run of tiles.
///
/// The dominant axis of the drag picks the line: a mostly horizontal drag
/// selects along the start tile's row, anything else (ties included) along its
/// column. Both ends are clamped onto the board, so the result is never empty
/// and always contiguous.
pub fn select_line(
    start: Point,
    current: Point,
    geometry: &CellGeometry,
    puzzle: &Puzzle,
) -> Selection {
    let size = puzzle.size();
    let (start_x, start_y) = geometry.cell_at(start, size);
    let (end_x, end_y) = geometry.cell_at(current, size);

    let (line, from, to) = if (current.x - start.x).abs() > (current.y - start.y).abs() {
        (Line::row(start_y), start_x, end_x)
    } else {
        (Line::column(start_x), start_y, end_y)
    };

    (0..=from.abs_diff(to))
        .map(|step| if from <= to { from + step } else { from - step })
        .map(|offset| puzzle.tile_id(line.at(offset)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::puzzle::tests::puzzle;
    use std::collections::BTreeSet;

    const GEOMETRY: CellGeometry = CellGeometry::new(100., 50., 10., 20.);

    fn board() -> Puzzle {
        puzzle(&[
            "#.##.", //
            "#..#.", //
            "####.", //
            "....#", //
        ])
    }

    /// Center of tile `(x, y)` in device coordinates.
    fn at(x: Coord, y: Coord) -> Point {
        Point::new(55. + 10. * f64::from(x), 110. + 20. * f64::from(y))
    }

    fn coords(puzzle: &Puzzle, selection: &Selection) -> Vec<Coord2> {
        selection
            .iter()
            .map(|&id| puzzle.coords_of(id).unwrap())
            .collect()
    }

    #[test]
    fn no_movement_selects_start_tile() {
        let puzzle = board();
        let selection = select_line(at(2, 1), at(2, 1), &GEOMETRY, &puzzle);

        assert_eq!(coords(&puzzle, &selection), vec![(2, 1)]);
    }

    #[test]
    fn horizontal_drag_walks_the_row() {
        let puzzle = board();

        let right = select_line(at(1, 2), at(4, 2), &GEOMETRY, &puzzle);
        let left = select_line(at(3, 0), at(0, 0), &GEOMETRY, &puzzle);

        assert_eq!(coords(&puzzle, &right), vec![(1, 2), (2, 2), (3, 2), (4, 2)]);
        assert_eq!(coords(&puzzle, &left), vec![(3, 0), (2, 0), (1, 0), (0, 0)]);
    }

    #[test]
    fn vertical_drag_walks_the_column() {
        let puzzle = board();

        let down = select_line(at(4, 0), at(4, 3), &GEOMETRY, &puzzle);
        let up = select_line(at(0, 2), at(0, 1), &GEOMETRY, &puzzle);

        assert_eq!(coords(&puzzle, &down), vec![(4, 0), (4, 1), (4, 2), (4, 3)]);
        assert_eq!(coords(&puzzle, &up), vec![(0, 2), (0, 1)]);
    }

    #[test]
    fn dominant_axis_wins_and_ties_go_vertical() {
        let puzzle = board();
        let start = at(1, 1);

        // drifting off the row does not change the fixed axis
        let drift = Point::new(start.x + 20., start.y + 19.);
        let mostly_x = select_line(start, drift, &GEOMETRY, &puzzle);
        assert_eq!(coords(&puzzle, &mostly_x), vec![(1, 1), (2, 1), (3, 1)]);

        let diagonal = Point::new(start.x + 15., start.y + 15.);
        let tie = select_line(start, diagonal, &GEOMETRY, &puzzle);
        assert_eq!(coords(&puzzle, &tie), vec![(1, 1), (1, 2)]);
    }

    #[test]
    fn endpoints_are_clamped_onto_the_board() {
        let puzzle = board();

        let far_right = Point::new(10_000., at(3, 3).y);
        let far_up = Point::new(at(2, 1).x, -500.);

        let past_right = select_line(at(3, 3), far_right, &GEOMETRY, &puzzle);
        let past_top = select_line(at(2, 1), far_up, &GEOMETRY, &puzzle);

        assert_eq!(coords(&puzzle, &past_right), vec![(3, 3), (4, 3)]);
        assert_eq!(coords(&puzzle, &past_top), vec![(2, 1), (2, 0)]);
    }

    #[test]
    fn selections_are_contiguous_without_duplicates() {
        let puzzle = board();
        let targets = [
            Point::new(0., 0.),
            Point::new(49., 190.),
            Point::new(104., 99.),
            Point::new(77.7, 131.3),
            Point::new(1e6, -1e6),
        ];

        for start in targets {
            for end in targets {
                let selected = coords(&puzzle, &select_line(start, end, &GEOMETRY, &puzzle));
                let unique: BTreeSet<_> = selected.iter().collect();
                assert_eq!(unique.len(), selected.len());

                let fixed_x = selected.iter().all(|c| c.0 == selected[0].0);
                let fixed_y = selected.iter().all(|c| c.1 == selected[0].1);
                assert!(fixed_x || fixed_y);

                for pair in selected.windows(2) {
                    let step = if fixed_x {
                        i32::from(pair[1].1) - i32::from(pair[0].1)
                    } else {
                        i32::from(pair[1].0) - i32::from(pair[0].0)
                    };
                    assert_eq!(step.abs(), 1, "{start:?} -> {end:?}: {selected:?}");
                }
            }
        }
    }

    #[test]
    fn closures_provide_geometry() {
        let source = || GEOMETRY;

        assert_eq!(source.first_cell_bounds(), GEOMETRY);
        assert!(CellGeometry::default().is_degenerate());
    }
}

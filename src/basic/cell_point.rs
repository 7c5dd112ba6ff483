use std::fmt::{Debug, Formatter};

use crate::basic::{Heading, Point};

/// Position of a cell on the board, (0, 0) is the top-left cell
/// of the playable area
#[derive(Eq, PartialEq, Copy, Clone, Hash, Add, Sub)]
pub struct CellPoint {
    pub x: i32,
    pub y: i32,
}

impl Debug for CellPoint {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "<{}, {}>", self.x, self.y)
    }
}

impl CellPoint {
    #[must_use]
    pub fn step(self, heading: Heading) -> Self {
        self.translate(heading, 1)
    }

    #[must_use]
    pub fn translate(self, heading: Heading, dist: i32) -> Self {
        let (dx, dy) = heading.delta();
        Self {
            x: self.x + dx * dist,
            y: self.y + dy * dist,
        }
    }

    /// Top-left pixel of the cell relative to the origin of the board
    pub fn to_point(self, cell_side: f32) -> Point {
        Point {
            x: self.x as f32 * cell_side,
            y: self.y as f32 * cell_side,
        }
    }
}

/// Size of the playable area in cells
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct GridDim {
    pub width: i32,
    pub height: i32,
}

impl GridDim {
    pub fn contains(self, point: CellPoint) -> bool {
        (0..self.width).contains(&point.x) && (0..self.height).contains(&point.y)
    }

    pub fn num_cells(self) -> usize {
        (self.width.max(0) * self.height.max(0)) as usize
    }

    /// Row-major index of a cell, only meaningful for cells inside the grid
    pub fn index_of(self, point: CellPoint) -> usize {
        (point.y * self.width + point.x) as usize
    }

    pub fn point_at(self, idx: usize) -> CellPoint {
        let idx = idx as i32;
        CellPoint {
            x: idx % self.width,
            y: idx / self.width,
        }
    }
}

#[test]
fn test_translate() {
    let origin = CellPoint { x: 5, y: 5 };
    assert_eq!(origin.step(Heading::Right), CellPoint { x: 6, y: 5 });
    assert_eq!(origin.step(Heading::Up), CellPoint { x: 5, y: 4 });
    assert_eq!(origin.translate(Heading::Left, 3), CellPoint { x: 2, y: 5 });
    assert_eq!(origin.translate(Heading::Down, 2) - origin, CellPoint { x: 0, y: 2 });
}

#[test]
fn test_grid_bounds() {
    let grid = GridDim { width: 4, height: 3 };
    assert!(grid.contains(CellPoint { x: 0, y: 0 }));
    assert!(grid.contains(CellPoint { x: 3, y: 2 }));
    assert!(!grid.contains(CellPoint { x: 4, y: 0 }));
    assert!(!grid.contains(CellPoint { x: 0, y: 3 }));
    assert!(!grid.contains(CellPoint { x: -1, y: 1 }));
    assert!(!grid.contains(CellPoint { x: 1, y: -1 }));
}

#[test]
fn test_index_round_trip() {
    let grid = GridDim { width: 7, height: 5 };
    for idx in 0..grid.num_cells() {
        let point = grid.point_at(idx);
        assert!(grid.contains(point));
        assert_eq!(grid.index_of(point), idx);
    }
}

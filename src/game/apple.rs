use itertools::Itertools;
use log::{debug, warn};
use rand::distributions::uniform::SampleRange;
use rand::Rng;

use crate::basic::{CellPoint, GridDim};

pub struct Apple {
    pub pos: CellPoint,
}

impl Apple {
    /// Place a new apple on a random cell not in `occupied`
    pub fn spawn(
        grid: GridDim,
        occupied: impl IntoIterator<Item = CellPoint>,
        rng: &mut impl Rng,
    ) -> Option<Self> {
        random_free_spot(grid, occupied, rng).map(|pos| Self { pos })
    }

    /// Move to a random cell that is neither in `occupied` nor the
    /// current one, the apple stays put if the board is full
    pub fn relocate(
        &mut self,
        grid: GridDim,
        occupied: impl IntoIterator<Item = CellPoint>,
        rng: &mut impl Rng,
    ) {
        let occupied = occupied.into_iter().chain(std::iter::once(self.pos));
        match random_free_spot(grid, occupied, rng) {
            Some(pos) => {
                debug!("apple moved from {:?} to {:?}", self.pos, pos);
                self.pos = pos;
            }
            None => warn!("no free cell left for the apple, leaving it at {:?}", self.pos),
        }
    }
}

/// Uniformly random cell of `grid` that is not in `occupied`,
/// points outside the grid are ignored
pub fn random_free_spot(
    grid: GridDim,
    occupied: impl IntoIterator<Item = CellPoint>,
    rng: &mut impl Rng,
) -> Option<CellPoint> {
    let occupied_indices = occupied
        .into_iter()
        .filter(|point| grid.contains(*point))
        .map(|point| grid.index_of(point))
        .sorted_unstable()
        .dedup()
        .collect_vec();

    let free_spaces = grid.num_cells() - occupied_indices.len();
    if free_spaces == 0 {
        return None;
    }

    // pick the n-th free cell by skipping over occupied indices in order
    let mut new_idx = (0..free_spaces).sample_single(rng);
    for idx in occupied_indices {
        if idx <= new_idx {
            new_idx += 1;
        }
    }

    assert!(new_idx < grid.num_cells());
    Some(grid.point_at(new_idx))
}

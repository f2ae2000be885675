use ndarray::{ArrayD, IxDyn};
use rand::prelude::*;

use crate::*;

/// Places the MINE bits for a fresh board. The config is already validated:
/// the mine count fits the grid volume.
pub trait MinePlacer {
    fn place(self, config: &GameConfig) -> ArrayD<CellFlags>;
}

/// Uniform placement by rejection sampling: draw every axis independently,
/// accept the cell only if it does not already hold a mine, repeat until the
/// requested count is placed. Cheap while the board is sparse; the expected
/// cost of a single draw grows toward `O(volume)` as the board fills up.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RandomPlacer {
    seed: Option<u64>,
}

impl RandomPlacer {
    pub const fn new(seed: Option<u64>) -> Self {
        Self { seed }
    }
}

impl MinePlacer for RandomPlacer {
    fn place(self, config: &GameConfig) -> ArrayD<CellFlags> {
        let mut cells: ArrayD<CellFlags> = ArrayD::default(IxDyn(config.shape()));

        // A completely mined grid is the one case where rejection sampling is
        // not guaranteed to terminate, so fill it outright.
        if config.mines() == cells.len() {
            log::warn!(
                "grid of {} cells is fully mined, skipping random placement",
                cells.len()
            );
            cells.fill(CellFlags::MINE);
            return cells;
        }

        let mut rng = match self.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_rng(&mut rand::rng()),
        };

        let mut placed = 0;
        let mut draw = Pos::with_capacity(config.shape().len());
        while placed < config.mines() {
            draw.clear();
            for &extent in config.shape() {
                draw.push(rng.random_range(0..extent));
            }
            let cell = &mut cells[draw.as_slice()];
            if !cell.is_mine() {
                cell.insert(CellFlags::MINE);
                placed += 1;
            }
        }
        cells
    }
}

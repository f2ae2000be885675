use std::collections::VecDeque;

use hashbrown::HashSet;
use ndarray::{ArrayD, Dimension, IxDyn};
use serde::{Deserialize, Serialize};

use crate::*;

/// The playing field: a hidden mine/flag grid and the player-facing display
/// grid, kept in lockstep by the mutating operations.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    config: GameConfig,
    cells: ArrayD<CellFlags>,
    display: ArrayD<DisplaySlot>,
}

impl Board {
    /// Builds a board with `mines` mines placed uniformly at random over the
    /// given grid extents; a fixed `seed` reproduces the same layout.
    pub fn new(shape: &[usize], mines: usize, seed: Option<u64>) -> Result<Self> {
        let config = GameConfig::new(shape, mines)?;
        Ok(Self::with_placer(config, RandomPlacer::new(seed)))
    }

    /// Builds a board with a caller-supplied placement strategy.
    pub fn with_placer(config: GameConfig, placer: impl MinePlacer) -> Self {
        let cells = placer.place(&config);
        let display = ArrayD::default(IxDyn(config.shape()));
        Self {
            config,
            cells,
            display,
        }
    }

    /// Builds a board with mines at exactly the given positions, for tests
    /// and replays. Duplicate positions collapse into one mine.
    pub fn with_mines(shape: &[usize], mines: &[&[usize]]) -> Result<Self> {
        GameConfig::new(shape, 0)?;
        let mut cells: ArrayD<CellFlags> = ArrayD::default(IxDyn(shape));
        for &pos in mines {
            if pos.len() != shape.len() || pos.iter().zip(shape).any(|(&c, &e)| c >= e) {
                return Err(GameError::InvalidCoords);
            }
            cells[pos].insert(CellFlags::MINE);
        }
        // Size the config from the bit grid, after duplicates collapsed.
        let placed = cells.iter().filter(|cell| cell.is_mine()).count();
        Ok(Self {
            config: GameConfig::new(shape, placed)?,
            display: ArrayD::default(IxDyn(shape)),
            cells,
        })
    }

    pub fn shape(&self) -> &[usize] {
        self.config.shape()
    }

    pub fn mine_count(&self) -> usize {
        self.config.mines()
    }

    /// The full player-facing grid, for renderers.
    pub fn display(&self) -> &ArrayD<DisplaySlot> {
        &self.display
    }

    pub fn display_at(&self, pos: &[usize]) -> Result<DisplaySlot> {
        let pos = self.validate(pos)?;
        Ok(self.display[pos.as_slice()])
    }

    pub fn is_mine(&self, pos: &[usize]) -> Result<bool> {
        let pos = self.validate(pos)?;
        Ok(self.cells[pos.as_slice()].is_mine())
    }

    pub fn is_flagged(&self, pos: &[usize]) -> Result<bool> {
        let pos = self.validate(pos)?;
        Ok(self.cells[pos.as_slice()].is_flagged())
    }

    /// Every mine coordinate, for end-of-game presentation.
    pub fn mine_positions(&self) -> impl Iterator<Item = Pos> + '_ {
        self.cells
            .indexed_iter()
            .filter(|(_, cell)| cell.is_mine())
            .map(|(ix, _)| Pos::from_slice(ix.slice()))
    }

    /// Marks a hidden cell as flagged. A no-op on an already flagged cell;
    /// fails on a revealed one.
    pub fn add_flag(&mut self, pos: &[usize]) -> Result<MarkOutcome> {
        let pos = self.validate(pos)?;
        match self.display[pos.as_slice()] {
            DisplaySlot::Revealed(_) => Err(GameError::CellRevealed),
            DisplaySlot::Flagged => Ok(MarkOutcome::NoChange),
            DisplaySlot::Hidden => {
                self.cells[pos.as_slice()].insert(CellFlags::FLAGGED);
                self.display[pos.as_slice()] = DisplaySlot::Flagged;
                Ok(MarkOutcome::Changed)
            }
        }
    }

    /// Clears a flag. Safe on an unflagged cell: the flag bit is cleared
    /// explicitly, never toggled, so repeated calls cannot desynchronize the
    /// grids.
    pub fn remove_flag(&mut self, pos: &[usize]) -> Result<MarkOutcome> {
        let pos = self.validate(pos)?;
        match self.display[pos.as_slice()] {
            DisplaySlot::Revealed(_) => Err(GameError::CellRevealed),
            DisplaySlot::Hidden => Ok(MarkOutcome::NoChange),
            DisplaySlot::Flagged => {
                self.cells[pos.as_slice()].remove(CellFlags::FLAGGED);
                self.display[pos.as_slice()] = DisplaySlot::Hidden;
                Ok(MarkOutcome::Changed)
            }
        }
    }

    pub fn toggle_flag(&mut self, pos: &[usize]) -> Result<MarkOutcome> {
        if self.is_flagged(pos)? {
            self.remove_flag(pos)
        } else {
            self.add_flag(pos)
        }
    }

    /// Reveals a single cell. Flagged cells and mines are reported without
    /// touching the display; a clear cell shows its adjacent-mine count.
    pub fn reveal(&mut self, pos: &[usize]) -> Result<RevealOutcome> {
        let pos = self.validate(pos)?;
        Ok(self.reveal_cell(&pos))
    }

    /// Reveals `origin` and, when it has no adjacent mines, flood-fills the
    /// connected zero-count region plus its one-cell border.
    ///
    /// Runs on an explicit frontier with a visited set, so the call stack
    /// stays flat no matter how large the region is and every coordinate is
    /// revealed at most once. Returns the outcome at `origin`, which is what
    /// the caller checks for a mine hit.
    pub fn flood_reveal(&mut self, origin: &[usize]) -> Result<RevealOutcome> {
        let origin = self.validate(origin)?;
        let origin_outcome = self.reveal_cell(&origin);
        if origin_outcome != RevealOutcome::Clear(0) {
            return Ok(origin_outcome);
        }

        let mut visited: HashSet<Pos> = HashSet::new();
        visited.insert(origin.clone());
        let mut frontier: VecDeque<Pos> = self.cells.iter_neighbors(&origin).collect();

        while let Some(pos) = frontier.pop_front() {
            if !visited.insert(pos.clone()) {
                continue;
            }
            if self.reveal_cell(&pos) == RevealOutcome::Clear(0) {
                frontier.extend(
                    self.cells
                        .iter_neighbors(&pos)
                        .filter(|neighbor| !visited.contains(neighbor)),
                );
            }
        }
        Ok(origin_outcome)
    }

    /// True exactly when the flagged set equals the mine set.
    pub fn has_won(&self) -> bool {
        self.cells
            .iter()
            .all(|cell| cell.is_mine() == cell.is_flagged())
    }

    /// Reveals every cell that is neither flagged nor a mine, for showing the
    /// final board. Mines and flags are left as they are.
    pub fn reveal_all(&mut self) {
        let targets: Vec<Pos> = self
            .cells
            .indexed_iter()
            .filter(|(_, cell)| !cell.is_mine() && !cell.is_flagged())
            .map(|(ix, _)| Pos::from_slice(ix.slice()))
            .collect();
        for pos in targets {
            self.reveal_cell(&pos);
        }
    }

    fn reveal_cell(&mut self, pos: &Pos) -> RevealOutcome {
        let cell = self.cells[pos.as_slice()];
        if cell.is_flagged() {
            return RevealOutcome::Flagged;
        }
        if cell.is_mine() {
            return RevealOutcome::Mine;
        }
        let count = self.adjacent_mines(pos);
        self.display[pos.as_slice()] = DisplaySlot::Revealed(count);
        RevealOutcome::Clear(count)
    }

    fn adjacent_mines(&self, pos: &Pos) -> usize {
        self.cells
            .iter_neighbors(pos)
            .filter(|neighbor| self.cells[neighbor.as_slice()].is_mine())
            .count()
    }

    fn validate(&self, pos: &[usize]) -> Result<Pos> {
        let shape = self.config.shape();
        if pos.len() != shape.len() || pos.iter().zip(shape).any(|(&coord, &extent)| coord >= extent)
        {
            return Err(GameError::InvalidCoords);
        }
        Ok(Pos::from_slice(pos))
    }
}

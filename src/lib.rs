use serde::{Deserialize, Serialize};

pub use board::*;
pub use cell::*;
pub use error::*;
pub use generator::*;
pub use types::*;

mod board;
mod cell;
mod error;
mod generator;
mod types;

/// Validated board parameters: grid extents and mine count.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    shape: Shape,
    mines: usize,
}

impl GameConfig {
    /// Checks that the grid has at least one axis, every extent is positive,
    /// the volume fits `usize`, and the mines fit the volume.
    pub fn new(shape: &[usize], mines: usize) -> Result<Self> {
        if shape.is_empty() || shape.iter().any(|&extent| extent == 0) {
            return Err(GameError::InvalidBoardShape);
        }
        let total = volume(shape).ok_or(GameError::InvalidBoardShape)?;
        if mines > total {
            return Err(GameError::TooManyMines);
        }
        Ok(Self {
            shape: Shape::from_slice(shape),
            mines,
        })
    }

    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    pub fn mines(&self) -> usize {
        self.mines
    }

    /// Grid volume; construction already proved this cannot overflow.
    pub fn total_cells(&self) -> usize {
        self.shape.iter().product()
    }
}

/// Outcome of a flagging operation.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MarkOutcome {
    NoChange,
    Changed,
}

impl MarkOutcome {
    /// Whether this outcome could have caused a visible update.
    pub const fn has_update(self) -> bool {
        matches!(self, Self::Changed)
    }
}

/// Outcome of revealing a single cell.
///
/// `Flagged` and `Mine` leave the display untouched and carry no count, so
/// neither can ever be mistaken for `Clear(0)`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RevealOutcome {
    Flagged,
    Mine,
    Clear(usize),
}

impl RevealOutcome {
    pub const fn count(self) -> Option<usize> {
        match self {
            Self::Clear(count) => Some(count),
            _ => None,
        }
    }

    pub const fn is_mine(self) -> bool {
        matches!(self, Self::Mine)
    }
}

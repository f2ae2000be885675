use bitflags::bitflags;
use serde::{Deserialize, Serialize};

bitflags! {
    /// Hidden per-cell state: mine placement is fixed at construction, the
    /// flag bit is toggled by the player.
    #[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
    pub struct CellFlags: u8 {
        const MINE = 0b01;
        const FLAGGED = 0b10;
    }
}

impl Default for CellFlags {
    fn default() -> Self {
        Self::empty()
    }
}

impl CellFlags {
    pub const fn is_mine(self) -> bool {
        self.contains(Self::MINE)
    }

    pub const fn is_flagged(self) -> bool {
        self.contains(Self::FLAGGED)
    }
}

/// Player-visible state of a single cell.
///
/// `Hidden` and `Flagged` are distinct variants rather than reserved count
/// values, so they can never collide with a `Revealed` count.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DisplaySlot {
    Hidden,
    Flagged,
    Revealed(usize),
}

impl DisplaySlot {
    /// Whether the cell is visually closed.
    pub const fn is_closed(self) -> bool {
        matches!(self, Self::Hidden | Self::Flagged)
    }
}

impl Default for DisplaySlot {
    fn default() -> Self {
        Self::Hidden
    }
}

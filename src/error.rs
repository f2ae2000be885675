use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Coordinates are outside the grid or have the wrong dimension count")]
    InvalidCoords,
    #[error("More mines than cells on the board")]
    TooManyMines,
    #[error("Grid shape must have at least one axis, every extent positive")]
    InvalidBoardShape,
    #[error("Cannot flag or unflag an already revealed cell")]
    CellRevealed,
}

pub type Result<T> = core::result::Result<T, GameError>;

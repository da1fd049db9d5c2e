//! Error types for the game engines.

use thiserror::Error;

/// Errors surfaced by engine construction and game start.
///
/// Rule rejections (illegal Hanoi moves, out-of-bounds Life toggles) are
/// silent no-ops and never show up here.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// A Life grid needs at least one row and one column.
    #[error("invalid grid dimension: {rows}x{columns}")]
    InvalidDimension { rows: usize, columns: usize },

    /// Requested more disks than the game allows.
    #[error("max number of disks is {max}, requested {requested}")]
    TooManyDisks { requested: u8, max: u8 },

    /// No grid-size preset at this index.
    #[error("unknown grid size preset: {0}")]
    UnknownPreset(usize),

    /// A Hanoi game needs at least one disk.
    #[error("a game needs at least one disk")]
    NoDisks,
}

pub type Result<T> = std::result::Result<T, GameError>;

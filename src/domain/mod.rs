mod cell;
mod life_grid;
mod patterns;
mod rod;
mod hanoi;
mod algorithm;
pub mod error;
pub mod solver;

pub use cell::Cell;
pub use life_grid::LifeGrid;
pub use patterns::{Pattern, presets};
pub use rod::{Disk, Rod, RodId};
pub use hanoi::{HanoiGame, TouchOutcome};
pub use algorithm::Algorithm;
pub use error::{GameError, Result};

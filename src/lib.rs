// Domain layer - Rule engines
pub mod domain;

// Application layer - Sessions a front-end drives
pub mod application;

pub mod config;

// Re-exports for convenience
pub use domain::{
    Algorithm, Cell, Disk, GameError, HanoiGame, LifeGrid, Pattern, Result, Rod, RodId,
    TouchOutcome, presets,
};
pub use application::{HanoiSession, LifeSession};

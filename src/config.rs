//! Default settings for both games.

/// Board size used when no other size is chosen
pub const DEFAULT_ROWS: usize = 10;
pub const DEFAULT_COLUMNS: usize = 8;

/// Grid size options as (rows, columns, label)
pub const GRID_SIZES: &[(usize, usize, &str)] = &[
    (10, 8, "10×8"),
    (50, 50, "50×50"),
    (100, 100, "100×100"),
    (500, 500, "500×500"),
    (1000, 1000, "1000×1000"),
];

/// Chance of a cell being alive after `randomize`
pub const RANDOM_DENSITY: f64 = 0.3;

/// Generations per second while a Life session is running
pub const DEFAULT_UPDATES_PER_SECOND: f32 = 10.0;
pub const MIN_UPDATES_PER_SECOND: f32 = 1.0;
pub const MAX_UPDATES_PER_SECOND: f32 = 60.0;

/// Upper bound on Hanoi disks unless a game is built with its own limit
pub const MAX_DISKS: u8 = 6;

/// Disk count for a new Hanoi game when none is chosen
pub const DEFAULT_DISKS: u8 = 6;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{HanoiGame, LifeGrid};

    #[test]
    fn test_defaults_are_accepted() {
        assert!(LifeGrid::new(DEFAULT_ROWS, DEFAULT_COLUMNS).is_ok());
        assert!(HanoiGame::new(DEFAULT_DISKS).is_ok());
        assert!(DEFAULT_DISKS <= MAX_DISKS);
        assert!((MIN_UPDATES_PER_SECOND..=MAX_UPDATES_PER_SECOND).contains(&DEFAULT_UPDATES_PER_SECOND));
    }

    #[test]
    fn test_grid_sizes_are_valid() {
        for &(rows, columns, label) in GRID_SIZES {
            assert!(rows > 0 && columns > 0, "{}", label);
        }
    }
}

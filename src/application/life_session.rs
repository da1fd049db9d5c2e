use std::time::Instant;

use crate::config::{
    DEFAULT_COLUMNS, DEFAULT_ROWS, DEFAULT_UPDATES_PER_SECOND, GRID_SIZES,
    MAX_UPDATES_PER_SECOND, MIN_UPDATES_PER_SECOND, RANDOM_DENSITY,
};
use crate::domain::{Algorithm, GameError, LifeGrid, Result};

/// LifeSession orchestrates a Life simulation for a front-end.
/// This is the application layer that coordinates domain logic.
#[derive(Clone, Debug)]
pub struct LifeSession {
    pub grid: LifeGrid,
    pub algorithm: Algorithm,
    pub is_running: bool,
    pub generation: u64,
    pub update_timer: f32,
    pub updates_per_second: f32,
    pub last_evolution_time_ms: f32, // Evolution performance metric
    pub last_changed_cells: usize,
}

impl LifeSession {
    /// Create new session with given grid dimensions
    pub fn new(rows: usize, columns: usize) -> Result<Self> {
        Ok(Self {
            grid: LifeGrid::new(rows, columns)?,
            algorithm: Algorithm::default(),
            is_running: false,
            generation: 0,
            update_timer: 0.0,
            updates_per_second: DEFAULT_UPDATES_PER_SECOND,
            last_evolution_time_ms: 0.0,
            last_changed_cells: 0,
        })
    }

    /// Session on the default board size
    pub fn with_default_size() -> Result<Self> {
        Self::new(DEFAULT_ROWS, DEFAULT_COLUMNS)
    }

    /// Resize to one of the `GRID_SIZES` presets, returning its label
    pub fn resize_to_preset(&mut self, index: usize) -> Result<&'static str> {
        let &(rows, columns, label) = GRID_SIZES
            .get(index)
            .ok_or(GameError::UnknownPreset(index))?;
        self.resize_grid(rows, columns)?;
        Ok(label)
    }

    /// Replace the grid with an empty one of new dimensions.
    /// On error the current grid is kept.
    pub fn resize_grid(&mut self, rows: usize, columns: usize) -> Result<()> {
        self.grid = LifeGrid::new(rows, columns)?;
        self.generation = 0;
        self.is_running = false;
        Ok(())
    }

    pub fn set_algorithm(&mut self, algorithm: Algorithm) {
        self.algorithm = algorithm;
    }

    /// Toggle play/pause state
    pub fn toggle_running(mut self) -> Self {
        self.is_running = !self.is_running;
        self
    }

    /// Clear grid and reset generation counter
    pub fn clear(mut self) -> Self {
        self.grid.clear();
        self.generation = 0;
        self.is_running = false;
        self
    }

    /// Randomize grid and reset generation counter
    pub fn randomize(mut self) -> Self {
        self.grid.randomize(RANDOM_DENSITY);
        self.generation = 0;
        self.is_running = false;
        self
    }

    /// Adjust simulation speed
    pub fn adjust_speed(mut self, delta: f32) -> Self {
        self.updates_per_second = (self.updates_per_second + delta)
            .clamp(MIN_UPDATES_PER_SECOND, MAX_UPDATES_PER_SECOND);
        self
    }

    /// Flip one cell from raw (possibly off-grid) coordinates.
    /// Ignored while the simulation runs.
    pub fn touch(&mut self, row: isize, column: isize) {
        if !self.is_running {
            self.grid.toggle_cell(row, column);
        }
    }

    /// Advance exactly one generation, running or not
    pub fn step(&mut self) {
        let start = Instant::now();
        self.last_changed_cells = self.algorithm.step(&mut self.grid);
        self.last_evolution_time_ms = start.elapsed().as_secs_f32() * 1000.0;
        self.generation += 1;
    }

    /// Update simulation by one frame
    pub fn tick(mut self, delta_time: f32) -> Self {
        if !self.is_running {
            return self;
        }

        self.update_timer += delta_time;
        let update_interval = 1.0 / self.updates_per_second;

        if self.update_timer >= update_interval {
            self.step();
            self.update_timer = 0.0;
        }

        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::presets;

    fn blinker_session() -> LifeSession {
        let mut session = LifeSession::new(5, 5).unwrap();
        presets::blinker().place_on(&mut session.grid, 1, 1);
        session
    }

    #[test]
    fn test_new_rejects_empty_grid() {
        assert!(LifeSession::new(0, 3).is_err());
    }

    #[test]
    fn test_tick_paused_does_nothing() {
        let session = blinker_session();
        let before = session.grid.clone();

        let session = session.tick(10.0);
        assert_eq!(session.generation, 0);
        assert_eq!(session.grid, before);
    }

    #[test]
    fn test_tick_waits_for_interval() {
        let session = blinker_session().toggle_running();
        assert!(session.is_running);

        let session = session.tick(0.05);
        assert_eq!(session.generation, 0);

        let session = session.tick(0.06);
        assert_eq!(session.generation, 1);
        assert_eq!(session.last_changed_cells, 4);
        assert_eq!(session.update_timer, 0.0);
    }

    #[test]
    fn test_step_and_algorithm() {
        let mut session = blinker_session();
        session.set_algorithm(Algorithm::IncrementalParallel);
        session.step();
        session.step();

        let mut expected = LifeGrid::new(5, 5).unwrap();
        presets::blinker().place_on(&mut expected, 1, 1);
        assert_eq!(session.grid, expected);
        assert_eq!(session.generation, 2);
    }

    #[test]
    fn test_touch_ignored_while_running() {
        let mut session = LifeSession::new(3, 3).unwrap();
        session.touch(1, 1);
        assert_eq!(session.grid.population(), 1);

        let mut session = session.toggle_running();
        session.touch(0, 0);
        assert_eq!(session.grid.population(), 1);
    }

    #[test]
    fn test_clear_resets() {
        let mut session = blinker_session().toggle_running();
        session.step();
        let session = session.clear();

        assert_eq!(session.grid.population(), 0);
        assert_eq!(session.generation, 0);
        assert!(!session.is_running);
    }

    #[test]
    fn test_randomize_resets_generation() {
        let mut session = LifeSession::new(30, 30).unwrap();
        session.step();
        let session = session.randomize();
        assert_eq!(session.generation, 0);
        assert!(session.grid.neighbour_counts_consistent());
    }

    #[test]
    fn test_speed_is_clamped() {
        let session = LifeSession::new(2, 2).unwrap().adjust_speed(100.0);
        assert_eq!(session.updates_per_second, MAX_UPDATES_PER_SECOND);

        let session = session.adjust_speed(-100.0);
        assert_eq!(session.updates_per_second, MIN_UPDATES_PER_SECOND);
    }

    #[test]
    fn test_default_size() {
        let session = LifeSession::with_default_size().unwrap();
        assert_eq!(session.grid.dimensions(), (DEFAULT_ROWS, DEFAULT_COLUMNS));
    }

    #[test]
    fn test_resize_to_preset() {
        let mut session = blinker_session();
        assert_eq!(session.resize_to_preset(1), Ok("50×50"));
        assert_eq!(session.grid.dimensions(), (50, 50));
        assert_eq!(session.grid.population(), 0);

        assert_eq!(
            session.resize_to_preset(GRID_SIZES.len()),
            Err(GameError::UnknownPreset(GRID_SIZES.len()))
        );
        assert_eq!(session.grid.dimensions(), (50, 50));
    }

    #[test]
    fn test_resize_keeps_grid_on_error() {
        let mut session = blinker_session();
        assert!(session.resize_grid(0, 0).is_err());
        assert_eq!(session.grid.dimensions(), (5, 5));

        session.resize_grid(8, 9).unwrap();
        assert_eq!(session.grid.dimensions(), (8, 9));
        assert_eq!(session.grid.population(), 0);
    }
}
